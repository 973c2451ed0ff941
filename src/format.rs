//! Output formats for parsed conversations.
//!
//! [`OutputFormat`] picks one of the writers in [`core::output`](crate::core::output).
//! It has no CLI dependency, so library users can select a writer from a
//! config value or a file extension.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> kakaopack::Result<()> {
//! use kakaopack::format::{OutputFormat, to_format_string};
//! use kakaopack::core::models::OutputConfig;
//! use kakaopack::{Event, Sender};
//!
//! let events = vec![Event::message(Sender::Other, "지수", "안녕!", "2024-03-01 09:15")];
//!
//! let format = OutputFormat::from_path("payload.jsonl")?;
//! let out = to_format_string(&events, format, &OutputConfig::new())?;
//! assert!(out.contains(r#""sender":"OTHER""#));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::KakaopackError;
use crate::event::Event;

/// Serialization format for event payloads.
///
/// - [`Json`](OutputFormat::Json) - Array of payloads, the shape upload endpoints take
/// - [`Jsonl`](OutputFormat::Jsonl) - One payload per line
/// - [`Csv`](OutputFormat::Csv) - `Sender;Time;Text` table for spreadsheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    #[serde(alias = "ndjson")]
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    Jsonl,
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use kakaopack::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Jsonl, OutputFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KakaopackError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(KakaopackError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: json, jsonl, csv"),
            )),
        }
    }

    /// Error for a format whose writer feature is compiled out.
    #[cfg(not(all(feature = "json-output", feature = "csv-output")))]
    fn disabled(self) -> KakaopackError {
        let feature = match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        };
        KakaopackError::invalid_format(
            "output",
            format!("Output format {self} requires the '{feature}' feature to be enabled"),
        )
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = KakaopackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(KakaopackError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Writes events to `path` in the given format.
///
/// # Errors
///
/// Returns an error if the writer's feature is disabled or the file
/// cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    events: &[Event],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), KakaopackError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(events, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(events, path, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(events, path, config),
        #[cfg(not(all(feature = "json-output", feature = "csv-output")))]
        _ => Err(format.disabled()),
    }
}

/// Serializes events to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(
    events: &[Event],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, KakaopackError> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(events, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(events, config),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(events, config),
        #[cfg(not(all(feature = "json-output", feature = "csv-output")))]
        _ => Err(format.disabled()),
    }
}
