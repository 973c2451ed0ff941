//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`SourceArg`] - Export format selection, including auto-detection
//!
//! The argument struct converts itself into the library's
//! [`ParseConfig`] and [`OutputConfig`], so `main` only wires them
//! together.
//!
//! ```rust
//! use clap::Parser;
//! use kakaopack::cli::Args;
//!
//! let args = Args::try_parse_from(["kakaopack", "chat.csv", "--no-cap"]).unwrap();
//! assert_eq!(args.parse_config().max_events, None);
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAX_EVENTS, ParseConfig, RosterPolicy};
use crate::core::models::OutputConfig;
use crate::format::OutputFormat;
use crate::parser::ExportFormat;

const DEFAULT_OUTPUT_STEM: &str = "kakao_chat";
const DEFAULT_OUTPUT: &str = "kakao_chat.json";

/// Convert KakaoTalk chat exports (TXT or CSV) into ordered conversation
/// payloads.
#[derive(Parser, Debug, Clone)]
#[command(name = "kakaopack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    kakaopack KakaoTalk_Chat_지수_2024-03-02-10-00-00.csv
    kakaopack talk.txt -o payload.jsonl -f jsonl
    kakaopack export.csv --source csv --other-name 지수 --no-cap
    kakaopack group.txt --strict-roster -v")]
pub struct Args {
    /// Path to the export file
    pub input: String,

    /// Export format of the input
    #[arg(short, long, value_enum, default_value = "auto")]
    pub source: SourceArg,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Other party's display name, used when the export doesn't name them
    #[arg(long, value_name = "NAME")]
    pub other_name: Option<String>,

    /// Keep only the N most recent events
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_EVENTS)]
    pub max_events: usize,

    /// Keep all events
    #[arg(long, conflicts_with = "max_events")]
    pub no_cap: bool,

    /// Fail if the export has more than two authors
    #[arg(long)]
    pub strict_roster: bool,

    /// Include author display names in output
    #[arg(long)]
    pub names: bool,

    /// Leave day-separator events out of the output
    #[arg(long)]
    pub no_system: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parser settings selected by the flags.
    pub fn parse_config(&self) -> ParseConfig {
        let mut config = ParseConfig::new();
        if let Some(name) = &self.other_name {
            config = config.with_default_other_party(name.clone());
        }
        config = if self.no_cap {
            config.without_cap()
        } else {
            config.with_max_events(Some(self.max_events))
        };
        if self.strict_roster {
            config = config.with_roster_policy(RosterPolicy::Reject);
        }
        config
    }

    /// Writer settings selected by the flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.names {
            config = config.with_names();
        }
        if self.no_system {
            config = config.without_system();
        }
        config
    }

    /// Output path, with the default file name's extension following `--format`.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        format!("{DEFAULT_OUTPUT_STEM}.{}", self.format.extension())
    }
}

/// Input format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceArg {
    /// Detect from extension, then from content
    #[default]
    Auto,

    /// Plain-text export
    #[value(alias = "txt")]
    #[serde(alias = "txt")]
    Text,

    /// CSV export
    Csv,
}

impl std::fmt::Display for SourceArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceArg::Auto => write!(f, "auto"),
            SourceArg::Text => write!(f, "Text"),
            SourceArg::Csv => write!(f, "CSV"),
        }
    }
}

// `None` means detect.
impl From<SourceArg> for Option<ExportFormat> {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Auto => None,
            SourceArg::Text => Some(ExportFormat::Text),
            SourceArg::Csv => Some(ExportFormat::Csv),
        }
    }
}
