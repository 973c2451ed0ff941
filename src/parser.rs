//! Unified parser trait for KakaoTalk exports.
//!
//! KakaoTalk produces two export shapes: the plain-text conversation dump
//! and the CSV export. Both are handled behind the [`Parser`] trait, and
//! [`ExportFormat`] selects between them.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> kakaopack::Result<()> {
//! use kakaopack::parser::{ExportFormat, Parser, create_parser};
//! use std::path::Path;
//!
//! let parser = create_parser(ExportFormat::Csv);
//! let events = parser.parse(Path::new("KakaoTalk_Chat_지수_2024-03-01-10-00-00.csv"))?;
//!
//! for event in &events {
//!     println!("{}", event.text());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Format Detection
//!
//! When the format isn't known up front, [`parse_file`] picks it from the
//! extension and falls back to sniffing the content:
//!
//! ```rust
//! use kakaopack::parser::ExportFormat;
//!
//! let content = "Date,User,Message\n2024-03-01 09:15:00,\"지수\",\"안녕\"\n";
//! assert_eq!(ExportFormat::detect(None, content), ExportFormat::Csv);
//! assert_eq!(ExportFormat::detect(None, "지수 님과 카카오톡 대화"), ExportFormat::Text);
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ParseConfig;
use crate::error::KakaopackError;
use crate::event::{Conversation, Event};
use crate::parsers::{KakaoCsvParser, KakaoTextParser};

static CSV_RECORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},""#).unwrap());

/// KakaoTalk export formats.
///
/// # Example
///
/// ```rust
/// use kakaopack::parser::ExportFormat;
/// use std::str::FromStr;
///
/// assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
///
/// // Aliases are supported
/// assert_eq!(ExportFormat::from_str("txt").unwrap(), ExportFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain-text conversation dump (`.txt`)
    #[serde(alias = "txt")]
    Text,

    /// CSV export with `Date,User,Message` columns (`.csv`)
    Csv,
}

impl ExportFormat {
    /// Returns the file extension KakaoTalk uses for this format.
    pub fn default_extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
        }
    }

    /// Returns all format names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "csv"]
    }

    /// Returns all formats.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Text, ExportFormat::Csv]
    }

    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(ExportFormat::Text),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    /// Guesses the format from the first bytes of the content.
    ///
    /// CSV exports start with the `Date,User,Message` header or directly
    /// with a record; everything else is treated as plain text.
    pub fn sniff(content: &str) -> ExportFormat {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if content.starts_with("Date,User,Message") || CSV_RECORD_START.is_match(content) {
            ExportFormat::Csv
        } else {
            ExportFormat::Text
        }
    }

    /// Extension first, content second.
    pub fn detect(path: Option<&Path>, content: &str) -> ExportFormat {
        let format = path
            .and_then(ExportFormat::from_path)
            .unwrap_or_else(|| ExportFormat::sniff(content));
        debug!(%format, "detected export format");
        format
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "Text"),
            ExportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = KakaopackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(KakaopackError::invalid_format(
                "export",
                format!(
                    "Unknown export format: '{}'. Expected one of: {}",
                    s,
                    ExportFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Unified trait for parsing KakaoTalk exports.
///
/// Parsers must implement:
/// - [`name`](Parser::name) - Parser identifier
/// - [`format`](Parser::format) - Export format this parser handles
/// - [`parse_conversation`](Parser::parse_conversation) - Full parse result
///
/// [`parse_str`](Parser::parse_str) and [`parse`](Parser::parse) are
/// provided on top of it.
///
/// Malformed lines and records never fail a parse; they are folded into
/// the previous message or skipped. Errors come from IO and from
/// [`RosterPolicy::Reject`](crate::config::RosterPolicy::Reject).
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kakaopack::parser::Parser;
    /// use kakaopack::parsers::KakaoTextParser;
    ///
    /// let parser = KakaoTextParser::new();
    /// assert_eq!(parser.name(), "KakaoTalk Text");
    /// ```
    fn name(&self) -> &'static str;

    /// Returns the export format this parser handles.
    fn format(&self) -> ExportFormat;

    /// Parses export content into a [`Conversation`].
    ///
    /// # Arguments
    ///
    /// * `content` - Raw export content
    /// * `filename` - Original file name, used to infer the other party
    ///   where the format encodes it there
    ///
    /// # Errors
    ///
    /// Returns [`KakaopackError::TooManyParticipants`] if the configured
    /// roster policy rejects the conversation.
    fn parse_conversation(
        &self,
        content: &str,
        filename: Option<&str>,
    ) -> Result<Conversation, KakaopackError>;

    /// Parses export content and returns only the ordered events.
    fn parse_str(&self, content: &str, filename: Option<&str>) -> Result<Vec<Event>, KakaopackError> {
        self.parse_conversation(content, filename)
            .map(|conversation| conversation.events)
    }

    /// Parses an export file and returns the ordered events.
    ///
    /// # Errors
    ///
    /// Returns [`KakaopackError::Read`] if the file cannot be read.
    fn parse(&self, path: &Path) -> Result<Vec<Event>, KakaopackError> {
        let content = fs::read_to_string(path).map_err(|e| KakaopackError::read(path, e))?;
        self.parse_str(&content, path.to_str())
    }
}

/// Creates a parser for the specified format with default configuration.
///
/// # Example
///
/// ```rust
/// use kakaopack::parser::{ExportFormat, create_parser};
///
/// let parser = create_parser(ExportFormat::Csv);
/// assert_eq!(parser.name(), "KakaoTalk CSV");
/// ```
pub fn create_parser(format: ExportFormat) -> Box<dyn Parser> {
    create_parser_with_config(format, ParseConfig::default())
}

/// Creates a parser for the specified format.
pub fn create_parser_with_config(format: ExportFormat, config: ParseConfig) -> Box<dyn Parser> {
    match format {
        ExportFormat::Text => Box::new(KakaoTextParser::with_config(config)),
        ExportFormat::Csv => Box::new(KakaoCsvParser::with_config(config)),
    }
}

/// Reads `path`, detects its format and parses it with default settings.
///
/// # Example
///
/// ```rust,no_run
/// # fn main() -> kakaopack::Result<()> {
/// let conversation = kakaopack::parser::parse_file("KakaoTalk_Chat_지수.txt")?;
/// println!("{} events with {}", conversation.events.len(), conversation.other_party);
/// # Ok(())
/// # }
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Conversation, KakaopackError> {
    parse_file_with_config(path, None, ParseConfig::default())
}

/// Like [`parse_file`], with an explicit format (or `None` to detect) and
/// configuration.
pub fn parse_file_with_config(
    path: impl AsRef<Path>,
    format: Option<ExportFormat>,
    config: ParseConfig,
) -> Result<Conversation, KakaopackError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| KakaopackError::read(path, e))?;
    let format = format.unwrap_or_else(|| ExportFormat::detect(Some(path), &content));
    create_parser_with_config(format, config).parse_conversation(&content, path.to_str())
}
