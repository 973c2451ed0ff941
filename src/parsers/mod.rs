//! KakaoTalk export parsers.
//!
//! Each parser implements the [`Parser`](crate::parser::Parser) trait.
//!
//! # Available Parsers
//!
//! - [`KakaoTextParser`] - Parses the plain-text conversation dump
//! - [`KakaoCsvParser`] - Parses the CSV export
//!
//! # Example
//!
//! ```rust
//! use kakaopack::parser::Parser;
//! use kakaopack::parsers::KakaoTextParser;
//!
//! let parser = KakaoTextParser::new();
//! let events = parser.parse_str("[지수] [오전 9:15] 안녕!", None)?;
//! assert_eq!(events.len(), 1);
//! # Ok::<(), kakaopack::KakaopackError>(())
//! ```

pub mod csv;
mod text;

pub use csv::{KakaoCsvParser, RawRecord, RecordScanner};
pub use text::KakaoTextParser;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ExportFormat, Parser};

    #[test]
    fn test_parser_names() {
        assert_eq!(KakaoTextParser::new().name(), "KakaoTalk Text");
        assert_eq!(KakaoCsvParser::new().name(), "KakaoTalk CSV");
    }

    #[test]
    fn test_parser_formats() {
        assert_eq!(KakaoTextParser::default().format(), ExportFormat::Text);
        assert_eq!(KakaoCsvParser::default().format(), ExportFormat::Csv);
    }

    #[test]
    fn test_parsers_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KakaoTextParser>();
        assert_send_sync::<KakaoCsvParser>();
    }
}
