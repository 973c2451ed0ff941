//! # kakaopack
//!
//! A Rust library for turning KakaoTalk chat exports into an ordered
//! sequence of conversation events.
//!
//! ## Overview
//!
//! KakaoTalk exports a one-to-one conversation in two shapes:
//! - **Text**: a plain-text dump with `[name] [오후 1:05] message` lines and
//!   `--------------- 2024년 3월 1일 금요일 ---------------` day banners
//! - **CSV**: `Date,User,Message` rows with quoted fields, `""` escaping and
//!   raw line breaks inside messages
//!
//! Both parse into the same [`Event`] stream: day markers
//! ([`Event::System`]) and messages attributed to either [`Sender::Me`] or
//! [`Sender::Other`], with a `YYYY-MM-DD HH:mm` time label. Malformed input
//! never fails a parse; unrecognized lines and broken CSV rows are folded
//! or skipped.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kakaopack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Detect the format and parse
//!     let conversation = parse_file("KakaoTalk_Chat_지수_2024-03-02-10-00-00.csv")?;
//!     println!("chat with {}", conversation.other_party);
//!
//!     // Write network payloads
//!     write_json(&conversation.events, "payload.json", &OutputConfig::new())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Parsing from memory
//!
//! ```rust
//! use kakaopack::parser::Parser;
//! use kakaopack::parsers::KakaoTextParser;
//!
//! let export = "지수 님과 카카오톡 대화\n[지수] [오전 9:15] 안녕!\n[나] [오전 9:16] 응";
//! let events = KakaoTextParser::new().parse_str(export, None)?;
//! assert_eq!(events.len(), 2);
//! assert_eq!(events[1].time_label(), "09:16");
//! # Ok::<(), kakaopack::KakaopackError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`Parser`](parser::Parser) trait, [`ExportFormat`](parser::ExportFormat),
//!   [`create_parser`](parser::create_parser), [`parse_file`](parser::parse_file)
//! - [`parsers`] - [`KakaoTextParser`](parsers::KakaoTextParser), [`KakaoCsvParser`](parsers::KakaoCsvParser)
//! - [`parsing`] - Shared helpers: time normalization, sender resolution,
//!   day markers, filename inference
//! - [`event`] - [`Event`], [`Conversation`], [`Payload`]
//! - [`config`] - [`ParseConfig`](config::ParseConfig), [`RosterPolicy`](config::RosterPolicy)
//! - [`core`] - Event capping, statistics and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`error`] - [`KakaopackError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod format;
pub mod parser;
pub mod parsers;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{KakaopackError, Result};
pub use event::{Conversation, Event, MessageEvent, Payload, PayloadSender, Sender};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use kakaopack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{KakaopackError, Result};
    pub use crate::event::{Conversation, Event, MessageEvent, Payload, Sender};

    pub use crate::parser::{
        ExportFormat, Parser, create_parser, create_parser_with_config, parse_file,
    };
    pub use crate::parsers::{KakaoCsvParser, KakaoTextParser};

    pub use crate::config::{ParseConfig, RosterPolicy};

    pub use crate::core::models::OutputConfig;
    pub use crate::core::processor::{ConversationStats, cap_events};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;
}
