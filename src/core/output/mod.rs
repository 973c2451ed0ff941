//! Output format writers.
//!
//! All writers emit the network payload shape (`sender`, `text`,
//! `timeLabel`):
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> kakaopack::Result<()> {
//! use kakaopack::core::output::{write_json, to_csv};
//! use kakaopack::core::models::OutputConfig;
//! use kakaopack::{Event, Sender};
//!
//! let events = vec![
//!     Event::system("2024년 3월 1일 금요일"),
//!     Event::message(Sender::Other, "지수", "안녕!", "2024-03-01 09:15"),
//! ];
//!
//! write_json(&events, "conversation.json", &OutputConfig::new())?;
//! let csv_string = to_csv(&events, &OutputConfig::new().with_names())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
