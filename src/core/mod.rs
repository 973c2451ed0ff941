//! Post-processing and output for parsed conversations.
//!
//! This module contains:
//! - [`models`] - Output configuration
//! - [`processor`] - Event capping and statistics
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use kakaopack::core::{
//!     OutputConfig, ConversationStats, cap_events,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use models::OutputConfig;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

pub use processor::{ConversationStats, cap_events};
