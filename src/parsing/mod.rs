//! Shared parsing utilities for both export formats.
//!
//! These helpers are used by the plain-text and CSV parsers alike:
//! time normalization, sender classification, day markers, filename
//! inference and the per-parse [`ParseContext`].

pub mod context;
pub mod dates;
pub mod filename;
pub mod sender;
pub mod time;

// Re-export commonly used items
pub use context::ParseContext;
pub use dates::{
    DateMarkerEmitter, KOREAN_WEEKDAYS, banner_date_key, date_key, korean_date_label,
    parse_banner_date,
};
pub use filename::other_party_from_filename;
pub use sender::{
    Participant, ParticipantId, Roster, SenderResolver, TwoPartyView, normalize_name,
};
pub use time::{Meridiem, normalize_time, to_24_hour};
