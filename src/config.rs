//! Configuration types for parsers.
//!
//! Both export parsers share one configuration struct, [`ParseConfig`].
//! It has no CLI framework dependencies and can be (de)serialized with serde.
//!
//! # Example
//!
//! ```rust
//! use kakaopack::config::{ParseConfig, RosterPolicy};
//! use kakaopack::parsers::KakaoCsvParser;
//!
//! let config = ParseConfig::new()
//!     .with_max_events(Some(500))
//!     .with_roster_policy(RosterPolicy::Reject);
//!
//! let parser = KakaoCsvParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Display name used for the other party when neither the header line nor
/// the filename names them.
pub const DEFAULT_OTHER_PARTY: &str = "상대방";

/// Default upper bound on the number of events a parse returns.
pub const DEFAULT_MAX_EVENTS: usize = 1000;

/// What to do when a log has more than two distinct authors.
///
/// Sender classification only knows two roles (`Me` and `Other`), so any
/// third author lands in the `Me` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterPolicy {
    /// Collapse extra authors into `Me` and log a warning.
    #[default]
    Collapse,
    /// Fail the parse with [`KakaopackError::TooManyParticipants`](crate::KakaopackError::TooManyParticipants).
    Reject,
}

/// Configuration for KakaoTalk export parsing.
///
/// # Example
///
/// ```rust
/// use kakaopack::config::ParseConfig;
///
/// let config = ParseConfig::new()
///     .with_default_other_party("친구")
///     .without_cap();
/// assert_eq!(config.max_events, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Name assumed for the other party when the export doesn't say
    /// (default: `"상대방"`)
    pub default_other_party: String,

    /// Keep only the most recent N events; `None` disables truncation
    /// (default: 1000)
    pub max_events: Option<usize>,

    /// Handling of logs with more than two authors (default: collapse)
    pub roster_policy: RosterPolicy,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            default_other_party: DEFAULT_OTHER_PARTY.to_string(),
            max_events: Some(DEFAULT_MAX_EVENTS),
            roster_policy: RosterPolicy::Collapse,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback other-party name.
    #[must_use]
    pub fn with_default_other_party(mut self, name: impl Into<String>) -> Self {
        self.default_other_party = name.into();
        self
    }

    /// Sets the event cap. `None` keeps every event.
    #[must_use]
    pub fn with_max_events(mut self, max: Option<usize>) -> Self {
        self.max_events = max;
        self
    }

    /// Disables truncation.
    #[must_use]
    pub fn without_cap(self) -> Self {
        self.with_max_events(None)
    }

    /// Sets the roster policy.
    #[must_use]
    pub fn with_roster_policy(mut self, policy: RosterPolicy) -> Self {
        self.roster_policy = policy;
        self
    }
}
