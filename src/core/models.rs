//! Output configuration shared by all writers.

use serde::Serialize;

use crate::event::{Event, Payload};

/// Controls what the output writers include.
///
/// Every record carries `sender`, `text` and `timeLabel`; the flags below
/// add or remove the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Add the author's display name (`senderName`) to message records
    pub include_names: bool,
    /// Emit day-separator records (default: true)
    pub include_system: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_names: false,
            include_system: true,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_names(mut self) -> Self {
        self.include_names = true;
        self
    }

    #[must_use]
    pub fn without_system(mut self) -> Self {
        self.include_system = false;
        self
    }

    /// Returns `true` if `event` should be written.
    pub(crate) fn keeps(&self, event: &Event) -> bool {
        self.include_system || !event.is_system()
    }
}

/// Payload plus the optional fields enabled in [`OutputConfig`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OutputRecord {
    #[serde(flatten)]
    pub payload: Payload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
}

impl OutputRecord {
    pub fn from_event(event: &Event, config: &OutputConfig) -> Self {
        Self {
            payload: event.to_payload(),
            sender_name: if config.include_names {
                event.as_message().map(|m| m.sender_name.clone())
            } else {
                None
            },
        }
    }
}

/// Records for all events kept by `config`, in order.
pub(crate) fn output_records(events: &[Event], config: &OutputConfig) -> Vec<OutputRecord> {
    events
        .iter()
        .filter(|e| config.keeps(e))
        .map(|e| OutputRecord::from_event(e, config))
        .collect()
}
