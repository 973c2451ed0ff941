//! Conversation events produced by the export parsers.
//!
//! A parse yields an ordered sequence of [`Event`]s: day markers
//! ([`Event::System`]) interleaved with attributed messages
//! ([`Event::Message`]). Insertion order is the conversation order.
//!
//! # Examples
//!
//! ```
//! use kakaopack::{Event, Sender};
//!
//! let events = vec![
//!     Event::system("2024년 3월 1일 금요일"),
//!     Event::message(Sender::Other, "지수", "안녕!", "2024-03-01 09:15"),
//! ];
//!
//! assert!(events[0].is_system());
//! assert_eq!(events[1].text(), "안녕!");
//! ```
//!
//! ## Network payloads
//!
//! Downstream services take a flat `{ sender, text, timeLabel }` object,
//! where `sender` is `SYSTEM`, `USER` or `OTHER`:
//!
//! ```
//! use kakaopack::{Event, Sender};
//!
//! let payload = Event::message(Sender::Me, "나", "응", "2024-03-01 09:16").to_payload();
//! let json = serde_json::to_string(&payload)?;
//! assert_eq!(json, r#"{"sender":"USER","text":"응","timeLabel":"2024-03-01 09:16"}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::Roster;

/// Which side of a two-party conversation authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The log owner (and any author that isn't the other party).
    Me,
    /// The other party, identified by display name.
    Other,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::Me => write!(f, "me"),
            Sender::Other => write!(f, "other"),
        }
    }
}

/// A single attributed, timestamped message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    /// Role of the author.
    pub sender: Sender,

    /// Author's display name exactly as it appeared in the export.
    pub sender_name: String,

    /// Message body. May contain newlines.
    pub text: String,

    /// Empty, `"HH:mm"`, or `"YYYY-MM-DD HH:mm"`.
    pub time_label: String,
}

/// One entry of a reconstructed conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    /// Day separator. `text` is a human-readable date.
    System {
        /// The date text, e.g. `"2024년 3월 1일 금요일"`.
        text: String,
    },
    /// An attributed message.
    Message(MessageEvent),
}

impl Event {
    /// Creates a day-separator event.
    pub fn system(text: impl Into<String>) -> Self {
        Event::System { text: text.into() }
    }

    /// Creates a message event.
    pub fn message(
        sender: Sender,
        sender_name: impl Into<String>,
        text: impl Into<String>,
        time_label: impl Into<String>,
    ) -> Self {
        Event::Message(MessageEvent {
            sender,
            sender_name: sender_name.into(),
            text: text.into(),
            time_label: time_label.into(),
        })
    }

    /// Returns `true` for day-separator events.
    pub fn is_system(&self) -> bool {
        matches!(self, Event::System { .. })
    }

    /// Returns `true` for message events.
    pub fn is_message(&self) -> bool {
        matches!(self, Event::Message(_))
    }

    /// Returns the event text (date text or message body).
    pub fn text(&self) -> &str {
        match self {
            Event::System { text } => text,
            Event::Message(msg) => &msg.text,
        }
    }

    /// Returns the time label; system events have none.
    pub fn time_label(&self) -> &str {
        match self {
            Event::System { .. } => "",
            Event::Message(msg) => &msg.time_label,
        }
    }

    /// Returns the message, if this is a message event.
    pub fn as_message(&self) -> Option<&MessageEvent> {
        match self {
            Event::Message(msg) => Some(msg),
            Event::System { .. } => None,
        }
    }

    /// Returns the author role, if this is a message event.
    pub fn sender(&self) -> Option<Sender> {
        self.as_message().map(|msg| msg.sender)
    }

    /// Converts the event into the flat network payload shape.
    pub fn to_payload(&self) -> Payload {
        match self {
            Event::System { text } => Payload {
                sender: PayloadSender::System,
                text: text.clone(),
                time_label: String::new(),
            },
            Event::Message(msg) => Payload {
                sender: match msg.sender {
                    Sender::Me => PayloadSender::User,
                    Sender::Other => PayloadSender::Other,
                },
                text: msg.text.clone(),
                time_label: msg.time_label.clone(),
            },
        }
    }
}

/// Sender tag of the network payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayloadSender {
    System,
    User,
    Other,
}

impl PayloadSender {
    /// The wire name: `SYSTEM`, `USER` or `OTHER`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadSender::System => "SYSTEM",
            PayloadSender::User => "USER",
            PayloadSender::Other => "OTHER",
        }
    }
}

/// Flat event representation sent to backend services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub sender: PayloadSender,
    pub text: String,
    pub time_label: String,
}

/// Everything a single parse produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    /// Ordered events, already truncated to the configured cap.
    pub events: Vec<Event>,

    /// The other-party name the parse resolved, before normalization.
    pub other_party: String,

    /// Every distinct author seen in the export, including those whose
    /// messages were later truncated away.
    pub roster: Roster,
}

impl Conversation {
    /// Number of message events.
    pub fn message_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_message()).count()
    }

    /// Number of day-separator events.
    pub fn system_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_system()).count()
    }

    /// Converts all events into network payloads.
    pub fn payloads(&self) -> Vec<Payload> {
        self.events.iter().map(Event::to_payload).collect()
    }
}
