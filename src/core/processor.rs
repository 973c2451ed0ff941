//! Post-processing of parsed event sequences.

use tracing::debug;

use crate::event::{Event, Sender};

/// Keeps only the `max` most recent events, preserving their order.
///
/// # Example
///
/// ```
/// use kakaopack::Event;
/// use kakaopack::core::cap_events;
///
/// let events: Vec<Event> = (0..5).map(|i| Event::system(i.to_string())).collect();
/// let capped = cap_events(events, 2);
/// assert_eq!(capped, vec![Event::system("3"), Event::system("4")]);
/// ```
pub fn cap_events(mut events: Vec<Event>, max: usize) -> Vec<Event> {
    if events.len() > max {
        let dropped = events.len() - max;
        debug!(dropped, kept = max, "truncating to most recent events");
        events.drain(..dropped);
    }
    events
}

/// Event counts for a parsed conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversationStats {
    pub system_events: usize,
    pub my_messages: usize,
    pub other_messages: usize,
}

impl ConversationStats {
    pub fn from_events(events: &[Event]) -> Self {
        let mut stats = Self::default();
        for event in events {
            match event.sender() {
                None => stats.system_events += 1,
                Some(Sender::Me) => stats.my_messages += 1,
                Some(Sender::Other) => stats.other_messages += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.system_events + self.messages()
    }

    pub fn messages(&self) -> usize {
        self.my_messages + self.other_messages
    }

    /// Share of messages written by the other party, in percent.
    pub fn other_share(&self) -> f64 {
        if self.messages() == 0 {
            return 0.0;
        }
        self.other_messages as f64 / self.messages() as f64 * 100.0
    }
}
