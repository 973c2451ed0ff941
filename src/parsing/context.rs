//! Per-invocation parse state shared by both export parsers.

use tracing::{debug, warn};

use crate::config::{ParseConfig, RosterPolicy};
use crate::core::processor::cap_events;
use crate::error::KakaopackError;
use crate::event::{Conversation, Event, MessageEvent};

use super::dates::DateMarkerEmitter;
use super::sender::{Roster, SenderResolver};

/// Mutable state of a single parse. Built at the start of a call and
/// consumed by [`finish`](ParseContext::finish).
#[derive(Debug)]
pub struct ParseContext {
    resolver: SenderResolver,
    dates: DateMarkerEmitter,
    events: Vec<Event>,
    roster: Roster,
}

impl ParseContext {
    pub fn new(other_party: impl Into<String>) -> Self {
        let resolver = SenderResolver::new(other_party);
        debug!(other_party = resolver.other_party(), "resolved other party");
        Self {
            resolver,
            dates: DateMarkerEmitter::new(),
            events: Vec::new(),
            roster: Roster::new(),
        }
    }

    /// Appends a day separator unconditionally.
    pub fn push_system(&mut self, text: impl Into<String>) {
        self.events.push(Event::system(text));
    }

    /// Appends a day separator only if `key` starts a new date run.
    pub fn mark_date(&mut self, key: &str, label: impl FnOnce() -> String) {
        if self.dates.observe(key) {
            self.push_system(label());
        }
    }

    /// Classifies `author` and appends a message.
    pub fn push_message(&mut self, author: &str, text: impl Into<String>, time_label: String) {
        self.roster.record(author);
        let sender = self.resolver.classify(author);
        self.events.push(Event::Message(MessageEvent {
            sender,
            sender_name: author.to_string(),
            text: text.into(),
            time_label,
        }));
    }

    /// Appends `line` to the most recent event if it is a message.
    ///
    /// Returns `false` (and drops the line) otherwise.
    pub fn continue_message(&mut self, line: &str) -> bool {
        match self.events.last_mut() {
            Some(Event::Message(msg)) => {
                msg.text.push('\n');
                msg.text.push_str(line);
                true
            }
            _ => false,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Applies the roster policy and the event cap.
    pub fn finish(self, config: &ParseConfig) -> Result<Conversation, KakaopackError> {
        if self.roster.len() > 2 {
            match config.roster_policy {
                RosterPolicy::Reject => {
                    return Err(KakaopackError::too_many_participants(self.roster.names()));
                }
                RosterPolicy::Collapse => {
                    warn!(
                        participants = self.roster.len(),
                        "more than two authors; extra authors are classified as me"
                    );
                }
            }
        }

        let events = match config.max_events {
            Some(max) => cap_events(self.events, max),
            None => self.events,
        };

        Ok(Conversation {
            events,
            other_party: self.resolver.other_party().to_string(),
            roster: self.roster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Sender;

    #[test]
    fn test_continuation_requires_trailing_message() {
        let mut ctx = ParseContext::new("지수");
        assert!(!ctx.continue_message("orphan"));

        ctx.push_system("2024년 3월 1일 금요일");
        assert!(!ctx.continue_message("after banner"));

        ctx.push_message("지수", "첫 줄", "2024-03-01 09:00".to_string());
        assert!(ctx.continue_message("둘째 줄"));
        assert_eq!(ctx.events().last().unwrap().text(), "첫 줄\n둘째 줄");
    }

    #[test]
    fn test_mark_date_emits_once_per_run() {
        let mut ctx = ParseContext::new("지수");
        ctx.mark_date("2024-03-01", || "A".to_string());
        ctx.mark_date("2024-03-01", || "B".to_string());
        ctx.mark_date("2024-03-02", || "C".to_string());

        let texts: Vec<&str> = ctx.events().iter().map(Event::text).collect();
        assert_eq!(texts, vec!["A", "C"]);
    }

    #[test]
    fn test_finish_collapses_extra_authors() {
        let mut ctx = ParseContext::new("지수");
        ctx.push_message("지수", "a", String::new());
        ctx.push_message("민호", "b", String::new());
        ctx.push_message("서연", "c", String::new());

        let conv = ctx.finish(&ParseConfig::default()).unwrap();
        assert_eq!(conv.roster.len(), 3);
        assert_eq!(conv.events[2].sender(), Some(Sender::Me));
    }

    #[test]
    fn test_finish_rejects_extra_authors() {
        let mut ctx = ParseContext::new("지수");
        ctx.push_message("지수", "a", String::new());
        ctx.push_message("민호", "b", String::new());
        ctx.push_message("서연", "c", String::new());

        let config = ParseConfig::new().with_roster_policy(RosterPolicy::Reject);
        let err = ctx.finish(&config).unwrap_err();
        assert!(err.is_roster());
    }

    #[test]
    fn test_finish_applies_cap() {
        let mut ctx = ParseContext::new("지수");
        for i in 0..5 {
            ctx.push_message("지수", i.to_string(), String::new());
        }

        let conv = ctx.finish(&ParseConfig::new().with_max_events(Some(2))).unwrap();
        let texts: Vec<&str> = conv.events.iter().map(Event::text).collect();
        assert_eq!(texts, vec!["3", "4"]);
        assert_eq!(conv.roster.participants()[0].message_count, 5);
    }
}
