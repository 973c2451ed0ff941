//! Sender classification and the participant roster.
//!
//! KakaoTalk exports identify authors only by display name. A parse resolves
//! one "other party" name up front and classifies every author against it.
//! Names are compared in NFC form because exports made on macOS store Hangul
//! decomposed (NFD) while Windows and mobile exports store it composed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::event::Sender;

/// Returns the canonical composition (NFC) of `name`.
pub fn normalize_name(name: &str) -> String {
    name.nfc().collect()
}

/// Classifies authors as [`Sender::Me`] or [`Sender::Other`].
#[derive(Debug, Clone)]
pub struct SenderResolver {
    other_party: String,
    normalized: String,
}

impl SenderResolver {
    /// Creates a resolver for the given other-party name.
    pub fn new(other_party: impl Into<String>) -> Self {
        let other_party = other_party.into();
        let normalized = normalize_name(&other_party);
        Self {
            other_party,
            normalized,
        }
    }

    /// The other-party name as resolved from the export.
    pub fn other_party(&self) -> &str {
        &self.other_party
    }

    /// Returns [`Sender::Other`] iff `author` equals the other party after
    /// normalization.
    pub fn classify(&self, author: &str) -> Sender {
        if self.is_other(&normalize_name(author)) {
            Sender::Other
        } else {
            Sender::Me
        }
    }

    fn is_other(&self, normalized_author: &str) -> bool {
        normalized_author == self.normalized
    }
}

/// Stable identifier of a participant within one parse.
///
/// Ids are assigned in order of first appearance, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub usize);

/// A distinct author of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    /// NFC-normalized display name.
    pub name: String,
    /// Messages authored, counted before truncation.
    pub message_count: usize,
}

/// The `Me`/`Other` pairing of a strictly two-party roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoPartyView<'a> {
    pub me: &'a Participant,
    pub other: &'a Participant,
}

/// All distinct authors seen during a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
    by_name: HashMap<String, ParticipantId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one message by `author` and returns their id.
    pub fn record(&mut self, author: &str) -> ParticipantId {
        let name = normalize_name(author);
        if let Some(&id) = self.by_name.get(&name) {
            self.participants[id.0].message_count += 1;
            return id;
        }

        let id = ParticipantId(self.participants.len());
        self.by_name.insert(name.clone(), id);
        self.participants.push(Participant {
            id,
            name,
            message_count: 1,
        });
        id
    }

    /// Number of distinct authors.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participants in order of first appearance.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(id.0)
    }

    /// Looks a participant up by display name (any normalization form).
    pub fn find(&self, name: &str) -> Option<&Participant> {
        let id = self.by_name.get(&normalize_name(name))?;
        self.get(*id)
    }

    /// Normalized names in order of first appearance.
    pub fn names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    /// Returns the two-role view, valid only when exactly two distinct
    /// authors exist and one of them is the resolver's other party.
    pub fn two_party_view(&self, resolver: &SenderResolver) -> Option<TwoPartyView<'_>> {
        let [first, second] = self.participants.as_slice() else {
            return None;
        };

        match (resolver.is_other(&first.name), resolver.is_other(&second.name)) {
            (true, false) => Some(TwoPartyView {
                me: second,
                other: first,
            }),
            (false, true) => Some(TwoPartyView {
                me: first,
                other: second,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "지수" composed vs. decomposed into conjoining jamo
    const JISU_NFC: &str = "지수";
    const JISU_NFD: &str = "\u{110C}\u{1175}\u{1109}\u{116E}";

    #[test]
    fn test_classify_exact_match() {
        let resolver = SenderResolver::new("지수");
        assert_eq!(resolver.classify("지수"), Sender::Other);
        assert_eq!(resolver.classify("민호"), Sender::Me);
    }

    #[test]
    fn test_classify_normalizes_both_sides() {
        assert_ne!(JISU_NFC, JISU_NFD);

        let resolver = SenderResolver::new(JISU_NFD);
        assert_eq!(resolver.classify(JISU_NFC), Sender::Other);

        let resolver = SenderResolver::new(JISU_NFC);
        assert_eq!(resolver.classify(JISU_NFD), Sender::Other);
        assert_eq!(resolver.other_party(), JISU_NFC);
    }

    #[test]
    fn test_default_name_makes_everyone_me() {
        let resolver = SenderResolver::new("상대방");
        assert_eq!(resolver.classify("지수"), Sender::Me);
        assert_eq!(resolver.classify("민호"), Sender::Me);
    }

    #[test]
    fn test_roster_assigns_ids_in_order() {
        let mut roster = Roster::new();
        assert!(roster.is_empty());

        let a = roster.record("지수");
        let b = roster.record("민호");
        let a2 = roster.record(JISU_NFD);

        assert_eq!(a, ParticipantId(0));
        assert_eq!(b, ParticipantId(1));
        assert_eq!(a, a2);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(a).unwrap().message_count, 2);
        assert_eq!(roster.find(JISU_NFD).unwrap().id, a);
        assert_eq!(roster.names(), vec!["지수".to_string(), "민호".to_string()]);
    }

    #[test]
    fn test_two_party_view() {
        let resolver = SenderResolver::new("지수");
        let mut roster = Roster::new();
        roster.record("민호");
        roster.record("지수");

        let view = roster.two_party_view(&resolver).unwrap();
        assert_eq!(view.me.name, "민호");
        assert_eq!(view.other.name, "지수");
    }

    #[test]
    fn test_two_party_view_requires_exactly_two() {
        let resolver = SenderResolver::new("지수");
        let mut roster = Roster::new();
        roster.record("지수");
        assert!(roster.two_party_view(&resolver).is_none());

        roster.record("민호");
        roster.record("서연");
        assert!(roster.two_party_view(&resolver).is_none());
    }

    #[test]
    fn test_two_party_view_requires_other_party_present() {
        let resolver = SenderResolver::new("상대방");
        let mut roster = Roster::new();
        roster.record("지수");
        roster.record("민호");
        assert!(roster.two_party_view(&resolver).is_none());
    }
}
