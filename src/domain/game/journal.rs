//! Per-game message journal.
//!
//! The journal is an append-only, insertion-ordered record of every player
//! and banker line in a session. It is never reordered or truncated; prior
//! offers live on only as journal text.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp};

/// Who produced a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Player,
    Banker,
}

/// What kind of line a journal entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Raw player text.
    Text,
    /// A banker line carrying a monetary offer.
    Offer,
    /// A banker line with no offer attached.
    Conversation,
    /// The deal-accepted closing line.
    DealAccepted,
    /// The game-over closing line.
    GameOver,
}

/// One immutable journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: MessageId,
    pub timestamp: Timestamp,
    pub sender: Sender,
    pub text: String,
    pub kind: MessageKind,
}

impl JournalEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(sender: Sender, text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            id: MessageId::new(),
            timestamp: Timestamp::now(),
            sender,
            text: text.into(),
            kind,
        }
    }

    /// Creates a player text entry.
    pub fn player(text: impl Into<String>) -> Self {
        Self::new(Sender::Player, text, MessageKind::Text)
    }

    /// Creates a banker entry of the given kind.
    pub fn banker(text: impl Into<String>, kind: MessageKind) -> Self {
        Self::new(Sender::Banker, text, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_entries_are_text_kind() {
        let entry = JournalEntry::player("hello banker");
        assert_eq!(entry.sender, Sender::Player);
        assert_eq!(entry.kind, MessageKind::Text);
        assert_eq!(entry.text, "hello banker");
    }

    #[test]
    fn banker_entries_carry_their_kind() {
        let entry = JournalEntry::banker("My offer is $100.", MessageKind::Offer);
        assert_eq!(entry.sender, Sender::Banker);
        assert_eq!(entry.kind, MessageKind::Offer);
    }

    #[test]
    fn entries_get_unique_ids() {
        let a = JournalEntry::player("one");
        let b = JournalEntry::player("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn kind_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&MessageKind::DealAccepted).unwrap(),
            "\"deal_accepted\""
        );
        assert_eq!(serde_json::to_string(&Sender::Banker).unwrap(), "\"banker\"");
    }
}
