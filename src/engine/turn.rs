//! The current match attempt and its recorded outcome.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardRef;

/// Cards revealed in the current, unresolved attempt.
///
/// SmallVec keeps typical group sizes (2-4) off the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    cards: SmallVec<[CardRef; 4]>,
}

impl Turn {
    /// Create an empty turn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards revealed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if no card has been revealed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if a card is already part of this turn.
    #[must_use]
    pub fn contains(&self, card: CardRef) -> bool {
        self.cards.contains(&card)
    }

    /// Cards in the order they were picked.
    #[must_use]
    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }

    /// Add a card. Returns false if it was already present.
    pub(crate) fn push(&mut self, card: CardRef) -> bool {
        if self.contains(card) {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Remove all cards, returning them.
    pub(crate) fn take(&mut self) -> SmallVec<[CardRef; 4]> {
        std::mem::take(&mut self.cards)
    }
}

/// Result of a complete turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every card in the turn shares one symbol.
    Match,
    /// At least two cards differ.
    Mismatch,
}

impl Outcome {
    /// Check if this is a match.
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Outcome::Match)
    }
}

/// A resolved turn, kept in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number within the session.
    pub number: u32,
    /// Cards picked, in pick order.
    pub cards: SmallVec<[CardRef; 4]>,
    /// How the turn resolved.
    pub outcome: Outcome,
}
