//! Shuffled deck construction.
//!
//! ## Algorithm
//!
//! 1. Reject invalid levels.
//! 2. Split the card count into `card_count / group_size` groups.
//! 3. Draw one distinct symbol per group from the alphabet.
//! 4. Replicate each symbol `group_size` times.
//! 5. Fisher-Yates shuffle the whole layout.

use super::error::DeckError;
use super::layout::Deck;
use crate::cards::{Alphabet, Card};
use crate::core::{GameRng, Level};

/// Builds shuffled decks from an alphabet.
#[derive(Clone, Debug, Default)]
pub struct DeckBuilder {
    alphabet: Alphabet,
}

impl DeckBuilder {
    /// Create a builder drawing from the given alphabet.
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet symbols are drawn from.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Build a shuffled deck for `level`.
    ///
    /// Symbols are drawn without replacement, so a level never has two
    /// groups with the same symbol.
    pub fn build(&self, level: Level, rng: &mut GameRng) -> Result<Deck, DeckError> {
        if let Some(reason) = level.invalid_reason() {
            return Err(DeckError::InvalidLevel { level, reason });
        }

        let needed = level.group_count();
        let available = self.alphabet.len();
        if needed > available {
            return Err(DeckError::AlphabetExhausted { needed, available });
        }

        // A uniform shuffle of the alphabet makes every prefix a uniform
        // draw without replacement.
        let mut pool = self.alphabet.symbols().to_vec();
        rng.shuffle(&mut pool);
        pool.truncate(needed);

        let group_size = level.group_size as usize;
        let mut cards: Vec<Card> = pool
            .iter()
            .flat_map(|&symbol| std::iter::repeat(Card::new(symbol)).take(group_size))
            .collect();
        rng.shuffle(&mut cards);

        log::debug!("built {} deck with {} symbol groups", level, needed);
        Ok(Deck::from_cards(cards))
    }
}
