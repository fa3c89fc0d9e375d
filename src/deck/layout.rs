//! The ordered card layout of one game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::DeckError;
use crate::cards::{Card, CardRef, CardState, Symbol};
use crate::core::Level;

/// Ordered cards of one game, row-major over the level grid.
///
/// Every symbol appears exactly `group_size` times; [`Deck::check_fits`]
/// enforces this for a given level. Only the deck builder and the match
/// engine mutate cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from a fixed symbol layout (replays, puzzles, tests).
    ///
    /// The layout is used as given, without shuffling. All cards start Hidden.
    pub fn from_symbols(level: Level, symbols: &[Symbol]) -> Result<Self, DeckError> {
        let deck = Self {
            cards: symbols.iter().copied().map(Card::new).collect(),
        };
        deck.check_fits(level)?;
        Ok(deck)
    }

    /// Check that this deck can start a game on `level`.
    ///
    /// The level must be playable, the card count must match its grid, every
    /// symbol must appear exactly `group_size` times, and every card must be
    /// Hidden. Decks read through serde are only checked here, since the
    /// level is not part of the serialized form.
    pub fn check_fits(&self, level: Level) -> Result<(), DeckError> {
        if let Some(reason) = level.invalid_reason() {
            return Err(DeckError::InvalidLevel { level, reason });
        }
        if self.len() != level.card_count() {
            return Err(DeckError::WrongCardCount {
                expected: level.card_count(),
                found: self.len(),
            });
        }

        let expected = level.group_size as usize;
        let mut counts: Vec<_> = self.symbol_counts().into_iter().collect();
        counts.sort();
        if let Some(&(symbol, found)) = counts.iter().find(|(_, n)| *n != expected) {
            return Err(DeckError::UnbalancedSymbol {
                symbol,
                expected,
                found,
            });
        }

        if let Some((card, c)) = self.iter().find(|(_, c)| c.state != CardState::Hidden) {
            return Err(DeckError::CardNotHidden {
                card,
                state: c.state,
            });
        }

        Ok(())
    }

    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by reference.
    #[must_use]
    pub fn get(&self, card: CardRef) -> Option<&Card> {
        self.cards.get(card.index())
    }

    pub(crate) fn get_mut(&mut self, card: CardRef) -> Option<&mut Card> {
        self.cards.get_mut(card.index())
    }

    /// Set a card's state, returning true if it changed.
    pub(crate) fn set_state(&mut self, card: CardRef, state: CardState) -> bool {
        match self.get_mut(card) {
            Some(c) if c.state != state => {
                c.state = state;
                true
            }
            _ => false,
        }
    }

    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over `(CardRef, &Card)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardRef, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardRef(i as u32), card))
    }

    /// How many times each symbol appears.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    /// References to every card carrying `symbol`.
    #[must_use]
    pub fn positions_of(&self, symbol: Symbol) -> Vec<CardRef> {
        self.iter()
            .filter(|(_, card)| card.symbol == symbol)
            .map(|(card_ref, _)| card_ref)
            .collect()
    }

    /// Number of cards still in play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.iter().filter(|card| !card.is_retired()).count()
    }
}
