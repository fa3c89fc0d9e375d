//! Deck construction errors.

use std::fmt;

use crate::cards::{CardRef, CardState, Symbol};
use crate::core::Level;

/// Why a deck could not be built.
///
/// Every variant is fatal to session creation: the caller must not start a
/// game with the offending level or layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The level itself cannot be played.
    InvalidLevel { level: Level, reason: &'static str },
    /// The level needs more symbol groups than the alphabet has symbols.
    AlphabetExhausted { needed: usize, available: usize },
    /// A fixed layout has the wrong number of cards for its level.
    WrongCardCount { expected: usize, found: usize },
    /// A fixed layout has a symbol that does not appear exactly `group_size` times.
    UnbalancedSymbol { symbol: Symbol, expected: usize, found: usize },
    /// A deck handed to a new session already has a card face up or retired.
    CardNotHidden { card: CardRef, state: CardState },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::InvalidLevel { level, reason } => {
                write!(f, "invalid level {level}: {reason}")
            }
            DeckError::AlphabetExhausted { needed, available } => {
                write!(f, "level needs {needed} symbols but the alphabet has {available}")
            }
            DeckError::WrongCardCount { expected, found } => {
                write!(f, "layout must have {expected} cards, got {found}")
            }
            DeckError::UnbalancedSymbol {
                symbol,
                expected,
                found,
            } => {
                write!(f, "symbol '{symbol}' appears {found} times, expected {expected}")
            }
            DeckError::CardNotHidden { card, state } => {
                write!(f, "{card} starts {state:?}, expected Hidden")
            }
        }
    }
}

impl std::error::Error for DeckError {}
