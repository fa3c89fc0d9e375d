//! Cards and their presentation state.
//!
//! ## Lifecycle
//!
//! ```text
//!            select            mismatch resolved
//!   Hidden ─────────► Revealed ─────────────────► Hidden
//!                        │
//!                        │ match resolved
//!                        ▼
//!                     Retired (terminal)
//! ```
//!
//! Cards are created Hidden by the deck builder and only change state
//! through the match engine.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Handle to a card: its position in the deck.
///
/// This is what a presentation layer passes back when the player clicks a
/// grid cell. Positions are row-major over the level grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardRef(pub u32);

impl CardRef {
    /// Create a card reference from a deck position.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the deck position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Reference the card at a grid cell (row-major).
    #[must_use]
    pub const fn at(column: u16, row: u16, grid_width: u16) -> Self {
        Self(row as u32 * grid_width as u32 + column as u32)
    }
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What the player currently sees of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CardState {
    /// Face down, only the back is visible.
    #[default]
    Hidden,
    /// Face up and part of the current turn.
    Revealed,
    /// Out of play, its group has been matched.
    Retired,
}

impl CardState {
    /// Check if the face is visible.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        matches!(self, CardState::Revealed | CardState::Retired)
    }
}

/// A card in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Matching identity.
    pub symbol: Symbol,

    /// Presentation state.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            state: CardState::Hidden,
        }
    }

    /// Check if this card has been matched.
    #[must_use]
    pub const fn is_retired(&self) -> bool {
        matches!(self.state, CardState::Retired)
    }

    /// The symbol if the face is visible, `None` while hidden.
    #[must_use]
    pub const fn visible_symbol(&self) -> Option<Symbol> {
        if self.state.is_face_up() {
            Some(self.symbol)
        } else {
            None
        }
    }
}
