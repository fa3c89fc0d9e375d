//! Presentation view of a session.
//!
//! A snapshot carries everything a renderer needs to draw the board and the
//! score line, and nothing the player should not see: hidden cards do not
//! expose their symbol.

use serde::{Deserialize, Serialize};

use super::session::{EngineState, GameSession};
use crate::cards::{CardRef, CardState, Symbol};
use crate::core::Level;

/// What the player can see of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub state: CardState,
    /// `None` while the card is face down.
    pub symbol: Option<Symbol>,
}

/// Serializable board view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub level: Level,
    pub state: EngineState,
    pub score: u32,
    pub matched_groups: u32,
    /// Cards of the open turn, in pick order.
    pub turn: Vec<CardRef>,
    /// One entry per card, row-major.
    pub cards: Vec<CardView>,
}

impl SessionSnapshot {
    /// Card view at a grid cell.
    #[must_use]
    pub fn cell(&self, column: u16, row: u16) -> Option<&CardView> {
        if column >= self.level.grid_width || row >= self.level.grid_height {
            return None;
        }
        self.cards
            .get(CardRef::at(column, row, self.level.grid_width).index())
    }
}

impl GameSession {
    /// Capture the visible board.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            level: self.level(),
            state: self.state(),
            score: self.score(),
            matched_groups: self.matched_groups(),
            turn: self.turn().cards().to_vec(),
            cards: self
                .deck()
                .cards()
                .iter()
                .map(|card| CardView {
                    state: card.state,
                    symbol: card.visible_symbol(),
                })
                .collect(),
        }
    }
}
