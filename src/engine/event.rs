//! Notifications emitted by the match engine.
//!
//! The engine buffers events as it mutates state. The host drains them after
//! every stimulus and forwards them to the presentation layer and the audio
//! collaborator. A rejected selection never produces an event.

use serde::{Deserialize, Serialize};

use super::turn::Outcome;
use crate::cards::{CardRef, CardState};

/// Something a presentation layer may want to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card's presentation state changed.
    CardStateChanged { card: CardRef, state: CardState },
    /// The score changed.
    ScoreChanged { score: u32 },
    /// The first card of a new turn was revealed.
    TurnStarted { number: u32 },
    /// The last card of a turn was revealed and the outcome is known.
    /// Resolution follows after the delay.
    TurnEvaluated { number: u32, outcome: Outcome },
    /// The delayed resolution ran; cards are retired or hidden again.
    TurnResolved { number: u32, outcome: Outcome },
    /// Every group has been matched.
    GameOver { final_score: u32 },
}
