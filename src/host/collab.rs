//! Outbound collaborators: presentation, audio, score submission.
//!
//! The host calls these; it never depends on how they are implemented.
//! Every method on [`GameObserver`] has a no-op default so adapters only
//! implement what they render.

use std::fmt;

use crate::cards::{CardRef, CardState};
use crate::engine::SessionSnapshot;

/// Presentation layer hooks.
pub trait GameObserver {
    /// A new game replaced the board.
    fn on_new_game(&mut self, _snapshot: &SessionSnapshot) {}

    /// A card flipped, retired or turned back over.
    fn on_card_state_changed(&mut self, _card: CardRef, _state: CardState) {}

    /// The score line changed.
    fn on_score_changed(&mut self, _score: u32) {}

    /// Every group has been matched.
    fn on_game_over(&mut self, _final_score: u32) {}

    /// Leaderboard text (or a submission failure message) to display.
    fn on_leaderboard(&mut self, _text: &str) {}
}

/// Sound effects played at engine events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    TurnStarted,
    Match,
    Mismatch,
    LevelComplete,
}

/// Plays audio cues. Fire and forget.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Score submission failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The leaderboard could not be reached.
    Transport(String),
    /// The leaderboard refused the entry.
    Rejected(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Transport(msg) => write!(f, "could not reach leaderboard: {msg}"),
            SubmitError::Rejected(msg) => write!(f, "leaderboard rejected score: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Sends a final score to a leaderboard and returns its text.
pub trait ScoreSubmitter {
    fn submit(&mut self, player_name: &str, level_name: &str, score: u32) -> Result<String, SubmitError>;
}
