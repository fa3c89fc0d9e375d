//! Game configuration.
//!
//! The host is configured once at startup with a `GameConfig`. Every new game
//! uses the configured delay, alphabet and player name; the level can be
//! chosen per game.

use serde::{Deserialize, Serialize};

use super::level::Level;
use crate::cards::Alphabet;

/// Default delay between the last pick of a turn and its resolution.
pub const DEFAULT_RESOLUTION_DELAY_MS: u32 = 1000;

/// Host configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Level used by `MemoryGame::restart`.
    pub level: Level,

    /// Milliseconds the revealed turn stays visible before it is retired
    /// or flipped back.
    pub resolution_delay_ms: u32,

    /// Random seed for the host RNG. Each game forks its own stream.
    pub seed: u64,

    /// Name submitted with the final score. No submission without one.
    #[serde(default)]
    pub player_name: Option<String>,

    /// Symbols printed on card faces.
    #[serde(default)]
    pub alphabet: Alphabet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            resolution_delay_ms: DEFAULT_RESOLUTION_DELAY_MS,
            seed: 42,
            player_name: None,
            alphabet: Alphabet::default(),
        }
    }
}

impl GameConfig {
    /// Use a custom level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Use a custom resolution delay.
    pub fn with_resolution_delay(mut self, delay_ms: u32) -> Self {
        self.resolution_delay_ms = delay_ms;
        self
    }

    /// Use a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the player name used for score submission.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Use a custom symbol alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }
}
