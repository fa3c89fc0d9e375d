//! Core building blocks: level configuration, host configuration, RNG.

pub mod config;
pub mod level;
pub mod rng;

pub use config::{GameConfig, DEFAULT_RESOLUTION_DELAY_MS};
pub use level::{Level, LevelPreset};
pub use rng::{GameRng, GameRngState};
