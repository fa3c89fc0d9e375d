//! # memory-match
//!
//! Turn-resolution engine and deck builder for memory-matching card games.
//!
//! A grid of face-down cards is revealed `group_size` at a time. A turn whose
//! cards share a symbol is retired, any other turn is flipped back after a
//! short delay, and the game ends when every group is retired.
//!
//! ## Design Principles
//!
//! 1. **One state machine**: every mutation goes through `select_card` or
//!    `resolution_fired`. No flags shared between independent callbacks.
//!
//! 2. **Tagged timers**: the delayed resolution is a ticket carrying the
//!    session generation. Tickets from a replaced game are ignored.
//!
//! 3. **No UI references**: the engine emits events; presentation, audio and
//!    leaderboards are collaborator traits on the host.
//!
//! ## Modules
//!
//! - `core`: Level configuration, host configuration, deterministic RNG
//! - `cards`: Symbols, alphabets, cards and card references
//! - `deck`: Shuffled deck construction
//! - `engine`: Match engine state machine and its events
//! - `host`: Session owner with resolution timers and collaborators

pub mod cards;
pub mod core;
pub mod deck;
pub mod engine;
pub mod host;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, Level, LevelPreset};

pub use crate::cards::{Alphabet, AlphabetError, Card, CardRef, CardState, Symbol};

pub use crate::deck::{Deck, DeckBuilder, DeckError};

pub use crate::engine::{
    CardView, EngineState, GameEvent, GameSession, Outcome, RejectReason, ResolutionTicket,
    Selection, SessionSnapshot, Turn, TurnRecord,
};

pub use crate::host::{AudioCue, AudioSink, GameObserver, MemoryGame, ScoreSubmitter, SubmitError, TimerQueue};
