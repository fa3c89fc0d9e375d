//! Game host: session ownership, resolution timers and collaborators.
//!
//! ```
//! use memory_match::cards::CardRef;
//! use memory_match::core::{GameConfig, Level};
//! use memory_match::host::MemoryGame;
//!
//! let config = GameConfig::default().with_level(Level::new(2, 2, 2));
//! let mut game = MemoryGame::new(config).unwrap();
//!
//! game.select_card(CardRef(0));
//! game.select_card(CardRef(1));
//!
//! // The turn stays visible for the resolution delay.
//! assert_eq!(game.tick(500), 0);
//! assert_eq!(game.tick(500), 1);
//! assert_eq!(game.session().score(), 1);
//! ```

mod collab;
mod game;
mod timer;

pub use collab::{AudioCue, AudioSink, GameObserver, ScoreSubmitter, SubmitError};
pub use game::MemoryGame;
pub use timer::TimerQueue;
