//! Deck building.
//!
//! ```
//! use memory_match::core::{GameRng, Level};
//! use memory_match::deck::DeckBuilder;
//!
//! let mut rng = GameRng::new(42);
//! let deck = DeckBuilder::default().build(Level::new(2, 2, 2), &mut rng).unwrap();
//!
//! assert_eq!(deck.len(), 4);
//! assert!(deck.symbol_counts().values().all(|&n| n == 2));
//! ```

mod builder;
mod error;
mod layout;

pub use builder::DeckBuilder;
pub use error::DeckError;
pub use layout::Deck;
