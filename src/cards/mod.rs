//! Cards, symbols and the symbol alphabet.
//!
//! - `Symbol`: opaque matching identity
//! - `Alphabet`: distinct symbols the deck builder draws from
//! - `Card`: symbol plus presentation state
//! - `CardRef`: position of a card in its deck

pub mod card;
pub mod symbol;

pub use card::{Card, CardRef, CardState};
pub use symbol::{Alphabet, AlphabetError, Symbol};
