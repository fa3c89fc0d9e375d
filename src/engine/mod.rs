//! Match engine: the turn-resolution state machine.
//!
//! A [`GameSession`] buffers the [`GameEvent`]s each stimulus produces.
//! Whoever drives it directly drains that buffer after every call.
//!
//! ## Example
//!
//! ```
//! use memory_match::cards::{CardRef, CardState, Symbol};
//! use memory_match::core::Level;
//! use memory_match::deck::Deck;
//! use memory_match::engine::{EngineState, GameEvent, GameSession, Outcome};
//!
//! let level = Level::new(2, 2, 2);
//! let layout: Vec<Symbol> = "ABAB".chars().map(Symbol).collect();
//! let deck = Deck::from_symbols(level, &layout).unwrap();
//! let mut session = GameSession::new(level, deck, 0).unwrap();
//!
//! session.select_card(CardRef(0));
//! let ticket = session.select_card(CardRef(2)).ticket().unwrap();
//! assert_eq!(session.state(), EngineState::Resolving);
//! assert_eq!(session.drain_events().len(), 5);
//!
//! // ...after the resolution delay
//! assert_eq!(session.resolution_fired(ticket), Some(Outcome::Match));
//! assert_eq!(session.deck().get(CardRef(0)).unwrap().state, CardState::Retired);
//! assert!(session
//!     .drain_events()
//!     .contains(&GameEvent::TurnResolved { number: 1, outcome: Outcome::Match }));
//! ```

mod event;
mod session;
mod snapshot;
mod turn;

pub use event::GameEvent;
pub use session::{EngineState, GameSession, RejectReason, ResolutionTicket, Selection};
pub use snapshot::{CardView, SessionSnapshot};
pub use turn::{Outcome, Turn, TurnRecord};
