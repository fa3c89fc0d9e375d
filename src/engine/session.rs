//! The match engine: a single game session and its turn state machine.
//!
//! ## States
//!
//! ```text
//!          select (1st)            select (k-th)
//!   Idle ───────────────► Accumulating ───────────► Resolving
//!    ▲                        │  ▲                     │
//!    │                        └──┘ select (2..k-1)     │ resolution fired
//!    └─────────────────────────────────────────────────┤
//!                                                      ▼ (last group matched)
//!                                                   GameOver
//! ```
//!
//! All mutation goes through two entry points: [`GameSession::select_card`]
//! and [`GameSession::resolution_fired`]. Entering Resolving hands out a
//! [`ResolutionTicket`]; whoever owns the clock fires it after the delay.
//! Tickets carry the session generation and the turn number, so a ticket
//! from a replaced session or an already resolved turn is ignored.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use super::turn::{Outcome, Turn, TurnRecord};
use crate::cards::{CardRef, CardState};
use crate::deck::{Deck, DeckError};
use crate::core::Level;

/// Turn state machine states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EngineState {
    /// No card revealed; waiting for the first pick of a turn.
    #[default]
    Idle,
    /// Some but not all cards of the turn revealed.
    Accumulating,
    /// The turn is complete and waits for its resolution ticket.
    Resolving,
    /// Every group has been matched.
    GameOver,
}

impl EngineState {
    /// Check if the engine takes card selections in this state.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, EngineState::Idle | EngineState::Accumulating)
    }
}

/// One-shot handle for a pending resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionTicket {
    /// Generation of the session that issued the ticket.
    pub generation: u64,
    /// Turn number the ticket resolves.
    pub turn: u32,
}

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// A completed turn is waiting for resolution.
    Resolving,
    /// The game has ended.
    GameOver,
    /// The card has already been matched.
    Retired,
    /// The card is already face up in this turn.
    AlreadyInTurn,
    /// The reference does not point into the deck.
    UnknownCard,
}

/// Result of [`GameSession::select_card`].
///
/// Rejections are informational only; nothing was mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Input ignored.
    Rejected(RejectReason),
    /// Card revealed, turn still open.
    Revealed,
    /// Card revealed and the turn is complete. Fire the ticket after the delay.
    Resolving(ResolutionTicket),
}

impl Selection {
    /// The ticket to schedule, if this selection completed a turn.
    #[must_use]
    pub const fn ticket(self) -> Option<ResolutionTicket> {
        match self {
            Selection::Resolving(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Check if the selection was ignored.
    #[must_use]
    pub const fn is_rejected(self) -> bool {
        matches!(self, Selection::Rejected(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingResolution {
    ticket: ResolutionTicket,
    outcome: Outcome,
}

/// A single game: level, deck, current turn and counters.
///
/// ## Scoring
///
/// The score counts completed turn attempts, matches and mismatches alike,
/// so lower is better.
///
/// ## Events
///
/// Each stimulus appends [`GameEvent`]s to an internal buffer that is only
/// emptied by [`GameSession::drain_events`]. Callers must drain after every
/// `select_card` and `resolution_fired`, as [`crate::host::MemoryGame`] does;
/// an undrained session keeps growing its buffer.
#[derive(Clone, Debug)]
pub struct GameSession {
    level: Level,
    deck: Deck,
    turn: Turn,
    state: EngineState,
    score: u32,
    matched_groups: u32,
    generation: u64,
    turns_started: u32,
    pending: Option<PendingResolution>,
    history: Vector<TurnRecord>,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a session on a deck built for `level`.
    ///
    /// `generation` tags every ticket this session issues; hosts give each
    /// new session a fresh value. The deck is checked with
    /// [`Deck::check_fits`], so a layout balanced for another level is
    /// rejected.
    pub fn new(level: Level, deck: Deck, generation: u64) -> Result<Self, DeckError> {
        deck.check_fits(level)?;

        Ok(Self {
            level,
            deck,
            turn: Turn::new(),
            state: EngineState::Idle,
            score: 0,
            matched_groups: 0,
            generation,
            turns_started: 0,
            pending: None,
            history: Vector::new(),
            events: Vec::new(),
        })
    }

    // === Stimuli ===

    /// Handle the player picking a card.
    ///
    /// Selections during resolution or after game over, of retired cards,
    /// of cards already in the turn, or outside the deck are ignored.
    pub fn select_card(&mut self, card: CardRef) -> Selection {
        if let Err(reason) = self.check_selectable(card) {
            log::debug!("ignoring {card}: {reason:?}");
            return Selection::Rejected(reason);
        }

        if self.turn.is_empty() {
            self.turns_started += 1;
            self.events.push(GameEvent::TurnStarted {
                number: self.turns_started,
            });
        }

        self.turn.push(card);
        self.set_card_state(card, CardState::Revealed);

        if self.turn.len() < self.level.group_size as usize {
            self.state = EngineState::Accumulating;
            return Selection::Revealed;
        }

        let outcome = self.evaluate_turn();
        let ticket = ResolutionTicket {
            generation: self.generation,
            turn: self.turns_started,
        };

        self.state = EngineState::Resolving;
        self.pending = Some(PendingResolution { ticket, outcome });
        self.score += 1;
        self.events.push(GameEvent::ScoreChanged { score: self.score });
        self.events.push(GameEvent::TurnEvaluated {
            number: ticket.turn,
            outcome,
        });

        log::debug!("turn {} complete: {:?}", ticket.turn, outcome);
        Selection::Resolving(ticket)
    }

    /// Apply the delayed resolution for `ticket`.
    ///
    /// Returns the outcome, or `None` if the ticket is stale (another
    /// session, another turn, or already fired).
    pub fn resolution_fired(&mut self, ticket: ResolutionTicket) -> Option<Outcome> {
        let pending = match self.pending {
            Some(pending) if pending.ticket == ticket => pending,
            _ => {
                log::warn!(
                    "discarding stale resolution ticket {:?} (session generation {})",
                    ticket,
                    self.generation
                );
                return None;
            }
        };
        self.pending = None;

        let cards = self.turn.take();
        let settled = if pending.outcome.is_match() {
            CardState::Retired
        } else {
            CardState::Hidden
        };
        for &card in &cards {
            self.set_card_state(card, settled);
        }

        self.history.push_back(TurnRecord {
            number: ticket.turn,
            cards,
            outcome: pending.outcome,
        });
        self.events.push(GameEvent::TurnResolved {
            number: ticket.turn,
            outcome: pending.outcome,
        });

        if pending.outcome.is_match() {
            self.matched_groups += 1;
        }

        if self.matched_groups as usize == self.level.group_count() {
            self.state = EngineState::GameOver;
            self.events.push(GameEvent::GameOver {
                final_score: self.score,
            });
            log::info!("game over after {} turns, score {}", ticket.turn, self.score);
        } else {
            self.state = EngineState::Idle;
        }

        Some(pending.outcome)
    }

    /// Take all events emitted since the last drain.
    ///
    /// Call this after every stimulus; the buffer is never trimmed otherwise.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events emitted since the last drain, without taking them.
    #[must_use]
    pub fn buffered_events(&self) -> &[GameEvent] {
        &self.events
    }

    // === Queries ===

    /// The level being played.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// The deck, in grid order.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The current turn.
    #[must_use]
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    /// Current state machine state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Completed turn attempts so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Groups retired so far.
    #[must_use]
    pub fn matched_groups(&self) -> u32 {
        self.matched_groups
    }

    /// Generation tag carried by this session's tickets.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The ticket waiting to be fired, if resolving.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<ResolutionTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// Every resolved turn, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Check if all groups have been matched.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == EngineState::GameOver
    }

    // === Internals ===

    fn check_selectable(&self, card: CardRef) -> Result<(), RejectReason> {
        match self.state {
            EngineState::Resolving => return Err(RejectReason::Resolving),
            EngineState::GameOver => return Err(RejectReason::GameOver),
            EngineState::Idle | EngineState::Accumulating => {}
        }
        let Some(target) = self.deck.get(card) else {
            return Err(RejectReason::UnknownCard);
        };
        if target.is_retired() {
            return Err(RejectReason::Retired);
        }
        if self.turn.contains(card) {
            return Err(RejectReason::AlreadyInTurn);
        }
        Ok(())
    }

    fn evaluate_turn(&self) -> Outcome {
        let mut symbols = self
            .turn
            .cards()
            .iter()
            .filter_map(|&card| self.deck.get(card).map(|c| c.symbol));
        let Some(first) = symbols.next() else {
            return Outcome::Mismatch;
        };
        if symbols.all(|symbol| symbol == first) {
            Outcome::Match
        } else {
            Outcome::Mismatch
        }
    }

    fn set_card_state(&mut self, card: CardRef, state: CardState) {
        if self.deck.set_state(card, state) {
            self.events.push(GameEvent::CardStateChanged { card, state });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    fn session(width: u16, height: u16, k: u16, layout: &str) -> GameSession {
        let level = Level::new(width, height, k);
        let symbols: Vec<Symbol> = layout.chars().map(Symbol).collect();
        let deck = Deck::from_symbols(level, &symbols).unwrap();
        GameSession::new(level, deck, 1).unwrap()
    }

    fn state_of(session: &GameSession, card: u32) -> CardState {
        session.deck().get(CardRef(card)).unwrap().state
    }

    #[test]
    fn test_starts_idle() {
        let s = session(2, 2, 2, "ABAB");
        assert_eq!(s.state(), EngineState::Idle);
        assert_eq!(s.score(), 0);
        assert!(s.turn().is_empty());
        assert!(s.pending_ticket().is_none());
    }

    #[test]
    fn test_first_pick_accumulates() {
        let mut s = session(2, 2, 2, "ABAB");
        assert_eq!(s.select_card(CardRef(0)), Selection::Revealed);
        assert_eq!(s.state(), EngineState::Accumulating);
        assert_eq!(state_of(&s, 0), CardState::Revealed);
        assert_eq!(
            s.drain_events(),
            vec![
                GameEvent::TurnStarted { number: 1 },
                GameEvent::CardStateChanged {
                    card: CardRef(0),
                    state: CardState::Revealed
                },
            ]
        );
    }

    #[test]
    fn test_match_resolves_to_retired() {
        let mut s = session(2, 2, 2, "ABAB");
        s.select_card(CardRef(0));
        let ticket = s.select_card(CardRef(2)).ticket().unwrap();

        assert_eq!(s.state(), EngineState::Resolving);
        assert_eq!(s.score(), 1);
        assert_eq!(ticket, ResolutionTicket { generation: 1, turn: 1 });

        assert_eq!(s.resolution_fired(ticket), Some(Outcome::Match));
        assert_eq!(s.state(), EngineState::Idle);
        assert_eq!(s.matched_groups(), 1);
        assert_eq!(state_of(&s, 0), CardState::Retired);
        assert_eq!(state_of(&s, 2), CardState::Retired);
        assert!(s.turn().is_empty());
    }

    #[test]
    fn test_mismatch_resolves_to_hidden() {
        let mut s = session(2, 2, 2, "ABAB");
        s.select_card(CardRef(0));
        let ticket = s.select_card(CardRef(1)).ticket().unwrap();

        assert_eq!(s.resolution_fired(ticket), Some(Outcome::Mismatch));
        assert_eq!(s.state(), EngineState::Idle);
        assert_eq!(s.matched_groups(), 0);
        assert_eq!(s.score(), 1);
        assert_eq!(state_of(&s, 0), CardState::Hidden);
        assert_eq!(state_of(&s, 1), CardState::Hidden);
    }

    #[test]
    fn test_input_gated_while_resolving() {
        let mut s = session(2, 2, 2, "ABAB");
        s.select_card(CardRef(0));
        s.select_card(CardRef(1));
        s.drain_events();

        assert_eq!(
            s.select_card(CardRef(2)),
            Selection::Rejected(RejectReason::Resolving)
        );
        assert_eq!(state_of(&s, 2), CardState::Hidden);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_reselect_same_card_is_noop() {
        let mut s = session(2, 2, 2, "ABAB");
        s.select_card(CardRef(0));
        s.drain_events();

        assert_eq!(
            s.select_card(CardRef(0)),
            Selection::Rejected(RejectReason::AlreadyInTurn)
        );
        assert_eq!(s.turn().len(), 1);
        assert_eq!(s.state(), EngineState::Accumulating);
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_retired_and_unknown_cards_rejected() {
        let mut s = session(2, 2, 2, "ABAB");
        s.select_card(CardRef(0));
        let ticket = s.select_card(CardRef(2)).ticket().unwrap();
        s.resolution_fired(ticket);

        assert_eq!(
            s.select_card(CardRef(0)),
            Selection::Rejected(RejectReason::Retired)
        );
        assert_eq!(
            s.select_card(CardRef(4)),
            Selection::Rejected(RejectReason::UnknownCard)
        );
        assert_eq!(s.state(), EngineState::Idle);
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut s = session(2, 2, 2, "ABAB");
        s.select_card(CardRef(0));
        let ticket = s.select_card(CardRef(1)).ticket().unwrap();

        assert!(s.resolution_fired(ticket).is_some());
        s.drain_events();
        assert!(s.resolution_fired(ticket).is_none());
        assert!(s.drain_events().is_empty());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_foreign_generation_ignored() {
        let mut s = session(2, 2, 2, "ABAB");
        s.select_card(CardRef(0));
        let ticket = s.select_card(CardRef(2)).ticket().unwrap();

        let stale = ResolutionTicket {
            generation: ticket.generation + 1,
            ..ticket
        };
        assert!(s.resolution_fired(stale).is_none());
        assert_eq!(s.state(), EngineState::Resolving);
        assert_eq!(state_of(&s, 0), CardState::Revealed);
    }

    #[test]
    fn test_game_over_after_last_group() {
        let mut s = session(2, 2, 2, "ABAB");
        for (a, b) in [(0, 2), (1, 3)] {
            s.select_card(CardRef(a));
            let ticket = s.select_card(CardRef(b)).ticket().unwrap();
            s.resolution_fired(ticket);
        }

        assert!(s.is_over());
        assert_eq!(s.score(), 2);
        assert_eq!(s.matched_groups(), 2);
        assert!(s.drain_events().contains(&GameEvent::GameOver { final_score: 2 }));

        assert_eq!(
            s.select_card(CardRef(1)),
            Selection::Rejected(RejectReason::GameOver)
        );
        assert!(s.drain_events().is_empty());
    }

    #[test]
    fn test_triples_need_three_picks() {
        let mut s = session(3, 2, 3, "ABABAB");
        assert_eq!(s.select_card(CardRef(0)), Selection::Revealed);
        assert_eq!(s.select_card(CardRef(2)), Selection::Revealed);
        assert_eq!(s.state(), EngineState::Accumulating);

        let ticket = s.select_card(CardRef(4)).ticket().unwrap();
        assert_eq!(s.resolution_fired(ticket), Some(Outcome::Match));
        assert_eq!(s.deck().remaining(), 3);
    }

    #[test]
    fn test_history_records_turns() {
        let mut s = session(2, 2, 2, "ABAB");
        s.select_card(CardRef(1));
        let ticket = s.select_card(CardRef(0)).ticket().unwrap();
        s.resolution_fired(ticket);

        let record = s.history().front().unwrap();
        assert_eq!(record.number, 1);
        assert_eq!(record.cards.as_slice(), &[CardRef(1), CardRef(0)]);
        assert_eq!(record.outcome, Outcome::Mismatch);
    }

    #[test]
    fn test_drain_empties_buffer() {
        let mut s = session(2, 2, 2, "ABAB");
        for _ in 0..50 {
            s.select_card(CardRef(0));
            let ticket = s.select_card(CardRef(1)).ticket().unwrap();
            s.resolution_fired(ticket);
            assert_eq!(s.buffered_events().len(), 8);
            assert_eq!(s.drain_events().len(), 8);
            assert!(s.buffered_events().is_empty());
        }
        assert_eq!(s.score(), 50);
    }

    #[test]
    fn test_rejects_mismatched_deck() {
        let symbols: Vec<Symbol> = "AABB".chars().map(Symbol).collect();
        let deck = Deck::from_symbols(Level::new(2, 2, 2), &symbols).unwrap();
        let err = GameSession::new(Level::new(3, 2, 2), deck, 0).unwrap_err();
        assert_eq!(err, DeckError::WrongCardCount { expected: 6, found: 4 });
    }

    #[test]
    fn test_rejects_deck_balanced_for_other_level() {
        let symbols: Vec<Symbol> = "AABB".chars().map(Symbol).collect();
        let deck = Deck::from_symbols(Level::new(4, 1, 2), &symbols).unwrap();
        let err = GameSession::new(Level::new(2, 2, 4), deck, 0).unwrap_err();
        assert_eq!(
            err,
            DeckError::UnbalancedSymbol {
                symbol: Symbol('A'),
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn test_rejects_unbalanced_deserialized_deck() {
        let json = r#"{"cards":[
            {"symbol":"A","state":"Hidden"},
            {"symbol":"A","state":"Hidden"},
            {"symbol":"A","state":"Hidden"},
            {"symbol":"B","state":"Hidden"}
        ]}"#;
        let deck: Deck = serde_json::from_str(json).unwrap();
        let err = GameSession::new(Level::new(2, 2, 2), deck, 0).unwrap_err();
        assert_eq!(
            err,
            DeckError::UnbalancedSymbol {
                symbol: Symbol('A'),
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_rejects_deck_with_retired_card() {
        let json = r#"{"cards":[
            {"symbol":"A","state":"Retired"},
            {"symbol":"A","state":"Retired"},
            {"symbol":"B","state":"Hidden"},
            {"symbol":"B","state":"Hidden"}
        ]}"#;
        let deck: Deck = serde_json::from_str(json).unwrap();
        let err = GameSession::new(Level::new(2, 2, 2), deck, 0).unwrap_err();
        assert!(matches!(err, DeckError::CardNotHidden { card: CardRef(0), .. }));
    }
}
