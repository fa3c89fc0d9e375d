//! The game host: owns the live session, the clock and the collaborators.

use super::collab::{AudioCue, AudioSink, GameObserver, ScoreSubmitter};
use super::timer::TimerQueue;
use crate::cards::CardRef;
use crate::core::{GameConfig, GameRng, Level, LevelPreset};
use crate::deck::{DeckBuilder, DeckError};
use crate::engine::{GameEvent, GameSession, Outcome, SessionSnapshot, Selection};

/// Orchestrates one memory game at a time.
///
/// Inbound stimuli are [`MemoryGame::select_card`], [`MemoryGame::tick`] and
/// [`MemoryGame::new_game`]. They are all `&mut self`, so they are processed
/// one at a time. Resolution tickets are queued on the internal timer and
/// fired by `tick`. A new game bumps the session generation, so tickets still
/// queued from the previous game are discarded when they fire.
pub struct MemoryGame {
    config: GameConfig,
    builder: DeckBuilder,
    rng: GameRng,
    session: GameSession,
    level_name: String,
    next_generation: u64,
    timers: TimerQueue,
    observers: Vec<Box<dyn GameObserver>>,
    audio: Option<Box<dyn AudioSink>>,
    submitter: Option<Box<dyn ScoreSubmitter>>,
    leaderboard: Option<String>,
}

impl MemoryGame {
    /// Create a host and start a game on the configured level.
    pub fn new(config: GameConfig) -> Result<Self, DeckError> {
        let builder = DeckBuilder::new(config.alphabet.clone());
        let mut rng = GameRng::new(config.seed);
        let level = config.level;
        let session = Self::start_session(&builder, &mut rng, level, 0)?;

        log::info!("new game: {}", level);
        Ok(Self {
            config,
            builder,
            rng,
            session,
            level_name: Self::name_level(level),
            next_generation: 1,
            timers: TimerQueue::new(),
            observers: Vec::new(),
            audio: None,
            submitter: None,
            leaderboard: None,
        })
    }

    // === Collaborators ===

    /// Register a presentation observer.
    pub fn add_observer(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Set the audio collaborator.
    pub fn set_audio(&mut self, audio: impl AudioSink + 'static) {
        self.audio = Some(Box::new(audio));
    }

    /// Set the leaderboard collaborator.
    pub fn set_score_submitter(&mut self, submitter: impl ScoreSubmitter + 'static) {
        self.submitter = Some(Box::new(submitter));
    }

    // === Stimuli ===

    /// Replace the current game with a fresh one on `level`.
    ///
    /// On error the current game keeps running untouched.
    pub fn new_game(&mut self, level: Level) -> Result<(), DeckError> {
        let mut rng = self.rng.fork();
        let session = Self::start_session(&self.builder, &mut rng, level, self.next_generation)?;

        self.next_generation += 1;
        self.session = session;
        self.level_name = Self::name_level(level);
        self.leaderboard = None;
        log::info!(
            "new game: {} (generation {}, {} stale timers pending)",
            level,
            self.session.generation(),
            self.timers.len()
        );

        let snapshot = self.session.snapshot();
        for observer in &mut self.observers {
            observer.on_new_game(&snapshot);
            observer.on_score_changed(0);
        }
        Ok(())
    }

    /// Start a new game on a named preset.
    pub fn new_preset(&mut self, preset: LevelPreset) -> Result<(), DeckError> {
        self.new_game(preset.level())
    }

    /// Start a new game on the configured level.
    pub fn restart(&mut self) -> Result<(), DeckError> {
        self.new_game(self.config.level)
    }

    /// Forward a card pick to the engine.
    pub fn select_card(&mut self, card: CardRef) -> Selection {
        let selection = self.session.select_card(card);
        if let Some(ticket) = selection.ticket() {
            self.timers.schedule(self.config.resolution_delay_ms, ticket);
        }
        self.dispatch_events();
        selection
    }

    /// Advance the clock, firing due resolutions. Returns how many applied.
    pub fn tick(&mut self, elapsed_ms: u32) -> usize {
        let mut applied = 0;
        for ticket in self.timers.advance(elapsed_ms) {
            if let Some(outcome) = self.session.resolution_fired(ticket) {
                log::debug!("resolved turn {} as {:?}", ticket.turn, outcome);
                applied += 1;
            }
        }
        if applied > 0 {
            self.dispatch_events();
        }
        applied
    }

    // === Queries ===

    /// The live session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Name used for the current level on the leaderboard.
    #[must_use]
    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    /// Leaderboard text from the last completed game, if submitted.
    #[must_use]
    pub fn leaderboard(&self) -> Option<&str> {
        self.leaderboard.as_deref()
    }

    /// Resolution timers still queued, including stale ones.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Host configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Internals ===

    fn start_session(
        builder: &DeckBuilder,
        rng: &mut GameRng,
        level: Level,
        generation: u64,
    ) -> Result<GameSession, DeckError> {
        let deck = builder.build(level, rng)?;
        GameSession::new(level, deck, generation)
    }

    fn name_level(level: Level) -> String {
        LevelPreset::from_level(level)
            .map(|preset| preset.name().to_string())
            .unwrap_or_else(|| level.to_string())
    }

    fn play(&mut self, cue: AudioCue) {
        if let Some(audio) = self.audio.as_mut() {
            audio.play(cue);
        }
    }

    fn dispatch_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::CardStateChanged { card, state } => {
                    for observer in &mut self.observers {
                        observer.on_card_state_changed(card, state);
                    }
                }
                GameEvent::ScoreChanged { score } => {
                    for observer in &mut self.observers {
                        observer.on_score_changed(score);
                    }
                }
                GameEvent::TurnStarted { .. } => self.play(AudioCue::TurnStarted),
                GameEvent::TurnEvaluated { outcome, .. } => self.play(match outcome {
                    Outcome::Match => AudioCue::Match,
                    Outcome::Mismatch => AudioCue::Mismatch,
                }),
                GameEvent::TurnResolved { .. } => {}
                GameEvent::GameOver { final_score } => {
                    for observer in &mut self.observers {
                        observer.on_game_over(final_score);
                    }
                    self.play(AudioCue::LevelComplete);
                    self.submit_score(final_score);
                }
            }
        }
    }

    fn submit_score(&mut self, score: u32) {
        let (Some(submitter), Some(player)) = (self.submitter.as_mut(), self.config.player_name.as_deref())
        else {
            return;
        };

        let text = match submitter.submit(player, &self.level_name, score) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("score submission failed: {err}");
                format!("Score submission failed: {err}")
            }
        };
        for observer in &mut self.observers {
            observer.on_leaderboard(&text);
        }
        self.leaderboard = Some(text);
    }
}
