//! The game session.
//!
//! `GameEngine` owns the authoritative `GameState` and publishes a new one
//! on every transition. A human move that hands the turn to the computer
//! triggers the computer's reply inside the same call, so one
//! `apply_move` can produce two emissions back to back.

use tracing::{debug, instrument, trace, warn};

use super::observer::{StateChannel, Subscription};
use crate::core::{Difficulty, EngineConfig, GameRng, GameState, Player, RandomSource};
use crate::error::{InvalidMove, RecordError};
use crate::persist::SavedSession;
use crate::policy::{ComputerPolicy, TieredPolicy};
use crate::rules::{self, Scoring};

/// A tic-tac-toe session against the computer or between two local humans.
///
/// ```
/// use ttt_engine::{EngineConfig, FirstPlayer, GameEngine, Player};
///
/// let config = EngineConfig::default().with_first_player(FirstPlayer::Fixed(Player::X));
/// let mut engine = GameEngine::new(config);
///
/// engine.apply_move(4);
/// // The computer (O) has already replied.
/// assert_eq!(engine.state().board.count(ttt_engine::Cell::O), 1);
/// assert_eq!(engine.state().current_player, Player::X);
/// ```
pub struct GameEngine<R: RandomSource = GameRng> {
    config: EngineConfig,
    scoring: Scoring,
    rng: R,
    state: StateChannel<GameState>,
    difficulty: StateChannel<Difficulty>,
}

impl GameEngine<GameRng> {
    /// Create a session with a `GameRng` seeded from the config.
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create a session with an injected random source.
    pub fn with_rng(config: EngineConfig, mut rng: R) -> Self {
        let first = config.first_player.resolve(&mut rng);
        let initial = GameState::new(first);
        Self::from_parts(config, rng, initial, None)
    }

    /// Resume a session from a saved record.
    ///
    /// The record's difficulty replaces the config's.
    pub fn restore(config: EngineConfig, rng: R, saved: &SavedSession) -> Result<Self, RecordError> {
        let state = saved.to_state()?;
        Ok(Self::from_parts(config, rng, state, Some(saved.difficulty())))
    }

    fn from_parts(
        config: EngineConfig,
        rng: R,
        state: GameState,
        difficulty: Option<Difficulty>,
    ) -> Self {
        let scoring = default_scoring(&config);
        let difficulty = difficulty.unwrap_or(config.difficulty);
        let mut engine = Self {
            config,
            scoring,
            rng,
            state: StateChannel::new(state),
            difficulty: StateChannel::new(difficulty),
        };
        engine.play_computer_turn();
        engine
    }

    /// Replace the function deciding which side counts as the local human.
    #[must_use]
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        self.state.value()
    }

    /// Active difficulty.
    pub fn difficulty(&self) -> Difficulty {
        *self.difficulty.value()
    }

    /// Session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Observe the state: called now with the current value, then once per
    /// transition.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameState) + 'static) -> Subscription {
        self.state.subscribe(callback)
    }

    /// Stop observing the state.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.state.unsubscribe(subscription)
    }

    /// Observe the difficulty setting.
    pub fn subscribe_difficulty(
        &mut self,
        callback: impl FnMut(&Difficulty) + 'static,
    ) -> Subscription {
        self.difficulty.subscribe(callback)
    }

    /// Stop observing the difficulty setting.
    pub fn unsubscribe_difficulty(&mut self, subscription: Subscription) -> bool {
        self.difficulty.unsubscribe(subscription)
    }

    /// Change the difficulty. Takes effect at the next computer turn.
    pub fn set_difficulty(&mut self, level: Difficulty) {
        if level != self.difficulty() {
            debug!(%level, "difficulty changed");
            self.difficulty.publish(level);
        }
    }

    /// Check if the computer is to move in an unfinished round.
    pub fn is_computer_turn(&self) -> bool {
        let state = self.state();
        !state.is_game_over && self.config.computer == Some(state.current_player)
    }

    /// Place the current player's mark at `position`.
    ///
    /// Illegal moves (off the board, occupied square, finished round) are
    /// ignored. If the computer is to move afterwards it replies before
    /// this returns.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: usize) {
        if let Err(reason) = self.try_move(position) {
            debug!(%reason, "move ignored");
        }
    }

    fn try_move(&mut self, position: usize) -> Result<(), InvalidMove> {
        let next = rules::apply_move(self.state(), position, &self.scoring)?;
        self.publish(next);
        self.play_computer_turn();
        Ok(())
    }

    /// Let the computer move if it is its turn. Otherwise does nothing.
    ///
    /// The difficulty is read here, at the start of every computer turn.
    pub fn play_computer_turn(&mut self) {
        if !self.is_computer_turn() {
            return;
        }
        let mark = self.state().current_player;
        let policy = TieredPolicy::new(self.config.effective_difficulty(self.difficulty()));

        let board = self.state().board;
        let Some(position) = policy.choose_move(&board, mark, &mut self.rng) else {
            warn!(%mark, "computer turn on a full board");
            return;
        };
        debug!(position, %mark, difficulty = %policy.difficulty(), "computer move");

        match rules::apply_move(self.state(), position, &self.scoring) {
            Ok(next) => self.publish(next),
            Err(reason) => warn!(%reason, position, "computer chose an illegal square"),
        }
    }

    /// Start a new round. Scores are kept; the opener is chosen again.
    pub fn reset_game(&mut self) {
        let first = self.config.first_player.resolve(&mut self.rng);
        let next = self.state().next_round(first);
        self.publish(next);
        self.play_computer_turn();
    }

    /// Start over: new round and zeroed scores.
    pub fn reset_session(&mut self) {
        let first = self.config.first_player.resolve(&mut self.rng);
        self.publish(GameState::new(first));
        self.play_computer_turn();
    }

    /// Capture the session for an external store.
    pub fn snapshot(&self) -> SavedSession {
        SavedSession::capture(self.state(), self.difficulty())
    }

    fn publish(&mut self, next: GameState) {
        trace!(board = %next.board.display(), to_move = %next.current_player, "publishing state");
        self.state.publish(next);
    }
}

impl<R: RandomSource> std::fmt::Debug for GameEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("scoring", &self.scoring)
            .field("state", self.state())
            .field("difficulty", &self.difficulty())
            .finish()
    }
}

/// Victories go to the human facing the computer; in hotseat play X's seat
/// owns victories and O's seat owns defeats.
fn default_scoring(config: &EngineConfig) -> Scoring {
    match config.human() {
        Some(side) => Scoring::human_plays(side),
        None => Scoring::hotseat(),
    }
}
