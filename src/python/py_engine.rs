//! Engine bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Difficulty, EngineConfig, FirstPlayer, GameRng, Player};
use crate::engine::GameEngine;
use crate::persist::SavedSession;

fn parse_player(name: &str) -> PyResult<Player> {
    match name {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        other => Err(PyValueError::new_err(format!("unknown player {other:?}"))),
    }
}

fn build_config(
    seed: u64,
    computer: Option<&str>,
    first: Option<&str>,
    difficulty: u8,
    tiers: bool,
) -> PyResult<EngineConfig> {
    let mut config = EngineConfig::default()
        .with_seed(seed)
        .with_difficulty(Difficulty::from_ordinal(difficulty))
        .hotseat();
    if let Some(side) = computer {
        config = config.with_computer(parse_player(side)?);
    }
    if let Some(side) = first {
        config = config.with_first_player(FirstPlayer::Fixed(parse_player(side)?));
    }
    if !tiers {
        config = config.without_difficulty_tiers();
    }
    Ok(config)
}

/// Python wrapper for GameEngine.
///
/// Observers are not exposed; read the properties after each call.
#[pyclass(name = "GameEngine", unsendable)]
pub struct PyGameEngine {
    engine: GameEngine<GameRng>,
}

#[pymethods]
impl PyGameEngine {
    /// Create a new session.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible games
    /// - computer: side the computer plays ("X", "O"), or None for two humans
    /// - first: fixed opener ("X", "O"), or None for a coin flip per round
    /// - difficulty: 0 Easy, 1 Harder, 2 Expert
    /// - tiers: honor the difficulty (False pins win/block/random)
    #[new]
    #[pyo3(signature = (seed = 42, computer = Some("O"), first = None, difficulty = 2, tiers = true))]
    fn new(
        seed: u64,
        computer: Option<&str>,
        first: Option<&str>,
        difficulty: u8,
        tiers: bool,
    ) -> PyResult<Self> {
        let config = build_config(seed, computer, first, difficulty, tiers)?;
        Ok(Self {
            engine: GameEngine::new(config),
        })
    }

    /// Resume a session from bytes produced by `snapshot`.
    #[staticmethod]
    #[pyo3(signature = (data, seed = 42, computer = Some("O")))]
    fn restore(data: Vec<u8>, seed: u64, computer: Option<&str>) -> PyResult<Self> {
        let saved = SavedSession::from_bytes(&data)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let config = build_config(seed, computer, None, saved.difficulty, true)?;
        let engine = GameEngine::restore(config, GameRng::new(seed), &saved)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Play the current player's mark. Illegal squares are ignored.
    fn apply_move(&mut self, position: i64) {
        if let Ok(position) = usize::try_from(position) {
            self.engine.apply_move(position);
        }
    }

    /// New round, scores kept.
    fn reset_game(&mut self) {
        self.engine.reset_game();
    }

    /// New round, scores cleared.
    fn reset_session(&mut self) {
        self.engine.reset_session();
    }

    /// Set difficulty by ordinal (0 Easy, 1 Harder, 2 Expert).
    fn set_difficulty(&mut self, level: u8) {
        self.engine.set_difficulty(Difficulty::from_ordinal(level));
    }

    #[getter]
    fn difficulty(&self) -> u8 {
        self.engine.difficulty().ordinal()
    }

    /// Cell ordinals as a list.
    #[getter]
    fn board(&self) -> Vec<u8> {
        self.engine.state().board.ordinals().to_vec()
    }

    /// Cell ordinals as a numpy array.
    fn board_array<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, &self.engine.state().board.ordinals())
    }

    #[getter]
    fn current_player(&self) -> String {
        self.engine.state().current_player.to_string()
    }

    #[getter]
    fn winner(&self) -> Option<String> {
        self.engine.state().winner.map(|p| p.to_string())
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.engine.state().is_game_over
    }

    #[getter]
    fn winning_combination(&self) -> Vec<usize> {
        self.engine.state().winning_combination.to_vec()
    }

    /// (victories, defeats, ties)
    #[getter]
    fn scores(&self) -> (u32, u32, u32) {
        let s = self.engine.state().scores;
        (s.victories, s.defeats, s.ties)
    }

    /// Serialize the session for later `restore`.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        self.engine
            .snapshot()
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        format!(
            "GameEngine(to_move={}, over={}, board={:?})",
            state.current_player,
            state.is_game_over,
            state.board.display()
        )
    }
}
