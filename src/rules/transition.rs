//! The move transition.
//!
//! `apply_move` turns a state and a square into the next state, or reports
//! why the move is illegal. It never mutates its input.

use std::sync::Arc;

use smallvec::SmallVec;
use tracing::info;

use super::win::check_winner;
use crate::core::{GameState, MoveRecord, Player, BOARD_SIZE};
use crate::error::InvalidMove;

/// Decides which side a win is credited to.
///
/// Wraps a function answering "is this player the local human?". A win by
/// the local human counts as a victory, any other win as a defeat.
#[derive(Clone)]
pub struct Scoring {
    is_local_human: Arc<dyn Fn(Player) -> bool + Send + Sync>,
}

impl Scoring {
    /// Score with an arbitrary side resolver.
    pub fn new(is_local_human: impl Fn(Player) -> bool + Send + Sync + 'static) -> Self {
        Self {
            is_local_human: Arc::new(is_local_human),
        }
    }

    /// The local human plays `side`; the other side is the opponent.
    pub fn human_plays(side: Player) -> Self {
        Self::new(move |p| p == side)
    }

    /// Two humans sharing the scoreboard: X's seat owns `victories`,
    /// O's seat owns `defeats`.
    pub fn hotseat() -> Self {
        Self::human_plays(Player::X)
    }

    /// Check if `player` is the local human.
    #[must_use]
    pub fn is_local_human(&self, player: Player) -> bool {
        (self.is_local_human)(player)
    }
}

impl std::fmt::Debug for Scoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scoring")
            .field("x_is_local_human", &self.is_local_human(Player::X))
            .field("o_is_local_human", &self.is_local_human(Player::O))
            .finish()
    }
}

/// Check whether `position` is a legal move in `state`.
///
/// Checks, in order: position on the board, round not over, square empty.
pub fn validate_move(state: &GameState, position: usize) -> Result<(), InvalidMove> {
    if position >= BOARD_SIZE {
        return Err(InvalidMove::OutOfRange(position));
    }
    if state.is_game_over {
        return Err(InvalidMove::GameOver);
    }
    if !state.board.is_empty_at(position) {
        return Err(InvalidMove::Occupied(position));
    }
    Ok(())
}

/// Place the current player's mark at `position` and resolve the outcome.
///
/// - Win (judged on the mover's mark): winner, game over, the line, and one
///   of victories/defeats incremented per `scoring`.
/// - Full board without a line: game over and one tie.
/// - Otherwise the turn passes to the other player.
pub fn apply_move(
    state: &GameState,
    position: usize,
    scoring: &Scoring,
) -> Result<GameState, InvalidMove> {
    validate_move(state, position)?;

    let mover = state.current_player;
    let board = state
        .board
        .place(position, mover.to_cell())
        .ok_or(InvalidMove::OutOfRange(position))?;

    let mut next = state.clone();
    next.board = board;
    next.first_move = false;
    next.history.push_back(MoveRecord {
        position,
        player: mover,
    });

    if let Some(line) = check_winner(&board, mover.to_cell()) {
        next.winner = Some(mover);
        next.is_game_over = true;
        next.winning_combination = SmallVec::from_buf(line);
        next.scores.record_win(mover, scoring.is_local_human(mover));
        info!(winner = %mover, ?line, "round won");
    } else if board.is_full() {
        next.is_game_over = true;
        next.scores.record_tie();
        info!("round drawn");
    } else {
        next.current_player = mover.opposite();
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Cell, GameStatus};
    use Cell::{Empty as E, O, X};

    fn state_with(cells: [Cell; 9], to_move: Player) -> GameState {
        let mut state = GameState::new(to_move);
        state.board = Board::from_cells(cells);
        state.first_move = false;
        state
    }

    #[test]
    fn test_first_move_center() {
        let state = GameState::new(Player::X);
        let next = apply_move(&state, 4, &Scoring::hotseat()).unwrap();

        assert_eq!(next.board[4], X);
        assert_eq!(next.board.count(E), 8);
        assert_eq!(next.current_player, Player::O);
        assert!(!next.is_game_over);
        assert!(!next.first_move);
        assert_eq!(next.last_move(), Some(MoveRecord { position: 4, player: Player::X }));
        // Input untouched.
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_validation_order() {
        let mut state = state_with([X, E, E, E, E, E, E, E, E], Player::O);
        assert_eq!(validate_move(&state, 9), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(validate_move(&state, 0), Err(InvalidMove::Occupied(0)));
        assert_eq!(validate_move(&state, 1), Ok(()));

        state.is_game_over = true;
        // Out of range is still reported first, game-over before occupancy.
        assert_eq!(validate_move(&state, 12), Err(InvalidMove::OutOfRange(12)));
        assert_eq!(validate_move(&state, 0), Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_win_scored_as_victory_for_human() {
        let state = state_with([X, X, E, O, O, E, E, E, E], Player::X);
        let next = apply_move(&state, 2, &Scoring::human_plays(Player::X)).unwrap();

        assert_eq!(next.winner, Some(Player::X));
        assert!(next.is_game_over);
        assert_eq!(next.winning_combination.as_slice(), &[0, 1, 2]);
        assert_eq!(next.scores.victories, 1);
        assert_eq!(next.scores.defeats, 0);
        assert_eq!(next.scores.x_wins, 1);
        // Mover stays current once the round is over.
        assert_eq!(next.current_player, Player::X);
    }

    #[test]
    fn test_win_scored_by_side_not_mark() {
        // Human plays O here, so an O win is a victory.
        let state = state_with([X, X, E, O, O, E, X, E, E], Player::O);
        let next = apply_move(&state, 5, &Scoring::human_plays(Player::O)).unwrap();

        assert_eq!(next.winner, Some(Player::O));
        assert_eq!(next.scores.victories, 1);
        assert_eq!(next.scores.defeats, 0);
        assert_eq!(next.scores.o_wins, 1);

        let as_computer = apply_move(&state, 5, &Scoring::human_plays(Player::X)).unwrap();
        assert_eq!(as_computer.scores.victories, 0);
        assert_eq!(as_computer.scores.defeats, 1);
    }

    #[test]
    fn test_draw_increments_ties() {
        let state = state_with([X, O, X, X, O, O, O, X, E], Player::X);
        let next = apply_move(&state, 8, &Scoring::hotseat()).unwrap();

        assert!(next.is_game_over);
        assert_eq!(next.winner, None);
        assert!(next.winning_combination.is_empty());
        assert_eq!(next.scores.ties, 1);
        assert_eq!(next.status(), GameStatus::Draw);
    }

    #[test]
    fn test_last_square_win_is_not_a_draw() {
        let state = state_with([X, O, X, O, O, X, O, X, E], Player::X);
        let next = apply_move(&state, 8, &Scoring::hotseat()).unwrap();

        assert_eq!(next.winner, Some(Player::X));
        assert_eq!(next.winning_combination.as_slice(), &[2, 5, 8]);
        assert_eq!(next.scores.ties, 0);
    }

    #[test]
    fn test_terminal_rejects_every_square() {
        let state = state_with([X, X, E, O, O, E, E, E, E], Player::X);
        let done = apply_move(&state, 2, &Scoring::hotseat()).unwrap();
        for pos in 0..BOARD_SIZE {
            assert!(apply_move(&done, pos, &Scoring::hotseat()).is_err());
        }
    }

    #[test]
    fn test_scoring_debug() {
        let debug = format!("{:?}", Scoring::human_plays(Player::O));
        assert!(debug.contains("o_is_local_human: true"));
    }
}
