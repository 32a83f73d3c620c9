//! Win and draw detection.

use crate::core::{Board, Cell, GameState, Player, WINNING_COMBINATIONS};
use crate::error::InvalidOutcome;

/// Find the first completed line of `cell`.
///
/// Lines are tested in declaration order (rows, columns, diagonals), so a
/// board with several completed lines always reports the same one.
/// `Cell::Empty` never wins.
#[must_use]
pub fn check_winner(board: &Board, cell: Cell) -> Option<[usize; 3]> {
    if cell.is_empty() {
        return None;
    }
    WINNING_COMBINATIONS
        .iter()
        .find(|line| line.iter().all(|&i| board[i] == cell))
        .copied()
}

/// Find a winner for either side, X checked first.
#[must_use]
pub fn winner_of(board: &Board) -> Option<(Player, [usize; 3])> {
    Player::BOTH
        .iter()
        .find_map(|&p| check_winner(board, p.to_cell()).map(|line| (p, line)))
}

/// Full board with no completed line.
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner_of(board).is_none()
}

/// Check that a state's recorded outcome matches its board.
///
/// Play through `apply_move` always passes. Records decoded from outside
/// the engine are checked with this before they are used:
/// - at most one side has a completed line, and it is the recorded winner
/// - a winner ends the round and owns every square of the stored line
/// - no winner means no stored line, and a finished round is a full board
pub fn verify_outcome(state: &GameState) -> Result<(), InvalidOutcome> {
    let board = &state.board;
    let x_line = check_winner(board, Cell::X);
    let o_line = check_winner(board, Cell::O);
    let on_board = match (x_line, o_line) {
        (Some(_), Some(_)) => return Err(InvalidOutcome::BothWon),
        (Some(_), None) => Some(Player::X),
        (None, Some(_)) => Some(Player::O),
        (None, None) => None,
    };
    if state.winner != on_board {
        return Err(InvalidOutcome::WinnerMismatch {
            recorded: state.winner,
            on_board,
        });
    }

    let line = &state.winning_combination;
    match state.winner {
        Some(winner) => {
            if !state.is_game_over {
                return Err(InvalidOutcome::UnfinishedWin(winner));
            }
            let owned = line.len() == 3 && line.iter().all(|&i| board[i] == winner.to_cell());
            if !owned {
                return Err(InvalidOutcome::LineNotOwned(winner));
            }
        }
        None => {
            if !line.is_empty() {
                return Err(InvalidOutcome::LineWithoutWinner);
            }
            if state.is_game_over && !board.is_full() {
                return Err(InvalidOutcome::OverWithoutResult);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::SmallVec;
    use Cell::{Empty as E, O, X};

    fn recorded(cells: [Cell; 9], winner: Option<Player>, over: bool, line: &[usize]) -> GameState {
        let mut state = GameState::new(Player::X);
        state.board = Board::from_cells(cells);
        state.winner = winner;
        state.is_game_over = over;
        state.winning_combination = SmallVec::from_slice(line);
        state
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(check_winner(&board, X), None);
        assert_eq!(check_winner(&board, O), None);
        assert_eq!(check_winner(&board, E), None);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_row_column_diagonal() {
        let row = Board::from_cells([E, E, E, X, X, X, O, O, E]);
        assert_eq!(check_winner(&row, X), Some([3, 4, 5]));
        assert_eq!(check_winner(&row, O), None);

        let column = Board::from_cells([O, X, E, O, X, E, E, X, E]);
        assert_eq!(check_winner(&column, X), Some([1, 4, 7]));

        let anti = Board::from_cells([X, X, O, E, O, E, O, E, X]);
        assert_eq!(check_winner(&anti, O), Some([2, 4, 6]));
        assert_eq!(winner_of(&anti), Some((Player::O, [2, 4, 6])));
    }

    #[test]
    fn test_first_declared_line_wins() {
        // Row 0 and column 0 both complete; rows are declared first.
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);
        assert_eq!(check_winner(&board, X), Some([0, 1, 2]));
    }

    #[test]
    fn test_no_line_is_none() {
        let board = Board::from_cells([X, O, X, E, O, E, E, X, E]);
        assert_eq!(check_winner(&board, X), None);
        assert_eq!(check_winner(&board, O), None);
        assert_eq!(winner_of(&board), None);
    }

    #[test]
    fn test_draw_detection() {
        let draw = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(is_draw(&draw));

        let won_full = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert!(!is_draw(&won_full));
    }

    #[test]
    fn test_verify_outcome_accepts_consistent_states() {
        let fresh = GameState::new(Player::O);
        assert_eq!(verify_outcome(&fresh), Ok(()));

        let won = recorded([X, X, X, O, O, E, E, E, E], Some(Player::X), true, &[0, 1, 2]);
        assert_eq!(verify_outcome(&won), Ok(()));

        let drawn = recorded([X, O, X, X, O, O, O, X, X], None, true, &[]);
        assert_eq!(verify_outcome(&drawn), Ok(()));
    }

    #[test]
    fn test_verify_outcome_rejects_unclaimed_line() {
        let state = recorded([X, X, X, O, O, E, E, E, E], None, false, &[]);
        assert_eq!(
            verify_outcome(&state),
            Err(InvalidOutcome::WinnerMismatch {
                recorded: None,
                on_board: Some(Player::X),
            })
        );
    }

    #[test]
    fn test_verify_outcome_rejects_winner_without_board_line() {
        let state = recorded([E; 9], Some(Player::O), true, &[]);
        assert_eq!(
            verify_outcome(&state),
            Err(InvalidOutcome::WinnerMismatch {
                recorded: Some(Player::O),
                on_board: None,
            })
        );
    }

    #[test]
    fn test_verify_outcome_rejects_two_winners() {
        let state = recorded([X, X, X, O, O, O, E, E, E], Some(Player::X), true, &[0, 1, 2]);
        assert_eq!(verify_outcome(&state), Err(InvalidOutcome::BothWon));
    }

    #[test]
    fn test_verify_outcome_checks_stored_line() {
        let wrong_line = recorded([X, X, X, O, O, E, E, E, E], Some(Player::X), true, &[3, 4, 5]);
        assert_eq!(verify_outcome(&wrong_line), Err(InvalidOutcome::LineNotOwned(Player::X)));

        let missing = recorded([X, X, X, O, O, E, E, E, E], Some(Player::X), true, &[]);
        assert_eq!(verify_outcome(&missing), Err(InvalidOutcome::LineNotOwned(Player::X)));

        let still_playing = recorded([X, X, X, O, O, E, E, E, E], Some(Player::X), false, &[0, 1, 2]);
        assert_eq!(verify_outcome(&still_playing), Err(InvalidOutcome::UnfinishedWin(Player::X)));

        let stray_line = recorded([E; 9], None, false, &[0, 1, 2]);
        assert_eq!(verify_outcome(&stray_line), Err(InvalidOutcome::LineWithoutWinner));
    }

    #[test]
    fn test_verify_outcome_rejects_early_game_over() {
        let state = recorded([X, O, E, E, E, E, E, E, E], None, true, &[]);
        assert_eq!(verify_outcome(&state), Err(InvalidOutcome::OverWithoutResult));
    }
}
