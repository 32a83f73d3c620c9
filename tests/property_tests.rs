//! Property tests for the move transition and the computer policy.

use proptest::prelude::*;

use ttt_engine::core::{Cell, EngineConfig, FirstPlayer};
use ttt_engine::{
    apply_move, check_winner, validate_move, verify_outcome, Board, ComputerPolicy, Difficulty,
    GameEngine, GameRng, GameState, Player, Scoring, TieredPolicy, WINNING_COMBINATIONS,
};

fn player(x: bool) -> Player {
    if x {
        Player::X
    } else {
        Player::O
    }
}

/// Replay `moves` from an empty board, skipping illegal ones.
fn replay(first: Player, moves: &[usize]) -> GameState {
    let scoring = Scoring::hotseat();
    moves.iter().fold(GameState::new(first), |state, &pos| {
        apply_move(&state, pos, &scoring).unwrap_or(state)
    })
}

fn moves_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..24)
}

proptest! {
    #[test]
    fn prop_illegal_move_leaves_engine_untouched(
        moves in moves_strategy(),
        probe in 0usize..16,
        x_first in any::<bool>(),
    ) {
        let config = EngineConfig::default()
            .hotseat()
            .with_first_player(FirstPlayer::Fixed(player(x_first)));
        let mut engine = GameEngine::new(config);
        for &pos in &moves {
            engine.apply_move(pos);
        }
        let before = engine.state().clone();

        engine.apply_move(probe);

        if validate_move(&before, probe).is_err() {
            prop_assert_eq!(engine.state(), &before);
        } else {
            prop_assert_ne!(engine.state(), &before);
        }
    }

    #[test]
    fn prop_legal_move_changes_exactly_one_cell(
        moves in moves_strategy(),
        x_first in any::<bool>(),
    ) {
        let scoring = Scoring::hotseat();
        let mut state = GameState::new(player(x_first));
        for pos in moves {
            let Ok(next) = apply_move(&state, pos, &scoring) else {
                continue;
            };
            let changed: Vec<usize> = (0..9)
                .filter(|&i| state.board[i] != next.board[i])
                .collect();
            prop_assert_eq!(changed, vec![pos]);
            prop_assert_eq!(next.board[pos], state.current_player.to_cell());
            prop_assert_eq!(next.history.len(), state.history.len() + 1);
            prop_assert!(!next.first_move);
            state = next;
        }
    }

    #[test]
    fn prop_terminal_flags_agree_with_board(
        moves in moves_strategy(),
        x_first in any::<bool>(),
    ) {
        let state = replay(player(x_first), &moves);
        prop_assert_eq!(verify_outcome(&state), Ok(()));

        match state.winner {
            Some(winner) => {
                prop_assert!(state.is_game_over);
                prop_assert_eq!(state.winning_combination.len(), 3);
                for &i in &state.winning_combination {
                    prop_assert_eq!(state.board[i], winner.to_cell());
                }
                prop_assert_eq!(state.scores.wins_for(winner), 1);
                prop_assert_eq!(state.scores.ties, 0);
            }
            None if state.is_game_over => {
                prop_assert!(state.board.is_full());
                prop_assert!(state.winning_combination.is_empty());
                prop_assert_eq!(state.scores.ties, 1);
            }
            None => {
                prop_assert!(!state.board.is_full());
                prop_assert!(check_winner(&state.board, Cell::X).is_none());
                prop_assert!(check_winner(&state.board, Cell::O).is_none());
                prop_assert_eq!(state.scores.rounds_played(), 0);
            }
        }
    }

    #[test]
    fn prop_finished_round_rejects_everything(
        moves in moves_strategy(),
        x_first in any::<bool>(),
    ) {
        let state = replay(player(x_first), &moves);
        prop_assume!(state.is_game_over);
        for pos in 0..12 {
            prop_assert!(apply_move(&state, pos, &Scoring::hotseat()).is_err());
        }
    }

    #[test]
    fn prop_computer_completes_its_line(
        line in 0usize..8,
        gap in 0usize..3,
        x in any::<bool>(),
        seed in any::<u64>(),
        level in prop::sample::select(vec![Difficulty::Harder, Difficulty::Expert]),
    ) {
        let mark = player(x);
        let combo = WINNING_COMBINATIONS[line];
        let mut cells = [Cell::Empty; 9];
        for (k, &i) in combo.iter().enumerate() {
            if k != gap {
                cells[i] = mark.to_cell();
            }
        }
        let board = Board::from_cells(cells);
        let mut rng = GameRng::new(seed);

        let chosen = TieredPolicy::new(level).choose_move(&board, mark, &mut rng);
        prop_assert_eq!(chosen, Some(combo[gap]));
    }

    #[test]
    fn prop_computer_blocks_single_threat(
        line in 0usize..8,
        gap in 0usize..3,
        x in any::<bool>(),
        seed in any::<u64>(),
        level in prop::sample::select(vec![Difficulty::Harder, Difficulty::Expert]),
    ) {
        let mark = player(x);
        let combo = WINNING_COMBINATIONS[line];
        let mut cells = [Cell::Empty; 9];
        for (k, &i) in combo.iter().enumerate() {
            if k != gap {
                cells[i] = mark.opposite().to_cell();
            }
        }
        let board = Board::from_cells(cells);
        let mut rng = GameRng::new(seed);

        let chosen = TieredPolicy::new(level).choose_move(&board, mark, &mut rng);
        prop_assert_eq!(chosen, Some(combo[gap]));
    }

    #[test]
    fn prop_engine_games_always_end(seed in any::<u64>(), level in 0u8..3) {
        let config = EngineConfig::default()
            .with_seed(seed)
            .with_difficulty(Difficulty::from_ordinal(level));
        let mut engine = GameEngine::new(config);
        for pos in 0..9 {
            engine.apply_move(pos);
        }
        prop_assert!(engine.state().is_game_over);
        prop_assert_eq!(engine.state().scores.rounds_played(), 1);
    }
}
