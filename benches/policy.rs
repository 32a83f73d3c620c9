//! Policy and engine benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ttt_engine::core::Cell::{Empty as E, O, X};
use ttt_engine::{
    find_winning_move, Board, ComputerPolicy, Difficulty, EngineConfig, GameEngine, GameRng,
    Player, TieredPolicy,
};

fn midgame() -> Board {
    Board::from_cells([X, E, O, E, X, E, E, O, E])
}

fn bench_find_winning_move(c: &mut Criterion) {
    let board = midgame();
    c.bench_function("find_winning_move", |b| {
        b.iter(|| black_box(find_winning_move(black_box(&board), Player::X)))
    });
}

fn bench_policy_tiers(c: &mut Criterion) {
    let board = midgame();
    for level in Difficulty::ALL {
        let policy = TieredPolicy::new(level);
        let mut rng = GameRng::new(7);
        c.bench_function(&format!("choose_move_{level}"), |b| {
            b.iter(|| black_box(policy.choose_move(&board, Player::O, &mut rng)))
        });
    }
}

fn bench_full_game_vs_expert(c: &mut Criterion) {
    c.bench_function("full_game_vs_expert", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(EngineConfig::default().with_seed(11));
            for pos in 0..9 {
                engine.apply_move(pos);
            }
            black_box(engine.state().is_game_over)
        })
    });
}

criterion_group!(
    benches,
    bench_find_winning_move,
    bench_policy_tiers,
    bench_full_game_vs_expert,
);
criterion_main!(benches);
