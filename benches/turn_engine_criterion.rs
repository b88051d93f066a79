use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use random_chess::engines::turn_engine::TurnEngine;
use random_chess::game_state::board::Board;
use random_chess::game_state::chess_types::{PieceKind, Player, Square, Team};
use random_chess::move_generation::move_generator::{candidate_moves, candidate_moves_for_team};
use random_chess::utils::auto_play::play_to_completion;

const WHITE_FIRST: [Player; 2] = [Player::new(Team::White), Player::new(Team::Black)];

fn open_board_with_queen() -> (Board, Square) {
    let mut board = Board::empty();
    let center = Square::new(3, 3).expect("center square is on the board");
    board
        .place(center, Team::White, PieceKind::Queen)
        .expect("queen is a valid occupant");
    (board, center)
}

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_generation");

    let start = Board::new();
    group.bench_function("opening_position_white", |b| {
        b.iter(|| black_box(candidate_moves_for_team(black_box(&start), Team::White).len()))
    });

    let (board, center) = open_board_with_queen();
    group.bench_function("lone_queen_rays", |b| {
        b.iter(|| black_box(candidate_moves(black_box(&board), center).len()))
    });

    group.finish();
}

fn bench_random_games(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_games");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for seed in [1u64, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(seed), &seed, |b, &seed| {
            b.iter(|| {
                let mut engine = TurnEngine::with_seed(Board::new(), WHITE_FIRST, seed)
                    .expect("players are White and Black");
                let summary = play_to_completion(&mut engine, 100_000, |_, _| {})
                    .expect("random game should run");
                black_box(summary.plies())
            });
        });
    }

    group.finish();
}

criterion_group!(turn_engine_benches, bench_move_generation, bench_random_games);
criterion_main!(turn_engine_benches);
