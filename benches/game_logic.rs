use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{Board, GameConfig, GameRng, GameSnapshot, GameState};
use tui_memory::types::{Difficulty, Position};

fn bench_deal(c: &mut Criterion) {
    let config = GameConfig::from(Difficulty::Hard);
    let mut rng = GameRng::new(12345);

    c.bench_function("deal_64_tiles", |b| {
        b.iter(|| Board::deal(black_box(&config), &mut rng))
    });
}

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::with_difficulty(Difficulty::Hard, 12345);
    state.toggle_pause();

    c.bench_function("advance_50ms", |b| {
        b.iter(|| {
            state.advance(black_box(50));
        })
    });
}

fn bench_select_pair(c: &mut Criterion) {
    c.bench_function("select_reset_cycle", |b| {
        let mut state = GameState::with_difficulty(Difficulty::Medium, 12345);
        b.iter(|| {
            state.select_tile(black_box(Position::new(0, 0)));
            state.select_tile(black_box(Position::new(0, 1)));
            state.reset();
            state.take_events();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::with_difficulty(Difficulty::Hard, 12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into_64", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(snap.fingerprint())
        })
    });
}

criterion_group!(benches, bench_deal, bench_advance, bench_select_pair, bench_snapshot);
criterion_main!(benches);
