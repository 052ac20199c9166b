use criterion::{criterion_group, criterion_main, Criterion};
use grid_snake::{Direction, EngineSettings, GameStatus, GridSnakeEngine, SessionRng};

fn create_engine(rows: usize, columns: usize, seed: u64) -> GridSnakeEngine {
    GridSnakeEngine::new(EngineSettings::with_grid(rows, columns), SessionRng::new(seed)).unwrap()
}

fn bench_restart_large_grid(c: &mut Criterion) {
    c.bench_function("restart_200x200", |b| {
        let mut engine = create_engine(200, 200, 42);
        b.iter(|| engine.restart());
    });
}

fn bench_serpentine_sweep(c: &mut Criterion) {
    // Sweeps the grid row by row so the snake keeps eating and growing.
    c.bench_function("serpentine_sweep_30x30", |b| {
        b.iter(|| {
            let mut engine = create_engine(30, 30, 7);
            let mut moves = 0;
            while engine.status() == GameStatus::Playing && moves < 5_000 {
                let head = engine.snake_segments()[0];
                let heading_right = head.row % 2 == 0;
                let direction = match (heading_right, head.col) {
                    (true, col) if col + 1 == engine.columns() => Direction::Down,
                    (false, 0) => Direction::Down,
                    (true, _) => Direction::Right,
                    (false, _) => Direction::Left,
                };
                engine.move_snake(direction);
                moves += 1;
            }
            engine.score()
        });
    });
}

fn bench_random_walk(c: &mut Criterion) {
    c.bench_function("random_walk_20x20_1000_moves", |b| {
        b.iter(|| {
            let mut engine = create_engine(20, 20, 3);
            let mut rng = SessionRng::new(11);
            for _ in 0..1_000 {
                if engine.status() != GameStatus::Playing {
                    engine.restart();
                }
                engine.move_snake(Direction::ALL[rng.random_range(0..4usize)]);
            }
            engine.score()
        });
    });
}

criterion_group!(
    benches,
    bench_restart_large_grid,
    bench_serpentine_sweep,
    bench_random_walk
);
criterion_main!(benches);
