//! Step benchmark: Measure one full generation over typical grid sizes.

use brainwave::automaton::rule::step_into;
use brainwave::Grid;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols);
    for cell in grid.cells_mut() {
        *cell = rng.gen();
    }
    grid
}

fn step_default_grid(c: &mut Criterion) {
    let previous = random_grid(30, 60, 1);
    let mut next = Grid::new(30, 60);

    c.bench_function("step_30x60_random", |b| {
        b.iter(|| step_into(black_box(&previous), &mut next));
    });
}

fn step_large_grid(c: &mut Criterion) {
    let previous = random_grid(200, 200, 2);
    let mut next = Grid::new(200, 200);

    c.bench_function("step_200x200_random", |b| {
        b.iter(|| step_into(black_box(&previous), &mut next));
    });
}

fn step_dormant_grid(c: &mut Criterion) {
    // All-ready grids are the freeze-detection path: every cell takes the
    // neighbor-counting branch and nothing changes.
    let previous = Grid::new(30, 60);
    let mut next = Grid::new(30, 60);

    c.bench_function("step_30x60_dormant", |b| {
        b.iter(|| step_into(black_box(&previous), &mut next));
    });
}

criterion_group!(
    benches,
    step_default_grid,
    step_large_grid,
    step_dormant_grid
);
criterion_main!(benches);
