//! Benchmarks for the support enumeration solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bimatrix_solver::games::random::random_game;
use bimatrix_solver::support::{support_enumeration, SupportEnumConfig, SupportEnumSolver};

fn first_equilibrium_benchmark(c: &mut Criterion) {
    let game = random_game(6, 6, 42).unwrap();
    let config = SupportEnumConfig::default();

    c.bench_function("random_6x6_first_equilibrium", |b| {
        b.iter(|| black_box(support_enumeration(&game, &config).next()))
    });
}

fn full_enumeration_benchmark(c: &mut Criterion) {
    let game = random_game(6, 6, 42).unwrap();
    let solver = SupportEnumSolver::new(game, SupportEnumConfig::default()).unwrap();

    c.bench_function("random_6x6_sequential", |b| b.iter(|| black_box(solver.solve())));
    c.bench_function("random_6x6_parallel", |b| b.iter(|| black_box(solver.solve_parallel())));
}

criterion_group!(benches, first_equilibrium_benchmark, full_enumeration_benchmark);
criterion_main!(benches);
