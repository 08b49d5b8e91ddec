use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fivept::decomposition::*;
use fivept::grid::Fields;
use fivept::sink::CountingSink;
use fivept::solver::*;

fn bench_engines(c: &mut Criterion) {
    let (nx, ny, nt) = (2000, 200, 4);
    let workers = resolve_workers(0);
    let mut group = c.benchmark_group("step");
    for engine in [Engine::Naive, Engine::Serial, Engine::Parallel] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{engine:?}")),
            &engine,
            |b, engine| {
                b.iter(|| {
                    let fields = Fields::initialize(nx, ny).unwrap();
                    let decomposer = Decomposer::new(workers, Backend::Rayon);
                    let mut solver = Solver::from_fields(fields, *engine, decomposer, nt);
                    let mut sink = CountingSink::default();
                    solver.run(&mut sink).unwrap();
                    sink.count
                });
            },
        );
    }
    group.finish();
}

fn bench_backends(c: &mut Criterion) {
    let workers = resolve_workers(0);
    let mut group = c.benchmark_group("update");
    for backend in [Backend::Serial, Backend::Rayon, Backend::Threads] {
        let mut fields = Fields::initialize(4000, 200).unwrap();
        let decomposer = Decomposer::new(workers, backend);
        group.bench_function(format!("{backend:?}"), |b| {
            b.iter(|| Engine::Parallel.update(&mut fields, &decomposer));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engines, bench_backends);
criterion_main!(benches);
