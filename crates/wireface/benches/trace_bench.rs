//! Criterion benchmarks for adjacency construction and face tracing.
//! Focus sizes: jittered triangulated grids with n×n cells, n in {4, 16, 32, 64}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use wireface::faces::{trace_faces, AdjacencyTable, OrderStrategy, TraceCfg};
use wireface::sample::{draw_grid, GridCfg, ReplayToken};

fn grid(n: usize, seed: u64) -> wireface::Graph {
    let cfg = GridCfg {
        rows: n,
        cols: n,
        ..GridCfg::default()
    };
    draw_grid(cfg, ReplayToken { seed, index: 0 })
}

fn bench_faces(c: &mut Criterion) {
    let mut group = c.benchmark_group("faces");
    for &n in &[4usize, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("adjacency_build", n), &n, |b, &n| {
            b.iter_batched(
                || grid(n, 43),
                |g| {
                    let _adj = AdjacencyTable::build(&g);
                },
                BatchSize::SmallInput,
            )
        });

        for (label, order) in [
            ("trace_entry_aware", OrderStrategy::EntryAware),
            ("trace_global_angle", OrderStrategy::GlobalAngle),
        ] {
            let cfg = TraceCfg {
                order,
                ..TraceCfg::default()
            };
            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, &n| {
                let g = grid(n, 44);
                let adj = AdjacencyTable::build(&g);
                b.iter(|| {
                    let _faces = trace_faces(&g, &adj, cfg).unwrap();
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_faces);
criterion_main!(benches);
