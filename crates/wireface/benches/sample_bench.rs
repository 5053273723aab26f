//! Criterion microbenches for the planar graph samplers and the JSON codec.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use wireface::json::{graph_from_json, graph_to_json};
use wireface::sample::{draw_grid, draw_wheel, GridCfg, ReplayToken, WheelCfg};

fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let grid_cfg = GridCfg {
        rows: 32,
        cols: 32,
        ..GridCfg::default()
    };
    group.bench_function(BenchmarkId::new("draw_grid", "32x32"), |b| {
        b.iter_batched(
            || ReplayToken { seed: 42, index: 0 },
            |mut tok| {
                tok.index = tok.index.wrapping_add(1);
                let _ = draw_grid(grid_cfg, tok);
            },
            BatchSize::SmallInput,
        )
    });
    let wheel_cfg = WheelCfg {
        spokes: 256,
        ..WheelCfg::default()
    };
    group.bench_function(BenchmarkId::new("draw_wheel", 256), |b| {
        b.iter_batched(
            || ReplayToken { seed: 7, index: 0 },
            |mut tok| {
                tok.index = tok.index.wrapping_add(1);
                let _ = draw_wheel(wheel_cfg, tok);
            },
            BatchSize::SmallInput,
        )
    });
    let text = graph_to_json(&draw_grid(grid_cfg, ReplayToken { seed: 1, index: 1 })).unwrap();
    group.bench_function(BenchmarkId::new("graph_from_json", "32x32"), |b| {
        b.iter(|| {
            let _ = graph_from_json(&text).unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, bench_samplers);
criterion_main!(benches);
