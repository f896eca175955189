//! Criterion benchmarks for the axis-aligned sweep.
//! Focus sizes: segments per axis in {8, 64, 512}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullsweep::rand::{draw_axis_segments, ReplayToken, SegmentsCfg};
use hullsweep::sweep::sweep_intersections;

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for &m in &[8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("sweep_intersections", m), &m, |b, &m| {
            let cfg = SegmentsCfg {
                horizontals: m,
                verticals: m,
                half_extent: 1.0,
            };
            b.iter_batched(
                || draw_axis_segments(cfg, ReplayToken { seed: 45, index: m as u64 }),
                |pts| {
                    let _out = sweep_intersections(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
