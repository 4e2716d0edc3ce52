//! Benchmarks for the rolling sweep history.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use specview::{Frame, SweepHistory};

// ubertooth-specan sweeps are 79 buckets wide in practice.
const SWEEP_WIDTH: usize = 79;

fn make_frame() -> Frame {
    Frame::new((0..SWEEP_WIDTH).map(|i| i as f64 / SWEEP_WIDTH as f64).collect())
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_push");
    group.throughput(Throughput::Elements(1));

    for depth in [100usize, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let history = SweepHistory::new(depth);
            // Pre-fill so every push exercises the eviction path.
            for _ in 0..depth {
                history.push(make_frame());
            }
            b.iter(|| history.push(black_box(make_frame())));
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_snapshot");

    for depth in [100usize, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            let history = SweepHistory::new(depth);
            for _ in 0..depth {
                history.push(make_frame());
            }
            b.iter(|| black_box(history.snapshot()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_push, bench_snapshot);
criterion_main!(benches);
