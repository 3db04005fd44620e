//! Criterion benchmarks for simulator hot paths.
//!
//! Benchmarks:
//! 1. History generation (per bar count)
//! 2. Tick application and rollover against a live aggregator
//! 3. Schedule polling at a steady cadence
//! 4. Price scale fitting plus a full geometry pass

use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ticklab_core::aggregator::CandleAggregator;
use ticklab_core::chart::PriceScale;
use ticklab_core::config::{ChartConfig, Tuning};
use ticklab_core::periodicity::Periodicity;
use ticklab_core::schedule::TickSchedule;
use ticklab_core::series::generate_history;

const END_MS: u64 = 1_700_000_000_000;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_ticks(n: usize) -> Vec<(f64, u64)> {
    let mut rng = StdRng::seed_from_u64(9);
    (0..n)
        .map(|_| (rng.gen_range(-0.5..0.5), rng.gen_range(100..1100)))
        .collect()
}

// ── 1. History Generation ────────────────────────────────────────────

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_history");
    let tuning = Tuning::default();

    for &bar_count in &[60u32, 240, 1000] {
        let cfg = ChartConfig {
            bars_to_load: bar_count,
            periodicity: Periodicity::OneMinute,
            ..ChartConfig::default()
        };
        group.bench_with_input(BenchmarkId::new("one_minute", bar_count), &bar_count, |b, _| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                generate_history(black_box(&cfg), black_box(&tuning), END_MS, &mut rng)
            });
        });
    }

    group.finish();
}

// ── 2. Tick Application ──────────────────────────────────────────────

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    let ticks = make_ticks(10_000);
    group.bench_function("apply_10k_ticks", |b| {
        b.iter(|| {
            let mut agg = CandleAggregator::new(150.0, 0);
            for &(change, volume) in &ticks {
                agg.apply_tick(change, volume);
            }
            black_box(&agg);
        });
    });

    // A day of one-minute bars: sixty ticks per bar, then a rollover.
    let day_ticks = make_ticks(60);
    group.bench_function("one_minute_day_1440_bars", |b| {
        b.iter(|| {
            let mut agg = CandleAggregator::new(150.0, 0);
            let mut now_ms = 0u64;
            for _ in 0..1440 {
                for &(change, volume) in &day_ticks {
                    agg.apply_tick(change, volume);
                }
                now_ms += 60_000;
                agg.rollover(now_ms);
            }
            black_box(&agg);
        });
    });

    group.finish();
}

// ── 3. Schedule Polling ──────────────────────────────────────────────

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");

    group.bench_function("poll_one_hour_of_seconds", |b| {
        b.iter(|| {
            let t0 = Instant::now();
            let mut schedule = TickSchedule::new();
            schedule.arm(t0, Duration::from_secs(1), Duration::from_secs(60));
            for s in 1..=3600u64 {
                black_box(schedule.poll(t0 + Duration::from_secs(s)));
            }
        });
    });

    group.finish();
}

// ── 4. Chart Geometry ────────────────────────────────────────────────

fn bench_chart_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_geometry");
    let tuning = Tuning::default();

    for &bar_count in &[60u32, 240, 1000] {
        let cfg = ChartConfig {
            bars_to_load: bar_count,
            periodicity: Periodicity::OneMinute,
            ..ChartConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        let series = generate_history(&cfg, &tuning, END_MS, &mut rng);

        group.bench_with_input(BenchmarkId::new("fit_and_map", bar_count), &bar_count, |b, _| {
            b.iter(|| {
                let scale = PriceScale::fit(black_box(&series.bars), 40).unwrap();
                for bar in &series.bars {
                    black_box(scale.y_for(bar.high));
                    black_box(scale.y_for(bar.low));
                }
                black_box(scale.gridlines());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_aggregation,
    bench_schedule,
    bench_chart_fit,
);
criterion_main!(benches);
