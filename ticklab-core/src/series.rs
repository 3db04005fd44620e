//! Synthetic price history: a bounded random walk shaped into OHLCV bars.

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{ChartConfig, Tuning};
use crate::domain::Bar;

/// Output of one history generation pass.
///
/// `last_close` is `None` when zero bars were produced; the caller then
/// leaves the instrument price as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSeries {
    pub bars: Vec<Bar>,
    pub last_close: Option<f64>,
}

impl GeneratedSeries {
    fn empty() -> Self {
        Self { bars: Vec::new(), last_close: None }
    }
}

/// Walk bucket boundaries backwards from `end_ms` and synthesize one bar
/// per bucket, each opening at the previous close.
///
/// `bars_to_load == 0`, or a span reaching past the epoch, produces an
/// empty series rather than an error.
pub fn generate_history(
    cfg: &ChartConfig,
    tuning: &Tuning,
    end_ms: u64,
    rng: &mut StdRng,
) -> GeneratedSeries {
    let step = cfg.periodicity.duration_millis();
    let span = step * u64::from(cfg.bars_to_load);
    if cfg.bars_to_load == 0 || span >= end_ms {
        return GeneratedSeries::empty();
    }

    let start = end_ms - span;
    let mut bars = Vec::with_capacity(cfg.bars_to_load as usize);
    let mut last_close = rng.gen_range(tuning.initial_close.0..tuning.initial_close.1);

    let mut time_ms = start;
    while time_ms < end_ms {
        let open = last_close;
        let close = open + rng.gen_range(tuning.walk_step.0..tuning.walk_step.1);
        let high = open.max(close) + rng.gen_range(0.0..tuning.wick_extension);
        let low = open.min(close) - rng.gen_range(0.0..tuning.wick_extension);
        let volume = rng.gen_range(tuning.volume_range.0..tuning.volume_range.1);

        bars.push(Bar { time_ms, open, high, low, close, volume });

        last_close = close;
        time_ms += step;
    }

    GeneratedSeries { bars, last_close: Some(last_close) }
}
