//! Live candle aggregation: completed history plus one mutating open bar.

use std::mem;

use serde::{Deserialize, Serialize};

use crate::domain::Bar;

/// Owns the bar series for one session.
///
/// History entries never change after they are pushed; every tick lands on
/// `open_bar` alone. A rollover retires the open bar into history and opens
/// the next one at its close, so consecutive bars always join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandleAggregator {
    history: Vec<Bar>,
    open_bar: Bar,
}

impl CandleAggregator {
    /// Start with no history, first bar opening at `open_price`.
    pub fn new(open_price: f64, now_ms: u64) -> Self {
        Self::seed(Vec::new(), open_price, now_ms)
    }

    /// Start from preloaded history (generated or otherwise), first live
    /// bar opening at `open_price`.
    pub fn seed(history: Vec<Bar>, open_price: f64, now_ms: u64) -> Self {
        Self { history, open_bar: Bar::opening(open_price, now_ms) }
    }

    /// Fold one tick into the open bar.
    pub fn apply_tick(&mut self, price_change: f64, volume: u64) {
        self.open_bar.apply_tick(price_change, volume);
    }

    /// Retire the open bar into history and open the next one at its
    /// close. Returns the completed bar.
    pub fn rollover(&mut self, now_ms: u64) -> Bar {
        let next_open = self.open_bar.close;
        let completed = mem::replace(&mut self.open_bar, Bar::opening(next_open, now_ms));
        self.history.push(completed.clone());
        completed
    }

    pub fn history(&self) -> &[Bar] {
        &self.history
    }

    pub fn open_bar(&self) -> &Bar {
        &self.open_bar
    }

    /// Render order: all completed bars, then the open bar.
    pub fn bars(&self) -> impl Iterator<Item = &Bar> + '_ {
        self.history.iter().chain(std::iter::once(&self.open_bar))
    }

    pub fn bar_count(&self) -> usize {
        self.history.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> CandleAggregator {
        let history = vec![
            Bar { time_ms: 0, open: 100.0, high: 104.0, low: 99.0, close: 102.0, volume: 400 },
            Bar { time_ms: 60_000, open: 102.0, high: 103.0, low: 97.0, close: 98.0, volume: 350 },
        ];
        CandleAggregator::seed(history, 98.0, 120_000)
    }

    #[test]
    fn seeding_preserves_history_and_opens_flat() {
        let agg = seeded();
        assert_eq!(agg.history().len(), 2);
        assert_eq!(agg.bar_count(), 3);
        assert_eq!(agg.open_bar().open, 98.0);
        assert_eq!(agg.open_bar().volume, 0);
    }

    #[test]
    fn ticks_touch_only_the_open_bar() {
        let mut agg = seeded();
        let before: Vec<Bar> = agg.history().to_vec();

        agg.apply_tick(1.5, 200);
        agg.apply_tick(-0.5, 100);

        assert_eq!(agg.history(), before.as_slice());
        assert_eq!(agg.open_bar().close, 99.0);
        assert_eq!(agg.open_bar().high, 99.5);
        assert_eq!(agg.open_bar().volume, 300);
    }

    #[test]
    fn rollover_retires_the_open_bar_verbatim() {
        let mut agg = seeded();
        agg.apply_tick(2.0, 500);
        let live = agg.open_bar().clone();

        let completed = agg.rollover(180_000);

        assert_eq!(completed, live);
        assert_eq!(agg.history().len(), 3);
        assert_eq!(agg.history()[2], completed);
    }

    #[test]
    fn next_bar_opens_at_the_completed_close() {
        let mut agg = CandleAggregator::new(150.0, 0);
        agg.apply_tick(3.0, 100);
        agg.rollover(60_000);

        assert_eq!(agg.open_bar().open, 153.0);
        assert_eq!(agg.open_bar().time_ms, 60_000);
        assert_eq!(agg.open_bar().close, 153.0);
        assert_eq!(agg.open_bar().volume, 0);
    }

    #[test]
    fn bars_iterates_history_then_open() {
        let agg = seeded();
        let times: Vec<u64> = agg.bars().map(|b| b.time_ms).collect();
        assert_eq!(times, vec![0, 60_000, 120_000]);
    }
}
