//! Candlestick bar — the unit the chart draws.

use serde::{Deserialize, Serialize};

/// OHLCV bucket for one periodicity interval.
///
/// History bars are immutable once completed; only the session's open bar
/// is ever updated, through [`Bar::apply_tick`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bar {
    /// Bucket start, Unix milliseconds.
    pub time_ms: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    /// A fresh open bar: all four prices at `open`, zero volume.
    pub fn opening(open: f64, time_ms: u64) -> Self {
        Self {
            time_ms,
            open,
            high: open,
            low: open,
            close: open,
            volume: 0,
        }
    }

    /// Fold one simulated trade into the bar: the close walks by
    /// `price_change`, high/low stretch to cover the new close, volume
    /// accumulates.
    pub fn apply_tick(&mut self, price_change: f64, volume: u64) {
        self.close += price_change;
        self.high = self.high.max(self.close);
        self.low = self.low.min(self.close);
        self.volume += volume;
    }

    /// Up candles close strictly above their open; a doji counts as down.
    pub fn is_up(&self) -> bool {
        self.close > self.open
    }

    /// Shape check: high covers both body ends, low sits under both, and
    /// no field is NaN.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}
