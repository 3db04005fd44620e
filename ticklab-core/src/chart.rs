//! Chart geometry: fit a price window over a bar series and map prices to
//! plot rows. Cell painting lives in the frontend; this module only does
//! the math, so it can be tested without a terminal.

use crate::domain::Bar;
use crate::error::SimError;

/// Number of gridline steps; the chart draws `GRID_STEPS + 1` lines
/// covering both ends of the price window.
pub const GRID_STEPS: usize = 10;

/// A time label lands under every n-th bar.
pub const TIME_LABEL_EVERY: usize = 5;

/// Spans at or below this are treated as flat and padded to a unit window.
const MIN_PRICE_SPAN: f64 = 1e-9;

/// Vertical mapping from price to plot row (row 0 is the top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    min_price: f64,
    max_price: f64,
    plot_height: u16,
}

/// One labelled horizontal gridline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub price: f64,
    pub y: u16,
}

impl PriceScale {
    /// Fit the window over every bar's high/low, padded by 5% of the span
    /// so wicks never touch the frame. A flat series pads to a unit window
    /// instead; an empty series cannot be fitted at all.
    pub fn fit(bars: &[Bar], plot_height: u16) -> Result<Self, SimError> {
        if bars.is_empty() {
            return Err(SimError::EmptySeries);
        }

        let max = bars.iter().fold(f64::NEG_INFINITY, |acc, b| acc.max(b.high));
        let min = bars.iter().fold(f64::INFINITY, |acc, b| acc.min(b.low));

        let span = max - min;
        let pad = if span > MIN_PRICE_SPAN { span * 0.05 } else { 1.0 };

        Ok(Self {
            min_price: min - pad,
            max_price: max + pad,
            plot_height,
        })
    }

    pub fn min_price(&self) -> f64 {
        self.min_price
    }

    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    /// Row for a price, clamped into the plot. The padded span is always
    /// positive, so the division is safe even for flat series.
    pub fn y_for(&self, price: f64) -> u16 {
        if self.plot_height == 0 {
            return 0;
        }
        let frac = (price - self.min_price) / (self.max_price - self.min_price);
        let frac = frac.clamp(0.0, 1.0);
        (f64::from(self.plot_height - 1) * (1.0 - frac)).round() as u16
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min_price && price <= self.max_price
    }

    /// Evenly spaced price levels from the top of the window to the
    /// bottom, one per gridline.
    pub fn gridlines(&self) -> Vec<GridLine> {
        let span = self.max_price - self.min_price;
        (0..=GRID_STEPS)
            .map(|i| {
                let price = self.max_price - span * (i as f64) / (GRID_STEPS as f64);
                GridLine { price, y: self.y_for(price) }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(high: f64, low: f64) -> Bar {
        Bar { time_ms: 0, open: low, high, low, close: high, volume: 100 }
    }

    #[test]
    fn empty_series_cannot_fit() {
        assert_eq!(PriceScale::fit(&[], 20), Err(SimError::EmptySeries));
    }

    #[test]
    fn window_covers_every_wick_with_padding() {
        let bars = vec![bar(110.0, 100.0), bar(120.0, 95.0)];
        let scale = PriceScale::fit(&bars, 20).unwrap();

        assert!(scale.min_price() < 95.0);
        assert!(scale.max_price() > 120.0);
        assert!(scale.contains(95.0) && scale.contains(120.0));
    }

    #[test]
    fn flat_series_pads_to_a_unit_window() {
        let bars = vec![bar(100.0, 100.0); 5];
        let scale = PriceScale::fit(&bars, 20).unwrap();

        assert_eq!(scale.min_price(), 99.0);
        assert_eq!(scale.max_price(), 101.0);
        // Mapping still lands inside the plot.
        let y = scale.y_for(100.0);
        assert!(y < 20);
    }

    #[test]
    fn higher_prices_map_to_higher_rows() {
        let bars = vec![bar(120.0, 95.0)];
        let scale = PriceScale::fit(&bars, 24).unwrap();

        assert_eq!(scale.y_for(scale.max_price()), 0);
        assert_eq!(scale.y_for(scale.min_price()), 23);
        assert!(scale.y_for(110.0) < scale.y_for(100.0));
    }

    #[test]
    fn out_of_window_prices_clamp_to_the_edges() {
        let bars = vec![bar(120.0, 95.0)];
        let scale = PriceScale::fit(&bars, 24).unwrap();

        assert_eq!(scale.y_for(1e6), 0);
        assert_eq!(scale.y_for(-1e6), 23);
        assert!(!scale.contains(1e6));
    }

    #[test]
    fn gridlines_span_the_window_top_down() {
        let bars = vec![bar(120.0, 95.0)];
        let scale = PriceScale::fit(&bars, 24).unwrap();
        let lines = scale.gridlines();

        assert_eq!(lines.len(), GRID_STEPS + 1);
        assert_eq!(lines[0].price, scale.max_price());
        assert_eq!(lines[0].y, 0);
        assert_eq!(lines[GRID_STEPS].y, 23);
        assert!((lines[GRID_STEPS].price - scale.min_price()).abs() < 1e-9);
        for pair in lines.windows(2) {
            assert!(pair[0].price > pair[1].price);
        }
    }
}
