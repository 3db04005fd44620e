//! Neon-on-charcoal theme tokens for the TickLab TUI.
//!
//! One palette, no runtime configuration:
//! - **Background**: near-black charcoal
//! - **Accent**: electric cyan (borders, focus)
//! - **Positive**: neon green (up candles, gains, long entries)
//! - **Negative**: hot pink (down candles, losses, short entries)
//! - **Warning**: neon orange (dropped ticks, rejected requests)
//! - **Muted**: steel blue (gridlines, axis labels, hints)

use ratatui::style::Color;

use ticklab_core::domain::Direction;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (up candles, gains, long)
    pub positive: Color,
    /// Hot pink (down candles, losses, short)
    pub negative: Color,
    /// Neon orange (warnings, alerts)
    pub warning: Color,
    /// Steel blue (gridlines, muted text)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }
}

impl Theme {
    /// Color for a PnL figure (zero counts as positive).
    pub fn pnl_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Color for a candle body/wick by its up/down classification.
    pub fn candle_color(&self, is_up: bool) -> Color {
        if is_up {
            self.positive
        } else {
            self.negative
        }
    }

    /// Color for a position entry marker by trade direction.
    pub fn direction_color(&self, direction: Direction) -> Color {
        match direction {
            Direction::Long => self.positive,
            Direction::Short => self.negative,
        }
    }
}
