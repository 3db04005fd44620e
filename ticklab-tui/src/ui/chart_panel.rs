//! Candle chart — OHLC rendering with direct buffer writes.
//!
//! - Each candle = 1 terminal column, newest bars kept when width runs out
//! - Body: block char, colored by the strict close > open rule
//! - Wicks: vertical line chars to high/low
//! - Gridlines: labelled horizontal price levels from the core geometry
//! - Entry overlay: horizontal dashed line at the open position's price

use chrono::{DateTime, Utc};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use ticklab_core::chart::{PriceScale, TIME_LABEL_EVERY};
use ticklab_core::domain::{Bar, Position};

use crate::theme::Theme;

/// Width reserved on the left for gridline price labels.
const LABEL_WIDTH: u16 = 9;

pub struct CandleChartPanel<'a> {
    bars: &'a [Bar],
    position: Option<&'a Position>,
    symbol: &'a str,
    theme: &'a Theme,
}

impl<'a> CandleChartPanel<'a> {
    pub fn new(
        bars: &'a [Bar],
        position: Option<&'a Position>,
        symbol: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self { bars, position, symbol, theme }
    }
}

impl Widget for CandleChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.bars.is_empty() {
            let block = Block::default()
                .title(format!(" {} [No Data] ", self.symbol))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.muted))
                .style(Style::default().bg(self.theme.background));
            block.render(area, buf);
            return;
        }

        let up_count = self.bars.iter().filter(|b| b.is_up()).count();
        let down_count = self.bars.len() - up_count;
        let title = format!(
            " {} | {} bars | {} up {} down ",
            self.symbol,
            self.bars.len(),
            up_count,
            down_count,
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));
        let inner = block.inner(area);
        block.render(area, buf);

        // Left margin for price labels, bottom row for time labels.
        let plot_left = inner.x + LABEL_WIDTH;
        let plot_top = inner.y;
        let plot_width = inner.width.saturating_sub(LABEL_WIDTH);
        let plot_height = inner.height.saturating_sub(1);
        if plot_width == 0 || plot_height == 0 {
            return;
        }

        // Newest bars win when the series is wider than the plot.
        let start = self.bars.len().saturating_sub(plot_width as usize);
        let visible = &self.bars[start..];

        // Empty was handled above; the fit only fails on an empty slice,
        // so a blank plot is the worst a failure here can produce.
        let Ok(scale) = PriceScale::fit(visible, plot_height) else {
            return;
        };

        // Gridlines with price labels.
        let grid_style = Style::default().fg(self.theme.muted);
        for line in scale.gridlines() {
            let py = plot_top + line.y;
            for x in plot_left..plot_left + plot_width {
                buf.set_string(x, py, "\u{2508}", grid_style);
            }
            buf.set_string(inner.x, py, format!("{:>8.2}", line.price), grid_style);
        }

        // Candles, left to right in timestamp order.
        for (i, bar) in visible.iter().enumerate() {
            let x = plot_left + i as u16;
            let style = Style::default().fg(self.theme.candle_color(bar.is_up()));

            let high_y = scale.y_for(bar.high);
            let low_y = scale.y_for(bar.low);
            let body_top = scale.y_for(bar.open.max(bar.close));
            let body_bot = scale.y_for(bar.open.min(bar.close));

            for y in high_y..body_top {
                buf.set_string(x, plot_top + y, "|", style);
            }
            let body_char = if bar.is_up() { "\u{2588}" } else { "\u{2593}" };
            for y in body_top..=body_bot {
                buf.set_string(x, plot_top + y, body_char, style);
            }
            for y in (body_bot + 1)..=low_y {
                buf.set_string(x, plot_top + y, "|", style);
            }

            if i % TIME_LABEL_EVERY == 0 {
                if let Some(stamp) = DateTime::<Utc>::from_timestamp_millis(bar.time_ms as i64) {
                    let label = stamp.format("%H:%M").to_string();
                    if x + label.len() as u16 <= plot_left + plot_width {
                        buf.set_string(x, plot_top + plot_height, label, grid_style);
                    }
                }
            }
        }

        // Entry price marker for the open position.
        if let Some(position) = self.position {
            if scale.contains(position.entry_price) {
                let py = plot_top + scale.y_for(position.entry_price);
                let color = self.theme.direction_color(position.direction);
                let line_style = Style::default().fg(color).add_modifier(Modifier::DIM);
                for x in plot_left..plot_left + plot_width {
                    let ch = if (x - plot_left) % 3 == 0 { "-" } else { " " };
                    buf.set_string(x, py, ch, line_style);
                }
                let label =
                    format!("{} entry {:.2}", position.direction.label(), position.entry_price);
                let label_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                buf.set_string(plot_left, py, label, label_style);
            }
        }
    }
}
