//! Application state — single-owner, main-thread only.
//!
//! Everything the frontend mutates lives here: the simulation session,
//! pending settings edits, the contracts selector, and the status line.
//! The status line doubles as the log: every absorbed error (dropped tick,
//! rejected position request) surfaces through it rather than stdout,
//! which raw mode owns.

use std::time::Instant;

use ticklab_core::config::ChartConfig;
use ticklab_core::domain::Direction;
use ticklab_core::session::{SimSession, Tally};

use crate::theme::Theme;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Bounds for the settings the user can nudge from the keyboard.
pub const MIN_BARS: u32 = 10;
pub const MAX_BARS: u32 = 500;
pub const BARS_STEP: u32 = 10;
pub const MAX_CONTRACTS: u32 = 999;

/// Top-level application state.
pub struct App {
    pub session: SimSession,
    pub theme: Theme,
    pub running: bool,

    /// Settings edits land here and apply on the next start; a live
    /// session never sees them.
    pub pending: ChartConfig,
    /// Contract count for the next opened position.
    pub contracts: u32,
    /// Most recently realized PnL, shown until the next close.
    pub last_realized: Option<f64>,

    pub status_message: Option<(String, StatusLevel)>,
}

impl App {
    pub fn new(session: SimSession, pending: ChartConfig, contracts: u32) -> Self {
        Self {
            session,
            theme: Theme::default(),
            running: true,
            pending,
            contracts: contracts.clamp(1, MAX_CONTRACTS),
            last_realized: None,
            status_message: None,
        }
    }

    // ─── Status line ─────────────────────────────────────────────────

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    // ─── Session control ─────────────────────────────────────────────

    /// Space key: start under the pending settings, or stop.
    pub fn toggle_session(&mut self, now: Instant, now_ms: u64) {
        match self.session.toggle(self.pending, now, now_ms) {
            Ok(true) => {
                let cfg = *self.session.config();
                self.set_status(format!(
                    "Simulation started: {} x {} bars",
                    cfg.bars_to_load, cfg.periodicity
                ));
            }
            Ok(false) => self.set_status("Simulation stopped"),
            Err(err) => self.set_error(format!("Start failed: {err}")),
        }
    }

    /// Fold one frame's tally into the status line. Renders read the
    /// session directly; only the exceptional outcomes need words.
    pub fn absorb(&mut self, tally: &Tally) {
        if tally.dropped_ticks > 0 {
            self.set_warning(format!(
                "{} tick(s) dropped: price update would go negative",
                tally.dropped_ticks
            ));
        }
    }

    // ─── Trading keys ────────────────────────────────────────────────

    pub fn open_trade(&mut self, direction: Direction) {
        match self.session.open_position(direction, self.contracts) {
            Ok(()) => {
                let entry = self.session.instrument().price();
                self.set_status(format!(
                    "{} {} @ {entry:.2}",
                    direction.label(),
                    self.contracts
                ));
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    pub fn close_trade(&mut self) {
        match self.session.close_position() {
            Ok(realized) => {
                self.last_realized = Some(realized);
                self.set_status(format!(
                    "Closed for {realized:+.2}; account {:+.2}",
                    self.session.account().total_pnl()
                ));
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    // ─── Settings keys ───────────────────────────────────────────────

    pub fn bump_contracts(&mut self, up: bool) {
        self.contracts = if up {
            (self.contracts + 1).min(MAX_CONTRACTS)
        } else {
            (self.contracts - 1).max(1)
        };
        self.set_status(format!("Contracts: {}", self.contracts));
    }

    pub fn bump_bars(&mut self, up: bool) {
        self.pending.bars_to_load = if up {
            (self.pending.bars_to_load + BARS_STEP).min(MAX_BARS)
        } else {
            self.pending.bars_to_load.saturating_sub(BARS_STEP).max(MIN_BARS)
        };
        self.set_status(format!(
            "Bars to load: {} (applies on next start)",
            self.pending.bars_to_load
        ));
    }

    pub fn cycle_periodicity(&mut self) {
        self.pending.periodicity = self.pending.periodicity.next();
        self.set_status(format!(
            "Periodicity: {} (applies on next start)",
            self.pending.periodicity
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticklab_core::config::Tuning;
    use ticklab_core::domain::Instrument;
    use ticklab_core::periodicity::Periodicity;

    fn app() -> App {
        let instrument = Instrument::new("SIM", 150.0).unwrap();
        let session = SimSession::new(instrument, Tuning::default(), 42);
        App::new(session, ChartConfig::default(), 1)
    }

    #[test]
    fn toggle_flips_between_running_and_stopped() {
        let mut app = app();
        let t0 = Instant::now();

        app.toggle_session(t0, 1_700_000_000_000);
        assert!(app.session.is_running());
        assert!(matches!(app.status_message, Some((_, StatusLevel::Info))));

        app.toggle_session(t0, 1_700_000_000_000);
        assert!(!app.session.is_running());
    }

    #[test]
    fn rejected_trade_lands_on_the_status_line() {
        let mut app = app();
        app.close_trade();

        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Error);
        assert!(msg.contains("no open position"));
        assert!(app.last_realized.is_none());
    }

    #[test]
    fn open_then_close_reports_the_realized_figure() {
        let mut app = app();
        app.open_trade(Direction::Long);
        assert!(app.session.position().is_some());

        app.close_trade();
        assert!(app.session.position().is_none());
        assert_eq!(app.last_realized, Some(0.0)); // price never moved
        assert!(matches!(app.status_message, Some((_, StatusLevel::Info))));
    }

    #[test]
    fn dropped_ticks_surface_as_a_warning() {
        let mut app = app();
        let tally = Tally { dropped_ticks: 2, ..Tally::default() };
        app.absorb(&tally);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));

        app.status_message = None;
        app.absorb(&Tally::default());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn settings_bumps_stay_in_bounds() {
        let mut app = app();

        app.contracts = 1;
        app.bump_contracts(false);
        assert_eq!(app.contracts, 1);
        app.bump_contracts(true);
        assert_eq!(app.contracts, 2);

        app.pending.bars_to_load = MIN_BARS;
        app.bump_bars(false);
        assert_eq!(app.pending.bars_to_load, MIN_BARS);
        app.pending.bars_to_load = MAX_BARS;
        app.bump_bars(true);
        assert_eq!(app.pending.bars_to_load, MAX_BARS);
    }

    #[test]
    fn periodicity_cycles_without_touching_the_live_config() {
        let mut app = app();
        let t0 = Instant::now();
        app.toggle_session(t0, 1_700_000_000_000);

        app.cycle_periodicity();
        assert_eq!(app.pending.periodicity, Periodicity::FiveMinute);
        assert_eq!(app.session.config().periodicity, Periodicity::OneMinute);
    }
}
