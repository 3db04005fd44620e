//! One simulation session: the instrument, its bar series, the timer
//! deadlines, and the trade state, behind a single owner.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::aggregator::CandleAggregator;
use crate::config::{ChartConfig, Tuning};
use crate::domain::{Account, Bar, Direction, Instrument, Position};
use crate::error::SimError;
use crate::schedule::{Due, TickSchedule};
use crate::series;

/// What one `advance` call applied. The frontend turns this into status
/// text and PnL updates; a default tally means nothing was due.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    pub ticks: u32,
    pub dropped_ticks: u32,
    pub rollovers: u32,
    pub pnl_changed: bool,
}

/// Owns all mutable simulator state for one instrument.
///
/// Single-threaded by construction: the frontend drives it from its event
/// loop via [`SimSession::advance`], and every mutation goes through one
/// of the methods here. Stopping disarms the schedule, so no tick or
/// rollover can land afterwards.
#[derive(Debug)]
pub struct SimSession {
    instrument: Instrument,
    tuning: Tuning,
    config: ChartConfig,
    aggregator: Option<CandleAggregator>,
    schedule: TickSchedule,
    position: Option<Position>,
    account: Account,
    rng: StdRng,
}

impl SimSession {
    /// `tuning` must already be validated; the TOML loader does that.
    pub fn new(instrument: Instrument, tuning: Tuning, seed: u64) -> Self {
        debug_assert!(tuning.validate().is_ok());
        Self {
            instrument,
            tuning,
            config: ChartConfig::default(),
            aggregator: None,
            schedule: TickSchedule::new(),
            position: None,
            account: Account::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    // ─── Lifecycle ───────────────────────────────────────────────────

    /// Regenerate history under `cfg` and go live.
    ///
    /// Any previous timers are cancelled first, so a restart never
    /// double-fires. The instrument jumps to the generated series' final
    /// close; an empty series (zero bars requested) keeps the prior price.
    /// On error the session is left stopped with its old chart intact.
    pub fn start(&mut self, cfg: ChartConfig, now: Instant, now_ms: u64) -> Result<(), SimError> {
        self.schedule.disarm();

        let generated = series::generate_history(&cfg, &self.tuning, now_ms, &mut self.rng);
        if let Some(last_close) = generated.last_close {
            self.instrument.reset_price(last_close)?;
        }
        self.aggregator = Some(CandleAggregator::seed(
            generated.bars,
            self.instrument.price(),
            now_ms,
        ));
        if let Some(position) = self.position.as_mut() {
            position.mark(self.instrument.price());
        }
        self.config = cfg;

        self.schedule.arm(
            now,
            Duration::from_millis(self.tuning.tick_interval_ms),
            Duration::from_millis(cfg.periodicity.duration_millis()),
        );
        Ok(())
    }

    /// Freeze the tape. Chart, position, and account stay as they are.
    pub fn stop(&mut self) {
        self.schedule.disarm();
    }

    /// Start/stop flip for a single control. Returns whether the session
    /// is running afterwards.
    pub fn toggle(&mut self, cfg: ChartConfig, now: Instant, now_ms: u64) -> Result<bool, SimError> {
        if self.is_running() {
            self.stop();
            Ok(false)
        } else {
            self.start(cfg, now, now_ms)?;
            Ok(true)
        }
    }

    pub fn is_running(&self) -> bool {
        self.schedule.is_armed()
    }

    // ─── Timer firings ───────────────────────────────────────────────

    /// Poll the schedule and apply everything due: ticks against the open
    /// bar, then at most one rollover.
    pub fn advance(&mut self, now: Instant, now_ms: u64) -> Tally {
        let mut tally = Tally::default();
        for due in self.schedule.poll(now) {
            match due {
                Due::Tick => self.apply_tick(&mut tally),
                Due::Rollover => self.apply_rollover(now_ms, &mut tally),
            }
        }
        tally
    }

    /// One simulated trade. A price change that would go negative drops
    /// the whole tick: no bar update, no volume, no PnL mark.
    fn apply_tick(&mut self, tally: &mut Tally) {
        let Some(aggregator) = self.aggregator.as_mut() else {
            return;
        };
        let volume = self
            .rng
            .gen_range(self.tuning.volume_range.0..self.tuning.volume_range.1);
        let change = self
            .rng
            .gen_range(self.tuning.tick_change.0..self.tuning.tick_change.1);

        match self.instrument.apply_change(change) {
            Ok(price) => {
                aggregator.apply_tick(change, volume);
                if let Some(position) = self.position.as_mut() {
                    position.mark(price);
                    tally.pnl_changed = true;
                }
                tally.ticks += 1;
            }
            Err(_) => tally.dropped_ticks += 1,
        }
    }

    fn apply_rollover(&mut self, now_ms: u64, tally: &mut Tally) {
        if let Some(aggregator) = self.aggregator.as_mut() {
            aggregator.rollover(now_ms);
            tally.rollovers += 1;
        }
    }

    // ─── Trading ─────────────────────────────────────────────────────

    /// Enter a trade at the current price. Only one position at a time.
    pub fn open_position(&mut self, direction: Direction, contracts: u32) -> Result<(), SimError> {
        if self.position.is_some() {
            return Err(SimError::InvalidPositionRequest {
                reason: "a position is already open",
            });
        }
        if contracts == 0 {
            return Err(SimError::InvalidPositionRequest {
                reason: "contracts must be at least 1",
            });
        }
        let mut position = Position::open(direction, self.instrument.price(), contracts);
        position.mark(self.instrument.price());
        self.position = Some(position);
        Ok(())
    }

    /// Close the open trade at the current price, settling its final PnL
    /// into the account. Returns the realized figure.
    pub fn close_position(&mut self) -> Result<f64, SimError> {
        let Some(mut position) = self.position.take() else {
            return Err(SimError::InvalidPositionRequest { reason: "no open position" });
        };
        let realized = position.mark(self.instrument.price());
        self.account.settle(realized);
        Ok(realized)
    }

    // ─── Views ───────────────────────────────────────────────────────

    /// Render sequence: completed history, then the open bar. Empty
    /// before the first start.
    pub fn bars(&self) -> impl Iterator<Item = &Bar> + '_ {
        self.aggregator.iter().flat_map(CandleAggregator::bars)
    }

    pub fn bar_count(&self) -> usize {
        self.aggregator.as_ref().map_or(0, CandleAggregator::bar_count)
    }

    pub fn open_bar(&self) -> Option<&Bar> {
        self.aggregator.as_ref().map(CandleAggregator::open_bar)
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
