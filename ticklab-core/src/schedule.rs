//! Poll-driven timer deadlines for the session loop.
//!
//! Instead of free-running timers, the session keeps explicit deadlines and
//! the control loop polls them: each poll returns the firings that are due,
//! ticks before rollovers. Disarming removes the deadlines entirely, so a
//! stopped session has nothing left that could fire.

use std::time::{Duration, Instant};

/// One due firing, in the order the session must apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Due {
    /// Simulate one trade against the open bar.
    Tick,
    /// Complete the open bar and start the next one.
    Rollover,
}

#[derive(Debug, Clone)]
struct Deadlines {
    tick_every: Duration,
    bar_every: Duration,
    next_tick: Instant,
    next_bar: Instant,
}

/// Tick and rollover deadlines for one running session.
#[derive(Debug, Clone, Default)]
pub struct TickSchedule {
    armed: Option<Deadlines>,
}

impl TickSchedule {
    pub fn new() -> Self {
        Self { armed: None }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Arm both deadlines relative to `now`, replacing any previous ones.
    /// A restart therefore never double-fires old timers.
    pub fn arm(&mut self, now: Instant, tick_every: Duration, bar_every: Duration) {
        debug_assert!(!tick_every.is_zero() && !bar_every.is_zero());
        self.armed = Some(Deadlines {
            tick_every,
            bar_every,
            next_tick: now + tick_every,
            next_bar: now + bar_every,
        });
    }

    /// Drop the deadlines. Every later `poll` returns nothing.
    pub fn disarm(&mut self) {
        self.armed = None;
    }

    /// Collect every firing due at `now`, advancing deadlines by whole
    /// intervals. Catch-up is bounded to one bar's worth of ticks per poll;
    /// a longer stall realigns to the cadence instead of replaying it.
    pub fn poll(&mut self, now: Instant) -> Vec<Due> {
        let Some(deadlines) = self.armed.as_mut() else {
            return Vec::new();
        };
        let mut due = Vec::new();

        let tick_cap = (deadlines.bar_every.as_millis() / deadlines.tick_every.as_millis().max(1))
            .max(1) as usize;
        while deadlines.next_tick <= now && due.len() < tick_cap {
            due.push(Due::Tick);
            deadlines.next_tick += deadlines.tick_every;
        }
        if deadlines.next_tick <= now {
            deadlines.next_tick = now + deadlines.tick_every;
        }

        if deadlines.next_bar <= now {
            due.push(Due::Rollover);
            deadlines.next_bar += deadlines.bar_every;
            if deadlines.next_bar <= now {
                deadlines.next_bar = now + deadlines.bar_every;
            }
        }

        due
    }
}
