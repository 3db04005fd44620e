//! TickLab Core — an illustrative market simulator.
//!
//! Everything needed to run a session without a frontend:
//! - Domain types (bars, instrument, position, account)
//! - Synthetic history generation (bounded random walk)
//! - Live candle aggregation with per-period rollover
//! - Poll-driven tick/rollover scheduling with clean cancellation
//! - Chart geometry (price scale, gridlines)
//! - The session object tying it all together

pub mod aggregator;
pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod periodicity;
pub mod schedule;
pub mod series;
pub mod session;
