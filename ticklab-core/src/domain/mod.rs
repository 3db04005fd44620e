//! Domain types for the simulator.

pub mod account;
pub mod bar;
pub mod instrument;
pub mod position;

pub use account::Account;
pub use bar::Bar;
pub use instrument::Instrument;
pub use position::{Direction, Position};
