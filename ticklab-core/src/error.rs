use thiserror::Error;

/// Everything the simulation can refuse to do.
///
/// Operations that mutate state return `Err` without applying any part of
/// the change; callers can keep the session running after surfacing one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("unsupported periodicity: {tag:?}")]
    UnsupportedPeriodicity { tag: String },

    #[error("price update rejected: {price} + {change} would go negative")]
    NegativePrice { price: f64, change: f64 },

    #[error("no bars to render")]
    EmptySeries,

    #[error("invalid position request: {reason}")]
    InvalidPositionRequest { reason: &'static str },
}
