//! Serializable chart and simulation knobs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::periodicity::Periodicity;

/// Price axis mapping. Only linear exists today; the enum keeps the
/// config forward-compatible with a log axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    #[default]
    Linear,
}

/// What one chart session loads and aggregates.
///
/// Replaced wholesale on every start; live sessions never mutate it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of historical bars to synthesize before going live.
    pub bars_to_load: u32,
    /// Bar bucket width.
    pub periodicity: Periodicity,
    /// Price axis mapping.
    pub scale: ScaleMode,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bars_to_load: 60,
            periodicity: Periodicity::OneMinute,
            scale: ScaleMode::Linear,
        }
    }
}

/// Random-walk tuning. None of these ranges are load-bearing; they shape
/// how lively the synthetic tape looks. Ranges are half-open `[lo, hi)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Tuning {
    /// Seed range for the first generated close (default 100..200).
    pub initial_close: (f64, f64),
    /// Per-bar close drift for generated history (default -2..3).
    pub walk_step: (f64, f64),
    /// Maximum wick extension beyond the body (default 2).
    pub wick_extension: f64,
    /// Per-tick price drift while live (default -0.5..0.5).
    pub tick_change: (f64, f64),
    /// Volume range for generated bars and live ticks (default 100..1100).
    pub volume_range: (u64, u64),
    /// Live tick cadence in milliseconds (default 1000).
    pub tick_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_close: (100.0, 200.0),
            walk_step: (-2.0, 3.0),
            wick_extension: 2.0,
            tick_change: (-0.5, 0.5),
            volume_range: (100, 1100),
            tick_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid tuning range {field}: {detail}")]
    InvalidRange { field: &'static str, detail: String },
}

impl Tuning {
    /// Load and validate a TOML tuning file. Missing keys fall back to
    /// the defaults above.
    pub fn from_path(path: &Path) -> Result<Self, TuningError> {
        let text = std::fs::read_to_string(path)?;
        let tuning: Tuning = toml::from_str(&text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Every range must be non-empty and usable as an RNG bound.
    pub fn validate(&self) -> Result<(), TuningError> {
        fn span(field: &'static str, lo: f64, hi: f64) -> Result<(), TuningError> {
            if lo < hi {
                Ok(())
            } else {
                Err(TuningError::InvalidRange {
                    field,
                    detail: format!("{lo} >= {hi}"),
                })
            }
        }

        span("initial_close", self.initial_close.0, self.initial_close.1)?;
        span("walk_step", self.walk_step.0, self.walk_step.1)?;
        span("tick_change", self.tick_change.0, self.tick_change.1)?;
        if self.initial_close.0 < 0.0 {
            return Err(TuningError::InvalidRange {
                field: "initial_close",
                detail: format!("seed price {} is negative", self.initial_close.0),
            });
        }
        if self.wick_extension <= 0.0 {
            return Err(TuningError::InvalidRange {
                field: "wick_extension",
                detail: format!("{} is not positive", self.wick_extension),
            });
        }
        if self.volume_range.0 >= self.volume_range.1 {
            return Err(TuningError::InvalidRange {
                field: "volume_range",
                detail: format!("{} >= {}", self.volume_range.0, self.volume_range.1),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(TuningError::InvalidRange {
                field: "tick_interval_ms",
                detail: "zero cadence".to_string(),
            });
        }
        Ok(())
    }
}
