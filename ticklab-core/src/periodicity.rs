use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Bar duration for aggregation. The set is closed: every variant has a
/// duration, and unknown tags are rejected where text enters (`FromStr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Periodicity {
    OneMinute,
    FiveMinute,
    ThirtyMinute,
    OneHour,
}

impl Periodicity {
    pub const ALL: [Periodicity; 4] = [
        Periodicity::OneMinute,
        Periodicity::FiveMinute,
        Periodicity::ThirtyMinute,
        Periodicity::OneHour,
    ];

    /// Width of one bar bucket in milliseconds.
    pub fn duration_millis(self) -> u64 {
        match self {
            Periodicity::OneMinute => 60_000,
            Periodicity::FiveMinute => 300_000,
            Periodicity::ThirtyMinute => 1_800_000,
            Periodicity::OneHour => 3_600_000,
        }
    }

    /// Human-facing tag, also the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Periodicity::OneMinute => "1 minute",
            Periodicity::FiveMinute => "5 minute",
            Periodicity::ThirtyMinute => "30 minute",
            Periodicity::OneHour => "1 hour",
        }
    }

    /// Next variant in display order, wrapping at the end.
    pub fn next(self) -> Periodicity {
        match self {
            Periodicity::OneMinute => Periodicity::FiveMinute,
            Periodicity::FiveMinute => Periodicity::ThirtyMinute,
            Periodicity::ThirtyMinute => Periodicity::OneHour,
            Periodicity::OneHour => Periodicity::OneMinute,
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Periodicity {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        match tag.to_ascii_lowercase().as_str() {
            "oneminute" | "1 minute" | "1m" => Ok(Periodicity::OneMinute),
            "fiveminute" | "5 minute" | "5m" => Ok(Periodicity::FiveMinute),
            "thirtyminute" | "30 minute" | "30m" => Ok(Periodicity::ThirtyMinute),
            "onehour" | "1 hour" | "1h" => Ok(Periodicity::OneHour),
            _ => Err(SimError::UnsupportedPeriodicity { tag: tag.to_string() }),
        }
    }
}

impl TryFrom<String> for Periodicity {
    type Error = SimError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Periodicity> for String {
    fn from(p: Periodicity) -> Self {
        p.label().to_string()
    }
}
