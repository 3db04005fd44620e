//! Simulated instrument: a symbol and its live price.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// The one tradeable thing in a session.
///
/// Price is kept private so every mutation routes through the negative
/// check: a change that would take the price below zero is rejected whole,
/// leaving the stored price untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    symbol: String,
    price: f64,
}

impl Instrument {
    pub fn new(symbol: impl Into<String>, price: f64) -> Result<Self, SimError> {
        if price < 0.0 {
            return Err(SimError::NegativePrice { price: 0.0, change: price });
        }
        Ok(Self { symbol: symbol.into(), price })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Apply a signed tick change, returning the new price.
    pub fn apply_change(&mut self, change: f64) -> Result<f64, SimError> {
        let next = self.price + change;
        if next < 0.0 {
            return Err(SimError::NegativePrice { price: self.price, change });
        }
        self.price = next;
        Ok(next)
    }

    /// Jump to a freshly generated price (session start).
    pub fn reset_price(&mut self, price: f64) -> Result<(), SimError> {
        if price < 0.0 {
            return Err(SimError::NegativePrice {
                price: self.price,
                change: price - self.price,
            });
        }
        self.price = price;
        Ok(())
    }
}
