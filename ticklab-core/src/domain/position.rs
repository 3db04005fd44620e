use serde::{Deserialize, Serialize};

/// Trade side. Long profits when price rises, short when it falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Long => "LONG",
            Direction::Short => "SHORT",
        }
    }

    /// PnL multiplier: +1 for long, -1 for short.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }
}

/// One open simulated trade with its running profit/loss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub direction: Direction,
    pub entry_price: f64,
    pub contracts: u32,
    /// Marked on every tick; the figure `close` settles into the account.
    pub profit_loss: f64,
}

impl Position {
    pub fn open(direction: Direction, entry_price: f64, contracts: u32) -> Self {
        Self { direction, entry_price, contracts, profit_loss: 0.0 }
    }

    /// Recompute the running PnL against `current_price` and return it.
    pub fn mark(&mut self, current_price: f64) -> f64 {
        self.profit_loss =
            self.direction.sign() * (current_price - self.entry_price) * f64::from(self.contracts);
        self.profit_loss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_gains_when_price_rises() {
        let mut pos = Position::open(Direction::Long, 100.0, 10);
        assert_eq!(pos.mark(105.0), 50.0);
        assert_eq!(pos.profit_loss, 50.0);
        assert_eq!(pos.mark(95.0), -50.0);
    }

    #[test]
    fn short_mirrors_long() {
        let mut pos = Position::open(Direction::Short, 100.0, 10);
        assert_eq!(pos.mark(105.0), -50.0);
        assert_eq!(pos.mark(95.0), 50.0);
    }

    #[test]
    fn freshly_opened_position_is_flat() {
        let pos = Position::open(Direction::Long, 42.0, 3);
        assert_eq!(pos.profit_loss, 0.0);
        assert_eq!(pos.entry_price, 42.0);
        assert_eq!(pos.contracts, 3);
    }
}
