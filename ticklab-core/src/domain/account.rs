use serde::{Deserialize, Serialize};

/// Running total of realized PnL across closed trades.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Account {
    total_pnl: f64,
}

impl Account {
    pub fn total_pnl(&self) -> f64 {
        self.total_pnl
    }

    /// Fold one closed trade's final PnL into the total.
    pub fn settle(&mut self, realized: f64) {
        self.total_pnl += realized;
    }
}
