//! Core value types shared across the simulator

use serde::{Deserialize, Serialize};

/// Outcome multiplier for a won round
pub const WIN: f64 = 1.0;

/// Outcome multiplier for a lost round
pub const LOSS: f64 = -1.0;

/// One completed round
///
/// `outcome` is the multiplier applied to `bet`; `total_gain` is the running
/// capital after the round settled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Outcome multiplier (typically +1 or -1, any real allowed)
    pub outcome: f64,
    /// Stake for the round after validation and clipping
    pub bet: f64,
    /// Capital after applying `bet * outcome`
    pub total_gain: f64,
}

impl Record {
    pub fn new(outcome: f64, bet: f64, total_gain: f64) -> Self {
        Self {
            outcome,
            bet,
            total_gain,
        }
    }

    /// Profit or loss realized in this round
    pub fn profit(&self) -> f64 {
        self.bet * self.outcome
    }

    /// Returns true if the outcome equals the loss signal
    pub fn is_loss(&self) -> bool {
        self.outcome == LOSS
    }
}
