use crate::common::errors::{Result, SimulationError};
use crate::simulation::History;
use crate::strategy::traits::Strategy;

pub const DEFAULT_FIXED_NAME: &str = "Fixed Bet Strategy";

/// Stakes the same amount every round
#[derive(Debug, Clone)]
pub struct FixedBettingStrategy {
    name: String,
    bet_amount: f64,
}

impl FixedBettingStrategy {
    pub fn new(bet_amount: f64) -> Result<Self> {
        Self::with_name(bet_amount, DEFAULT_FIXED_NAME)
    }

    pub fn with_name(bet_amount: f64, name: impl Into<String>) -> Result<Self> {
        if !bet_amount.is_finite() || bet_amount < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "fixed bet amount must be finite and non-negative, got {}",
                bet_amount
            )));
        }
        Ok(Self {
            name: name.into(),
            bet_amount,
        })
    }

    pub fn bet_amount(&self) -> f64 {
        self.bet_amount
    }
}

impl Strategy for FixedBettingStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_bet(&mut self, _history: &History) -> Option<f64> {
        Some(self.bet_amount)
    }
}
