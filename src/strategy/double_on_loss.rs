use tracing::debug;

use crate::common::errors::{Result, SimulationError};
use crate::simulation::History;
use crate::strategy::traits::Strategy;

pub const DEFAULT_DOUBLE_ON_LOSS_NAME: &str = "Double On Loss Strategy";

/// Martingale: double the stake after a loss, fall back to the base bet otherwise
///
/// A "loss" is a last outcome exactly equal to -1. Any other outcome,
/// including fractional losses, resets the stake. An empty history also
/// resets, so the strategy starts every run at `base_bet`.
#[derive(Debug, Clone)]
pub struct DoubleOnLossStrategy {
    name: String,
    base_bet: f64,
    current_bet: f64,
}

impl DoubleOnLossStrategy {
    pub fn new(base_bet: f64) -> Result<Self> {
        Self::with_name(base_bet, DEFAULT_DOUBLE_ON_LOSS_NAME)
    }

    pub fn with_name(base_bet: f64, name: impl Into<String>) -> Result<Self> {
        if !base_bet.is_finite() || base_bet < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "base bet must be finite and non-negative, got {}",
                base_bet
            )));
        }
        Ok(Self {
            name: name.into(),
            base_bet,
            current_bet: base_bet,
        })
    }

    pub fn base_bet(&self) -> f64 {
        self.base_bet
    }

    pub fn current_bet(&self) -> f64 {
        self.current_bet
    }
}

impl Strategy for DoubleOnLossStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_bet(&mut self, history: &History) -> Option<f64> {
        let last = history.last_record();
        debug!(strategy = %self.name, ?last, "Last game record");

        match last {
            Some(record) if record.is_loss() => self.current_bet *= 2.0,
            _ => self.current_bet = self.base_bet,
        }
        Some(self.current_bet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Feed outcomes one by one, recording each decided bet
    fn bets_for(strategy: &mut DoubleOnLossStrategy, outcomes: &[f64]) -> Vec<f64> {
        let mut h = History::new();
        let mut gain = 0.0;
        let mut bets = Vec::new();
        for &o in outcomes {
            let bet = strategy.decide_bet(&h).unwrap();
            gain += bet * o;
            h.add_record(o, bet, gain);
            bets.push(bet);
        }
        bets
    }

    #[test]
    fn test_doubles_after_loss_resets_after_win() {
        let mut s = DoubleOnLossStrategy::new(1.0).unwrap();
        assert_eq!(bets_for(&mut s, &[-1.0, -1.0, 1.0, -1.0]), vec![1.0, 2.0, 4.0, 1.0]);
    }

    #[test]
    fn test_long_losing_streak() {
        let mut s = DoubleOnLossStrategy::new(2.5).unwrap();
        assert_eq!(
            bets_for(&mut s, &[-1.0, -1.0, -1.0, -1.0, 1.0]),
            vec![2.5, 5.0, 10.0, 20.0, 40.0]
        );
    }

    #[test]
    fn test_non_loss_outcomes_reset() {
        let mut s = DoubleOnLossStrategy::new(1.0).unwrap();
        assert_eq!(bets_for(&mut s, &[-1.0, 0.0, -0.5, -1.0]), vec![1.0, 2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_fresh_history_resets_state() {
        let mut s = DoubleOnLossStrategy::new(1.0).unwrap();
        bets_for(&mut s, &[-1.0, -1.0]);
        assert_eq!(s.current_bet(), 2.0);
        assert_eq!(s.decide_bet(&History::new()), Some(1.0));
    }

    #[test]
    fn test_rejects_negative_base() {
        assert!(DoubleOnLossStrategy::new(-0.1).is_err());
    }
}
