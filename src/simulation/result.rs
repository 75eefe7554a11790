//! Immutable summary of a finished run

use serde::{Deserialize, Serialize};

use super::history::History;
use crate::common::stats;

/// Summary statistics for one strategy's run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_rounds: usize,
    pub final_gain: f64,
    pub average_bet: f64,
    pub max_bet: f64,
    pub min_bet: f64,
    pub max_drawdown: f64,
}

/// Frozen outcome of one strategy's run
///
/// Built once from the run's `History`; there are no mutating methods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    history: History,
    total_rounds: usize,
    final_gain: f64,
}

impl RunResult {
    /// Freeze a finished history
    ///
    /// `final_gain` is the last record's total gain, or 0.0 when no round ran.
    pub fn new(history: History) -> Self {
        let total_rounds = history.length();
        let final_gain = history.last_record().map(|r| r.total_gain).unwrap_or(0.0);
        Self {
            history,
            total_rounds,
            final_gain,
        }
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    pub fn final_gain(&self) -> f64 {
        self.final_gain
    }

    /// The snapshot this result was built from
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn compute_statistics(&self) -> Statistics {
        let bets = || self.history.records().iter().map(|r| r.bet);
        Statistics {
            total_rounds: self.total_rounds,
            final_gain: self.final_gain,
            average_bet: stats::mean(bets()),
            max_bet: stats::max(bets()),
            min_bet: stats::min(bets()),
            max_drawdown: self.history.max_drawdown(),
        }
    }
}

impl From<History> for RunResult {
    fn from(history: History) -> Self {
        Self::new(history)
    }
}
