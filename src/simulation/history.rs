//! Append-only per-round log for a single (strategy, game) run

use serde::Serialize;

use crate::common::stats;
use crate::common::types::Record;

/// Ordered log of completed rounds
///
/// One `History` belongs to exactly one strategy's run. Records are only ever
/// appended, so index order is round order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one round. Values are stored as given.
    pub fn add_record(&mut self, outcome: f64, bet: f64, total_gain: f64) {
        self.records.push(Record::new(outcome, bet, total_gain));
    }

    /// Most recent round, if any
    pub fn last_record(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rounds recorded
    pub fn length(&self) -> usize {
        self.records.len()
    }

    /// All rounds in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Running capital after each round
    pub fn get_capital(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.total_gain).collect()
    }

    pub fn get_bets(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.bet).collect()
    }

    pub fn get_outcomes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.outcome).collect()
    }

    /// Mean outcome multiplier, 0.0 when empty
    pub fn expected_value(&self) -> f64 {
        stats::mean(self.records.iter().map(|r| r.outcome))
    }

    /// Largest peak-to-current decline in capital, 0.0 when empty
    pub fn max_drawdown(&self) -> f64 {
        stats::max_drawdown(self.records.iter().map(|r| r.total_gain))
    }

    /// Sample variance of capital
    ///
    /// 0.0 when empty, NaN with a single record.
    pub fn variance_gain(&self) -> f64 {
        stats::sample_variance(&self.get_capital())
    }
}
