//! Common test utilities and fixtures

#![allow(dead_code)]

use betting_simulator::{BoxedGame, BoxedStrategy, History, ScriptedGame, Strategy};

/// Strategy that always returns the same raw decision, valid or not
pub struct ConstantBet {
    pub name: String,
    pub bet: Option<f64>,
}

impl ConstantBet {
    pub fn boxed(name: &str, bet: Option<f64>) -> BoxedStrategy {
        Box::new(Self {
            name: name.to_string(),
            bet,
        })
    }
}

impl Strategy for ConstantBet {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide_bet(&mut self, _history: &History) -> Option<f64> {
        self.bet
    }
}

/// Game replaying the given outcomes
pub fn scripted(outcomes: &[f64]) -> BoxedGame {
    Box::new(ScriptedGame::new(outcomes.to_vec()).expect("non-empty finite outcomes"))
}

/// Sample configuration for loader tests
pub const SAMPLE_CONFIG: &str = r#"
    rounds = 3
    start_value = 100.0

    [game]
    kind = "bernoulli"
    p = 1.0

    [[strategies]]
    kind = "fixed"
    bet_amount = 10.0
    name = "flat"

    [[strategies]]
    kind = "double_on_loss"
    base_bet = 1.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_bet() {
        let mut s = ConstantBet {
            name: "c".to_string(),
            bet: None,
        };
        assert_eq!(s.decide_bet(&History::new()), None);
    }
}
