use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::traits::Game;
use super::validate_probability;
use crate::common::errors::Result;
use crate::common::types::{LOSS, WIN};
use crate::simulation::History;

pub const DEFAULT_BERNOULLI_TITLE: &str = "Bernoulli Process";

/// Independent rounds won with fixed probability `p`
#[derive(Debug, Clone)]
pub struct BernoulliProcess {
    title: String,
    description: String,
    p: f64,
    rng: StdRng,
}

impl BernoulliProcess {
    /// Seeded from OS entropy
    pub fn new(p: f64) -> Result<Self> {
        Self::build(p, StdRng::from_entropy())
    }

    /// Reproducible stream
    pub fn with_seed(p: f64, seed: u64) -> Result<Self> {
        Self::build(p, StdRng::seed_from_u64(seed))
    }

    fn build(p: f64, rng: StdRng) -> Result<Self> {
        validate_probability("p", p)?;
        Ok(Self {
            title: DEFAULT_BERNOULLI_TITLE.to_string(),
            description: String::new(),
            p,
            rng,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Game for BernoulliProcess {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn play_round(&mut self, _history: &History) -> f64 {
        if self.rng.gen::<f64>() < self.p {
            WIN
        } else {
            LOSS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certain_outcomes() {
        let h = History::new();
        let mut always = BernoulliProcess::with_seed(1.0, 7).unwrap();
        let mut never = BernoulliProcess::with_seed(0.0, 7).unwrap();
        for _ in 0..100 {
            assert_eq!(always.play_round(&h), WIN);
            assert_eq!(never.play_round(&h), LOSS);
        }
    }

    #[test]
    fn test_seeded_is_repeatable() {
        let h = History::new();
        let mut a = BernoulliProcess::with_seed(0.5, 42).unwrap();
        let mut b = BernoulliProcess::with_seed(0.5, 42).unwrap();
        let xs: Vec<f64> = (0..50).map(|_| a.play_round(&h)).collect();
        let ys: Vec<f64> = (0..50).map(|_| b.play_round(&h)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_win_rate_close_to_p() {
        let h = History::new();
        let mut g = BernoulliProcess::with_seed(0.3, 1234).unwrap();
        let wins = (0..10_000).filter(|_| g.play_round(&h) == WIN).count();
        let rate = wins as f64 / 10_000.0;
        assert!((rate - 0.3).abs() < 0.03, "win rate {}", rate);
    }

    #[test]
    fn test_invalid_probability() {
        assert!(BernoulliProcess::new(1.5).is_err());
        assert!(BernoulliProcess::new(-0.1).is_err());
        assert!(BernoulliProcess::new(f64::NAN).is_err());
    }

    #[test]
    fn test_title_and_info() {
        let g = BernoulliProcess::with_seed(0.5, 0)
            .unwrap()
            .with_description("coin flip");
        assert_eq!(g.title(), DEFAULT_BERNOULLI_TITLE);
        assert_eq!(g.info(), "Game Title: Bernoulli Process");
        assert_eq!(g.description(), "coin flip");
    }
}
