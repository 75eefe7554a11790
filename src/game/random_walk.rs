use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::traits::Game;
use super::validate_probability;
use crate::common::errors::{Result, SimulationError};
use crate::common::types::{LOSS, WIN};
use crate::simulation::History;

pub const DEFAULT_RANDOM_WALK_TITLE: &str = "Random Walk Game";

/// Bounded random walk
///
/// Each round the position moves +1 with probability `p`, otherwise -1. The
/// round is won iff the new position lies in the inclusive band `[a, b]`.
/// Position persists for the lifetime of the instance, across strategies.
#[derive(Debug, Clone)]
pub struct RandomWalkGame {
    title: String,
    description: String,
    a: i64,
    b: i64,
    p: f64,
    position: i64,
    steps: Vec<i64>,
    rng: StdRng,
}

impl RandomWalkGame {
    /// Fair walk (`p = 0.5`) seeded from OS entropy
    pub fn new(a: i64, b: i64) -> Result<Self> {
        Self::with_probability(a, b, 0.5)
    }

    pub fn with_probability(a: i64, b: i64, p: f64) -> Result<Self> {
        Self::build(a, b, p, StdRng::from_entropy())
    }

    pub fn with_seed(a: i64, b: i64, p: f64, seed: u64) -> Result<Self> {
        Self::build(a, b, p, StdRng::seed_from_u64(seed))
    }

    fn build(a: i64, b: i64, p: f64, rng: StdRng) -> Result<Self> {
        validate_probability("p", p)?;
        if a > b {
            return Err(SimulationError::InvalidParameter(format!(
                "random walk band is empty: a={} > b={}",
                a, b
            )));
        }
        Ok(Self {
            title: DEFAULT_RANDOM_WALK_TITLE.to_string(),
            description: String::new(),
            a,
            b,
            p,
            position: 0,
            steps: Vec::new(),
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

    /// Current cumulative position
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Every step taken so far, oldest first
    pub fn steps(&self) -> &[i64] {
        &self.steps
    }

    /// Inclusive winning band
    pub fn band(&self) -> (i64, i64) {
        (self.a, self.b)
    }

    /// Apply one step and score the resulting position
    fn advance(&mut self, step: i64) -> f64 {
        self.steps.push(step);
        self.position += step;
        trace!(step, position = self.position, "random walk step");

        if (self.a..=self.b).contains(&self.position) {
            WIN
        } else {
            LOSS
        }
    }
}

impl Game for RandomWalkGame {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn play_round(&mut self, _history: &History) -> f64 {
        let step = if self.rng.gen::<f64>() < self.p { 1 } else { -1 };
        self.advance(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaving_band_loses() {
        let mut g = RandomWalkGame::with_seed(-1, 1, 1.0, 0).unwrap();
        let h = History::new();
        assert_eq!(g.play_round(&h), WIN);
        assert_eq!(g.play_round(&h), LOSS);
        assert_eq!(g.position(), 2);
        assert_eq!(g.steps(), &[1, 1]);
    }

    #[test]
    fn test_band_is_inclusive() {
        let mut g = RandomWalkGame::with_seed(-2, 0, 0.0, 0).unwrap();
        let h = History::new();
        let outcomes: Vec<f64> = (0..3).map(|_| g.play_round(&h)).collect();
        assert_eq!(outcomes, vec![WIN, WIN, LOSS]);
        assert_eq!(g.position(), -3);
    }

    #[test]
    fn test_advance_scores_position() {
        let mut g = RandomWalkGame::new(0, 0).unwrap();
        assert_eq!(g.advance(1), LOSS);
        assert_eq!(g.advance(-1), WIN);
        assert_eq!(g.advance(-1), LOSS);
        assert_eq!(g.steps(), &[1, -1, -1]);
    }

    #[test]
    fn test_position_tracks_steps() {
        let mut g = RandomWalkGame::with_seed(-5, 5, 0.5, 99).unwrap();
        let h = History::new();
        for _ in 0..200 {
            g.play_round(&h);
        }
        assert_eq!(g.steps().len(), 200);
        assert_eq!(g.position(), g.steps().iter().sum::<i64>());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(RandomWalkGame::new(2, 1).is_err());
        assert!(RandomWalkGame::with_probability(-1, 1, 2.0).is_err());
        assert_eq!(RandomWalkGame::new(-3, 3).unwrap().band(), (-3, 3));
    }
}
