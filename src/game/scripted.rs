use super::traits::Game;
use crate::common::errors::{Result, SimulationError};
use crate::simulation::History;

pub const DEFAULT_SCRIPTED_TITLE: &str = "Scripted Game";

/// Replays a fixed list of outcomes, wrapping around when exhausted
///
/// The cursor is shared state like any other game's, so a second strategy
/// continues where the first one stopped.
#[derive(Debug, Clone)]
pub struct ScriptedGame {
    title: String,
    outcomes: Vec<f64>,
    cursor: usize,
}

impl ScriptedGame {
    pub fn new(outcomes: Vec<f64>) -> Result<Self> {
        if outcomes.is_empty() {
            return Err(SimulationError::InvalidParameter(
                "scripted game needs at least one outcome".to_string(),
            ));
        }
        if let Some(bad) = outcomes.iter().find(|o| !o.is_finite()) {
            return Err(SimulationError::InvalidParameter(format!(
                "scripted outcome must be finite, got {}",
                bad
            )));
        }
        Ok(Self {
            title: DEFAULT_SCRIPTED_TITLE.to_string(),
            outcomes,
            cursor: 0,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of rounds served so far
    pub fn rounds_played(&self) -> usize {
        self.cursor
    }
}

impl Game for ScriptedGame {
    fn title(&self) -> &str {
        &self.title
    }

    fn play_round(&mut self, _history: &History) -> f64 {
        let outcome = self.outcomes[self.cursor % self.outcomes.len()];
        self.cursor += 1;
        outcome
    }
}
