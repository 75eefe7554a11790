//! Game module: round resolution
//!
//! - [`Game`]: Trait every game implements
//! - [`BernoulliProcess`]: Independent win/lose rounds with fixed probability
//! - [`RandomWalkGame`]: Win while a ±1 random walk stays inside a band
//! - [`ScriptedGame`]: Deterministic replay of a fixed outcome list

mod bernoulli;
mod random_walk;
mod scripted;
mod traits;

pub use bernoulli::{BernoulliProcess, DEFAULT_BERNOULLI_TITLE};
pub use random_walk::{RandomWalkGame, DEFAULT_RANDOM_WALK_TITLE};
pub use scripted::{ScriptedGame, DEFAULT_SCRIPTED_TITLE};
pub use traits::{BoxedGame, Game};

use crate::common::errors::{Result, SimulationError};

/// Reject probabilities outside [0, 1] (NaN included)
pub(crate) fn validate_probability(label: &str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter(format!(
            "{} must be within [0, 1], got {}",
            label, p
        )))
    }
}
