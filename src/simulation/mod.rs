//! Simulation module: run loop and data accumulation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Simulation.run(rounds, stop_condition)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  for each Strategy (sequential):                            │
//! │    gain = start_value, history = History::new()             │
//! │    repeat up to `rounds`:                                   │
//! │      bet     = Strategy.decide_bet(history) → validate/clip │
//! │      outcome = Game.play_round(history)   (shared instance) │
//! │      gain   += bet * outcome                                │
//! │      history.add_record(outcome, bet, gain)                 │
//! │      stop_condition(history)? → break                       │
//! │    results[name] = RunResult::new(history)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`History`]: Append-only record log with simple statistics
//! - [`RunResult`]: Frozen summary of one strategy's run
//! - [`Simulation`]: Drives strategies against a game
//! - [`stop`]: Common stop predicates

mod engine;
mod history;
mod result;
pub mod stop;

pub use engine::{
    validate_bet, RunResults, Simulation, StopCondition, DEFAULT_MAX_BET, DEFAULT_START_VALUE,
};
pub use history::History;
pub use result::{RunResult, Statistics};
pub use stop::BoxedStopCondition;
