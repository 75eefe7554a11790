//! BettingSimulator Library
//!
//! Simulates repeated betting games under pluggable strategies and games,
//! collecting per-round records and summary statistics.

pub mod common;
pub mod config;
pub mod game;
pub mod simulation;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{Result, SimulationError};
pub use common::types::{Record, LOSS, WIN};
pub use config::types::SimulationConfig;

// Simulation types
pub use simulation::{History, RunResult, RunResults, Simulation, Statistics, StopCondition};

// Contracts and bundled implementations
pub use game::{BernoulliProcess, BoxedGame, Game, RandomWalkGame, ScriptedGame};
pub use strategy::{BoxedStrategy, DoubleOnLossStrategy, FixedBettingStrategy, Strategy};
