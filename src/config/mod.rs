//! Configuration loading and object construction

pub mod factory;
pub mod loader;
pub mod types;

pub use factory::{build_game, build_simulation, build_stop_condition, build_strategy};
pub use loader::{load_config, load_from_str};
pub use types::{AppSettings, GameConfig, SimulationConfig, StopConfig, StrategyConfig};
