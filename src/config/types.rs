//! Configuration types

use serde::{Deserialize, Serialize};

use crate::simulation::{DEFAULT_MAX_BET, DEFAULT_START_VALUE};

/// Main simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum number of rounds per strategy
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Cap applied to every bet
    #[serde(default = "default_max_bet")]
    pub max_bet: f64,
    /// Starting capital for every strategy
    #[serde(default = "default_start_value")]
    pub start_value: f64,
    /// Seed for the game's RNG (OS entropy when absent)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Game every strategy plays against
    pub game: GameConfig,
    /// Strategies to run, in order
    #[serde(default)]
    pub strategies: Vec<StrategyConfig>,
    /// Early stop thresholds
    #[serde(default)]
    pub stop: StopConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

fn default_rounds() -> usize {
    100
}

fn default_max_bet() -> f64 {
    DEFAULT_MAX_BET
}

fn default_start_value() -> f64 {
    DEFAULT_START_VALUE
}

/// Game selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameConfig {
    /// Independent rounds won with probability `p`
    Bernoulli {
        #[serde(default = "default_probability")]
        p: f64,
        #[serde(default)]
        title: Option<String>,
    },
    /// Bounded random walk, won while position stays in `[a, b]`
    RandomWalk {
        a: i64,
        b: i64,
        #[serde(default = "default_probability")]
        p: f64,
        #[serde(default)]
        title: Option<String>,
    },
    /// Fixed outcome list, replayed in a loop
    Scripted {
        outcomes: Vec<f64>,
        #[serde(default)]
        title: Option<String>,
    },
}

fn default_probability() -> f64 {
    0.5
}

/// Strategy selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Same stake every round
    Fixed {
        bet_amount: f64,
        #[serde(default)]
        name: Option<String>,
    },
    /// Martingale
    DoubleOnLoss {
        base_bet: f64,
        #[serde(default)]
        name: Option<String>,
    },
}

/// Early stop thresholds, both optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopConfig {
    /// Stop a strategy once its capital is at or below this value
    #[serde(default)]
    pub floor: Option<f64>,
    /// Stop a strategy once its capital is at or above this value
    #[serde(default)]
    pub target: Option<f64>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
