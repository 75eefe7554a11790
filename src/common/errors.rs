//! Error types for the simulator

use thiserror::Error;

/// Result type alias using our SimulationError
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Main error type for simulation runs
#[derive(Error, Debug)]
pub enum SimulationError {
    /// A strategy returned something that is not a real number (NaN)
    #[error("Strategy `{strategy}` returned non-numeric bet: {value}")]
    NonNumericBet { strategy: String, value: f64 },

    /// A strategy returned a bet below zero
    #[error("Strategy `{strategy}` returned negative bet: {bet}")]
    NegativeBet { strategy: String, bet: f64 },

    /// Construction-time parameter out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SimulationError {
    /// True for the bet-type failure (a non-numeric bet)
    pub fn is_type_error(&self) -> bool {
        matches!(self, SimulationError::NonNumericBet { .. })
    }

    /// True for the bet-value failure (a negative bet)
    pub fn is_value_error(&self) -> bool {
        matches!(self, SimulationError::NegativeBet { .. })
    }
}

impl From<config::ConfigError> for SimulationError {
    fn from(err: config::ConfigError) -> Self {
        SimulationError::Configuration(err.to_string())
    }
}
