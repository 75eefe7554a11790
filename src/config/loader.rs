//! Configuration loader

use config::{Config, Environment, File, FileFormat};
use std::path::Path;

use super::types::SimulationConfig;
use crate::common::errors::{Result, SimulationError};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "BETSIM";

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with BETSIM_, nested keys split on `__`)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<SimulationConfig> {
    // Try to load from .env file
    dotenvy::dotenv().ok();

    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        } else {
            return Err(SimulationError::Configuration(format!(
                "config file not found: {}",
                path
            )));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let parsed: SimulationConfig = config.try_deserialize()?;
    validate(&parsed)?;
    Ok(parsed)
}

/// Parse configuration from a TOML string, without environment overrides
pub fn load_from_str(toml: &str) -> Result<SimulationConfig> {
    let config = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?;
    let parsed: SimulationConfig = config.try_deserialize()?;
    validate(&parsed)?;
    Ok(parsed)
}

fn validate(config: &SimulationConfig) -> Result<()> {
    if config.strategies.is_empty() {
        return Err(SimulationError::Configuration(
            "at least one strategy must be configured".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{GameConfig, StrategyConfig};
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
        rounds = 50
        seed = 7

        [game]
        kind = "random_walk"
        a = -2
        b = 2

        [[strategies]]
        kind = "fixed"
        bet_amount = 10.0

        [[strategies]]
        kind = "double_on_loss"
        base_bet = 1.0
        name = "martingale"

        [stop]
        floor = 0.0
    "#;

    #[test]
    fn test_load_from_str() {
        let cfg = load_from_str(SAMPLE).unwrap();
        assert_eq!(cfg.rounds, 50);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.max_bet, 1000.0);
        assert_eq!(cfg.start_value, 100.0);
        assert_eq!(
            cfg.game,
            GameConfig::RandomWalk {
                a: -2,
                b: 2,
                p: 0.5,
                title: None
            }
        );
        assert_eq!(
            cfg.strategies[1],
            StrategyConfig::DoubleOnLoss {
                base_bet: 1.0,
                name: Some("martingale".to_string())
            }
        );
        assert_eq!(cfg.stop.floor, Some(0.0));
        assert_eq!(cfg.stop.target, None);
        assert_eq!(cfg.settings.log_level, "info");
    }

    #[test]
    fn test_requires_strategy() {
        let err = load_from_str("[game]\nkind = \"bernoulli\"\n").unwrap_err();
        assert!(matches!(err, SimulationError::Configuration(_)));
    }

    #[test]
    fn test_unknown_game_kind() {
        let toml = "[game]\nkind = \"roulette\"\n[[strategies]]\nkind = \"fixed\"\nbet_amount = 1.0\n";
        assert!(load_from_str(toml).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_config(Some("/nonexistent/simulation.toml")).is_err());
    }
}
