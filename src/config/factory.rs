//! Builds runnable objects from configuration

use tracing::info;

use super::types::{GameConfig, SimulationConfig, StopConfig, StrategyConfig};
use crate::common::errors::Result;
use crate::game::{BernoulliProcess, BoxedGame, RandomWalkGame, ScriptedGame};
use crate::simulation::{stop, BoxedStopCondition, Simulation};
use crate::strategy::{BoxedStrategy, DoubleOnLossStrategy, FixedBettingStrategy};

/// Assemble a ready-to-run simulation
pub fn build_simulation(config: &SimulationConfig) -> Result<Simulation> {
    let game = build_game(&config.game, config.seed)?;
    let strategies = config
        .strategies
        .iter()
        .map(build_strategy)
        .collect::<Result<Vec<_>>>()?;

    info!(
        game = %game.title(),
        strategies = strategies.len(),
        max_bet = config.max_bet,
        start_value = config.start_value,
        "Simulation assembled"
    );

    Simulation::new(strategies, game)
        .with_max_bet(config.max_bet)?
        .with_start_value(config.start_value)
}

pub fn build_game(config: &GameConfig, seed: Option<u64>) -> Result<BoxedGame> {
    let game: BoxedGame = match config {
        GameConfig::Bernoulli { p, title } => {
            let mut game = match seed {
                Some(seed) => BernoulliProcess::with_seed(*p, seed)?,
                None => BernoulliProcess::new(*p)?,
            };
            if let Some(title) = title {
                game = game.with_title(title.clone());
            }
            Box::new(game)
        }
        GameConfig::RandomWalk { a, b, p, title } => {
            let mut game = match seed {
                Some(seed) => RandomWalkGame::with_seed(*a, *b, *p, seed)?,
                None => RandomWalkGame::with_probability(*a, *b, *p)?,
            };
            if let Some(title) = title {
                game = game.with_title(title.clone());
            }
            Box::new(game)
        }
        GameConfig::Scripted { outcomes, title } => {
            let mut game = ScriptedGame::new(outcomes.clone())?;
            if let Some(title) = title {
                game = game.with_title(title.clone());
            }
            Box::new(game)
        }
    };
    Ok(game)
}

pub fn build_strategy(config: &StrategyConfig) -> Result<BoxedStrategy> {
    let strategy: BoxedStrategy = match config {
        StrategyConfig::Fixed { bet_amount, name } => match name {
            Some(name) => Box::new(FixedBettingStrategy::with_name(*bet_amount, name.clone())?),
            None => Box::new(FixedBettingStrategy::new(*bet_amount)?),
        },
        StrategyConfig::DoubleOnLoss { base_bet, name } => match name {
            Some(name) => Box::new(DoubleOnLossStrategy::with_name(*base_bet, name.clone())?),
            None => Box::new(DoubleOnLossStrategy::new(*base_bet)?),
        },
    };
    Ok(strategy)
}

/// Combine configured thresholds into one predicate, `None` when neither is set
pub fn build_stop_condition(config: &StopConfig) -> Option<BoxedStopCondition> {
    let mut conditions: Vec<BoxedStopCondition> = Vec::new();
    if let Some(floor) = config.floor {
        conditions.push(Box::new(stop::bankrupt(floor)));
    }
    if let Some(target) = config.target {
        conditions.push(Box::new(stop::target_reached(target)));
    }

    match conditions.len() {
        0 => None,
        1 => conditions.pop(),
        _ => Some(Box::new(stop::any_of(conditions))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DEFAULT_RANDOM_WALK_TITLE;
    use crate::simulation::History;
    use crate::strategy::DEFAULT_DOUBLE_ON_LOSS_NAME;

    #[test]
    fn test_build_game_titles() {
        let game = build_game(
            &GameConfig::RandomWalk {
                a: -1,
                b: 1,
                p: 0.5,
                title: None,
            },
            Some(3),
        )
        .unwrap();
        assert_eq!(game.title(), DEFAULT_RANDOM_WALK_TITLE);

        let game = build_game(
            &GameConfig::Bernoulli {
                p: 0.4,
                title: Some("coin".to_string()),
            },
            None,
        )
        .unwrap();
        assert_eq!(game.title(), "coin");
    }

    #[test]
    fn test_build_game_rejects_bad_parameters() {
        let cfg = GameConfig::Bernoulli { p: 2.0, title: None };
        assert!(build_game(&cfg, None).is_err());
    }

    #[test]
    fn test_build_strategy_names() {
        let s = build_strategy(&StrategyConfig::DoubleOnLoss {
            base_bet: 1.0,
            name: None,
        })
        .unwrap();
        assert_eq!(s.name(), DEFAULT_DOUBLE_ON_LOSS_NAME);

        let s = build_strategy(&StrategyConfig::Fixed {
            bet_amount: 5.0,
            name: Some("flat".to_string()),
        })
        .unwrap();
        assert_eq!(s.name(), "flat");
    }

    #[test]
    fn test_build_stop_condition() {
        assert!(build_stop_condition(&StopConfig::default()).is_none());

        let stop = build_stop_condition(&StopConfig {
            floor: Some(50.0),
            target: Some(150.0),
        })
        .unwrap();

        let mut h = History::new();
        h.add_record(1.0, 10.0, 100.0);
        assert!(!stop(&h));
        h.add_record(-1.0, 60.0, 40.0);
        assert!(stop(&h));
    }
}
