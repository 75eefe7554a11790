//! Run loop driving strategies against a shared game

use std::collections::BTreeMap;

use tracing::{debug, info, info_span, instrument, warn};

use super::history::History;
use super::result::RunResult;
use crate::common::errors::{Result, SimulationError};
use crate::game::{BoxedGame, Game};
use crate::strategy::{BoxedStrategy, Strategy};

/// Default cap applied to every bet
pub const DEFAULT_MAX_BET: f64 = 1000.0;

/// Default starting capital
pub const DEFAULT_START_VALUE: f64 = 100.0;

/// Optional per-round predicate that ends a strategy's run early
pub type StopCondition<'a> = &'a dyn Fn(&History) -> bool;

/// Results keyed by strategy name
pub type RunResults = BTreeMap<String, RunResult>;

/// Runs each strategy in turn against one game
///
/// Every strategy starts from `start_value` with a fresh `History`, but they
/// all play the same `Game` instance. Game state carries over from one
/// strategy to the next and from one `run` call to the next.
pub struct Simulation {
    strategies: Vec<BoxedStrategy>,
    game: BoxedGame,
    max_bet: f64,
    start_value: f64,
}

impl Simulation {
    /// Create a simulation with the default `max_bet` and `start_value`
    pub fn new(strategies: Vec<BoxedStrategy>, game: BoxedGame) -> Self {
        Self {
            strategies,
            game,
            max_bet: DEFAULT_MAX_BET,
            start_value: DEFAULT_START_VALUE,
        }
    }

    /// Set the bet cap. Must be non-negative.
    pub fn with_max_bet(mut self, max_bet: f64) -> Result<Self> {
        if max_bet.is_nan() || max_bet < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "max_bet must be non-negative, got {}",
                max_bet
            )));
        }
        self.max_bet = max_bet;
        Ok(self)
    }

    /// Set the starting capital for every strategy
    pub fn with_start_value(mut self, start_value: f64) -> Result<Self> {
        if !start_value.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "start_value must be finite, got {}",
                start_value
            )));
        }
        self.start_value = start_value;
        Ok(self)
    }

    pub fn max_bet(&self) -> f64 {
        self.max_bet
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    pub fn game(&self) -> &BoxedGame {
        &self.game
    }

    /// Play up to `rounds` rounds for every strategy
    ///
    /// # Errors
    /// The first invalid bet aborts the whole run: NaN yields
    /// `NonNumericBet`, a negative stake yields `NegativeBet`. Results
    /// gathered for earlier strategies are discarded.
    ///
    /// Two strategies with the same name share one key; the later result
    /// replaces the earlier one.
    #[instrument(skip(self, stop_condition), fields(game = %self.game.title(), strategies = self.strategies.len()))]
    pub fn run(&mut self, rounds: usize, stop_condition: Option<StopCondition<'_>>) -> Result<RunResults> {
        let mut results = RunResults::new();

        for strategy in self.strategies.iter_mut() {
            let span = info_span!("strategy", name = %strategy.name());
            let _enter = span.enter();

            let history = play_strategy(
                strategy.as_mut(),
                self.game.as_mut(),
                rounds,
                self.max_bet,
                self.start_value,
                stop_condition,
            )?;

            let result = RunResult::new(history);
            info!(
                rounds = result.total_rounds(),
                final_gain = result.final_gain(),
                "Strategy finished"
            );

            if results.insert(strategy.name().to_string(), result).is_some() {
                warn!("Duplicate strategy name, earlier result overwritten");
            }
        }

        Ok(results)
    }
}

/// One strategy's loop against the shared game
fn play_strategy(
    strategy: &mut dyn Strategy,
    game: &mut dyn Game,
    rounds: usize,
    max_bet: f64,
    start_value: f64,
    stop_condition: Option<StopCondition<'_>>,
) -> Result<History> {
    let mut history = History::new();
    let mut gain = start_value;

    for round in 0..rounds {
        let raw = strategy.decide_bet(&history);
        let bet = validate_bet(strategy.name(), raw, max_bet)?;

        let outcome = game.play_round(&history);
        gain += bet * outcome;
        history.add_record(outcome, bet, gain);
        debug!(round, bet, outcome, gain, "Round settled");

        if stop_condition.is_some_and(|stop| stop(&history)) {
            debug!(round, "Stop condition met");
            break;
        }
    }

    Ok(history)
}

/// Coerce, check and clip a strategy's bet
///
/// `None` becomes 0.0. NaN is a type error, anything below zero a value
/// error. Values above `max_bet` (including +inf) are capped.
pub fn validate_bet(strategy: &str, raw: Option<f64>, max_bet: f64) -> Result<f64> {
    let bet = raw.unwrap_or(0.0);

    if bet.is_nan() {
        return Err(SimulationError::NonNumericBet {
            strategy: strategy.to_string(),
            value: bet,
        });
    }
    if bet < 0.0 {
        return Err(SimulationError::NegativeBet {
            strategy: strategy.to_string(),
            bet,
        });
    }
    if bet > max_bet {
        warn!(strategy, bet, max_bet, "Bet clipped to max_bet");
        return Ok(max_bet);
    }
    Ok(bet)
}
