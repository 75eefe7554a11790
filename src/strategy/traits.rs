use crate::simulation::History;

/// Core strategy trait
///
/// A strategy looks at the run's history and decides the stake for the next
/// round. It owns whatever state it needs (current bet, streak counters) and
/// that state lives for the whole run.
///
/// # Implementation Notes
///
/// - `decide_bet` should return a finite, non-negative number
/// - `None` means "no bet" and is treated as a stake of 0.0
/// - NaN aborts the run with a type error, a negative value with a value error
/// - Values above the simulation's `max_bet` are clipped, not rejected
///
/// # Example
///
/// ```ignore
/// struct AllInOnWin {
///     base: f64,
/// }
///
/// impl Strategy for AllInOnWin {
///     fn name(&self) -> &str { "all_in_on_win" }
///
///     fn decide_bet(&mut self, history: &History) -> Option<f64> {
///         match history.last_record() {
///             Some(last) if last.outcome > 0.0 => Some(last.total_gain),
///             _ => Some(self.base),
///         }
///     }
/// }
/// ```
pub trait Strategy: Send + Sync {
    /// Name used as the key in the simulation's result map
    fn name(&self) -> &str;

    /// Decide the stake for the next round
    ///
    /// # Arguments
    /// * `history` - Rounds played so far by this strategy
    fn decide_bet(&mut self, history: &History) -> Option<f64>;

    /// Human-readable description
    fn description(&self) -> String {
        format!("Strategy Name: {}", self.name())
    }
}

/// Boxed strategy for dynamic dispatch
pub type BoxedStrategy = Box<dyn Strategy>;
