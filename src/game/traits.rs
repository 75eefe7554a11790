use crate::simulation::History;

/// Core game trait
///
/// A game resolves one round and returns the outcome multiplier applied to
/// the stake (+1.0 win even money, -1.0 lose the stake, any real allowed).
///
/// # Implementation Notes
///
/// - A single game instance is shared by every strategy in a simulation;
///   internal state (positions, RNG streams) is NOT reset between strategies
/// - `history` is the calling strategy's history and may be ignored
pub trait Game: Send + Sync {
    /// Display title
    fn title(&self) -> &str;

    /// Resolve one round
    fn play_round(&mut self, history: &History) -> f64;

    /// Free-form description, empty by default
    fn description(&self) -> &str {
        ""
    }

    /// Short info line
    fn info(&self) -> String {
        format!("Game Title: {}", self.title())
    }
}

/// Boxed game for dynamic dispatch
pub type BoxedGame = Box<dyn Game>;
