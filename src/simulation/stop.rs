//! Ready-made stop predicates for `Simulation::run`

use super::history::History;

/// Boxed predicate, as produced from configuration
pub type BoxedStopCondition = Box<dyn Fn(&History) -> bool + Send + Sync>;

/// Stop once capital falls to `floor` or below
pub fn bankrupt(floor: f64) -> impl Fn(&History) -> bool + Send + Sync {
    move |history| history.last_record().is_some_and(|r| r.total_gain <= floor)
}

/// Stop once capital reaches `target` or above
pub fn target_reached(target: f64) -> impl Fn(&History) -> bool + Send + Sync {
    move |history| history.last_record().is_some_and(|r| r.total_gain >= target)
}

/// Stop when any of the given predicates fires
pub fn any_of(conditions: Vec<BoxedStopCondition>) -> impl Fn(&History) -> bool + Send + Sync {
    move |history| conditions.iter().any(|c| c(history))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_gain(gain: f64) -> History {
        let mut h = History::new();
        h.add_record(1.0, 1.0, gain);
        h
    }

    #[test]
    fn test_empty_history_never_stops() {
        assert!(!bankrupt(1_000.0)(&History::new()));
        assert!(!target_reached(-1_000.0)(&History::new()));
    }

    #[test]
    fn test_bankrupt() {
        let stop = bankrupt(0.0);
        assert!(stop(&with_gain(0.0)));
        assert!(stop(&with_gain(-3.0)));
        assert!(!stop(&with_gain(0.5)));
    }

    #[test]
    fn test_target_reached() {
        let stop = target_reached(150.0);
        assert!(stop(&with_gain(150.0)));
        assert!(!stop(&with_gain(149.0)));
    }

    #[test]
    fn test_any_of() {
        let stop = any_of(vec![Box::new(bankrupt(0.0)), Box::new(target_reached(200.0))]);
        assert!(stop(&with_gain(-1.0)));
        assert!(stop(&with_gain(250.0)));
        assert!(!stop(&with_gain(100.0)));
        assert!(!any_of(vec![])(&with_gain(100.0)));
    }
}
