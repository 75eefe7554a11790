//! Strategy module for bet sizing
//!
//! # Components
//!
//! - [`Strategy`]: Trait for implementing betting strategies
//! - [`FixedBettingStrategy`]: Same stake every round
//! - [`DoubleOnLossStrategy`]: Martingale, doubles after each loss
//!
//! # Example
//!
//! ```ignore
//! use betting_simulator::strategy::{Strategy, FixedBettingStrategy};
//! use betting_simulator::simulation::History;
//!
//! let mut strategy = FixedBettingStrategy::new(10.0)?;
//! assert_eq!(strategy.decide_bet(&History::new()), Some(10.0));
//! ```

mod double_on_loss;
mod fixed;
mod traits;

pub use double_on_loss::{DoubleOnLossStrategy, DEFAULT_DOUBLE_ON_LOSS_NAME};
pub use fixed::{FixedBettingStrategy, DEFAULT_FIXED_NAME};
pub use traits::{BoxedStrategy, Strategy};
