//! Common types, errors and numeric helpers shared across modules

pub mod errors;
pub mod stats;
pub mod types;
