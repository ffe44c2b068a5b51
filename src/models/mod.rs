//! Core data models for the league dashboard.

mod match_record;
mod race;
mod stats;

pub use match_record::*;
pub use race::*;
pub use stats::*;
