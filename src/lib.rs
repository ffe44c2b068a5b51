//! # LMSL Stats
//!
//! Match statistics for the LittleMac StarCraft II League.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (matches, races, derived stats)
//! - **loader**: CSV export parsing
//! - **dimensions**: Distinct values for filter menus
//! - **filter**: Multi-select match filtering
//! - **calculate**: Medal table, win rates and distributions
//! - **views**: The overview, tournament and player dashboards
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod dimensions;
pub mod filter;
pub mod loader;
pub mod models;
pub mod views;

pub use models::*;
