//! Headless Monte Carlo simulation of the game.
//!
//! Drives real [`GameSession`](crate::engine::GameSession)s with a naive
//! autopilot policy to sanity-check physics tuning without a terminal.

pub mod config;
pub mod report;
pub mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
