//! Flap - Terminal Flappy Bird
//!
//! The simulation engine is pure and host-driven: `main.rs` feeds it
//! elapsed-time deltas and input events from a crossterm event loop, and
//! `bin/simulate.rs` drives it headlessly with an autopilot policy.
//! This module exposes the game logic for testing and external use.

pub mod constants;
pub mod engine;
pub mod persistence;
pub mod simulator;
pub mod ui;
