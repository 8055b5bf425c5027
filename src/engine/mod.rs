//! Core simulation: world state, per-tick physics, and the game session.

pub mod logic;
pub mod session;
pub mod types;

pub use session::GameSession;
pub use types::{Config, ConfigError, Phase, Pipe, Rect, World};
