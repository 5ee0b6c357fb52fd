//! Numberle game engine
//!
//! The session state machine plus its configuration and target selection.

pub mod config;
mod engine;
pub mod target;

pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig};
pub use engine::{Attempt, Game, GameError, GameState, ResultCode};
pub use target::{FALLBACK_EQUATION, TargetSelector};
