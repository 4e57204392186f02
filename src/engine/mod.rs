//! The rules engine: columns, errors, and the game orchestrator.

pub mod column;
pub mod error;
pub mod game;

pub use column::{Column, RunBuffer};
pub use error::EngineError;
pub use game::GameEngine;
