//! Core game logic: state, stepping rules, and the display projection
//!
//! Everything in this module is pure with respect to I/O: no terminal, no
//! timers, no clocks. The session loop in `modes` owns a [`GameState`] and
//! drives it through the [`GameEngine`]; the renderer consumes the
//! [`BoardView`] projection rather than inspecting state directly.

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use board::{BoardView, Cell};
pub use config::GameConfig;
pub use engine::{GameEngine, StepOutcome};
pub use state::{EndCause, GameState, GameStatus, Position, Snake};
