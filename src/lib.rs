//! Classic Snake for the terminal
//!
//! The crate splits into a pure core and thin glue around it:
//! - [`game`]: state, the step function, and the display projection
//! - [`input`]: key events to game commands
//! - [`render`]: ratatui frontend consuming the projection
//! - [`metrics`]: per-process session stats
//! - [`modes`]: the interactive session loop tying it all together

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
