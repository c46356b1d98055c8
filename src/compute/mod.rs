//! Compute module - Board state and the Game of Life transition.

mod engine;
mod error;
mod rules;
mod stats;

pub use engine::*;
pub use error::*;
pub use rules::*;
pub use stats::*;
