//! Schema module - Configuration and seeding types for Life boards.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
