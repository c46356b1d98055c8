//! Life Engine - Conway's Game of Life on a fixed, bounded board.
//!
//! This crate provides a small simulation core: a board of cells that can be
//! toggled, cleared, advanced one generation at a time, and queried for its
//! live cells. It knows nothing about pixels, timers or UI events; those are
//! handled by the adapters in `driver`.
//!
//! # Architecture
//!
//! - `compute`: The board (`LifeEngine`), the B3/S23 rule and statistics
//! - `schema`: Configuration and seeding types
//! - `driver`: Run/stop scheduling and pointer-to-cell input
//!
//! The board does not wrap: cells past an edge are permanently dead.
//!
//! # Example
//!
//! ```rust
//! use life_engine::compute::LifeEngine;
//!
//! let mut engine = LifeEngine::new(10, 10).unwrap();
//!
//! // Horizontal blinker
//! for x in 1..=3 {
//!     engine.toggle(x, 1).unwrap();
//! }
//!
//! engine.advance();
//! let live: Vec<_> = engine.live_cells().map(|c| (c.x, c.y)).collect();
//! assert_eq!(live, vec![(2, 0), (2, 1), (2, 2)]);
//! ```

pub mod compute;
pub mod driver;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{BoardStats, Cell, EngineError, LifeEngine};
pub use driver::{PointerInput, Scheduler};
pub use schema::{BoardConfig, Pattern, Seed};
