//! Board statistics for monitoring.

use serde::{Deserialize, Serialize};

use super::LifeEngine;

/// Snapshot of board-level statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardStats {
    pub rows: usize,
    pub cols: usize,
    pub generation: u64,
    pub population: usize,
    /// Fraction of cells alive, in `[0, 1]`.
    pub density: f32,
}

impl BoardStats {
    /// Compute statistics from an engine.
    pub fn from_engine(engine: &LifeEngine) -> Self {
        let (rows, cols) = engine.dimensions();
        let population = engine.population();

        Self {
            rows,
            cols,
            generation: engine.generation(),
            population,
            density: population as f32 / engine.cell_count() as f32,
        }
    }
}

impl std::fmt::Display for BoardStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "generation {}: {} live cells ({:.1}% of {}x{})",
            self.generation,
            self.population,
            self.density * 100.0,
            self.cols,
            self.rows
        )
    }
}
