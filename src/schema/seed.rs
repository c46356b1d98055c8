//! Seed types for initializing a Life board.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::compute::LifeEngine;

/// Initial board description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

/// Ways to populate a board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All cells dead.
    #[default]
    Empty,
    /// Explicit live cells.
    Cells {
        /// List of `(x, y)` coordinates.
        cells: Vec<(usize, usize)>,
    },
    /// Uniform random fill.
    Random {
        /// Probability of each cell being alive, clamped to [0, 1].
        density: f64,
        /// Random seed.
        seed: u64,
    },
}

impl Seed {
    /// Seed with the given live cells.
    pub fn cells(cells: Vec<(usize, usize)>) -> Self {
        Self {
            pattern: Pattern::Cells { cells },
        }
    }

    /// Seeded random fill.
    pub fn random(density: f64, seed: u64) -> Self {
        Self {
            pattern: Pattern::Random { density, seed },
        }
    }

    /// Parse a seed from JSON. A blank string is the empty seed.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }

    /// Clear `engine` and write this seed into it.
    pub fn apply(&self, engine: &mut LifeEngine) {
        engine.clear();

        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Cells { cells } => {
                for &(x, y) in cells {
                    if let Err(e) = engine.set_alive(x, y, true) {
                        log::warn!("Skipping seed cell: {e}");
                    }
                }
            }
            Pattern::Random { density, seed } => {
                apply_random(engine, *density, *seed);
            }
        }
    }
}

fn apply_random(engine: &mut LifeEngine, density: f64, seed: u64) {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut rng = StdRng::seed_from_u64(seed);

    for cell in engine.cells_mut() {
        *cell = rng.gen_bool(density);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let mut engine = LifeEngine::new(3, 3).unwrap();
        engine.toggle(1, 1).unwrap();
        Seed::default().apply(&mut engine);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_cells_skip_out_of_bounds() {
        let mut engine = LifeEngine::new(3, 4).unwrap();
        Seed::cells(vec![(0, 0), (3, 2), (4, 0), (0, 3)]).apply(&mut engine);
        let live: Vec<_> = engine.live_cells().map(|c| (c.x, c.y)).collect();
        assert_eq!(live, vec![(0, 0), (3, 2)]);
    }

    #[test]
    fn test_random_is_deterministic() {
        let mut a = LifeEngine::new(20, 20).unwrap();
        let mut b = LifeEngine::new(20, 20).unwrap();
        Seed::random(0.4, 7).apply(&mut a);
        Seed::random(0.4, 7).apply(&mut b);
        assert!(a.live_cells().eq(b.live_cells()));

        let population = a.population();
        assert!(population > 80 && population < 240, "population {population}");
    }

    #[test]
    fn test_random_fill_is_row_major() {
        let (rows, cols) = (6, 9);
        let mut engine = LifeEngine::new(rows, cols).unwrap();
        Seed::random(0.5, 99).apply(&mut engine);

        let mut rng = StdRng::seed_from_u64(99);
        for y in 0..rows {
            for x in 0..cols {
                assert_eq!(engine.is_alive(x, y).unwrap(), rng.gen_bool(0.5), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_random_density_bounds() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        Seed::random(0.0, 1).apply(&mut engine);
        assert_eq!(engine.population(), 0);
        Seed::random(2.0, 1).apply(&mut engine);
        assert_eq!(engine.population(), 25);
        Seed::random(f64::NAN, 1).apply(&mut engine);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_from_json_str() {
        assert_eq!(Seed::from_json_str("").unwrap(), Seed::default());
        assert_eq!(Seed::from_json_str("  \n").unwrap(), Seed::default());
        assert_eq!(
            Seed::from_json_str(r#"{ "pattern": { "type": "Random", "density": 0.5, "seed": 3 } }"#)
                .unwrap(),
            Seed::random(0.5, 3)
        );
        assert!(Seed::from_json_str("{").is_err());
    }

    #[test]
    fn test_pattern_json() {
        let seed: Seed =
            serde_json::from_str(r#"{ "pattern": { "type": "Cells", "cells": [[1, 2]] } }"#)
                .unwrap();
        assert_eq!(seed, Seed::cells(vec![(1, 2)]));

        let json = serde_json::to_string(&Seed::random(0.5, 3)).unwrap();
        assert!(json.contains(r#""type":"Random""#));
    }
}
