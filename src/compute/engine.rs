//! Life engine - owns the board and steps it one generation at a time.

use crate::schema::{BoardConfig, Seed};

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use super::{EngineError, next_row_into};

/// Coordinate of a single cell, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Fixed-size, non-wrapping Game of Life board.
///
/// Cells are stored as a flat row-major array: `cells[y * cols + x]`.
/// A second buffer of the same size receives the next generation on every
/// [`advance`](Self::advance) and is then swapped in, so a generation is always
/// computed from a complete copy of the previous one.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    rows: usize,
    cols: usize,
    /// Current generation.
    cells: Vec<bool>,
    /// Pre-allocated buffer for the next generation (reused each step).
    next: Vec<bool>,
    /// Number of `advance` calls since construction or the last `clear`.
    generation: u64,
}

impl LifeEngine {
    /// Create an all-dead board with `rows` rows and `cols` columns.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        let invalid = EngineError::InvalidDimensions { rows, cols };
        let size = rows.checked_mul(cols).ok_or(invalid)?;
        let cells = dead_cells(size).ok_or(invalid)?;
        let next = dead_cells(size).ok_or(invalid)?;

        log::debug!("Created {cols}x{rows} board");

        Ok(Self {
            rows,
            cols,
            cells,
            next,
            generation: 0,
        })
    }

    /// Create a board sized by `config` and populated from `seed`.
    pub fn from_seed(config: &BoardConfig, seed: &Seed) -> Result<Self, EngineError> {
        let mut engine = Self::new(config.rows, config.cols)?;
        seed.apply(&mut engine);
        Ok(engine)
    }

    /// `(rows, cols)`, fixed for the lifetime of the engine.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Generations advanced since construction or the last [`clear`](Self::clear).
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Total number of cells on the board.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, EngineError> {
        if x < self.cols && y < self.rows {
            Ok(y * self.cols + x)
        } else {
            Err(EngineError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    /// Whether the cell at `(x, y)` is alive.
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, EngineError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Flip the cell at `(x, y)` between alive and dead.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<(), EngineError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// Set the cell at `(x, y)` to `alive`.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> Result<(), EngineError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Mutable row-major view of the current generation.
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
    }

    /// Replace the board with the next generation.
    pub fn advance(&mut self) {
        let rows = self.rows;
        let cols = self.cols;
        let current = &self.cells;

        #[cfg(not(target_arch = "wasm32"))]
        {
            // Native: each row is written by one task, reading only `current`
            self.next
                .par_chunks_mut(cols)
                .enumerate()
                .for_each(|(y, row)| next_row_into(current, rows, cols, y, row));
        }

        #[cfg(target_arch = "wasm32")]
        {
            for (y, row) in self.next.chunks_mut(cols).enumerate() {
                next_row_into(current, rows, cols, y, row);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;

        log::trace!("Advanced to generation {}", self.generation);
    }

    /// Advance `steps` generations.
    pub fn step_n(&mut self, steps: u64) {
        for _ in 0..steps {
            self.advance();
        }
    }

    /// Live cells in row-major order (`y` ascending, then `x`).
    ///
    /// The iterator borrows the board and can be recreated at any time.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| Cell {
                x: idx % cols,
                y: idx / cols,
            })
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Read-only view of one row, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        (y < self.rows).then(|| &self.cells[y * self.cols..(y + 1) * self.cols])
    }

    /// Render the board as text, one line per row (`#` alive, `.` dead).
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.cells.chunks(self.cols) {
            out.extend(row.iter().map(|&alive| if alive { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

/// All-dead buffer of `size` cells, or `None` when it cannot be allocated.
fn dead_cells(size: usize) -> Option<Vec<bool>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(size).ok()?;
    cells.resize(size, false);
    Some(cells)
}
