//! Error type for engine operations.

/// Errors returned by [`LifeEngine`](super::LifeEngine).
///
/// Every operation validates its input before touching the grid, so an error
/// always means the board is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Grid dimensions must be non-zero (got {rows} rows x {cols} cols)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },
}
