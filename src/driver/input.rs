//! Pointer input - maps pixel positions on the board to cells.

use crate::compute::LifeEngine;
use crate::schema::BoardConfig;

/// Translates pointer positions into toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInput {
    /// Pixels per cell, never zero.
    cell_size: u32,
}

impl PointerInput {
    /// Create an adapter for cells of `cell_size` pixels. A size of zero is
    /// treated as one pixel.
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.cell_size)
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Cell under the pixel position `(px, py)` relative to the board origin.
    ///
    /// Returns `None` for negative or non-finite positions. The result is not
    /// checked against any board size.
    pub fn cell_at(&self, px: f64, py: f64) -> Option<(usize, usize)> {
        if !px.is_finite() || !py.is_finite() || px < 0.0 || py < 0.0 {
            return None;
        }
        let size = f64::from(self.cell_size);
        // Float to integer casts saturate, so huge positions land past the grid
        Some(((px / size).floor() as usize, (py / size).floor() as usize))
    }

    /// Toggle the cell under `(px, py)`.
    ///
    /// Clicks outside the board are ignored. Returns the toggled cell.
    pub fn click(&self, engine: &mut LifeEngine, px: f64, py: f64) -> Option<(usize, usize)> {
        let Some((x, y)) = self.cell_at(px, py) else {
            log::debug!("Ignoring click at ({px}, {py})");
            return None;
        };
        match engine.toggle(x, y) {
            Ok(()) => Some((x, y)),
            Err(e) => {
                log::debug!("Ignoring click at ({px}, {py}): {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_floors() {
        let input = PointerInput::new(10);
        assert_eq!(input.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(input.cell_at(9.99, 10.0), Some((0, 1)));
        assert_eq!(input.cell_at(999.0, 749.5), Some((99, 74)));
    }

    #[test]
    fn test_cell_at_rejects_invalid() {
        let input = PointerInput::new(10);
        assert_eq!(input.cell_at(-0.5, 3.0), None);
        assert_eq!(input.cell_at(3.0, f64::NAN), None);
        assert_eq!(input.cell_at(f64::INFINITY, 3.0), None);
    }

    #[test]
    fn test_zero_cell_size() {
        let input = PointerInput::new(0);
        assert_eq!(input.cell_size(), 1);
        assert_eq!(input.cell_at(4.2, 7.9), Some((4, 7)));
    }

    #[test]
    fn test_click_toggles() {
        let config = BoardConfig::default();
        let mut engine = LifeEngine::new(config.rows, config.cols).unwrap();
        let input = PointerInput::from_config(&config);

        assert_eq!(input.click(&mut engine, 25.0, 15.0), Some((2, 1)));
        assert!(engine.is_alive(2, 1).unwrap());
        assert_eq!(input.click(&mut engine, 21.0, 19.0), Some((2, 1)));
        assert!(!engine.is_alive(2, 1).unwrap());
    }

    #[test]
    fn test_click_outside_board_is_noop() {
        let config = BoardConfig::default();
        let mut engine = LifeEngine::new(config.rows, config.cols).unwrap();
        let input = PointerInput::from_config(&config);

        // x = 1000px maps to column 100, one past the last column
        assert_eq!(input.click(&mut engine, 1000.0, 10.0), None);
        assert_eq!(input.click(&mut engine, 10.0, 750.0), None);
        assert_eq!(input.click(&mut engine, -1.0, 10.0), None);
        assert_eq!(engine.population(), 0);
    }
}
