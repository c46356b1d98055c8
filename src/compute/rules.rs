//! Transition rule for Conway's Game of Life (B3/S23).
//!
//! The rule is evaluated per cell against a read-only view of the previous
//! generation. The board does not wrap: positions past an edge count as dead.

/// Offsets of the eight cells surrounding a position, as `(dx, dy)`.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count live neighbors of `(x, y)` in a row-major grid of `rows * cols` cells.
///
/// All eight offsets are checked; those falling off the grid are skipped, so
/// edge and corner cells simply see fewer candidates.
#[inline]
pub fn count_neighbors(cells: &[bool], rows: usize, cols: usize, x: usize, y: usize) -> u8 {
    let mut count = 0u8;
    for (dx, dy) in NEIGHBOR_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };
        if nx < cols && ny < rows && cells[ny * cols + nx] {
            count += 1;
        }
    }
    count
}

/// Next state of a cell given its current state and live neighbor count.
///
/// - A live cell survives with 2 or 3 neighbors.
/// - A dead cell is born with exactly 3 neighbors.
/// - Every other cell is dead in the next generation.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Evaluate row `y` of the next generation into `out`.
///
/// `out` must hold exactly `cols` cells. Only `current` is read, so rows can be
/// computed independently of each other.
pub fn next_row_into(current: &[bool], rows: usize, cols: usize, y: usize, out: &mut [bool]) {
    for (x, cell) in out.iter_mut().enumerate() {
        let neighbors = count_neighbors(current, rows, cols, x, y);
        *cell = next_state(current[y * cols + x], neighbors);
    }
}
