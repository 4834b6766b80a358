//! Fixed neighbor-sum update: Conway's Game of Life over a [`Grid`].
//!
//! A deliberately small collaborator to the 1D engine: it shares the grid
//! format but runs its own 8-neighbor B3/S23 update. The grid neither wraps
//! nor grows; anything outside it counts as dead.

use crate::grid::Grid;

/// Advances a binary grid one step under B3/S23.
///
/// A live cell (any nonzero value) survives with 2 or 3 live neighbors; a
/// dead cell is born with exactly 3. Out-of-range neighbors are dead.
///
/// # Example
///
/// ```
/// use cellweave::{life_step, Grid};
///
/// let mut blinker = Grid::zeros(5, 5);
/// blinker.set(2, 1, 1.0);
/// blinker.set(2, 2, 1.0);
/// blinker.set(2, 3, 1.0);
///
/// let next = life_step(&blinker);
/// assert_eq!(next.get(1, 2), 1.0);
/// assert_eq!(next.get(2, 1), 0.0);
/// ```
pub fn life_step(grid: &Grid) -> Grid {
    let mut next = Grid::zeros(grid.rows(), grid.cols());

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let mut live = 0u8;
            for dr in -1i64..=1 {
                for dc in -1i64..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let nr = r as i64 + dr;
                    let nc = c as i64 + dc;
                    if nr < 0 || nc < 0 {
                        continue;
                    }
                    if grid.get(nr as usize, nc as usize) != 0.0 {
                        live += 1;
                    }
                }
            }

            let alive = grid.get(r, c) != 0.0;
            let survives = if alive {
                live == 2 || live == 3
            } else {
                live == 3
            };
            if survives {
                next.set(r, c, 1.0);
            }
        }
    }

    next
}

/// Runs `n` updates, returning the starting grid followed by each step.
///
/// The result has `n + 1` grids and is ready for a frame-by-frame renderer.
pub fn life_run(start: &Grid, n: usize) -> Vec<Grid> {
    let mut frames = Vec::with_capacity(n + 1);
    frames.push(start.clone());
    for i in 0..n {
        frames.push(life_step(&frames[i]));
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = Grid::zeros(5, 5);
        grid.set(2, 2, 1.0);

        let next = life_step(&grid);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_block_is_stable() {
        let mut grid = Grid::zeros(5, 5);
        grid.set(1, 1, 1.0);
        grid.set(1, 2, 1.0);
        grid.set(2, 1, 1.0);
        grid.set(2, 2, 1.0);

        assert_eq!(life_step(&grid), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::zeros(5, 5);
        grid.set(2, 1, 1.0);
        grid.set(2, 2, 1.0);
        grid.set(2, 3, 1.0);

        let next = life_step(&grid);
        assert_eq!(next.get(1, 2), 1.0);
        assert_eq!(next.get(2, 2), 1.0);
        assert_eq!(next.get(3, 2), 1.0);
        assert_eq!(next.population(), 3);

        // Period 2: one more step restores the original
        assert_eq!(life_step(&next), grid);
    }

    #[test]
    fn test_no_wraparound() {
        // A row hugging the top edge: everything above it counts as dead,
        // so the update behaves like the pattern sits against a wall.
        let mut grid = Grid::zeros(4, 4);
        grid.set(0, 0, 1.0);
        grid.set(0, 1, 1.0);
        grid.set(0, 2, 1.0);

        let next = life_step(&grid);
        assert_eq!(next.get(0, 1), 1.0);
        assert_eq!(next.get(1, 1), 1.0);
        assert_eq!(next.get(3, 1), 0.0);
    }

    #[test]
    fn test_life_run_length() {
        let mut grid = Grid::zeros(5, 5);
        grid.set(2, 1, 1.0);
        grid.set(2, 2, 1.0);
        grid.set(2, 3, 1.0);

        let frames = life_run(&grid, 4);
        assert_eq!(frames.len(), 5);
        assert_eq!(&frames[0], &grid);
        // Blinker has period 2
        assert_eq!(frames[2], frames[0]);
        assert_eq!(frames[3], frames[1]);
    }
}
