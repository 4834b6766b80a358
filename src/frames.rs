//! Per-row reveal frames for animation.

use crate::grid::Grid;

/// Expands a finished grid into a stack of reveal frames.
///
/// One frame per grid row: frame `i` copies rows `0..=i` verbatim and leaves
/// every later row zero, so an animation can reveal one more generation per
/// frame without recomputing the automaton.
///
/// # Example
///
/// ```
/// use cellweave::{reveal_frames, GeneralizedCA};
///
/// let grid = GeneralizedCA::new(30, 8).generate().unwrap();
/// let frames = reveal_frames(&grid);
/// assert_eq!(frames.len(), 8);
/// assert_eq!(frames.last().unwrap(), &grid);
/// ```
pub fn reveal_frames(grid: &Grid) -> Vec<Grid> {
    let mut frames = Vec::with_capacity(grid.rows());
    for i in 0..grid.rows() {
        let mut frame = Grid::zeros(grid.rows(), grid.cols());
        for r in 0..=i {
            for (c, &value) in grid.row(r).iter().enumerate() {
                frame.set(r, c, value);
            }
        }
        frames.push(frame);
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GeneralizedCA;

    #[test]
    fn test_one_frame_per_row() {
        let grid = GeneralizedCA::new(30, 6).generate().unwrap();
        assert_eq!(reveal_frames(&grid).len(), 6);
    }

    #[test]
    fn test_reveal_property() {
        let grid = GeneralizedCA::new(110, 6).generate().unwrap();
        let frames = reveal_frames(&grid);

        for (i, frame) in frames.iter().enumerate() {
            for r in 0..grid.rows() {
                if r <= i {
                    assert_eq!(frame.row(r), grid.row(r), "frame {i}, row {r}");
                } else {
                    assert!(frame.row(r).iter().all(|&v| v == 0.0), "frame {i}, row {r}");
                }
            }
        }
    }

    #[test]
    fn test_last_frame_is_full_grid() {
        let grid = GeneralizedCA::new(90, 5).generate().unwrap();
        let frames = reveal_frames(&grid);
        assert_eq!(frames.last().unwrap(), &grid);
    }
}
