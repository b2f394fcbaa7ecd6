//! The per-generation transition function.
//!
//! One call to [`step_into`] derives a complete new generation from the
//! previous one. The rule is fixed:
//!
//! | Previous     | Condition                       | Next       |
//! |--------------|---------------------------------|------------|
//! | `Ready`      | exactly 2 firing neighbors      | `Firing`   |
//! | `Ready`      | any other firing-neighbor count | `Ready`    |
//! | `Firing`     | always                          | `Refractory` |
//! | `Refractory` | always                          | `Ready`    |
//!
//! Neighborhoods are Moore (up to 8 cells) and clipped at the borders: a
//! corner cell has 3 neighbors, a non-corner edge cell has 5, and positions
//! outside the grid are never consulted. There is no wraparound.

use super::cell::Cell;
use super::grid::Grid;

/// Firing-neighbor count that ignites a ready cell.
const IGNITION_COUNT: usize = 2;

/// Compute the next generation of `previous` into `next`.
///
/// Returns `true` if any cell's value differs between the two generations.
/// A `false` return means the grid is fully dormant (all cells ready, none
/// about to ignite) and will never change again.
///
/// # Panics
/// Debug-asserts that the two grids share dimensions; mismatched arenas are
/// a programming defect, not a runtime condition.
pub fn step_into(previous: &Grid, next: &mut Grid) -> bool {
    debug_assert_eq!(previous.rows(), next.rows());
    debug_assert_eq!(previous.cols(), next.cols());

    let mut changed = false;

    for row in 0..previous.rows() {
        for col in 0..previous.cols() {
            let state = previous.get(row, col);
            let successor = match state {
                Cell::Ready => {
                    if firing_neighbors(previous, row, col) == IGNITION_COUNT {
                        Cell::Firing
                    } else {
                        Cell::Ready
                    }
                }
                Cell::Firing => Cell::Refractory,
                Cell::Refractory => Cell::Ready,
            };

            if successor != state {
                changed = true;
            }
            next.set(row, col, successor);
        }
    }

    changed
}

/// Count the firing cells in the clipped Moore neighborhood of (row, col).
///
/// The iteration bounds are clamped to the grid, so border cells simply see
/// fewer neighbors.
pub fn firing_neighbors(grid: &Grid, row: usize, col: usize) -> usize {
    let row_end = (row + 1).min(grid.rows() - 1);
    let col_end = (col + 1).min(grid.cols() - 1);

    let mut count = 0;
    for r in row.saturating_sub(1)..=row_end {
        for c in col.saturating_sub(1)..=col_end {
            if (r, c) != (row, col) && grid.get(r, c) == Cell::Firing {
                count += 1;
            }
        }
    }
    count
}
