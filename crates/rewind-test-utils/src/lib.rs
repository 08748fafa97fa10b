//! Test utilities for Rewind development.
//!
//! Provides an exhaustive predecessor oracle ([`brute_force_predecessors`])
//! for checking the search on small goals, a canonical ordering helper, and
//! named goal fixtures shared by tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rewind_core::{CellState, Grid, Shape};
use rewind_life::step_dead;

/// Largest goal area the oracle will enumerate (2^20 grids).
pub const BRUTE_FORCE_MAX_AREA: usize = 20;

/// Every grid of the goal's shape whose dead-edge successor equals `goal`,
/// found by trying all `2^(rows*cols)` grids.
///
/// Results are ordered by the row-major bit encoding with the first cell
/// as the most significant bit.
///
/// # Panics
///
/// If the goal area exceeds [`BRUTE_FORCE_MAX_AREA`].
pub fn brute_force_predecessors(goal: &Grid) -> Vec<Grid> {
    let shape = goal.shape();
    let area = shape.area();
    assert!(
        area <= BRUTE_FORCE_MAX_AREA,
        "brute force limited to {BRUTE_FORCE_MAX_AREA} cells, goal is {shape}"
    );
    (0u32..1 << area)
        .map(|bits| {
            Grid::from_fn(shape, |r, c| (bits >> (area - 1 - (r * shape.cols + c))) & 1 == 1)
                .expect("goal shape is non-degenerate")
        })
        .filter(|candidate| step_dead(candidate) == *goal)
        .collect()
}

/// Sort grids into a canonical order for set comparison.
pub fn sorted(mut grids: Vec<Grid>) -> Vec<Grid> {
    grids.sort();
    grids
}

/// Every grid of `shape`, in bit-encoding order.
pub fn all_grids(shape: Shape) -> impl Iterator<Item = Grid> {
    let area = shape.area();
    assert!(area <= BRUTE_FORCE_MAX_AREA, "{shape} is too large to enumerate");
    (0u32..1 << area).map(move |bits| {
        Grid::from_fn(shape, |r, c| (bits >> (r * shape.cols + c)) & 1 == 1)
            .expect("shape is non-degenerate")
    })
}

// ── Fixtures ───────────────────────────────────────────────────────

fn parse(text: &str) -> Grid {
    Grid::parse(text).expect("fixture text is well formed")
}

/// 3x3 glider, phase `.O./..O/OOO`. Has exactly one predecessor.
pub fn glider() -> Grid {
    parse(".O.\n..O\nOOO")
}

/// Horizontal blinker centred in a 5x5 field.
pub fn blinker() -> Grid {
    parse(".....\n.....\n.OOO.\n.....\n.....")
}

/// 2x2 block filling its grid.
pub fn block() -> Grid {
    parse("OO\nOO")
}

/// Checkerboard of `shape`; `phase` selects whether `(0, 0)` is alive.
pub fn checkerboard(shape: Shape, phase: bool) -> Grid {
    Grid::from_fn(shape, |r, c| ((r + c) % 2 == 0) == phase).expect("shape is non-degenerate")
}

/// A 1x1 goal.
pub fn single_cell(state: CellState) -> Grid {
    Grid::single(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_on_single_cells() {
        assert!(brute_force_predecessors(&single_cell(CellState::Alive)).is_empty());
        assert_eq!(brute_force_predecessors(&single_cell(CellState::Dead)).len(), 2);
    }

    #[test]
    fn oracle_on_block() {
        let preds = brute_force_predecessors(&block());
        assert_eq!(preds.len(), 5);
        assert!(preds.iter().all(|p| step_dead(p) == block()));
    }

    #[test]
    fn checkerboard_phases_differ() {
        let shape = Shape::new(2, 2);
        assert_ne!(checkerboard(shape, true), checkerboard(shape, false));
        assert_eq!(checkerboard(shape, true).population(), 2);
        assert!(checkerboard(shape, true).is_alive(0, 0));
    }

    #[test]
    fn all_grids_counts() {
        assert_eq!(all_grids(Shape::new(2, 3)).count(), 64);
    }
}
