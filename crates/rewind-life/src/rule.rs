//! The B3/S23 transition function.

use rewind_core::Grid;

use crate::edge::{resolve_axis, EdgeBehavior};

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Next state of one cell given its own state and its live-neighbour count.
///
/// Born with exactly 3 live neighbours, survives with 2 or 3.
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    live_neighbours == 3 || (alive && live_neighbours == 2)
}

/// Count live cells among the 8 neighbours of `(r, c)`.
fn live_neighbours(grid: &Grid, r: usize, c: usize, edge: EdgeBehavior) -> u8 {
    let mut count = 0;
    for (dr, dc) in OFFSETS_8 {
        let nr = resolve_axis(r as isize + dr, grid.rows(), edge);
        let nc = resolve_axis(c as isize + dc, grid.cols(), edge);
        if let (Some(nr), Some(nc)) = (nr, nc) {
            count += u8::from(grid.is_alive(nr, nc));
        }
    }
    count
}

/// One-generation successor of `grid`; the result has the same shape.
pub fn step(grid: &Grid, edge: EdgeBehavior) -> Grid {
    grid.map_cells(|r, c| next_state(grid.is_alive(r, c), live_neighbours(grid, r, c, edge)))
}

/// [`step`] with [`EdgeBehavior::Dead`], the rule the predecessor search inverts.
pub fn step_dead(grid: &Grid) -> Grid {
    step(grid, EdgeBehavior::Dead)
}

/// Advance `grid` by `generations` steps.
pub fn run(grid: &Grid, generations: usize, edge: EdgeBehavior) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = step(&current, edge);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rewind_core::Shape;

    fn g(text: &str) -> Grid {
        Grid::parse(text).unwrap()
    }

    #[test]
    fn rule_table() {
        for n in 0..=8u8 {
            assert_eq!(next_state(false, n), n == 3, "birth with {n}");
            assert_eq!(next_state(true, n), n == 2 || n == 3, "survival with {n}");
        }
    }

    #[test]
    fn single_cell_dies_under_dead_edges() {
        assert_eq!(step_dead(&g("O")), g("."));
        assert_eq!(step_dead(&g(".")), g("."));
    }

    #[test]
    fn block_is_still_life() {
        let block = g("....\n.OO.\n.OO.\n....");
        assert_eq!(step_dead(&block), block);
        let tight = g("OO\nOO");
        assert_eq!(step_dead(&tight), tight);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = g(".....\n.....\n.OOO.\n.....\n.....");
        let vertical = g(".....\n..O..\n..O..\n..O..\n.....");
        assert_eq!(step_dead(&horizontal), vertical);
        assert_eq!(run(&horizontal, 2, EdgeBehavior::Dead), horizontal);
    }

    #[test]
    fn glider_translates_on_torus() {
        let glider = g(".O...\n..O..\nOOO..\n.....\n.....");
        let moved = run(&glider, 4, EdgeBehavior::Wrap);
        let expected = g(".....\n..O..\n...O.\n.OOO.\n.....");
        assert_eq!(moved, expected);
        // After 20 generations on a 5x5 torus it is back where it started.
        assert_eq!(run(&glider, 20, EdgeBehavior::Wrap), glider);
    }

    #[test]
    fn run_zero_generations_is_identity() {
        let grid = g("O.\n.O");
        assert_eq!(run(&grid, 0, EdgeBehavior::Dead), grid);
    }

    #[test]
    fn dead_edge_matches_padded_wrap_interior() {
        // Stepping a grid with dead edges equals stepping it inside a
        // larger dead frame and reading back the interior.
        let grid = g("OO.\n.OO\nO..");
        let framed = grid.pad().pad();
        let stepped = step(&framed, EdgeBehavior::Wrap);
        assert_eq!(
            stepped.sub_grid(2, 2, grid.shape()).unwrap(),
            step_dead(&grid)
        );
    }

    proptest! {
        #[test]
        fn step_preserves_shape(rows in 1usize..8, cols in 1usize..8, bits in any::<u64>()) {
            let shape = Shape::new(rows, cols);
            let grid = Grid::from_fn(shape, |r, c| (bits >> ((r * cols + c) % 64)) & 1 == 1).unwrap();
            prop_assert_eq!(step_dead(&grid).shape(), shape);
            prop_assert_eq!(step(&grid, EdgeBehavior::Wrap).shape(), shape);
        }
    }
}
