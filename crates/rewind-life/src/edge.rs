//! Edge (boundary) behavior for forward evolution.

/// How [`step`](crate::step) treats positions outside the grid.
///
/// # Examples
///
/// ```
/// use rewind_core::Grid;
/// use rewind_life::{step, EdgeBehavior};
///
/// // A blinker touching the top edge dies out under Dead edges but
/// // keeps oscillating on a torus.
/// let edge_blinker = Grid::parse("OOO\n...\n...").unwrap();
/// assert_eq!(step(&edge_blinker, EdgeBehavior::Dead).population(), 2);
/// assert_eq!(step(&edge_blinker, EdgeBehavior::Wrap).population(), 9);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbours are permanently dead (hard edge).
    #[default]
    Dead,
    /// Out-of-bounds neighbours wrap to the opposite side (torus).
    Wrap,
}

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(resolved)` or `None` for a dead out-of-bounds position.
pub(crate) fn resolve_axis(val: isize, len: usize, edge: EdgeBehavior) -> Option<usize> {
    let n = len as isize;
    if val >= 0 && val < n {
        return Some(val as usize);
    }
    match edge {
        EdgeBehavior::Dead => None,
        EdgeBehavior::Wrap => Some((((val % n) + n) % n) as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(2, 5, EdgeBehavior::Dead), Some(2));
        assert_eq!(resolve_axis(0, 5, EdgeBehavior::Wrap), Some(0));
    }

    #[test]
    fn resolve_axis_dead_out_of_bounds() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Dead), None);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Dead), None);
    }

    #[test]
    fn resolve_axis_wrap() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), Some(4));
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Wrap), Some(0));
        assert_eq!(resolve_axis(-1, 1, EdgeBehavior::Wrap), Some(0));
    }

    #[test]
    fn default_is_dead() {
        assert_eq!(EdgeBehavior::default(), EdgeBehavior::Dead);
    }
}
