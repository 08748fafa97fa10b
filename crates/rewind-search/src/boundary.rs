//! Boundary classes: which sides of a goal cell lie on the goal's edge.

use std::fmt;
use std::ops::BitOr;

use rewind_core::Shape;

/// Set of goal-edge sides touched by a cell.
///
/// A 4-bit set over {top, bottom, left, right}. Interior cells have
/// [`Boundary::NONE`]; edge cells one side; corner cells two adjacent
/// sides. Goals one cell high or wide produce opposite-side pairs
/// (`TOP | BOTTOM`) and triples, so all 16 combinations occur.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Boundary(u8);

impl Boundary {
    /// Interior cell.
    pub const NONE: Self = Self(0);
    /// Cell in the goal's first row.
    pub const TOP: Self = Self(1);
    /// Cell in the goal's last row.
    pub const BOTTOM: Self = Self(1 << 1);
    /// Cell in the goal's first column.
    pub const LEFT: Self = Self(1 << 2);
    /// Cell in the goal's last column.
    pub const RIGHT: Self = Self(1 << 3);
    /// Top-left corner.
    pub const TOP_LEFT: Self = Self(Self::TOP.0 | Self::LEFT.0);
    /// Top-right corner.
    pub const TOP_RIGHT: Self = Self(Self::TOP.0 | Self::RIGHT.0);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Self = Self(Self::BOTTOM.0 | Self::LEFT.0);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Self = Self(Self::BOTTOM.0 | Self::RIGHT.0);

    /// Number of distinct boundary classes.
    pub const COUNT: usize = 16;

    /// Boundary class of goal cell `(row, col)` in a goal of `shape`.
    pub fn of_cell(row: usize, col: usize, shape: Shape) -> Self {
        let mut b = Self::NONE;
        if row == 0 {
            b = b | Self::TOP;
        }
        if row + 1 == shape.rows {
            b = b | Self::BOTTOM;
        }
        if col == 0 {
            b = b | Self::LEFT;
        }
        if col + 1 == shape.cols {
            b = b | Self::RIGHT;
        }
        b
    }

    /// Rebuild a class from [`bits`](Self::bits); `None` above 15.
    pub fn from_bits(bits: u8) -> Option<Self> {
        (usize::from(bits) < Self::COUNT).then_some(Self(bits))
    }

    /// Raw 4-bit representation, usable as a table index.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether every side in `other` is also in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `true` for interior cells.
    pub fn is_interior(self) -> bool {
        self.0 == 0
    }

    /// All 16 classes in ascending bit order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl BitOr for Boundary {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_interior() {
            return f.write_str("none");
        }
        let names = [
            (Self::TOP, "top"),
            (Self::BOTTOM, "bottom"),
            (Self::LEFT, "left"),
            (Self::RIGHT, "right"),
        ];
        let mut first = true;
        for (side, name) in names {
            if self.contains(side) {
                if !first {
                    f.write_str("-")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_of_square_goal() {
        let shape = Shape::new(4, 4);
        assert_eq!(Boundary::of_cell(0, 0, shape), Boundary::TOP_LEFT);
        assert_eq!(Boundary::of_cell(0, 2, shape), Boundary::TOP);
        assert_eq!(Boundary::of_cell(0, 3, shape), Boundary::TOP_RIGHT);
        assert_eq!(Boundary::of_cell(2, 0, shape), Boundary::LEFT);
        assert_eq!(Boundary::of_cell(1, 2, shape), Boundary::NONE);
        assert_eq!(Boundary::of_cell(2, 3, shape), Boundary::RIGHT);
        assert_eq!(Boundary::of_cell(3, 0, shape), Boundary::BOTTOM_LEFT);
        assert_eq!(Boundary::of_cell(3, 1, shape), Boundary::BOTTOM);
        assert_eq!(Boundary::of_cell(3, 3, shape), Boundary::BOTTOM_RIGHT);
    }

    #[test]
    fn thin_goals_touch_opposite_sides() {
        let row = Shape::new(1, 3);
        assert_eq!(
            Boundary::of_cell(0, 1, row),
            Boundary::TOP | Boundary::BOTTOM
        );
        assert_eq!(
            Boundary::of_cell(0, 0, row),
            Boundary::TOP_LEFT | Boundary::BOTTOM
        );
        let single = Shape::new(1, 1);
        assert_eq!(
            Boundary::of_cell(0, 0, single).bits() as usize,
            Boundary::COUNT - 1
        );
    }

    #[test]
    fn nine_shapes_for_wide_goals() {
        let shape = Shape::new(5, 7);
        let mut seen = std::collections::HashSet::new();
        for r in 0..shape.rows {
            for c in 0..shape.cols {
                seen.insert(Boundary::of_cell(r, c, shape));
            }
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn bits_round_trip_and_bounds() {
        for b in Boundary::all() {
            assert_eq!(Boundary::from_bits(b.bits()), Some(b));
        }
        assert_eq!(Boundary::from_bits(16), None);
        assert_eq!(Boundary::all().count(), Boundary::COUNT);
    }

    #[test]
    fn display_names() {
        assert_eq!(Boundary::NONE.to_string(), "none");
        assert_eq!(Boundary::TOP_LEFT.to_string(), "top-left");
        assert_eq!(
            (Boundary::TOP | Boundary::BOTTOM | Boundary::RIGHT).to_string(),
            "top-bottom-right"
        );
    }
}
