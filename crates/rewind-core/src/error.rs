//! Error types for grid construction and grid primitives.

use std::error::Error;
use std::fmt;

use crate::grid::Shape;

/// Errors arising from grid construction, grid primitives, or parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid {
        /// The rejected shape.
        shape: Shape,
    },
    /// Row-wise input where a row's length differs from the first row's.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell value other than 0 or 1.
    InvalidCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u8,
    },
    /// A cell or rectangle lies (partly) outside the grid.
    OutOfBounds {
        /// Row of the requested cell or rectangle origin.
        row: usize,
        /// Column of the requested cell or rectangle origin.
        col: usize,
        /// Shape of the grid that was indexed.
        shape: Shape,
    },
    /// Two grids, or a grid and a cell buffer, have incompatible shapes.
    ShapeMismatch {
        /// What the operation required.
        expected: Shape,
        /// What it was given.
        found: Shape,
    },
    /// A border slice or overlap is wider than the grid it is taken from,
    /// or zero.
    InvalidOverlap {
        /// Requested width of the slice or overlap.
        width: usize,
        /// Shape of the grid involved.
        shape: Shape,
    },
    /// The cells shared by two grids being concatenated disagree.
    OverlapConflict {
        /// Row of the first disagreeing cell, in the left/top grid.
        row: usize,
        /// Column of the first disagreeing cell, in the left/top grid.
        col: usize,
    },
    /// Malformed pattern text.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { shape } => {
                write!(f, "grid must have at least one row and column, got {shape}")
            }
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::InvalidCell { row, col, value } => {
                write!(f, "cell ({row},{col}) has value {value}, expected 0 or 1")
            }
            Self::OutOfBounds { row, col, shape } => {
                write!(f, "position ({row},{col}) out of bounds for {shape} grid")
            }
            Self::ShapeMismatch { expected, found } => {
                write!(f, "shape mismatch: expected {expected}, found {found}")
            }
            Self::InvalidOverlap { width, shape } => {
                write!(f, "invalid border width {width} for {shape} grid")
            }
            Self::OverlapConflict { row, col } => {
                write!(f, "overlapping cells disagree at ({row},{col})")
            }
            Self::Parse { line, reason } => write!(f, "parse error on line {line}: {reason}"),
        }
    }
}

impl Error for GridError {}
