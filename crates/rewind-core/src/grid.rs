//! The binary [`Grid`] value type and its primitives.
//!
//! A grid is an immutable-by-convention rectangle of 0/1 cells stored
//! row-major. Every primitive here builds a new grid from pieces of its
//! inputs; none of them mutates an input. The only in-place mutator is
//! [`Grid::set`], used by callers that assemble a grid cell by cell.

use std::fmt;

use crate::error::GridError;

// ── Shape ──────────────────────────────────────────────────────────

/// Height and width of a rectangular region, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    /// Number of rows (height).
    pub rows: usize,
    /// Number of columns (width).
    pub cols: usize,
}

impl Shape {
    /// Create a shape of `rows x cols`.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells covered.
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// `true` if either dimension is zero.
    pub const fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// The shape grown by a one-cell ring on every side.
    pub const fn padded(&self) -> Self {
        Self {
            rows: self.rows + 2,
            cols: self.cols + 2,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

// ── CellState ──────────────────────────────────────────────────────

/// State of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellState {
    /// Off (0).
    Dead,
    /// On (1).
    Alive,
}

impl CellState {
    /// `true` for [`CellState::Alive`].
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// The stored 0/1 representation.
    pub fn bit(self) -> u8 {
        match self {
            Self::Dead => 0,
            Self::Alive => 1,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

// ── BoundingBox ────────────────────────────────────────────────────

/// Inclusive bounding rectangle of the live cells of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// First row containing a live cell.
    pub top: usize,
    /// First column containing a live cell.
    pub left: usize,
    /// Last row containing a live cell.
    pub bottom: usize,
    /// Last column containing a live cell.
    pub right: usize,
}

impl BoundingBox {
    /// Shape of the box.
    pub fn shape(&self) -> Shape {
        Shape::new(self.bottom - self.top + 1, self.right - self.left + 1)
    }

    /// Number of cells inside the box.
    pub fn area(&self) -> usize {
        self.shape().area()
    }
}

// ── Grid ───────────────────────────────────────────────────────────

/// A rectangular two-state cell grid.
///
/// Equality, hashing and ordering are element-wise (shape first, then
/// cells in row-major order), so grids can be deduplicated and sorted.
///
/// # Examples
///
/// ```
/// use rewind_core::{Grid, Shape};
///
/// let glider = Grid::parse(
///     ".O.
///      ..O
///      OOO",
/// )
/// .unwrap();
/// assert_eq!(glider.shape(), Shape::new(3, 3));
/// assert_eq!(glider.population(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-dead grid of `rows x cols`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let shape = Shape::new(rows, cols);
        if shape.is_degenerate() {
            return Err(GridError::EmptyGrid { shape });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![0; shape.area()],
        })
    }

    /// A 1x1 grid holding `state`.
    pub fn single(state: CellState) -> Self {
        Self {
            rows: 1,
            cols: 1,
            cells: vec![state.bit()],
        }
    }

    /// Create an all-dead grid of the given shape.
    pub fn dead(shape: Shape) -> Result<Self, GridError> {
        Self::new(shape.rows, shape.cols)
    }

    /// Wrap a row-major cell buffer.
    ///
    /// The buffer length must equal `shape.area()` and every value must
    /// be 0 or 1.
    pub fn from_cells(shape: Shape, cells: Vec<u8>) -> Result<Self, GridError> {
        if shape.is_degenerate() {
            return Err(GridError::EmptyGrid { shape });
        }
        if cells.len() != shape.area() {
            return Err(GridError::ShapeMismatch {
                expected: shape,
                found: Shape::new(1, cells.len()),
            });
        }
        if let Some(i) = cells.iter().position(|&v| v > 1) {
            return Err(GridError::InvalidCell {
                row: i / shape.cols,
                col: i % shape.cols,
                value: cells[i],
            });
        }
        Ok(Self {
            rows: shape.rows,
            cols: shape.cols,
            cells,
        })
    }

    /// Build a grid from a slice of equally long rows of 0/1 values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let shape = Shape::new(rows.len(), cols);
        if shape.is_degenerate() {
            return Err(GridError::EmptyGrid { shape });
        }
        let mut cells = Vec::with_capacity(shape.area());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Self::from_cells(shape, cells)
    }

    /// Build a grid by evaluating `alive(row, col)` for every cell.
    pub fn from_fn(
        shape: Shape,
        mut alive: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, GridError> {
        let mut grid = Self::dead(shape)?;
        for r in 0..shape.rows {
            for c in 0..shape.cols {
                grid.cells[r * shape.cols + c] = u8::from(alive(r, c));
            }
        }
        Ok(grid)
    }

    /// Build a grid of the same shape by evaluating `alive(row, col)` at
    /// every position of `self`.
    pub fn map_cells(&self, mut alive: impl FnMut(usize, usize) -> bool) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..self.rows {
            for c in 0..self.cols {
                cells.push(u8::from(alive(r, c)));
            }
        }
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Parse a picture of the grid, one row per non-blank line.
    ///
    /// `O`, `o`, `*` and `1` are live; `.` and `0` are dead. Whitespace
    /// inside a line is ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (n, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                match ch {
                    'O' | 'o' | '*' | '1' => row.push(1),
                    '.' | '0' => row.push(0),
                    other => {
                        return Err(GridError::Parse {
                            line: n + 1,
                            reason: format!("unexpected character {other:?}"),
                        })
                    }
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(&rows)
    }

    /// Shape of the grid.
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major cell buffer.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Cells of row `r`, or `None` if out of range.
    pub fn row(&self, r: usize) -> Option<&[u8]> {
        (r < self.rows).then(|| &self.cells[r * self.cols..(r + 1) * self.cols])
    }

    /// State of cell `(r, c)`, or `None` if out of range.
    pub fn get(&self, r: usize, c: usize) -> Option<CellState> {
        if r < self.rows && c < self.cols {
            Some(CellState::from(self.cells[r * self.cols + c] == 1))
        } else {
            None
        }
    }

    /// `true` if `(r, c)` is inside the grid and alive.
    pub fn is_alive(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols && self.cells[r * self.cols + c] == 1
    }

    /// Set cell `(r, c)`.
    pub fn set(&mut self, r: usize, c: usize, state: CellState) -> Result<(), GridError> {
        if r >= self.rows || c >= self.cols {
            return Err(GridError::OutOfBounds {
                row: r,
                col: c,
                shape: self.shape(),
            });
        }
        self.cells[r * self.cols + c] = state.bit();
        Ok(())
    }

    /// Positions of all live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 1)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    /// Bounding box of the live cells, or `None` for an all-dead grid.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut live = self.live_cells();
        let (r0, c0) = live.next()?;
        let mut bb = BoundingBox {
            top: r0,
            left: c0,
            bottom: r0,
            right: c0,
        };
        for (r, c) in live {
            bb.left = bb.left.min(c);
            bb.right = bb.right.max(c);
            bb.bottom = r;
        }
        Some(bb)
    }

    /// Crop to the bounding box of the live cells.
    ///
    /// An all-dead grid crops to a single dead cell.
    pub fn crop_to_live(&self) -> Grid {
        match self.bounding_box() {
            Some(bb) => self.extract(bb.top, bb.left, bb.shape()),
            None => Grid::single(CellState::Dead),
        }
    }

    /// Surround the grid with a one-cell ring of dead cells.
    pub fn pad(&self) -> Grid {
        let shape = self.shape().padded();
        let mut cells = vec![0; shape.area()];
        for r in 0..self.rows {
            let dst = (r + 1) * shape.cols + 1;
            let src = &self.cells[r * self.cols..(r + 1) * self.cols];
            cells[dst..dst + self.cols].copy_from_slice(src);
        }
        Grid {
            rows: shape.rows,
            cols: shape.cols,
            cells,
        }
    }

    /// Copy out the `shape` rectangle whose top-left cell is `(top, left)`.
    pub fn sub_grid(&self, top: usize, left: usize, shape: Shape) -> Result<Grid, GridError> {
        if shape.is_degenerate() {
            return Err(GridError::EmptyGrid { shape });
        }
        if top + shape.rows > self.rows || left + shape.cols > self.cols {
            return Err(GridError::OutOfBounds {
                row: top,
                col: left,
                shape: self.shape(),
            });
        }
        Ok(self.extract(top, left, shape))
    }

    /// The first `n` rows.
    pub fn top_rows(&self, n: usize) -> Result<Grid, GridError> {
        self.check_border(n, self.rows)?;
        Ok(self.extract(0, 0, Shape::new(n, self.cols)))
    }

    /// The last `n` rows.
    pub fn bottom_rows(&self, n: usize) -> Result<Grid, GridError> {
        self.check_border(n, self.rows)?;
        Ok(self.extract(self.rows - n, 0, Shape::new(n, self.cols)))
    }

    /// The first `n` columns.
    pub fn left_cols(&self, n: usize) -> Result<Grid, GridError> {
        self.check_border(n, self.cols)?;
        Ok(self.extract(0, 0, Shape::new(self.rows, n)))
    }

    /// The last `n` columns.
    pub fn right_cols(&self, n: usize) -> Result<Grid, GridError> {
        self.check_border(n, self.cols)?;
        Ok(self.extract(0, self.cols - n, Shape::new(self.rows, n)))
    }

    /// Join `right` to the right of `self`, sharing `overlap` columns.
    ///
    /// The last `overlap` columns of `self` must equal the first
    /// `overlap` columns of `right`; they appear once in the result.
    pub fn concat_horizontal(&self, right: &Grid, overlap: usize) -> Result<Grid, GridError> {
        self.check_horizontal(right, overlap)?;
        if let Some((row, col)) = self.horizontal_conflict(right, overlap) {
            return Err(GridError::OverlapConflict { row, col });
        }
        Ok(self.stitch_horizontal(right, overlap))
    }

    /// [`concat_horizontal`](Self::concat_horizontal) for callers that
    /// already know the shared columns agree. Only the shapes are checked;
    /// debug builds also compare the shared cells.
    pub fn join_horizontal(&self, right: &Grid, overlap: usize) -> Result<Grid, GridError> {
        self.check_horizontal(right, overlap)?;
        debug_assert_eq!(self.horizontal_conflict(right, overlap), None);
        Ok(self.stitch_horizontal(right, overlap))
    }

    /// Join `bottom` below `self`, sharing `overlap` rows.
    ///
    /// The last `overlap` rows of `self` must equal the first `overlap`
    /// rows of `bottom`; they appear once in the result.
    pub fn concat_vertical(&self, bottom: &Grid, overlap: usize) -> Result<Grid, GridError> {
        self.check_vertical(bottom, overlap)?;
        if let Some((row, col)) = self.vertical_conflict(bottom, overlap) {
            return Err(GridError::OverlapConflict { row, col });
        }
        Ok(self.stitch_vertical(bottom, overlap))
    }

    /// [`concat_vertical`](Self::concat_vertical) without the shared-row
    /// comparison, which only debug builds perform.
    pub fn join_vertical(&self, bottom: &Grid, overlap: usize) -> Result<Grid, GridError> {
        self.check_vertical(bottom, overlap)?;
        debug_assert_eq!(self.vertical_conflict(bottom, overlap), None);
        Ok(self.stitch_vertical(bottom, overlap))
    }

    fn check_horizontal(&self, right: &Grid, overlap: usize) -> Result<(), GridError> {
        if right.rows != self.rows {
            return Err(GridError::ShapeMismatch {
                expected: Shape::new(self.rows, right.cols),
                found: right.shape(),
            });
        }
        if overlap > self.cols || overlap > right.cols {
            return Err(GridError::InvalidOverlap {
                width: overlap,
                shape: Shape::new(self.rows, self.cols.min(right.cols)),
            });
        }
        Ok(())
    }

    /// First shared cell that differs, in `self`'s coordinates.
    fn horizontal_conflict(&self, right: &Grid, overlap: usize) -> Option<(usize, usize)> {
        let skip = self.cols - overlap;
        (0..self.rows).find_map(|r| {
            let mine = &self.cells[r * self.cols + skip..(r + 1) * self.cols];
            let theirs = &right.cells[r * right.cols..r * right.cols + overlap];
            mine.iter()
                .zip(theirs)
                .position(|(a, b)| a != b)
                .map(|k| (r, skip + k))
        })
    }

    fn stitch_horizontal(&self, right: &Grid, overlap: usize) -> Grid {
        let cols = self.cols + right.cols - overlap;
        let mut cells = Vec::with_capacity(self.rows * cols);
        for r in 0..self.rows {
            cells.extend_from_slice(&self.cells[r * self.cols..(r + 1) * self.cols]);
            cells.extend_from_slice(&right.cells[r * right.cols + overlap..(r + 1) * right.cols]);
        }
        Grid {
            rows: self.rows,
            cols,
            cells,
        }
    }

    fn check_vertical(&self, bottom: &Grid, overlap: usize) -> Result<(), GridError> {
        if bottom.cols != self.cols {
            return Err(GridError::ShapeMismatch {
                expected: Shape::new(bottom.rows, self.cols),
                found: bottom.shape(),
            });
        }
        if overlap > self.rows || overlap > bottom.rows {
            return Err(GridError::InvalidOverlap {
                width: overlap,
                shape: Shape::new(self.rows.min(bottom.rows), self.cols),
            });
        }
        Ok(())
    }

    fn vertical_conflict(&self, bottom: &Grid, overlap: usize) -> Option<(usize, usize)> {
        let start = (self.rows - overlap) * self.cols;
        self.cells[start..]
            .iter()
            .zip(&bottom.cells[..overlap * self.cols])
            .position(|(a, b)| a != b)
            .map(|i| (self.rows - overlap + i / self.cols, i % self.cols))
    }

    fn stitch_vertical(&self, bottom: &Grid, overlap: usize) -> Grid {
        let rows = self.rows + bottom.rows - overlap;
        let mut cells = Vec::with_capacity(rows * self.cols);
        cells.extend_from_slice(&self.cells);
        cells.extend_from_slice(&bottom.cells[overlap * self.cols..]);
        Grid {
            rows,
            cols: self.cols,
            cells,
        }
    }

    fn check_border(&self, n: usize, extent: usize) -> Result<(), GridError> {
        if n == 0 || n > extent {
            return Err(GridError::InvalidOverlap {
                width: n,
                shape: self.shape(),
            });
        }
        Ok(())
    }

    /// Unchecked rectangle copy; callers validate bounds.
    fn extract(&self, top: usize, left: usize, shape: Shape) -> Grid {
        let mut cells = Vec::with_capacity(shape.area());
        for r in top..top + shape.rows {
            let start = r * self.cols + left;
            cells.extend_from_slice(&self.cells[start..start + shape.cols]);
        }
        Grid {
            rows: shape.rows,
            cols: shape.cols,
            cells,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for &v in &self.cells[r * self.cols..(r + 1) * self.cols] {
                f.write_str(if v == 1 { "O" } else { "." })?;
            }
        }
        Ok(())
    }
}
