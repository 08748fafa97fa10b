//! Life 1.06 coordinate-list codec.
//!
//! The format is a `#Life 1.06` header followed by one `row col` pair per
//! live cell. Coordinates may be negative; decoding normalises them so
//! that the live cells' bounding box starts at `(0, 0)`.

use crate::error::GridError;
use crate::grid::{Grid, Shape};

/// Header line that opens every Life 1.06 file.
pub const LIFE106_HEADER: &str = "#Life 1.06";

/// Largest row or column extent [`from_life106`] will decode.
pub const LIFE106_MAX_EXTENT: usize = 4096;

/// Encode the live cells of `grid` in row-major order.
pub fn to_life106(grid: &Grid) -> String {
    let mut out = String::from(LIFE106_HEADER);
    for (r, c) in grid.live_cells() {
        out.push('\n');
        out.push_str(&format!("{r} {c}"));
    }
    out
}

/// Decode a Life 1.06 document.
///
/// A document with no coordinates decodes to a single dead cell.
/// Blank lines are skipped.
pub fn from_life106(text: &str) -> Result<Grid, GridError> {
    let mut lines = text.lines().enumerate();
    match lines.next() {
        Some((_, header)) if header.trim_end() == LIFE106_HEADER => {}
        _ => {
            return Err(GridError::Parse {
                line: 1,
                reason: format!("expected header {LIFE106_HEADER:?}"),
            })
        }
    }

    let mut coords: Vec<(i64, i64)> = Vec::new();
    let mut bounds: Option<(i64, i64, i64, i64)> = None;
    for (n, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let parsed = match (fields.next(), fields.next(), fields.next()) {
            (Some(r), Some(c), None) => r.parse::<i64>().ok().zip(c.parse::<i64>().ok()),
            _ => None,
        };
        let Some((r, c)) = parsed else {
            return Err(GridError::Parse {
                line: n + 1,
                reason: format!("expected two integers, got {line:?}"),
            });
        };
        let (min_r, max_r, min_c, max_c) = match bounds {
            Some((min_r, max_r, min_c, max_c)) => {
                (min_r.min(r), max_r.max(r), min_c.min(c), max_c.max(c))
            }
            None => (r, r, c, c),
        };
        let fits = |lo: i64, hi: i64| extent(lo, hi).is_some_and(|e| e <= LIFE106_MAX_EXTENT);
        if !fits(min_r, max_r) || !fits(min_c, max_c) {
            return Err(GridError::Parse {
                line: n + 1,
                reason: format!("pattern extent exceeds {LIFE106_MAX_EXTENT} cells"),
            });
        }
        bounds = Some((min_r, max_r, min_c, max_c));
        coords.push((r, c));
    }

    let Some((min_r, max_r, min_c, max_c)) = bounds else {
        return Grid::new(1, 1);
    };
    let (Some(rows), Some(cols)) = (extent(min_r, max_r), extent(min_c, max_c)) else {
        return Err(GridError::Parse {
            line: 1,
            reason: "pattern extent overflows".to_string(),
        });
    };
    let shape = Shape::new(rows, cols);
    let mut cells = vec![0u8; shape.area()];
    for (r, c) in coords {
        if let (Some(dr), Some(dc)) = (offset(min_r, r), offset(min_c, c)) {
            cells[dr * cols + dc] = 1;
        }
    }
    Grid::from_cells(shape, cells)
}

/// Number of cells in `lo..=hi`, or `None` if it does not fit a `usize`.
fn extent(lo: i64, hi: i64) -> Option<usize> {
    offset(lo, hi)?.checked_add(1)
}

fn offset(lo: i64, v: i64) -> Option<usize> {
    usize::try_from(v.checked_sub(lo)?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_lists_live_cells_row_major() {
        let grid = Grid::parse(".O\nO.").unwrap();
        assert_eq!(to_life106(&grid), "#Life 1.06\n0 1\n1 0");
    }

    #[test]
    fn encode_dead_grid_is_header_only() {
        assert_eq!(to_life106(&Grid::new(2, 2).unwrap()), LIFE106_HEADER);
    }

    #[test]
    fn decode_normalises_negative_coordinates() {
        let grid = from_life106("#Life 1.06\n-1 -1\n0 1\n\n1 0").unwrap();
        assert_eq!(grid, Grid::parse("O..\n..O\n.O.").unwrap());
    }

    #[test]
    fn decode_round_trips_cropped_pattern() {
        let glider = Grid::parse(".O.\n..O\nOOO").unwrap();
        assert_eq!(from_life106(&to_life106(&glider)).unwrap(), glider);
    }

    #[test]
    fn decode_empty_document_is_single_dead_cell() {
        assert_eq!(from_life106("#Life 1.06").unwrap(), Grid::new(1, 1).unwrap());
    }

    #[test]
    fn decode_rejects_bad_header_and_lines() {
        assert!(matches!(
            from_life106("#Life 1.05\n0 0"),
            Err(GridError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            from_life106("#Life 1.06\n0 0\n1 x"),
            Err(GridError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            from_life106("#Life 1.06\n0 0 0"),
            Err(GridError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn decode_rejects_overflowing_extent() {
        let text = format!("#Life 1.06\n{} 0\n{} 0", i64::MIN, i64::MAX);
        assert!(matches!(
            from_life106(&text),
            Err(GridError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn decode_rejects_far_apart_cells() {
        assert!(matches!(
            from_life106("#Life 1.06\n0 0\n100000 100000"),
            Err(GridError::Parse { line: 3, .. })
        ));
        let edge = LIFE106_MAX_EXTENT - 1;
        let grid = from_life106(&format!("#Life 1.06\n0 0\n0 {edge}")).unwrap();
        assert_eq!(grid.shape(), Shape::new(1, LIFE106_MAX_EXTENT));
        assert_eq!(grid.population(), 2);
    }
}
