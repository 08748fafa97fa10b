//! Post-filters over a predecessor list.
//!
//! Each reducer keeps every grid that ties for the best score, in the
//! order given.

use std::fmt;

use rewind_core::Grid;

/// Keep the grids scoring lowest under `score`.
fn keep_min_by<K: Ord>(grids: &[Grid], score: impl Fn(&Grid) -> K) -> Vec<Grid> {
    let Some(best) = grids.iter().map(&score).min() else {
        return Vec::new();
    };
    grids
        .iter()
        .filter(|g| score(g) == best)
        .cloned()
        .collect()
}

/// Grids with the fewest live cells.
pub fn fewest_live_cells(grids: &[Grid]) -> Vec<Grid> {
    keep_min_by(grids, Grid::population)
}

/// Grids with the most live cells.
pub fn most_live_cells(grids: &[Grid]) -> Vec<Grid> {
    keep_min_by(grids, |g| std::cmp::Reverse(g.population()))
}

/// Grids whose live cells fit in the smallest bounding box, by area.
///
/// An all-dead grid has area 0 and therefore always wins.
pub fn smallest_bounding_box(grids: &[Grid]) -> Vec<Grid> {
    keep_min_by(grids, |g| g.bounding_box().map_or(0, |b| b.area()))
}

/// A named post-filter, for callers that pick one at run time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    /// [`fewest_live_cells`].
    FewestLiveCells,
    /// [`most_live_cells`].
    MostLiveCells,
    /// [`smallest_bounding_box`].
    SmallestBoundingBox,
}

impl Filter {
    /// All filters, in menu order.
    pub const ALL: [Filter; 3] = [
        Filter::FewestLiveCells,
        Filter::MostLiveCells,
        Filter::SmallestBoundingBox,
    ];

    /// Run the filter.
    pub fn apply(self, grids: &[Grid]) -> Vec<Grid> {
        match self {
            Self::FewestLiveCells => fewest_live_cells(grids),
            Self::MostLiveCells => most_live_cells(grids),
            Self::SmallestBoundingBox => smallest_bounding_box(grids),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FewestLiveCells => "fewest alive cells",
            Self::MostLiveCells => "most alive cells",
            Self::SmallestBoundingBox => "smallest bounding box",
        })
    }
}
