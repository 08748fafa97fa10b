//! Rim-indexed joins of sibling candidate sets.
//!
//! Two adjacent regions' padded candidates overlap in two columns (side by
//! side) or two rows (stacked). A join keeps exactly the pairs that agree
//! on that strip and emits each combined grid with the strip written once.
//!
//! The right-hand (or lower) operand is looked up through its rim index,
//! so the cost is proportional to the number of compatible pairs rather
//! than the product of set sizes. Equal rim keys mean equal strips, so
//! the joined grids are stitched without comparing the strip again.

use rewind_core::{Grid, GridError, Shape};

use crate::candidate::{CandidateSet, Position, Rim, RimKey};
use crate::error::SearchError;

/// Width of the strip shared by adjacent padded candidates.
const OVERLAP: usize = 2;

/// Counters for the joins performed by one [`Merger`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Two-way joins performed.
    pub joins: u64,
    /// Grids produced.
    pub produced: u64,
    /// Left or upper candidates with no compatible partner.
    pub dead_ends: u64,
}

/// Joins candidate sets, enforcing an optional size ceiling.
#[derive(Debug)]
pub struct Merger {
    limit: Option<usize>,
    stats: MergeStats,
}

impl Merger {
    /// A merger that fails once any produced set exceeds `limit` grids.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            stats: MergeStats::default(),
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> MergeStats {
        self.stats
    }

    /// Join `left` and `right`, which sit side by side.
    ///
    /// The result covers both regions and is indexed for `position`.
    ///
    /// # Errors
    ///
    /// [`SearchError::ResourceExhausted`] when the result would exceed the
    /// ceiling; [`SearchError::Grid`] if the regions differ in height.
    pub fn horizontal(
        &mut self,
        left: &CandidateSet,
        right: &CandidateSet,
        position: Position,
    ) -> Result<CandidateSet, SearchError> {
        let (l, r) = (left.region(), right.region());
        if l.rows != r.rows {
            return Err(GridError::ShapeMismatch {
                expected: Shape::new(l.rows, r.cols),
                found: r,
            }
            .into());
        }
        let region = Shape::new(l.rows, l.cols + r.cols);
        let index = right.index_for(Rim::Left);
        let partners = right.patterns();
        let mut out = Vec::new();
        for pattern in left.patterns() {
            let Some(matches) = index.get(&RimKey::of(pattern, Rim::Right)) else {
                self.stats.dead_ends += 1;
                continue;
            };
            for &i in matches {
                out.push(pattern.join_horizontal(&partners[i], OVERLAP)?);
                self.check_limit(out.len(), region)?;
            }
        }
        Ok(self.finish(region, out, position))
    }

    /// Join `top` and `bottom`, which are stacked.
    ///
    /// # Errors
    ///
    /// As for [`horizontal`](Self::horizontal), with widths in place of
    /// heights.
    pub fn vertical(
        &mut self,
        top: &CandidateSet,
        bottom: &CandidateSet,
        position: Position,
    ) -> Result<CandidateSet, SearchError> {
        let (t, b) = (top.region(), bottom.region());
        if t.cols != b.cols {
            return Err(GridError::ShapeMismatch {
                expected: Shape::new(b.rows, t.cols),
                found: b,
            }
            .into());
        }
        let region = Shape::new(t.rows + b.rows, t.cols);
        let index = bottom.index_for(Rim::Top);
        let partners = bottom.patterns();
        let mut out = Vec::new();
        for pattern in top.patterns() {
            let Some(matches) = index.get(&RimKey::of(pattern, Rim::Bottom)) else {
                self.stats.dead_ends += 1;
                continue;
            };
            for &i in matches {
                out.push(pattern.join_vertical(&partners[i], OVERLAP)?);
                self.check_limit(out.len(), region)?;
            }
        }
        Ok(self.finish(region, out, position))
    }

    /// Join four quadrants: the two top ones side by side, the two bottom
    /// ones side by side, then the rows stacked.
    ///
    /// Stops early with an empty set when the top row has no candidates.
    pub fn quad(
        &mut self,
        top_left: &CandidateSet,
        top_right: &CandidateSet,
        bottom_left: &CandidateSet,
        bottom_right: &CandidateSet,
        position: Position,
    ) -> Result<CandidateSet, SearchError> {
        let tops = self.horizontal(top_left, top_right, Position::Top)?;
        if tops.is_empty() {
            let region = Shape::new(
                tops.region().rows + bottom_left.region().rows,
                tops.region().cols,
            );
            return Ok(CandidateSet::new(region, Vec::new(), position));
        }
        let downs = self.horizontal(bottom_left, bottom_right, Position::Bottom)?;
        self.vertical(&tops, &downs, position)
    }

    fn check_limit(&self, len: usize, region: Shape) -> Result<(), SearchError> {
        match self.limit {
            Some(limit) if len > limit => Err(SearchError::ResourceExhausted { limit, region }),
            _ => Ok(()),
        }
    }

    fn finish(
        &mut self,
        region: Shape,
        patterns: Vec<Grid>,
        position: Position,
    ) -> CandidateSet {
        self.stats.joins += 1;
        self.stats.produced += patterns.len() as u64;
        CandidateSet::new(region, patterns, position)
    }
}
