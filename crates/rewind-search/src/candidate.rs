//! Candidate sets and their rim indexes.
//!
//! A [`CandidateSet`] holds every padded predecessor fragment valid for
//! one partition node. When the node will sit on the right of a
//! horizontal join or the bottom of a vertical join, its candidates are
//! also indexed by the two-cell rim that the partner will match on.

use std::borrow::Cow;

use indexmap::IndexMap;
use rewind_core::{Grid, Shape};
use smallvec::SmallVec;

/// A two-cell-wide border of a candidate grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rim {
    /// First two rows.
    Top,
    /// Last two rows.
    Bottom,
    /// First two columns.
    Left,
    /// Last two columns.
    Right,
}

/// Where a candidate set sits in its parent's next join.
///
/// ```text
///   quad:  TopLeft     TopRight      horizontal:  Left  Right
///          BottomLeft  BottomRight   vertical:    Top
///                                                 Bottom
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// The root of the search; never joined.
    Root,
    /// Upper-left quadrant.
    TopLeft,
    /// Upper-right quadrant.
    TopRight,
    /// Lower-left quadrant.
    BottomLeft,
    /// Lower-right quadrant.
    BottomRight,
    /// Left half of a horizontal split.
    Left,
    /// Right half of a horizontal split.
    Right,
    /// Upper half of a vertical split (also a quad's joined top row).
    Top,
    /// Lower half of a vertical split (also a quad's joined bottom row).
    Bottom,
}

impl Position {
    /// The rim a set at this position must be indexed by, if any.
    ///
    /// Right-hand sets are probed with their partner's right rim, so they
    /// index their left rim; bottom sets index their top rim.
    pub fn indexed_rim(self) -> Option<Rim> {
        match self {
            Self::TopRight | Self::BottomRight | Self::Right => Some(Rim::Left),
            Self::Bottom => Some(Rim::Top),
            Self::Root | Self::TopLeft | Self::BottomLeft | Self::Left | Self::Top => None,
        }
    }
}

/// Exact bit-packed encoding of a grid's rim.
///
/// Cells are packed in row-major order of the rim slice, 64 per word.
/// Keys are only compared between rims of equal shape, where the packing
/// is lossless, so equal keys mean equal cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RimKey(SmallVec<[u64; 2]>);

impl RimKey {
    /// Pack `rim` of `grid`. The grid must be at least 2x2.
    pub fn of(grid: &Grid, rim: Rim) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        let (row_range, col_range) = match rim {
            Rim::Top => (0..2, 0..cols),
            Rim::Bottom => (rows - 2..rows, 0..cols),
            Rim::Left => (0..rows, 0..2),
            Rim::Right => (0..rows, cols - 2..cols),
        };
        let cells = grid.cells();
        let mut words: SmallVec<[u64; 2]> = SmallVec::new();
        let mut n = 0usize;
        for r in row_range {
            for &v in &cells[r * cols + col_range.start..r * cols + col_range.end] {
                let word = n / 64;
                if word == words.len() {
                    words.push(0);
                }
                words[word] |= u64::from(v) << (n % 64);
                n += 1;
            }
        }
        Self(words)
    }

    /// The packed words.
    pub fn words(&self) -> &[u64] {
        &self.0
    }
}

/// Candidate predecessor fragments for one goal region.
///
/// Every pattern has shape `region.padded()`: the region's cells plus the
/// one-cell ring their transition depends on.
#[derive(Clone, Debug)]
pub struct CandidateSet {
    region: Shape,
    patterns: Vec<Grid>,
    rim: Option<Rim>,
    index: IndexMap<RimKey, Vec<usize>>,
}

impl CandidateSet {
    /// Wrap `patterns` for a node at `position`, building the rim index
    /// that position calls for.
    pub fn new(region: Shape, patterns: Vec<Grid>, position: Position) -> Self {
        debug_assert!(patterns.iter().all(|p| p.shape() == region.padded()));
        let rim = position.indexed_rim();
        let index = match rim {
            Some(rim) => build_index(&patterns, rim),
            None => IndexMap::new(),
        };
        Self {
            region,
            patterns,
            rim,
            index,
        }
    }

    /// Goal region covered.
    pub fn region(&self) -> Shape {
        self.region
    }

    /// All candidates, in insertion order.
    pub fn patterns(&self) -> &[Grid] {
        &self.patterns
    }

    /// Consume the set, keeping only the candidates.
    pub fn into_patterns(self) -> Vec<Grid> {
        self.patterns
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// `true` if no candidate survived; the goal then has no predecessor.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The rim this set is indexed by, if any.
    pub fn indexed_rim(&self) -> Option<Rim> {
        self.rim
    }

    /// Number of distinct keys in the rim index.
    pub fn distinct_rims(&self) -> usize {
        self.index.len()
    }

    /// The rim index for `rim`, borrowed when this set already carries
    /// it and built on the spot otherwise.
    pub(crate) fn index_for(&self, rim: Rim) -> Cow<'_, IndexMap<RimKey, Vec<usize>>> {
        if self.rim == Some(rim) {
            Cow::Borrowed(&self.index)
        } else {
            Cow::Owned(build_index(&self.patterns, rim))
        }
    }
}

fn build_index(patterns: &[Grid], rim: Rim) -> IndexMap<RimKey, Vec<usize>> {
    let mut index: IndexMap<RimKey, Vec<usize>> = IndexMap::new();
    for (i, p) in patterns.iter().enumerate() {
        index.entry(RimKey::of(p, rim)).or_default().push(i);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(text: &str) -> Grid {
        Grid::parse(text).unwrap()
    }

    #[test]
    fn indexed_rims_by_position() {
        assert_eq!(Position::Right.indexed_rim(), Some(Rim::Left));
        assert_eq!(Position::TopRight.indexed_rim(), Some(Rim::Left));
        assert_eq!(Position::BottomRight.indexed_rim(), Some(Rim::Left));
        assert_eq!(Position::Bottom.indexed_rim(), Some(Rim::Top));
        assert_eq!(Position::Top.indexed_rim(), None);
        assert_eq!(Position::Root.indexed_rim(), None);
    }

    #[test]
    fn left_and_right_rims_pack_alike() {
        let a = g("O.O\n.OO\n...");
        let b = g(".O.\nOO.\n..O");
        // Last two columns of `a` equal the first two of `b`.
        assert_eq!(RimKey::of(&a, Rim::Right), RimKey::of(&b, Rim::Left));
        assert_ne!(RimKey::of(&a, Rim::Left), RimKey::of(&b, Rim::Left));
    }

    #[test]
    fn top_and_bottom_rims_pack_alike() {
        let a = g("OOO\nO..\n.O.");
        let b = g("O..\n.O.\nOOO");
        assert_eq!(RimKey::of(&a, Rim::Bottom), RimKey::of(&b, Rim::Top));
    }

    #[test]
    fn long_rims_span_several_words() {
        let tall = Grid::from_fn(Shape::new(40, 3), |r, c| c == 1 && r == 39).unwrap();
        let key = RimKey::of(&tall, Rim::Left);
        assert_eq!(key.words().len(), 2);
        assert_eq!(key.words()[1], 1 << (79 - 64));
    }

    #[test]
    fn index_groups_by_rim() {
        let pats = vec![g("O..\n...\n..."), g("O.O\n...\n..."), g(".O.\n...\n...")];
        let set = CandidateSet::new(Shape::new(1, 1), pats, Position::Right);
        assert_eq!(set.indexed_rim(), Some(Rim::Left));
        assert_eq!(set.distinct_rims(), 2);
        let index = set.index_for(Rim::Left);
        let probe = |text: &str| index.get(&RimKey::of(&g(text), Rim::Right)).cloned();
        assert_eq!(probe("..O\n...\n..."), Some(vec![2]));
        assert_eq!(probe(".O.\n...\n..."), Some(vec![0, 1]));
        assert_eq!(probe(".OO\n...\n..."), None);
    }

    #[test]
    fn unindexed_position_builds_on_demand() {
        let pats = vec![g("...\n...\n..."), g("O..\n...\n...")];
        let set = CandidateSet::new(Shape::new(1, 1), pats, Position::Left);
        assert_eq!(set.indexed_rim(), None);
        assert_eq!(set.distinct_rims(), 0);
        assert_eq!(set.index_for(Rim::Left).len(), 2);
        assert!(!set.is_empty());
    }
}
