//! Leaf predecessor catalog.
//!
//! Every 3x3 binary neighbourhood is stepped once with the dead-edge rule
//! and bucketed by (centre outcome, boundary class). A pattern belongs to
//! the bucket for boundary `b` only if, for each side in `b`, its three
//! cells on that side are dead: those cells lie outside the goal, where
//! nothing is ever alive.
//!
//! The table depends on no input, so [`LeafCatalog::shared`] memoises it
//! for the whole process. It is read-only after construction.

use std::sync::OnceLock;

use rewind_core::{CellState, Grid};
use rewind_life::step_dead;

use crate::boundary::Boundary;

/// Every 3x3 predecessor pattern, bucketed by centre outcome and
/// boundary class.
#[derive(Clone, Debug)]
pub struct LeafCatalog {
    /// `2 * Boundary::COUNT` buckets, indexed by [`bucket_index`].
    buckets: Vec<Vec<Grid>>,
}

static SHARED: OnceLock<LeafCatalog> = OnceLock::new();

fn bucket_index(status: CellState, boundary: Boundary) -> usize {
    usize::from(status.bit()) * Boundary::COUNT + usize::from(boundary.bits())
}

/// Whether every cell on each side named in `boundary` is dead.
fn outward_rims_dead(pattern: &Grid, boundary: Boundary) -> bool {
    let sides = [
        (Boundary::TOP, [(0, 0), (0, 1), (0, 2)]),
        (Boundary::BOTTOM, [(2, 0), (2, 1), (2, 2)]),
        (Boundary::LEFT, [(0, 0), (1, 0), (2, 0)]),
        (Boundary::RIGHT, [(0, 2), (1, 2), (2, 2)]),
    ];
    sides.iter().all(|(side, cells)| {
        !boundary.contains(*side) || cells.iter().all(|&(r, c)| !pattern.is_alive(r, c))
    })
}

impl LeafCatalog {
    /// Number of distinct 3x3 neighbourhoods.
    pub const PATTERNS: usize = 512;

    /// Classify all 512 neighbourhoods.
    ///
    /// Patterns are enumerated in ascending order of their row-major bit
    /// encoding (top-left cell most significant), and each bucket keeps
    /// that order.
    pub fn build() -> Self {
        let mut buckets = vec![Vec::new(); 2 * Boundary::COUNT];
        let blank = Grid::single(CellState::Dead).pad();
        for bits in 0..Self::PATTERNS {
            let pattern = blank.map_cells(|r, c| (bits >> (8 - (r * 3 + c))) & 1 == 1);
            let outcome = CellState::from(step_dead(&pattern).is_alive(1, 1));
            for boundary in Boundary::all() {
                if outward_rims_dead(&pattern, boundary) {
                    buckets[bucket_index(outcome, boundary)].push(pattern.clone());
                }
            }
        }
        Self { buckets }
    }

    /// The process-wide catalog, built on first use.
    pub fn shared() -> &'static LeafCatalog {
        SHARED.get_or_init(Self::build)
    }

    /// All 3x3 neighbourhoods whose centre steps to `status` and whose
    /// sides named by `boundary` are dead.
    pub fn lookup(&self, status: CellState, boundary: Boundary) -> &[Grid] {
        &self.buckets[bucket_index(status, boundary)]
    }
}
