//! The search driver.
//!
//! [`Searcher`] walks the partition tree of the goal's shape: leaves take
//! their candidates from the [`LeafCatalog`], inner nodes join their
//! children's sets with a [`Merger`]. Sibling subtrees run on the rayon
//! pool when the region is large enough; every merge itself is serial.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use indexmap::IndexMap;
use rewind_core::{CellState, Grid, Shape};
use tracing::{debug, info, trace, warn};

use crate::boundary::Boundary;
use crate::candidate::{CandidateSet, Position};
use crate::catalog::LeafCatalog;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::merge::Merger;
use crate::metrics::{MetricsRecorder, SearchMetrics};
use crate::partition::{NodeKind, PartitionNode};

/// Most partition trees a [`Searcher`] keeps; the oldest shape is
/// evicted first.
const TREE_CACHE_CAPACITY: usize = 64;

// ── SearchReport ───────────────────────────────────────────────────

/// Result of one [`Searcher::search`] call.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Every predecessor of the goal, in traversal order. Empty when the
    /// goal cannot be reached in one step.
    pub predecessors: Vec<Grid>,
    /// Counters collected during the search.
    pub metrics: SearchMetrics,
}

// ── Searcher ───────────────────────────────────────────────────────

/// Reusable predecessor search with a validated configuration.
///
/// Partition trees are cached per goal shape, so searching many goals of
/// one shape builds the tree once. The cache holds the 64 most recently
/// built shapes. A `Searcher` is `Sync` and can serve
/// concurrent callers.
#[derive(Debug)]
pub struct Searcher {
    config: SearchConfig,
    catalog: &'static LeafCatalog,
    trees: Mutex<IndexMap<Shape, Arc<PartitionNode>>>,
}

/// Per-call state threaded through the tree walk.
struct Walk<'a> {
    goal: &'a Grid,
    recorder: &'a MetricsRecorder,
    /// Set once any subtree fails; siblings still running stop early.
    halted: AtomicBool,
}

impl Searcher {
    /// Create a searcher.
    ///
    /// # Errors
    ///
    /// Whatever [`SearchConfig::validate`] rejects.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            config,
            catalog: LeafCatalog::shared(),
            trees: Mutex::new(IndexMap::new()),
        })
    }

    /// The configuration this searcher was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The partition tree for `shape`, built on first request.
    pub fn partition(&self, shape: Shape) -> Result<Arc<PartitionNode>, SearchError> {
        let mut trees = self.trees.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(tree) = trees.get(&shape) {
            return Ok(Arc::clone(tree));
        }
        let tree = Arc::new(PartitionNode::build(shape)?);
        if trees.len() >= TREE_CACHE_CAPACITY {
            trees.shift_remove_index(0);
        }
        trees.insert(shape, Arc::clone(&tree));
        Ok(tree)
    }

    /// Find every predecessor of `goal`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::GoalTooLarge`] if a dimension exceeds `max_goal_dim`
    /// - [`SearchError::ResourceExhausted`] if a candidate set outgrows
    ///   `max_candidates`
    /// - [`SearchError::Cancelled`] if the cancel token fires
    pub fn search(&self, goal: &Grid) -> Result<SearchReport, SearchError> {
        let shape = goal.shape();
        if let Some(max_dim) = self.config.max_goal_dim {
            if shape.rows > max_dim || shape.cols > max_dim {
                return Err(SearchError::GoalTooLarge { shape, max_dim });
            }
        }
        let tree = self.partition(shape)?;
        let started = Instant::now();
        info!(%shape, population = goal.population(), "predecessor search started");

        let recorder = MetricsRecorder::default();
        let walk = Walk {
            goal,
            recorder: &recorder,
            halted: AtomicBool::new(false),
        };
        let root = match self.solve(&walk, &tree, 0, 0, Position::Root) {
            Ok(root) => root,
            Err(err) => {
                if let SearchError::ResourceExhausted { limit, region } = &err {
                    warn!(%shape, limit, %region, "candidate ceiling reached");
                }
                return Err(err);
            }
        };

        let predecessors = root
            .patterns()
            .iter()
            .map(|p| p.sub_grid(1, 1, shape))
            .collect::<Result<Vec<_>, _>>()?;
        let total_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        let metrics = recorder.snapshot(total_us);
        info!(
            %shape,
            predecessors = predecessors.len(),
            elapsed_us = total_us,
            "predecessor search finished"
        );
        Ok(SearchReport {
            predecessors,
            metrics,
        })
    }

    fn check_cancel(&self, walk: &Walk<'_>) -> Result<(), SearchError> {
        if self.config.is_cancelled() || walk.halted.load(Ordering::Relaxed) {
            return Err(SearchError::Cancelled);
        }
        Ok(())
    }

    /// Run `a` and `b`, forking onto the pool for regions of at least
    /// `parallel_min_cells` goal cells.
    fn both<A, B, RA, RB>(&self, region: Shape, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        if self.config.parallel && region.area() >= self.config.parallel_min_cells {
            rayon::join(a, b)
        } else {
            (a(), b())
        }
    }

    fn solve(
        &self,
        walk: &Walk<'_>,
        node: &PartitionNode,
        row: usize,
        col: usize,
        position: Position,
    ) -> Result<CandidateSet, SearchError> {
        let result = self.solve_node(walk, node, row, col, position);
        if result.is_err() {
            walk.halted.store(true, Ordering::Relaxed);
        }
        result
    }

    fn solve_node(
        &self,
        walk: &Walk<'_>,
        node: &PartitionNode,
        row: usize,
        col: usize,
        position: Position,
    ) -> Result<CandidateSet, SearchError> {
        self.check_cancel(walk)?;
        let region = node.shape();
        let mut merger = Merger::new(self.config.max_candidates);

        let (label, set) = match node.kind() {
            NodeKind::Leaf => return self.leaf(walk, row, col, position),
            NodeKind::Horizontal { left, right } => {
                let (l, r) = self.both(
                    region,
                    || self.solve(walk, left, row, col, Position::Left),
                    || self.solve(walk, right, row, col + left.shape().cols, Position::Right),
                );
                let (l, r) = first_failure(l, r)?;
                self.check_cancel(walk)?;
                ("horizontal", merger.horizontal(&l, &r, position)?)
            }
            NodeKind::Vertical { top, bottom } => {
                let (t, b) = self.both(
                    region,
                    || self.solve(walk, top, row, col, Position::Top),
                    || self.solve(walk, bottom, row + top.shape().rows, col, Position::Bottom),
                );
                let (t, b) = first_failure(t, b)?;
                self.check_cancel(walk)?;
                ("vertical", merger.vertical(&t, &b, position)?)
            }
            NodeKind::Quad {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            } => {
                let Shape { rows: dr, cols: dc } = top_left.shape();
                let ((tl, tr), (bl, br)) = self.both(
                    region,
                    || {
                        self.both(
                            region,
                            || self.solve(walk, top_left, row, col, Position::TopLeft),
                            || self.solve(walk, top_right, row, col + dc, Position::TopRight),
                        )
                    },
                    || {
                        self.both(
                            region,
                            || self.solve(walk, bottom_left, row + dr, col, Position::BottomLeft),
                            || {
                                self.solve(
                                    walk,
                                    bottom_right,
                                    row + dr,
                                    col + dc,
                                    Position::BottomRight,
                                )
                            },
                        )
                    },
                );
                let ((tl, tr), (bl, br)) =
                    first_failure(first_failure(tl, tr), first_failure(bl, br))?;
                self.check_cancel(walk)?;
                ("quad", merger.quad(&tl, &tr, &bl, &br, position)?)
            }
        };

        let stats = merger.stats();
        walk.recorder.record_merge(stats, set.len());
        debug!(
            kind = label,
            %region,
            row,
            col,
            produced = set.len(),
            dead_ends = stats.dead_ends,
            "merged"
        );
        Ok(set)
    }

    fn leaf(
        &self,
        walk: &Walk<'_>,
        row: usize,
        col: usize,
        position: Position,
    ) -> Result<CandidateSet, SearchError> {
        let status = CellState::from(walk.goal.is_alive(row, col));
        let boundary = Boundary::of_cell(row, col, walk.goal.shape());
        let patterns = self.catalog.lookup(status, boundary);
        if let Some(limit) = self.config.max_candidates {
            if patterns.len() > limit {
                return Err(SearchError::ResourceExhausted {
                    limit,
                    region: Shape::new(1, 1),
                });
            }
        }
        walk.recorder.record_leaf(patterns.len());
        trace!(row, col, %boundary, candidates = patterns.len(), "leaf");
        Ok(CandidateSet::new(Shape::new(1, 1), patterns.to_vec(), position))
    }
}

/// Pair two sibling results. A sibling stopped by [`SearchError::Cancelled`]
/// yields to the other's error, which is what halted it.
fn first_failure<A, B>(
    a: Result<A, SearchError>,
    b: Result<B, SearchError>,
) -> Result<(A, B), SearchError> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(SearchError::Cancelled), Err(err)) | (Err(err), _) | (_, Err(err)) => Err(err),
    }
}

/// Every predecessor of `goal` under the default [`SearchConfig`].
///
/// # Errors
///
/// As for [`Searcher::search`].
pub fn find_predecessors(goal: &Grid) -> Result<Vec<Grid>, SearchError> {
    let searcher = Searcher::new(SearchConfig::default())?;
    Ok(searcher.search(goal)?.predecessors)
}
