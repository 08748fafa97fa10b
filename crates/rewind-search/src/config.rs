//! Search configuration and cancellation.
//!
//! [`SearchConfig`] is the input to [`Searcher::new`](crate::Searcher::new).
//! [`validate()`](SearchConfig::validate) checks the structural invariants
//! once, at construction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rewind_life::EdgeBehavior;

use crate::error::SearchError;

// ── CancelToken ────────────────────────────────────────────────────

/// Shared flag that aborts a running search.
///
/// Clones share the flag. The search polls it before every leaf lookup
/// and merge and returns [`SearchError::Cancelled`] once it is set.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, untriggered token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

// ── SearchConfig ───────────────────────────────────────────────────

/// Configuration for a [`Searcher`](crate::Searcher).
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Boundary rule the goal evolved under. Only [`EdgeBehavior::Dead`]
    /// is searchable. Default: `Dead`.
    pub edge: EdgeBehavior,
    /// Ceiling on the size of any single candidate set. `None` disables
    /// the check. Default: `Some(DEFAULT_MAX_CANDIDATES)`.
    pub max_candidates: Option<usize>,
    /// Ceiling on either goal dimension. `None` disables the check.
    /// Default: `Some(16)`.
    pub max_goal_dim: Option<usize>,
    /// Evaluate sibling subtrees on the rayon pool. Default: `true`.
    pub parallel: bool,
    /// Smallest region (in goal cells) whose children are forked onto
    /// the pool when `parallel` is set. Default: 16.
    pub parallel_min_cells: usize,
    /// Optional cancellation flag polled during the search.
    pub cancel: Option<CancelToken>,
}

impl SearchConfig {
    /// Default candidate-set ceiling (2^18 grids).
    ///
    /// A padded candidate for a 16x16 goal is 324 cells, so one set at
    /// the ceiling stays near 100 MB and a whole default search well
    /// under 1 GB.
    pub const DEFAULT_MAX_CANDIDATES: usize = 1 << 18;

    /// Default goal dimension ceiling.
    pub const DEFAULT_MAX_GOAL_DIM: usize = 16;

    /// Default fork threshold, in goal cells.
    pub const DEFAULT_PARALLEL_MIN_CELLS: usize = 16;

    /// A serial configuration with no ceilings, for tests and tooling
    /// that bound their own inputs.
    pub fn unbounded() -> Self {
        Self {
            max_candidates: None,
            max_goal_dim: None,
            parallel: false,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`SearchError::UnsupportedGeometry`] for any edge other than `Dead`
    /// - [`SearchError::InvalidConfig`] for a zero `max_candidates` or
    ///   `max_goal_dim`
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.edge != EdgeBehavior::Dead {
            return Err(SearchError::UnsupportedGeometry { edge: self.edge });
        }
        if self.max_candidates == Some(0) {
            return Err(SearchError::InvalidConfig {
                reason: "max_candidates must be at least 1".into(),
            });
        }
        if self.max_goal_dim == Some(0) {
            return Err(SearchError::InvalidConfig {
                reason: "max_goal_dim must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            edge: EdgeBehavior::Dead,
            max_candidates: Some(Self::DEFAULT_MAX_CANDIDATES),
            max_goal_dim: Some(Self::DEFAULT_MAX_GOAL_DIM),
            parallel: true,
            parallel_min_cells: Self::DEFAULT_PARALLEL_MIN_CELLS,
            cancel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(SearchConfig::unbounded().validate().is_ok());
    }

    #[test]
    fn wrap_edge_is_unsupported() {
        let config = SearchConfig {
            edge: EdgeBehavior::Wrap,
            ..SearchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(SearchError::UnsupportedGeometry {
                edge: EdgeBehavior::Wrap
            })
        );
    }

    #[test]
    fn zero_ceilings_rejected() {
        let config = SearchConfig {
            max_candidates: Some(0),
            ..SearchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig { .. })
        ));
        let config = SearchConfig {
            max_goal_dim: Some(0),
            ..SearchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let config = SearchConfig {
            cancel: Some(token.clone()),
            ..SearchConfig::default()
        };
        assert!(!config.is_cancelled());
        token.cancel();
        assert!(config.is_cancelled());
    }
}
