//! Error types for the predecessor search.
//!
//! A goal with no predecessors is a successful search with an empty
//! result; every variant here aborts the call instead.

use std::error::Error;
use std::fmt;

use rewind_core::{GridError, Shape};
use rewind_life::EdgeBehavior;

/// Errors that abort a predecessor search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The goal (or a requested partition) has a zero dimension.
    InvalidShape {
        /// The rejected shape.
        shape: Shape,
    },
    /// The configured edge behavior has no predecessor search.
    UnsupportedGeometry {
        /// The rejected edge behavior.
        edge: EdgeBehavior,
    },
    /// A candidate set grew past the configured ceiling.
    ResourceExhausted {
        /// The configured `max_candidates`.
        limit: usize,
        /// The goal region whose candidate set overflowed.
        region: Shape,
    },
    /// The goal exceeds the configured dimension ceiling.
    GoalTooLarge {
        /// Shape of the rejected goal.
        shape: Shape,
        /// The configured `max_goal_dim`.
        max_dim: usize,
    },
    /// The search's [`CancelToken`](crate::CancelToken) was triggered.
    Cancelled,
    /// A [`SearchConfig`](crate::SearchConfig) field is out of range.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
    /// A grid primitive failed.
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape { shape } => {
                write!(f, "invalid goal shape {shape}: both dimensions must be >= 1")
            }
            Self::UnsupportedGeometry { edge } => {
                write!(f, "predecessor search does not support {edge:?} edges")
            }
            Self::ResourceExhausted { limit, region } => {
                write!(
                    f,
                    "candidate set for {region} region exceeded the limit of {limit}"
                )
            }
            Self::GoalTooLarge { shape, max_dim } => {
                write!(f, "goal {shape} exceeds the maximum dimension {max_dim}")
            }
            Self::Cancelled => write!(f, "search cancelled"),
            Self::InvalidConfig { reason } => write!(f, "invalid search config: {reason}"),
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
