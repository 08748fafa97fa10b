//! Predecessor search for Conway's Life.
//!
//! Given a goal grid, [`find_predecessors`] returns every grid of the same
//! shape whose one-step successor under the dead-edge Life rule equals the
//! goal. An empty result means the goal is unreachable in one step; it is
//! not an error.
//!
//! # Algorithm
//!
//! 1. [`PartitionNode::build`] splits the goal rectangle recursively into
//!    quad / vertical / horizontal nodes down to single cells, keeping
//!    power-of-two regions together.
//! 2. At each leaf the [`LeafCatalog`] supplies every 3x3 neighbourhood
//!    whose centre evolves to the goal cell and whose outward rims are dead
//!    where the cell touches the goal edge ([`Boundary`]).
//! 3. Going back up, the [`Merger`] joins sibling [`CandidateSet`]s on
//!    their shared two-cell rim via a hash index, so only overlap-consistent
//!    combinations survive.
//!
//! Candidates carry a one-cell ring around their region; the root's ring is
//! dead by construction and is cropped off before results are returned.
//!
//! # Example
//!
//! ```
//! use rewind_core::Grid;
//! use rewind_life::step_dead;
//! use rewind_search::find_predecessors;
//!
//! let goal = Grid::parse("OO\nOO").unwrap();
//! let preds = find_predecessors(&goal).unwrap();
//! assert_eq!(preds.len(), 5);
//! assert!(preds.iter().all(|p| step_dead(p) == goal));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod candidate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod merge;
pub mod metrics;
pub mod partition;
pub mod search;

pub use boundary::Boundary;
pub use candidate::{CandidateSet, Position, Rim, RimKey};
pub use catalog::LeafCatalog;
pub use config::{CancelToken, SearchConfig};
pub use error::SearchError;
pub use filter::{fewest_live_cells, most_live_cells, smallest_bounding_box, Filter};
pub use merge::{MergeStats, Merger};
pub use metrics::SearchMetrics;
pub use partition::{NodeKind, PartitionNode};
pub use search::{find_predecessors, SearchReport, Searcher};
