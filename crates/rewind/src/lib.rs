//! Rewind: predecessor search for Conway's Game of Life.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Rewind sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use rewind::prelude::*;
//!
//! // A glider phase has exactly one predecessor inside its 3x3 box.
//! let goal = Grid::parse(".O.\n..O\nOOO").unwrap();
//! let preds = find_predecessors(&goal).unwrap();
//! assert_eq!(preds.len(), 1);
//! assert_eq!(step_dead(&preds[0]), goal);
//!
//! // Checkerboards are Gardens of Eden.
//! let eden = Grid::parse("O.\n.O").unwrap();
//! assert!(find_predecessors(&eden).unwrap().is_empty());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `rewind-core` | `Grid`, `Shape`, grid primitives, Life 1.06 codec |
//! | [`life`] | `rewind-life` | Transition function, edge behavior, random patterns |
//! | [`search`] | `rewind-search` | Catalog, partition tree, merge engine, search driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid value type and primitives (`rewind-core`).
pub use rewind_core as grid;

/// Forward evolution (`rewind-life`).
///
/// [`life::step`] is the transition function the search inverts.
pub use rewind_life as life;

/// Predecessor search (`rewind-search`).
///
/// [`search::Searcher`] for configured, reusable searches;
/// [`search::find_predecessors`] for one-off calls.
pub use rewind_search as search;

/// Common imports for typical Rewind usage.
///
/// ```rust
/// use rewind::prelude::*;
/// ```
pub mod prelude {
    // Grids
    pub use rewind_core::{from_life106, to_life106, CellState, Grid, GridError, Shape};

    // Forward evolution
    pub use rewind_life::{random_grid, run, step, step_dead, EdgeBehavior, LifeError};

    // Search
    pub use rewind_search::{
        find_predecessors, CancelToken, Filter, SearchConfig, SearchError, SearchMetrics,
        SearchReport, Searcher,
    };
}
