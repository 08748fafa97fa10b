//! Core types for the Rewind predecessor search.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental value type shared by the whole workspace, the binary
//! [`Grid`], together with the small set of grid primitives the search
//! and its collaborators build on: padding, sub-rectangle extraction,
//! border slices, overlap concatenation and bounding-box cropping.
//!
//! The [`life106`] module reads and writes the Life 1.06 coordinate-list
//! text format.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod life106;

pub use error::GridError;
pub use grid::{BoundingBox, CellState, Grid, Shape};
pub use life106::{from_life106, to_life106, LIFE106_MAX_EXTENT};
