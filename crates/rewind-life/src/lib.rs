//! Forward evolution under Conway's Life rule (B3/S23).
//!
//! This crate is the collaborator the predecessor search depends on:
//! [`step`] computes the one-generation successor of a grid. It also
//! carries the forward-simulation conveniences used around the search,
//! multi-generation [`run`] and seeded [`random_grid`] generation.
//!
//! # Edge behavior
//!
//! - [`EdgeBehavior::Dead`]: cells outside the grid are permanently dead
//! - [`EdgeBehavior::Wrap`]: the grid is a torus

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod random;
pub mod rule;

pub use edge::EdgeBehavior;
pub use error::LifeError;
pub use random::random_grid;
pub use rule::{next_state, run, step, step_dead};
