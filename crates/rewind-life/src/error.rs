//! Error types for forward evolution and pattern generation.

use std::error::Error;
use std::fmt;

use rewind_core::GridError;

/// Errors from pattern generation.
#[derive(Clone, Debug, PartialEq)]
pub enum LifeError {
    /// Live-cell density outside `[0, 1]` or NaN.
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
    /// The requested grid could not be constructed.
    Grid(GridError),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity { value } => {
                write!(f, "density must be within [0, 1], got {value}")
            }
            Self::Grid(e) => write!(f, "grid error: {e}"),
        }
    }
}

impl Error for LifeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::InvalidDensity { .. } => None,
        }
    }
}

impl From<GridError> for LifeError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
