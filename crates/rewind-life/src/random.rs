//! Seeded random pattern generation.
//!
//! Uses a ChaCha8 RNG seeded from the caller's `seed`, so identical
//! `(shape, density, seed)` triples produce identical grids on every
//! platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rewind_core::{Grid, Shape};

use crate::error::LifeError;

/// Generate a grid where each cell is independently alive with
/// probability `density`.
///
/// # Errors
///
/// Returns `Err` if `density` is NaN or outside `[0, 1]`, or if `shape`
/// has a zero dimension.
pub fn random_grid(shape: Shape, density: f64, seed: u64) -> Result<Grid, LifeError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity { value: density });
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok(Grid::from_fn(shape, |_, _| rng.random_bool(density))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_core::GridError;

    #[test]
    fn same_seed_same_grid() {
        let shape = Shape::new(8, 8);
        let a = random_grid(shape, 0.5, 7).unwrap();
        let b = random_grid(shape, 0.5, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.shape(), shape);
    }

    #[test]
    fn extreme_densities() {
        let shape = Shape::new(4, 5);
        assert_eq!(random_grid(shape, 0.0, 1).unwrap().population(), 0);
        assert_eq!(random_grid(shape, 1.0, 1).unwrap().population(), 20);
    }

    #[test]
    fn invalid_density_rejected() {
        let shape = Shape::new(2, 2);
        assert!(matches!(
            random_grid(shape, 1.5, 0),
            Err(LifeError::InvalidDensity { .. })
        ));
        assert!(matches!(
            random_grid(shape, f64::NAN, 0),
            Err(LifeError::InvalidDensity { .. })
        ));
    }

    #[test]
    fn empty_shape_rejected() {
        assert!(matches!(
            random_grid(Shape::new(0, 3), 0.5, 0),
            Err(LifeError::Grid(GridError::EmptyGrid { .. }))
        ));
    }
}
