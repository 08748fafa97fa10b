//! Benchmark workloads for the Rewind predecessor search.
//!
//! - [`reachable_goal`]: a random goal that is guaranteed to have at least
//!   one predecessor
//! - [`bench_config`]: the search configuration used by the benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rewind_core::{Grid, Shape};
use rewind_life::{random_grid, step_dead, LifeError};
use rewind_search::SearchConfig;

/// Step a seeded random grid once, so the result is reachable.
///
/// Density is that of the grid before stepping.
pub fn reachable_goal(shape: Shape, density: f64, seed: u64) -> Result<Grid, LifeError> {
    Ok(step_dead(&random_grid(shape, density, seed)?))
}

/// Search configuration for benchmarks: no ceilings, with the parallel
/// fork path switched by `parallel`.
pub fn bench_config(parallel: bool) -> SearchConfig {
    SearchConfig {
        parallel,
        ..SearchConfig::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_search::Searcher;

    #[test]
    fn reachable_goal_has_a_predecessor() {
        let goal = reachable_goal(Shape::new(3, 4), 0.4, 7).unwrap();
        let searcher = Searcher::new(bench_config(false)).unwrap();
        assert!(!searcher.search(&goal).unwrap().predecessors.is_empty());
    }

    #[test]
    fn bench_configs_validate() {
        bench_config(true).validate().unwrap();
        bench_config(false).validate().unwrap();
    }
}
