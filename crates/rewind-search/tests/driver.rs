//! Searcher configuration, ceilings, cancellation and determinism.

use std::sync::Arc;

use rewind_core::{Grid, Shape};
use rewind_life::EdgeBehavior;
use rewind_search::{CancelToken, SearchConfig, SearchError, Searcher};
use rewind_test_utils::{blinker, glider};

#[test]
fn results_are_deterministic() {
    let s = Searcher::new(SearchConfig::unbounded()).unwrap();
    let first = s.search(&blinker()).unwrap().predecessors;
    let second = s.search(&blinker()).unwrap().predecessors;
    assert_eq!(first, second);
}

#[test]
fn parallel_matches_serial_order() {
    let serial = Searcher::new(SearchConfig::unbounded()).unwrap();
    let parallel = Searcher::new(SearchConfig {
        parallel: true,
        parallel_min_cells: 1,
        ..SearchConfig::unbounded()
    })
    .unwrap();
    let goal = Grid::parse("....\n.OO.\n.O..\n....").unwrap();
    let a = serial.search(&goal).unwrap();
    let b = parallel.search(&goal).unwrap();
    assert_eq!(a.predecessors, b.predecessors);
    assert_eq!(a.metrics.leaves, b.metrics.leaves);
    assert_eq!(a.metrics.merges, b.metrics.merges);
    assert_eq!(a.metrics.candidates_generated, b.metrics.candidates_generated);
}

#[test]
fn searcher_is_shareable_across_threads() {
    let s = Arc::new(Searcher::new(SearchConfig::default()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let s = Arc::clone(&s);
            std::thread::spawn(move || s.search(&glider()).unwrap().predecessors.len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 1);
    }
}

#[test]
fn cancelled_search_fails() {
    let token = CancelToken::new();
    let s = Searcher::new(SearchConfig {
        cancel: Some(token.clone()),
        ..SearchConfig::default()
    })
    .unwrap();
    assert!(s.search(&glider()).is_ok());
    token.cancel();
    assert_eq!(s.search(&glider()).unwrap_err(), SearchError::Cancelled);
}

#[test]
fn candidate_ceiling_trips() {
    let s = Searcher::new(SearchConfig {
        max_candidates: Some(500),
        ..SearchConfig::unbounded()
    })
    .unwrap();
    let goal = Grid::dead(Shape::new(4, 4)).unwrap();
    match s.search(&goal) {
        Err(SearchError::ResourceExhausted { limit, region }) => {
            assert_eq!(limit, 500);
            assert!(region.area() > 1);
        }
        other => panic!("expected ResourceExhausted, got {other:?}"),
    }
}

#[test]
fn ceiling_below_leaf_size_trips_at_leaf() {
    let s = Searcher::new(SearchConfig {
        max_candidates: Some(100),
        ..SearchConfig::unbounded()
    })
    .unwrap();
    // The interior dead cell of a 3x3 goal has 372 leaf candidates.
    let goal = Grid::dead(Shape::new(3, 3)).unwrap();
    assert_eq!(
        s.search(&goal).unwrap_err(),
        SearchError::ResourceExhausted {
            limit: 100,
            region: Shape::new(1, 1)
        }
    );
}

#[test]
fn wrap_edges_are_rejected() {
    let err = Searcher::new(SearchConfig {
        edge: EdgeBehavior::Wrap,
        ..SearchConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        SearchError::UnsupportedGeometry {
            edge: EdgeBehavior::Wrap
        }
    );
}

#[test]
fn default_dimension_ceiling_is_sixteen() {
    let s = Searcher::new(SearchConfig::default()).unwrap();
    let goal = Grid::dead(Shape::new(17, 2)).unwrap();
    assert_eq!(
        s.search(&goal).unwrap_err(),
        SearchError::GoalTooLarge {
            shape: Shape::new(17, 2),
            max_dim: 16
        }
    );
}

#[test]
fn long_thin_goal_beyond_default_ceiling() {
    let s = Searcher::new(SearchConfig {
        max_goal_dim: None,
        ..SearchConfig::default()
    })
    .unwrap();
    let goal = Grid::parse(&"O".repeat(20)).unwrap();
    assert!(s.search(&goal).unwrap().predecessors.is_empty());
}

#[test]
fn largest_default_goal_ends_within_the_ceiling() {
    let s = Searcher::new(SearchConfig::default()).unwrap();
    let goal = Grid::dead(Shape::new(16, 16)).unwrap();
    match s.search(&goal) {
        Ok(report) => {
            assert!(report.metrics.peak_set_size <= SearchConfig::DEFAULT_MAX_CANDIDATES);
        }
        Err(SearchError::ResourceExhausted { limit, .. }) => {
            assert_eq!(limit, SearchConfig::DEFAULT_MAX_CANDIDATES);
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
}
