//! Predecessor counts for named goals.

use rewind_core::{CellState, Grid, Shape};
use rewind_life::step_dead;
use rewind_search::{find_predecessors, SearchConfig, Searcher};
use rewind_test_utils::{blinker, block, checkerboard, glider, single_cell};

fn count(goal: &Grid) -> usize {
    let preds = Searcher::new(SearchConfig::unbounded())
        .unwrap()
        .search(goal)
        .unwrap()
        .predecessors;
    for p in &preds {
        assert_eq!(&step_dead(p), goal, "not a predecessor:\n{p}");
    }
    preds.len()
}

fn parse(text: &str) -> Grid {
    Grid::parse(text).unwrap()
}

#[test]
fn single_cells() {
    assert_eq!(count(&single_cell(CellState::Alive)), 0);
    let preds = find_predecessors(&single_cell(CellState::Dead)).unwrap();
    assert_eq!(preds.len(), 2);
    assert!(preds.contains(&single_cell(CellState::Dead)));
    assert!(preds.contains(&single_cell(CellState::Alive)));
}

#[test]
fn small_dead_goals() {
    assert_eq!(count(&Grid::dead(Shape::new(1, 5)).unwrap()), 24);
    assert_eq!(count(&Grid::dead(Shape::new(2, 2)).unwrap()), 11);
    assert_eq!(count(&Grid::dead(Shape::new(3, 3)).unwrap()), 51);
    assert_eq!(count(&Grid::dead(Shape::new(4, 4)).unwrap()), 860);
}

#[test]
fn still_lifes_and_oscillators() {
    assert_eq!(count(&block()), 5);
    assert_eq!(count(&parse(".OO.\nO..O\n.OO.")), 20);
    assert_eq!(count(&blinker()), 483);
    assert_eq!(count(&parse(".\nO\n.")), 1);
}

#[test]
fn glider_has_a_unique_predecessor() {
    let preds = find_predecessors(&glider()).unwrap();
    assert_eq!(preds.len(), 1);
    assert_eq!(step_dead(&preds[0]), glider());
}

#[test]
fn dense_goals() {
    assert_eq!(count(&parse("OOO\nOOO")), 4);
    assert_eq!(count(&parse("OOO\nOOO\nOOO")), 0);
}

#[test]
fn checkerboards() {
    for phase in [false, true] {
        assert_eq!(count(&checkerboard(Shape::new(2, 2), phase)), 0);
        assert_eq!(count(&checkerboard(Shape::new(4, 4), phase)), 0);
    }
    assert_eq!(count(&checkerboard(Shape::new(3, 3), true)), 0);
    assert_eq!(count(&checkerboard(Shape::new(3, 3), false)), 6);
}

#[test]
fn thin_live_goals_are_unreachable() {
    assert_eq!(count(&parse("OOO")), 0);
    assert_eq!(count(&parse("O\nO\nO\nO")), 0);
}
