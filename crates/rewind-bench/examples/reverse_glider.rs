//! End-to-end reversal example.
//!
//! Demonstrates: evolve a glider forward on a torus → search the dead-edge
//! predecessors of a goal → apply post-filters → print in Life 1.06.

use rewind_core::{to_life106, Grid};
use rewind_life::{run, step_dead, EdgeBehavior};
use rewind_search::{Filter, SearchConfig, Searcher};

fn main() {
    println!("=== Rewind Predecessor Example ===\n");

    // --- Forward: a glider on a 5x5 torus ---
    let start = Grid::parse(".O...\n..O..\nOOO..\n.....\n.....").unwrap();
    let later = run(&start, 4, EdgeBehavior::Wrap);
    println!("Glider after 4 generations on a torus:\n{later}\n");

    // --- Backward: predecessors of the block, dead edges ---
    let goal = Grid::parse("....\n.OO.\n.OO.\n....").unwrap();
    let searcher = Searcher::new(SearchConfig::default()).unwrap();
    let report = searcher.search(&goal).unwrap();
    println!(
        "Goal:\n{goal}\n\n{} predecessors in {} us ({} merges, peak set {})",
        report.predecessors.len(),
        report.metrics.total_us,
        report.metrics.merges,
        report.metrics.peak_set_size,
    );
    assert!(report.predecessors.iter().all(|p| step_dead(p) == goal));

    for filter in Filter::ALL {
        let kept = filter.apply(&report.predecessors);
        println!("\n{filter}: {} grid(s)", kept.len());
        if let Some(first) = kept.first() {
            println!("{first}\n");
            println!("{}", to_life106(&first.crop_to_live()));
        }
    }
}
