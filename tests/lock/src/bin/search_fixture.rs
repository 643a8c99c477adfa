//! Runs the fixture searches and prints deterministic `key=value` lines for
//! cross-process verification.
//!
//! Usage: `search_fixture`

use lock_tests::fixtures::{
    australia_report, eight_puzzle_report, romania_greedy_report, romania_report,
};
use waypoint_search::SearchPolicy;

fn main() {
    env_logger::init();

    let puzzle = eight_puzzle_report();
    println!(
        "eight_puzzle_digest={}",
        puzzle.digest().expect("digest eight puzzle report")
    );
    println!("eight_puzzle_plan_length={}", puzzle.actions.len());
    println!(
        "eight_puzzle_nodes_expanded={}",
        puzzle.metrics.nodes_expanded
    );

    let route = romania_report();
    println!(
        "romania_ucs_digest={}",
        route.digest().expect("digest romania report")
    );
    println!("romania_ucs_path_cost={}", route.path_cost.unwrap_or(-1.0));

    let greedy = romania_greedy_report();
    println!(
        "romania_greedy_digest={}",
        greedy.digest().expect("digest greedy report")
    );

    let coloring = australia_report();
    println!(
        "australia_digest={}",
        coloring.digest().expect("digest australia report")
    );

    println!(
        "default_policy_digest={}",
        SearchPolicy::default()
            .digest()
            .expect("digest default policy")
    );
}
