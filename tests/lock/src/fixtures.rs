//! Single source of truth for the runs printed by `search_fixture` and
//! checked by the in-process determinism tests. Any change here changes
//! both, so the cross-process comparison cannot drift.

use waypoint_csp::{solve_backtracking, BacktrackingOptions, CspReport, Inference, VariableOrder};
use waypoint_harness::worlds::eight_puzzle::{EightPuzzle, ManhattanDistance};
use waypoint_harness::worlds::map_coloring::australia;
use waypoint_harness::worlds::romania::{CityTable, Route};
use waypoint_kernel::problem::Problem;
use waypoint_search::report::SearchReport;
use waypoint_search::{search, SearchPolicy, SearchStrategy};

/// A* (Manhattan) on the fourteen-move 8-puzzle.
///
/// # Panics
///
/// Panics if the search rejects its configuration (a harness bug).
#[must_use]
pub fn eight_puzzle_report() -> SearchReport {
    let puzzle = EightPuzzle::fourteen_moves();
    let policy = SearchPolicy::new(SearchStrategy::AStar);
    let result = search(&puzzle, &policy, Some(&ManhattanDistance)).expect("valid policy");
    SearchReport::new(puzzle.problem_id(), &policy, &result)
}

/// Uniform-cost Arad → Bucharest.
///
/// # Panics
///
/// Panics if the search rejects its configuration (a harness bug).
#[must_use]
pub fn romania_report() -> SearchReport {
    let route = Route::arad_to_bucharest();
    let policy = SearchPolicy::new(SearchStrategy::UniformCost);
    let result = search(&route, &policy, None).expect("valid policy");
    SearchReport::new(route.problem_id(), &policy, &result)
}

/// Greedy Arad → Bucharest with straight-line distances.
///
/// # Panics
///
/// Panics if the search rejects its configuration (a harness bug).
#[must_use]
pub fn romania_greedy_report() -> SearchReport {
    let route = Route::arad_to_bucharest();
    let policy = SearchPolicy::new(SearchStrategy::Greedy);
    let h = CityTable::straight_line_to_bucharest();
    let result = search(&route, &policy, Some(&h)).expect("valid policy");
    SearchReport::new(route.problem_id(), &policy, &result)
}

/// MRV + degree with arc consistency on the Australia map.
///
/// # Panics
///
/// Panics if the fixture map is malformed (a harness bug).
#[must_use]
pub fn australia_report() -> CspReport {
    let csp = australia(3).expect("fixture map");
    let options = BacktrackingOptions::new()
        .with_variable_order(VariableOrder::MrvThenDegree)
        .with_inference(Inference::ArcConsistency);
    let result = solve_backtracking(&csp, &options).expect("domains set");
    CspReport::new("backtracking", options.to_json_value(), &result)
}
