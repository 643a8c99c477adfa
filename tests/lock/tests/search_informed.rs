//! Informed search lock tests: uniform-cost and A* optimality, A* effort
//! bounded by uniform-cost and breadth-first, greedy and inadmissible
//! heuristics trading optimality away, and eager heuristic validation.

use rstest::rstest;
use waypoint_harness::worlds::eight_puzzle::{EightPuzzle, ManhattanDistance, MisplacedTiles};
use waypoint_harness::worlds::romania::{CityTable, Route};
use waypoint_kernel::problem::{HeuristicFunction, Problem, ZeroHeuristic};
use waypoint_search::{search, SearchError, SearchPolicy, SearchStrategy};

fn assert_cost(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected path cost {expected}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Romania: weighted routes
// ---------------------------------------------------------------------------

#[test]
fn uniform_cost_finds_cheapest_route() {
    lock_tests::init_test_logging();
    let route = Route::arad_to_bucharest();
    let result = search(&route, &SearchPolicy::new(SearchStrategy::UniformCost), None).unwrap();
    let solution = result.solution().unwrap();
    assert_eq!(
        solution.actions,
        vec!["Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"]
    );
    assert_cost(solution.path_cost, 418.0);
    assert_cost(result.metrics.path_cost, 418.0);
    assert!(result.metrics.frontier_replacements > 0);
}

#[test]
fn breadth_first_ignores_cost() {
    let route = Route::arad_to_bucharest();
    let result = search(&route, &SearchPolicy::default(), None).unwrap();
    let solution = result.solution().unwrap();
    assert_eq!(solution.actions.len(), 3);
    assert_cost(solution.path_cost, 450.0);
}

#[test]
fn a_star_is_optimal_and_expands_no_more_than_uniform_cost() {
    let route = Route::arad_to_bucharest();
    let sld = CityTable::straight_line_to_bucharest();

    let ucs = search(&route, &SearchPolicy::new(SearchStrategy::UniformCost), None).unwrap();
    let astar = search(&route, &SearchPolicy::new(SearchStrategy::AStar), Some(&sld)).unwrap();

    assert_eq!(ucs.solution().unwrap().actions, astar.solution().unwrap().actions);
    assert_cost(astar.solution().unwrap().path_cost, 418.0);
    assert!(astar.metrics.nodes_expanded <= ucs.metrics.nodes_expanded);
    assert_eq!(astar.metrics.nodes_expanded, 5);
}

#[test]
fn a_star_with_zero_heuristic_matches_uniform_cost() {
    let route = Route::arad_to_bucharest();
    let ucs = search(&route, &SearchPolicy::new(SearchStrategy::UniformCost), None).unwrap();
    let zero =
        search(&route, &SearchPolicy::new(SearchStrategy::AStar), Some(&ZeroHeuristic)).unwrap();
    assert_eq!(ucs.outcome, zero.outcome);
    assert_eq!(ucs.metrics.nodes_expanded, zero.metrics.nodes_expanded);
}

#[test]
fn greedy_follows_the_heuristic_to_a_costlier_route() {
    let route = Route::arad_to_bucharest();
    let sld = CityTable::straight_line_to_bucharest();
    let result = search(&route, &SearchPolicy::new(SearchStrategy::Greedy), Some(&sld)).unwrap();
    let solution = result.solution().unwrap();
    assert_eq!(solution.actions, vec!["Sibiu", "Fagaras", "Bucharest"]);
    assert_cost(solution.path_cost, 450.0);
}

#[test]
fn inadmissible_heuristic_voids_optimality() {
    let route = Route::arad_to_bucharest();
    let inflated = CityTable::straight_line_to_bucharest().with_estimate("Pitesti", 1000.0);
    let result =
        search(&route, &SearchPolicy::new(SearchStrategy::AStar), Some(&inflated)).unwrap();
    let solution = result.solution().expect("still complete");
    assert_cost(solution.path_cost, 450.0);
}

#[test]
fn closure_heuristics_are_accepted() {
    let route = Route::arad_to_bucharest();
    let table = CityTable::straight_line_to_bucharest();
    let h = |city: &&'static str| table.estimate(city);
    let result = search(&route, &SearchPolicy::new(SearchStrategy::AStar), Some(&h)).unwrap();
    assert_cost(result.solution().unwrap().path_cost, 418.0);
}

// ---------------------------------------------------------------------------
// 8-puzzle: A* against breadth-first
// ---------------------------------------------------------------------------

#[rstest]
#[case(EightPuzzle::two_moves())]
#[case(EightPuzzle::eight_moves())]
#[case(EightPuzzle::fourteen_moves())]
fn a_star_manhattan_matches_bfs_length_with_fewer_expansions(#[case] puzzle: EightPuzzle) {
    let bfs = search(&puzzle, &SearchPolicy::default(), None).unwrap();
    let astar =
        search(&puzzle, &SearchPolicy::new(SearchStrategy::AStar), Some(&ManhattanDistance))
            .unwrap();

    let bfs_plan = &bfs.solution().unwrap().actions;
    let astar_plan = &astar.solution().unwrap().actions;
    assert_eq!(astar_plan.len(), bfs_plan.len());
    assert!(astar.metrics.nodes_expanded <= bfs.metrics.nodes_expanded);
    assert_eq!(
        puzzle.replay(astar_plan).map(|board| puzzle.is_goal(&board)),
        Some(true)
    );
}

#[test]
fn misplaced_tiles_is_also_optimal() {
    let puzzle = EightPuzzle::fourteen_moves();
    let policy = SearchPolicy::new(SearchStrategy::AStar);
    let manhattan = search(&puzzle, &policy, Some(&ManhattanDistance)).unwrap();
    let misplaced = search(&puzzle, &policy, Some(&MisplacedTiles)).unwrap();
    assert_eq!(
        manhattan.solution().unwrap().depth,
        misplaced.solution().unwrap().depth
    );
}

// ---------------------------------------------------------------------------
// Eager validation
// ---------------------------------------------------------------------------

#[rstest]
fn informed_strategy_without_heuristic_is_rejected(
    #[values(SearchStrategy::Greedy, SearchStrategy::AStar)] strategy: SearchStrategy,
) {
    let puzzle = EightPuzzle::two_moves();
    let err = search(&puzzle, &SearchPolicy::new(strategy), None).unwrap_err();
    assert!(
        matches!(err, SearchError::MissingHeuristic { strategy: s } if s == strategy),
        "{err}"
    );
}

#[rstest]
fn uninformed_strategies_ignore_a_heuristic(
    #[values(SearchStrategy::BreadthFirst, SearchStrategy::DepthFirst, SearchStrategy::UniformCost)]
    strategy: SearchStrategy,
) {
    let puzzle = EightPuzzle::two_moves();
    let with = search(&puzzle, &SearchPolicy::new(strategy), Some(&ManhattanDistance)).unwrap();
    let without = search(&puzzle, &SearchPolicy::new(strategy), None).unwrap();
    assert_eq!(with.outcome, without.outcome);
    assert_eq!(with.metrics, without.metrics);
    assert!(puzzle.is_goal(&puzzle.replay(&with.solution().unwrap().actions).unwrap()));
}
