//! Configuration documents: search policies and solver settings parse from
//! JSON, reject unknown fields, and round-trip through their serde form.

use rstest::rstest;
use waypoint_csp::{BacktrackingOptions, Inference, MinConflictsSolver, ValueOrder, VariableOrder};
use waypoint_harness::worlds::eight_puzzle::{EightPuzzle, ManhattanDistance};
use waypoint_search::{search, SearchError, SearchPolicy, SearchStrategy, SearchVariant};

#[rstest]
#[case(r#"{"strategy": "breadth_first"}"#, SearchStrategy::BreadthFirst)]
#[case(r#"{"strategy": "depth_first"}"#, SearchStrategy::DepthFirst)]
#[case(r#"{"strategy": "uniform_cost"}"#, SearchStrategy::UniformCost)]
#[case(r#"{"strategy": "greedy"}"#, SearchStrategy::Greedy)]
#[case(r#"{"strategy": "a_star"}"#, SearchStrategy::AStar)]
fn strategy_names_parse(#[case] json: &str, #[case] strategy: SearchStrategy) {
    let policy = SearchPolicy::from_json(json).unwrap();
    assert_eq!(policy, SearchPolicy::new(strategy));
    assert_eq!(policy.variant, SearchVariant::Graph);
}

#[test]
fn full_policy_document_parses() {
    let policy = SearchPolicy::from_json(
        r#"{"strategy": "a_star", "variant": "tree", "max_depth": 20, "max_expansions": 5000}"#,
    )
    .unwrap();
    assert_eq!(
        policy,
        SearchPolicy::new(SearchStrategy::AStar)
            .with_variant(SearchVariant::Tree)
            .with_max_depth(20)
            .with_max_expansions(5000)
    );

    let result = search(&EightPuzzle::eight_moves(), &policy, Some(&ManhattanDistance)).unwrap();
    assert_eq!(result.solution().unwrap().depth, 8);
}

#[rstest]
#[case(r#"{"strategy": "a_star", "weight": 2}"#)]
#[case(r#"{"strategy": "best_first"}"#)]
#[case(r#"{"variant": "graph"}"#)]
#[case("not json")]
fn malformed_policies_are_parse_errors(#[case] json: &str) {
    let err = SearchPolicy::from_json(json).unwrap_err();
    assert!(matches!(err, SearchError::PolicyParse(_)), "{err}");
}

#[test]
fn zero_expansion_budget_is_rejected() {
    let err = SearchPolicy::from_json(r#"{"strategy": "uniform_cost", "max_expansions": 0}"#)
        .unwrap_err();
    assert!(matches!(err, SearchError::InvalidConfiguration { .. }), "{err}");

    let policy = SearchPolicy::default().with_max_expansions(0);
    let err = search(&EightPuzzle::two_moves(), &policy, None).unwrap_err();
    assert!(matches!(err, SearchError::InvalidConfiguration { .. }), "{err}");
}

#[test]
fn policy_json_value_reparses_to_the_same_policy() {
    let policy = SearchPolicy::new(SearchStrategy::Greedy)
        .with_variant(SearchVariant::Tree)
        .with_max_depth(3);
    let json = policy.to_json_value().to_string();
    assert_eq!(SearchPolicy::from_json(&json).unwrap(), policy);
}

#[test]
fn backtracking_options_parse_with_defaults() {
    let options: BacktrackingOptions =
        serde_json::from_str(r#"{"variable_order": "mrv_then_degree", "inference": "arc_consistency"}"#)
            .unwrap();
    assert_eq!(
        options,
        BacktrackingOptions::new()
            .with_variable_order(VariableOrder::MrvThenDegree)
            .with_inference(Inference::ArcConsistency)
    );
    assert_eq!(options.value_order, ValueOrder::Domain);

    let reparsed: BacktrackingOptions =
        serde_json::from_value(options.to_json_value()).unwrap();
    assert_eq!(reparsed, options);

    assert!(serde_json::from_str::<BacktrackingOptions>(r#"{"restarts": 3}"#).is_err());
}

#[test]
fn min_conflicts_settings_parse_with_defaults() {
    let solver: MinConflictsSolver = serde_json::from_str(r#"{"max_steps": 250}"#).unwrap();
    assert_eq!(solver, MinConflictsSolver::new(250));
    assert_eq!(solver.seed, MinConflictsSolver::default().seed);
    assert!(serde_json::from_str::<MinConflictsSolver>(r#"{"temperature": 1.0}"#).is_err());
}
