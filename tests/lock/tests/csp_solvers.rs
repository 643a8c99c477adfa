//! CSP lock tests: backtracking soundness and completeness under every
//! ordering and inference combination, inference as a pure optimization, and
//! min-conflicts convergence.

use rstest::rstest;
use waypoint_csp::{
    solve_backtracking, solve_min_conflicts, BacktrackingOptions, CspError, CspOutcome, Inference,
    MinConflictsSolver, ValueOrder, VariableOrder,
};
use waypoint_harness::error::WorldError;
use waypoint_harness::worlds::map_coloring::{australia, coloring, ring, PALETTE};
use waypoint_harness::worlds::n_queens::{is_valid_placement, n_queens};

fn options(
    variable_order: VariableOrder,
    value_order: ValueOrder,
    inference: Inference,
) -> BacktrackingOptions {
    BacktrackingOptions {
        variable_order,
        value_order,
        inference,
    }
}

// ---------------------------------------------------------------------------
// Map coloring: satisfiable and unsatisfiable
// ---------------------------------------------------------------------------

#[rstest]
fn triangle_with_two_colors_is_unsatisfiable(
    #[values(VariableOrder::Static, VariableOrder::MinimumRemainingValues, VariableOrder::MrvThenDegree)]
    variable_order: VariableOrder,
    #[values(ValueOrder::Domain, ValueOrder::LeastConstrainingValue)] value_order: ValueOrder,
    #[values(Inference::None, Inference::ForwardChecking, Inference::ArcConsistency)]
    inference: Inference,
) {
    let csp = ring(3, 2).unwrap();
    let result =
        solve_backtracking(&csp, &options(variable_order, value_order, inference)).unwrap();
    assert_eq!(result.outcome, CspOutcome::Failure);
}

#[rstest]
fn three_cycle_with_three_colors_is_satisfiable(
    #[values(VariableOrder::Static, VariableOrder::MinimumRemainingValues, VariableOrder::MrvThenDegree)]
    variable_order: VariableOrder,
    #[values(ValueOrder::Domain, ValueOrder::LeastConstrainingValue)] value_order: ValueOrder,
    #[values(Inference::None, Inference::ForwardChecking, Inference::ArcConsistency)]
    inference: Inference,
) {
    lock_tests::init_test_logging();
    let csp = ring(3, 3).unwrap();
    let result =
        solve_backtracking(&csp, &options(variable_order, value_order, inference)).unwrap();
    let solution = result.solution().expect("3-colorable");
    assert_eq!(solution.len(), 3);
    assert!(csp.is_solution(solution));
    assert_eq!(csp.violated_constraints(solution), 0);
}

#[rstest]
#[case(3, true)]
#[case(2, false)]
fn australia_needs_three_colors(#[case] colors: usize, #[case] satisfiable: bool) {
    let csp = australia(colors).unwrap();
    for inference in [
        Inference::None,
        Inference::ForwardChecking,
        Inference::ArcConsistency,
    ] {
        let opts = BacktrackingOptions::new()
            .with_variable_order(VariableOrder::MrvThenDegree)
            .with_inference(inference);
        let result = solve_backtracking(&csp, &opts).unwrap();
        assert_eq!(result.is_solved(), satisfiable, "{inference:?}");
        if let Some(solution) = result.solution() {
            assert!(csp.is_solution(solution));
        }
    }
}

#[test]
fn odd_ring_needs_three_colors_even_ring_does_not() {
    let even = ring(6, 2).unwrap();
    let odd = ring(7, 2).unwrap();
    let opts = BacktrackingOptions::new().forward_checking(true);
    assert!(solve_backtracking(&even, &opts).unwrap().is_solved());
    assert!(!solve_backtracking(&odd, &opts).unwrap().is_solved());
}

// ---------------------------------------------------------------------------
// N-Queens
// ---------------------------------------------------------------------------

#[rstest]
#[case(4)]
#[case(6)]
#[case(8)]
fn queens_solutions_are_valid(#[case] n: usize) {
    let csp = n_queens(n).unwrap();
    let opts = BacktrackingOptions::new()
        .with_variable_order(VariableOrder::MinimumRemainingValues)
        .with_value_order(ValueOrder::LeastConstrainingValue)
        .with_inference(Inference::ForwardChecking);
    let result = solve_backtracking(&csp, &opts).unwrap();
    let rows: Vec<usize> = result.solution().unwrap().iter().map(|(_, &row)| row).collect();
    assert_eq!(rows.len(), n);
    assert!(is_valid_placement(&rows), "{rows:?}");
}

#[rstest]
#[case(2)]
#[case(3)]
fn small_boards_have_no_queens_solution(#[case] n: usize) {
    let csp = n_queens(n).unwrap();
    let result = solve_backtracking(&csp, &BacktrackingOptions::new()).unwrap();
    assert!(!result.is_solved());
}

#[test]
fn inference_prunes_without_changing_the_answer() {
    let csp = n_queens(8).unwrap();
    let plain = solve_backtracking(&csp, &BacktrackingOptions::new()).unwrap();
    let forward = solve_backtracking(
        &csp,
        &BacktrackingOptions::new().with_inference(Inference::ForwardChecking),
    )
    .unwrap();
    let arc = solve_backtracking(
        &csp,
        &BacktrackingOptions::new().with_inference(Inference::ArcConsistency),
    )
    .unwrap();

    assert_eq!(plain.solution(), forward.solution());
    assert_eq!(forward.solution(), arc.solution());
    assert!(forward.metrics.assignments <= plain.metrics.assignments);
    assert!(arc.metrics.assignments <= forward.metrics.assignments);
    assert!(arc.metrics.values_pruned > 0);
}

// ---------------------------------------------------------------------------
// Min-conflicts
// ---------------------------------------------------------------------------

#[rstest]
fn min_conflicts_converges_on_australia(#[values(0, 1, 2, 3, 42, 2024)] seed: u64) {
    let csp = australia(3).unwrap();
    let result = MinConflictsSolver::new(10_000)
        .with_seed(seed)
        .solve(&csp)
        .unwrap();
    let solution = result.solution().expect("converges within budget");
    assert!(csp.is_solution(solution));
    assert!(result.metrics.steps <= 10_000);
}

#[test]
fn min_conflicts_solves_three_cycle() {
    let csp = ring(3, 3).unwrap();
    let result = solve_min_conflicts(&csp, 1_000).unwrap();
    assert!(csp.is_solution(result.solution().unwrap()));
}

#[test]
fn min_conflicts_failure_is_budget_exhaustion() {
    let csp = ring(3, 2).unwrap();
    let result = solve_min_conflicts(&csp, 200).unwrap();
    assert_eq!(result.outcome, CspOutcome::Failure);
    assert_eq!(result.metrics.steps, 200);
}

#[test]
fn min_conflicts_is_reproducible_per_seed() {
    let csp = n_queens(8).unwrap();
    let solver = MinConflictsSolver::new(2_000).with_seed(7);
    let first = solver.solve(&csp).unwrap();
    let second = solver.solve(&csp).unwrap();
    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.metrics, second.metrics);
}

#[test]
fn min_conflicts_unbounded_budget_solves_eight_queens() {
    let csp = n_queens(8).unwrap();
    let result = solve_min_conflicts(&csp, u64::MAX).unwrap();
    let solution = result.solution().expect("unbounded run only stops on a solution");
    assert!(csp.is_solution(solution));
}

#[rstest]
fn min_conflicts_unbounded_budget_colors_australia(#[values(0, 5, 99, 31_337)] seed: u64) {
    let csp = australia(3).unwrap();
    let result = MinConflictsSolver::new(u64::MAX)
        .with_seed(seed)
        .solve(&csp)
        .unwrap();
    let solution = result.solution().expect("unbounded run only stops on a solution");
    assert!(csp.is_solution(solution));
}

// ---------------------------------------------------------------------------
// Eager model validation
// ---------------------------------------------------------------------------

#[test]
fn undeclared_border_is_rejected_before_solving() {
    let err = coloring(&["WA", "NT"], &[("WA", "SA")], 3).unwrap_err();
    assert_eq!(
        err,
        WorldError::Model(CspError::UndeclaredVariable {
            variable: "\"SA\"".into()
        })
    );
}

#[test]
fn coloring_beyond_palette_is_rejected() {
    let err = coloring(&["WA", "NT"], &[("WA", "NT")], PALETTE.len() + 1).unwrap_err();
    assert!(matches!(err, WorldError::TooManyColors { .. }), "{err}");
}
