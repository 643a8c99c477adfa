//! Shared workloads for the waypoint benchmark suites.
//!
//! Each workload is checked for determinism once before timing: two runs must
//! produce the same metrics digest under [`HashDomain::BenchGuard`], so a
//! regression that makes a run nondeterministic fails loudly instead of
//! skewing the numbers.

use waypoint_csp::{solve_backtracking, BacktrackingOptions, CspResult, MinConflictsSolver};
use waypoint_harness::worlds::eight_puzzle::{Board, EightPuzzle, Slide};
use waypoint_harness::worlds::n_queens::n_queens;
use waypoint_kernel::problem::HeuristicFunction;
use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;
use waypoint_search::{search, SearchPolicy, SearchResult};

/// Run `policy` on `puzzle`.
///
/// # Panics
///
/// Panics if the policy is rejected. Benchmark setup failures are fatal.
#[must_use]
pub fn run_eight_puzzle(
    puzzle: &EightPuzzle,
    policy: &SearchPolicy,
    heuristic: Option<&dyn HeuristicFunction<Board>>,
) -> SearchResult<Slide> {
    search(puzzle, policy, heuristic).expect("benchmark policy is valid")
}

/// Backtracking on `n` queens.
///
/// # Panics
///
/// Panics if the board cannot be modelled.
#[must_use]
pub fn run_queens_backtracking(n: usize, options: &BacktrackingOptions) -> CspResult<usize, usize> {
    let csp = n_queens(n).expect("queens model");
    solve_backtracking(&csp, options).expect("queens domains are set")
}

/// Min-conflicts on `n` queens.
///
/// # Panics
///
/// Panics if the board cannot be modelled.
#[must_use]
pub fn run_queens_min_conflicts(n: usize, solver: &MinConflictsSolver) -> CspResult<usize, usize> {
    let csp = n_queens(n).expect("queens model");
    solver.solve(&csp).expect("queens domains are set")
}

/// Digest of a metrics document under the benchmark guard domain.
///
/// # Panics
///
/// Panics if the document cannot be canonicalized.
#[must_use]
pub fn guard_digest(metrics: &serde_json::Value) -> ContentHash {
    let bytes = canonical_json_bytes(metrics).expect("metrics canonicalize");
    canonical_hash(HashDomain::BenchGuard, &bytes)
}

/// Run `workload` twice and require identical metrics.
///
/// # Panics
///
/// Panics with `label` if the two runs disagree.
pub fn assert_deterministic(label: &str, workload: impl Fn() -> serde_json::Value) {
    let first = guard_digest(&workload());
    let second = guard_digest(&workload());
    assert_eq!(first, second, "{label}: workload is not deterministic");
}
