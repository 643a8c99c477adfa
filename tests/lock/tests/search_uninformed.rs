//! Uninformed search lock tests: breadth-first optimality by action count,
//! depth-first completeness on finite spaces, and graph-search duplicate
//! elimination.

use std::cell::RefCell;
use std::collections::HashMap;

use rstest::rstest;
use waypoint_harness::worlds::eight_puzzle::EightPuzzle;
use waypoint_harness::worlds::number_line::NumberLine;
use waypoint_kernel::problem::Problem;
use waypoint_search::{search, SearchOutcome, SearchPolicy, SearchStrategy, SearchVariant};

/// Wraps a problem and counts how often each state is expanded.
struct CountingProblem<P: Problem> {
    inner: P,
    expansions: RefCell<HashMap<P::State, u32>>,
}

impl<P: Problem> CountingProblem<P> {
    fn new(inner: P) -> Self {
        Self {
            inner,
            expansions: RefCell::new(HashMap::new()),
        }
    }

    fn max_expansions_of_one_state(&self) -> u32 {
        self.expansions.borrow().values().copied().max().unwrap_or(0)
    }

    fn distinct_expanded(&self) -> usize {
        self.expansions.borrow().len()
    }
}

impl<P: Problem> Problem for CountingProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> P::State {
        self.inner.initial_state()
    }

    fn actions(&self, state: &P::State) -> Vec<P::Action> {
        *self
            .expansions
            .borrow_mut()
            .entry(state.clone())
            .or_insert(0) += 1;
        self.inner.actions(state)
    }

    fn result(&self, state: &P::State, action: &P::Action) -> P::State {
        self.inner.result(state, action)
    }

    fn step_cost(&self, from: &P::State, action: &P::Action, to: &P::State) -> f64 {
        self.inner.step_cost(from, action, to)
    }

    fn is_goal(&self, state: &P::State) -> bool {
        self.inner.is_goal(state)
    }
}

// ---------------------------------------------------------------------------
// Breadth-first returns a shortest plan
// ---------------------------------------------------------------------------

#[rstest]
#[case(1, 10, 4)]
#[case(3, 17, 4)]
#[case(7, 7, 0)]
fn bfs_number_line_is_shortest(#[case] start: i64, #[case] goal: i64, #[case] moves: usize) {
    lock_tests::init_test_logging();
    let line = NumberLine::new(start, goal, 0, 40).unwrap();
    let result = search(&line, &SearchPolicy::default(), None).unwrap();
    let solution = result.solution().expect("goal is reachable");
    assert_eq!(solution.actions.len(), moves);
    assert!((solution.path_cost - moves as f64).abs() < f64::EPSILON);
}

#[rstest]
#[case(EightPuzzle::two_moves(), 2)]
#[case(EightPuzzle::eight_moves(), 8)]
#[case(EightPuzzle::fourteen_moves(), 14)]
fn bfs_eight_puzzle_is_shortest(#[case] puzzle: EightPuzzle, #[case] moves: usize) {
    let result = search(&puzzle, &SearchPolicy::default(), None).unwrap();
    let solution = result.solution().unwrap();
    assert_eq!(solution.actions.len(), moves);
    assert_eq!(puzzle.replay(&solution.actions).map(|b| puzzle.is_goal(&b)), Some(true));
}

// ---------------------------------------------------------------------------
// Depth-first is complete on finite spaces
// ---------------------------------------------------------------------------

#[rstest]
#[case(1, 10)]
#[case(20, 0)]
#[case(0, 19)]
fn dfs_graph_search_finds_a_goal(#[case] start: i64, #[case] goal: i64) {
    let line = NumberLine::new(start, goal, 0, 20).unwrap();
    let policy = SearchPolicy::new(SearchStrategy::DepthFirst);
    let result = search(&line, &policy, None).unwrap();
    let solution = result.solution().expect("finite space, DFS is complete");

    let mut state = line.initial_state();
    for action in &solution.actions {
        state = line.result(&state, action);
    }
    assert!(line.is_goal(&state));

    let bfs = search(&line, &SearchPolicy::default(), None).unwrap();
    assert!(solution.actions.len() >= bfs.solution().unwrap().actions.len());
}

#[test]
fn dfs_exhausts_a_space_without_the_goal() {
    // Same moves, no goal anywhere.
    struct Capped(NumberLine);

    impl Problem for Capped {
        type State = i64;
        type Action = waypoint_harness::worlds::number_line::Step;

        fn initial_state(&self) -> i64 {
            self.0.initial_state()
        }

        fn actions(&self, state: &i64) -> Vec<Self::Action> {
            self.0.actions(state)
        }

        fn result(&self, state: &i64, action: &Self::Action) -> i64 {
            self.0.result(state, action)
        }

        fn is_goal(&self, _state: &i64) -> bool {
            false
        }
    }

    let capped = Capped(NumberLine::new(0, 0, 0, 20).unwrap());
    let policy = SearchPolicy::new(SearchStrategy::DepthFirst);
    let result = search(&capped, &policy, None).unwrap();
    assert_eq!(result.outcome, SearchOutcome::Failure);
    assert_eq!(result.metrics.explored_size, 21);
    assert_eq!(result.metrics.nodes_expanded, 21);
}

// ---------------------------------------------------------------------------
// Graph search never expands a state twice
// ---------------------------------------------------------------------------

#[rstest]
fn graph_search_expands_each_state_once(
    #[values(SearchStrategy::BreadthFirst, SearchStrategy::DepthFirst, SearchStrategy::UniformCost)]
    strategy: SearchStrategy,
) {
    let problem = CountingProblem::new(NumberLine::new(1, 37, 0, 40).unwrap());
    let policy = SearchPolicy::new(strategy).with_variant(SearchVariant::Graph);
    let result = search(&problem, &policy, None).unwrap();

    assert!(result.is_solution());
    assert_eq!(problem.max_expansions_of_one_state(), 1);
    assert_eq!(problem.distinct_expanded() as u64, result.metrics.nodes_expanded);
    assert_eq!(result.metrics.explored_size, result.metrics.nodes_expanded);
}

#[test]
fn tree_search_revisits_states() {
    let problem = CountingProblem::new(NumberLine::new(1, 10, 0, 40).unwrap());
    let policy = SearchPolicy::default().with_variant(SearchVariant::Tree);
    let result = search(&problem, &policy, None).unwrap();

    assert_eq!(result.solution().unwrap().actions.len(), 4);
    assert!(problem.max_expansions_of_one_state() > 1);
    assert_eq!(result.metrics.explored_size, 0);
}

#[test]
fn duplicates_are_counted() {
    let line = NumberLine::new(1, 10, 0, 40).unwrap();
    let result = search(&line, &SearchPolicy::default(), None).unwrap();
    let metrics = &result.metrics;
    assert!(metrics.duplicates_suppressed > 0);
    assert!(metrics.max_frontier_size >= 1);
    assert!(metrics.nodes_generated >= metrics.nodes_expanded);
    assert_eq!(metrics.iterations, 1);
}
