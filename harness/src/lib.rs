//! Waypoint Harness: fixture worlds for the search and CSP engines.
//!
//! Worlds supply domain data only: a [`waypoint_kernel::problem::Problem`]
//! implementation with its heuristics, or a [`waypoint_csp::Csp`] builder.
//! The engines own every algorithmic decision.
//!
//! | World | Kind | Used for |
//! |-------|------|----------|
//! | [`worlds::eight_puzzle`] | search | A* vs BFS, Manhattan / misplaced-tile heuristics |
//! | [`worlds::romania`] | search | weighted routes, UCS vs A* vs greedy |
//! | [`worlds::number_line`] | search | BFS shortest, DFS completeness, duplicates |
//! | [`worlds::map_coloring`] | CSP | satisfiable / unsatisfiable colorings |
//! | [`worlds::n_queens`] | CSP | ordering and inference comparisons |

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod worlds;

pub use error::WorldError;
