//! Waypoint Search: one deterministic expand-loop for every state-space
//! strategy.
//!
//! Breadth-first, depth-first, uniform-cost, greedy best-first and A* are all
//! "tree or graph search + frontier discipline + evaluation function".
//! Iterative deepening repeats depth-limited depth-first runs.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (contracts)         (frontier, nodes)    (fixture worlds)
//! ```
//!
//! # Key types
//!
//! - [`search::Search`]: the run state machine (`Running → Succeeded | Failed | CutOff`)
//! - [`frontier::Frontier`]: FIFO, LIFO or priority ordering with FIFO tie-breaks
//! - [`explored::ExploredSet`]: graph-search deduplication
//! - [`evaluation::Evaluation`]: `g`, `h`, or `g + h`
//! - [`policy::SearchPolicy`]: strategy, variant and caps (serde-enabled)
//! - [`metrics::SearchMetrics`]: per-run counters
//! - [`report::SearchReport`]: canonical JSON summary with a content digest

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod evaluation;
pub mod explored;
pub mod frontier;
pub mod iterative;
pub mod metrics;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;

pub use error::SearchError;
pub use iterative::{iterative_deepening, IterativeDeepening};
pub use policy::{SearchPolicy, SearchStrategy, SearchVariant};
pub use search::{search, search_with, SearchOutcome, SearchResult, SearchStatus, Solution};
