//! Fixture worlds used by lock tests and benchmarks.

pub mod eight_puzzle;
pub mod map_coloring;
pub mod n_queens;
pub mod number_line;
pub mod romania;
