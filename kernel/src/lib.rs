//! Waypoint Kernel: the contracts every search and constraint domain plugs into.
//!
//! # API Surface
//!
//! - [`problem::Problem`] -- initial state, transition model, step cost, goal test
//! - [`problem::HeuristicFunction`] -- remaining-cost estimate for informed search
//! - [`proof::canon::canonical_json_bytes`] -- the single JSON canonicalizer
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 digests
//!
//! # Module Dependency Direction
//!
//! `problem` and `proof` are independent of each other. Engine crates
//! (`waypoint_search`, `waypoint_csp`) depend on the kernel; the kernel depends
//! on neither.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod problem;
pub mod proof;
