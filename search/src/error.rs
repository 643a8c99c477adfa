//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal found, frontier exhausted, caps reached) are ordinary
//! [`crate::search::SearchOutcome`] values.

use waypoint_kernel::proof::canon::CanonError;

use crate::frontier::FrontierDiscipline;
use crate::policy::SearchStrategy;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before any node is expanded. No metrics are
/// produced because no search steps were taken.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An informed strategy was selected without a heuristic.
    #[error("strategy {strategy} requires a heuristic function")]
    MissingHeuristic { strategy: SearchStrategy },

    /// A priority frontier was configured without an evaluation function.
    #[error("{discipline} frontier requires an evaluation function")]
    MissingEvaluation { discipline: FrontierDiscipline },

    /// The configuration is inconsistent.
    #[error("invalid search configuration: {detail}")]
    InvalidConfiguration { detail: String },

    /// A policy document could not be parsed.
    #[error("failed to parse search policy: {0}")]
    PolicyParse(#[from] serde_json::Error),

    /// A report could not be canonicalized.
    #[error(transparent)]
    Canon(#[from] CanonError),
}
