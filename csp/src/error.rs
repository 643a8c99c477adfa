//! Typed CSP model errors.
//!
//! Raised while building a [`crate::model::Csp`] or when a solver validates
//! it before making any assignment. Exhausting the search is not an error; it
//! is [`crate::CspOutcome::Failure`].

/// Invalid CSP model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CspError {
    /// A constraint or domain names a variable that was never declared.
    #[error("variable {variable} is not declared")]
    UndeclaredVariable { variable: String },

    /// A declared variable has no domain.
    #[error("variable {variable} has no domain")]
    MissingDomain { variable: String },

    /// The same variable was declared twice.
    #[error("variable {variable} is declared more than once")]
    DuplicateVariable { variable: String },

    /// A constraint has no variables.
    #[error("constraint {constraint} has an empty scope")]
    EmptyScope { constraint: String },
}
