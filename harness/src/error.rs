//! Fixture construction errors.

/// A fixture world was asked for an impossible instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Tiles are not a permutation of the blank plus `1..=8`.
    #[error("invalid board: {detail}")]
    InvalidBoard { detail: String },

    /// The board is in the parity class that cannot reach the goal.
    #[error("board cannot reach the goal:\n{detail}")]
    Unsolvable { detail: String },

    /// A route endpoint is not on the map.
    #[error("unknown city {city}")]
    UnknownCity { city: String },

    /// A number-line endpoint lies outside the bounds.
    #[error("{value} is outside [{low}, {high}]")]
    OutOfBounds { value: i64, low: i64, high: i64 },

    /// A coloring asked for more colors than the palette holds.
    #[error("{requested} colors requested, palette has {available}")]
    TooManyColors { requested: usize, available: usize },

    /// The constraint model rejected the instance.
    #[error(transparent)]
    Model(#[from] waypoint_csp::CspError),
}
