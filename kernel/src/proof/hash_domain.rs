//! Typed domain separators for canonical hashing.
//!
//! Every digest computed in the workspace selects a domain via [`HashDomain`].
//! The enum, `as_bytes()`, `ALL`, and `Display` are generated from one macro
//! invocation so they cannot diverge.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// State-space search run report.
    SearchReport => b"WAYPOINT::SEARCH_REPORT::V1\0",

    /// Search policy snapshot (strategy, variant, caps).
    SearchPolicy => b"WAYPOINT::SEARCH_POLICY::V1\0",

    /// Constraint-satisfaction run report.
    CspReport => b"WAYPOINT::CSP_REPORT::V1\0",

    /// Benchmark determinism guard.
    BenchGuard => b"WAYPOINT::BENCH_GUARD::V1\0",
}
