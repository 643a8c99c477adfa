//! Proof module: canonical JSON bytes and domain-separated hashing.
//!
//! Run reports route through here so that two runs of the same search can be
//! compared by digest alone.

pub mod canon;
pub mod hash;
pub mod hash_domain;
