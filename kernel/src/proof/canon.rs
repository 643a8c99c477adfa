//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order), regardless of
//!    whether `serde_json` was built with `preserve_order`.
//! 2. No extraneous whitespace.
//! 3. Scalars (strings, numbers, booleans, null) are written by `serde_json`.
//!    Floats use its shortest round-trip formatting, which is
//!    platform-independent. `serde_json::Value` cannot hold NaN or infinity.

use serde_json::Value;

/// Error type for canonical JSON serialization.
#[derive(Debug, thiserror::Error)]
pub enum CanonError {
    /// A scalar could not be written.
    #[error("canonical JSON write failed: {0}")]
    Write(#[from] serde_json::Error),
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::Write`] if `serde_json` fails to render a scalar.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                serde_json::to_writer(&mut *buf, key)?;
                buf.push(b':');
                write_value(buf, item)?;
            }
            buf.push(b'}');
        }
        scalar => serde_json::to_writer(&mut *buf, scalar)?,
    }
    Ok(())
}
