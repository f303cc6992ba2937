//! Dedup key and stable record id computation.

use crate::types::{RecordId, RecordKey};

/// U+001F (unit separator). Keeps ("AB", "C") and ("A", "BC") from producing
/// the same key; a C0 control character does not occur in engine log text.
pub const KEY_SEPARATOR: char = '\u{1f}';

/// Compute the dedup identity for a (name, detail) pair.
///
/// Two events collide if and only if both strings are byte-equal. The caller
/// is expected to have coerced empty detail already.
pub fn compute(name: &str, detail: &str) -> RecordKey {
  let mut key = String::with_capacity(name.len() + detail.len() + 1);
  key.push_str(name);
  key.push(KEY_SEPARATOR);
  key.push_str(detail);
  RecordKey(key)
}

/// Derive a compact stable id from a key.
///
/// Uses blake3 for a fast, deterministic hash; first 16 bytes (32 hex chars)
/// for a compact but collision-resistant ID.
pub fn record_id(key: &RecordKey) -> RecordId {
  let hash = blake3::hash(key.0.as_bytes());
  let hex = hash.to_hex();
  RecordId(hex[..32].to_string())
}
