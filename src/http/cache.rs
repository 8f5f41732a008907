//! Conditional request support.
//!
//! `ETag` generation and `If-None-Match` evaluation for the static file
//! fallback. This is the extent of the cache-related behavior: no
//! Cache-Control policy is attached to responses.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Compute a quoted `ETag` for a file's content.
pub fn etag_for(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Check whether a client's `If-None-Match` header matches the `ETag`.
///
/// Handles the single-value, comma-separated-list, and `*` forms.
pub fn if_none_match_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .any(|candidate| candidate.trim() == etag || candidate.trim() == "*")
    })
}
