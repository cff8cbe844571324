//! Query-to-glob normalization.
//!
//! The history query matches with SQLite's `GLOB` operator, so a free-text
//! query has to become a glob before it can match anything. A plain
//! substring is wrapped as `*substring*`; a query that already carries glob
//! metacharacters is passed through verbatim.

/// Glob metacharacters recognized by SQLite's `GLOB` operator.
const GLOB_CHARS: &[char] = &['*', '?', '[', ']'];

/// Normalize a raw query into a glob pattern.
///
/// Trims surrounding whitespace. If the trimmed query contains none of
/// `* ? [ ]`, it is wrapped as `*query*`; otherwise it is returned
/// unchanged. Idempotent on already-normalized input.
///
/// A literal `*` or `?` typed by the user is always treated as a wildcard;
/// there is no escaping mechanism.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.contains(GLOB_CHARS) {
        trimmed.to_string()
    } else {
        format!("*{trimmed}*")
    }
}
