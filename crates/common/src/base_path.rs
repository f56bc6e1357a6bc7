//! Base path classification
//!
//! Groups normalized paths by their first meaningful routing segment.

use regex::Regex;
use std::sync::LazyLock;

/// Base path reported for a path with no segments
pub const ROOT_BASE_PATH: &str = "(root)";

static VERSION_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v\d+$").unwrap_or_else(|_| panic!("Invalid version segment regex"))
});

/// Derive the base path grouping key from a normalized path
///
/// A leading version segment (`v1`, `V2`, ...) is skipped unless it is the
/// only segment.
///
/// # Examples
/// ```
/// use api_endpoint_counter_common::classify_base_path;
///
/// assert_eq!(classify_base_path("/v2/users/:id"), "users");
/// assert_eq!(classify_base_path("/v2"), "v2");
/// assert_eq!(classify_base_path("/api/orders"), "api");
/// assert_eq!(classify_base_path("/"), "(root)");
/// ```
pub fn classify_base_path(path: &str) -> String {
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    match segments.next() {
        Some(first) if VERSION_SEGMENT.is_match(first) => {
            segments.next().unwrap_or(first).to_string()
        }
        Some(first) => first.to_string(),
        None => ROOT_BASE_PATH.to_string(),
    }
}
