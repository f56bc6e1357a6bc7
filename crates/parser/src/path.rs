//! Path normalization
//!
//! Turns the many shapes a request path can take into a canonical
//! slash-separated path where template variables read `:name`.
//!
//! - Postman variables use double braces (`{{id}}`) and are matched at the
//!   start of a segment only, so `{{host}}:{{port}}` becomes `:host`.
//! - Swagger/OpenAPI variables use single braces (`{id}`) and are rewritten
//!   wherever they appear.

use regex::Regex;
use std::sync::LazyLock;

static DOUBLE_BRACE_VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\{\s*(\w+)\s*\}\}").unwrap_or_else(|_| panic!("Invalid double-brace regex"))
});

static SINGLE_BRACE_VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(\w+)\}").unwrap_or_else(|_| panic!("Invalid single-brace regex"))
});

/// Extract the path component of a URL
///
/// Accepts absolute URLs (`https://host/path?q#f`), scheme-relative URLs
/// (`//host/path`) and bare paths (`{{baseUrl}}/users`). Query string,
/// fragment and `;params` on the last segment are dropped.
///
/// # Examples
/// ```
/// use api_endpoint_counter_parser::url_path;
///
/// assert_eq!(url_path("https://x.test/v2/items/42?page=1"), "/v2/items/42");
/// assert_eq!(url_path("{{baseUrl}}/users"), "{{baseUrl}}/users");
/// assert_eq!(url_path("https://x.test"), "");
/// assert_eq!(url_path("https://x.test/items;jsessionid=1"), "/items");
/// ```
pub fn url_path(raw: &str) -> &str {
    let end = raw.find(|c: char| c == '?' || c == '#').unwrap_or(raw.len());
    let mut rest = &raw[..end];

    if let Some((scheme, after)) = rest.split_once(':') {
        if is_scheme(scheme) {
            rest = after;
        }
    }

    if let Some(after_slashes) = rest.strip_prefix("//") {
        rest = after_slashes
            .find('/')
            .map_or("", |authority_end| &after_slashes[authority_end..]);
    }

    let last_segment = rest.rfind('/').unwrap_or(0);
    match rest[last_segment..].find(';') {
        Some(params) => &rest[..last_segment + params],
        None => rest,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Normalize a raw URL string into a path
///
/// # Examples
/// ```
/// use api_endpoint_counter_parser::normalize_url;
///
/// assert_eq!(normalize_url("https://x.test/v2/items/42"), "/v2/items/42");
/// assert_eq!(normalize_url("{{baseUrl}}//orders/{{ id }}/"), "/:baseUrl/orders/:id");
/// assert_eq!(normalize_url(""), "/");
/// ```
pub fn normalize_url(raw: &str) -> String {
    normalize_segments(url_path(raw).split('/').filter(|s| !s.is_empty()))
}

/// Normalize a list of path segments
///
/// Each segment loses any embedded query string or fragment and is split on
/// inner slashes; a piece starting with a `{{name}}` variable becomes
/// `:name`. Empty pieces are dropped.
///
/// # Examples
/// ```
/// use api_endpoint_counter_parser::normalize_segments;
///
/// assert_eq!(normalize_segments(["api", "{{version}}", "orders"]), "/api/:version/orders");
/// assert_eq!(normalize_segments(["a//b/"]), "/a/b");
/// assert_eq!(normalize_segments(Vec::<String>::new()), "/");
/// ```
pub fn normalize_segments<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts = Vec::new();
    for segment in segments {
        let segment = segment.as_ref();
        let end = segment
            .find(|c: char| c == '?' || c == '#')
            .unwrap_or(segment.len());

        for piece in segment[..end].split('/').filter(|piece| !piece.is_empty()) {
            parts.push(match DOUBLE_BRACE_VARIABLE.captures(piece) {
                Some(caps) => format!(":{}", &caps[1]),
                None => piece.to_string(),
            });
        }
    }

    format!("/{}", parts.join("/"))
}

/// Normalize a Swagger/OpenAPI path key
///
/// Trailing slashes are removed, every `{name}` becomes `:name`, and the
/// result always starts with `/`.
///
/// # Examples
/// ```
/// use api_endpoint_counter_parser::normalize_brace_path;
///
/// assert_eq!(normalize_brace_path("/v1/users/{id}/"), "/v1/users/:id");
/// assert_eq!(normalize_brace_path("pets/{petId}.json"), "/pets/:petId.json");
/// assert_eq!(normalize_brace_path("/"), "/");
/// ```
pub fn normalize_brace_path(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    let rewritten = SINGLE_BRACE_VARIABLE.replace_all(trimmed, ":${1}");

    if rewritten.starts_with('/') {
        rewritten.into_owned()
    } else {
        format!("/{}", rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_path_strips_scheme_and_authority() {
        assert_eq!(url_path("http://localhost:8080/api/users"), "/api/users");
        assert_eq!(url_path("//cdn.test/assets/app.js"), "/assets/app.js");
        assert_eq!(url_path("https://x.test/a#frag"), "/a");
    }

    #[test]
    fn test_url_path_drops_params_of_last_segment() {
        assert_eq!(url_path("https://x.test/items;jsessionid=1"), "/items");
        assert_eq!(url_path("https://x.test/a;x/b;y?q=1"), "/a;x/b");
        assert_eq!(url_path("/orders;v=2"), "/orders");
        assert_eq!(normalize_url("https://x.test/v1/items;jsessionid=1"), "/v1/items");
    }

    #[test]
    fn test_url_path_keeps_relative_paths() {
        assert_eq!(url_path("/users/:id"), "/users/:id");
        assert_eq!(url_path("{{host}}:{{port}}/api"), "{{host}}:{{port}}/api");
    }

    #[test]
    fn test_double_brace_variable_with_whitespace() {
        assert_eq!(normalize_segments(["{{ userId }}"]), "/:userId");
    }

    #[test]
    fn test_double_brace_match_is_anchored_at_segment_start() {
        assert_eq!(normalize_segments(["{{host}}:{{port}}"]), "/:host");
        assert_eq!(normalize_segments(["{{id}}.json"]), "/:id");
        assert_eq!(normalize_segments(["user-{{id}}"]), "/user-{{id}}");
    }

    #[test]
    fn test_single_braces_untouched_by_segment_normalizer() {
        assert_eq!(normalize_segments(["users", "{id}"]), "/users/{id}");
    }

    #[test]
    fn test_embedded_query_and_fragment_are_stripped() {
        assert_eq!(
            normalize_segments(["search?q=1", "results#top", "done/"]),
            "/search/results/done"
        );
    }

    #[test]
    fn test_segments_emptied_by_cleaning_are_dropped() {
        assert_eq!(normalize_segments(["", "users", "?x=1", "/"]), "/users");
    }

    #[test]
    fn test_inner_slashes_in_segments_are_collapsed() {
        let once = normalize_segments(["a//b", "{{id}}/c"]);
        assert_eq!(once, "/a/b/:id/c");
        assert_eq!(normalize_url(&once), once);
        assert!(!normalize_segments(["//", "x//", "//y"]).contains("//"));
    }

    #[test]
    fn test_url_normalization_collapses_slashes() {
        assert_eq!(normalize_url("https://x.test//a///b/"), "/a/b");
        assert_eq!(normalize_url("https://x.test"), "/");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = [
            "https://x.test/v2/items/42",
            "{{baseUrl}}/orders/{{orderId}}/lines?expand=true",
            "/already/:normalized",
            "",
            "https://x.test/",
        ];

        for input in inputs {
            let once = normalize_url(input);
            assert_eq!(normalize_url(&once), once, "not idempotent for {input}");
        }

        let once = normalize_brace_path("/v1/users/{id}/");
        assert_eq!(normalize_brace_path(&once), once);
    }

    #[test]
    fn test_brace_path_replaces_every_variable() {
        let path = normalize_brace_path("/orgs/{org}/repos/{repo}/issues/{number}");
        assert_eq!(path, "/orgs/:org/repos/:repo/issues/:number");
        assert!(!path.contains('{'));
    }

    #[test]
    fn test_brace_path_shape() {
        for raw in ["", "/", "//", "users/", "/users/{id}//", "{tenant}/items"] {
            let path = normalize_brace_path(raw);
            assert!(path.starts_with('/'), "{raw} -> {path}");
            assert!(path == "/" || !path.ends_with('/'), "{raw} -> {path}");
        }
        assert_eq!(normalize_brace_path("{tenant}/items"), "/:tenant/items");
    }
}
