//! Converts a Postman `request` into an endpoint record

use crate::path::{normalize_segments, normalize_url};
use api_endpoint_counter_common::EndpointRecord;
use serde_json::Value;
use std::borrow::Cow;

/// Method used when a request does not declare one
pub const UNKNOWN_METHOD: &str = "UNKNOWN";

/// Build a record from a `request` value
///
/// Returns `None` when the request has no usable URL.
pub fn request_to_record(request: &Value) -> Option<EndpointRecord> {
    match request {
        // Shorthand form: the request is just its URL
        Value::String(url) if !url.is_empty() => {
            Some(EndpointRecord::new("GET", normalize_url(url)))
        }
        Value::Object(fields) => {
            let url = fields.get("url").filter(|url| is_present(url))?;
            let method = fields
                .get("method")
                .and_then(Value::as_str)
                .map_or_else(|| UNKNOWN_METHOD.to_string(), str::to_uppercase);

            Some(EndpointRecord::new(method, url_to_path(url)))
        }
        _ => None,
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        _ => true,
    }
}

/// Normalize a Postman `url` value
///
/// A structured URL prefers its `path` array and falls back to `raw`.
fn url_to_path(url: &Value) -> String {
    match url {
        Value::Object(fields) => match fields.get("path") {
            Some(Value::Array(segments)) => {
                normalize_segments(segments.iter().filter_map(segment_text))
            }
            Some(Value::String(path)) => normalize_url(path),
            _ => normalize_url(fields.get("raw").and_then(Value::as_str).unwrap_or("")),
        },
        Value::String(raw) => normalize_url(raw),
        Value::Array(segments) => normalize_segments(segments.iter().filter_map(segment_text)),
        _ => normalize_url(""),
    }
}

/// Text of one path segment
///
/// Postman v2.0 allows `{"type": "string", "value": "users"}` segments.
fn segment_text(segment: &Value) -> Option<Cow<'_, str>> {
    match segment {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Object(fields) => fields
            .get("value")
            .and_then(Value::as_str)
            .map(Cow::Borrowed),
        _ => None,
    }
}
