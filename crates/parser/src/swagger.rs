//! Swagger 2.0 / OpenAPI 3.x extraction
//!
//! Counts one endpoint per HTTP operation declared under `paths`. Keys of a
//! path item that are not HTTP methods (`parameters`, `summary`, `servers`,
//! `$ref`, `x-*` extensions) are ignored.

use crate::path::normalize_brace_path;
use crate::Extraction;
use api_endpoint_counter_common::{Aggregate, DocumentKind};
use serde_json::Value;

/// Operation keys recognized on a path item
pub const HTTP_METHODS: [&str; 8] = [
    "get", "post", "put", "patch", "delete", "options", "head", "trace",
];

/// Whether a path item key names an HTTP operation (case-insensitive)
pub fn is_http_method(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    HTTP_METHODS.contains(&lower.as_str())
}

/// Count the operations of a Swagger/OpenAPI document
///
/// Path items that are not mappings are counted in [`Extraction::skipped`].
pub fn extract(document: &Value) -> Extraction {
    let mut aggregate = Aggregate::new();
    let mut skipped = 0;

    if let Some(paths) = document.get("paths").and_then(Value::as_object) {
        for (raw_path, path_item) in paths {
            let Some(operations) = path_item.as_object() else {
                skipped += 1;
                continue;
            };

            let path = normalize_brace_path(raw_path);
            for method in operations.keys().filter(|key| is_http_method(key)) {
                aggregate.add_record(&method.to_uppercase(), &path);
            }
        }
    }

    Extraction {
        kind: DocumentKind::Swagger,
        aggregate,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recognized_methods_are_case_insensitive() {
        assert!(is_http_method("get"));
        assert!(is_http_method("DELETE"));
        assert!(is_http_method("Trace"));
        assert!(!is_http_method("parameters"));
        assert!(!is_http_method("x-get"));
    }

    #[test]
    fn test_non_operation_keys_are_ignored() {
        let document = json!({
            "swagger": "2.0",
            "paths": {
                "/pets": {
                    "summary": "Pets",
                    "parameters": [],
                    "x-internal": true,
                    "get": {},
                    "POST": {}
                }
            }
        });

        let extraction = extract(&document);
        assert_eq!(extraction.aggregate.total, 2);
        assert_eq!(extraction.aggregate.methods.get("GET"), Some(1));
        assert_eq!(extraction.aggregate.methods.get("POST"), Some(1));
        assert_eq!(extraction.skipped, 0);
    }

    #[test]
    fn test_missing_paths_yields_empty_aggregate() {
        let extraction = extract(&json!({ "openapi": "3.1.0" }));
        assert!(extraction.aggregate.is_empty());
        assert_eq!(extraction.kind, DocumentKind::Swagger);
    }

    #[test]
    fn test_non_mapping_path_items_are_skipped() {
        let document = json!({
            "openapi": "3.0.0",
            "paths": { "/broken": null, "/ok": { "get": {} } }
        });

        let extraction = extract(&document);
        assert_eq!(extraction.aggregate.total, 1);
        assert_eq!(extraction.skipped, 1);
    }
}
