//! Postman collection extraction
//!
//! Walks the `item` tree of a Postman collection (v2.0 or v2.1) and counts
//! every request that declares a URL.
//!
//! ## Usage
//! ```rust
//! use api_endpoint_counter_parser::postman;
//! use serde_json::json;
//!
//! let collection = json!({
//!     "item": [
//!         { "name": "Orders", "item": [
//!             { "request": { "method": "GET", "url": { "path": ["api", "{{version}}", "orders"] } } }
//!         ] }
//!     ]
//! });
//!
//! let extraction = postman::extract(&collection);
//! assert_eq!(extraction.aggregate.endpoints.get("/api/:version/orders"), Some(1));
//! ```

mod flatten;
mod request;

pub use flatten::{flatten_items, FlattenItems};
pub use request::{request_to_record, UNKNOWN_METHOD};

use crate::Extraction;
use api_endpoint_counter_common::{Aggregate, DocumentKind};
use serde_json::Value;

/// Count the requests of a Postman collection or folder
///
/// Requests without a usable URL are left out of the aggregate and counted
/// in [`Extraction::skipped`].
pub fn extract(document: &Value) -> Extraction {
    let items = document
        .get("item")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut aggregate = Aggregate::new();
    let mut skipped = 0;

    for node in flatten_items(items) {
        match node.get("request").and_then(request_to_record) {
            Some(record) => aggregate.add(&record),
            None => skipped += 1,
        }
    }

    Extraction {
        kind: DocumentKind::Postman,
        aggregate,
        skipped,
    }
}
