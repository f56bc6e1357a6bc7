//! Endpoint extraction from API description documents
//!
//! This crate turns a Postman collection or a Swagger/OpenAPI document into
//! an [`Aggregate`] of endpoint counts.
//!
//! ## Extraction Strategy
//!
//! The document family is detected once, from its top-level keys:
//! - `swagger` or `openapi` → every HTTP operation under `paths`
//! - `item` → every request in the (possibly nested) item tree
//!
//! Both extractors normalize paths so that template variables read `:name`
//! and feed the same accumulator, which groups paths by base path:
//! - `/v1/users/:id` → `users` (leading version segment skipped)
//! - `/api/orders` → `api`
//! - `/` → `(root)`

mod document;
mod path;
pub mod postman;
pub mod swagger;

pub use api_endpoint_counter_common::{classify_base_path, Aggregate, DocumentKind};
pub use document::{detect_kind, parse_tree, ApiDocument};
pub use path::{normalize_brace_path, normalize_segments, normalize_url, url_path};

use api_endpoint_counter_common::Result;
use std::path::Path;

/// Outcome of running one extractor over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Family of the document that was walked
    pub kind: DocumentKind,

    /// Counted endpoints
    pub aggregate: Aggregate,

    /// Entries left out because they carried no usable endpoint
    pub skipped: usize,
}

/// Count the endpoints of a JSON or YAML file
///
/// # Arguments
/// * `path` - Postman collection or Swagger/OpenAPI document
/// * `kind` - Force a document family instead of detecting it
pub fn count_endpoints<P: AsRef<Path>>(path: P, kind: Option<DocumentKind>) -> Result<Extraction> {
    let document = ApiDocument::from_file(path, kind)?;
    Ok(document.extract())
}
