//! Input document loading and shape detection

use crate::{postman, swagger, Extraction};
use api_endpoint_counter_common::{CounterError, DocumentKind, Result};
use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;

/// A parsed API description together with its detected family
#[derive(Debug, Clone)]
pub struct ApiDocument {
    kind: DocumentKind,
    root: Value,
}

impl ApiDocument {
    /// Load a document from a JSON or YAML file
    ///
    /// When `kind` is `None` the family is detected from the top-level keys.
    ///
    /// # Example
    /// ```rust,ignore
    /// let document = ApiDocument::from_file("petstore.yaml", None)?;
    /// let extraction = document.extract();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, kind: Option<DocumentKind>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_content(&content, kind)
    }

    /// Parse a document from JSON or YAML text
    pub fn from_content(content: &str, kind: Option<DocumentKind>) -> Result<Self> {
        let root = parse_tree(content)?;
        Self::from_value(root, kind)
    }

    /// Wrap an already parsed tree
    pub fn from_value(root: Value, kind: Option<DocumentKind>) -> Result<Self> {
        let kind = match kind {
            Some(kind) => kind,
            None => detect_kind(&root).ok_or_else(|| {
                CounterError::UnrecognizedFormat(
                    "must be Postman (top-level `item`) or Swagger/OpenAPI (top-level `swagger` or `openapi`)"
                        .to_string(),
                )
            })?,
        };

        Ok(Self { kind, root })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Run the extractor matching this document's family
    pub fn extract(&self) -> Extraction {
        match self.kind {
            DocumentKind::Postman => postman::extract(&self.root),
            DocumentKind::Swagger => swagger::extract(&self.root),
        }
    }
}

/// Detect the document family from its top-level keys
///
/// `swagger`/`openapi` win over `item` when both are present.
pub fn detect_kind(root: &Value) -> Option<DocumentKind> {
    let fields = root.as_object()?;

    if fields.contains_key("swagger") || fields.contains_key("openapi") {
        Some(DocumentKind::Swagger)
    } else if fields.contains_key("item") {
        Some(DocumentKind::Postman)
    } else {
        None
    }
}

/// Parse JSON, falling back to YAML
pub fn parse_tree(content: &str) -> Result<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(content) {
        return Ok(value);
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
        CounterError::Parse(format!("Input is neither valid JSON nor YAML: {}", e))
    })?;

    Ok(yaml_to_json(yaml))
}

/// Convert a YAML tree into a JSON tree
///
/// Non-string mapping keys (`200:` response codes, booleans) are stringified
/// and tags are dropped.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut fields = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                fields.insert(yaml_key(key), yaml_to_json(value));
            }
            Value::Object(fields)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        other => match yaml_to_json(other) {
            Value::String(s) => s,
            json => json.to_string(),
        },
    }
}
