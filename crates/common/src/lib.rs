//! Common types and utilities for the API Endpoint Counter
//!
//! This crate contains shared data structures, error types, and utilities
//! used across the parser, report, and CLI components.

mod aggregate;
mod base_path;

pub use aggregate::{Aggregate, Histogram};
pub use base_path::{classify_base_path, ROOT_BASE_PATH};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while counting endpoints
#[derive(Error, Debug)]
pub enum CounterError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unrecognized file format: {0}")]
    UnrecognizedFormat(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for counter operations
pub type Result<T> = std::result::Result<T, CounterError>;

/// Which family of API description a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Postman collection (`item` tree)
    Postman,
    /// Swagger 2.0 or OpenAPI 3.x (`paths` mapping)
    Swagger,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Postman => write!(f, "Postman"),
            DocumentKind::Swagger => write!(f, "Swagger/OpenAPI"),
        }
    }
}

/// A single endpoint emitted by an extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRecord {
    /// Uppercased HTTP method (e.g., "GET", or "UNKNOWN")
    pub method: String,

    /// Normalized path (e.g., "/v1/users/:id")
    pub path: String,
}

impl EndpointRecord {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }
}
