//! HTML report rendering
//!
//! This crate turns an [`Aggregate`] into a single self-contained HTML page
//! with a total and three tables (by method, by endpoint, by base path).
//! Rows keep the first-seen order of the aggregate's histograms.

mod templates;

use api_endpoint_counter_common::{Aggregate, CounterError, DocumentKind, Histogram, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::Tera;

pub use templates::REPORT_TEMPLATE;

/// Title used when none is supplied
pub const DEFAULT_TITLE: &str = "API Endpoints Counter";

/// Presentation options for a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Page title and heading
    pub title: String,

    /// Label of the input document (usually its file name)
    pub source: Option<String>,

    /// Family of the input document
    pub kind: Option<DocumentKind>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            source: None,
            kind: None,
        }
    }
}

/// One table row
#[derive(Debug, Serialize)]
struct Row<'a> {
    key: &'a str,
    count: usize,
}

fn rows(histogram: &Histogram) -> Vec<Row<'_>> {
    histogram
        .iter()
        .map(|(key, count)| Row { key, count })
        .collect()
}

/// Report renderer
///
/// Renders the whole document in memory, so nothing is written when
/// rendering fails.
pub struct ReportRenderer {
    options: ReportOptions,
    tera: Tera,
}

impl ReportRenderer {
    /// Create a renderer with the given options
    pub fn new(options: ReportOptions) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { options, tera })
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Render the report to a string
    pub fn render(&self, aggregate: &Aggregate) -> Result<String> {
        let context = self.create_context(aggregate);
        self.tera
            .render(REPORT_TEMPLATE, &context)
            .map_err(|e| CounterError::Render(format!("Template error: {:?}", e)))
    }

    /// Render the report and write it to `output_path`
    pub fn write_to_file(&self, aggregate: &Aggregate, output_path: &Path) -> Result<()> {
        let rendered = self.render(aggregate)?;

        fs::write(output_path, rendered)?;
        Ok(())
    }

    /// Create template context from the aggregate
    fn create_context(&self, aggregate: &Aggregate) -> tera::Context {
        let mut context = tera::Context::new();
        context.insert("title", &self.options.title);
        context.insert("source", &self.options.source);
        context.insert("kind", &self.options.kind.map(|kind| kind.to_string()));
        context.insert("total", &aggregate.total);
        context.insert("methods", &rows(&aggregate.methods));
        context.insert("endpoints", &rows(&aggregate.endpoints));
        context.insert("bases", &rows(&aggregate.bases));
        context
    }
}

/// Render a report with the given options (convenience function)
pub fn render_report(aggregate: &Aggregate, options: ReportOptions) -> Result<String> {
    ReportRenderer::new(options)?.render(aggregate)
}
