//! Template loading and management

use api_endpoint_counter_common::{CounterError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Name the report template is registered under
pub const REPORT_TEMPLATE: &str = "report.html";

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("base_path", base_path_filter);

    tera.add_raw_template(
        REPORT_TEMPLATE,
        include_str!("../templates/report.html.tera"),
    )
    .map_err(|e| CounterError::Render(format!("Failed to load report template: {}", e)))?;

    // Paths and methods are written verbatim
    tera.autoescape_on(vec![]);

    Ok(tera)
}

/// Filter to display a base path as a wildcard route (`users` -> `/users/*`)
fn base_path_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let base = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("base_path filter expects a string"))?;

    Ok(Value::String(format!("/{}/*", base)))
}
