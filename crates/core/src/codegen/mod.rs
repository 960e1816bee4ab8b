//! Writers for the generated token module.

pub mod json;
pub mod typescript;

use std::path::Path;

use chrono::{DateTime, Utc};
use figtok_protocol::TokenTables;

/// Format of the generated token module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `semanticColors` / `rawColors` constant declarations for the UI kit.
    TypeScript,
    /// Normalized tables, loadable with `TokenTables::from_json`.
    Json,
}

impl OutputFormat {
    /// `.json` outputs get JSON, everything else TypeScript.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::TypeScript,
        }
    }
}

/// Provenance written at the top of the TypeScript module.
#[derive(Debug, Clone)]
pub struct ModuleHeader {
    /// Where the export came from (design file, path, ...).
    pub source: String,
    /// Command that regenerates the module.
    pub regenerate_with: String,
    pub generated_at: DateTime<Utc>,
}

impl ModuleHeader {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            regenerate_with: "figtok".to_string(),
            generated_at: Utc::now(),
        }
    }
}

/// Render the token module in the requested format.
pub fn render(
    format: OutputFormat,
    tables: &TokenTables,
    header: &ModuleHeader,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::TypeScript => Ok(typescript::render(tables, header)),
        OutputFormat::Json => json::render(tables),
    }
}
