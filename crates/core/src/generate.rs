use thiserror::Error;
use tracing::{debug, info};

use crate::builder::{Generation, build_tables};
use crate::export::{Export, ExportError, RAW_COLORS, SEMANTIC_COLORS};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("export: {0}")]
    Export(#[from] ExportError),
    #[error("could not find {0:?} collection in export")]
    MissingCollection(&'static str),
}

/// Read an export and build its token tables.
///
/// Fails when the export is not valid JSON or when either the raw-color or
/// the semantic-color collection is missing. Problems with individual tokens
/// are reported in [`Generation::report`] instead.
pub fn generate(data: &[u8]) -> Result<Generation, GenerateError> {
    let export = Export::from_slice(data)?;
    debug!(collections = ?export.collection_names(), "read export");

    let palette = export
        .raw_colors()?
        .ok_or(GenerateError::MissingCollection(RAW_COLORS))?;
    let semantic = export
        .semantic_modes()?
        .ok_or(GenerateError::MissingCollection(SEMANTIC_COLORS))?;

    let generation = build_tables(&palette, &semantic);
    info!(
        raw_mode = %generation.report.raw_mode,
        modes = generation.report.modes.len(),
        semantic_tokens = generation.report.semantic_tokens,
        raw_colors = generation.report.raw_colors,
        warnings = generation.report.warning_count(),
        "built token tables"
    );
    Ok(generation)
}
