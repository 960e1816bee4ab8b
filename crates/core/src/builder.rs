use std::collections::HashMap;

use figtok_protocol::{ColorValue, RawEntry, SemanticToken, TokenTables, normalize_token_name};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::warn;

use crate::color::{ColorError, format_hex, parse_hex, rgb_to_hsl};
use crate::export::{RawColor, RawPalette, SemanticEntry, SemanticModes};
use crate::resolve::resolve_color_reference;

/// A semantic token whose reference did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub mode: String,
    pub section: String,
    pub token: String,
    pub reference: String,
}

/// A color value that is not a usable hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor {
    /// Dotted path of the offending entry, e.g. `raw.neutral.500` or
    /// `docket.general.primary`.
    pub path: String,
    pub value: String,
    pub error: ColorError,
}

/// A semantic token entry that is not an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedToken {
    pub mode: String,
    pub section: String,
    pub token: String,
    pub error: String,
}

/// A token dropped because its normalized key is already taken in its
/// section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub mode: String,
    pub section: String,
    pub token: String,
    /// Export name of the token that keeps the key.
    pub kept: String,
    pub key: String,
}

/// What happened while building the tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Raw-color mode the palette was taken from.
    pub raw_mode: String,
    /// Semantic modes in output order.
    pub modes: Vec<String>,
    pub semantic_tokens: usize,
    pub raw_colors: usize,
    pub unresolved: Vec<UnresolvedReference>,
    pub invalid_colors: Vec<InvalidColor>,
    pub malformed: Vec<MalformedToken>,
    pub collisions: Vec<KeyCollision>,
}

impl GenerationReport {
    pub fn warning_count(&self) -> usize {
        self.unresolved.len()
            + self.invalid_colors.len()
            + self.malformed.len()
            + self.collisions.len()
    }
}

#[derive(Debug, Clone)]
pub struct Generation {
    pub tables: TokenTables,
    pub report: GenerationReport,
}

/// Build the semantic and raw token tables.
///
/// Tokens with a missing or empty `$value` are skipped silently. Tokens whose
/// entry is malformed, whose reference cannot be resolved, or whose name
/// normalizes to a key already used in the section are skipped with a
/// warning; one bad token never stops the rest of the batch. Every mode and
/// section of the input is present in the output, even when all of its tokens
/// were skipped.
pub fn build_tables(palette: &RawPalette, semantic: &SemanticModes) -> Generation {
    let mut report = GenerationReport {
        raw_mode: palette.mode.clone(),
        modes: semantic.keys().cloned().collect(),
        ..GenerationReport::default()
    };

    let mut tables = TokenTables::default();

    for (mode, sections) in semantic {
        let out_mode = tables.semantic.entry(mode.clone()).or_default();
        for (section, tokens) in sections {
            let out_section = out_mode.entry(section.clone()).or_default();
            // normalized key -> export name that claimed it
            let mut keys: HashMap<String, &str> = HashMap::new();
            for (name, value) in tokens {
                let path = TokenPath {
                    mode,
                    section,
                    token: name,
                };
                let entry = match SemanticEntry::from_value(value) {
                    Ok(Some(entry)) => entry,
                    Ok(None) => continue,
                    Err(error) => {
                        warn!(
                            token = path.token,
                            mode = path.mode,
                            section = path.section,
                            "skipping malformed token {}: {error}",
                            path.token
                        );
                        report.malformed.push(MalformedToken {
                            mode: mode.clone(),
                            section: section.clone(),
                            token: name.clone(),
                            error: error.to_string(),
                        });
                        continue;
                    }
                };
                let Some(token) = build_token(palette, &entry, &path, &mut report) else {
                    continue;
                };
                let key = normalize_token_name(name);
                if let Some(kept) = keys.get(&key) {
                    warn!(
                        token = path.token,
                        mode = path.mode,
                        section = path.section,
                        "skipping token {}: key {key} already used by {kept}",
                        path.token
                    );
                    report.collisions.push(KeyCollision {
                        mode: mode.clone(),
                        section: section.clone(),
                        token: name.clone(),
                        kept: kept.to_string(),
                        key,
                    });
                    continue;
                }
                keys.insert(key, name);
                out_section.insert(name.clone(), token);
            }
        }
    }

    for (name, color) in &palette.colors {
        let entry = match color {
            RawColor::Simple(literal) => {
                match color_value(&literal.value, || format!("raw.{name}"), &mut report) {
                    Some(value) => RawEntry::Simple(value),
                    None => continue,
                }
            }
            RawColor::Family(shades) => {
                let mut out = IndexMap::with_capacity(shades.len());
                for (shade, literal) in shades {
                    if let Some(value) =
                        color_value(&literal.value, || format!("raw.{name}.{shade}"), &mut report)
                    {
                        out.insert(shade.clone(), value);
                    }
                }
                RawEntry::Family(out)
            }
        };
        tables.raw.insert(name.clone(), entry);
    }

    report.semantic_tokens = tables.semantic_token_count();
    report.raw_colors = tables.raw_color_count();

    Generation { tables, report }
}

struct TokenPath<'a> {
    mode: &'a str,
    section: &'a str,
    token: &'a str,
}

fn build_token(
    palette: &RawPalette,
    entry: &SemanticEntry,
    path: &TokenPath<'_>,
    report: &mut GenerationReport,
) -> Option<SemanticToken> {
    let reference = match &entry.value {
        None | Some(Value::Null) => return None,
        Some(Value::String(s)) if s.is_empty() => return None,
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    let Some(hex) = resolve_color_reference(&reference, palette) else {
        warn!(
            reference = %reference,
            token = path.token,
            mode = path.mode,
            section = path.section,
            "could not resolve color reference {reference} for token {}",
            path.token
        );
        report.unresolved.push(UnresolvedReference {
            mode: path.mode.to_string(),
            section: path.section.to_string(),
            token: path.token.to_string(),
            reference,
        });
        return None;
    };

    let ColorValue { hex, hsl } = color_value(
        hex,
        || format!("{}.{}.{}", path.mode, path.section, path.token),
        report,
    )?;

    Some(SemanticToken {
        hex,
        hsl,
        description: entry.description.clone().filter(|d| !d.is_empty()),
        scopes: entry.scopes.clone(),
    })
}

fn color_value(
    hex: &str,
    path: impl FnOnce() -> String,
    report: &mut GenerationReport,
) -> Option<ColorValue> {
    match parse_hex(hex) {
        Ok(rgb) => Some(ColorValue {
            hex: format_hex(rgb),
            hsl: rgb_to_hsl(rgb),
        }),
        Err(error) => {
            let path = path();
            warn!(path = %path, value = hex, "skipping color: {error}");
            report.invalid_colors.push(InvalidColor {
                path,
                value: hex.to_string(),
                error,
            });
            None
        }
    }
}
