use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::Hsl;

/// A concrete color: its hex spelling and the derived HSL triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValue {
    pub hex: String,
    pub hsl: Hsl,
}

/// A semantic token whose reference resolved to a raw color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticToken {
    pub hex: String,
    pub hsl: Hsl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

/// One entry of the raw palette: a named simple color or a family of shades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Simple(ColorValue),
    Family(IndexMap<String, ColorValue>),
}

/// section name -> token name -> token
pub type SectionTokens = IndexMap<String, SemanticToken>;
/// mode name -> section name -> tokens
pub type ModeTokens = IndexMap<String, SectionTokens>;

/// The generated token tables: semantic tokens per mode and the raw palette.
///
/// Both tables keep the order of the export they were built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTables {
    pub semantic: IndexMap<String, ModeTokens>,
    pub raw: IndexMap<String, RawEntry>,
}

impl TokenTables {
    /// Load tables previously written by the JSON emitter.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// Semantic mode names in table order.
    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.semantic.keys().map(String::as_str)
    }

    pub fn has_mode(&self, mode: &str) -> bool {
        self.semantic.contains_key(mode)
    }

    /// Look up a semantic token by its normalized name first, then by the
    /// name exactly as given.
    pub fn semantic_token(&self, mode: &str, section: &str, name: &str) -> Option<&SemanticToken> {
        let section = self.semantic.get(mode)?.get(section)?;
        section
            .get(&normalize_token_name(name))
            .or_else(|| section.get(name))
    }

    /// Look up a raw color: `shade` selects within a family, `None` selects a
    /// simple color.
    pub fn raw_color(&self, name: &str, shade: Option<&str>) -> Option<&ColorValue> {
        match (self.raw.get(name)?, shade) {
            (RawEntry::Simple(value), None) => Some(value),
            (RawEntry::Family(shades), Some(shade)) => shades.get(shade),
            _ => None,
        }
    }

    pub fn semantic_token_count(&self) -> usize {
        self.semantic
            .values()
            .flat_map(IndexMap::values)
            .map(IndexMap::len)
            .sum()
    }

    pub fn raw_color_count(&self) -> usize {
        self.raw
            .values()
            .map(|entry| match entry {
                RawEntry::Simple(_) => 1,
                RawEntry::Family(shades) => shades.len(),
            })
            .sum()
    }

    /// Copy of the tables with every semantic token keyed by its normalized
    /// name. When two names normalize to the same key the first one wins.
    pub fn with_normalized_keys(&self) -> Self {
        let semantic = self
            .semantic
            .iter()
            .map(|(mode, sections)| {
                let sections = sections
                    .iter()
                    .map(|(section, tokens)| {
                        let mut normalized = SectionTokens::with_capacity(tokens.len());
                        for (name, token) in tokens {
                            normalized
                                .entry(normalize_token_name(name))
                                .or_insert_with(|| token.clone());
                        }
                        (section.clone(), normalized)
                    })
                    .collect();
                (mode.clone(), sections)
            })
            .collect();

        Self {
            semantic,
            raw: self.raw.clone(),
        }
    }
}

/// Fold a design-tool token name into its lookup key: all whitespace is
/// removed and the first character is lower-cased.
///
/// `"primary foreground"` becomes `"primaryforeground"`,
/// `"Card Foreground"` becomes `"cardForeground"`.
pub fn normalize_token_name(name: &str) -> String {
    let compact: String = name.split_whitespace().collect();
    let mut chars = compact.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
