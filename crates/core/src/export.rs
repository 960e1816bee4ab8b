use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Collection holding the base palette.
pub const RAW_COLORS: &str = "raw colors";
/// Collection holding the mode/section/token references.
pub const SEMANTIC_COLORS: &str = "semantic colors";
/// Raw-color mode used when present; otherwise the first mode wins.
pub const PREFERRED_RAW_MODE: &str = "Mode 1";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("collection {name:?} is malformed: {source}")]
    Collection {
        name: &'static str,
        source: serde_json::Error,
    },
}

/// A design-tool variable export: a JSON array of objects, each keyed by
/// collection name.
#[derive(Debug, Clone)]
pub struct Export {
    collections: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct Collection<T> {
    modes: IndexMap<String, T>,
}

/// Key holding a literal value inside an export entry.
const VALUE_KEY: &str = "$value";

/// `$type`, `$extensions` and friends describe an entry; they never name a
/// color or a shade.
fn is_metadata_key(key: &str) -> bool {
    key.starts_with('$')
}

/// A literal color as stored in the export (`{"$value": "#rrggbb", ...}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorLiteral {
    pub value: String,
}

impl ColorLiteral {
    /// The `$value` string. Anything else is kept as its JSON text so the
    /// builder can report it as an invalid color.
    fn from_value(value: &Value) -> Self {
        let value = match value.get(VALUE_KEY) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => value.to_string(),
        };
        Self { value }
    }
}

/// One entry of the raw palette as exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawColor {
    /// A single named color such as `white`.
    Simple(ColorLiteral),
    /// Shade label (`"50"`..`"950"`) to color.
    Family(IndexMap<String, ColorLiteral>),
}

impl RawColor {
    /// An object with a `$value` is a simple color, any other object is a
    /// family. Non-objects become simple colors that fail hex parsing.
    fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(shades) if !shades.contains_key(VALUE_KEY) => Self::Family(
                shades
                    .iter()
                    .filter(|(shade, _)| !is_metadata_key(shade))
                    .map(|(shade, literal)| (shade.clone(), ColorLiteral::from_value(literal)))
                    .collect(),
            ),
            _ => Self::Simple(ColorLiteral::from_value(value)),
        }
    }
}

/// The raw palette of one mode of the raw-color collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPalette {
    /// Name of the mode the palette was taken from.
    pub mode: String,
    pub colors: IndexMap<String, RawColor>,
}

impl RawPalette {
    pub fn new(mode: impl Into<String>, colors: IndexMap<String, RawColor>) -> Self {
        Self {
            mode: mode.into(),
            colors,
        }
    }

    fn from_entries(mode: String, entries: &IndexMap<String, Value>) -> Self {
        let colors = entries
            .iter()
            .filter(|(name, _)| !is_metadata_key(name))
            .map(|(name, value)| (name.clone(), RawColor::from_value(value)))
            .collect();
        Self::new(mode, colors)
    }

    /// Value of a simple color. `None` for unknown names and for families.
    pub fn simple(&self, name: &str) -> Option<&str> {
        match self.colors.get(name)? {
            RawColor::Simple(literal) => Some(&literal.value),
            RawColor::Family(_) => None,
        }
    }

    /// Value of a shade within a color family.
    pub fn shade(&self, family: &str, shade: &str) -> Option<&str> {
        match self.colors.get(family)? {
            RawColor::Family(shades) => shades.get(shade).map(|l| l.value.as_str()),
            RawColor::Simple(_) => None,
        }
    }
}

/// A semantic token as exported. Every field is optional and read leniently:
/// a `$description` that is not a string is dropped, and `$scopes` keeps only
/// its string items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SemanticEntry {
    #[serde(rename = "$value", default)]
    pub value: Option<Value>,
    #[serde(
        rename = "$description",
        default,
        deserialize_with = "lenient_description"
    )]
    pub description: Option<String>,
    #[serde(rename = "$scopes", default, deserialize_with = "lenient_scopes")]
    pub scopes: Vec<String>,
}

impl SemanticEntry {
    /// Read one token of a section. `null` is an empty slot.
    pub fn from_value(value: &Value) -> Result<Option<Self>, serde_json::Error> {
        if value.is_null() {
            return Ok(None);
        }
        Self::deserialize(value).map(Some)
    }
}

fn lenient_description<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_scopes<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let Value::Array(items) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// token name -> entry as exported, read with [`SemanticEntry::from_value`]
pub type SemanticSection = IndexMap<String, Value>;
/// section name -> tokens
pub type SemanticMode = IndexMap<String, SemanticSection>;
/// mode name -> sections
pub type SemanticModes = IndexMap<String, SemanticMode>;

impl Export {
    pub fn from_slice(data: &[u8]) -> Result<Self, ExportError> {
        let collections: Vec<Value> = serde_json::from_slice(data)?;
        Ok(Self { collections })
    }

    /// Names of every collection in the export, in document order.
    pub fn collection_names(&self) -> Vec<&str> {
        self.collections
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|obj| obj.keys().map(String::as_str))
            .collect()
    }

    /// First non-null value stored under `name` in any top-level object.
    fn collection(&self, name: &str) -> Option<&Value> {
        self.collections
            .iter()
            .find_map(|item| item.get(name).filter(|v| !v.is_null()))
    }

    /// The raw palette, or `None` if the collection or all of its modes are
    /// missing.
    ///
    /// Uses the `"Mode 1"` mode when present and the first mode otherwise.
    pub fn raw_colors(&self) -> Result<Option<RawPalette>, ExportError> {
        let Some(value) = self.collection(RAW_COLORS) else {
            return Ok(None);
        };
        let Collection { mut modes } =
            Collection::<IndexMap<String, Value>>::deserialize(value).map_err(|source| {
                ExportError::Collection {
                    name: RAW_COLORS,
                    source,
                }
            })?;

        if modes.len() > 1 {
            warn!(
                modes = modes.len(),
                "raw colors has several modes; only one is used"
            );
        }

        let (mode, colors) = match modes.swap_remove_entry(PREFERRED_RAW_MODE) {
            Some(entry) => entry,
            None => {
                let Some(first) = modes.shift_remove_index(0) else {
                    return Ok(None);
                };
                debug!(mode = %first.0, "no {PREFERRED_RAW_MODE:?} raw-color mode, using first");
                first
            }
        };

        Ok(Some(RawPalette::from_entries(mode, &colors)))
    }

    /// The semantic modes, or `None` if the collection is missing.
    pub fn semantic_modes(&self) -> Result<Option<SemanticModes>, ExportError> {
        let Some(value) = self.collection(SEMANTIC_COLORS) else {
            return Ok(None);
        };
        let Collection { modes } =
            Collection::<SemanticMode>::deserialize(value).map_err(|source| {
                ExportError::Collection {
                    name: SEMANTIC_COLORS,
                    source,
                }
            })?;
        Ok(Some(modes))
    }
}
