use figtok_protocol::{CanonicalKey, Hsl, ThemeMode, TokenTables};
use tracing::debug;

use crate::alias::{AliasResolution, resolve_alias};

/// Value used for a semantic key the tables cannot provide.
pub const MISSING_VALUE: Hsl = Hsl::BLACK;

const DESTRUCTIVE_FOREGROUND: Hsl = Hsl::WHITE;

/// Where a canonical key reads its value from in a concrete mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Semantic {
        section: &'static str,
        name: &'static str,
    },
    Raw {
        family: &'static str,
        shade: &'static str,
        fallback: Hsl,
    },
    Fixed(Hsl),
}

/// Source of `key` in the concrete mode `concrete`.
pub fn token_source(concrete: ThemeMode, key: CanonicalKey) -> TokenSource {
    use CanonicalKey as K;

    let semantic =
        |section: &'static str, name: &'static str| TokenSource::Semantic { section, name };
    let raw = |family: &'static str, shade: &'static str, fallback: Hsl| TokenSource::Raw {
        family,
        shade,
        fallback,
    };

    match key {
        K::Background => semantic("general", "background"),
        K::Foreground => semantic("general", "foreground"),
        K::Card => semantic("card", "card"),
        K::CardForeground => semantic("card", "card foreground"),
        K::Popover => semantic("popover", "popover"),
        K::PopoverForeground => semantic("popover", "popover foreground"),
        K::Primary => semantic("general", "primary"),
        K::PrimaryForeground => semantic("general", "primary foreground"),
        K::Secondary => semantic("general", "secondary"),
        K::SecondaryForeground => semantic("general", "secondary foreground"),
        K::Muted => semantic("general", "muted"),
        K::MutedForeground => semantic("general", "muted foreground"),
        K::Accent => semantic("general", "accent"),
        K::AccentForeground => semantic("general", "accent foreground"),
        K::Destructive => semantic("general", "destructive"),
        K::DestructiveForeground if concrete == ThemeMode::ShadcnDark => {
            semantic("unofficial", "destructive foreground")
        }
        K::DestructiveForeground => TokenSource::Fixed(DESTRUCTIVE_FOREGROUND),
        K::Border => semantic("general", "border"),
        K::Input => semantic("general", "input"),
        K::Ring => semantic("focus", "ring"),
        K::Chart1 => raw("orange", "500", Hsl::new(12, 76, 61)),
        K::Chart2 => raw("emerald", "500", Hsl::new(173, 58, 39)),
        K::Chart3 => raw("blue", "700", Hsl::new(197, 37, 24)),
        K::Chart4 => raw("yellow", "500", Hsl::new(43, 74, 66)),
        K::Chart5 => raw("pink", "500", Hsl::new(27, 87, 67)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    MissingMode,
    MissingSection,
    MissingToken,
    MissingRawColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Semantic,
    Raw,
    Fixed,
    Fallback(FallbackReason),
}

/// A looked-up color and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedValue {
    pub hsl: Hsl,
    pub source: ValueSource,
}

impl ResolvedValue {
    pub fn used_fallback(&self) -> bool {
        matches!(self.source, ValueSource::Fallback(_))
    }

    fn fallback(hsl: Hsl, reason: FallbackReason) -> Self {
        Self {
            hsl,
            source: ValueSource::Fallback(reason),
        }
    }
}

/// Look up a semantic token by mode key, section and token name.
///
/// The name is tried normalized first, then as given. Anything missing yields
/// [`MISSING_VALUE`] flagged as a fallback.
pub fn semantic_value(tables: &TokenTables, mode: &str, section: &str, name: &str) -> ResolvedValue {
    let Some(sections) = tables.semantic.get(mode) else {
        return ResolvedValue::fallback(MISSING_VALUE, FallbackReason::MissingMode);
    };
    if !sections.contains_key(section) {
        return ResolvedValue::fallback(MISSING_VALUE, FallbackReason::MissingSection);
    }
    match tables.semantic_token(mode, section, name) {
        Some(token) => ResolvedValue {
            hsl: token.hsl,
            source: ValueSource::Semantic,
        },
        None => ResolvedValue::fallback(MISSING_VALUE, FallbackReason::MissingToken),
    }
}

/// Value of `key` for the concrete mode `concrete`.
fn concrete_value(tables: &TokenTables, concrete: ThemeMode, key: CanonicalKey) -> ResolvedValue {
    match token_source(concrete, key) {
        TokenSource::Semantic { section, name } => {
            semantic_value(tables, concrete.as_str(), section, name)
        }
        TokenSource::Raw {
            family,
            shade,
            fallback,
        } => match tables.raw_color(family, Some(shade)) {
            Some(color) => ResolvedValue {
                hsl: color.hsl,
                source: ValueSource::Raw,
            },
            None => ResolvedValue::fallback(fallback, FallbackReason::MissingRawColor),
        },
        TokenSource::Fixed(hsl) => ResolvedValue {
            hsl,
            source: ValueSource::Fixed,
        },
    }
}

/// Value of `key` for `mode`, resolving legacy aliases first.
pub fn get_semantic_value(tables: &TokenTables, mode: ThemeMode, key: CanonicalKey) -> ResolvedValue {
    let resolution = resolve_alias(mode, tables);
    concrete_value(tables, resolution.concrete, key)
}

/// Every canonical key of one mode, in [`CanonicalKey::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub resolution: AliasResolution,
    entries: Vec<(CanonicalKey, ResolvedValue)>,
}

impl Palette {
    pub fn build(tables: &TokenTables, mode: ThemeMode) -> Self {
        let resolution = resolve_alias(mode, tables);
        let entries: Vec<_> = CanonicalKey::ALL
            .into_iter()
            .map(|key| (key, concrete_value(tables, resolution.concrete, key)))
            .collect();

        let fallbacks = entries.iter().filter(|(_, v)| v.used_fallback()).count();
        if fallbacks > 0 {
            debug!(
                %mode,
                concrete = %resolution.concrete,
                fallbacks,
                "palette uses fallback values"
            );
        }

        Self {
            resolution,
            entries,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.resolution.requested
    }

    pub fn get(&self, key: CanonicalKey) -> Option<&ResolvedValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn hsl(&self, key: CanonicalKey) -> Option<Hsl> {
        self.get(key).map(|v| v.hsl)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalKey, &ResolvedValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Keys whose value is a fallback.
    pub fn fallbacks(&self) -> impl Iterator<Item = (CanonicalKey, FallbackReason)> + '_ {
        self.entries.iter().filter_map(|(k, v)| match v.source {
            ValueSource::Fallback(reason) => Some((*k, reason)),
            _ => None,
        })
    }

    /// One `--name: H S% L%;` declaration per key.
    pub fn css_declarations(&self) -> Vec<String> {
        self.iter()
            .map(|(key, value)| format!("--{}: {};", key.css_name(), value.hsl))
            .collect()
    }

    /// Declarations indented for a CSS rule body, one per line.
    pub fn css_variables(&self) -> String {
        self.css_declarations()
            .iter()
            .map(|d| format!("  {d}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use figtok_protocol::{ColorValue, RawEntry, SemanticToken};
    use indexmap::IndexMap;

    use super::*;

    fn token(hsl: Hsl) -> SemanticToken {
        SemanticToken {
            hex: String::new(),
            hsl,
            description: None,
            scopes: Vec::new(),
        }
    }

    fn tables() -> TokenTables {
        let mut tables = TokenTables::default();
        let web = tables.semantic.entry("web".into()).or_default();
        let general = web.entry("general".into()).or_default();
        general.insert("background".into(), token(Hsl::WHITE));
        general.insert("primaryforeground".into(), token(Hsl::new(210, 40, 98)));
        general.insert("muted foreground".into(), token(Hsl::new(215, 16, 47)));
        web.entry("focus".into()).or_default();

        let dark = tables.semantic.entry("shadcn-dark".into()).or_default();
        dark.entry("unofficial".into())
            .or_default()
            .insert("destructiveforeground".into(), token(Hsl::new(0, 91, 71)));

        let mut orange = IndexMap::new();
        orange.insert(
            "500".to_string(),
            ColorValue {
                hex: "#f97316".into(),
                hsl: Hsl::new(25, 95, 53),
            },
        );
        tables.raw.insert("orange".into(), RawEntry::Family(orange));
        tables
    }

    #[test]
    fn semantic_lookup_tries_normalized_then_original() {
        let tables = tables();
        let normalized = semantic_value(&tables, "web", "general", "primary foreground");
        assert_eq!(normalized.hsl, Hsl::new(210, 40, 98));
        assert_eq!(normalized.source, ValueSource::Semantic);

        let original = semantic_value(&tables, "web", "general", "muted foreground");
        assert_eq!(original.hsl, Hsl::new(215, 16, 47));
        assert!(!original.used_fallback());
    }

    #[test]
    fn missing_lookups_return_flagged_black() {
        let tables = tables();
        let cases = [
            ("docket", "general", "background", FallbackReason::MissingMode),
            ("web", "card", "card", FallbackReason::MissingSection),
            ("web", "focus", "ring", FallbackReason::MissingToken),
        ];
        for (mode, section, name, reason) in cases {
            let value = semantic_value(&tables, mode, section, name);
            assert_eq!(value.hsl.to_string(), "0 0% 0%");
            assert_eq!(value.source, ValueSource::Fallback(reason), "{mode}.{section}.{name}");
        }
    }

    #[test]
    fn destructive_foreground_is_fixed_except_in_shadcn_dark() {
        let tables = tables();
        let web = get_semantic_value(&tables, ThemeMode::Web, CanonicalKey::DestructiveForeground);
        assert_eq!(web.hsl, Hsl::WHITE);
        assert_eq!(web.source, ValueSource::Fixed);

        let dark = get_semantic_value(&tables, ThemeMode::Dark, CanonicalKey::DestructiveForeground);
        assert_eq!(dark.hsl.to_string(), "0 91% 71%");
        assert_eq!(dark.source, ValueSource::Semantic);
    }

    #[test]
    fn chart_colors_come_from_raw_palette_or_defaults() {
        let tables = tables();
        let chart1 = get_semantic_value(&tables, ThemeMode::Web, CanonicalKey::Chart1);
        assert_eq!(chart1.hsl.to_string(), "25 95% 53%");
        assert_eq!(chart1.source, ValueSource::Raw);

        let chart5 = get_semantic_value(&tables, ThemeMode::Web, CanonicalKey::Chart5);
        assert_eq!(chart5.hsl.to_string(), "27 87% 67%");
        assert_eq!(
            chart5.source,
            ValueSource::Fallback(FallbackReason::MissingRawColor)
        );
    }

    #[test]
    fn palette_covers_every_key_in_order() {
        let palette = Palette::build(&tables(), ThemeMode::Web);
        let keys: Vec<_> = palette.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, CanonicalKey::ALL);
        assert_eq!(palette.mode(), ThemeMode::Web);
        assert_eq!(palette.hsl(CanonicalKey::Background), Some(Hsl::WHITE));
        assert!(palette.fallbacks().any(|(k, r)| k == CanonicalKey::Ring
            && r == FallbackReason::MissingToken));
    }

    #[test]
    fn css_output_uses_kebab_case_names() {
        let palette = Palette::build(&tables(), ThemeMode::Web);
        let declarations = palette.css_declarations();
        assert_eq!(declarations.len(), 24);
        assert_eq!(declarations[0], "--background: 0 0% 100%;");
        assert!(declarations.contains(&"--primary-foreground: 210 40% 98%;".to_string()));
        assert!(declarations.contains(&"--chart1: 25 95% 53%;".to_string()));

        let block = palette.css_variables();
        assert!(block.starts_with("  --background: 0 0% 100%;\n  --foreground: 0 0% 0%;\n"));
        assert_eq!(block.lines().count(), 24);
    }
}
