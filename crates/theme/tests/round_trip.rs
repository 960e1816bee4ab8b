//! Integration test: generate tables from the sample export, load them the way
//! an application would, and flatten them through the theme runtime.

use figtok_core::codegen::{self, ModuleHeader, OutputFormat};
use figtok_protocol::{CanonicalKey, ThemeMode, TokenTables};
use figtok_theme::{
    ColorScheme, FallbackReason, FileStore, MemoryStore, Palette, ResolutionPath, THEME_KEY,
    ThemeRuntime, ValueSource, get_semantic_value,
};

const SAMPLE: &[u8] = include_bytes!("../../core/tests/fixtures/figma-export.json");

fn generated_tables() -> TokenTables {
    figtok_core::generate(SAMPLE).expect("failed to generate sample export").tables
}

/// Tables as the runtime sees them after loading the emitted JSON module.
fn loaded_tables() -> TokenTables {
    let tables = generated_tables();
    let json = codegen::render(OutputFormat::Json, &tables, &ModuleHeader::new("sample")).unwrap();
    TokenTables::from_json(&json).unwrap()
}

#[test]
fn docket_background_matches_generated_token() {
    let tables = loaded_tables();
    let expected = generated_tables()
        .semantic_token("docket", "general", "background")
        .unwrap()
        .hsl;

    let palette = Palette::build(&tables, ThemeMode::Docket);
    assert_eq!(palette.hsl(CanonicalKey::Background), Some(expected));
    assert_eq!(expected.to_string(), "0 0% 100%");
    assert_eq!(
        palette.hsl(CanonicalKey::MutedForeground).unwrap().to_string(),
        "0 0% 45%"
    );
    assert_eq!(palette.hsl(CanonicalKey::Ring).unwrap().to_string(), "0 0% 83%");
}

#[test]
fn light_alias_reads_docket() {
    let tables = loaded_tables();
    let light = Palette::build(&tables, ThemeMode::Light);
    let docket = Palette::build(&tables, ThemeMode::Docket);

    assert_eq!(light.resolution.path, ResolutionPath::Alias);
    assert_eq!(light.css_declarations(), docket.css_declarations());
}

#[test]
fn dark_alias_reads_shadcn_dark() {
    let tables = loaded_tables();
    let dark = Palette::build(&tables, ThemeMode::Dark);
    assert_eq!(dark.resolution.concrete, ThemeMode::ShadcnDark);
    assert!(!dark.resolution.used_fallback());

    assert_eq!(dark.hsl(CanonicalKey::Background).unwrap().to_string(), "0 0% 0%");
    let destructive_fg = dark.get(CanonicalKey::DestructiveForeground).unwrap();
    assert_eq!(destructive_fg.hsl.to_string(), "0 91% 71%");
    assert_eq!(destructive_fg.source, ValueSource::Semantic);

    // the dark mode of the sample has no input or destructive token
    let fallbacks: Vec<_> = dark.fallbacks().collect();
    assert!(fallbacks.contains(&(CanonicalKey::Input, FallbackReason::MissingToken)));
    assert!(fallbacks.contains(&(CanonicalKey::Destructive, FallbackReason::MissingToken)));
    assert!(fallbacks.contains(&(CanonicalKey::Chart5, FallbackReason::MissingRawColor)));
}

#[test]
fn dark_alias_falls_back_to_web_without_shadcn_dark() {
    let mut tables = loaded_tables();
    tables.semantic.shift_remove("shadcn-dark");

    let dark = Palette::build(&tables, ThemeMode::Dark);
    let web = Palette::build(&tables, ThemeMode::Web);
    assert!(dark.resolution.used_fallback());
    assert_eq!(dark.css_declarations(), web.css_declarations());
}

#[test]
fn chart_colors_use_raw_palette() {
    let tables = loaded_tables();
    let chart1 = get_semantic_value(&tables, ThemeMode::Web, CanonicalKey::Chart1);
    assert_eq!(chart1.hsl.to_string(), "25 95% 53%");
    assert_eq!(chart1.source, ValueSource::Raw);

    let chart5 = get_semantic_value(&tables, ThemeMode::Web, CanonicalKey::Chart5);
    assert_eq!(chart5.hsl.to_string(), "27 87% 67%");
    assert!(chart5.used_fallback());
}

#[test]
fn web_palette_has_no_semantic_fallbacks() {
    let palette = Palette::build(&loaded_tables(), ThemeMode::Web);
    let fallbacks: Vec<_> = palette.fallbacks().map(|(key, _)| key).collect();
    assert_eq!(fallbacks, [CanonicalKey::Chart5]);
    assert_eq!(
        palette.get(CanonicalKey::DestructiveForeground).unwrap().source,
        ValueSource::Fixed
    );
}

#[test]
fn cycling_three_times_returns_to_start() {
    let mut runtime = ThemeRuntime::new(loaded_tables(), MemoryStore::new(), ColorScheme::Light);
    let start = runtime.active_mode();
    for _ in 0..3 {
        runtime.cycle_mode().unwrap();
    }
    assert_eq!(runtime.active_mode(), start);
}

#[test]
fn file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("theme-state.json");

    let store = FileStore::open(&state).unwrap();
    let mut runtime = ThemeRuntime::new(loaded_tables(), store, ColorScheme::Light);
    let applied = runtime.toggle_mode().unwrap();
    assert_eq!(applied.mode, ThemeMode::Dark);
    assert_eq!(applied.root_class, Some("dark"));

    let reopened = FileStore::open(&state).unwrap();
    let runtime = ThemeRuntime::new(loaded_tables(), reopened, ColorScheme::Light);
    assert_eq!(runtime.active_mode(), ThemeMode::Dark);
    assert!(runtime.current().css().contains("  --destructive-foreground: 0 91% 71%;\n"));
}

#[test]
fn unknown_persisted_mode_is_ignored() {
    use figtok_theme::KeyValueStore;

    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "high-contrast").unwrap();
    let runtime = ThemeRuntime::new(loaded_tables(), store, ColorScheme::Dark);
    assert_eq!(runtime.active_mode(), ThemeMode::Dark);
}
