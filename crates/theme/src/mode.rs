use figtok_protocol::ThemeMode;
use tracing::debug;

use crate::store::{KeyValueStore, StoreError};

/// Store key holding the persisted mode.
pub const THEME_KEY: &str = "theme";

/// Mode used when nothing is persisted and the environment has no dark
/// preference. This is the concrete mode the `light` alias maps onto.
pub const DEFAULT_MODE: ThemeMode = ThemeMode::Docket;

/// Order `cycle_mode` walks through.
pub const CYCLE_ORDER: [ThemeMode; 3] = [ThemeMode::Docket, ThemeMode::Web, ThemeMode::Dark];

/// The environment's color-scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Current mode: a valid persisted value, else `Dark` when the environment
/// prefers dark, else [`DEFAULT_MODE`]. Never writes.
pub fn active_mode<S: KeyValueStore + ?Sized>(store: &S, scheme: ColorScheme) -> ThemeMode {
    if let Some(stored) = store.get(THEME_KEY) {
        match stored.parse() {
            Ok(mode) => return mode,
            Err(e) => debug!("ignoring persisted theme: {e}"),
        }
    }
    match scheme {
        ColorScheme::Dark => ThemeMode::Dark,
        ColorScheme::Light => DEFAULT_MODE,
    }
}

/// Persist `mode` and return it.
pub fn set_mode<S: KeyValueStore + ?Sized>(
    store: &mut S,
    mode: ThemeMode,
) -> Result<ThemeMode, StoreError> {
    store.set(THEME_KEY, mode.as_str())?;
    debug!(%mode, "theme mode persisted");
    Ok(mode)
}

/// The mode after `current` in [`CYCLE_ORDER`]. Modes outside the cycle
/// restart at its first entry.
pub fn next_in_cycle(current: ThemeMode) -> ThemeMode {
    match CYCLE_ORDER.iter().position(|&m| m == current) {
        Some(i) => CYCLE_ORDER[(i + 1) % CYCLE_ORDER.len()],
        None => CYCLE_ORDER[0],
    }
}

pub fn cycle_mode<S: KeyValueStore + ?Sized>(
    store: &mut S,
    scheme: ColorScheme,
) -> Result<ThemeMode, StoreError> {
    let next = next_in_cycle(active_mode(&*store, scheme));
    set_mode(store, next)
}

/// Dark modes toggle to the default light mode, everything else to `Dark`.
pub fn toggled(current: ThemeMode) -> ThemeMode {
    match current {
        ThemeMode::Dark | ThemeMode::ShadcnDark => DEFAULT_MODE,
        _ => ThemeMode::Dark,
    }
}

pub fn toggle_mode<S: KeyValueStore + ?Sized>(
    store: &mut S,
    scheme: ColorScheme,
) -> Result<ThemeMode, StoreError> {
    let next = toggled(active_mode(&*store, scheme));
    set_mode(store, next)
}
