use figtok_protocol::{ThemeMode, TokenTables};
use tracing::info;

use crate::mode::{self, ColorScheme};
use crate::palette::Palette;
use crate::store::{KeyValueStore, StoreError};

/// What the styling layer needs to show a mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTheme {
    pub mode: ThemeMode,
    /// Class for the document root, if the mode has one.
    pub root_class: Option<&'static str>,
    pub palette: Palette,
}

impl AppliedTheme {
    /// The palette as a `:root` rule.
    pub fn css(&self) -> String {
        format!(":root {{\n{}\n}}\n", self.palette.css_variables())
    }
}

/// Token tables plus the persisted mode selection.
#[derive(Debug)]
pub struct ThemeRuntime<S> {
    tables: TokenTables,
    store: S,
    scheme: ColorScheme,
}

impl<S: KeyValueStore> ThemeRuntime<S> {
    pub fn new(tables: TokenTables, store: S, scheme: ColorScheme) -> Self {
        Self {
            tables,
            store,
            scheme,
        }
    }

    pub fn tables(&self) -> &TokenTables {
        &self.tables
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Change the environment preference. Only matters while nothing is
    /// persisted.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    pub fn active_mode(&self) -> ThemeMode {
        mode::active_mode(&self.store, self.scheme)
    }

    pub fn palette(&self, mode: ThemeMode) -> Palette {
        Palette::build(&self.tables, mode)
    }

    pub fn apply(&self, mode: ThemeMode) -> AppliedTheme {
        AppliedTheme {
            mode,
            root_class: mode.root_class(),
            palette: self.palette(mode),
        }
    }

    /// The active mode, applied.
    pub fn current(&self) -> AppliedTheme {
        self.apply(self.active_mode())
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<AppliedTheme, StoreError> {
        let mode = mode::set_mode(&mut self.store, mode)?;
        Ok(self.applied(mode))
    }

    pub fn cycle_mode(&mut self) -> Result<AppliedTheme, StoreError> {
        let mode = mode::cycle_mode(&mut self.store, self.scheme)?;
        Ok(self.applied(mode))
    }

    pub fn toggle_mode(&mut self) -> Result<AppliedTheme, StoreError> {
        let mode = mode::toggle_mode(&mut self.store, self.scheme)?;
        Ok(self.applied(mode))
    }

    fn applied(&self, mode: ThemeMode) -> AppliedTheme {
        let applied = self.apply(mode);
        info!(
            %mode,
            concrete = %applied.palette.resolution.concrete,
            root_class = applied.root_class.unwrap_or(""),
            "theme mode changed"
        );
        applied
    }
}
