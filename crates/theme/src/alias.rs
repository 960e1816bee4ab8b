use figtok_protocol::{ThemeMode, TokenTables};
use tracing::debug;

/// How a requested mode reached the concrete table mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    /// The requested mode is a table mode.
    Direct,
    /// A legacy alias mapped onto its concrete mode.
    Alias,
    /// The alias target is missing from the tables; `preferred` was wanted.
    FellBack { preferred: ThemeMode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasResolution {
    pub requested: ThemeMode,
    pub concrete: ThemeMode,
    pub path: ResolutionPath,
}

impl AliasResolution {
    pub fn used_fallback(&self) -> bool {
        matches!(self.path, ResolutionPath::FellBack { .. })
    }
}

/// Map a requested mode onto the table mode whose tokens it reads.
///
/// `light` reads `docket`. `dark` reads `shadcn-dark` when the tables carry it
/// and `web` otherwise.
pub fn resolve_alias(mode: ThemeMode, tables: &TokenTables) -> AliasResolution {
    let (concrete, path) = match mode {
        ThemeMode::Light => (ThemeMode::Docket, ResolutionPath::Alias),
        ThemeMode::Dark if tables.has_mode(ThemeMode::ShadcnDark.as_str()) => {
            (ThemeMode::ShadcnDark, ResolutionPath::Alias)
        }
        ThemeMode::Dark => {
            debug!("no shadcn-dark tokens, dark mode falls back to web");
            (
                ThemeMode::Web,
                ResolutionPath::FellBack {
                    preferred: ThemeMode::ShadcnDark,
                },
            )
        }
        concrete => (concrete, ResolutionPath::Direct),
    };
    AliasResolution {
        requested: mode,
        concrete,
        path,
    }
}
