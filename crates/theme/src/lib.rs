//! Theme runtime for generated token tables.
//!
//! ```text
//! KeyValueStore ──► mode::active_mode ──► alias::resolve_alias ──► Palette ──► CSS
//!     ▲                                                    (TokenTables)
//!     └── set_mode / cycle_mode / toggle_mode
//! ```
//!
//! The store is injected, so the same runtime works against an in-memory map
//! in tests and a JSON state file from the command line.

pub mod alias;
pub mod mode;
pub mod palette;
pub mod runtime;
pub mod store;

pub use alias::{AliasResolution, ResolutionPath, resolve_alias};
pub use mode::{
    CYCLE_ORDER, ColorScheme, DEFAULT_MODE, THEME_KEY, active_mode, cycle_mode, set_mode,
    toggle_mode,
};
pub use palette::{
    FallbackReason, Palette, ResolvedValue, TokenSource, ValueSource, get_semantic_value,
    semantic_value,
};
pub use runtime::{AppliedTheme, ThemeRuntime};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
