pub mod theme;
pub mod tokens;
pub mod types;

pub use theme::{CanonicalKey, ThemeMode, UnknownThemeMode};
pub use tokens::{ColorValue, RawEntry, SemanticToken, TokenTables, normalize_token_name};
pub use types::{Hsl, HslParseError};
