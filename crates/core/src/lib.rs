//! Turns a design-tool color-variable export into token tables.
//!
//! ```text
//!   export.json ─▶ Export ─▶ RawPalette + SemanticModes ─▶ build_tables ─▶ TokenTables ─▶ codegen
//!                              (resolve references)         (hex → HSL)                   (TS / JSON)
//! ```

pub mod builder;
pub mod codegen;
pub mod color;
pub mod export;
pub mod generate;
pub mod resolve;

pub use builder::{Generation, GenerationReport, build_tables};
pub use color::{ColorError, hex_to_hsl, hsl_to_rgb};
pub use export::{Export, ExportError, RawPalette, SemanticModes};
pub use generate::{GenerateError, generate};
pub use resolve::resolve_color_reference;
