//! Command implementations. Nothing here prints; `main` reports the results.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figtok_core::GenerationReport;
use figtok_core::codegen::{self, ModuleHeader, OutputFormat};
use figtok_protocol::{ThemeMode, TokenTables};
use figtok_theme::{
    AppliedTheme, ColorScheme, FileStore, KeyValueStore, MemoryStore, ThemeRuntime,
};
use tracing::{debug, info};

use crate::cli::{CssArgs, GenerateArgs, ModeAction, ModeArgs, StateArgs};

pub struct GenerateOutcome {
    pub output: PathBuf,
    pub format: OutputFormat,
    pub report: GenerationReport,
}

/// Read the export, build the tables and write the module.
///
/// Nothing is written when the export cannot be read or lacks a required
/// collection.
pub fn run_generate(args: &GenerateArgs) -> Result<GenerateOutcome> {
    let data = fs::read(&args.input)
        .with_context(|| format!("failed to read export {}", args.input.display()))?;
    let generation = figtok_core::generate(&data)
        .with_context(|| format!("failed to process {}", args.input.display()))?;

    let format = args
        .format
        .map_or_else(|| OutputFormat::from_path(&args.output), Into::into);
    let source = args
        .source
        .clone()
        .unwrap_or_else(|| args.input.display().to_string());
    let module = codegen::render(format, &generation.tables, &ModuleHeader::new(source))
        .context("failed to render token module")?;

    write_output(&args.output, &module)?;
    info!(output = %args.output.display(), ?format, "wrote token module");

    Ok(GenerateOutcome {
        output: args.output.clone(),
        format,
        report: generation.report,
    })
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Tables from a JSON token module, or generated from an export.
fn load_tables(tokens: Option<&Path>, input: &Path) -> Result<TokenTables> {
    if let Some(tokens) = tokens {
        let text = fs::read_to_string(tokens)
            .with_context(|| format!("failed to read tokens {}", tokens.display()))?;
        return TokenTables::from_json(&text)
            .with_context(|| format!("failed to parse tokens {}", tokens.display()));
    }
    debug!(input = %input.display(), "generating tables from export");
    let data =
        fs::read(input).with_context(|| format!("failed to read export {}", input.display()))?;
    let generation = figtok_core::generate(&data)
        .with_context(|| format!("failed to process {}", input.display()))?;
    Ok(generation.tables)
}

fn color_scheme(state: &StateArgs) -> ColorScheme {
    ColorScheme::from_prefers_dark(state.prefers_dark)
}

/// The `:root` CSS rule of the requested or persisted mode.
pub fn run_css(args: &CssArgs) -> Result<AppliedTheme> {
    let tables = load_tables(args.tokens.as_deref(), &args.input)?;
    let scheme = color_scheme(&args.state);
    let applied = match &args.state.state {
        Some(path) => applied_theme(ThemeRuntime::new(tables, open_store(path)?, scheme), args.mode),
        None => applied_theme(ThemeRuntime::new(tables, MemoryStore::new(), scheme), args.mode),
    };
    Ok(applied)
}

fn applied_theme<S: KeyValueStore>(
    runtime: ThemeRuntime<S>,
    mode: Option<ThemeMode>,
) -> AppliedTheme {
    match mode {
        Some(mode) => runtime.apply(mode),
        None => runtime.current(),
    }
}

fn open_store(path: &Path) -> Result<FileStore> {
    FileStore::open(path).with_context(|| format!("failed to open state {}", path.display()))
}

/// Show or change the persisted mode.
pub fn run_mode(args: &ModeArgs) -> Result<ThemeMode> {
    let scheme = color_scheme(&args.state);
    let action = args.action.unwrap_or(ModeAction::Show);
    match &args.state.state {
        Some(path) => change_mode(&mut open_store(path)?, scheme, action),
        None => change_mode(&mut MemoryStore::new(), scheme, action),
    }
}

fn change_mode<S: KeyValueStore>(
    store: &mut S,
    scheme: ColorScheme,
    action: ModeAction,
) -> Result<ThemeMode> {
    let mode = match action {
        ModeAction::Show => figtok_theme::active_mode(&*store, scheme),
        ModeAction::Set { mode } => figtok_theme::set_mode(store, mode)?,
        ModeAction::Cycle => figtok_theme::cycle_mode(store, scheme)?,
        ModeAction::Toggle => figtok_theme::toggle_mode(store, scheme)?,
    };
    Ok(mode)
}
