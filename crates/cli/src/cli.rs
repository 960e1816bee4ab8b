//! Command line definitions for `figtok`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use figtok_core::codegen::OutputFormat;
use figtok_protocol::ThemeMode;

pub const DEFAULT_INPUT: &str = "export.json";
pub const DEFAULT_OUTPUT: &str = "src/theme/figma-tokens.ts";

#[derive(Parser)]
#[command(
    name = "figtok",
    version,
    about = "Generate design-token modules from a design-tool color variable export",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the CSS variables of a theme mode as a `:root` rule.
    Css(CssArgs),

    /// Show or change the persisted theme mode.
    Mode(ModeArgs),
}

/// Arguments of the default generate run.
#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Design-tool export to read.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Generated module to write.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Module format (default: from the output extension).
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Source label written to the module header (default: the input path).
    #[arg(long, value_name = "LABEL")]
    pub source: Option<String>,
}

#[derive(Args)]
pub struct CssArgs {
    /// Mode to print (default: the persisted mode, see --state).
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<ThemeMode>,

    /// Token tables written with `--format json`.
    #[arg(long, value_name = "FILE", conflicts_with = "input")]
    pub tokens: Option<PathBuf>,

    /// Design-tool export to generate tables from.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Args)]
pub struct ModeArgs {
    #[command(subcommand)]
    pub action: Option<ModeAction>,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Subcommand, Clone, Copy)]
pub enum ModeAction {
    /// Print the active mode (default).
    Show,
    /// Persist a mode.
    Set {
        #[arg(value_parser = parse_mode)]
        mode: ThemeMode,
    },
    /// Advance to the next mode of the cycle.
    Cycle,
    /// Switch between dark and the default light mode.
    Toggle,
}

#[derive(Args)]
pub struct StateArgs {
    /// JSON file holding the persisted theme mode.
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Treat the environment as preferring a dark color scheme.
    #[arg(long)]
    pub prefers_dark: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Ts,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Ts => Self::TypeScript,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_mode(value: &str) -> Result<ThemeMode, String> {
    value.parse().map_err(|e| format!("{e}"))
}
