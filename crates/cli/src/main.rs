//! `figtok`: generate design-token modules and theme CSS.

mod cli;
mod commands;
mod logging;
mod summary;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_css, run_generate, run_mode};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    let result = match &cli.command {
        None => run_generate(&cli.generate).map(|outcome| summary::generate_summary(&outcome)),
        Some(Command::Css(args)) => run_css(args).map(|applied| summary::css_output(&applied)),
        Some(Command::Mode(args)) => run_mode(args).map(summary::mode_summary),
    };

    match result {
        Ok(output) => {
            print_output(&output);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_output(output: &str) {
    print!("{output}");
}

/// `-v`/`-q` given on the command line take precedence over `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: io::stderr().is_terminal(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
    }
}
