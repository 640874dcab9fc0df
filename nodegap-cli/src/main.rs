//! CLI entry point for nodegap.
//!
//! Parses command-line arguments with clap, initialises logging, runs the gap
//! check, renders the summary to stdout, and maps the verdict and any errors
//! to the exit code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use nodegap_cli::{
    cli::{Cli, CliError, exit_status, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Execute the command, render the summary, and return whether the graph
/// passed.
fn try_main(cli: Cli) -> Result<bool> {
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(summary.passes())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match logging::init_logging(cli.verbose) {
        Ok(()) => try_main(cli).inspect_err(report_command_error),
        Err(err) => {
            report_logging_init_error(&err);
            Err(err.into())
        }
    };
    ExitCode::from(exit_status(&outcome))
}

fn report_command_error(err: &anyhow::Error) {
    let (code, disjoint_set_code) = err
        .downcast_ref::<CliError>()
        .and_then(|cli_error| match cli_error {
            CliError::Core(core) => Some((Some(core.code()), core.disjoint_set_code())),
            _ => None,
        })
        .unwrap_or((None, None));

    let code_field = code.map(|code| field::display(code.as_str()));
    let disjoint_set_code_field = disjoint_set_code.map(|code| field::display(code.as_str()));

    error!(
        error = %err,
        code = code_field,
        disjoint_set_code = disjoint_set_code_field,
        "command execution failed"
    );
}

// Tracing is not available yet, so this is the only direct write to stderr.
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
