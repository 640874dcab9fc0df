//! Command-line interface orchestration for nodegap.
//!
//! The CLI offers a `check` command that loads a `NodeX;NodeY` edge list and
//! reports whether its node numbering is contiguous and connected.

mod commands;

pub use commands::{
    CheckCommand, Cli, CliError, Command, EXIT_ERROR, EXIT_FAIL, EXIT_PASS, ExecutionSummary,
    exit_status, render_summary, run_cli,
};
