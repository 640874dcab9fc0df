//! Command implementations and argument parsing for the nodegap CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use nodegap_core::{CheckReport, EdgeSource, GapCheckError, GapCheckerBuilder};
use nodegap_providers_text::{EdgeLineParser, EdgeListProvider, LineMode, TextProviderError};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "nodegap",
    about = "Check that an edge list covers every node index and forms one component."
)]
pub struct Cli {
    /// Increase diagnostic verbosity (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Check an edge list file.
    Check(CheckCommand),
}

/// Options accepted by the `check` command.
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Path to a text file with one `NodeX;NodeY` edge per line.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,

    /// Fail on non-blank lines that contain no edge instead of skipping them.
    #[arg(long)]
    pub strict: bool,

    /// Regular expression with `left` and `right` capture groups.
    #[arg(long)]
    pub pattern: Option<String>,

    /// Reject node indices at or beyond this limit.
    #[arg(long = "max-nodes", value_parser = clap::value_parser!(usize))]
    pub max_nodes: Option<usize>,

    /// Node slots to allocate before reading edges.
    #[arg(
        long = "initial-capacity",
        default_value_t = nodegap_core::DEFAULT_CAPACITY,
        value_parser = clap::value_parser!(usize),
    )]
    pub initial_capacity: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge list ingestion failed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// Core gap check failed.
    #[error(transparent)]
    Core(#[from] GapCheckError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the edge source.
    pub data_source: String,
    /// Lines that held no edge.
    pub skipped_lines: usize,
    /// Gap and connectivity findings.
    pub report: CheckReport,
}

impl ExecutionSummary {
    /// Returns whether the checked graph passed.
    #[must_use]
    pub fn passes(&self) -> bool {
        self.report.passes()
    }
}

/// Process exit status for a graph that passed the check.
pub const EXIT_PASS: u8 = 0;
/// Process exit status for a graph with gaps or several components.
pub const EXIT_FAIL: u8 = 1;
/// Process exit status when logging, loading, or checking failed.
pub const EXIT_ERROR: u8 = 2;

/// Maps the outcome of a run to the process exit status.
///
/// `Ok` carries whether the graph passed. Any error, including a failure to
/// set up logging, maps to [`EXIT_ERROR`] so it can never be mistaken for a
/// failing verdict.
///
/// # Examples
/// ```
/// use nodegap_cli::cli::{EXIT_ERROR, EXIT_FAIL, EXIT_PASS, exit_status};
///
/// assert_eq!(exit_status::<()>(&Ok(true)), EXIT_PASS);
/// assert_eq!(exit_status::<()>(&Ok(false)), EXIT_FAIL);
/// assert_eq!(exit_status(&Err::<bool, _>("boom")), EXIT_ERROR);
/// ```
#[must_use]
pub const fn exit_status<E>(outcome: &Result<bool, E>) -> u8 {
    match outcome {
        Ok(true) => EXIT_PASS,
        Ok(false) => EXIT_FAIL,
        Err(_) => EXIT_ERROR,
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading or checking the edge list fails. A graph
/// that merely fails the check is reported through the summary, not as an
/// error.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use nodegap_cli::cli::{CheckCommand, Cli, Command, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "Node0;Node1\nNode1;Node2\n")?;
/// let cli = Cli {
///     verbose: 0,
///     command: Command::Check(CheckCommand {
///         path: file.path().to_path_buf(),
///         name: None,
///         strict: false,
///         pattern: None,
///         max_nodes: None,
///         initial_capacity: 4,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(summary.passes());
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Check(check) => {
            Span::current().record("command", field::display("check"));
            run_check(check)
        }
    }
}

#[instrument(
    name = "cli.check",
    err,
    skip(command),
    fields(path = field::Empty, strict = command.strict, override_name = field::Empty),
)]
pub(super) fn run_check(command: CheckCommand) -> Result<ExecutionSummary, CliError> {
    let CheckCommand {
        path,
        name,
        strict,
        pattern,
        max_nodes,
        initial_capacity,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let checker = GapCheckerBuilder::new()
        .with_initial_capacity(initial_capacity)
        .with_max_nodes(max_nodes)
        .build()?;
    let parser = build_parser(pattern.as_deref(), strict)?;

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_edge_reader(&path)?;
    let provider = EdgeListProvider::try_from_reader_with(chosen_name, reader, &parser)?;
    let report = checker.run(&provider)?;

    info!(
        data_source = provider.name(),
        passes = report.passes(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: provider.name().to_owned(),
        skipped_lines: provider.skipped(),
        report,
    })
}

pub(super) fn build_parser(
    pattern: Option<&str>,
    strict: bool,
) -> Result<EdgeLineParser, TextProviderError> {
    let parser = match pattern {
        Some(pattern) => EdgeLineParser::with_pattern(pattern)?,
        None => EdgeLineParser::new(),
    };
    let mode = if strict {
        LineMode::Strict
    } else {
        LineMode::Lenient
    };
    Ok(parser.with_mode(mode))
}

#[instrument(name = "cli.open_edge_reader", err, fields(path = field::Empty))]
pub(super) fn open_edge_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "edges".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Missing indices are listed comma-separated, or `-` when there are none.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let report = &summary.report;
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "skipped lines: {}", summary.skipped_lines)?;
    writeln!(writer, "nodes: {}", report.node_count())?;
    writeln!(writer, "links: {}", report.link_count())?;
    writeln!(writer, "components: {}", report.components())?;
    if report.missing().is_empty() {
        writeln!(writer, "missing: -")?;
    } else {
        let missing: Vec<String> = report.missing().iter().map(ToString::to_string).collect();
        writeln!(writer, "missing: {}", missing.join(","))?;
    }
    let verdict = if summary.passes() { "pass" } else { "fail" };
    writeln!(writer, "verdict: {verdict}")?;
    Ok(())
}
