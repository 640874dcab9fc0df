//! Text provider for line-based edge lists implementing [`EdgeSource`].
//!
//! Each line is searched for an edge of the form `NodeX;NodeY`, so edges may
//! sit among other CSV columns. The pattern can be replaced as long as it
//! defines `left` and `right` capture groups.

use std::io::BufRead;

use nodegap_core::{Edge, EdgeSource};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Pattern matching `NodeX;NodeY` edges.
pub const DEFAULT_EDGE_PATTERN: &str = r"Node(?<left>[0-9]+);Node(?<right>[0-9]+)";

/// Errors produced while building an [`EdgeListProvider`].
#[derive(Debug, Error)]
pub enum TextProviderError {
    /// Reading from the underlying source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The edge pattern did not compile.
    #[error("invalid edge pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// Pattern supplied by the caller.
        pattern: String,
        /// Compilation failure reported by `regex`.
        #[source]
        source: regex::Error,
    },
    /// The edge pattern lacks a required named capture group.
    #[error("edge pattern must define a `{group}` capture group")]
    MissingCaptureGroup {
        /// Name of the missing group.
        group: &'static str,
    },
    /// A captured endpoint was not a valid node index.
    #[error("line {line}: `{value}` is not a valid node index")]
    InvalidIndex {
        /// One-based line number.
        line: usize,
        /// Captured text.
        value: String,
    },
    /// A non-blank line did not contain an edge in strict mode.
    #[error("line {line}: no edge found")]
    MalformedLine {
        /// One-based line number.
        line: usize,
    },
    /// The input contained no edges.
    #[error("edge list contains no edges")]
    EmptyInput,
}

/// How lines without an edge are treated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Skip lines that do not contain an edge.
    #[default]
    Lenient,
    /// Reject non-blank lines that do not contain an edge.
    Strict,
}

/// Extracts edges from individual lines.
///
/// # Examples
/// ```
/// use nodegap_core::Edge;
/// use nodegap_providers_text::EdgeLineParser;
///
/// let parser = EdgeLineParser::new();
/// assert_eq!(parser.parse_line("Node3;Node7", 1)?, Some(Edge::new(3, 7)));
/// assert_eq!(parser.parse_line("header", 2)?, None);
/// # Ok::<(), nodegap_providers_text::TextProviderError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EdgeLineParser {
    pattern: Regex,
    mode: LineMode,
}

impl Default for EdgeLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeLineParser {
    /// Creates a lenient parser using [`DEFAULT_EDGE_PATTERN`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_EDGE_PATTERN).expect("default edge pattern compiles"),
            mode: LineMode::default(),
        }
    }

    /// Creates a lenient parser using a custom pattern.
    ///
    /// # Errors
    /// Returns [`TextProviderError::InvalidPattern`] when the pattern does not
    /// compile and [`TextProviderError::MissingCaptureGroup`] when it lacks a
    /// `left` or `right` group.
    ///
    /// # Examples
    /// ```
    /// use nodegap_core::Edge;
    /// use nodegap_providers_text::EdgeLineParser;
    ///
    /// let parser = EdgeLineParser::with_pattern(r"(?<left>\d+)\s*-\s*(?<right>\d+)")?;
    /// assert_eq!(parser.parse_line("4 - 2", 1)?, Some(Edge::new(4, 2)));
    /// # Ok::<(), nodegap_providers_text::TextProviderError>(())
    /// ```
    pub fn with_pattern(pattern: &str) -> Result<Self, TextProviderError> {
        let compiled = Regex::new(pattern).map_err(|source| TextProviderError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        for group in ["left", "right"] {
            if !compiled.capture_names().flatten().any(|name| name == group) {
                return Err(TextProviderError::MissingCaptureGroup { group });
            }
        }
        Ok(Self {
            pattern: compiled,
            mode: LineMode::default(),
        })
    }

    /// Sets how lines without an edge are handled.
    #[must_use]
    pub fn with_mode(mut self, mode: LineMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the configured line mode.
    #[must_use]
    pub fn mode(&self) -> LineMode {
        self.mode
    }

    /// Extracts the edge from `line`, if any. `line_number` is one-based and
    /// only used for error reporting.
    ///
    /// # Errors
    /// Returns [`TextProviderError::InvalidIndex`] when an endpoint does not
    /// fit in `usize` and [`TextProviderError::MalformedLine`] for a non-blank
    /// line without an edge in [`LineMode::Strict`].
    pub fn parse_line(
        &self,
        line: &str,
        line_number: usize,
    ) -> Result<Option<Edge>, TextProviderError> {
        let Some(captures) = self.pattern.captures(line) else {
            if self.mode == LineMode::Strict && !line.trim().is_empty() {
                return Err(TextProviderError::MalformedLine { line: line_number });
            }
            return Ok(None);
        };
        let endpoint = |group: &str| -> Result<usize, TextProviderError> {
            let value = captures.name(group).map_or("", |found| found.as_str());
            value
                .parse::<usize>()
                .map_err(|_| TextProviderError::InvalidIndex {
                    line: line_number,
                    value: value.to_owned(),
                })
        };
        Ok(Some(Edge::new(endpoint("left")?, endpoint("right")?)))
    }
}

/// Edge list loaded from line-based text.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    edges: Vec<Edge>,
    skipped: usize,
}

impl EdgeListProvider {
    /// Creates a provider from edges already in memory.
    ///
    /// # Errors
    /// Returns [`TextProviderError::EmptyInput`] if `edges` is empty.
    ///
    /// # Examples
    /// ```
    /// use nodegap_core::{Edge, EdgeSource};
    /// use nodegap_providers_text::EdgeListProvider;
    ///
    /// let provider = EdgeListProvider::new("demo", vec![Edge::new(0, 1)])?;
    /// assert_eq!(provider.name(), "demo");
    /// assert_eq!(provider.len(), 1);
    /// # Ok::<(), nodegap_providers_text::TextProviderError>(())
    /// ```
    pub fn new(name: impl Into<String>, edges: Vec<Edge>) -> Result<Self, TextProviderError> {
        if edges.is_empty() {
            return Err(TextProviderError::EmptyInput);
        }
        Ok(Self {
            name: name.into(),
            edges,
            skipped: 0,
        })
    }

    /// Reads edges from `reader` with the default lenient parser.
    ///
    /// # Errors
    /// See [`Self::try_from_reader_with`].
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use nodegap_core::EdgeSource;
    /// use nodegap_providers_text::EdgeListProvider;
    ///
    /// let raw = "from;to\nNode0;Node1\nNode1;Node2\n";
    /// let provider = EdgeListProvider::try_from_reader("demo", Cursor::new(raw))?;
    /// assert_eq!(provider.len(), 2);
    /// assert_eq!(provider.skipped(), 1);
    /// # Ok::<(), nodegap_providers_text::TextProviderError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, TextProviderError> {
        Self::try_from_reader_with(name, reader, &EdgeLineParser::new())
    }

    /// Reads edges from `reader` using `parser`.
    ///
    /// # Errors
    /// Returns [`TextProviderError::Io`] if reading fails, any error raised by
    /// [`EdgeLineParser::parse_line`], and [`TextProviderError::EmptyInput`]
    /// when no line contained an edge.
    pub fn try_from_reader_with<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        parser: &EdgeLineParser,
    ) -> Result<Self, TextProviderError> {
        let name = name.into();
        let mut edges = Vec::new();
        let mut skipped = 0;
        for (offset, line) in reader.lines().enumerate() {
            match parser.parse_line(&line?, offset + 1)? {
                Some(edge) => edges.push(edge),
                None => skipped += 1,
            }
        }
        debug!(data_source = %name, edges = edges.len(), skipped, "edge list parsed");
        let mut provider = Self::new(name, edges)?;
        provider.skipped = skipped;
        Ok(provider)
    }

    /// Returns the number of lines that held no edge.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl EdgeSource for EdgeListProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
