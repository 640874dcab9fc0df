//! Gap check orchestration over [`EdgeSource`] implementations.
//!
//! Feeds every edge into a fresh [`DisjointSet`], registering both endpoints
//! before linking them, then summarises the forest once the source is
//! exhausted.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::{debug, info, instrument};

use crate::{
    Result,
    disjoint_set::DisjointSet,
    edge::EdgeSource,
    error::{DisjointSetError, GapCheckError},
    report::CheckReport,
};

/// Entry point for checking an edge source for gaps and disconnection.
///
/// # Examples
/// ```
/// use nodegap_core::{Edge, EdgeSource, GapCheckerBuilder};
///
/// struct Fixed(Vec<Edge>);
///
/// impl EdgeSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn edges(&self) -> &[Edge] { &self.0 }
/// }
///
/// let checker = GapCheckerBuilder::new().build().expect("builder must succeed");
/// let report = checker
///     .run(&Fixed(vec![Edge::new(0, 1), Edge::new(1, 2)]))
///     .expect("run must succeed");
/// assert_eq!(report.node_count(), 3);
/// assert_eq!(report.link_count(), 2);
/// assert!(report.passes());
/// ```
#[derive(Debug, Clone)]
pub struct GapChecker {
    initial_capacity: NonZeroUsize,
    max_nodes: Option<NonZeroUsize>,
}

impl GapChecker {
    pub(crate) fn new(initial_capacity: NonZeroUsize, max_nodes: Option<NonZeroUsize>) -> Self {
        Self {
            initial_capacity,
            max_nodes,
        }
    }

    /// Returns the number of node slots allocated before ingestion.
    #[must_use]
    pub fn initial_capacity(&self) -> NonZeroUsize {
        self.initial_capacity
    }

    /// Returns the node limit, if any.
    #[must_use]
    pub fn max_nodes(&self) -> Option<NonZeroUsize> {
        self.max_nodes
    }

    /// Builds the disjoint-set forest for `source` without summarising it.
    ///
    /// # Errors
    /// Returns [`GapCheckError::Graph`] when an edge references an index the
    /// forest cannot address.
    pub fn build_forest<S: EdgeSource>(&self, source: &S) -> Result<DisjointSet> {
        let mut forest = DisjointSet::with_limit(self.initial_capacity, self.max_nodes);
        let merges = forest
            .ingest(source.edges().iter().copied())
            .map_err(|error| wrap_error(source, error))?;
        debug!(
            merges,
            capacity = forest.capacity(),
            "edge source ingested"
        );
        Ok(forest)
    }

    /// Ingests `source` and reports on gaps and connectivity.
    ///
    /// # Errors
    /// Returns [`GapCheckError::Graph`] when an edge references an index the
    /// forest cannot address.
    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(
            data_source = %source.name(),
            edges = source.len(),
            max_nodes = ?self.max_nodes,
        ),
    )]
    pub fn run<S: EdgeSource>(&self, source: &S) -> Result<CheckReport> {
        let forest = self.build_forest(source)?;
        let report = CheckReport::from_forest(&forest);
        info!(
            nodes = report.node_count(),
            links = report.link_count(),
            components = report.components(),
            missing = report.missing().len(),
            passes = report.passes(),
            "gap check completed"
        );
        Ok(report)
    }
}

fn wrap_error<S: EdgeSource>(source: &S, error: DisjointSetError) -> GapCheckError {
    GapCheckError::Graph {
        data_source: Arc::from(source.name()),
        error,
    }
}
