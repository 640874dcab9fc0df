//! Outcome of a gap check over an edge source.

use crate::disjoint_set::DisjointSet;

/// Summary of the forest built from an edge source.
///
/// A graph passes when every index below [`Self::node_count`] was referenced
/// by some edge and all referenced nodes form one component. An empty graph
/// passes vacuously.
///
/// # Examples
/// ```
/// use nodegap_core::{CheckReport, DisjointSet, Edge};
///
/// let mut set = DisjointSet::new();
/// set.ingest([(0, 1), (2, 3)].map(Edge::from))?;
/// let report = CheckReport::from_forest(&set);
/// assert!(!report.has_gaps());
/// assert!(!report.is_connected());
/// assert!(!report.passes());
/// # Ok::<(), nodegap_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CheckReport {
    node_count: usize,
    link_count: usize,
    components: usize,
    missing: Vec<usize>,
}

impl CheckReport {
    /// Captures the counters and diagnostics of `forest`.
    #[must_use]
    pub fn from_forest(forest: &DisjointSet) -> Self {
        Self {
            node_count: forest.node_count(),
            link_count: forest.link_count(),
            components: forest.component_count(),
            missing: forest.missing_indices(),
        }
    }

    /// Returns one past the highest node index seen.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges processed.
    #[must_use]
    pub const fn link_count(&self) -> usize {
        self.link_count
    }

    /// Returns the number of components among referenced nodes.
    #[must_use]
    pub const fn components(&self) -> usize {
        self.components
    }

    /// Returns the indices that were never referenced, ascending.
    #[must_use]
    pub fn missing(&self) -> &[usize] {
        &self.missing
    }

    /// Returns whether the node numbering has holes.
    #[must_use]
    pub fn has_gaps(&self) -> bool {
        !self.missing.is_empty()
    }

    /// Returns whether all referenced nodes share one component.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.components <= 1
    }

    /// Returns whether the graph is gap-free and connected.
    #[must_use]
    pub fn passes(&self) -> bool {
        !self.has_gaps() && self.is_connected()
    }
}
