//! Growable union-find forest over numerically indexed nodes.
//!
//! Nodes are registered lazily on first reference, so the forest grows as the
//! edge stream reveals higher indices. Backing storage doubles in length until
//! the requested index is addressable; new slots start unregistered.
//!
//! Root lookup is iterative with a second pass that points every visited node
//! directly at the root. Union is by rank; when ranks tie the lower root index
//! survives so the outcome does not depend on argument order.
//!
//! A slot records its parent as `Option<usize>`. `None` marks an index that
//! has never been registered, which is how gaps in the numbering are detected.

use std::num::NonZeroUsize;

use tracing::debug;

use crate::{edge::Edge, error::DisjointSetError};

#[cfg(test)]
mod property;
#[cfg(test)]
mod tests;

type DisjointSetResult<T> = core::result::Result<T, DisjointSetError>;

/// Backing capacity of a freshly constructed [`DisjointSet`].
pub const DEFAULT_CAPACITY: usize = 4;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Node {
    parent: Option<usize>,
    rank: u8,
}

/// Union-find forest with lazy registration and gap diagnostics.
///
/// # Examples
/// ```
/// use nodegap_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// for index in 0..4 {
///     set.register(index)?;
/// }
/// set.union(0, 1)?;
/// set.union(2, 3)?;
/// assert!(set.connected(0, 1)?);
/// assert!(!set.connected(1, 2)?);
/// assert_eq!(set.link_count(), 2);
/// assert!(!set.has_gaps());
/// # Ok::<(), nodegap_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    nodes: Vec<Node>,
    node_count: usize,
    link_count: usize,
    components: usize,
    max_nodes: Option<NonZeroUsize>,
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl DisjointSet {
    /// Creates an empty forest with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty forest with at least `capacity` slots (minimum one).
    ///
    /// # Examples
    /// ```
    /// use nodegap_core::DisjointSet;
    ///
    /// assert_eq!(DisjointSet::with_capacity(16).capacity(), 16);
    /// assert_eq!(DisjointSet::with_capacity(0).capacity(), 1);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: vec![Node::default(); capacity.max(1)],
            node_count: 0,
            link_count: 0,
            components: 0,
            max_nodes: None,
        }
    }

    pub(crate) fn with_limit(capacity: NonZeroUsize, max_nodes: Option<NonZeroUsize>) -> Self {
        let capacity = max_nodes.map_or(capacity, |max| capacity.min(max));
        let mut set = Self::with_capacity(capacity.get());
        set.max_nodes = max_nodes;
        set
    }

    /// Returns one past the highest registered index.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of union calls, including ones that merged nothing.
    #[must_use]
    pub const fn link_count(&self) -> usize {
        self.link_count
    }

    /// Returns the number of disjoint components among registered nodes.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the number of slots currently addressable without growth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether `index` has been registered.
    #[must_use]
    pub fn is_registered(&self, index: usize) -> bool {
        self.nodes
            .get(index)
            .is_some_and(|node| node.parent.is_some())
    }

    /// Returns the rank of a registered node.
    #[must_use]
    pub fn rank(&self, index: usize) -> Option<u8> {
        self.nodes
            .get(index)
            .filter(|node| node.parent.is_some())
            .map(|node| node.rank)
    }

    /// Registers `index`, growing storage when required.
    ///
    /// A node seen for the first time becomes its own root. Registering an
    /// already known node is a no-op.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::IndexOverflow`] when `index + 1` does not fit
    /// in `usize`, [`DisjointSetError::CapacityExceeded`] when a node limit is
    /// configured and `index` lies beyond it, and
    /// [`DisjointSetError::AllocationFailed`] when growth cannot allocate.
    pub fn register(&mut self, index: usize) -> DisjointSetResult<()> {
        let required = index
            .checked_add(1)
            .ok_or(DisjointSetError::IndexOverflow { index })?;
        if let Some(max) = self.max_nodes {
            if required > max.get() {
                return Err(DisjointSetError::CapacityExceeded {
                    index,
                    max_nodes: max.get(),
                });
            }
        }
        self.ensure_capacity(required)?;

        let node = &mut self.nodes[index];
        if node.parent.is_none() {
            node.parent = Some(index);
            self.components += 1;
        }
        self.node_count = self.node_count.max(required);
        Ok(())
    }

    /// Returns the root of the component containing `index`.
    ///
    /// Every node on the walked path is re-pointed at the root before
    /// returning.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when `index` was never
    /// registered.
    pub fn find_root(&mut self, index: usize) -> DisjointSetResult<usize> {
        self.ensure_registered(index)?;

        let mut root = index;
        while self.parent(root) != root {
            root = self.parent(root);
        }

        let mut node = index;
        while node != root {
            let parent = self.parent(node);
            self.nodes[node].parent = Some(root);
            node = parent;
        }

        Ok(root)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The link counter advances on every successful call, even when both
    /// nodes already share a root. Returns whether two components merged.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when either node was never
    /// registered. The link counter is left unchanged in that case.
    pub fn union(&mut self, left: usize, right: usize) -> DisjointSetResult<bool> {
        let mut left = self.find_root(left)?;
        let mut right = self.find_root(right)?;
        self.link_count += 1;

        if left == right {
            return Ok(false);
        }

        let left_rank = self.nodes[left].rank;
        let right_rank = self.nodes[right].rank;
        if left_rank < right_rank || (left_rank == right_rank && right < left) {
            std::mem::swap(&mut left, &mut right);
        }

        self.nodes[right].parent = Some(left);
        if left_rank == right_rank {
            let rank = &mut self.nodes[left].rank;
            *rank = rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns whether `left` and `right` belong to the same component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::Unregistered`] when either node was never
    /// registered.
    pub fn connected(&mut self, left: usize, right: usize) -> DisjointSetResult<bool> {
        Ok(self.find_root(left)? == self.find_root(right)?)
    }

    /// Returns whether some index below [`Self::node_count`] was never
    /// registered.
    ///
    /// # Examples
    /// ```
    /// use nodegap_core::DisjointSet;
    ///
    /// let mut set = DisjointSet::new();
    /// assert!(!set.has_gaps());
    /// set.register(0)?;
    /// set.register(2)?;
    /// assert!(set.has_gaps());
    /// set.register(1)?;
    /// assert!(!set.has_gaps());
    /// # Ok::<(), nodegap_core::DisjointSetError>(())
    /// ```
    #[must_use]
    pub fn has_gaps(&self) -> bool {
        self.registered_range()
            .iter()
            .any(|node| node.parent.is_none())
    }

    /// Returns every unregistered index below [`Self::node_count`] in
    /// ascending order.
    #[must_use]
    pub fn missing_indices(&self) -> Vec<usize> {
        self.registered_range()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns whether all registered nodes share one component.
    #[must_use]
    pub const fn is_single_component(&self) -> bool {
        self.components <= 1
    }

    /// Registers both endpoints of each edge and unions them.
    ///
    /// Returns the number of edges that merged two components.
    ///
    /// # Errors
    /// Propagates the first [`DisjointSetError`] raised by [`Self::register`].
    /// Edges before the failing one remain applied.
    ///
    /// # Examples
    /// ```
    /// use nodegap_core::{DisjointSet, Edge};
    ///
    /// let mut set = DisjointSet::new();
    /// let merges = set.ingest([(0, 1), (1, 2), (2, 0)].map(Edge::from))?;
    /// assert_eq!(merges, 2);
    /// assert_eq!(set.link_count(), 3);
    /// # Ok::<(), nodegap_core::DisjointSetError>(())
    /// ```
    pub fn ingest<I>(&mut self, edges: I) -> DisjointSetResult<usize>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut merges = 0;
        for edge in edges {
            self.register(edge.left())?;
            self.register(edge.right())?;
            if self.union(edge.left(), edge.right())? {
                merges += 1;
            }
        }
        Ok(merges)
    }

    fn registered_range(&self) -> &[Node] {
        self.nodes.get(..self.node_count).unwrap_or(&[])
    }

    fn ensure_registered(&self, index: usize) -> DisjointSetResult<()> {
        if self.is_registered(index) {
            Ok(())
        } else {
            Err(DisjointSetError::Unregistered {
                index,
                node_count: self.node_count,
            })
        }
    }

    // Only registered nodes ever become parents, so a walk starting from a
    // registered node never reaches an empty slot.
    fn parent(&self, index: usize) -> usize {
        self.nodes[index].parent.unwrap_or(index)
    }

    fn ensure_capacity(&mut self, required: usize) -> DisjointSetResult<()> {
        let current = self.nodes.len();
        if required <= current {
            return Ok(());
        }

        let mut capacity = current.max(1);
        while capacity < required {
            capacity = capacity.checked_mul(2).unwrap_or(required);
        }
        if let Some(max) = self.max_nodes {
            capacity = capacity.min(max.get());
        }

        self.nodes
            .try_reserve_exact(capacity - current)
            .map_err(|_| DisjointSetError::AllocationFailed { capacity })?;
        self.nodes.resize(capacity, Node::default());
        debug!(from = current, to = capacity, "grew disjoint-set storage");
        Ok(())
    }
}
