//! Builder utilities for configuring [`GapChecker`] instances.
//!
//! Validates storage sizing before any edge is ingested.

use std::num::NonZeroUsize;

use crate::{Result, checker::GapChecker, disjoint_set::DEFAULT_CAPACITY, error::GapCheckError};

/// Configures and constructs [`GapChecker`] instances.
///
/// # Examples
/// ```
/// use nodegap_core::GapCheckerBuilder;
///
/// let checker = GapCheckerBuilder::new()
///     .with_initial_capacity(64)
///     .with_max_nodes(Some(1_000))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(checker.initial_capacity().get(), 64);
/// assert_eq!(checker.max_nodes().map(|max| max.get()), Some(1_000));
/// ```
#[derive(Debug, Clone)]
pub struct GapCheckerBuilder {
    initial_capacity: usize,
    max_nodes: Option<usize>,
}

impl Default for GapCheckerBuilder {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_nodes: None,
        }
    }
}

impl GapCheckerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use nodegap_core::{DEFAULT_CAPACITY, GapCheckerBuilder};
    ///
    /// let builder = GapCheckerBuilder::new();
    /// assert_eq!(builder.initial_capacity(), DEFAULT_CAPACITY);
    /// assert_eq!(builder.max_nodes(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of node slots allocated up front.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Returns the configured initial capacity.
    #[must_use]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Limits how many node indices the checker will address. `None` removes
    /// the limit.
    ///
    /// # Examples
    /// ```
    /// use nodegap_core::GapCheckerBuilder;
    ///
    /// let builder = GapCheckerBuilder::new().with_max_nodes(Some(10));
    /// assert_eq!(builder.max_nodes(), Some(10));
    /// ```
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Returns the configured node limit.
    #[must_use]
    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Validates the configuration and constructs a [`GapChecker`].
    ///
    /// # Errors
    /// Returns [`GapCheckError::InvalidInitialCapacity`] when the initial
    /// capacity is zero and [`GapCheckError::InvalidMaxNodes`] when a node
    /// limit of zero is requested.
    ///
    /// # Examples
    /// ```
    /// use nodegap_core::{GapCheckError, GapCheckerBuilder};
    ///
    /// let err = GapCheckerBuilder::new()
    ///     .with_initial_capacity(0)
    ///     .build()
    ///     .expect_err("zero capacity is rejected");
    /// assert_eq!(err, GapCheckError::InvalidInitialCapacity { got: 0 });
    /// ```
    pub fn build(self) -> Result<GapChecker> {
        let initial_capacity = NonZeroUsize::new(self.initial_capacity).ok_or(
            GapCheckError::InvalidInitialCapacity {
                got: self.initial_capacity,
            },
        )?;
        let max_nodes = self
            .max_nodes
            .map(|max| NonZeroUsize::new(max).ok_or(GapCheckError::InvalidMaxNodes { got: max }))
            .transpose()?;

        Ok(GapChecker::new(initial_capacity, max_nodes))
    }
}
