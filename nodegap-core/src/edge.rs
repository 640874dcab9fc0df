//! Edge values and the abstraction over producers of edge streams.

/// An undirected edge between two node indices.
///
/// # Examples
/// ```
/// use nodegap_core::Edge;
///
/// let edge = Edge::new(3, 1);
/// assert_eq!((edge.left(), edge.right()), (3, 1));
/// assert_eq!(Edge::from((3, 1)), edge);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    left: usize,
    right: usize,
}

impl Edge {
    /// Creates an edge from its two endpoints.
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Returns the first endpoint as it appeared in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn left(&self) -> usize { self.left }

    /// Returns the second endpoint as it appeared in the input.
    #[must_use]
    #[rustfmt::skip]
    pub const fn right(&self) -> usize { self.right }
}

impl From<(usize, usize)> for Edge {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}

/// Abstraction over a named collection of edges.
///
/// # Examples
/// ```
/// use nodegap_core::{Edge, EdgeSource};
///
/// struct Fixed(Vec<Edge>);
///
/// impl EdgeSource for Fixed {
///     fn name(&self) -> &str { "fixed" }
///     fn edges(&self) -> &[Edge] { &self.0 }
/// }
///
/// let src = Fixed(vec![Edge::new(0, 1), Edge::new(1, 2)]);
/// assert_eq!(src.len(), 2);
/// assert!(!src.is_empty());
/// ```
pub trait EdgeSource {
    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the edges in input order.
    fn edges(&self) -> &[Edge];

    /// Returns the number of edges in the source.
    #[must_use]
    fn len(&self) -> usize {
        self.edges().len()
    }

    /// Returns whether the source contains no edges.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.edges().is_empty()
    }
}
