//! Benchmark support crate for nodegap.
//!
//! Generates deterministic synthetic edge streams for the Criterion
//! benchmarks of the disjoint-set forest.

use nodegap_core::Edge;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shape of a synthetic edge stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeShape {
    /// Uniformly random endpoints; usually leaves several components.
    Random,
    /// A single path visiting every node in shuffled order.
    ShuffledChain,
}

impl EdgeShape {
    /// Label used in benchmark identifiers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::ShuffledChain => "shuffled_chain",
        }
    }
}

/// Generates `edge_count` edges over `node_count` nodes.
///
/// [`EdgeShape::ShuffledChain`] ignores `edge_count` and always yields
/// `node_count - 1` edges. Returns no edges when `node_count` is zero.
///
/// # Examples
/// ```
/// use nodegap_benches::{EdgeShape, generate_edges};
///
/// let edges = generate_edges(EdgeShape::ShuffledChain, 10, 0, 7);
/// assert_eq!(edges.len(), 9);
/// ```
#[must_use]
pub fn generate_edges(
    shape: EdgeShape,
    node_count: usize,
    edge_count: usize,
    seed: u64,
) -> Vec<Edge> {
    if node_count == 0 {
        return Vec::new();
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    match shape {
        EdgeShape::Random => (0..edge_count)
            .map(|_| Edge::new(rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
            .collect(),
        EdgeShape::ShuffledChain => {
            let mut order: Vec<usize> = (0..node_count).collect();
            order.shuffle(&mut rng);
            order
                .iter()
                .zip(order.iter().skip(1))
                .map(|(&left, &right)| Edge::new(left, right))
                .collect()
        }
    }
}
