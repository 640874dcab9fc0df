//! Property-based tests for the disjoint-set forest.
//!
//! Edge streams are generated over a handful of topologies and checked against
//! a naive label-propagation oracle.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::{Edge, test_utils::suite_proptest_config};

use super::DisjointSet;

const MAX_NODES: usize = 48;

/// Shape of the generated edge stream.
#[derive(Clone, Copy, Debug, Arbitrary)]
enum Topology {
    /// Uniformly random pairs.
    #[weight(3)]
    Random,
    /// A path through consecutive indices.
    Chain,
    /// Every node linked to a single hub.
    Star,
    /// Two halves that never touch.
    Split,
}

fn edges_for(topology: Topology, nodes: usize, pairs: &[(usize, usize)]) -> Vec<Edge> {
    match topology {
        Topology::Random => pairs
            .iter()
            .map(|&(left, right)| Edge::new(left % nodes, right % nodes))
            .collect(),
        Topology::Chain => (1..nodes).map(|index| Edge::new(index - 1, index)).collect(),
        Topology::Star => (1..nodes).map(|index| Edge::new(index, 0)).collect(),
        Topology::Split => {
            let half = nodes / 2;
            (1..nodes)
                .filter(|&index| index != half)
                .map(|index| Edge::new(index - 1, index))
                .collect()
        }
    }
}

fn edge_stream() -> impl Strategy<Value = Vec<Edge>> {
    (
        any::<Topology>(),
        2..MAX_NODES,
        prop::collection::vec((0..MAX_NODES, 0..MAX_NODES), 0..96),
    )
        .prop_map(|(topology, nodes, pairs)| edges_for(topology, nodes, &pairs))
}

/// Labels every index by the smallest index reachable from it.
fn oracle_labels(node_count: usize, edges: &[Edge]) -> Vec<usize> {
    let mut labels: Vec<usize> = (0..node_count).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for edge in edges {
            let low = labels[edge.left()].min(labels[edge.right()]);
            for endpoint in [edge.left(), edge.right()] {
                if labels[endpoint] != low {
                    labels[endpoint] = low;
                    changed = true;
                }
            }
        }
    }
    labels
}

fn same_partition(set: &mut DisjointSet, labels: &[usize]) -> bool {
    (0..labels.len()).all(|left| {
        (0..labels.len()).all(|right| {
            if !set.is_registered(left) || !set.is_registered(right) {
                return true;
            }
            let connected = set.connected(left, right).unwrap_or(false);
            connected == (labels[left] == labels[right])
        })
    })
}

fn build(edges: &[Edge]) -> DisjointSet {
    let mut set = DisjointSet::new();
    set.ingest(edges.iter().copied())
        .expect("generated edges stay within bounds");
    set
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn connectivity_matches_oracle(edges in edge_stream()) {
        let mut set = build(&edges);
        let labels = oracle_labels(set.node_count(), &edges);
        prop_assert!(same_partition(&mut set, &labels));

        let mut roots: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|&(index, _)| set.is_registered(index))
            .map(|(_, &label)| label)
            .collect();
        roots.sort_unstable();
        roots.dedup();
        prop_assert_eq!(set.component_count(), roots.len());
    }

    #[test]
    fn union_is_symmetric(edges in edge_stream()) {
        let reversed: Vec<Edge> = edges
            .iter()
            .map(|edge| Edge::new(edge.right(), edge.left()))
            .collect();
        let mut forward = build(&edges);
        let mut backward = build(&reversed);

        prop_assert_eq!(forward.node_count(), backward.node_count());
        for left in 0..forward.node_count() {
            for right in 0..forward.node_count() {
                if forward.is_registered(left) && forward.is_registered(right) {
                    prop_assert_eq!(
                        forward.connected(left, right).ok(),
                        backward.connected(left, right).ok(),
                    );
                }
            }
        }
    }

    #[test]
    fn counters_are_monotonic(edges in edge_stream()) {
        let mut set = DisjointSet::new();
        for edge in &edges {
            let nodes_before = set.node_count();
            set.register(edge.left()).expect("index fits");
            set.register(edge.right()).expect("index fits");
            prop_assert!(set.node_count() >= nodes_before);

            let links_before = set.link_count();
            set.union(edge.left(), edge.right()).expect("both endpoints registered");
            prop_assert_eq!(set.link_count(), links_before + 1);
        }
        prop_assert_eq!(set.link_count(), edges.len());
    }

    #[test]
    fn rank_bounds_tree_height(edges in edge_stream()) {
        let set = build(&edges);
        for index in 0..set.node_count() {
            let mut height = 0_u32;
            let mut node = index;
            while set.is_registered(node) && set.parent(node) != node {
                let parent = set.parent(node);
                prop_assert!(set.rank(parent) > set.rank(node));
                node = parent;
                height += 1;
            }
            if let Some(rank) = set.rank(node) {
                prop_assert!(height <= u32::from(rank));
            }
        }
    }

    #[test]
    fn growth_is_transparent(edges in edge_stream(), far in 1_000_usize..5_000) {
        let mut set = build(&edges);
        let snapshot: Vec<_> = (0..set.node_count())
            .map(|index| (set.find_root(index).ok(), set.rank(index)))
            .collect();

        set.register(far).expect("index fits");

        let after: Vec<_> = (0..snapshot.len())
            .map(|index| (set.find_root(index).ok(), set.rank(index)))
            .collect();
        prop_assert_eq!(snapshot, after);
        prop_assert!(set.has_gaps());
    }
}
