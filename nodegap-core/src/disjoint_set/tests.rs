//! Unit tests for the growable disjoint-set forest.

use std::num::NonZeroUsize;

use rstest::rstest;

use crate::{Edge, error::DisjointSetError};

use super::{DEFAULT_CAPACITY, DisjointSet};

fn registered(count: usize) -> DisjointSet {
    let mut set = DisjointSet::new();
    for index in 0..count {
        set.register(index).expect("registration must succeed");
    }
    set
}

#[test]
fn new_set_is_empty() {
    let set = DisjointSet::new();
    assert_eq!(set.capacity(), DEFAULT_CAPACITY);
    assert_eq!(set.node_count(), 0);
    assert_eq!(set.link_count(), 0);
    assert_eq!(set.component_count(), 0);
    assert!(!set.is_registered(0));
    assert_eq!(set.rank(0), None);
}

#[test]
fn register_makes_node_its_own_root() {
    let mut set = DisjointSet::new();
    set.register(2).expect("registration must succeed");
    assert_eq!(set.node_count(), 3);
    assert_eq!(set.find_root(2), Ok(2));
    assert_eq!(set.rank(2), Some(0));
    assert_eq!(set.component_count(), 1);
}

#[test]
fn node_zero_is_not_special() {
    let mut set = registered(2);
    assert_eq!(set.find_root(0), Ok(0));
    assert_eq!(set.find_root(1), Ok(1));
    assert!(!set.connected(0, 1).expect("both nodes are registered"));
}

#[test]
fn re_registration_keeps_existing_links() {
    let mut set = registered(3);
    set.union(1, 2).expect("union must succeed");
    let root = set.find_root(2).expect("node is registered");

    set.register(2).expect("registration must succeed");
    set.register(1).expect("registration must succeed");

    assert_eq!(set.find_root(2), Ok(root));
    assert_eq!(set.find_root(1), Ok(root));
    assert_eq!(set.component_count(), 2);
}

#[test]
fn node_count_tracks_highest_index() {
    let mut set = DisjointSet::new();
    set.register(5).expect("registration must succeed");
    set.register(1).expect("registration must succeed");
    assert_eq!(set.node_count(), 6);
}

#[rstest]
#[case::within_capacity(3, DEFAULT_CAPACITY)]
#[case::one_doubling(4, 8)]
#[case::several_doublings(40, 64)]
#[case::exact_power(63, 64)]
fn growth_doubles_until_addressable(#[case] index: usize, #[case] expected: usize) {
    let mut set = DisjointSet::new();
    set.register(index).expect("registration must succeed");
    assert_eq!(set.capacity(), expected);
    assert!(set.capacity() > index);
}

#[test]
fn growth_preserves_roots_and_ranks() {
    let mut set = registered(4);
    set.union(0, 1).expect("union must succeed");
    set.union(2, 3).expect("union must succeed");
    set.union(1, 3).expect("union must succeed");
    let before: Vec<_> = (0..4)
        .map(|index| (set.find_root(index), set.rank(index)))
        .collect();

    set.register(1_000).expect("registration must succeed");

    let after: Vec<_> = (0..4)
        .map(|index| (set.find_root(index), set.rank(index)))
        .collect();
    assert_eq!(before, after);
    assert!(!set.is_registered(999));
}

#[test]
fn find_root_compresses_the_whole_path() {
    let mut set = registered(4);
    // Equal ranks keep the lower root, building 0 <- 1 and 2 <- 3, then 0 <- 2.
    set.union(0, 1).expect("union must succeed");
    set.union(2, 3).expect("union must succeed");
    set.union(0, 2).expect("union must succeed");
    assert_eq!(set.nodes[3].parent, Some(2));

    assert_eq!(set.find_root(3), Ok(0));
    assert_eq!(set.nodes[3].parent, Some(0));
    assert_eq!(set.nodes[2].parent, Some(0));
}

#[test]
fn find_root_is_idempotent() {
    let mut set = registered(6);
    set.ingest([(0, 1), (1, 2), (3, 4)].map(Edge::from))
        .expect("ingest must succeed");
    let (nodes, links) = (set.node_count(), set.link_count());

    for index in 0..6 {
        let first = set.find_root(index).expect("node is registered");
        let second = set.find_root(index).expect("node is registered");
        assert_eq!(first, second);
    }
    assert_eq!(set.node_count(), nodes);
    assert_eq!(set.link_count(), links);
}

#[test]
fn find_root_rejects_unregistered_nodes() {
    let mut set = DisjointSet::new();
    set.register(2).expect("registration must succeed");
    assert_eq!(
        set.find_root(1),
        Err(DisjointSetError::Unregistered {
            index: 1,
            node_count: 3
        })
    );
    assert_eq!(
        set.find_root(10),
        Err(DisjointSetError::Unregistered {
            index: 10,
            node_count: 3
        })
    );
}

#[test]
fn union_attaches_lower_rank_under_higher() {
    let mut set = registered(3);
    set.union(1, 2).expect("union must succeed");
    assert_eq!(set.rank(1), Some(1));

    assert!(set.union(0, 2).expect("union must succeed"));
    assert_eq!(set.find_root(0), Ok(1));
    assert_eq!(set.rank(1), Some(1));
    assert_eq!(set.rank(0), Some(0));
}

#[rstest]
#[case::forward(0, 1)]
#[case::reverse(1, 0)]
fn union_tie_keeps_lower_root(#[case] left: usize, #[case] right: usize) {
    let mut set = registered(2);
    assert!(set.union(left, right).expect("union must succeed"));
    assert_eq!(set.find_root(1), Ok(0));
    assert_eq!(set.rank(0), Some(1));
}

#[test]
fn redundant_union_still_counts_as_link() {
    let mut set = registered(2);
    assert!(set.union(0, 1).expect("union must succeed"));
    assert!(!set.union(1, 0).expect("union must succeed"));
    assert!(!set.union(0, 0).expect("self-loop must succeed"));
    assert_eq!(set.link_count(), 3);
    assert_eq!(set.rank(0), Some(1));
    assert_eq!(set.component_count(), 1);
}

#[test]
fn failed_union_leaves_link_count_untouched() {
    let mut set = registered(2);
    let err = set.union(0, 7).expect_err("unregistered node must fail");
    assert!(matches!(err, DisjointSetError::Unregistered { index: 7, .. }));
    assert_eq!(set.link_count(), 0);
    assert_eq!(set.component_count(), 2);
}

#[test]
fn scenario_two_pairs() {
    let mut set = registered(4);
    set.union(0, 1).expect("union must succeed");
    set.union(2, 3).expect("union must succeed");

    assert_eq!(set.find_root(0), set.find_root(1));
    assert_eq!(set.find_root(2), set.find_root(3));
    assert_ne!(set.find_root(0), set.find_root(2));
    assert_eq!(set.link_count(), 2);
    assert_eq!(set.component_count(), 2);
    assert!(!set.is_single_component());
    assert!(!set.has_gaps());
}

#[test]
fn scenario_chain_is_gap_free() {
    let mut set = registered(4);
    set.union(0, 1).expect("union must succeed");
    set.union(1, 2).expect("union must succeed");
    set.union(2, 3).expect("union must succeed");

    let root = set.find_root(0).expect("node is registered");
    for index in 1..4 {
        assert_eq!(set.find_root(index), Ok(root));
    }
    assert!(set.is_single_component());
    assert!(!set.has_gaps());
    assert!(set.missing_indices().is_empty());
}

#[test]
fn scenario_skipped_index_is_a_gap() {
    let mut set = DisjointSet::new();
    set.ingest([(0, 1), (1, 3)].map(Edge::from))
        .expect("ingest must succeed");

    assert_eq!(set.node_count(), 4);
    assert!(set.has_gaps());
    assert_eq!(set.missing_indices(), vec![2]);
    assert!(set.is_single_component());
}

#[test]
fn scenario_empty_set_has_no_gaps() {
    let set = DisjointSet::new();
    assert!(!set.has_gaps());
    assert!(set.missing_indices().is_empty());
    assert!(set.is_single_component());
}

#[test]
fn gap_at_zero_is_detected() {
    let mut set = DisjointSet::new();
    set.ingest([Edge::new(1, 2)]).expect("ingest must succeed");
    assert_eq!(set.missing_indices(), vec![0]);
}

#[test]
fn unregistered_slots_beyond_node_count_are_not_gaps() {
    let mut set = DisjointSet::with_capacity(32);
    set.ingest([Edge::new(0, 1)]).expect("ingest must succeed");
    assert_eq!(set.capacity(), 32);
    assert!(!set.has_gaps());
}

#[test]
fn ingest_counts_merges() {
    let mut set = DisjointSet::new();
    let merges = set
        .ingest([(0, 1), (2, 3), (1, 0), (3, 1)].map(Edge::from))
        .expect("ingest must succeed");
    assert_eq!(merges, 3);
    assert_eq!(set.link_count(), 4);
    assert_eq!(set.component_count(), 1);
}

#[test]
fn register_rejects_overflowing_index() {
    let mut set = DisjointSet::new();
    assert_eq!(
        set.register(usize::MAX),
        Err(DisjointSetError::IndexOverflow { index: usize::MAX })
    );
    assert_eq!(set.node_count(), 0);
}

#[test]
fn limit_rejects_indices_beyond_max_nodes() {
    let max = NonZeroUsize::new(10).expect("non-zero");
    let capacity = NonZeroUsize::new(DEFAULT_CAPACITY).expect("non-zero");
    let mut set = DisjointSet::with_limit(capacity, Some(max));

    set.register(9).expect("index inside the limit must register");
    assert_eq!(set.capacity(), 10);
    assert_eq!(
        set.register(10),
        Err(DisjointSetError::CapacityExceeded {
            index: 10,
            max_nodes: 10
        })
    );
    assert_eq!(set.node_count(), 10);
}

#[test]
fn limit_clamps_initial_capacity() {
    let max = NonZeroUsize::new(2).expect("non-zero");
    let capacity = NonZeroUsize::new(64).expect("non-zero");
    let set = DisjointSet::with_limit(capacity, Some(max));
    assert_eq!(set.capacity(), 2);
}
