//! Nodegap core library.
//!
//! Tracks connectivity of an edge stream over numerically indexed nodes with a
//! growable disjoint-set forest and reports whether the node numbering is
//! contiguous and the graph forms a single component.

mod builder;
mod checker;
mod disjoint_set;
mod edge;
mod error;
mod report;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::GapCheckerBuilder,
    checker::GapChecker,
    disjoint_set::{DEFAULT_CAPACITY, DisjointSet},
    edge::{Edge, EdgeSource},
    error::{
        DisjointSetError, DisjointSetErrorCode, GapCheckError, GapCheckErrorCode, Result,
    },
    report::CheckReport,
};
