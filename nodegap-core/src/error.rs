//! Error types for the nodegap core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// A find or union referenced a node that was never registered.
    #[error("node {index} is not registered (node_count is {node_count})")]
    Unregistered {
        /// The index that was looked up.
        index: usize,
        /// Node count at the time of the lookup.
        node_count: usize,
    },
    /// The index is too large for `index + 1` to be represented.
    #[error("node index {index} overflows the addressable range")]
    IndexOverflow {
        /// The offending index.
        index: usize,
    },
    /// The index lies beyond the configured node limit.
    #[error("node index {index} exceeds the limit of {max_nodes} nodes")]
    CapacityExceeded {
        /// The offending index.
        index: usize,
        /// Configured maximum number of addressable nodes.
        max_nodes: usize,
    },
    /// Growing the backing storage failed to allocate.
    #[error("failed to grow node storage to {capacity} slots")]
    AllocationFailed {
        /// Capacity that could not be reserved.
        capacity: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// A find or union referenced a node that was never registered.
        Unregistered => Unregistered { .. } => "DISJOINT_SET_UNREGISTERED",
        /// The index is too large for `index + 1` to be represented.
        IndexOverflow => IndexOverflow { .. } => "DISJOINT_SET_INDEX_OVERFLOW",
        /// The index lies beyond the configured node limit.
        CapacityExceeded => CapacityExceeded { .. } => "DISJOINT_SET_CAPACITY_EXCEEDED",
        /// Growing the backing storage failed to allocate.
        AllocationFailed => AllocationFailed { .. } => "DISJOINT_SET_ALLOCATION_FAILED",
    }
}

/// Error type produced when constructing or running [`crate::GapChecker`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GapCheckError {
    /// Initial capacity must be greater than zero.
    #[error("initial_capacity must be at least 1 (got {got})")]
    InvalidInitialCapacity {
        /// The invalid capacity supplied by the caller.
        got: usize,
    },
    /// Node limit must be greater than zero when set.
    #[error("max_nodes must be at least 1 (got {got})")]
    InvalidMaxNodes {
        /// The invalid limit supplied by the caller.
        got: usize,
    },
    /// A disjoint-set operation failed while ingesting an edge source.
    #[error("edge source `{data_source}` failed: {error}")]
    Graph {
        /// Identifier for the edge source being ingested.
        data_source: Arc<str>,
        #[source]
        /// Underlying disjoint-set error.
        error: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GapCheckError`] variants.
    enum GapCheckErrorCode for GapCheckError {
        /// Initial capacity must be greater than zero.
        InvalidInitialCapacity => InvalidInitialCapacity { .. } => "NODEGAP_INVALID_INITIAL_CAPACITY",
        /// Node limit must be greater than zero when set.
        InvalidMaxNodes => InvalidMaxNodes { .. } => "NODEGAP_INVALID_MAX_NODES",
        /// A disjoint-set operation failed while ingesting an edge source.
        GraphFailure => Graph { .. } => "NODEGAP_GRAPH_FAILURE",
    }
}

impl GapCheckError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in
    /// the disjoint-set forest.
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::Graph { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GapCheckError>;
