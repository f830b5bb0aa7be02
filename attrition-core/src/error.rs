//! Error types for the Attrition core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::quantile::Metric;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by a [`crate::GraphHandle`] implementation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A node id was not present in the graph.
    #[error("node {node} is not present in the graph")]
    UnknownNode {
        /// Debug rendering of the missing node id.
        node: Arc<str>,
    },
    /// Eccentricity was requested over a node set that is not connected.
    #[error("eccentricity is undefined over a disconnected node set of {nodes} nodes")]
    Disconnected {
        /// Number of nodes in the requested domain.
        nodes: usize,
    },
}

impl GraphError {
    /// Builds an [`GraphError::UnknownNode`] from any debuggable node id.
    #[must_use]
    pub fn unknown_node(node: &impl fmt::Debug) -> Self {
        Self::UnknownNode {
            node: Arc::from(format!("{node:?}")),
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A node id was not present in the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// Eccentricity was requested over a disconnected node set.
        Disconnected => Disconnected { .. } => "GRAPH_DISCONNECTED",
    }
}

/// Error type produced when configuring or running an attack.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AttackError {
    /// Metrics were requested on a graph with no nodes.
    #[error("cannot extract metrics from a graph with no nodes")]
    EmptyGraph,
    /// Quantiles were requested over an empty sample.
    #[error("the {metric} sample is empty")]
    EmptySample {
        /// Metric whose sample was empty.
        metric: Metric,
    },
    /// A step would remove more nodes than the graph holds at that point, or
    /// every node it holds, or its rate exceeds one.
    #[error("step {step} removes {requested} of {available} remaining nodes; at least one must survive")]
    OverRemoval {
        /// Zero-based step index.
        step: usize,
        /// Nodes the step would remove.
        requested: usize,
        /// Nodes available to the step.
        available: usize,
    },
    /// A removal rate was negative or not finite.
    #[error("removal rate #{index} must be finite and non-negative (got {rate})")]
    InvalidRate {
        /// Position of the offending rate in the schedule.
        index: usize,
        /// The rejected rate.
        rate: f64,
    },
    /// A repeated schedule had a non-positive or non-finite parameter.
    #[error(
        "repeated schedule needs positive finite rates (removal_rate={removal_rate}, max_rate={max_rate})"
    )]
    InvalidSchedule {
        /// Per-step removal rate supplied by the caller.
        removal_rate: f64,
        /// Cumulative cap supplied by the caller.
        max_rate: f64,
    },
    /// The requested execution mode is unavailable in the current build.
    #[error("the requested execution {requested:?} is not available in this build")]
    ExecutionUnavailable {
        /// Execution mode that could not be satisfied.
        requested: crate::Execution,
    },
    /// The graph collaborator reported a failure.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`AttackError`] variants.
    enum AttackErrorCode for AttackError {
        /// Metrics were requested on a graph with no nodes.
        EmptyGraph => EmptyGraph => "ATTACK_EMPTY_GRAPH",
        /// Quantiles were requested over an empty sample.
        EmptySample => EmptySample { .. } => "ATTACK_EMPTY_SAMPLE",
        /// A step would remove more nodes than the graph holds.
        OverRemoval => OverRemoval { .. } => "ATTACK_OVER_REMOVAL",
        /// A removal rate was negative or not finite.
        InvalidRate => InvalidRate { .. } => "ATTACK_INVALID_RATE",
        /// A repeated schedule had a non-positive or non-finite parameter.
        InvalidSchedule => InvalidSchedule { .. } => "ATTACK_INVALID_SCHEDULE",
        /// The requested execution mode is unavailable in this build.
        ExecutionUnavailable => ExecutionUnavailable { .. } => "ATTACK_EXECUTION_UNAVAILABLE",
        /// The graph collaborator reported a failure.
        GraphFailure => Graph(..) => "ATTACK_GRAPH_FAILURE",
    }
}

impl AttackError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in the graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Whether the error stems from caller configuration rather than graph state.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::OverRemoval { .. }
                | Self::InvalidRate { .. }
                | Self::InvalidSchedule { .. }
                | Self::ExecutionUnavailable { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, AttackError>;
