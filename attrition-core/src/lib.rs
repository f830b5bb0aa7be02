//! Attrition core library.
//!
//! Simulates node-removal attacks on undirected graphs and records how
//! shortest paths, eccentricities and fragmentation degrade step by step.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attack;
mod builder;
mod error;
mod generate;
mod graph;
mod metrics;
mod quantile;
mod result;
mod rng;
mod schedule;
mod selection;

pub use crate::{
    attack::{
        AttackFailure, AttackOutcome, AttackStrategy, RemovalMode, RunResult, StepProgress,
        incremental_attack, incremental_random_failure, instantaneous_attack,
        instantaneous_random_failure,
    },
    builder::{Attack, AttackBuilder, EmptySamplePolicy, Execution},
    error::{AttackError, AttackErrorCode, GraphError, GraphErrorCode, Result},
    generate::Topology,
    graph::{AdjacencyGraph, GraphHandle},
    metrics::{AttackMetrics, ClusterSizes, extract},
    quantile::{Metric, QuantileEstimator, QuantileTriple},
    result::{AttackResult, StepRecord},
    schedule::RemovalSchedule,
    selection::SelectionPolicy,
};

#[cfg(test)]
mod test_utils;
