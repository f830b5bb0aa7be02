//! Command-line interface for running attacks on synthetic or loaded graphs.

mod commands;
mod graph_source;

pub use commands::{
    Cli, CliError, Command, EmptySampleArg, EstimatorArg, ExecutionSummary, OutputFormat,
    RunCommand, StrategyArg, TopologyArg, render_summary, run_cli,
};
pub use graph_source::load_edge_list;
