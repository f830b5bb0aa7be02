//! Command implementations and argument parsing for the attrition CLI.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use attrition_core::{
    AttackBuilder, AttackError, AttackFailure, AttackResult, AttackStrategy, EmptySamplePolicy, Execution,
    GraphHandle, QuantileEstimator, QuantileTriple, RemovalSchedule, Topology,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs::SmallRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::graph_source::load_edge_list;

const DEFAULT_NODES: usize = 100;
const DEFAULT_EDGE_PROBABILITY: f64 = 0.05;
const DEFAULT_ATTACHMENTS: usize = 2;
const DEFAULT_SEED: u64 = 0;
const DEFAULT_REMOVAL_RATE: f64 = 0.05;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "attrition",
    about = "Simulate node-removal attacks and report how the network degrades."
)]
pub struct Cli {
    /// Output format for the summary written to stdout.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run one attack and print the per-step summaries.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Attack strategy to simulate.
    #[arg(long, value_enum, default_value_t = StrategyArg::RandomIncremental)]
    pub strategy: StrategyArg,

    /// Synthetic topology to attack.
    #[arg(long, value_enum, default_value_t = TopologyArg::BarabasiAlbert)]
    pub topology: TopologyArg,

    /// Attack the graph in this edge-list file instead of a synthetic one.
    #[arg(long, value_name = "PATH")]
    pub edges: Option<PathBuf>,

    /// Node count of the synthetic topology.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Edge probability for `gnp` graphs.
    #[arg(long, default_value_t = DEFAULT_EDGE_PROBABILITY)]
    pub edge_probability: f64,

    /// Edges per new node for `barabasi-albert` graphs.
    #[arg(long, default_value_t = DEFAULT_ATTACHMENTS)]
    pub attachments: usize,

    /// Seed for graph generation and node selection.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Fraction of the original nodes removed per step.
    #[arg(long, default_value_t = DEFAULT_REMOVAL_RATE)]
    pub removal_rate: f64,

    /// Cumulative fraction at which a repeated schedule stops.
    #[arg(long, default_value_t = RemovalSchedule::DEFAULT_MAX_RATE)]
    pub max_rate: f64,

    /// Explicit comma-separated removal rates, one per step.
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        conflicts_with_all = ["removal_rate", "max_rate"],
    )]
    pub rates: Option<Vec<f64>>,

    /// Plotting positions used for the quartiles.
    #[arg(long, value_enum, default_value_t = EstimatorArg::Cunnane)]
    pub estimator: EstimatorArg,

    /// What to do when a step leaves an empty metric sample.
    #[arg(long, value_enum, default_value_t = EmptySampleArg::Fail)]
    pub on_empty_sample: EmptySampleArg,

    /// Run instantaneous steps on the rayon thread pool.
    #[arg(long)]
    pub parallel: bool,
}

/// Strategy names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Random failures accumulating on one graph.
    RandomIncremental,
    /// Independent random failures of the original graph.
    RandomInstantaneous,
    /// Independent removal of the highest-degree nodes.
    DegreeInstantaneous,
    /// Repeated removal of the current highest-degree nodes.
    DegreeIncremental,
}

impl From<StrategyArg> for AttackStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::RandomIncremental => Self::RandomIncremental,
            StrategyArg::RandomInstantaneous => Self::RandomInstantaneous,
            StrategyArg::DegreeInstantaneous => Self::DegreeInstantaneous,
            StrategyArg::DegreeIncremental => Self::DegreeIncremental,
        }
    }
}

/// Synthetic topologies available from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TopologyArg {
    /// Ring.
    Cycle,
    /// Simple path.
    Path,
    /// Clique.
    Complete,
    /// Hub and leaves.
    Star,
    /// Square-ish lattice fitted inside `--nodes`.
    Grid,
    /// Erdos-Renyi random graph.
    Gnp,
    /// Preferential attachment.
    BarabasiAlbert,
}

impl TopologyArg {
    fn with_params(self, command: &RunCommand) -> Topology {
        let nodes = command.nodes;
        match self {
            Self::Cycle => Topology::Cycle { nodes },
            Self::Path => Topology::Path { nodes },
            Self::Complete => Topology::Complete { nodes },
            Self::Star => Topology::Star { nodes },
            Self::Grid => {
                let cols = nodes.isqrt().max(1);
                Topology::Grid {
                    rows: nodes.div_euclid(cols),
                    cols,
                }
            }
            Self::Gnp => Topology::Gnp {
                nodes,
                edge_probability: command.edge_probability,
            },
            Self::BarabasiAlbert => Topology::BarabasiAlbert {
                nodes,
                attachments: command.attachments,
            },
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Cycle => "cycle",
            Self::Path => "path",
            Self::Complete => "complete",
            Self::Star => "star",
            Self::Grid => "grid",
            Self::Gnp => "gnp",
            Self::BarabasiAlbert => "barabasi-albert",
        }
    }
}

/// Quantile estimators selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EstimatorArg {
    /// `alphap = betap = 0.4`.
    Cunnane,
    /// `alphap = betap = 1`.
    Linear,
}

impl From<EstimatorArg> for QuantileEstimator {
    fn from(value: EstimatorArg) -> Self {
        match value {
            EstimatorArg::Cunnane => Self::CUNNANE,
            EstimatorArg::Linear => Self::LINEAR,
        }
    }
}

/// Empty-sample handling selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmptySampleArg {
    /// Abort the run.
    Fail,
    /// Record NaN and keep going.
    Nan,
}

impl From<EmptySampleArg> for EmptySamplePolicy {
    fn from(value: EmptySampleArg) -> Self {
        match value {
            EmptySampleArg::Fail => Self::Fail,
            EmptySampleArg::Nan => Self::RecordNan,
        }
    }
}

/// Summary renderings written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated table.
    Text,
    /// One JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an edge list.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An edge-list line was not one or two node ids.
    #[error("{path}:{line}: expected `source target` or a single node id, got `{content}`")]
    EdgeList {
        /// File being parsed.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The offending line with comments stripped.
        content: String,
    },
    /// Attack configuration or execution failed.
    #[error(transparent)]
    Core(#[from] AttackError),
}

/// Outcome of a `run` command.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionSummary {
    /// Topology name or edge-list path.
    pub graph: String,
    /// Nodes in the graph before the attack.
    pub nodes: usize,
    /// Edges in the graph before the attack.
    pub edges: usize,
    /// Strategy that was simulated.
    pub strategy: AttackStrategy,
    /// Seed used for generation and selection.
    pub seed: u64,
    /// Removal rate of each step.
    pub rates: Vec<f64>,
    /// Per-step summaries.
    pub result: AttackResult,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be loaded or the attack fails.
///
/// # Examples
/// ```
/// use attrition_cli::cli::Cli;
/// use attrition_cli::cli::run_cli;
/// use clap::Parser;
///
/// let cli = Cli::parse_from([
///     "attrition", "run", "--topology", "cycle", "--nodes", "10",
///     "--strategy", "degree-incremental", "--rates", "0.5",
/// ]);
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.result.removed(), &[5]);
/// # Ok::<(), attrition_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(strategy = field::Empty, graph = field::Empty, seed = command.seed),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let strategy = AttackStrategy::from(command.strategy);
    let schedule = match &command.rates {
        Some(rates) => RemovalSchedule::rates(rates.iter().copied()),
        None => RemovalSchedule::repeated(command.removal_rate, command.max_rate),
    };
    let rates = schedule.resolve()?;
    let execution = if command.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };
    let attack = AttackBuilder::new(strategy, schedule)
        .with_estimator(command.estimator.into())
        .with_empty_sample_policy(command.on_empty_sample.into())
        .with_execution(execution)
        .build()?;

    let mut rng = SmallRng::seed_from_u64(command.seed);
    let (label, graph) = match &command.edges {
        Some(path) => (path.display().to_string(), load_edge_list(path)?),
        None => (
            command.topology.as_str().to_owned(),
            command.topology.with_params(&command).generate(&mut rng),
        ),
    };
    let span = Span::current();
    span.record("strategy", field::display(strategy.as_str()));
    span.record("graph", field::display(&label));

    let nodes = graph.node_count();
    let edges = graph.edge_count();
    let outcome = attack.run(graph, &mut rng).map_err(AttackFailure::into_error)?;
    info!(
        graph = label.as_str(),
        steps = outcome.result.len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        graph: label,
        nodes,
        edges,
        strategy,
        seed: command.seed,
        rates,
        result: outcome.result,
    })
}

/// Renders `summary` to `writer` as a tab-separated table or a JSON document.
///
/// NaN summaries render as `NaN` in text and `null` in JSON.
///
/// # Errors
/// Returns [`io::Error`] if writing or serialising fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use attrition_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// # use attrition_core::{AttackResult, AttackStrategy};
/// let summary = ExecutionSummary {
///     graph: "demo".into(),
///     nodes: 0,
///     edges: 0,
///     strategy: AttackStrategy::RandomIncremental,
///     seed: 0,
///     rates: Vec::new(),
///     result: AttackResult::default(),
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, OutputFormat::Text, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner()).expect("utf-8");
/// assert!(text.starts_with("graph: demo (nodes=0, edges=0)\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(
    summary: &ExecutionSummary,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, summary)?;
            writeln!(writer)
        }
        OutputFormat::Text => render_text(summary, writer),
    }
}

fn render_text(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "graph: {} (nodes={}, edges={})",
        summary.graph, summary.nodes, summary.edges
    )?;
    writeln!(
        writer,
        "strategy: {} seed: {}",
        summary.strategy.as_str(),
        summary.seed
    )?;
    writeln!(
        writer,
        "step\trate\tremoved\tpath_q25\tpath_mean\tpath_q75\tecc_q25\tecc_mean\tecc_q75\tlargest\tisolated"
    )?;
    for (index, (step, rate)) in summary.result.steps().zip(&summary.rates).enumerate() {
        writeln!(
            writer,
            "{}\t{rate}\t{}\t{}\t{}\t{:.4}\t{:.4}",
            index + 1,
            step.removed,
            triple(step.shortest_paths),
            triple(step.eccentricities),
            step.cluster_sizes.relative_largest,
            step.cluster_sizes.mean_isolated,
        )?;
    }
    Ok(())
}

fn triple(value: QuantileTriple) -> String {
    format!("{:.4}\t{:.4}\t{:.4}", value.q25, value.mean, value.q75)
}
