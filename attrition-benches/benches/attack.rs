//! End-to-end attack benchmarks.
//!
//! Runs every strategy over scale-free fixtures, and the instantaneous
//! strategies both sequentially and on the rayon pool.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use attrition_benches::{error::BenchSetupError, fixtures::scale_free, params::AttackBenchParams};
use attrition_core::{
    AttackBuilder, AttackStrategy, EmptySamplePolicy, Execution, RemovalMode, RemovalSchedule,
};

/// Seed used for fixtures and node selection.
const SEED: u64 = 42;

/// Fixture sizes to benchmark.
const NODE_COUNTS: &[usize] = &[100, 300];

/// Per-step removal rate; ten steps up to half of the graph.
const REMOVAL_RATE: f64 = 0.05;

fn executions(strategy: AttackStrategy) -> &'static [Execution] {
    match strategy.mode() {
        RemovalMode::Incremental => &[Execution::Sequential],
        RemovalMode::Instantaneous => &[Execution::Sequential, Execution::Parallel],
    }
}

fn attack_strategies_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("attack");
    group.sample_size(10);

    for &nodes in NODE_COUNTS {
        let graph = scale_free(nodes, SEED)?;
        for strategy in AttackStrategy::ALL {
            for &execution in executions(strategy) {
                let attack = AttackBuilder::new(
                    strategy,
                    RemovalSchedule::repeated(REMOVAL_RATE, RemovalSchedule::DEFAULT_MAX_RATE),
                )
                .with_empty_sample_policy(EmptySamplePolicy::RecordNan)
                .with_execution(execution)
                .build()?;
                let params = AttackBenchParams {
                    nodes,
                    strategy,
                    execution,
                };
                group.bench_with_input(
                    BenchmarkId::from_parameter(&params),
                    &graph,
                    |b, fixture| {
                        b.iter(|| attack.run_seeded(fixture.clone(), SEED));
                    },
                );
            }
        }
    }

    group.finish();
    Ok(())
}

fn attack_strategies(c: &mut Criterion) {
    if let Err(err) = attack_strategies_impl(c) {
        panic!("attack benchmark setup failed: {err}");
    }
}

criterion_group!(benches, attack_strategies);
criterion_main!(benches);
