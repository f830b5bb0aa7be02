//! Per-step metric extraction and quantile summary benchmarks.
//!
//! Isolates `extract` plus the two quartile summaries from node selection
//! by pre-attacking each fixture once during setup.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use attrition_benches::{
    error::BenchSetupError, fixtures::scale_free, params::ExtractionBenchParams,
};
use attrition_core::{
    AttackBuilder, AttackFailure, AttackStrategy, Metric, QuantileEstimator, RemovalSchedule, extract,
};

/// Seed used for fixtures.
const SEED: u64 = 7;

/// Fixture sizes to benchmark.
const NODE_COUNTS: &[usize] = &[200, 500];

/// Fractions of the fixture removed before measuring.
const REMOVED_FRACTIONS: &[f64] = &[0.0, 0.2];

fn extraction_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("extract");
    group.sample_size(20);
    let estimator = QuantileEstimator::default();

    for &nodes in NODE_COUNTS {
        for &removed_fraction in REMOVED_FRACTIONS {
            let attacked = AttackBuilder::new(
                AttackStrategy::DegreeIncremental,
                RemovalSchedule::rates([removed_fraction]),
            )
            .build()?
            .run_seeded(scale_free(nodes, SEED)?, SEED)
            .map_err(AttackFailure::into_error)?
            .graph;
            let params = ExtractionBenchParams {
                nodes,
                removed_fraction,
            };
            group.bench_with_input(
                BenchmarkId::from_parameter(&params),
                &attacked,
                |b, graph| {
                    b.iter(|| {
                        extract(graph).and_then(|metrics| {
                            estimator
                                .summarize_counts(Metric::ShortestPaths, &metrics.shortest_paths)?;
                            estimator
                                .summarize_counts(Metric::Eccentricities, &metrics.eccentricities)
                        })
                    });
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn extraction(c: &mut Criterion) {
    if let Err(err) = extraction_impl(c) {
        panic!("extraction benchmark setup failed: {err}");
    }
}

criterion_group!(benches, extraction);
criterion_main!(benches);
