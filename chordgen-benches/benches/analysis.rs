//! Maximal clique analysis benchmarks.
//!
//! Generates one seeded graph per configuration up front, then measures
//! `analyze` alone.
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use chordgen_benches::{
    error::BenchSetupError, fixtures::seeded_graph, params::GenerationBenchParams,
};
use chordgen_core::analyze;

fn analysis_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("analyze");
    group.sample_size(30);

    for params in GenerationBenchParams::grid() {
        let graph = seeded_graph(&params)?;
        let work = graph.node_count().saturating_add(graph.edge_count());
        group.throughput(Throughput::Elements(u64::try_from(work).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| analyze(graph));
        });
    }

    group.finish();
    Ok(())
}

fn analysis(c: &mut Criterion) {
    if let Err(err) = analysis_impl(c) {
        panic!("analysis benchmark setup failed: {err}");
    }
}

criterion_group!(benches, analysis);
criterion_main!(benches);
