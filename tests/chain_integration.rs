//! End-to-end tests for the copy-chain benchmark topology.

mod common;

use common::{assert_samples_eq, seeded_samples};
use flowbench_rs::flowgraph::{
    BlockKernel, CopyChainBuilder, FlowError, PortDescriptor, VectorSink, VectorSource,
    WorkContext,
};
use flowbench_rs::{report, Flowgraph};
use std::time::Instant;

#[test]
fn test_minimal_chain_delivers_samples_in_order() {
    // source → copy → sink with four samples
    let samples = vec![0.11_f32, 0.42, 0.77, 0.99];
    let (mut graph, ids) = CopyChainBuilder::new(samples.clone())
        .n_copy(1)
        .build()
        .unwrap();

    assert_eq!(graph.block_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    let summary = graph.run();
    assert_eq!(summary.samples_emitted, 4);
    assert_eq!(summary.samples_collected, 4);

    let collected = graph.take_collected(ids.sink).unwrap();
    assert_samples_eq(&collected, &samples);
}

#[test]
fn test_deep_chain_delivers_everything() {
    // The reference topology (200 stages) at a reduced sample count.
    let samples = seeded_samples(1234, 10_000);
    let (mut graph, ids) = CopyChainBuilder::new(samples.clone())
        .n_copy(200)
        .build()
        .unwrap();

    assert_eq!(graph.block_count(), 202);
    assert_eq!(graph.edge_count(), 201);

    let summary = graph.run();
    assert_eq!(summary.samples_collected, samples.len() as u64);
    // Draining 200 stages takes at least one pass per stage.
    assert!(summary.passes > 200);

    let collected = graph.take_collected(ids.sink).unwrap();
    assert_samples_eq(&collected, &samples);
}

#[test]
fn test_benchmark_report_line_shape() {
    // Time a real (small) run and check the printed contract:
    // one line matching ^\s*\d+\.\d{15}$ with a positive value.
    let samples = seeded_samples(5, 4096 * 3);
    let (mut graph, _ids) = CopyChainBuilder::new(samples).n_copy(8).build().unwrap();

    let start = Instant::now();
    graph.run();
    let elapsed = start.elapsed();

    let line = report::format_elapsed(elapsed);
    assert!(line.len() >= 20);

    let trimmed = line.trim_start();
    let (whole, frac) = trimmed.split_once('.').unwrap();
    assert!(whole.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(frac.len(), 15);
    assert!(frac.chars().all(|c| c.is_ascii_digit()));
    assert!(trimmed.parse::<f64>().unwrap() > 0.0);
}

#[test]
fn test_empty_stream_terminates_with_empty_sink() {
    let (mut graph, ids) = CopyChainBuilder::new(Vec::new()).n_copy(3).build().unwrap();

    let summary = graph.run();
    assert_eq!(summary.samples_emitted, 0);
    assert_eq!(summary.samples_collected, 0);
    assert!(graph.take_collected(ids.sink).unwrap().is_empty());
}

#[test]
fn test_zero_copy_stages_rejected() {
    let result = CopyChainBuilder::new(vec![1.0]).n_copy(0).build();
    assert!(matches!(result, Err(FlowError::InvalidChain(0))));
}

#[test]
fn test_sink_bound_caps_collection() {
    let samples = seeded_samples(77, 10);
    let (mut graph, ids) = CopyChainBuilder::new(samples.clone())
        .n_copy(2)
        .sink_bound(5)
        .build()
        .unwrap();

    let summary = graph.run();
    assert_eq!(summary.samples_emitted, 10);
    assert_eq!(summary.samples_collected, 5);

    let collected = graph.take_collected(ids.sink).unwrap();
    assert_samples_eq(&collected, &samples[..5]);
}

#[test]
fn test_spawned_run_delivers_same_result() {
    let samples = seeded_samples(31, 2048);
    let (graph, ids) = CopyChainBuilder::new(samples.clone())
        .n_copy(16)
        .build()
        .unwrap();

    let (summary, mut graph) = graph.spawn().join().unwrap();
    assert_eq!(summary.samples_collected, samples.len() as u64);

    let collected = graph.take_collected(ids.sink).unwrap();
    assert_samples_eq(&collected, &samples);
}

/// Plugin block scaling every sample by a constant factor.
struct GainBlock {
    factor: f32,
}

static GAIN_PORTS: &[PortDescriptor] =
    &[PortDescriptor::input("in"), PortDescriptor::output("out")];

impl BlockKernel for GainBlock {
    fn name(&self) -> &str {
        "Gain"
    }

    fn ports(&self) -> &[PortDescriptor] {
        GAIN_PORTS
    }

    fn on_work(&mut self, ctx: &mut WorkContext) {
        for &sample in ctx.input.iter() {
            ctx.output.push(sample * self.factor);
        }
    }
}

#[test]
fn test_plugin_block_runs_in_the_graph() {
    let samples = vec![0.5_f32, 1.0, 1.5];

    let mut graph = Flowgraph::new();
    let source = graph.add_block(VectorSource::new(samples.clone()));
    let gain: Box<dyn BlockKernel> = Box::new(GainBlock { factor: 2.0 });
    let gain = graph.add_block(gain);
    let sink = graph.add_block(VectorSink::with_bound(samples.len()));

    graph.connect(source, 0, gain, 0).unwrap();
    graph.connect(gain, 0, sink, 0).unwrap();

    graph.run();
    let collected = graph.take_collected(sink).unwrap();
    assert_samples_eq(&collected, &[1.0, 2.0, 3.0]);
}
