//! Copy-chain throughput benchmark - Main Entry Point
//!
//! Generates the sample vector, builds the copy chain, runs it once to
//! completion, and prints the elapsed wall-clock seconds on stdout.
//! Command-line arguments are ignored; parameters come from an optional
//! `flowbench.toml`.

use anyhow::Context;
use flowbench_rs::{report, BenchConfig, CopyChainBuilder, SampleGenerator};
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging. Everything goes to stderr; stdout carries only the
    // benchmark result line.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,flowbench_rs=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = BenchConfig::load_or_default();
    tracing::info!(
        n_copy = config.n_copy,
        n_samples = config.n_samples,
        seed = ?config.seed,
        "Starting copy-chain benchmark"
    );

    let mut generator = match config.seed {
        Some(seed) => SampleGenerator::from_seed(seed),
        None => SampleGenerator::from_entropy(),
    };
    let samples = generator.generate(config.n_samples);

    let (mut graph, _ids) = CopyChainBuilder::new(samples)
        .n_copy(config.n_copy)
        .build()
        .context("building the copy chain")?;

    let start = Instant::now();
    let summary = graph.run();
    let elapsed = start.elapsed();

    report::write_elapsed(std::io::stdout().lock(), elapsed)
        .context("writing the elapsed time")?;

    tracing::info!(
        passes = summary.passes,
        emitted = summary.samples_emitted,
        collected = summary.samples_collected,
        "Benchmark complete"
    );

    Ok(())
}
