//! # flowbench-rs: Copy-Chain Flowgraph Benchmark
//!
//! A block-based streaming flowgraph engine plus the throughput benchmark it
//! exists for: push millions of random samples through a long chain of
//! pass-through blocks and report the wall-clock time of the run.
//!
//! ## Architecture
//!
//! - **Flowgraph**: blocks with typed ports, connected by single-port edges,
//!   scheduled in topological passes until the stream drains
//! - **Samples**: caller-owned uniform `[0, 1)` generator state
//! - **Config**: optional `flowbench.toml` for stage/sample counts and seed
//! - **Report**: the fixed-point elapsed-seconds line on stdout
//!
//! ## Example
//!
//! ```
//! use flowbench_rs::flowgraph::CopyChainBuilder;
//!
//! let samples = vec![0.1_f32, 0.2, 0.3, 0.4];
//! let (mut graph, ids) = CopyChainBuilder::new(samples.clone())
//!     .n_copy(1)
//!     .build()
//!     .unwrap();
//!
//! let summary = graph.run();
//! assert_eq!(summary.samples_collected, 4);
//! assert_eq!(graph.take_collected(ids.sink).unwrap(), samples);
//! ```

pub mod config;
pub mod flowgraph;
pub mod report;
pub mod samples;

// Re-export commonly used types
pub use config::{BenchConfig, ConfigError};
pub use flowgraph::{
    BlockId, BlockKernel, ChainIds, CopyBlock, CopyChainBuilder, EdgeId, FlowError, FlowResult,
    Flowgraph, RunSummary, VectorSink, VectorSource,
};
pub use samples::SampleGenerator;
