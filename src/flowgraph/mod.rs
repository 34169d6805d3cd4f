//! Block-based streaming flowgraph.
//!
//! Samples flow through typed blocks: Source (pre-supplied vectors) →
//! pass-through stages → Sink (bounded collectors). A graph is built with
//! `add_block`/`connect` and executed with a single blocking `run()`.
//!
//! # Architecture
//!
//! ```text
//! [VectorSource] ──► [Copy] ──► … ──► [Copy] ──► [VectorSink]
//! ```
//!
//! # Design
//!
//! - **Enum dispatch on hot path** — `BuiltinBlock` enum for built-in blocks.
//! - **Zero allocation on hot path** — `SampleChunk` is a fixed-capacity
//!   inline buffer owned per block slot and reused every pass.
//! - **Structural sources/sinks** — a block with no input ports is a source,
//!   with no output ports a sink; the plan compiler keeps only blocks on a
//!   source-to-sink path.
//! - **Run to completion** — the scheduler executes passes until the sources
//!   are exhausted and no samples remain in flight.

pub mod block;
pub mod blocks;
pub mod chunk;
pub mod compiler;
pub mod error;
pub mod executor;
pub mod id;
pub mod plan;
pub mod port;

pub use block::{AnyBlock, BlockKernel, BuiltinBlock, WorkContext};
pub use blocks::{CopyBlock, VectorSink, VectorSource};
pub use chunk::{SampleChunk, CHUNK_CAPACITY};
pub use error::{FlowError, FlowResult};
pub use executor::{
    BlockSlot, ChainIds, CopyChainBuilder, Edge, Flowgraph, RunHandle, RunSummary,
};
pub use id::{BlockId, EdgeId};
pub use plan::{ExecutionPlan, PlanStats};
pub use port::{PortDescriptor, PortDirection};
