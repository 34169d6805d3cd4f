//! Flowgraph-specific error types.

use crate::flowgraph::id::BlockId;
use thiserror::Error;

/// Errors that can occur while building or running a flowgraph.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid block id: {0}")]
    InvalidBlock(BlockId),

    #[error("Invalid edge: {0}")]
    InvalidEdge(String),

    #[error("Port mismatch: {0}")]
    PortMismatch(String),

    #[error("Cycle detected in flowgraph")]
    CycleDetected,

    #[error("Copy chain requires at least one copy stage, got {0}")]
    InvalidChain(usize),

    #[error("Scheduler thread panicked")]
    SchedulerPanic,
}

pub type FlowResult<T> = std::result::Result<T, FlowError>;
