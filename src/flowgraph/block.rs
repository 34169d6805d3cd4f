//! Block abstraction for the flowgraph.
//!
//! Two-layer design:
//! - **`BlockKernel` trait** — for pluggable/user-defined blocks.
//! - **`BuiltinBlock` enum** — for the built-in blocks. The scheduler can
//!   inline match arms, eliminating dynamic dispatch overhead on the hot path.
//!
//! `AnyBlock` wraps either variant so the flowgraph can handle both uniformly.

use crate::flowgraph::chunk::SampleChunk;
use crate::flowgraph::port::PortDescriptor;

/// Context passed to a block's work hook each pass.
pub struct WorkContext<'a> {
    /// Input samples from the upstream block (empty for sources).
    pub input: &'a SampleChunk,
    /// Output buffer — the block writes its samples here.
    pub output: &'a mut SampleChunk,
    /// Monotonic pass counter.
    pub pass: u64,
}

/// Trait for pluggable/user-defined blocks.
pub trait BlockKernel: Send {
    /// Human-readable name of this block.
    fn name(&self) -> &str;

    /// Port descriptors for this block.
    fn ports(&self) -> &[PortDescriptor];

    /// Called when the flowgraph starts running.
    fn on_activate(&mut self) {}

    /// Called every pass to process data.
    fn on_work(&mut self, ctx: &mut WorkContext);

    /// Called when the flowgraph finishes running.
    fn on_deactivate(&mut self) {}

    /// Whether this block has emitted everything it ever will.
    ///
    /// Only finite sources return `false` here; pass-through and sink
    /// blocks are finished as soon as their input dries up.
    fn finished(&self) -> bool {
        true
    }
}

// Built-in block types (defined in the blocks/ submodule).
use crate::flowgraph::blocks::{CopyBlock, VectorSink, VectorSource};

/// Enum dispatch for built-in blocks — zero dynamic dispatch overhead.
pub enum BuiltinBlock {
    VectorSource(VectorSource),
    Copy(CopyBlock),
    VectorSink(VectorSink),
}

impl BuiltinBlock {
    pub fn name(&self) -> &str {
        match self {
            BuiltinBlock::VectorSource(b) => b.name(),
            BuiltinBlock::Copy(b) => b.name(),
            BuiltinBlock::VectorSink(b) => b.name(),
        }
    }

    pub fn ports(&self) -> &[PortDescriptor] {
        match self {
            BuiltinBlock::VectorSource(b) => b.ports(),
            BuiltinBlock::Copy(b) => b.ports(),
            BuiltinBlock::VectorSink(b) => b.ports(),
        }
    }

    pub fn on_activate(&mut self) {
        match self {
            BuiltinBlock::VectorSource(b) => b.on_activate(),
            BuiltinBlock::Copy(b) => b.on_activate(),
            BuiltinBlock::VectorSink(b) => b.on_activate(),
        }
    }

    pub fn on_work(&mut self, ctx: &mut WorkContext) {
        match self {
            BuiltinBlock::VectorSource(b) => b.on_work(ctx),
            BuiltinBlock::Copy(b) => b.on_work(ctx),
            BuiltinBlock::VectorSink(b) => b.on_work(ctx),
        }
    }

    pub fn on_deactivate(&mut self) {
        match self {
            BuiltinBlock::VectorSource(b) => b.on_deactivate(),
            BuiltinBlock::Copy(b) => b.on_deactivate(),
            BuiltinBlock::VectorSink(b) => b.on_deactivate(),
        }
    }

    pub fn finished(&self) -> bool {
        match self {
            BuiltinBlock::VectorSource(b) => b.finished(),
            BuiltinBlock::Copy(b) => b.finished(),
            BuiltinBlock::VectorSink(b) => b.finished(),
        }
    }
}

/// Wrapper that holds either a built-in block (enum dispatch) or a plugin
/// (trait object).
pub enum AnyBlock {
    Builtin(BuiltinBlock),
    Plugin(Box<dyn BlockKernel>),
}

impl AnyBlock {
    pub fn name(&self) -> &str {
        match self {
            AnyBlock::Builtin(b) => b.name(),
            AnyBlock::Plugin(b) => b.name(),
        }
    }

    pub fn ports(&self) -> &[PortDescriptor] {
        match self {
            AnyBlock::Builtin(b) => b.ports(),
            AnyBlock::Plugin(b) => b.ports(),
        }
    }

    pub fn on_activate(&mut self) {
        match self {
            AnyBlock::Builtin(b) => b.on_activate(),
            AnyBlock::Plugin(b) => b.on_activate(),
        }
    }

    pub fn on_work(&mut self, ctx: &mut WorkContext) {
        match self {
            AnyBlock::Builtin(b) => b.on_work(ctx),
            AnyBlock::Plugin(b) => b.on_work(ctx),
        }
    }

    pub fn on_deactivate(&mut self) {
        match self {
            AnyBlock::Builtin(b) => b.on_deactivate(),
            AnyBlock::Plugin(b) => b.on_deactivate(),
        }
    }

    pub fn finished(&self) -> bool {
        match self {
            AnyBlock::Builtin(b) => b.finished(),
            AnyBlock::Plugin(b) => b.finished(),
        }
    }
}

impl From<VectorSource> for AnyBlock {
    fn from(block: VectorSource) -> Self {
        AnyBlock::Builtin(BuiltinBlock::VectorSource(block))
    }
}

impl From<CopyBlock> for AnyBlock {
    fn from(block: CopyBlock) -> Self {
        AnyBlock::Builtin(BuiltinBlock::Copy(block))
    }
}

impl From<VectorSink> for AnyBlock {
    fn from(block: VectorSink) -> Self {
        AnyBlock::Builtin(BuiltinBlock::VectorSink(block))
    }
}

impl From<Box<dyn BlockKernel>> for AnyBlock {
    fn from(block: Box<dyn BlockKernel>) -> Self {
        AnyBlock::Plugin(block)
    }
}
