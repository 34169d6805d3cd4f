//! VectorSink block — collects samples into a bounded vector.
//!
//! The bound caps how many samples the sink keeps; anything beyond it is
//! dropped and counted. `take_items` hands the collected vector to the
//! caller after a run.

use crate::flowgraph::block::WorkContext;
use crate::flowgraph::port::PortDescriptor;

static PORTS: &[PortDescriptor] = &[PortDescriptor::input("in")];

/// Sink block collecting up to `bound` samples.
pub struct VectorSink {
    items: Vec<f32>,
    bound: usize,
    dropped: u64,
}

impl VectorSink {
    /// Create a sink that keeps at most `bound` samples. The backing vector
    /// is pre-allocated so collection never reallocates mid-run.
    pub fn with_bound(bound: usize) -> Self {
        Self {
            items: Vec::with_capacity(bound),
            bound,
            dropped: 0,
        }
    }

    pub fn name(&self) -> &str {
        "VectorSink"
    }

    pub fn ports(&self) -> &[PortDescriptor] {
        PORTS
    }

    /// Number of samples collected so far.
    pub fn collected(&self) -> u64 {
        self.items.len() as u64
    }

    /// Whether the bound has been reached.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.bound
    }

    /// Take the collected samples, leaving the sink empty.
    pub fn take_items(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.items)
    }

    pub fn on_activate(&mut self) {
        self.dropped = 0;
    }

    pub fn on_work(&mut self, ctx: &mut WorkContext) {
        if ctx.input.is_empty() {
            return;
        }
        let room = self.bound.saturating_sub(self.items.len());
        let take = ctx.input.len().min(room);
        self.items.extend_from_slice(&ctx.input.as_slice()[..take]);
        self.dropped += (ctx.input.len() - take) as u64;
    }

    pub fn on_deactivate(&mut self) {
        if self.dropped > 0 {
            tracing::warn!(
                "VectorSink dropped {} samples beyond its bound",
                self.dropped
            );
        }
    }

    pub fn finished(&self) -> bool {
        true
    }
}
