//! Copy block — forwards its input to its output unchanged.

use crate::flowgraph::block::WorkContext;
use crate::flowgraph::port::PortDescriptor;

static PORTS: &[PortDescriptor] =
    &[PortDescriptor::input("in"), PortDescriptor::output("out")];

/// Pass-through block. Every input sample appears on the output in the same
/// order with the same bits.
pub struct CopyBlock {
    forwarded: u64,
}

impl CopyBlock {
    pub fn new() -> Self {
        Self { forwarded: 0 }
    }

    pub fn name(&self) -> &str {
        "Copy"
    }

    pub fn ports(&self) -> &[PortDescriptor] {
        PORTS
    }

    /// Total samples forwarded so far.
    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }

    pub fn on_activate(&mut self) {}

    pub fn on_work(&mut self, ctx: &mut WorkContext) {
        ctx.output.copy_from(ctx.input);
        self.forwarded += ctx.input.len() as u64;
    }

    pub fn on_deactivate(&mut self) {}

    pub fn finished(&self) -> bool {
        true
    }
}

impl Default for CopyBlock {
    fn default() -> Self {
        Self::new()
    }
}
