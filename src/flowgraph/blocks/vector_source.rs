//! VectorSource block — emits a pre-supplied sample vector.
//!
//! The sequence is emitted exactly once, in order, one chunk per pass.
//! Once the cursor reaches the end of the vector the block is finished
//! and produces nothing on subsequent passes.

use crate::flowgraph::block::WorkContext;
use crate::flowgraph::port::PortDescriptor;

static PORTS: &[PortDescriptor] = &[PortDescriptor::output("out")];

/// Source block backed by an owned `Vec<f32>`.
pub struct VectorSource {
    samples: Vec<f32>,
    cursor: usize,
    emitted: u64,
}

impl VectorSource {
    pub fn new(samples: Vec<f32>) -> Self {
        Self {
            samples,
            cursor: 0,
            emitted: 0,
        }
    }

    pub fn name(&self) -> &str {
        "VectorSource"
    }

    pub fn ports(&self) -> &[PortDescriptor] {
        PORTS
    }

    /// Total samples emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn on_activate(&mut self) {}

    pub fn on_work(&mut self, ctx: &mut WorkContext) {
        if self.cursor >= self.samples.len() {
            return;
        }
        let n = ctx.output.extend_from_slice(&self.samples[self.cursor..]);
        self.cursor += n;
        self.emitted += n as u64;
    }

    pub fn on_deactivate(&mut self) {}

    pub fn finished(&self) -> bool {
        self.cursor >= self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flowgraph::chunk::{SampleChunk, CHUNK_CAPACITY};

    fn work(source: &mut VectorSource, pass: u64) -> SampleChunk {
        let input = SampleChunk::new();
        let mut output = SampleChunk::new();
        let mut ctx = WorkContext {
            input: &input,
            output: &mut output,
            pass,
        };
        source.on_work(&mut ctx);
        output
    }

    #[test]
    fn test_emits_in_chunks_until_exhausted() {
        let data: Vec<f32> = (0..CHUNK_CAPACITY + 3).map(|i| i as f32).collect();
        let mut source = VectorSource::new(data.clone());
        assert!(!source.finished());

        let first = work(&mut source, 0);
        assert_eq!(first.len(), CHUNK_CAPACITY);
        assert_eq!(first.as_slice(), &data[..CHUNK_CAPACITY]);
        assert!(!source.finished());

        let second = work(&mut source, 1);
        assert_eq!(second.as_slice(), &data[CHUNK_CAPACITY..]);
        assert!(source.finished());
        assert_eq!(source.emitted(), data.len() as u64);

        // Exhausted source stays quiet.
        let third = work(&mut source, 2);
        assert!(third.is_empty());
    }

    #[test]
    fn test_empty_vector_is_finished_immediately() {
        let source = VectorSource::new(Vec::new());
        assert!(source.finished());
        assert_eq!(source.emitted(), 0);
    }
}
