//! Flowgraph executor — graph container and pass scheduler.
//!
//! A run proceeds in passes. Each pass:
//! 1. Clear all active output chunks.
//! 2. Execute active blocks in topological order.
//! 3. Propagate output chunks to connected input chunks.
//!
//! The run completes when a pass moves no samples and every active block
//! reports finished — everything the sources emitted has reached the sinks.

use crate::flowgraph::block::{AnyBlock, BuiltinBlock, WorkContext};
use crate::flowgraph::blocks::{CopyBlock, VectorSink, VectorSource};
use crate::flowgraph::chunk::SampleChunk;
use crate::flowgraph::compiler::PlanCompiler;
use crate::flowgraph::error::{FlowError, FlowResult};
use crate::flowgraph::id::{BlockId, EdgeId};
use crate::flowgraph::plan::{ExecutionPlan, PlanStats};
use crate::flowgraph::port::{input_count, output_count};
use crossbeam_channel::{bounded, Receiver};
use std::thread::JoinHandle;

/// An edge connecting an output port of one block to an input port of another.
#[derive(Debug, Clone)]
pub struct Edge {
    pub id: EdgeId,
    pub from_block: BlockId,
    pub from_port: u16,
    pub to_block: BlockId,
    pub to_port: u16,
}

/// A slot holding a block and its per-pass I/O chunks.
pub struct BlockSlot {
    pub block: AnyBlock,
    pub input_buf: SampleChunk,
    pub output_buf: SampleChunk,
}

impl BlockSlot {
    pub fn new(block: AnyBlock) -> Self {
        Self {
            block,
            input_buf: SampleChunk::new(),
            output_buf: SampleChunk::new(),
        }
    }
}

/// Totals reported by a completed run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Scheduler passes executed.
    pub passes: u64,
    /// Samples emitted by source blocks.
    pub samples_emitted: u64,
    /// Samples collected by sink blocks.
    pub samples_collected: u64,
}

/// The flowgraph: blocks, edges, and the pass scheduler.
pub struct Flowgraph {
    blocks: Vec<BlockSlot>,
    edges: Vec<Edge>,
    /// Cached compiled execution plan
    plan: ExecutionPlan,
    /// Generation counter for cache invalidation
    generation: u64,
    /// Whether the plan needs recompilation
    plan_dirty: bool,
    pass: u64,
}

impl Flowgraph {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            edges: Vec::new(),
            plan: ExecutionPlan::new(),
            generation: 0,
            plan_dirty: true,
            pass: 0,
        }
    }

    // ── Graph building ──

    /// Add a block to the flowgraph. Returns its BlockId.
    pub fn add_block(&mut self, block: impl Into<AnyBlock>) -> BlockId {
        let id = BlockId(self.blocks.len() as u32);
        self.blocks.push(BlockSlot::new(block.into()));
        self.invalidate_plan();
        id
    }

    /// Connect output port `from_port` of `from` to input port `to_port` of `to`.
    ///
    /// Rejects unknown blocks, out-of-range ports, self-loops, a second edge
    /// into an already-connected input port, and edges that would create a
    /// cycle.
    pub fn connect(
        &mut self,
        from: BlockId,
        from_port: u16,
        to: BlockId,
        to_port: u16,
    ) -> FlowResult<EdgeId> {
        let n = self.blocks.len();
        if from.index() >= n {
            return Err(FlowError::InvalidBlock(from));
        }
        if to.index() >= n {
            return Err(FlowError::InvalidBlock(to));
        }
        if from == to {
            return Err(FlowError::InvalidEdge(
                "cannot connect a block to itself".to_string(),
            ));
        }

        let outputs = output_count(self.blocks[from.index()].block.ports());
        if from_port as usize >= outputs {
            return Err(FlowError::PortMismatch(format!(
                "block {} has {} output port(s), no port {}",
                from, outputs, from_port
            )));
        }
        let inputs = input_count(self.blocks[to.index()].block.ports());
        if to_port as usize >= inputs {
            return Err(FlowError::PortMismatch(format!(
                "block {} has {} input port(s), no port {}",
                to, inputs, to_port
            )));
        }

        if self
            .edges
            .iter()
            .any(|e| e.to_block == to && e.to_port == to_port)
        {
            return Err(FlowError::InvalidEdge(format!(
                "input port {} of block {} is already connected",
                to_port, to
            )));
        }

        if self.would_create_cycle(from, to) {
            return Err(FlowError::CycleDetected);
        }

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge {
            id,
            from_block: from,
            from_port,
            to_block: to,
            to_port,
        });
        self.invalidate_plan();
        Ok(id)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Statistics of the compiled plan (compiling lazily if needed).
    pub fn plan_stats(&mut self) -> &PlanStats {
        self.recompile_if_needed();
        &self.plan.stats
    }

    /// Take the samples collected by a `VectorSink` block, leaving it empty.
    /// Returns `None` if `id` does not refer to a vector sink.
    pub fn take_collected(&mut self, id: BlockId) -> Option<Vec<f32>> {
        match self.blocks.get_mut(id.index())?.block {
            AnyBlock::Builtin(BuiltinBlock::VectorSink(ref mut sink)) => Some(sink.take_items()),
            _ => None,
        }
    }

    /// Invalidate the compiled plan (called when the topology changes).
    fn invalidate_plan(&mut self) {
        self.plan_dirty = true;
        self.generation += 1;
    }

    /// Recompile the execution plan if needed (lazy recompilation).
    fn recompile_if_needed(&mut self) {
        if self.plan_dirty {
            self.plan = PlanCompiler::compile(&self.blocks, &self.edges, self.generation);
            self.plan_dirty = false;

            tracing::info!(
                "Flowgraph plan compiled: {} active / {} total (gen {})",
                self.plan.stats.active_blocks,
                self.plan.stats.total_blocks,
                self.plan.generation,
            );

            for &sink_idx in &self.plan.inactive_sink_blocks {
                let name = self.blocks[sink_idx].block.name();
                tracing::warn!(
                    "Sink block '{}' (idx {}) is disconnected from data sources",
                    name,
                    sink_idx
                );
            }
        }
    }

    /// Check if adding an edge from `from` to `to` would create a cycle.
    fn would_create_cycle(&self, from: BlockId, to: BlockId) -> bool {
        // If `to` can reach `from` through existing edges, adding from->to
        // creates a cycle.
        let mut visited = vec![false; self.blocks.len()];
        let mut stack = vec![to];

        while let Some(current) = stack.pop() {
            if current == from {
                return true;
            }
            let idx = current.index();
            if idx >= self.blocks.len() || visited[idx] {
                continue;
            }
            visited[idx] = true;

            for edge in &self.edges {
                if edge.from_block == current {
                    stack.push(edge.to_block);
                }
            }
        }
        false
    }

    // ── Run to completion ──

    /// Run the flowgraph until all source data has propagated through every
    /// block and been consumed by the sinks. Blocks the calling thread.
    pub fn run(&mut self) -> RunSummary {
        self.recompile_if_needed();

        tracing::info!(
            active_blocks = self.plan.stats.active_blocks,
            active_edges = self.plan.active_edges.len(),
            "flowgraph run started"
        );

        for slot in &mut self.blocks {
            slot.block.on_activate();
        }

        let mut passes: u64 = 0;
        loop {
            let in_flight = self.execute_pass();
            passes += 1;
            if in_flight == 0 && self.active_blocks_finished() {
                break;
            }
        }

        for slot in &mut self.blocks {
            slot.block.on_deactivate();
        }

        let summary = self.summarize(passes);
        tracing::info!(
            passes = summary.passes,
            emitted = summary.samples_emitted,
            collected = summary.samples_collected,
            "flowgraph run complete"
        );
        summary
    }

    /// Run the flowgraph on a dedicated scheduler thread.
    ///
    /// The returned handle delivers the `RunSummary` over a channel and
    /// gives the graph back on `join`.
    pub fn spawn(mut self) -> RunHandle {
        let (tx, rx) = bounded(1);
        let handle = std::thread::spawn(move || {
            let summary = self.run();
            let _ = tx.send(summary);
            self
        });
        RunHandle { rx, handle }
    }

    /// Execute one pass. Returns the number of samples observed in flight
    /// (inputs consumed plus outputs produced).
    fn execute_pass(&mut self) -> u64 {
        let pass = self.pass;
        let mut in_flight: u64 = 0;

        // 1. Clear active output chunks
        for &idx in &self.plan.active_blocks {
            self.blocks[idx].output_buf.clear();
        }

        // 2. Execute active blocks in topological order
        for &idx in &self.plan.active_blocks {
            let slot = &mut self.blocks[idx];
            in_flight += slot.input_buf.len() as u64;

            let mut ctx = WorkContext {
                input: &slot.input_buf,
                output: &mut slot.output_buf,
                pass,
            };
            slot.block.on_work(&mut ctx);

            in_flight += slot.output_buf.len() as u64;
        }

        // 3. Propagate active edges (pre-computed, pre-validated indices)
        for &(from, to) in &self.plan.active_edges {
            Self::propagate(&mut self.blocks, from, to);
        }

        self.pass = self.pass.wrapping_add(1);
        in_flight
    }

    /// Copy the producer's output chunk into the consumer's input chunk.
    fn propagate(blocks: &mut [BlockSlot], from: usize, to: usize) {
        // connect() rejects self-loops, so from != to and the split is valid.
        if from < to {
            let (head, tail) = blocks.split_at_mut(to);
            tail[0].input_buf.copy_from(&head[from].output_buf);
        } else {
            let (head, tail) = blocks.split_at_mut(from);
            head[to].input_buf.copy_from(&tail[0].output_buf);
        }
    }

    fn active_blocks_finished(&self) -> bool {
        self.plan
            .active_blocks
            .iter()
            .all(|&idx| self.blocks[idx].block.finished())
    }

    fn summarize(&self, passes: u64) -> RunSummary {
        let mut samples_emitted = 0;
        let mut samples_collected = 0;
        for slot in &self.blocks {
            match &slot.block {
                AnyBlock::Builtin(BuiltinBlock::VectorSource(s)) => {
                    samples_emitted += s.emitted();
                }
                AnyBlock::Builtin(BuiltinBlock::VectorSink(s)) => {
                    samples_collected += s.collected();
                }
                _ => {}
            }
        }
        RunSummary {
            passes,
            samples_emitted,
            samples_collected,
        }
    }
}

impl Default for Flowgraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a flowgraph running on a dedicated scheduler thread.
pub struct RunHandle {
    rx: Receiver<RunSummary>,
    handle: JoinHandle<Flowgraph>,
}

impl RunHandle {
    /// Block until the run completes; returns the summary and the graph.
    pub fn join(self) -> FlowResult<(RunSummary, Flowgraph)> {
        let summary = self.rx.recv().map_err(|_| FlowError::SchedulerPanic)?;
        let graph = self.handle.join().map_err(|_| FlowError::SchedulerPanic)?;
        Ok((summary, graph))
    }
}

/// Block IDs of a constructed copy chain, so callers can address the ends.
#[derive(Debug, Clone, Copy)]
pub struct ChainIds {
    pub source: BlockId,
    pub first_copy: BlockId,
    pub last_copy: BlockId,
    pub sink: BlockId,
}

/// Builder for the benchmark topology:
/// ```text
/// VectorSource → Copy × n_copy → VectorSink
/// ```
pub struct CopyChainBuilder {
    samples: Vec<f32>,
    n_copy: usize,
    sink_bound: Option<usize>,
}

impl CopyChainBuilder {
    pub fn new(samples: Vec<f32>) -> Self {
        Self {
            samples,
            n_copy: 1,
            sink_bound: None,
        }
    }

    /// Number of copy stages. Must be at least 1.
    pub fn n_copy(mut self, n_copy: usize) -> Self {
        self.n_copy = n_copy;
        self
    }

    /// Override the sink bound (defaults to the sample count).
    pub fn sink_bound(mut self, bound: usize) -> Self {
        self.sink_bound = Some(bound);
        self
    }

    /// Build the chain: `n_copy + 2` blocks joined by `n_copy + 1` edges
    /// forming a single simple path.
    pub fn build(self) -> FlowResult<(Flowgraph, ChainIds)> {
        if self.n_copy == 0 {
            return Err(FlowError::InvalidChain(0));
        }
        let bound = self.sink_bound.unwrap_or(self.samples.len());

        let mut graph = Flowgraph::new();

        let source = graph.add_block(VectorSource::new(self.samples));
        let mut prev = graph.add_block(CopyBlock::new());
        let first_copy = prev;
        graph.connect(source, 0, prev, 0)?;

        // The first copy stage is wired above; stages 1..n_copy extend it.
        for _stage in 1..self.n_copy {
            let block = graph.add_block(CopyBlock::new());
            graph.connect(prev, 0, block, 0)?;
            prev = block;
        }

        let sink = graph.add_block(VectorSink::with_bound(bound));
        graph.connect(prev, 0, sink, 0)?;

        Ok((
            graph,
            ChainIds {
                source,
                first_copy,
                last_copy: prev,
                sink,
            },
        ))
    }
}
