use super::executor::{BlockSlot, Edge};
use super::plan::{ExecutionPlan, PlanStats};
use super::port::{input_count, output_count};
use std::collections::VecDeque;

/// Compiles a flowgraph into an optimized execution plan
pub struct PlanCompiler;

impl PlanCompiler {
    /// Compile a flowgraph into an optimized execution plan.
    ///
    /// This performs bidirectional reachability analysis to identify which
    /// blocks participate in active data flow (have both upstream sources AND
    /// downstream sinks).
    ///
    /// # Arguments
    /// * `blocks` - All blocks in the graph (including disconnected)
    /// * `edges` - All edges in the graph
    /// * `generation` - Generation counter for cache invalidation
    ///
    /// # Returns
    /// An `ExecutionPlan` containing only active blocks in topological order
    pub fn compile(blocks: &[BlockSlot], edges: &[Edge], generation: u64) -> ExecutionPlan {
        let start_time = std::time::Instant::now();

        let n = blocks.len();
        if n == 0 {
            return ExecutionPlan {
                active_blocks: Vec::new(),
                active_edges: Vec::new(),
                generation,
                stats: PlanStats::default(),
                inactive_sink_blocks: Vec::new(),
            };
        }

        // Build adjacency lists (forward and backward)
        let (fwd_adj, bwd_adj) = Self::build_adjacency(blocks, edges);

        // Identify sources and sinks from port structure
        let sources = Self::identify_sources(blocks);
        let sinks = Self::identify_sinks(blocks);

        // Forward reachability from sources
        let fwd_reachable = Self::reachability(&sources, &fwd_adj, n);

        // Backward reachability from sinks
        let bwd_reachable = Self::reachability(&sinks, &bwd_adj, n);

        // Active set: blocks on a path from a source to a sink
        let active_set: Vec<bool> = (0..n)
            .map(|i| fwd_reachable[i] && bwd_reachable[i])
            .collect();

        // Topological sort of active blocks
        let active_blocks = Self::topological_sort_active(blocks, edges, &active_set);

        // Filter edges to only include active → active connections
        let active_edges = Self::filter_active_edges(edges, &active_set);

        // Identify inactive sink blocks (disconnected from sources)
        let inactive_sink_blocks: Vec<usize> = sinks
            .iter()
            .filter(|&&sink_idx| !active_set[sink_idx])
            .copied()
            .collect();

        let compile_time_us = start_time.elapsed().as_micros() as u64;

        let active_count = active_blocks.len();
        let stats = PlanStats {
            total_blocks: n,
            active_blocks: active_count,
            disconnected_blocks: n.saturating_sub(active_count),
            source_blocks: sources.len(),
            sink_blocks: sinks.len(),
            compile_time_us,
        };

        ExecutionPlan {
            active_blocks,
            active_edges,
            generation,
            stats,
            inactive_sink_blocks,
        }
    }

    /// Build forward and backward adjacency lists
    fn build_adjacency(blocks: &[BlockSlot], edges: &[Edge]) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
        let n = blocks.len();
        let mut fwd_adj = vec![Vec::new(); n];
        let mut bwd_adj = vec![Vec::new(); n];

        for edge in edges {
            let from = edge.from_block.index();
            let to = edge.to_block.index();

            if from >= n || to >= n {
                continue;
            }

            fwd_adj[from].push(to);
            bwd_adj[to].push(from);
        }

        (fwd_adj, bwd_adj)
    }

    /// Identify source blocks — blocks with no input ports.
    ///
    /// A source is defined by its port structure, not edge connectivity.
    fn identify_sources(blocks: &[BlockSlot]) -> Vec<usize> {
        blocks
            .iter()
            .enumerate()
            .filter(|(_, slot)| input_count(slot.block.ports()) == 0)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Identify sink blocks — blocks with no output ports.
    fn identify_sinks(blocks: &[BlockSlot]) -> Vec<usize> {
        blocks
            .iter()
            .enumerate()
            .filter(|(_, slot)| output_count(slot.block.ports()) == 0)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Reachability analysis from a seed set using DFS over an adjacency list.
    fn reachability(seeds: &[usize], adj: &[Vec<usize>], n: usize) -> Vec<bool> {
        let mut reachable = vec![false; n];
        let mut stack = Vec::new();

        for &seed in seeds {
            reachable[seed] = true;
            stack.push(seed);
        }

        while let Some(block) = stack.pop() {
            for &neighbor in &adj[block] {
                if !reachable[neighbor] {
                    reachable[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }

        reachable
    }

    /// Topological sort of active blocks using Kahn's algorithm
    fn topological_sort_active(
        blocks: &[BlockSlot],
        edges: &[Edge],
        active_set: &[bool],
    ) -> Vec<usize> {
        let n = blocks.len();

        // Build adjacency list for active blocks only
        let mut adj = vec![Vec::new(); n];
        let mut in_degree = vec![0; n];

        for edge in edges {
            let from = edge.from_block.index();
            let to = edge.to_block.index();

            if from >= n || to >= n {
                continue;
            }

            if active_set[from] && active_set[to] {
                adj[from].push(to);
                in_degree[to] += 1;
            }
        }

        // Kahn's algorithm
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        for i in 0..n {
            if active_set[i] && in_degree[i] == 0 {
                queue.push_back(i);
            }
        }

        while let Some(block) = queue.pop_front() {
            result.push(block);

            for &neighbor in &adj[block] {
                in_degree[neighbor] -= 1;
                if in_degree[neighbor] == 0 {
                    queue.push_back(neighbor);
                }
            }
        }

        result
    }

    /// Filter edges to only include active → active connections
    fn filter_active_edges(edges: &[Edge], active_set: &[bool]) -> Vec<(usize, usize)> {
        edges
            .iter()
            .filter_map(|edge| {
                let from = edge.from_block.index();
                let to = edge.to_block.index();

                if from < active_set.len()
                    && to < active_set.len()
                    && active_set[from]
                    && active_set[to]
                {
                    Some((from, to))
                } else {
                    None
                }
            })
            .collect()
    }
}
