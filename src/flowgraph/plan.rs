/// Compiled execution plan for a flowgraph.
/// Contains only active blocks (blocks participating in data flow from
/// sources to sinks).
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    /// Active block indices in topological order
    pub active_blocks: Vec<usize>,

    /// Pre-computed edge routing (from_idx, to_idx)
    pub active_edges: Vec<(usize, usize)>,

    /// Cache invalidation generation number
    pub generation: u64,

    /// Compilation statistics
    pub stats: PlanStats,

    /// Sink blocks that are not in active_blocks (disconnected from sources)
    pub inactive_sink_blocks: Vec<usize>,
}

/// Statistics about the compiled plan
#[derive(Debug, Clone, Default)]
pub struct PlanStats {
    /// Total number of blocks in the graph (including disconnected)
    pub total_blocks: usize,

    /// Number of active blocks in the execution plan
    pub active_blocks: usize,

    /// Number of disconnected blocks (not in execution plan)
    pub disconnected_blocks: usize,

    /// Number of source blocks (no input ports)
    pub source_blocks: usize,

    /// Number of sink blocks (no output ports)
    pub sink_blocks: usize,

    /// Compilation time in microseconds
    pub compile_time_us: u64,
}

impl ExecutionPlan {
    /// Create a new empty plan
    pub fn new() -> Self {
        Self {
            active_blocks: Vec::new(),
            active_edges: Vec::new(),
            generation: 0,
            stats: PlanStats::default(),
            inactive_sink_blocks: Vec::new(),
        }
    }

    /// Check if the plan has any active blocks
    pub fn is_empty(&self) -> bool {
        self.active_blocks.is_empty()
    }
}

impl Default for ExecutionPlan {
    fn default() -> Self {
        Self::new()
    }
}
