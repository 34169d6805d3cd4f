//! Port descriptors for the block system.
//!
//! Each block declares its ports (inputs/outputs) via static `PortDescriptor`
//! arrays. The flowgraph uses these to validate edge connections and to
//! identify sources (no inputs) and sinks (no outputs) structurally.

/// Whether a port is an input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

/// Static descriptor for a block's port.
#[derive(Debug, Clone)]
pub struct PortDescriptor {
    pub name: &'static str,
    pub direction: PortDirection,
}

impl PortDescriptor {
    pub const fn input(name: &'static str) -> Self {
        Self {
            name,
            direction: PortDirection::Input,
        }
    }

    pub const fn output(name: &'static str) -> Self {
        Self {
            name,
            direction: PortDirection::Output,
        }
    }
}

/// Number of input ports in a descriptor array.
pub fn input_count(ports: &[PortDescriptor]) -> usize {
    ports
        .iter()
        .filter(|p| p.direction == PortDirection::Input)
        .count()
}

/// Number of output ports in a descriptor array.
pub fn output_count(ports: &[PortDescriptor]) -> usize {
    ports
        .iter()
        .filter(|p| p.direction == PortDirection::Output)
        .count()
}
