//! Core types for circuit representation.

use std::fmt;

/// A unique identifier for a node in the circuit.
/// Node 0 is always ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The ground node (always index 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "GND")
        } else {
            write!(f, "N{}", self.0)
        }
    }
}

/// Index of a voltage source branch current among all branch currents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchId(pub usize);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}

/// An unknown of the MNA system: a node voltage or a branch current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarIndex {
    /// Node voltage variable
    Voltage(NodeId),
    /// Branch current variable (voltage sources)
    Current(BranchId),
}

impl VarIndex {
    /// Row/column in the full system, where ground still occupies index 0
    /// and branch currents follow all `num_nodes` node voltages.
    pub fn full_index(&self, num_nodes: usize) -> usize {
        match self {
            VarIndex::Voltage(NodeId(n)) => *n,
            VarIndex::Current(BranchId(b)) => num_nodes + b,
        }
    }

    /// Position in the reduced system, after the ground row/column is dropped.
    pub fn to_index(&self, num_nodes: usize) -> usize {
        if let VarIndex::Voltage(node) = self {
            debug_assert!(!node.is_ground(), "Ground node should not be in solution vector");
        }
        self.full_index(num_nodes) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_skip_ground() {
        let num_nodes = 3;
        assert_eq!(VarIndex::Voltage(NodeId(1)).to_index(num_nodes), 0);
        assert_eq!(VarIndex::Voltage(NodeId(2)).full_index(num_nodes), 2);
        assert_eq!(VarIndex::Current(BranchId(0)).full_index(num_nodes), 3);
        assert_eq!(VarIndex::Current(BranchId(1)).to_index(num_nodes), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeId::GROUND.to_string(), "GND");
        assert_eq!(NodeId(4).to_string(), "N4");
        assert_eq!(BranchId(2).to_string(), "I2");
    }
}
