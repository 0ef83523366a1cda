//! Circuit structure ready for MNA assembly.

use super::index::{AuxiliaryIndexMap, NodeIndexMap};
use super::types::{BranchId, NodeId, VarIndex};
use super::validate::validate_unique_names;
use crate::error::Result;
use crate::netlist::{ElementKind, ElementRecord};

/// An element with its terminals resolved to node IDs.
#[derive(Debug, Clone)]
pub struct Element {
    /// The parsed netlist line
    pub record: ElementRecord,
    /// `[node_a, node_b]`
    pub nodes: [NodeId; 2],
    /// Branch current unknown, for voltage sources only
    pub branch: Option<BranchId>,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        self.record.kind
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn value(&self) -> f64 {
        self.record.value
    }
}

/// A complete circuit ready for assembly.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// All elements, in netlist order
    pub elements: Vec<Element>,

    /// Node name to index mapping (ground is index 0)
    pub nodes: NodeIndexMap,

    /// Voltage source name to branch current mapping
    pub branches: AuxiliaryIndexMap,
}

impl Circuit {
    /// Build a circuit from parsed records.
    ///
    /// Runs the ground check, node numbering, duplicate-name check and branch
    /// numbering as separate passes, in that order.
    pub fn from_records(records: Vec<ElementRecord>) -> Result<Self> {
        let nodes = NodeIndexMap::assign(&records)?;
        validate_unique_names(&records)?;
        let branches = AuxiliaryIndexMap::assign(&records, &nodes);

        log::debug!(
            "assigned {} nodes and {} branch currents",
            nodes.len(),
            branches.len()
        );

        let elements = records
            .into_iter()
            .map(|record| {
                let resolved = [
                    nodes.get(&record.node_a),
                    nodes.get(&record.node_b),
                ];
                let branch = branches.get(&record.name).map(|entry| entry.branch);
                Element {
                    nodes: resolved.map(|id| id.unwrap_or(NodeId::GROUND)),
                    branch,
                    record,
                }
            })
            .collect();

        Ok(Circuit {
            elements,
            nodes,
            branches,
        })
    }

    /// Number of nodes, ground included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of branch current unknowns.
    pub fn num_branches(&self) -> usize {
        self.branches.len()
    }

    /// Size of the full system, ground row/column included.
    pub fn system_size(&self) -> usize {
        self.num_nodes() + self.num_branches()
    }

    /// Get the full-system index for a node voltage.
    pub fn node_index(&self, node: NodeId) -> usize {
        VarIndex::Voltage(node).full_index(self.num_nodes())
    }

    /// Get the full-system index for a branch current.
    pub fn branch_index(&self, branch: BranchId) -> usize {
        VarIndex::Current(branch).full_index(self.num_nodes())
    }

    /// Find a node ID by name.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name)
    }

    /// Get the name of a node.
    pub fn node_name(&self, node: NodeId) -> &str {
        self.nodes.name(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DcSpiceError;
    use crate::netlist;

    fn circuit(body: &str) -> Result<Circuit> {
        let records = netlist::parse(&format!(".circuit\n{}\n.end\n", body))?;
        Circuit::from_records(records)
    }

    #[test]
    fn test_resolves_terminals_and_branches() {
        let c = circuit("V1 in GND 5\nR1 in out 1k\nR2 out GND 1k").unwrap();
        assert_eq!(c.num_nodes(), 3);
        assert_eq!(c.num_branches(), 1);
        assert_eq!(c.system_size(), 4);

        let v1 = &c.elements[0];
        assert_eq!(v1.nodes, [NodeId(1), NodeId::GROUND]);
        assert_eq!(v1.branch, Some(BranchId(0)));
        assert_eq!(c.branch_index(BranchId(0)), 3);

        let r1 = &c.elements[1];
        assert_eq!(r1.branch, None);
        assert_eq!(c.node_name(r1.nodes[1]), "out");
        assert_eq!(c.find_node("out").map(|n| c.node_index(n)), Some(2));
    }

    #[test]
    fn test_ground_checked_before_duplicates() {
        let err = circuit("R1 a b 1\nR1 b a 1").unwrap_err();
        assert!(matches!(err, DcSpiceError::MissingGround));
    }

    #[test]
    fn test_duplicate_voltage_sources() {
        let err = circuit("V1 a GND 1\nV1 a GND 2\nR1 a GND 1").unwrap_err();
        assert!(matches!(err, DcSpiceError::DuplicateElement { .. }));
    }
}
