//! Unknown index assignment for nodes and voltage source branches.

use std::collections::HashMap;

use super::types::{BranchId, NodeId, VarIndex};
use crate::error::{DcSpiceError, Result};
use crate::netlist::{ElementKind, ElementRecord};

/// Name of the reference node.
pub const GROUND_NAME: &str = "GND";

/// Mapping from node names to node IDs, in first-seen order after ground.
#[derive(Debug, Clone, Default)]
pub struct NodeIndexMap {
    indices: HashMap<String, NodeId>,
    names: Vec<String>,
}

impl NodeIndexMap {
    /// Discover every node referenced by `records`.
    ///
    /// Ground is claimed first so it always receives index 0; the remaining
    /// nodes are numbered in record order, `node_a` before `node_b`.
    pub fn assign(records: &[ElementRecord]) -> Result<Self> {
        let mut map = Self::default();

        let has_ground = records
            .iter()
            .any(|r| r.terminals().contains(&GROUND_NAME));
        if !has_ground {
            return Err(DcSpiceError::MissingGround);
        }
        map.insert(GROUND_NAME);

        for record in records {
            for name in record.terminals() {
                map.insert(name);
            }
        }

        Ok(map)
    }

    fn insert(&mut self, name: &str) {
        if !self.indices.contains_key(name) {
            self.indices.insert(name.to_string(), NodeId(self.names.len()));
            self.names.push(name.to_string());
        }
    }

    /// Look up a node by name.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.indices.get(name).copied()
    }

    /// Name of a node.
    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node.0]
    }

    /// Node names ordered by index (ground first).
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of nodes, ground included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no node has been assigned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(name, id)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), NodeId(i)))
    }
}

/// A voltage source's branch current unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct AuxiliaryEntry {
    /// Voltage source name
    pub name: String,
    /// Positive terminal
    pub node_a: String,
    /// Negative terminal
    pub node_b: String,
    /// Branch number among voltage sources
    pub branch: BranchId,
    /// Row/column in the full system, in `[num_nodes, num_nodes + num_sources)`
    pub index: usize,
}

/// Mapping from voltage source names to their branch current unknowns.
#[derive(Debug, Clone, Default)]
pub struct AuxiliaryIndexMap {
    entries: Vec<AuxiliaryEntry>,
    by_name: HashMap<String, usize>,
}

impl AuxiliaryIndexMap {
    /// Number every voltage source in record order, after all node indices.
    pub fn assign(records: &[ElementRecord], nodes: &NodeIndexMap) -> Self {
        let mut map = Self::default();
        let num_nodes = nodes.len();

        for record in records
            .iter()
            .filter(|r| r.kind == ElementKind::VoltageSource)
        {
            let branch = BranchId(map.entries.len());
            map.by_name.insert(record.name.clone(), map.entries.len());
            map.entries.push(AuxiliaryEntry {
                name: record.name.clone(),
                node_a: record.node_a.clone(),
                node_b: record.node_b.clone(),
                branch,
                index: VarIndex::Current(branch).full_index(num_nodes),
            });
        }

        map
    }

    /// Look up a voltage source by name.
    pub fn get(&self, name: &str) -> Option<&AuxiliaryEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Number of voltage sources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the circuit has no voltage sources.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in branch order.
    pub fn iter(&self) -> impl Iterator<Item = &AuxiliaryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist;

    fn records(body: &str) -> Vec<ElementRecord> {
        netlist::parse(&format!(".circuit\n{}\n.end\n", body)).unwrap()
    }

    #[test]
    fn test_ground_is_zero_even_when_seen_late() {
        let recs = records("R1 a b 1\nR2 b c 1\nR3 c GND 1");
        let nodes = NodeIndexMap::assign(&recs).unwrap();
        assert_eq!(nodes.get("GND"), Some(NodeId::GROUND));
        assert_eq!(nodes.get("a"), Some(NodeId(1)));
        assert_eq!(nodes.get("b"), Some(NodeId(2)));
        assert_eq!(nodes.get("c"), Some(NodeId(3)));
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes.names(), ["GND", "a", "b", "c"]);
        assert_eq!(nodes.name(NodeId(2)), "b");
    }

    #[test]
    fn test_missing_ground() {
        let recs = records("R1 a b 1\nI1 a b 1");
        assert!(matches!(
            NodeIndexMap::assign(&recs),
            Err(DcSpiceError::MissingGround)
        ));
        assert!(matches!(
            NodeIndexMap::assign(&[]),
            Err(DcSpiceError::MissingGround)
        ));
    }

    #[test]
    fn test_ground_name_is_case_sensitive() {
        let recs = records("R1 a gnd 1");
        assert!(NodeIndexMap::assign(&recs).is_err());
    }

    #[test]
    fn test_auxiliary_indices_follow_nodes() {
        let recs = records("V1 a GND 5\nR1 a b 1\nV2 b GND 1\nI1 GND b 1");
        let nodes = NodeIndexMap::assign(&recs).unwrap();
        let aux = AuxiliaryIndexMap::assign(&recs, &nodes);
        assert_eq!(aux.len(), 2);

        let v1 = aux.get("V1").unwrap();
        assert_eq!(v1.index, 3);
        assert_eq!(v1.branch, BranchId(0));
        assert_eq!((v1.node_a.as_str(), v1.node_b.as_str()), ("a", "GND"));

        let v2 = aux.get("V2").unwrap();
        assert_eq!(v2.index, 4);
        assert!(aux.get("I1").is_none());
    }
}
