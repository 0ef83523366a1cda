//! DC operating point solve and result extraction.

use std::collections::HashMap;

use nalgebra::DVector;

use super::mna::{solve_dense, stamp_circuit};
use super::SolverConfig;
use crate::circuit::{Circuit, NodeId, VarIndex};
use crate::error::{DcSpiceError, Result};

/// Solved node voltages and voltage source currents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DcSolution {
    /// Voltage of every node, ground included (always 0.0)
    pub node_voltages: HashMap<String, f64>,
    /// Current through every voltage source, flowing from its first
    /// terminal through the source to its second terminal
    pub source_currents: HashMap<String, f64>,
}

impl DcSolution {
    /// Voltage at a node.
    pub fn voltage(&self, node: &str) -> Option<f64> {
        self.node_voltages.get(node).copied()
    }

    /// Current through a voltage source.
    pub fn current(&self, source: &str) -> Option<f64> {
        self.source_currents.get(source).copied()
    }

    /// V(a) - V(b).
    pub fn voltage_across(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.voltage(a)? - self.voltage(b)?)
    }

    /// Split into `(node_voltages, source_currents)`.
    pub fn into_parts(self) -> (HashMap<String, f64>, HashMap<String, f64>) {
        (self.node_voltages, self.source_currents)
    }
}

/// DC operating point solver.
#[derive(Debug, Clone, Default)]
pub struct DcSolver {
    config: SolverConfig,
}

impl DcSolver {
    /// Create a solver with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Assemble, reduce and solve the circuit.
    pub fn solve(&self, circuit: &Circuit) -> Result<DcSolution> {
        let matrix = stamp_circuit(circuit, &self.config);
        let (a, z) = matrix.reduce();
        log::debug!("solving reduced {}x{} system", a.nrows(), a.ncols());

        let x = solve_dense(a, &z)?;
        self.extract(circuit, &x)
    }

    /// Map the reduced solution vector back onto node and source names.
    fn extract(&self, circuit: &Circuit, x: &DVector<f64>) -> Result<DcSolution> {
        let num_nodes = circuit.num_nodes();
        let mut solution = DcSolution::default();

        for entry in circuit.branches.iter() {
            let current = x[VarIndex::Current(entry.branch).to_index(num_nodes)];
            if current.is_nan() {
                return Err(DcSpiceError::NonFiniteSolution {
                    unknown: format!("I({})", entry.name),
                });
            }
            if current.abs() > self.config.current_limit {
                return Err(DcSpiceError::CurrentOverflow {
                    source_name: entry.name.clone(),
                    value: current,
                });
            }
            solution.source_currents.insert(entry.name.clone(), current);
        }

        for (name, node) in circuit.nodes.iter() {
            let voltage = if node == NodeId::GROUND {
                0.0
            } else {
                x[VarIndex::Voltage(node).to_index(num_nodes)]
            };
            if !voltage.is_finite() {
                return Err(DcSpiceError::NonFiniteSolution {
                    unknown: format!("V({})", name),
                });
            }
            solution.node_voltages.insert(name.to_string(), voltage);
        }

        Ok(solution)
    }
}
