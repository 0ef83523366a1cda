//! MNA matrix assembly and solving.

use nalgebra::{DMatrix, DVector};

use super::SolverConfig;
use crate::circuit::Circuit;
use crate::error::{DcSpiceError, Result};
use crate::netlist::ElementKind;

/// Full MNA system Ax = z, ground row/column included.
#[derive(Debug, Clone)]
pub struct MnaMatrix {
    /// System matrix A
    pub a: DMatrix<f64>,
    /// Source vector z
    pub z: DVector<f64>,
    /// Matrix dimension
    pub size: usize,
}

impl MnaMatrix {
    /// Create a zeroed system of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            a: DMatrix::zeros(size, size),
            z: DVector::zeros(size),
            size,
        }
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.a[(row, col)]
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.a[(row, col)] += value;
    }

    /// Add to source vector element.
    pub fn add_source(&mut self, row: usize, value: f64) {
        self.z[row] += value;
    }

    /// Stamp a conductance between two nodes.
    /// For a conductance G between nodes n1 and n2:
    ///   A[n1,n1] += G
    ///   A[n2,n2] += G
    ///   A[n1,n2] -= G
    ///   A[n2,n1] -= G
    pub fn stamp_conductance(&mut self, n1: usize, n2: usize, g: f64) {
        self.add(n1, n1, g);
        self.add(n1, n2, -g);
        self.add(n2, n2, g);
        self.add(n2, n1, -g);
    }

    /// Stamp a current source between two nodes.
    /// Current flows from n_pos through the source to n_neg.
    pub fn stamp_current_source(&mut self, n_pos: usize, n_neg: usize, current: f64) {
        self.add_source(n_pos, -current);
        self.add_source(n_neg, current);
    }

    /// Stamp a voltage source between two nodes with branch current at index br.
    /// V[n+] - V[n-] = E
    pub fn stamp_voltage_source(&mut self, n_pos: usize, n_neg: usize, br: usize, voltage: f64) {
        // Branch current leaves n+ and enters n-
        self.add(n_pos, br, 1.0);
        self.add(n_neg, br, -1.0);
        // KVL equation: V[n+] - V[n-] = E
        self.add(br, n_pos, 1.0);
        self.add(br, n_neg, -1.0);
        self.add_source(br, voltage);
    }

    /// Drop the ground row and column, leaving the system actually solved.
    pub fn reduce(&self) -> (DMatrix<f64>, DVector<f64>) {
        if self.size == 0 {
            return (DMatrix::zeros(0, 0), DVector::zeros(0));
        }
        let a = self.a.clone().remove_row(0).remove_column(0);
        let z = self.z.clone().remove_row(0);
        (a, z)
    }
}

/// Stamp every element of the circuit into a fresh full-size system.
pub fn stamp_circuit(circuit: &Circuit, config: &SolverConfig) -> MnaMatrix {
    let mut matrix = MnaMatrix::new(circuit.system_size());

    for element in &circuit.elements {
        let n1 = circuit.node_index(element.nodes[0]);
        let n2 = circuit.node_index(element.nodes[1]);

        match (element.kind(), element.branch) {
            (ElementKind::Resistor, _) => {
                if element.value() == 0.0 {
                    log::warn!(
                        "{} has zero resistance; stamping {:e} ohm instead",
                        element.name(),
                        config.zero_resistance
                    );
                }
                let g = config.conductance(element.value());
                log::trace!("stamp {} G={:e} at ({}, {})", element.name(), g, n1, n2);
                matrix.stamp_conductance(n1, n2, g);
            }

            (ElementKind::CurrentSource, _) => {
                log::trace!("stamp {} I={} at ({}, {})", element.name(), element.value(), n1, n2);
                matrix.stamp_current_source(n1, n2, element.value());
            }

            (ElementKind::VoltageSource, Some(branch)) => {
                let br = circuit.branch_index(branch);
                log::trace!(
                    "stamp {} E={} at ({}, {}) branch row {}",
                    element.name(),
                    element.value(),
                    n1,
                    n2,
                    br
                );
                matrix.stamp_voltage_source(n1, n2, br, element.value());
            }

            // Circuit::from_records gives every voltage source a branch
            (ElementKind::VoltageSource, None) => {}
        }
    }

    matrix
}

/// Solve a dense linear system Ax = b by LU decomposition.
///
/// A singular matrix is a circuit with no solution.
pub fn solve_dense(a: DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    if a.nrows() == 0 {
        return Ok(DVector::zeros(0));
    }
    a.lu().solve(b).ok_or(DcSpiceError::SingularMatrix)
}
