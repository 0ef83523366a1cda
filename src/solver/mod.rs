//! MNA (Modified Nodal Analysis) solver.
//!
//! This module provides the numerical engine for the DC operating point.
//!
//! ## Modified Nodal Analysis
//!
//! MNA assembles a system of equations Ax = z where:
//! - x contains node voltages and branch currents
//! - A is the conductance/coefficient matrix
//! - z is the source vector
//!
//! The matrix structure is:
//! ```text
//! [ G   B ] [ v ]   [ i ]
//! [ C   0 ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G is the conductance matrix (node equations)
//! - B, C connect voltage sources to nodes (C = Bᵀ)
//! - v is the vector of node voltages
//! - j is the vector of voltage source currents
//! - i is the sum of current sources into each node
//! - e is the vector of voltage source values
//!
//! The system is assembled with ground as row/column 0. That row and column
//! are dropped before solving: ground's KCL equation is the negated sum of
//! all the others, and its voltage is pinned at 0.

mod dc;
mod mna;

pub use dc::{DcSolution, DcSolver};
pub use mna::{solve_dense, stamp_circuit, MnaMatrix};

/// Resistance substituted for a 0 Ω resistor: the smallest positive normal
/// `f64`. Its reciprocal (~4.5e307) is still finite.
pub const ZERO_RESISTANCE: f64 = f64::MIN_POSITIVE;

/// Largest voltage source current magnitude accepted as a real solution.
/// Anything beyond this comes from a shorted source blowing up.
pub const CURRENT_LIMIT: f64 = 1e290;

/// Configuration for the DC solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Resistance used in place of an exact 0 Ω resistor.
    pub zero_resistance: f64,
    /// Blow-up bound for voltage source currents.
    pub current_limit: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            zero_resistance: ZERO_RESISTANCE,
            current_limit: CURRENT_LIMIT,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resistance substituted for 0 Ω resistors.
    pub fn with_zero_resistance(mut self, zero_resistance: f64) -> Self {
        self.zero_resistance = zero_resistance;
        self
    }

    /// Set the blow-up bound for voltage source currents (amps).
    ///
    /// Lower it to reject circuits whose shorts only produce large, rather
    /// than astronomically large, currents.
    pub fn with_current_limit(mut self, current_limit: f64) -> Self {
        self.current_limit = current_limit;
        self
    }

    /// Conductance stamped for a resistor of `resistance` ohms.
    pub fn conductance(&self, resistance: f64) -> f64 {
        if resistance == 0.0 {
            1.0 / self.zero_resistance
        } else {
            1.0 / resistance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_resistance_conductance_is_finite() {
        let config = SolverConfig::default();
        let g = config.conductance(0.0);
        assert!(g.is_finite());
        assert!(g > 1e307);
        assert_eq!(config.conductance(4.0), 0.25);
        assert_eq!(config.conductance(-2.0), -0.5);
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::new()
            .with_zero_resistance(1e-9)
            .with_current_limit(1e6);
        assert_eq!(config.conductance(0.0), 1e9);
        assert_eq!(config.current_limit, 1e6);
    }
}
