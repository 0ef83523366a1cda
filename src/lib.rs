//! # DcSpice Core
//!
//! A DC operating point solver for linear resistive circuits.
//!
//! This library provides:
//! - A reader for `.circuit` ... `.end` netlists of R, I and V elements
//! - Node and branch-current index assignment with `GND` as the reference
//! - Modified Nodal Analysis (MNA) assembly and a dense LU solve
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`netlist`] - Block extraction and element line parsing
//! - [`circuit`] - Index assignment and validation
//! - [`solver`] - MNA matrix assembly, solving and result extraction
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! dcspice divider.ckt
//! ```
//!
//! ### Library
//!
//! ```no_run
//! let solution = dcspice_core::evaluate_file("divider.ckt")?;
//! println!("V(out) = {:?}", solution.voltage("out"));
//! # Ok::<(), dcspice_core::DcSpiceError>(())
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmDcSolution } from 'dcspice_core';
//!
//! const sol = new WasmDcSolution(netlistText);
//! sol.node_voltage("out");
//! ```
//!
//! ## Solution Method
//!
//! 1. Number every node (ground is 0) and every voltage source branch current
//! 2. Stamp each element into the full system matrix A and source vector z
//! 3. Drop the ground row and column, then solve the reduced system
//! 4. Read node voltages and source currents back out, pinning ground at 0 V

pub mod circuit;
pub mod error;
pub mod netlist;
pub mod solver;

// Re-export main types for convenience
pub use circuit::Circuit;
pub use error::{DcSpiceError, ErrorKind, Result};
pub use solver::{DcSolution, DcSolver, SolverConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmDcSolution;

use std::path::Path;

/// Solve the netlist file at `path` with default settings.
pub fn evaluate_file(path: impl AsRef<Path>) -> Result<DcSolution> {
    evaluate_file_with(path, SolverConfig::default())
}

/// Solve the netlist file at `path`.
pub fn evaluate_file_with(path: impl AsRef<Path>, config: SolverConfig) -> Result<DcSolution> {
    let records = netlist::parse_file(path.as_ref())?;
    solve_records(records, config)
}

/// Solve netlist text with default settings.
pub fn evaluate_str(input: &str) -> Result<DcSolution> {
    evaluate_str_with(input, SolverConfig::default())
}

/// Solve netlist text.
pub fn evaluate_str_with(input: &str, config: SolverConfig) -> Result<DcSolution> {
    solve_records(netlist::parse(input)?, config)
}

fn solve_records(records: Vec<netlist::ElementRecord>, config: SolverConfig) -> Result<DcSolution> {
    let circuit = Circuit::from_records(records)?;
    DcSolver::with_config(config).solve(&circuit)
}
