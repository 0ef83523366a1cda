//! DcSpice - DC operating point solver
//!
//! Solves a linear resistive netlist and prints every node voltage and
//! voltage source current.
//!
//! # Usage
//!
//! ```bash
//! dcspice divider.ckt
//! dcspice --current-limit 1e6 --verbose bridge.ckt
//! ```

use std::path::PathBuf;

use clap::Parser;
use dcspice_core::{
    circuit::Circuit,
    error::Result,
    netlist,
    solver::{DcSolver, SolverConfig, CURRENT_LIMIT},
};

/// DC operating point solver for R/I/V netlists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file (.circuit ... .end)
    #[arg(value_name = "NETLIST")]
    netlist_file: PathBuf,

    /// Largest voltage source current (A) accepted as a valid solution
    #[arg(long, default_value_t = CURRENT_LIMIT)]
    current_limit: f64,

    /// Print circuit statistics before the results
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse the netlist file
    let records = netlist::parse_file(&args.netlist_file)?;

    // Build the circuit
    let circuit = Circuit::from_records(records)?;

    if args.verbose {
        println!(
            "{} elements, {} nodes, {} voltage sources",
            circuit.elements.len(),
            circuit.num_nodes(),
            circuit.num_branches()
        );
    }

    // Solve
    let config = SolverConfig::new().with_current_limit(args.current_limit);
    let solution = DcSolver::with_config(config).solve(&circuit)?;

    let mut voltages: Vec<_> = solution.node_voltages.iter().collect();
    voltages.sort_by(|a, b| a.0.cmp(b.0));
    println!("Node voltages:");
    for (name, v) in voltages {
        println!("  V({}) = {:.6e} V", name, v);
    }

    if !solution.source_currents.is_empty() {
        let mut currents: Vec<_> = solution.source_currents.iter().collect();
        currents.sort_by(|a, b| a.0.cmp(b.0));
        println!("Voltage source currents:");
        for (name, i) in currents {
            println!("  I({}) = {:.6e} A", name, i);
        }
    }

    Ok(())
}
