//! WASM bindings for DcSpice Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmDcSolution } from 'dcspice_core';
//!
//! await init();
//!
//! const netlist = `
//! .circuit
//! V1 in GND 10
//! R1 in out 1k
//! R2 out GND 1k
//! .end
//! `;
//!
//! const sol = new WasmDcSolution(netlist);
//! sol.node_voltage("out");   // 5
//! sol.source_current("V1");  // -0.005
//! ```

use wasm_bindgen::prelude::*;

use crate::solver::{DcSolution, SolverConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A solved DC operating point, exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmDcSolution {
    solution: DcSolution,
}

#[wasm_bindgen]
impl WasmDcSolution {
    /// Solve a netlist string with default settings.
    ///
    /// Throws the error message as a string if the netlist is malformed or
    /// the circuit has no solution.
    #[wasm_bindgen(constructor)]
    pub fn new(netlist: &str) -> Result<WasmDcSolution, JsValue> {
        Self::with_current_limit(netlist, crate::solver::CURRENT_LIMIT)
    }

    /// Solve a netlist string with a custom blow-up bound for source currents.
    #[wasm_bindgen]
    pub fn with_current_limit(netlist: &str, current_limit: f64) -> Result<WasmDcSolution, JsValue> {
        let config = SolverConfig::new().with_current_limit(current_limit);
        let solution = crate::evaluate_str_with(netlist, config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmDcSolution { solution })
    }

    /// The voltage at a named node, or `undefined` if the node doesn't exist.
    #[wasm_bindgen]
    pub fn node_voltage(&self, node_name: &str) -> Option<f64> {
        self.solution.voltage(node_name)
    }

    /// The current through a named voltage source, or `undefined`.
    #[wasm_bindgen]
    pub fn source_current(&self, source_name: &str) -> Option<f64> {
        self.solution.current(source_name)
    }

    /// All node names, sorted.
    #[wasm_bindgen]
    pub fn node_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.solution.node_voltages.keys().cloned().collect();
        names.sort();
        names
    }

    /// All voltage source names, sorted.
    #[wasm_bindgen]
    pub fn source_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.solution.source_currents.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
