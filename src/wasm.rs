//! WASM bindings for Nodal Core.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { solve_netlist_text } from 'nodal_core';
//!
//! await init();
//!
//! const x = solve_netlist_text(`
//!   V1 1 0 5
//!   R1 1 0 10
//! `);
//! // x = Float64Array [5, -0.5]
//! ```

use wasm_bindgen::prelude::*;

use crate::error::NodalError;
use crate::netlist;
use crate::solver::solve_netlist;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Parse and solve a netlist, returning the raw solution vector.
///
/// Node voltages come first, then voltage-source currents in netlist order.
/// Errors are returned as JavaScript strings.
#[wasm_bindgen]
pub fn solve_netlist_text(text: &str) -> Result<Vec<f64>, JsValue> {
    let netlist = netlist::parse(text).map_err(to_js)?;
    let solution = solve_netlist(&netlist).map_err(to_js)?;
    Ok(solution.into_values())
}

fn to_js(e: NodalError) -> JsValue {
    let wrapped = NodalError::WasmError {
        message: e.to_string(),
    };
    JsValue::from_str(&wrapped.to_string())
}
