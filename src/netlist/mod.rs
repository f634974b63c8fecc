//! Netlist text reader.
//!
//! A netlist is line-oriented, one component per line:
//!
//! ```text
//! <name> <node_i> <node_j> <value>
//! ```
//!
//! The first letter of the name selects the component type:
//!
//! | Prefix | Component | Value |
//! |--------|-----------|-------|
//! | R | Resistor | ohms |
//! | V | Voltage source (+ at node_i) | volts |
//! | I | Current source (from node_i to node_j) | amps |
//!
//! Nodes are non-negative integers, `0` or `GND` being ground. Values take
//! the usual SI suffixes (`p n u m k meg M G`). Lines starting with `*`,
//! `#` or `;` are comments, and `#`/`;` also start an inline comment.
//!
//! # Example
//!
//! ```text
//! * Voltage divider
//! V1 1 0 9
//! R1 1 2 2k
//! R2 2 0 1k
//! ```

mod parser;
mod value;

pub use parser::parse;
pub use value::{parse_node, parse_value};

use crate::circuit::Netlist;
use crate::error::{NodalError, Result};

/// Read and parse a netlist file.
pub fn parse_file(path: &std::path::Path) -> Result<Netlist> {
    let content = std::fs::read_to_string(path).map_err(|e| NodalError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
