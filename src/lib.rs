//! # Nodal Core
//!
//! DC solver for linear resistive circuits.
//!
//! This library provides:
//! - A netlist reader for resistor / voltage source / current source circuits
//! - Modified Nodal Analysis (MNA) matrix sizing and stamping
//! - A dense LU solve reporting node voltages and voltage-source currents
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`netlist`] - Reader for the netlist text format
//! - [`circuit`] - Components, netlists and validation
//! - [`solver`] - MNA sizing, stamping and numerical solving
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! nodal divider.cir
//! ```
//!
//! ### Library
//!
//! ```
//! use nodal_core::circuit::{Component, Netlist};
//! use nodal_core::solve_netlist;
//!
//! let netlist: Netlist = vec![
//!     Component::voltage_source("V1", 1, 0, 5.0),
//!     Component::resistor("R1", 1, 0, 10.0),
//! ]
//! .into();
//!
//! let solution = solve_netlist(&netlist)?;
//! assert!((solution.values()[0] - 5.0).abs() < 1e-12);
//! assert!((solution.values()[1] + 0.5).abs() < 1e-12);
//! # Ok::<(), nodal_core::NodalError>(())
//! ```
//!
//! ## Solution Layout
//!
//! For a netlist whose highest node number is `n` and which contains `m`
//! voltage sources, the solution has `n + m` entries: the voltages of nodes
//! `1..=n` relative to ground, then the current through each voltage source
//! in the order the sources appear in the netlist. A source current is
//! positive when it flows into the source's positive terminal from the
//! external circuit, so a source delivering power reports a negative current.

pub mod circuit;
pub mod error;
pub mod netlist;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Component, ComponentKind, Netlist, NodeId};
pub use error::{NodalError, Result};
pub use solver::{solve_netlist, Solution};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::solve_netlist_text;
