//! MNA (Modified Nodal Analysis) solver.
//!
//! This module turns a [`Netlist`](crate::circuit::Netlist) into a dense
//! linear system and solves it.
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
//! - B, C = Bᵀ connect voltage sources to nodes
//! - v is the vector of node voltages
//! - j is the vector of voltage source currents
//! - i is the sum of current sources into each node
//! - e is the vector of voltage source values
//!
//! ## Pipeline
//!
//! 1. [`dimension`] validates the netlist and counts nodes and voltage sources
//! 2. [`MnaMatrix::new`] allocates a zeroed system of that size
//! 3. [`stamp_netlist`] adds each component's stamp
//! 4. [`check_topology`](crate::circuit::check_topology) rejects floating
//!    nodes and voltage-source loops
//! 5. [`LuFactors::factor`] / [`LuFactors::solve`] run a pivoted LU solve
//!
//! [`solve_netlist`] runs all of the above.

mod analysis;
mod dimension;
mod lu;
mod mna;
mod solution;
mod stamp;

pub use analysis::{assemble, solve_netlist};
pub use dimension::{dimension, Dimensions};
pub use lu::LuFactors;
pub use mna::MnaMatrix;
pub use solution::Solution;
pub use stamp::stamp_netlist;

/// Largest system (node voltages plus branch currents) the dense solver accepts.
pub const MAX_UNKNOWNS: usize = 4096;
