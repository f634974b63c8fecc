//! DC operating point of a netlist.

use crate::circuit::{check_topology, Netlist};
use crate::error::{NodalError, Result};

use super::dimension::{dimension, Dimensions};
use super::lu::LuFactors;
use super::mna::MnaMatrix;
use super::solution::Solution;
use super::stamp::stamp_netlist;

/// Assemble the MNA system for a netlist without solving it.
pub fn assemble(netlist: &Netlist) -> Result<(Dimensions, MnaMatrix)> {
    let dims = dimension(netlist)?;
    let mut matrix = MnaMatrix::new(dims.size());

    let rows = stamp_netlist(&mut matrix, netlist, dims.node_count)?;
    check_dimensions(dims.size(), rows)?;

    Ok((dims, matrix))
}

/// Solve a netlist for its node voltages and voltage-source currents.
///
/// Floating nodes and voltage-source loops are reported as
/// `SingularSystem` from the circuit graph; anything the graph cannot see
/// (resistances that cancel, for instance) is caught by the LU pivot test.
pub fn solve_netlist(netlist: &Netlist) -> Result<Solution> {
    let (dims, matrix) = assemble(netlist)?;
    check_topology(netlist, dims.node_count)?;

    let values = LuFactors::factor(&matrix)?.solve(matrix.currents())?;

    log::debug!(
        "solved {} unknowns ({} node voltages, {} branch currents)",
        dims.size(),
        dims.node_count,
        dims.voltage_source_count
    );

    Ok(Solution::new(dims.node_count, values))
}

fn check_dimensions(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        log::error!(
            "stamper produced {} equations for a system of size {}",
            actual,
            expected
        );
        debug_assert_eq!(expected, actual, "stamped equation count disagrees with dimensions");
        return Err(NodalError::dimension_mismatch(expected, actual));
    }
    Ok(())
}
