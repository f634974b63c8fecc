//! Netlist stamping.

use crate::circuit::{validate_component, BranchId, Component, ComponentKind, Netlist, NodeId};
use crate::error::{NodalError, Result};

use super::mna::MnaMatrix;

/// Stamp every component of `netlist` into `matrix`.
///
/// `matrix` must be zeroed and sized for `node_count` node voltages plus one
/// branch current per voltage source. Voltage sources claim augmented rows
/// `node_count, node_count + 1, ...` in netlist order.
///
/// Returns the number of equations after augmentation, which the caller
/// checks against the allocated size.
pub fn stamp_netlist(matrix: &mut MnaMatrix, netlist: &Netlist, node_count: usize) -> Result<usize> {
    let size = matrix.size();
    if node_count > size {
        return Err(NodalError::dimension_mismatch(size, node_count));
    }

    let mut branches = 0usize;

    for component in netlist {
        validate_component(component)?;

        let i = node_row(component.node_i, node_count)?;
        let j = node_row(component.node_j, node_count)?;

        match component.kind {
            ComponentKind::Resistor => {
                matrix.stamp_conductance(i, j, component.conductance());
            }

            ComponentKind::VoltageSource => {
                let br = BranchId(branches).matrix_index(node_count);
                branches += 1;
                if br >= size {
                    return Err(NodalError::dimension_mismatch(size, br + 1));
                }
                matrix.stamp_voltage_source(i, j, br, component.value);
            }

            ComponentKind::CurrentSource => {
                // The declared sign does not reverse the direction: the
                // magnitude always leaves node_i and enters node_j.
                matrix.stamp_current_source(i, j, component.value.abs());
            }
        }

        log_stamp(component, node_count + branches);
    }

    Ok(node_count + branches)
}

fn node_row(node: NodeId, node_count: usize) -> Result<Option<usize>> {
    match node.matrix_index() {
        Some(idx) if idx >= node_count => Err(NodalError::dimension_mismatch(node_count, node.0)),
        idx => Ok(idx),
    }
}

fn log_stamp(component: &Component, rows: usize) {
    log::trace!(
        "stamped {} {} ({} -> {}, value {}), {} equations",
        component.kind,
        component.name,
        component.node_i,
        component.node_j,
        component.value,
        rows
    );
}
