//! System sizing.

use crate::circuit::{validate_netlist, Netlist};
use crate::error::{NodalError, Result};

use super::MAX_UNKNOWNS;

/// Unknown counts of the MNA system for a netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    /// Highest node number in the netlist (ground excluded)
    pub node_count: usize,
    /// Number of voltage sources, one branch current each
    pub voltage_source_count: usize,
}

impl Dimensions {
    /// Total number of unknowns: node voltages plus branch currents.
    pub fn size(&self) -> usize {
        self.node_count + self.voltage_source_count
    }
}

/// Size the MNA system for a netlist.
///
/// The node count is the highest node number referenced; ground (node 0)
/// never contributes an unknown. Every component is validated first, so a
/// self loop or zero resistor fails here before anything is allocated.
///
/// The total is capped at [`MAX_UNKNOWNS`]. A component that would push the
/// system past the cap is reported as `MalformedComponent`, so a stray node
/// number such as `1000000` fails here instead of in the allocator.
pub fn dimension(netlist: &Netlist) -> Result<Dimensions> {
    validate_netlist(netlist)?;

    let mut dims = Dimensions::default();
    for component in netlist {
        let node_count = dims.node_count.max(component.max_node().0);
        let voltage_source_count =
            dims.voltage_source_count + usize::from(component.kind.adds_branch());

        let within_cap = node_count
            .checked_add(voltage_source_count)
            .filter(|&size| size <= MAX_UNKNOWNS)
            .is_some();
        if !within_cap {
            log::error!(
                "{} {} needs a system larger than {} unknowns",
                component.kind,
                component.name,
                MAX_UNKNOWNS
            );
            return Err(NodalError::malformed(
                &component.name,
                format!(
                    "system would exceed the solver limit of {} unknowns (highest node {})",
                    MAX_UNKNOWNS, node_count
                ),
            ));
        }

        dims = Dimensions {
            node_count,
            voltage_source_count,
        };
    }

    log::debug!(
        "dimensioned netlist: {} nodes, {} voltage sources, system size {}",
        dims.node_count,
        dims.voltage_source_count,
        dims.size()
    );

    Ok(dims)
}
