//! Structural solvability checks.
//!
//! A netlist can be well formed component by component and still describe a
//! system with no unique solution. Two shapes cause this whatever the
//! component values are:
//!
//! - a node with no DC path to ground through resistors or voltage sources
//!   (current sources carry no path: they fix a current, not a voltage)
//! - a loop made only of voltage sources
//!
//! Both are found here on the graph, before any numbers are factored, so the
//! answer does not depend on the scale of the resistances.

use crate::error::{NodalError, Result};

use super::{ComponentKind, Netlist, NodeId};

/// Union-find over node numbers.
struct DisjointNodes {
    parent: Vec<usize>,
}

impl DisjointNodes {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Join the sets of `a` and `b`. Returns false if they were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[rb] = ra;
        true
    }
}

/// Check that the netlist's MNA system is structurally non-singular.
///
/// `node_count` is the highest node number; nodes `0..=node_count` are
/// considered, so a skipped node number is reported as floating.
pub fn check_topology(netlist: &Netlist, node_count: usize) -> Result<()> {
    let mut grounded = DisjointNodes::new(node_count + 1);
    let mut sources = DisjointNodes::new(node_count + 1);

    for component in netlist {
        let (i, j) = (component.node_i.0, component.node_j.0);
        if i > node_count || j > node_count {
            return Err(NodalError::dimension_mismatch(node_count, i.max(j)));
        }

        match component.kind {
            ComponentKind::Resistor => {
                grounded.union(i, j);
            }
            ComponentKind::VoltageSource => {
                if !sources.union(i, j) {
                    return Err(NodalError::singular(format!(
                        "voltage source {} closes a loop of voltage sources",
                        component.name
                    )));
                }
                grounded.union(i, j);
            }
            ComponentKind::CurrentSource => {}
        }
    }

    let ground = grounded.find(NodeId::GROUND.0);
    if let Some(node) = (1..=node_count).find(|&n| grounded.find(n) != ground) {
        log::debug!("node {} is isolated from ground", node);
        return Err(NodalError::singular(format!(
            "node {} has no DC path to ground",
            NodeId(node)
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Component;

    fn reason(result: Result<()>) -> String {
        match result {
            Err(NodalError::SingularSystem { reason }) => reason,
            other => panic!("expected SingularSystem, got {:?}", other),
        }
    }

    #[test]
    fn test_connected_circuit_passes() {
        let netlist: Netlist = vec![
            Component::voltage_source("V1", 1, 0, 5.0),
            Component::resistor("R1", 1, 2, 10.0),
            Component::resistor("R2", 2, 0, 10.0),
            Component::voltage_source("V2", 3, 2, 1.0),
            Component::current_source("I1", 0, 3, 1.0),
        ]
        .into();
        assert!(check_topology(&netlist, 3).is_ok());
    }

    #[test]
    fn test_floating_subcircuit_is_reported() {
        let netlist: Netlist = vec![
            Component::voltage_source("V1", 1, 0, 5.0),
            Component::resistor("R1", 1, 0, 10.0),
            Component::resistor("R2", 2, 3, 10.0),
        ]
        .into();
        assert_eq!(reason(check_topology(&netlist, 3)), "node 2 has no DC path to ground");
    }

    #[test]
    fn test_current_source_is_not_a_path() {
        let netlist: Netlist = vec![
            Component::resistor("R1", 1, 0, 1.0),
            Component::current_source("I1", 1, 2, 1.0),
        ]
        .into();
        assert_eq!(reason(check_topology(&netlist, 2)), "node 2 has no DC path to ground");
    }

    #[test]
    fn test_skipped_node_is_floating() {
        let netlist: Netlist = vec![
            Component::resistor("R1", 1, 0, 1.0),
            Component::resistor("R3", 3, 0, 1.0),
        ]
        .into();
        assert_eq!(reason(check_topology(&netlist, 3)), "node 2 has no DC path to ground");
    }

    #[test]
    fn test_parallel_voltage_sources_form_loop() {
        let netlist: Netlist = vec![
            Component::voltage_source("V1", 1, 0, 5.0),
            Component::voltage_source("V2", 1, 0, 5.0),
        ]
        .into();
        assert!(reason(check_topology(&netlist, 1)).contains("V2"));
    }

    #[test]
    fn test_voltage_source_triangle_forms_loop() {
        let netlist: Netlist = vec![
            Component::voltage_source("VA", 1, 0, 1.0),
            Component::resistor("R1", 1, 2, 1.0),
            Component::voltage_source("VB", 2, 1, 1.0),
            Component::voltage_source("VC", 2, 0, 2.0),
        ]
        .into();
        assert!(reason(check_topology(&netlist, 2)).contains("VC"));
    }

    #[test]
    fn test_node_beyond_count_is_dimension_mismatch() {
        let netlist: Netlist = vec![Component::resistor("R1", 4, 0, 1.0)].into();
        assert!(matches!(
            check_topology(&netlist, 2),
            Err(NodalError::DimensionMismatch { expected: 2, actual: 4 })
        ));
    }
}
