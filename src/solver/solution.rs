//! Solved operating point.

use crate::circuit::{BranchId, NodeId};

/// Solution of an MNA system.
///
/// The first `node_count` values are node voltages for nodes
/// `1..=node_count`, the rest are voltage-source branch currents in netlist
/// order.
///
/// Solutions only come out of [`solve_netlist`](super::solve_netlist), so the
/// split between the two halves always matches the vector:
///
/// ```compile_fail
/// let _ = nodal_core::Solution::new(3, vec![0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    node_count: usize,
    values: Vec<f64>,
}

impl Solution {
    pub(crate) fn new(node_count: usize, values: Vec<f64>) -> Self {
        debug_assert!(node_count <= values.len());
        Self { node_count, values }
    }

    /// The raw solution vector.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Voltages of nodes `1..=node_count`.
    pub fn node_voltages(&self) -> &[f64] {
        &self.values[..self.node_count]
    }

    /// Voltage-source currents in netlist order.
    pub fn source_currents(&self) -> &[f64] {
        &self.values[self.node_count..]
    }

    /// Voltage at a node relative to ground. Ground is always 0 V.
    pub fn voltage(&self, node: NodeId) -> Option<f64> {
        match node.matrix_index() {
            None => Some(0.0),
            Some(idx) => self.node_voltages().get(idx).copied(),
        }
    }

    /// Current through the voltage source owning `branch`.
    pub fn source_current(&self, branch: BranchId) -> Option<f64> {
        self.source_currents().get(branch.0).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_views() {
        let sol = Solution::new(2, vec![5.0, 2.5, -0.5]);
        assert_eq!(sol.node_voltages(), &[5.0, 2.5]);
        assert_eq!(sol.source_currents(), &[-0.5]);
        assert_eq!(sol.voltage(NodeId::GROUND), Some(0.0));
        assert_eq!(sol.voltage(NodeId(2)), Some(2.5));
        assert_eq!(sol.voltage(NodeId(3)), None);
        assert_eq!(sol.source_current(BranchId(0)), Some(-0.5));
        assert_eq!(sol.source_current(BranchId(1)), None);
    }
}
