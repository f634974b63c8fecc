//! Ordered component list.

use super::component::{Component, ComponentKind};
use super::types::BranchId;

/// An ordered sequence of components.
///
/// Order matters: the k-th voltage source encountered owns branch `k`, and
/// its current is reported at that position after the node voltages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Netlist {
    pub components: Vec<Component>,
}

impl Netlist {
    /// Create an empty netlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component.
    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Voltage sources in encounter order, paired with their branch.
    pub fn voltage_sources(&self) -> impl Iterator<Item = (BranchId, &Component)> {
        self.components
            .iter()
            .filter(|c| c.kind == ComponentKind::VoltageSource)
            .enumerate()
            .map(|(k, c)| (BranchId(k), c))
    }
}

impl From<Vec<Component>> for Netlist {
    fn from(components: Vec<Component>) -> Self {
        Self { components }
    }
}

impl FromIterator<Component> for Netlist {
    fn from_iter<T: IntoIterator<Item = Component>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Netlist {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
