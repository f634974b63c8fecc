//! Circuit elements: resistors, voltage sources and current sources.

use std::fmt;

use super::types::NodeId;

/// The element types the solver can stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Resistor, value in ohms
    Resistor,
    /// Independent voltage source, value in volts
    VoltageSource,
    /// Independent current source, value in amps
    CurrentSource,
}

impl ComponentKind {
    /// Parse a component type from its netlist name prefix.
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'R' => Some(Self::Resistor),
            'V' => Some(Self::VoltageSource),
            'I' => Some(Self::CurrentSource),
            _ => None,
        }
    }

    /// Whether this element adds a branch-current unknown to the system.
    pub fn adds_branch(&self) -> bool {
        matches!(self, Self::VoltageSource)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Resistor => "resistor",
            Self::VoltageSource => "voltage source",
            Self::CurrentSource => "current source",
        };
        f.write_str(s)
    }
}

/// A two-terminal circuit element.
///
/// For sources, `node_i` is the positive terminal. A voltage source enforces
/// `V(node_i) - V(node_j) = value`; a current source drives `|value|` amps
/// out of `node_i` and into `node_j` through the external circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub kind: ComponentKind,
    pub name: String,
    pub node_i: NodeId,
    pub node_j: NodeId,
    pub value: f64,
}

impl Component {
    /// Create a new component.
    pub fn new(
        kind: ComponentKind,
        name: impl Into<String>,
        node_i: NodeId,
        node_j: NodeId,
        value: f64,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            node_i,
            node_j,
            value,
        }
    }

    /// Create a resistor of `resistance` ohms.
    pub fn resistor(
        name: impl Into<String>,
        node_i: usize,
        node_j: usize,
        resistance: f64,
    ) -> Self {
        Self::new(ComponentKind::Resistor, name, NodeId(node_i), NodeId(node_j), resistance)
    }

    /// Create a voltage source of `voltage` volts, positive at `node_i`.
    pub fn voltage_source(
        name: impl Into<String>,
        node_i: usize,
        node_j: usize,
        voltage: f64,
    ) -> Self {
        Self::new(ComponentKind::VoltageSource, name, NodeId(node_i), NodeId(node_j), voltage)
    }

    /// Create a current source of `current` amps.
    pub fn current_source(
        name: impl Into<String>,
        node_i: usize,
        node_j: usize,
        current: f64,
    ) -> Self {
        Self::new(ComponentKind::CurrentSource, name, NodeId(node_i), NodeId(node_j), current)
    }

    /// The highest node number this component touches.
    pub fn max_node(&self) -> NodeId {
        self.node_i.max(self.node_j)
    }

    /// Both terminals are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.node_i == self.node_j
    }

    /// Conductance `1/R` of a resistor. Only meaningful once the component
    /// has passed validation.
    pub fn conductance(&self) -> f64 {
        1.0 / self.value
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.kind, self.name, self.node_i, self.node_j, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_prefix() {
        assert_eq!(ComponentKind::from_prefix('r'), Some(ComponentKind::Resistor));
        assert_eq!(ComponentKind::from_prefix('V'), Some(ComponentKind::VoltageSource));
        assert_eq!(ComponentKind::from_prefix('i'), Some(ComponentKind::CurrentSource));
        assert_eq!(ComponentKind::from_prefix('C'), None);
    }

    #[test]
    fn test_resistor_conductance() {
        let r = Component::resistor("R1", 1, 0, 1000.0);
        assert_relative_eq!(r.conductance(), 0.001);
        assert_eq!(r.max_node(), NodeId(1));
        assert!(!r.is_self_loop());
    }

    #[test]
    fn test_self_loop() {
        let r = Component::resistor("R1", 2, 2, 1000.0);
        assert!(r.is_self_loop());
    }
}
