//! Netlist validation.

use crate::error::{NodalError, Result};

use super::{Component, ComponentKind, Netlist};

/// Check a single component before it is stamped.
///
/// Rejects:
/// - self loops (`node_i == node_j`)
/// - non-finite values
/// - zero resistance
pub fn validate_component(component: &Component) -> Result<()> {
    if component.is_self_loop() {
        return Err(NodalError::malformed(
            &component.name,
            format!(
                "both terminals connect to node {}, a branch cannot start and end on the same node",
                component.node_i
            ),
        ));
    }

    if !component.value.is_finite() {
        return Err(NodalError::malformed(
            &component.name,
            format!("{} value must be finite, got {}", component.kind, component.value),
        ));
    }

    if component.kind == ComponentKind::Resistor && component.value == 0.0 {
        return Err(NodalError::malformed(
            &component.name,
            "resistance must be non-zero",
        ));
    }

    Ok(())
}

/// Validate every component of a netlist, stopping at the first failure.
pub fn validate_netlist(netlist: &Netlist) -> Result<()> {
    netlist.iter().try_for_each(validate_component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_well_formed() {
        let netlist: Netlist = vec![
            Component::voltage_source("V1", 1, 0, 5.0),
            Component::resistor("R1", 1, 2, 10.0),
            Component::current_source("I1", 0, 2, -1.0),
        ]
        .into();
        assert!(validate_netlist(&netlist).is_ok());
    }

    #[test]
    fn test_rejects_self_loop() {
        let err = validate_component(&Component::current_source("I1", 3, 3, 1.0)).unwrap_err();
        match err {
            NodalError::MalformedComponent { name, .. } => assert_eq!(name, "I1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_zero_resistor() {
        let err = validate_component(&Component::resistor("R9", 1, 0, 0.0)).unwrap_err();
        assert!(matches!(err, NodalError::MalformedComponent { .. }));
    }

    #[test]
    fn test_rejects_non_finite_value() {
        let err = validate_component(&Component::voltage_source("V1", 1, 0, f64::NAN)).unwrap_err();
        assert!(matches!(err, NodalError::MalformedComponent { .. }));

        let err = validate_component(&Component::resistor("R1", 1, 0, f64::INFINITY)).unwrap_err();
        assert!(matches!(err, NodalError::MalformedComponent { .. }));
    }

    #[test]
    fn test_negative_resistance_is_allowed() {
        assert!(validate_component(&Component::resistor("R1", 1, 0, -50.0)).is_ok());
    }

    #[test]
    fn test_stops_at_first_failure() {
        let netlist: Netlist = vec![
            Component::resistor("R1", 1, 0, 10.0),
            Component::resistor("R2", 2, 2, 10.0),
            Component::resistor("R3", 1, 0, 0.0),
        ]
        .into();
        match validate_netlist(&netlist).unwrap_err() {
            NodalError::MalformedComponent { name, .. } => assert_eq!(name, "R2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
