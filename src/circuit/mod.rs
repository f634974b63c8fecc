//! Circuit representation and validation.
//!
//! A circuit is a [`Netlist`]: an ordered list of two-terminal
//! [`Component`]s whose terminals are numbered nodes, node 0 being ground.

mod component;
mod netlist;
mod topology;
mod types;
mod validate;

pub use component::{Component, ComponentKind};
pub use netlist::Netlist;
pub use topology::check_topology;
pub use types::*;
pub use validate::{validate_component, validate_netlist};
