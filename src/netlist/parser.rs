//! Line parser for netlist text.

use crate::circuit::{Component, ComponentKind, Netlist, NodeId};
use crate::error::{NodalError, Result};

use super::value::{parse_node, parse_value};

/// Characters that start a comment, either as the first character of a
/// line or anywhere after it.
const COMMENT_CHARS: [char; 2] = [';', '#'];

/// Parse netlist text into a [`Netlist`], preserving line order.
pub fn parse(input: &str) -> Result<Netlist> {
    let mut netlist = Netlist::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let text = strip_comment(raw).trim();
        if text.is_empty() || text.starts_with('*') {
            continue;
        }
        netlist.push(parse_line(text, line)?);
    }

    Ok(netlist)
}

fn strip_comment(line: &str) -> &str {
    match line.find(&COMMENT_CHARS[..]) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse `<name> <node_i> <node_j> <value>`.
fn parse_line(text: &str, line: usize) -> Result<Component> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let name = fields[0];

    let kind = name
        .chars()
        .next()
        .and_then(ComponentKind::from_prefix)
        .ok_or_else(|| NodalError::UnknownComponentType {
            component_type: name.to_string(),
            line,
        })?;

    if fields.len() != 4 {
        return Err(NodalError::parse(
            line,
            format!(
                "expected '<name> <node> <node> <value>' for {}, got {} fields",
                name,
                fields.len()
            ),
        ));
    }

    let node_i = node(fields[1], line)?;
    let node_j = node(fields[2], line)?;
    let value = parse_value(fields[3])
        .ok_or_else(|| NodalError::parse(line, format!("invalid value: {}", fields[3])))?;

    Ok(Component::new(kind, name, node_i, node_j, value))
}

fn node(text: &str, line: usize) -> Result<NodeId> {
    parse_node(text)
        .map(NodeId)
        .ok_or_else(|| NodalError::parse(line, format!("invalid node: {}", text)))
}
