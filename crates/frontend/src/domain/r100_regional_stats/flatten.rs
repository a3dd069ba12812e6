//! Turns the statistics tree into the ordered row sequence the table
//! renders, honoring per-node expansion.

use std::collections::HashSet;

use super::model::{CellValue, StatNode};

/// One display row. `depth` drives the visual indent only; `has_children`
/// decides whether a toggle affordance is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    pub id: String,
    pub name: String,
    pub depth: usize,
    pub has_children: bool,
    pub values: Vec<CellValue>,
}

/// Flatten the tree in display order: every root appears, and a node's
/// children follow it immediately iff its id is in `expanded` and it
/// actually has children. Nothing is reordered or mutated.
pub fn flatten(nodes: &[StatNode], expanded: &HashSet<String>) -> Vec<FlatRow> {
    let mut rows = Vec::new();
    push_rows(nodes, expanded, 0, &mut rows);
    rows
}

fn push_rows(
    nodes: &[StatNode],
    expanded: &HashSet<String>,
    depth: usize,
    out: &mut Vec<FlatRow>,
) {
    for node in nodes {
        let has_children = node.has_children();
        out.push(FlatRow {
            id: node.id.clone(),
            name: node.name.clone(),
            depth,
            has_children,
            values: node.values.clone(),
        });
        if has_children && expanded.contains(&node.id) {
            push_rows(&node.children, expanded, depth + 1, out);
        }
    }
}
