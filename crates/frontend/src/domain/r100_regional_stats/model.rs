/// One cell of the statistics table. Non-numeric cells (footnote markers,
/// "-" placeholders) pass through every transformation untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

/// Node of the drill-down statistics tree: one row per node, one value per
/// region column. A node without children is a leaf.
///
/// Expansion state is intentionally NOT part of the node; the view keeps a
/// separate set of expanded ids so presentation state never leaks into the
/// data.
#[derive(Debug, Clone, PartialEq)]
pub struct StatNode {
    pub id: String,
    pub name: String,
    pub values: Vec<CellValue>,
    pub children: Vec<StatNode>,
}

impl StatNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
