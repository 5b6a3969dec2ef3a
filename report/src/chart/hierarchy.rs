//! Flattened node table shared by the sunburst and treemap builders.

use std::collections::HashMap;

/// One accumulated node.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub id: String,
    pub label: String,
    pub parent: String,
    pub value: f64,
    /// Sum of `value * colour` over contributions.
    weighted: f64,
    /// Sum of colour over contributions, for the zero-weight fallback.
    plain: f64,
    contributions: usize,
}

impl Node {
    /// Value-weighted mean of contributed colours, or the plain mean
    /// when the weights cancel out.
    pub fn color_value(&self) -> f64 {
        if self.value != 0.0 {
            self.weighted / self.value
        } else if self.contributions > 0 {
            self.plain / self.contributions as f64
        } else {
            0.0
        }
    }
}

/// Insertion-ordered set of nodes keyed by id.
#[derive(Debug, Default)]
pub(crate) struct NodeTable {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodeTable {
    /// Add `value` (with colour `color`) to the node at `path`, creating
    /// it on first sight. Ids are the `/`-joined path.
    pub fn add(&mut self, path: &[&str], value: f64, color: f64) {
        let Some((label, ancestors)) = path.split_last() else {
            return;
        };
        let id = path.join("/");
        let parent = ancestors.join("/");

        let idx = match self.index.get(&id) {
            Some(&idx) => idx,
            None => {
                self.nodes.push(Node {
                    id: id.clone(),
                    label: (*label).to_string(),
                    parent,
                    value: 0.0,
                    weighted: 0.0,
                    plain: 0.0,
                    contributions: 0,
                });
                self.index.insert(id, self.nodes.len() - 1);
                self.nodes.len() - 1
            }
        };

        let node = &mut self.nodes[idx];
        node.value += value;
        node.weighted += value * color;
        node.plain += color;
        node.contributions += 1;
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Direct children of the node `id`.
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.parent == id)
    }
}
