//! Node: a named vertex with in/out adjacency bookkeeping.

use crate::core::{EdgeId, NODE_PREFIX, Position, node_name};

#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    position: Option<Position>,
    in_edges: Vec<EdgeId>,
    out_edges: Vec<EdgeId>,
}

impl Node {
    /// Detached node named `N_<label>`.
    pub fn new(label: impl std::fmt::Display) -> Self {
        Self::named(node_name(label))
    }

    /// Detached node whose name is taken verbatim (already carries its prefix).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
            in_edges: Vec::new(),
            out_edges: Vec::new(),
        }
    }

    pub fn with_position(label: impl std::fmt::Display, x: f64, y: f64) -> Self {
        let mut node = Self::new(label);
        node.position = Some(Position::new(x, y));
        node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without the namespace prefix.
    pub fn label(&self) -> &str {
        self.name.strip_prefix(NODE_PREFIX).unwrap_or(&self.name)
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub fn add_in_edge(&mut self, edge: Option<EdgeId>) {
        if let Some(edge) = edge {
            self.in_edges.push(edge);
        }
    }

    pub fn add_out_edge(&mut self, edge: Option<EdgeId>) {
        if let Some(edge) = edge {
            self.out_edges.push(edge);
        }
    }

    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }

    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }

    pub fn degree(&self) -> usize {
        self.in_edges.len() + self.out_edges.len()
    }

    pub fn indegree(&self) -> usize {
        self.in_edges.len()
    }

    pub fn outdegree(&self) -> usize {
        self.out_edges.len()
    }

    /// Union of in- and out-adjacency, each edge reported once, outgoing first.
    pub fn edges(&self) -> Vec<EdgeId> {
        let mut edges = Vec::with_capacity(self.degree());
        for &e in self.out_edges.iter().chain(self.in_edges.iter()) {
            if !edges.contains(&e) {
                edges.push(e);
            }
        }
        edges
    }

    /// Same identity and position, no adjacency. Used when a node moves into another graph.
    pub fn detached(&self) -> Self {
        Self {
            name: self.name.clone(),
            position: self.position,
            in_edges: Vec::new(),
            out_edges: Vec::new(),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}
