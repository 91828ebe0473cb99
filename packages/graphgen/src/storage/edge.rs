use crate::core::{DEFAULT_WEIGHT, NodeId, Weight};

/// Weighted connection between two nodes of the same graph.
///
/// `directed` selects the equality rule: directed edges compare endpoints in
/// order, undirected edges compare them as an unordered pair. Weight and the
/// highlight flag are not part of identity.
#[derive(Clone, Debug)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    weight: Weight,
    directed: bool,
    highlighted: bool,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight, directed: bool) -> Self {
        Self {
            from,
            to,
            weight,
            directed,
            highlighted: false,
        }
    }

    pub fn directed(from: NodeId, to: NodeId) -> Self {
        Self::new(from, to, DEFAULT_WEIGHT, true)
    }

    pub fn undirected(from: NodeId, to: NodeId) -> Self {
        Self::new(from, to, DEFAULT_WEIGHT, false)
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.from, self.to)
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// The endpoint opposite to `node`, or `None` if `node` is not an endpoint.
    pub fn connected_node(&self, node: NodeId) -> Option<NodeId> {
        if node == self.from {
            Some(self.to)
        } else if node == self.to {
            Some(self.from)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        if self.directed {
            self.from == other.from && self.to == other.to
        } else {
            (self.from == other.from && self.to == other.to)
                || (self.from == other.to && self.to == other.from)
        }
    }
}
