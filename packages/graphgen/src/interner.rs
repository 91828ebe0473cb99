//! Node interner: name-keyed arena of node records in insertion order.

use indexmap::IndexMap;

use crate::core::NodeId;
use crate::storage::Node;

/// Duplicates by name are collapsed onto the first record, so adjacency always
/// accumulates on one canonical node.
#[derive(Clone, Debug, Default)]
pub struct NodeInterner {
    records: IndexMap<String, Node>, // NodeId == insertion index
}

impl NodeInterner {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Intern a node. If its name already exists, returns the existing NodeId
    /// (the record is not updated). Incoming adjacency is discarded.
    pub fn intern(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.records.get_index_of(node.name()) {
            return NodeId(index);
        }
        let node = node.detached();
        let (index, _) = self.records.insert_full(node.name().to_string(), node);
        NodeId(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.records.get_index(id.0).map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.records.get_index_mut(id.0).map(|(_, node)| node)
    }

    pub fn get_id(&self, name: &str) -> Option<NodeId> {
        self.records.get_index_of(name).map(NodeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.records
            .values()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EdgeId;

    #[test]
    fn intern_collapses_by_name() {
        let mut interner = NodeInterner::new();
        let a = interner.intern(Node::new("a"));
        let b = interner.intern(Node::new("b"));
        let again = interner.intern(Node::with_position("a", 1.0, 2.0));

        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.get(a).and_then(|n| n.position()), None);
        assert_eq!(interner.get_id("N_b"), Some(b));
    }

    #[test]
    fn interned_nodes_start_without_adjacency() {
        let mut interner = NodeInterner::new();
        let mut stale = Node::new("s");
        stale.add_out_edge(Some(EdgeId(42)));
        let id = interner.intern(stale);
        assert_eq!(interner.get(id).map(Node::degree), Some(0));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut interner = NodeInterner::new();
        for label in ["z", "a", "m"] {
            interner.intern(Node::new(label));
        }
        let names: Vec<_> = interner.iter().map(|(_, n)| n.name().to_string()).collect();
        assert_eq!(names, ["N_z", "N_a", "N_m"]);
    }
}
