//! Graph: named node set + insertion-ordered edge sequence.
//!
//! Two construction paths exist. `add_edge` scans for an equal edge before
//! inserting; `add_validated_edge` trusts the caller (generators, importers)
//! and skips that scan. Both reject self-loops, degrade on missing endpoints
//! and resolve endpoints to the canonical node with the same name.

use tracing::trace;

use crate::core::{EdgeId, NODE_PREFIX, NodeId, Position, Weight};
use crate::interner::NodeInterner;
use crate::storage::{Edge, Node};

#[derive(Clone, Debug)]
pub struct Graph {
    name: String,
    directed: bool,
    nodes: NodeInterner,
    edges: Vec<Edge>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new("GenericGraph", false)
    }
}

impl Graph {
    pub fn new(name: impl Into<String>, directed: bool) -> Self {
        Self {
            name: name.into(),
            directed,
            nodes: NodeInterner::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn undirected(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Build a graph from `(from_label, to_label, weight)` triples through the
    /// validating path. Labels get the node prefix.
    pub fn from_edges<L, I>(name: impl Into<String>, directed: bool, edges: I) -> Self
    where
        L: std::fmt::Display,
        I: IntoIterator<Item = (L, L, Weight)>,
    {
        let mut graph = Self::new(name, directed);
        for (from, to, weight) in edges {
            graph.add_edge(Some(Node::new(from)), Some(Node::new(to)), weight);
        }
        graph
    }

    /// Empty graph with the same directedness, used for algorithm results.
    pub fn derive_empty(&self, name: impl Into<String>) -> Self {
        Self::new(name, self.directed)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes
            .get(id)
            .unwrap_or_else(|| panic!("{id:?} does not belong to graph `{}`", self.name))
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.nodes.get_id(name)
    }

    /// Lookup by label, i.e. the name without the `N_` prefix.
    pub fn node_id_by_label(&self, label: impl std::fmt::Display) -> Option<NodeId> {
        self.nodes.get_id(&format!("{NODE_PREFIX}{label}"))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + use<> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|(_, node)| node.name())
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + use<> {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Edge endpoints resolved to node names.
    pub fn edge_names(&self, id: EdgeId) -> (&str, &str) {
        let edge = self.edge(id);
        (self.node(edge.from()).name(), self.node(edge.to()).name())
    }

    /// Every incident edge with the node on its other end, regardless of direction.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (EdgeId, NodeId)> + '_ {
        self.node(id).edges().into_iter().filter_map(move |e| {
            self.edge(e)
                .connected_node(id)
                .map(|neighbor| (e, neighbor))
        })
    }

    /// Edges that can be followed away from `id`: out-edges when directed,
    /// every incident edge otherwise.
    pub fn successor_edges(&self, id: NodeId) -> Vec<EdgeId> {
        let node = self.node(id);
        if self.directed {
            node.out_edges().to_vec()
        } else {
            node.edges()
        }
    }

    /// Finds an edge equal to `from -> to` under this graph's directedness rule.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        let candidate = Edge::new(from, to, 0, self.directed);
        self.edges
            .iter()
            .position(|e| *e == candidate)
            .map(EdgeId)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_id(from), self.node_id(to)) {
            (Some(f), Some(t)) => self.find_edge(f, t).is_some(),
            _ => false,
        }
    }

    /// Sum of all edge weights, clamped to the `Weight` range.
    pub fn total_weight(&self) -> Weight {
        self.edges
            .iter()
            .map(Edge::weight)
            .fold(0, Weight::saturating_add)
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn set_highlighted(&mut self, id: EdgeId, highlighted: bool) {
        self.edges[id.0].set_highlighted(highlighted);
    }

    pub fn clear_highlights(&mut self) {
        for edge in &mut self.edges {
            edge.set_highlighted(false);
        }
    }

    pub fn highlighted_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges()
            .filter(|(_, e)| e.is_highlighted())
            .map(|(id, _)| id)
    }

    pub fn set_position(&mut self, id: NodeId, position: Position) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.set_position(position);
        }
    }

    /// Insert a node, or return the canonical node already carrying its name.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.intern(node)
    }

    /// Copy node `id` of `source` into this graph (identity and position only).
    pub fn import_node(&mut self, source: &Graph, id: NodeId) -> NodeId {
        self.add_node(source.node(id).detached())
    }

    /// Validating insertion: rejects self-loops and edges equal to an existing one.
    pub fn add_edge(
        &mut self,
        from: Option<Node>,
        to: Option<Node>,
        weight: Weight,
    ) -> Option<EdgeId> {
        self.insert_edge(from, to, weight, true)
    }

    /// Bulk insertion for callers that already guarantee uniqueness.
    pub fn add_validated_edge(
        &mut self,
        from: Option<Node>,
        to: Option<Node>,
        weight: Weight,
    ) -> Option<EdgeId> {
        self.insert_edge(from, to, weight, false)
    }

    /// Copy an edge between two nodes of `source` into this graph without a
    /// duplicate scan. Algorithms use it to assemble derived graphs.
    pub fn copy_edge_from(
        &mut self,
        source: &Graph,
        from: NodeId,
        to: NodeId,
        weight: Weight,
    ) -> Option<EdgeId> {
        self.add_validated_edge(
            Some(source.node(from).detached()),
            Some(source.node(to).detached()),
            weight,
        )
    }

    fn insert_edge(
        &mut self,
        from: Option<Node>,
        to: Option<Node>,
        weight: Weight,
        check_duplicates: bool,
    ) -> Option<EdgeId> {
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            (Some(node), None) | (None, Some(node)) => {
                trace!(
                    graph = %self.name,
                    node = node.name(),
                    "edge with one endpoint; inserting node only"
                );
                self.add_node(node);
                return None;
            }
            (None, None) => {
                trace!(graph = %self.name, "edge without endpoints ignored");
                return None;
            }
        };

        if from == to {
            trace!(graph = %self.name, node = from.name(), "self-loop ignored");
            return None;
        }

        if check_duplicates {
            if let (Some(f), Some(t)) = (self.node_id(from.name()), self.node_id(to.name())) {
                if self.find_edge(f, t).is_some() {
                    trace!(
                        graph = %self.name,
                        from = from.name(),
                        to = to.name(),
                        "duplicate edge ignored"
                    );
                    return None;
                }
            }
        }

        let from = self.add_node(from);
        let to = self.add_node(to);
        Some(self.push_edge(from, to, weight))
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> EdgeId {
        let id = EdgeId(self.edges.len());
        if let Some(node) = self.nodes.get_mut(from) {
            node.add_out_edge(Some(id));
        }
        if let Some(node) = self.nodes.get_mut(to) {
            node.add_in_edge(Some(id));
        }
        self.edges.push(Edge::new(from, to, weight, self.directed));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(label: &str) -> Option<Node> {
        Some(Node::new(label))
    }

    #[test]
    fn undirected_reverse_edge_is_a_duplicate() {
        let mut g = Graph::undirected("g");
        assert!(g.add_edge(n("a"), n("b"), 3).is_some());
        assert!(g.add_edge(n("b"), n("a"), 3).is_none());
        assert_eq!(g.size(), 1);
        assert_eq!(g.order(), 2);
    }

    #[test]
    fn directed_reverse_edge_is_distinct() {
        let mut g = Graph::directed("g");
        g.add_edge(n("a"), n("b"), 1);
        g.add_edge(n("b"), n("a"), 1);
        g.add_edge(n("a"), n("b"), 5);
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut g = Graph::undirected("g");
        g.add_edge(n("a"), n("b"), 1);
        assert!(g.add_edge(n("x"), n("x"), 1).is_none());
        assert!(g.add_validated_edge(n("a"), n("a"), 1).is_none());
        assert_eq!(g.size(), 1);
        assert!(g.node_id("N_x").is_none());
    }

    #[test]
    fn missing_endpoint_inserts_the_other_node() {
        let mut g = Graph::undirected("g");
        assert!(g.add_edge(n("lonely"), None, 1).is_none());
        assert!(g.add_edge(None, n("other"), 1).is_none());
        assert!(g.add_edge(None, None, 1).is_none());
        assert_eq!(g.order(), 2);
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn endpoints_resolve_to_canonical_nodes() {
        let mut g = Graph::undirected("g");
        g.add_validated_edge(n("a"), n("b"), 1);
        g.add_validated_edge(n("a"), n("c"), 1);
        g.add_validated_edge(n("c"), n("b"), 1);

        assert_eq!(g.order(), 3);
        let a = g.node_id("N_a").unwrap();
        let b = g.node_id("N_b").unwrap();
        let c = g.node_id("N_c").unwrap();
        assert_eq!(g.node(a).outdegree(), 2);
        assert_eq!(g.node(b).indegree(), 2);
        assert_eq!(g.node(c).degree(), 2);
    }

    #[test]
    fn validated_path_skips_duplicate_scan() {
        let mut g = Graph::undirected("g");
        g.add_validated_edge(n("a"), n("b"), 1);
        g.add_validated_edge(n("a"), n("b"), 1);
        assert_eq!(g.size(), 2);
    }

    #[test]
    fn adjacency_matches_edge_collection() {
        let g = Graph::from_edges("g", false, [("a", "b", 1), ("b", "c", 2), ("c", "a", 3)]);
        let total_degree: usize = g.nodes().map(|(_, node)| node.degree()).sum();
        assert_eq!(total_degree, 2 * g.size());
        for (id, edge) in g.edges() {
            assert!(g.node(edge.from()).out_edges().contains(&id));
            assert!(g.node(edge.to()).in_edges().contains(&id));
        }
    }

    #[test]
    fn neighbors_ignore_direction() {
        let g = Graph::from_edges("g", true, [("a", "b", 1), ("c", "a", 1)]);
        let a = g.node_id_by_label("a").unwrap();
        let names: Vec<_> = g.neighbors(a).map(|(_, v)| g.node(v).name()).collect();
        assert_eq!(names, ["N_b", "N_c"]);
        assert_eq!(g.successor_edges(a).len(), 1);
    }

    #[test]
    #[should_panic(expected = "does not belong to graph")]
    fn foreign_node_id_panics() {
        let g = Graph::from_edges("g", false, [("a", "b", 1)]);
        g.node(NodeId(5));
    }

    #[test]
    fn highlights() {
        let mut g = Graph::from_edges("g", false, [("a", "b", 1), ("b", "c", 2)]);
        g.set_highlighted(EdgeId(1), true);
        assert_eq!(g.highlighted_edges().collect::<Vec<_>>(), vec![EdgeId(1)]);
        g.clear_highlights();
        assert_eq!(g.highlighted_edges().count(), 0);
        assert_eq!(g.total_weight(), 3);
    }
}
