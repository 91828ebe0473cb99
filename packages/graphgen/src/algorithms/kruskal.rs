use tracing::debug;

use crate::core::{EdgeId, Weight};
use crate::error::{GraphError, Result};
use crate::storage::Graph;

/// Spanning tree (or forest, for disconnected input) chosen by one of the MST
/// engines. `edges` are ids into the source graph in acceptance order.
#[derive(Clone, Debug)]
pub struct MstResult {
    pub tree: Graph,
    pub edges: Vec<EdgeId>,
    pub total_weight: Weight,
}

impl MstResult {
    /// Wrap the accepted edges into a new graph that keeps every source node.
    pub(crate) fn from_accepted(graph: &Graph, suffix: &str, edges: Vec<EdgeId>) -> Self {
        let mut tree = graph.derive_empty(format!("{}_{}", graph.name(), suffix));
        for id in graph.node_ids() {
            tree.import_node(graph, id);
        }
        let mut total_weight: Weight = 0;
        for &eid in &edges {
            let edge = graph.edge(eid);
            tree.copy_edge_from(graph, edge.from(), edge.to(), edge.weight());
            total_weight = total_weight.saturating_add(edge.weight());
        }
        debug!(
            tree = tree.name(),
            edges = edges.len(),
            total_weight,
            "spanning tree assembled"
        );
        Self {
            tree,
            edges,
            total_weight,
        }
    }

    /// Mark the accepted edges on the source graph for export.
    pub fn highlight_in(&self, graph: &mut Graph) {
        graph.clear_highlights();
        for &eid in &self.edges {
            graph.set_highlighted(eid, true);
        }
    }

    /// Number of trees in the forest.
    pub fn components(&self) -> usize {
        self.tree.order() - self.edges.len()
    }
}

/// Disjoint Set Union (DSU) / Union-Find data structure.
struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression: point everything on the way directly to root
        let mut current = i;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, i: usize, j: usize) -> bool {
        let mut root_i = self.find(i);
        let mut root_j = self.find(j);

        if root_i == root_j {
            return false;
        }
        // Union by size: attach smaller tree to larger tree
        if self.size[root_i] < self.size[root_j] {
            std::mem::swap(&mut root_i, &mut root_j);
        }
        self.parent[root_j] = root_i;
        self.size[root_i] += self.size[root_j];
        self.components -= 1;
        true
    }

    fn components(&self) -> usize {
        self.components
    }
}

/// Kruskal: lightest edges first (stable, ties keep insertion order), accept
/// each edge that joins two components. Direction is ignored.
#[tracing::instrument(level = "debug", skip(graph), fields(graph = %graph.name()))]
pub fn kruskal_mst(graph: &Graph) -> Result<MstResult> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let mut edges: Vec<EdgeId> = graph.edge_ids().collect();
    edges.sort_by_key(|&eid| graph.edge(eid).weight());

    let mut uf = UnionFind::new(graph.order());
    let mut accepted = Vec::new();

    for eid in edges {
        if uf.components() == 1 {
            break;
        }
        let (u, v) = graph.edge(eid).endpoints();
        if uf.union(u.0, v.0) {
            accepted.push(eid);
        }
    }

    Ok(MstResult::from_accepted(graph, "Kruskal", accepted))
}
