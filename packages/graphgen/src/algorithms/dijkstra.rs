use indexmap::IndexSet;
use tracing::debug;

use crate::core::{EdgeId, NodeId, Weight};
use crate::error::{GraphError, Result};
use crate::storage::{Graph, Node};

/// Side table produced by [`dijkstra`]: per node (indexed by `NodeId`) the
/// final distance, predecessor and the edge that last improved it.
#[derive(Clone, Debug)]
pub struct DijkstraResult {
    pub start: NodeId,
    pub nodes: Vec<String>,
    pub tentative_weights: Vec<Option<Weight>>,
    pub predecessors: Vec<Option<NodeId>>,
    pub tree_edges: Vec<Option<EdgeId>>,
}

impl DijkstraResult {
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.tentative_weights.get(node.0).copied().flatten()
    }

    pub fn distance_to(&self, name: &str) -> Result<Option<Weight>> {
        Ok(self.distance(self.index_of(name)?))
    }

    fn index_of(&self, name: &str) -> Result<NodeId> {
        self.nodes
            .iter()
            .position(|n| n == name)
            .map(NodeId)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// Weight and node sequence of the lightest path from the start node,
    /// or `None` when `target` is unreachable.
    pub fn lightest_path_to(&self, target: &str) -> Result<Option<(Weight, Vec<String>)>> {
        let target_index = self.index_of(target)?;
        let Some(tentative_weight) = self.distance(target_index) else {
            return Ok(None);
        };

        let mut path = Vec::new();
        let mut current = target_index;
        while let Some(pred) = self.predecessors[current.0] {
            path.push(self.nodes[current.0].clone());
            current = pred;
        }
        path.push(self.nodes[current.0].clone());
        path.reverse();

        Ok(Some((tentative_weight, path)))
    }

    /// Node name with its distance appended, `N_3_7` or `N_3_inf`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was added to the graph after this run.
    pub fn label_of(&self, node: NodeId) -> String {
        match self.distance(node) {
            Some(d) => format!("{}_{}", self.nodes[node.0], d),
            None => format!("{}_inf", self.nodes[node.0]),
        }
    }

    /// Copy of `graph` whose node names carry their distances. Highlighted
    /// shortest-path-tree edges are preserved; `graph` itself is untouched.
    pub fn to_labeled_graph(&self, graph: &Graph) -> Graph {
        let mut labeled = graph.derive_empty(format!("{}_Dijkstra", graph.name()));
        let labels: Vec<String> = graph.node_ids().map(|id| self.label_of(id)).collect();
        for (id, node) in graph.nodes() {
            let mut copy = Node::named(labels[id.0].clone());
            if let Some(position) = node.position() {
                copy.set_position(position);
            }
            labeled.add_node(copy);
        }
        for (_, edge) in graph.edges() {
            let (from, to) = edge.endpoints();
            let added = labeled.add_validated_edge(
                Some(Node::named(labels[from.0].clone())),
                Some(Node::named(labels[to.0].clone())),
                edge.weight(),
            );
            if let Some(id) = added {
                labeled.set_highlighted(id, edge.is_highlighted());
            }
        }
        labeled
    }
}

/// Dijkstra from the first inserted node.
pub fn dijkstra(graph: &mut Graph) -> Result<DijkstraResult> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    run(graph, NodeId(0))
}

/// Dijkstra from the node called `start`.
pub fn dijkstra_from(graph: &mut Graph, start: &str) -> Result<DijkstraResult> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let source_id = graph
        .node_id(start)
        .ok_or_else(|| GraphError::UnknownNode(start.to_string()))?;
    run(graph, source_id)
}

/// Marks the shortest-path tree on `graph` through the edge highlight flags;
/// every other highlight is cleared first.
#[tracing::instrument(level = "debug", skip(graph), fields(graph = %graph.name()))]
fn run(graph: &mut Graph, source_id: NodeId) -> Result<DijkstraResult> {
    graph.clear_highlights();

    let order = graph.order();
    let mut tentative_weights: Vec<Option<Weight>> = vec![None; order];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; order];
    let mut tree_edges: Vec<Option<EdgeId>> = vec![None; order];

    tentative_weights[source_id.0] = Some(0);

    let mut unvisited: IndexSet<NodeId> = graph.node_ids().collect();

    while !unvisited.is_empty() {
        // first minimum wins, so ties go to the earliest inserted node
        let Some(current) = unvisited
            .iter()
            .min_by(|&&a, &&b| {
                let wa = tentative_weights[a.0];
                let wb = tentative_weights[b.0];
                match (wa, wb) {
                    (Some(wa), Some(wb)) => wa.cmp(&wb),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                }
            })
            .copied()
        else {
            break;
        };

        unvisited.shift_remove(&current);

        let Some(current_weight) = tentative_weights[current.0] else {
            // unreachable: nothing to relax
            continue;
        };

        for edge_id in graph.successor_edges(current) {
            let edge = graph.edge(edge_id);
            let Some(neighbor) = edge.connected_node(current) else {
                continue;
            };
            if !unvisited.contains(&neighbor) {
                continue;
            }

            // a sum past the weight range is no improvement
            let Some(alt_weight) = current_weight.checked_add(edge.weight()) else {
                continue;
            };
            if tentative_weights[neighbor.0].is_none_or(|w| alt_weight < w) {
                tentative_weights[neighbor.0] = Some(alt_weight);
                predecessors[neighbor.0] = Some(current);
                if let Some(previous) = tree_edges[neighbor.0].replace(edge_id) {
                    graph.set_highlighted(previous, false);
                }
                graph.set_highlighted(edge_id, true);
            }
        }
    }

    let reachable = tentative_weights.iter().filter(|w| w.is_some()).count();
    debug!(reachable, order, "shortest-path labels computed");

    Ok(DijkstraResult {
        start: source_id,
        nodes: graph.node_names().map(str::to_string).collect(),
        tentative_weights,
        predecessors,
        tree_edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook() -> Graph {
        Graph::from_edges(
            "textbook",
            true,
            [
                ("s", "u", 10),
                ("s", "x", 5),
                ("u", "x", 2),
                ("x", "u", 3),
                ("u", "v", 1),
                ("x", "v", 9),
                ("x", "y", 2),
                ("v", "y", 4),
                ("y", "v", 6),
                ("y", "s", 7),
            ],
        )
    }

    #[test]
    fn directed_distances() {
        let mut g = textbook();
        let result = dijkstra(&mut g).unwrap();
        assert_eq!(result.distance_to("N_s").unwrap(), Some(0));
        assert_eq!(result.distance_to("N_u").unwrap(), Some(8));
        assert_eq!(result.distance_to("N_x").unwrap(), Some(5));
        assert_eq!(result.distance_to("N_v").unwrap(), Some(9));
        assert_eq!(result.distance_to("N_y").unwrap(), Some(7));

        let (weight, path) = result.lightest_path_to("N_v").unwrap().unwrap();
        assert_eq!(weight, 9);
        assert_eq!(path, ["N_s", "N_x", "N_u", "N_v"]);
    }

    #[test]
    fn highlights_form_the_shortest_path_tree() {
        let mut g = textbook();
        let result = dijkstra(&mut g).unwrap();
        let highlighted: Vec<_> = g.highlighted_edges().collect();
        // one incoming tree edge per reached node except the start
        assert_eq!(highlighted.len(), g.order() - 1);
        for id in g.node_ids().filter(|&id| id != result.start) {
            let edge = result.tree_edges[id.0].unwrap();
            assert!(g.edge(edge).is_highlighted());
            assert_eq!(g.edge(edge).to(), id);
        }
    }

    #[test]
    fn unreachable_nodes_stay_infinite() {
        let mut g = Graph::from_edges("g", true, [("a", "b", 2), ("c", "a", 1)]);
        let result = dijkstra(&mut g).unwrap();
        assert_eq!(result.distance_to("N_c").unwrap(), None);
        assert_eq!(result.lightest_path_to("N_c").unwrap(), None);
        let c = g.node_id("N_c").unwrap();
        assert_eq!(result.label_of(c), "N_c_inf");
        let b = g.node_id("N_b").unwrap();
        assert_eq!(result.label_of(b), "N_b_2");
    }

    #[test]
    fn undirected_edges_relax_both_ways() {
        let mut g = Graph::from_edges("g", false, [("b", "a", 4), ("a", "c", 1), ("c", "b", 1)]);
        let result = dijkstra_from(&mut g, "N_a").unwrap();
        assert_eq!(result.distance_to("N_b").unwrap(), Some(2));
    }

    #[test]
    fn names_are_not_mutated() {
        let mut g = textbook();
        let result = dijkstra(&mut g).unwrap();
        assert!(g.node_id("N_v").is_some());

        let labeled = result.to_labeled_graph(&g);
        assert!(labeled.node_id("N_v_9").is_some());
        assert_eq!(labeled.size(), g.size());
        assert_eq!(labeled.highlighted_edges().count(), g.order() - 1);
    }

    #[test]
    fn path_past_the_weight_range_is_not_taken() {
        let mut g = Graph::from_edges("g", true, [("a", "b", Weight::MAX), ("b", "c", 1)]);
        let result = dijkstra(&mut g).unwrap();
        assert_eq!(result.distance_to("N_b").unwrap(), Some(Weight::MAX));
        assert_eq!(result.distance_to("N_c").unwrap(), None);
        assert_eq!(g.highlighted_edges().count(), 1);

        g.add_edge(Some(Node::new("a")), Some(Node::new("c")), 4);
        let result = dijkstra(&mut g).unwrap();
        assert_eq!(result.distance_to("N_c").unwrap(), Some(4));
    }

    #[test]
    fn errors() {
        let mut empty = Graph::directed("empty");
        assert!(matches!(dijkstra(&mut empty), Err(GraphError::EmptyGraph)));

        let mut g = textbook();
        assert!(matches!(
            dijkstra_from(&mut g, "N_nope"),
            Err(GraphError::UnknownNode(_))
        ));
        let result = dijkstra(&mut g).unwrap();
        assert!(result.lightest_path_to("N_nope").is_err());
    }
}
