use std::cmp::Reverse;
use std::collections::VecDeque;

use crate::algorithms::MstResult;
use crate::core::{EdgeId, NodeId};
use crate::error::{GraphError, Result};
use crate::storage::Graph;

/// Is `to` reachable from `from` using only edges still marked alive?
fn connected(graph: &Graph, alive: &[bool], from: NodeId, to: NodeId) -> bool {
    let mut seen = vec![false; graph.order()];
    let mut queue = VecDeque::from([from]);
    seen[from.0] = true;
    while let Some(current) = queue.pop_front() {
        if current == to {
            return true;
        }
        for (eid, neighbor) in graph.neighbors(current) {
            if alive[eid.0] && !seen[neighbor.0] {
                seen[neighbor.0] = true;
                queue.push_back(neighbor);
            }
        }
    }
    false
}

/// Reverse-delete ("inverse Kruskal"): walk edges heaviest first and drop
/// every edge whose endpoints stay connected without it. Surviving edges are
/// reported in insertion order.
#[tracing::instrument(level = "debug", skip(graph), fields(graph = %graph.name()))]
pub fn reverse_delete_mst(graph: &Graph) -> Result<MstResult> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let mut edges: Vec<EdgeId> = graph.edge_ids().collect();
    edges.sort_by_key(|&eid| Reverse(graph.edge(eid).weight()));

    let mut alive = vec![true; graph.size()];
    for eid in edges {
        alive[eid.0] = false;
        let (u, v) = graph.edge(eid).endpoints();
        if !connected(graph, &alive, u, v) {
            alive[eid.0] = true;
        }
    }

    let kept = graph.edge_ids().filter(|eid| alive[eid.0]).collect();
    Ok(MstResult::from_accepted(graph, "ReverseDelete", kept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::kruskal_mst;
    use crate::core::Weight;

    #[test]
    fn agrees_with_kruskal_on_reference_graph() {
        let g = Graph::from_edges(
            "sq",
            false,
            [("a", "b", 1), ("b", "c", 2), ("c", "d", 3), ("a", "d", 4), ("a", "c", 5)],
        );
        let rd = reverse_delete_mst(&g).unwrap();
        assert_eq!(rd.total_weight, 6);
        assert_eq!(rd.edges, kruskal_mst(&g).unwrap().edges);
    }

    #[test]
    fn total_weight_saturates() {
        let g = Graph::from_edges("big", false, [("a", "b", Weight::MAX), ("b", "c", 1)]);
        assert_eq!(reverse_delete_mst(&g).unwrap().total_weight, Weight::MAX);
    }

    #[test]
    fn keeps_bridges_in_disconnected_graphs() {
        let g = Graph::from_edges(
            "f",
            false,
            [("a", "b", 9), ("c", "d", 1), ("d", "e", 2), ("e", "c", 3)],
        );
        let rd = reverse_delete_mst(&g).unwrap();
        assert_eq!(rd.edges, vec![EdgeId(0), EdgeId(1), EdgeId(2)]);
        assert_eq!(rd.components(), 2);
    }
}
