use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::algorithms::MstResult;
use crate::core::{EdgeId, NodeId, Weight};
use crate::error::{GraphError, Result};
use crate::storage::Graph;

type Frontier = BinaryHeap<Reverse<(Weight, EdgeId, NodeId)>>;

fn push_frontier(graph: &Graph, frontier: &mut Frontier, in_tree: &[bool], node: NodeId) {
    for (eid, neighbor) in graph.neighbors(node) {
        if !in_tree[neighbor.0] {
            frontier.push(Reverse((graph.edge(eid).weight(), eid, neighbor)));
        }
    }
}

/// Prim: grow a tree from the first node of every component (insertion
/// order), always taking the lightest crossing edge; equal weights go to the
/// earlier edge. Direction is ignored.
#[tracing::instrument(level = "debug", skip(graph), fields(graph = %graph.name()))]
pub fn prim_mst(graph: &Graph) -> Result<MstResult> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let mut in_tree = vec![false; graph.order()];
    let mut accepted = Vec::new();
    let mut frontier = Frontier::new();

    for root in graph.node_ids() {
        if in_tree[root.0] {
            continue;
        }
        in_tree[root.0] = true;
        push_frontier(graph, &mut frontier, &in_tree, root);

        while let Some(Reverse((_, eid, node))) = frontier.pop() {
            if in_tree[node.0] {
                continue;
            }
            in_tree[node.0] = true;
            accepted.push(eid);
            push_frontier(graph, &mut frontier, &in_tree, node);
        }
    }

    Ok(MstResult::from_accepted(graph, "Prim", accepted))
}
