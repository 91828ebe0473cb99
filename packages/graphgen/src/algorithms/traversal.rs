//! Breadth-first and depth-first spanning trees.
//!
//! Every traversal walks incident edges regardless of direction and returns a
//! new graph holding the visited component: the start node plus one tree edge
//! per discovered node.

use std::collections::VecDeque;

use tracing::debug;

use crate::core::{EdgeId, NodeId, node_name};
use crate::error::{GraphError, Result};
use crate::storage::Graph;

/// Start node for BFS: `N_0` when present, otherwise the first inserted node.
fn bfs_start(graph: &Graph) -> Result<NodeId> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    Ok(graph.node_id(&node_name(0)).unwrap_or(NodeId(0)))
}

fn start_at(graph: &Graph, index: usize) -> Result<NodeId> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    if index >= graph.order() {
        return Err(GraphError::StartIndexOutOfRange {
            index,
            order: graph.order(),
        });
    }
    Ok(NodeId(index))
}

fn add_tree_edge(tree: &mut Graph, graph: &Graph, from: NodeId, to: NodeId, via: EdgeId) {
    tree.copy_edge_from(graph, from, to, graph.edge(via).weight());
}

#[tracing::instrument(level = "debug", skip(graph), fields(graph = %graph.name()))]
pub fn bfs_tree(graph: &Graph) -> Result<Graph> {
    let start = bfs_start(graph)?;
    let mut tree = graph.derive_empty(format!("{}_BFS", graph.name()));
    tree.import_node(graph, start);

    let mut visited = vec![false; graph.order()];
    let mut queue = VecDeque::from([start]);
    visited[start.0] = true;

    while let Some(current) = queue.pop_front() {
        for (edge, neighbor) in graph.neighbors(current) {
            if visited[neighbor.0] {
                continue;
            }
            visited[neighbor.0] = true;
            queue.push_back(neighbor);
            add_tree_edge(&mut tree, graph, current, neighbor, edge);
        }
    }

    debug!(nodes = tree.order(), edges = tree.size(), "BFS tree built");
    Ok(tree)
}

/// Pending call of the recursive walk: the node and how far through its
/// neighbours it has got.
struct Frame {
    node: NodeId,
    neighbors: Vec<(EdgeId, NodeId)>,
    cursor: usize,
}

impl Frame {
    fn new(graph: &Graph, node: NodeId) -> Self {
        Self {
            node,
            neighbors: graph.neighbors(node).collect(),
            cursor: 0,
        }
    }

    fn advance(&mut self) -> Option<(EdgeId, NodeId)> {
        let next = self.neighbors.get(self.cursor).copied();
        self.cursor += 1;
        next
    }
}

/// DFS tree in recursive call order. Frames are kept on the heap so the
/// depth of the component does not matter.
#[tracing::instrument(level = "debug", skip(graph), fields(graph = %graph.name()))]
pub fn dfs_tree_recursive(graph: &Graph, start_index: usize) -> Result<Graph> {
    let start = start_at(graph, start_index)?;
    let mut tree = graph.derive_empty(format!("{}_DFS_R", graph.name()));
    tree.import_node(graph, start);

    let mut visited = vec![false; graph.order()];
    visited[start.0] = true;
    let mut frames = vec![Frame::new(graph, start)];

    while let Some(frame) = frames.last_mut() {
        let Some((edge, next)) = frame.advance() else {
            frames.pop();
            continue;
        };
        let current = frame.node;
        if visited[next.0] {
            continue;
        }
        visited[next.0] = true;
        add_tree_edge(&mut tree, graph, current, next, edge);
        frames.push(Frame::new(graph, next));
    }

    debug!(nodes = tree.order(), edges = tree.size(), "recursive DFS tree built");
    Ok(tree)
}

/// DFS tree in stack pop order. Reaches the same nodes as
/// [`dfs_tree_recursive`] but may pick different tree edges.
#[tracing::instrument(level = "debug", skip(graph), fields(graph = %graph.name()))]
pub fn dfs_tree_iterative(graph: &Graph, start_index: usize) -> Result<Graph> {
    let start = start_at(graph, start_index)?;
    let mut tree = graph.derive_empty(format!("{}_DFS_I", graph.name()));

    let mut visited = vec![false; graph.order()];
    let mut stack: Vec<(NodeId, Option<(NodeId, EdgeId)>)> = vec![(start, None)];

    while let Some((current, via)) = stack.pop() {
        if visited[current.0] {
            continue;
        }
        visited[current.0] = true;
        match via {
            Some((parent, edge)) => add_tree_edge(&mut tree, graph, parent, current, edge),
            None => {
                tree.import_node(graph, current);
            }
        }
        for (edge, neighbor) in graph.neighbors(current) {
            if !visited[neighbor.0] {
                stack.push((neighbor, Some((current, edge))));
            }
        }
    }

    debug!(nodes = tree.order(), edges = tree.size(), "iterative DFS tree built");
    Ok(tree)
}
