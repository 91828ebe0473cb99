use rand::Rng;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::generators::{at_least, connect, graph_name, name_part};
use crate::storage::{Graph, Node};

/// Random geometric graph: `n` nodes placed uniformly in the unit square,
/// linked when they are at most `r` apart.
#[tracing::instrument(level = "debug", skip(rng))]
pub fn geographic<R: Rng + ?Sized>(
    n: usize,
    r: f64,
    directed: bool,
    name: Option<&str>,
    rng: &mut R,
) -> Result<Graph> {
    at_least(n, 1, "n")?;
    if !r.is_finite() || r < 0.0 {
        return Err(GraphError::invalid("r", format!("must be finite and non-negative, got {r}")));
    }

    let mut graph = Graph::new(
        graph_name(name, || format!("Geographic_{n}_{}", name_part(r))),
        directed,
    );
    let nodes: Vec<_> = (0..n)
        .map(|i| {
            let x = rng.gen_range(0.0..1.0);
            let y = rng.gen_range(0.0..1.0);
            graph.add_node(Node::with_position(i, x, y))
        })
        .collect();

    for (i, &u) in nodes.iter().enumerate() {
        for &v in &nodes[i + 1..] {
            let (Some(a), Some(b)) = (graph.node(u).position(), graph.node(v).position()) else {
                continue;
            };
            if a.distance(&b) <= r {
                connect(&mut graph, u, v);
            }
        }
    }

    debug!(nodes = graph.order(), edges = graph.size(), "geographic generated");
    Ok(graph)
}
