use rand::Rng;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::generators::{at_least, connect, graph_name, name_part, numbered_nodes};
use crate::storage::Graph;

/// Every pair (ordered when `directed`) is linked independently with
/// probability `p`.
#[tracing::instrument(level = "debug", skip(rng))]
pub fn gilbert<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    directed: bool,
    name: Option<&str>,
    rng: &mut R,
) -> Result<Graph> {
    at_least(n, 1, "n")?;
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::invalid("p", format!("must lie in [0, 1], got {p}")));
    }

    let mut graph = Graph::new(
        graph_name(name, || format!("Gilbert_{n}_{}", name_part(p))),
        directed,
    );
    let nodes = numbered_nodes(&mut graph, n);

    for u in 0..n {
        let first = if directed { 0 } else { u + 1 };
        for v in first..n {
            if u != v && rng.gen_bool(p) {
                connect(&mut graph, nodes[u], nodes[v]);
            }
        }
    }

    debug!(nodes = graph.order(), edges = graph.size(), "gilbert generated");
    Ok(graph)
}
