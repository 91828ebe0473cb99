use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::generators::{at_least, connect, graph_name};
use crate::storage::{Graph, Node};

/// Preferential attachment: nodes arrive one at a time and each links to up to
/// `d` distinct earlier nodes, picked with probability proportional to
/// `degree + 1`.
#[tracing::instrument(level = "debug", skip(rng))]
pub fn barabasi_albert<R: Rng + ?Sized>(
    n: usize,
    d: usize,
    directed: bool,
    name: Option<&str>,
    rng: &mut R,
) -> Result<Graph> {
    at_least(n, 1, "n")?;
    at_least(d, 1, "d")?;

    let mut graph = Graph::new(graph_name(name, || format!("BarabasiAlbert_{n}_{d}")), directed);

    for i in 0..n {
        let existing: Vec<_> = graph.node_ids().collect();
        let newcomer = graph.add_node(Node::new(i));

        let mut weights: Vec<usize> = existing
            .iter()
            .map(|&id| graph.node(id).degree() + 1)
            .collect();
        for _ in 0..d.min(existing.len()) {
            let pick = WeightedIndex::new(&weights)
                .map_err(|e| GraphError::invalid("d", e.to_string()))?
                .sample(rng);
            weights[pick] = 0;
            connect(&mut graph, newcomer, existing[pick]);
        }
    }

    debug!(nodes = graph.order(), edges = graph.size(), "barabasi-albert generated");
    Ok(graph)
}
