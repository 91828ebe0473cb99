use rand::Rng;
use rand::seq::index;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::generators::{at_least, connect, graph_name, numbered_nodes};
use crate::storage::Graph;

/// Number of distinct edges `n` nodes can carry.
fn pair_count(n: usize, directed: bool) -> Option<usize> {
    let ordered = n.checked_mul(n.saturating_sub(1))?;
    Some(if directed { ordered } else { ordered / 2 })
}

/// `k`-th ordered pair `(u, v)` with `u != v`, row-major.
fn ordered_pair(k: usize, n: usize) -> (usize, usize) {
    let u = k / (n - 1);
    let j = k % (n - 1);
    (u, if j >= u { j + 1 } else { j })
}

/// `k`-th unordered pair `(u, v)` with `u < v`, row-major over the upper triangle.
fn unordered_pair(k: usize, n: usize) -> (usize, usize) {
    let mut u = 0;
    let mut rest = k;
    while rest >= n - 1 - u {
        rest -= n - 1 - u;
        u += 1;
    }
    (u, u + 1 + rest)
}

/// `n` nodes and exactly `m` distinct edges drawn uniformly without replacement.
#[tracing::instrument(level = "debug", skip(rng))]
pub fn erdos_renyi<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    directed: bool,
    name: Option<&str>,
    rng: &mut R,
) -> Result<Graph> {
    at_least(n, 1, "n")?;
    let bound = pair_count(n, directed)
        .ok_or_else(|| GraphError::invalid("n", format!("{n} nodes overflow the edge count")))?;
    if m < 1 || m > bound {
        return Err(GraphError::invalid(
            "m",
            format!("must be between 1 and {bound} for {n} nodes, got {m}"),
        ));
    }

    let mut graph = Graph::new(graph_name(name, || format!("ErdosRenyi_{n}_{m}")), directed);
    let nodes = numbered_nodes(&mut graph, n);

    let mut picks = index::sample(rng, bound, m).into_vec();
    picks.sort_unstable();
    for k in picks {
        let (u, v) = if directed {
            ordered_pair(k, n)
        } else {
            unordered_pair(k, n)
        };
        connect(&mut graph, nodes[u], nodes[v]);
    }

    debug!(nodes = graph.order(), edges = graph.size(), "erdos-renyi generated");
    Ok(graph)
}
