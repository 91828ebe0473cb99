use rand::Rng;
use tracing::debug;

use crate::core::EdgeId;
use crate::error::Result;
use crate::generators::{at_least, connect, graph_name, numbered_nodes};
use crate::storage::{Graph, Node};

/// Start from the triangle `N_0 N_1 N_2`; every further node picks a uniformly
/// random existing edge and links to both of its endpoints.
#[tracing::instrument(level = "debug", skip(rng))]
pub fn dorogovtsev_mendes<R: Rng + ?Sized>(
    n: usize,
    directed: bool,
    name: Option<&str>,
    rng: &mut R,
) -> Result<Graph> {
    at_least(n, 3, "n")?;

    let mut graph = Graph::new(graph_name(name, || format!("DorogovtsevMendes_{n}")), directed);
    let seed = numbered_nodes(&mut graph, 3);
    connect(&mut graph, seed[0], seed[1]);
    connect(&mut graph, seed[1], seed[2]);
    connect(&mut graph, seed[2], seed[0]);

    for i in 3..n {
        let (a, b) = graph.edge(EdgeId(rng.gen_range(0..graph.size()))).endpoints();
        let newcomer = graph.add_node(Node::new(i));
        connect(&mut graph, newcomer, a);
        connect(&mut graph, newcomer, b);
    }

    debug!(nodes = graph.order(), edges = graph.size(), "dorogovtsev-mendes generated");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn counts() {
        let mut rng = StdRng::seed_from_u64(8);
        for n in [3, 4, 25] {
            let g = dorogovtsev_mendes(n, false, None, &mut rng).unwrap();
            assert_eq!(g.order(), n);
            assert_eq!(g.size(), 2 * n - 3);
        }
    }

    #[test]
    fn newcomers_close_a_triangle() {
        let mut rng = StdRng::seed_from_u64(9);
        let g = dorogovtsev_mendes(12, false, Some("dm"), &mut rng).unwrap();
        assert_eq!(g.name(), "dm");
        for i in 3..12 {
            let id = g.node_id_by_label(i).unwrap();
            let neighbors: Vec<_> = g
                .node(id)
                .out_edges()
                .iter()
                .map(|&e| g.edge(e).to())
                .collect();
            assert_eq!(neighbors.len(), 2);
            assert!(g.find_edge(neighbors[0], neighbors[1]).is_some());
        }
    }

    #[test]
    fn needs_a_triangle() {
        let mut rng = StdRng::seed_from_u64(9);
        assert!(dorogovtsev_mendes(2, false, None, &mut rng).is_err());
    }
}
