use tracing::debug;

use crate::error::Result;
use crate::generators::{at_least, connect, graph_name};
use crate::storage::{Graph, Node};

/// Lattice with `m` columns of `n` nodes. Node `N_{c}_{r}` links to its
/// successor in the same column and in the same row.
#[tracing::instrument(level = "debug")]
pub fn mesh(m: usize, n: usize, directed: bool, name: Option<&str>) -> Result<Graph> {
    at_least(m, 1, "m")?;
    at_least(n, 1, "n")?;

    let mut graph = Graph::new(graph_name(name, || format!("Mesh_{m}x{n}")), directed);
    let lattice: Vec<Vec<_>> = (0..m)
        .map(|col| {
            (0..n)
                .map(|row| graph.add_node(Node::new(format!("{}_{}", col + 1, row + 1))))
                .collect()
        })
        .collect();

    for col in 0..m {
        for row in 0..n {
            if row + 1 < n {
                connect(&mut graph, lattice[col][row], lattice[col][row + 1]);
            }
            if col + 1 < m {
                connect(&mut graph, lattice[col][row], lattice[col + 1][row]);
            }
        }
    }

    debug!(nodes = graph.order(), edges = graph.size(), "mesh generated");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn counts() {
        let g = mesh(3, 4, false, None).unwrap();
        assert_eq!(g.name(), "Mesh_3x4");
        assert_eq!(g.order(), 12);
        assert_eq!(g.size(), 3 * 3 + 4 * 2);
    }

    #[test]
    fn wide_meshes_do_not_collide() {
        let g = mesh(11, 11, false, None).unwrap();
        assert_eq!(g.order(), 121);
        assert!(g.node_id("N_1_11").is_some());
        assert!(g.node_id("N_11_1").is_some());
    }

    #[test]
    fn single_node() {
        let g = mesh(1, 1, true, Some("dot")).unwrap();
        assert_eq!(g.name(), "dot");
        assert_eq!(g.order(), 1);
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn lattice_wiring() {
        let g = mesh(2, 2, true, None).unwrap();
        assert!(g.contains_edge("N_1_1", "N_1_2"));
        assert!(g.contains_edge("N_1_1", "N_2_1"));
        assert!(g.contains_edge("N_1_2", "N_2_2"));
        assert!(g.contains_edge("N_2_1", "N_2_2"));
        assert!(!g.contains_edge("N_2_2", "N_1_2"));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            mesh(0, 3, false, None),
            Err(GraphError::InvalidParameter { name: "m", .. })
        ));
        assert!(mesh(3, 0, false, None).is_err());
    }
}
