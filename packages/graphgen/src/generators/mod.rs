//! Random graph generators.
//!
//! Every generator validates its parameters before building anything and
//! returns a fully wired, named [`Graph`]. Randomised generators take the RNG
//! from the caller so runs can be reproduced from a seed.

pub mod barabasi_albert;
pub mod dorogovtsev_mendes;
pub mod erdos_renyi;
pub mod geographic;
pub mod gilbert;
pub mod mesh;

pub use barabasi_albert::barabasi_albert;
pub use dorogovtsev_mendes::dorogovtsev_mendes;
pub use erdos_renyi::erdos_renyi;
pub use geographic::geographic;
pub use gilbert::gilbert;
pub use mesh::mesh;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::NodeId;
use crate::error::{GraphError, Result};
use crate::storage::{Graph, Node};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Mesh,
    ErdosRenyi,
    Gilbert,
    Geographic,
    BarabasiAlbert,
    DorogovtsevMendes,
}

/// Generator options as they arrive from a config file.
///
/// `m` and `n` are lattice dimensions for the mesh, node count `n` plus edge
/// count `m` for Erdős–Rényi and node count `n` plus per-node degree `m` for
/// Barabási–Albert. `p` is the Gilbert edge probability and `r` the
/// geographic radius.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub kind: GeneratorKind,
    pub m: Option<usize>,
    pub n: Option<usize>,
    pub p: Option<f64>,
    pub r: Option<f64>,
    #[serde(default)]
    pub is_directed: bool,
    #[serde(default)]
    pub graph_name: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(kind: GeneratorKind) -> Self {
        Self {
            kind,
            m: None,
            n: None,
            p: None,
            r: None,
            is_directed: false,
            graph_name: None,
            seed: None,
        }
    }

    pub fn m(mut self, m: usize) -> Self {
        self.m = Some(m);
        self
    }

    pub fn n(mut self, n: usize) -> Self {
        self.n = Some(n);
        self
    }

    pub fn p(mut self, p: f64) -> Self {
        self.p = Some(p);
        self
    }

    pub fn r(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    pub fn directed(mut self, is_directed: bool) -> Self {
        self.is_directed = is_directed;
        self
    }

    pub fn named(mut self, graph_name: impl Into<String>) -> Self {
        self.graph_name = Some(graph_name.into());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate with an RNG seeded from `seed`, or from OS entropy when unset.
    pub fn generate(&self) -> Result<Graph> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        let name = self.graph_name.as_deref();
        let directed = self.is_directed;
        match self.kind {
            GeneratorKind::Mesh => {
                mesh(require(self.m, "m")?, require(self.n, "n")?, directed, name)
            }
            GeneratorKind::ErdosRenyi => erdos_renyi(
                require(self.n, "n")?,
                require(self.m, "m")?,
                directed,
                name,
                rng,
            ),
            GeneratorKind::Gilbert => {
                gilbert(require(self.n, "n")?, require(self.p, "p")?, directed, name, rng)
            }
            GeneratorKind::Geographic => {
                geographic(require(self.n, "n")?, require(self.r, "r")?, directed, name, rng)
            }
            GeneratorKind::BarabasiAlbert => barabasi_albert(
                require(self.n, "n")?,
                require(self.m, "m")?,
                directed,
                name,
                rng,
            ),
            GeneratorKind::DorogovtsevMendes => {
                dorogovtsev_mendes(require(self.n, "n")?, directed, name, rng)
            }
        }
    }
}

fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(GraphError::MissingParameter(name))
}

/// Caller-supplied name, or the parameter-derived default when unset or blank.
pub(crate) fn graph_name(supplied: Option<&str>, default: impl FnOnce() -> String) -> String {
    match supplied {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => default(),
    }
}

/// Float parameter as it appears in a default graph name (`0.25` -> `0_25`).
pub(crate) fn name_part(value: f64) -> String {
    value.to_string().replace(['.', '-'], "_")
}

pub(crate) fn at_least(value: usize, min: usize, name: &'static str) -> Result<()> {
    if value < min {
        return Err(GraphError::invalid(name, format!("must be at least {min}, got {value}")));
    }
    Ok(())
}

/// Insert `N_0 .. N_{n-1}` and return their ids.
pub(crate) fn numbered_nodes(graph: &mut Graph, n: usize) -> Vec<NodeId> {
    (0..n).map(|i| graph.add_node(Node::new(i))).collect()
}

/// Connect two nodes that are already part of `graph`; uniqueness is the
/// generator's responsibility.
pub(crate) fn connect(graph: &mut Graph, from: NodeId, to: NodeId) {
    let from = graph.node(from).detached();
    let to = graph.node(to).detached();
    graph.add_validated_edge(Some(from), Some(to), crate::core::DEFAULT_WEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_json() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{"kind": "gilbert", "n": 6, "p": 0.5, "is_directed": true, "seed": 3}"#,
        )
        .unwrap();
        assert_eq!(config.kind, GeneratorKind::Gilbert);
        assert_eq!(config.n, Some(6));
        assert!(config.is_directed);
        assert_eq!(config.graph_name, None);

        let graph = config.generate().unwrap();
        assert_eq!(graph.order(), 6);
        assert_eq!(graph.name(), "Gilbert_6_0_5");
        assert!(graph.is_directed());
    }

    #[test]
    fn missing_parameters_are_reported() {
        let err = GeneratorConfig::new(GeneratorKind::Mesh).m(3).generate().unwrap_err();
        assert!(matches!(err, GraphError::MissingParameter("n")));
    }

    #[test]
    fn same_seed_same_graph() {
        let config = GeneratorConfig::new(GeneratorKind::ErdosRenyi).n(12).m(20).seed(99);
        let a = config.generate().unwrap();
        let b = config.generate().unwrap();
        let edges = |g: &Graph| {
            g.edge_ids()
                .map(|e| {
                    let (x, y) = g.edge_names(e);
                    (x.to_string(), y.to_string())
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(edges(&a), edges(&b));
    }

    #[test]
    fn blank_names_fall_back_to_default() {
        let g = GeneratorConfig::new(GeneratorKind::Mesh)
            .m(2)
            .n(2)
            .named("  ")
            .generate()
            .unwrap();
        assert_eq!(g.name(), "Mesh_2x2");
    }
}
