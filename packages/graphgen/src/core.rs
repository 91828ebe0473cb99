//! core small types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Typed node/edge identifiers
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Edge weights are plain integers; algorithms assume they are non-negative.
pub type Weight = i64;

pub const DEFAULT_WEIGHT: Weight = 1;

/// Namespace prefix prepended to every node label.
pub const NODE_PREFIX: &str = "N_";

/// Name a node gets for a given label, e.g. `3` -> `N_3`.
pub fn node_name(label: impl fmt::Display) -> String {
    format!("{NODE_PREFIX}{label}")
}

/// Planar coordinates carried by geo nodes and filled in by the layout pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
