//! Fruchterman–Reingold spring layout. Assigns every node a position inside a
//! `width` x `height` box; nothing is drawn.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Position;
use crate::error::{GraphError, Result};
use crate::storage::Graph;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub iterations: usize,
    pub width: f64,
    pub height: f64,
    /// Temperature multiplier applied after each iteration.
    pub cooling: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            width: 1280.0,
            height: 720.0,
            cooling: 0.95,
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::invalid(name, format!("must be positive, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&self.cooling) {
            return Err(GraphError::invalid(
                "cooling",
                format!("must lie in [0, 1], got {}", self.cooling),
            ));
        }
        Ok(())
    }
}

/// Start from the positions nodes already carry (geographic graphs) or from a
/// circle, relax, then scale the result into the configured box.
#[tracing::instrument(level = "debug", skip(graph), fields(graph = %graph.name()))]
pub fn spring_layout(graph: &mut Graph, config: &LayoutConfig) -> Result<()> {
    config.validate()?;
    let n = graph.order();
    if n == 0 {
        return Ok(());
    }

    let mut pos: Vec<Position> = graph
        .nodes()
        .map(|(id, node)| {
            node.position().unwrap_or_else(|| {
                let angle = 2.0 * PI * (id.0 as f64) / (n as f64);
                Position::new(angle.cos(), angle.sin())
            })
        })
        .collect();
    fit(&mut pos, config.width, config.height);

    // direction is irrelevant for the physics
    let adjacency: Vec<Vec<usize>> = graph
        .node_ids()
        .map(|id| graph.neighbors(id).map(|(_, other)| other.0).collect())
        .collect();

    let k_opt = (config.width * config.height / n as f64).sqrt();
    let mut temp = config.width / 10.0;

    for _ in 0..config.iterations {
        let mut disp = vec![Position::default(); n];

        // Repulsive forces
        for v in 0..n {
            for u in 0..n {
                if u != v {
                    let dx = pos[v].x - pos[u].x;
                    let dy = pos[v].y - pos[u].y;
                    let dist = (dx * dx + dy * dy).sqrt().max(0.01);
                    let force = (k_opt * k_opt) / dist;
                    disp[v].x += (dx / dist) * force;
                    disp[v].y += (dy / dist) * force;
                }
            }
        }

        // Attractive forces
        for v in 0..n {
            for &u in &adjacency[v] {
                let dx = pos[v].x - pos[u].x;
                let dy = pos[v].y - pos[u].y;
                let dist = (dx * dx + dy * dy).sqrt().max(0.01);
                let force = (dist * dist) / k_opt;
                disp[v].x -= (dx / dist) * force;
                disp[v].y -= (dy / dist) * force;
            }
        }

        for v in 0..n {
            let dist = (disp[v].x * disp[v].x + disp[v].y * disp[v].y).sqrt().max(0.01);
            let step = dist.min(temp);
            pos[v].x += (disp[v].x / dist) * step;
            pos[v].y += (disp[v].y / dist) * step;
        }
        temp *= config.cooling;
    }

    fit(&mut pos, config.width, config.height);
    for (i, position) in pos.into_iter().enumerate() {
        graph.set_position(crate::core::NodeId(i), position);
    }

    debug!(nodes = n, iterations = config.iterations, "layout computed");
    Ok(())
}

/// Scale and translate `points` into `[margin, size - margin]` on both axes,
/// keeping the aspect ratio. A single point lands in the centre.
fn fit(points: &mut [Position], width: f64, height: f64) {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points.iter() {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let margin = 0.05 * width.min(height);
    let span_x = max_x - min_x;
    let span_y = max_y - min_y;
    let avail_x = width - 2.0 * margin;
    let avail_y = height - 2.0 * margin;
    let scale = match (span_x > f64::EPSILON, span_y > f64::EPSILON) {
        (true, true) => (avail_x / span_x).min(avail_y / span_y),
        (true, false) => avail_x / span_x,
        (false, true) => avail_y / span_y,
        (false, false) => 0.0,
    };

    let offset_x = (width - span_x * scale) / 2.0;
    let offset_y = (height - span_y * scale) / 2.0;
    for p in points.iter_mut() {
        p.x = offset_x + (p.x - min_x) * scale;
        p.y = offset_y + (p.y - min_y) * scale;
    }
}
