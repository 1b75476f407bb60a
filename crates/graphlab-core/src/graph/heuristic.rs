//! A* heuristics
//!
//! A heuristic estimates the remaining cost between two node ids. It must be
//! a pure function and should never overestimate the true remaining cost;
//! A* does not check this, and an overestimating heuristic can produce a
//! path that is not the cheapest.

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::Serialize;

use crate::model::{Graph, NodeId};

/// Estimate of the remaining cost from `from` to `to`, `>= 0`
pub trait Heuristic {
    fn estimate(&self, from: NodeId, to: NodeId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(NodeId, NodeId) -> f64,
{
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        self(from, to)
    }
}

/// Always 0: A* explores like Dijkstra
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: NodeId, _to: NodeId) -> f64 {
        0.0
    }
}

/// A 2D layout coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
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

/// Straight-line distance between node positions
///
/// Nodes without a position estimate 0.
#[derive(Debug, Clone, Default)]
pub struct EuclideanHeuristic {
    positions: HashMap<NodeId, Position>,
}

impl EuclideanHeuristic {
    pub fn new(positions: HashMap<NodeId, Position>) -> Self {
        Self { positions }
    }

    /// Positions from [`circular_layout`]
    pub fn circular(graph: &Graph, radius: f64) -> Self {
        Self::new(circular_layout(graph, radius))
    }

    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.positions.get(&id).copied()
    }
}

impl Heuristic for EuclideanHeuristic {
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        match (self.positions.get(&from), self.positions.get(&to)) {
            (Some(a), Some(b)) => a.distance(b),
            _ => 0.0,
        }
    }
}

/// Place nodes evenly on a circle of `radius` around the origin, in
/// insertion order, starting at angle 0
pub fn circular_layout(graph: &Graph, radius: f64) -> HashMap<NodeId, Position> {
    let count = graph.node_count();
    graph
        .node_ids()
        .enumerate()
        .map(|(i, id)| {
            let angle = 2.0 * PI * i as f64 / count as f64;
            (id, Position::new(radius * angle.cos(), radius * angle.sin()))
        })
        .collect()
}
