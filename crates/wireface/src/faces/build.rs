//! Adjacency construction and the pure ranking functions used by the walk.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use crate::graph::Graph;

/// Per-vertex incident edge indices, counter-clockwise by outgoing direction.
///
/// Ties (coincident directions) keep ascending edge index. Built once; the
/// tracer only reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyTable {
    incident: Vec<Vec<usize>>,
}

impl AdjacencyTable {
    /// Bucket every edge at both endpoints, then sort each bucket by `atan2`
    /// of the outgoing direction.
    ///
    /// Pre: edge endpoints are `< graph.num_vertices()`. Zero-length edges get
    /// a NaN angle; `total_cmp` still yields some fixed order for them.
    pub fn build(graph: &Graph) -> Self {
        let mut incident: Vec<Vec<usize>> = vec![Vec::new(); graph.num_vertices()];
        for (idx, e) in graph.edges().iter().enumerate() {
            incident[e.start].push(idx);
            incident[e.end].push(idx);
        }
        for (v, list) in incident.iter_mut().enumerate() {
            // One key per edge; the comparator never recomputes angles.
            let mut keyed: Vec<(f64, usize)> = list
                .iter()
                .map(|&e| (outgoing_angle(graph, v, e), e))
                .collect();
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
            *list = keyed.into_iter().map(|(_, e)| e).collect();
        }
        Self { incident }
    }

    /// Wrap caller-supplied lists verbatim (no sorting, no consistency check).
    pub fn from_lists(incident: Vec<Vec<usize>>) -> Self {
        Self { incident }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.incident.len()
    }

    /// Ordered incident edges of `v` (empty for isolated or unknown vertices).
    #[inline]
    pub fn incident(&self, v: usize) -> &[usize] {
        self.incident.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Slot of edge `e` in the order around `v`.
    #[inline]
    pub fn position_of(&self, v: usize, e: usize) -> Option<usize> {
        self.incident(v).iter().position(|&x| x == e)
    }

    /// Clockwise neighbour of `e` in the circular order around `v`.
    pub fn clockwise_neighbor(&self, v: usize, e: usize) -> Option<usize> {
        let list = self.incident(v);
        let pos = self.position_of(v, e)?;
        Some(list[(pos + list.len() - 1) % list.len()])
    }
}

fn outgoing_angle(graph: &Graph, v: usize, e: usize) -> f64 {
    match graph.direction(v, e) {
        Some(d) => d.y.atan2(d.x),
        None => f64::NAN,
    }
}

/// `(a.x * b.y - a.y * b.x) / (|a| |b|)`: sine of the angle from `a` to `b`.
/// NaN if either vector has zero length.
#[inline]
pub fn normalized_cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a.x * b.y - a.y * b.x) / (a.norm() * b.norm())
}

/// Clockwise angle swept from `back` to `candidate`, in `(0, 2π]`.
///
/// `back` points from the current vertex along the edge just arrived on;
/// `candidate` points along an outgoing edge. The smallest value is the
/// tightest clockwise turn, which keeps the face being traced on the left.
/// A candidate parallel to `back` ranks last (`2π`).
pub fn clockwise_sweep(back: Vector2<f64>, candidate: Vector2<f64>) -> f64 {
    let scale = back.norm() * candidate.norm();
    let cross = (back.x * candidate.y - back.y * candidate.x) / scale;
    let dot = back.dot(&candidate) / scale;
    let cw = -cross.atan2(dot);
    if cw <= 0.0 {
        cw + TAU
    } else {
        cw
    }
}
