//! Graph value types and input validation.

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

/// Undirected edge between two vertex indices.
///
/// Equality ignores direction: `(a, b) == (b, a)`. Traversal never relies on
/// this; it addresses edges by their index in the edge table.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Endpoint opposite to `v`, or `None` if `v` is not on this edge.
    #[inline]
    pub fn other(&self, v: usize) -> Option<usize> {
        if self.start == v {
            Some(self.end)
        } else if self.end == v {
            Some(self.start)
        } else {
            None
        }
    }

    #[inline]
    pub fn touches(&self, v: usize) -> bool {
        self.start == v || self.end == v
    }

    /// Endpoints as `(min, max)`.
    #[inline]
    pub fn canonical(&self) -> (usize, usize) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl From<(usize, usize)> for Edge {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

/// Rejected input, reported by [`Graph::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An edge references a vertex index `>= num_vertices`.
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        num_vertices: usize,
    },
    /// Both endpoints are the same vertex.
    SelfLoop { edge: usize, vertex: usize },
    /// Distinct endpoints at the same position (direction undefined).
    ZeroLength { edge: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { vertex: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange {
                edge,
                vertex,
                num_vertices,
            } => write!(
                f,
                "edge {edge} references vertex {vertex}, but the graph has {num_vertices} vertices"
            ),
            GraphError::SelfLoop { edge, vertex } => {
                write!(f, "edge {edge} is a self-loop at vertex {vertex}")
            }
            GraphError::ZeroLength { edge } => {
                write!(f, "edge {edge} has zero length (coincident endpoints)")
            }
            GraphError::NonFinite { vertex } => {
                write!(f, "vertex {vertex} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Immutable raw graph: positions by vertex index, edges by edge index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    positions: Vec<Vector2<f64>>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build without checks; see [`Graph::validate`].
    pub fn new(positions: Vec<Vector2<f64>>, edges: Vec<Edge>) -> Self {
        Self { positions, edges }
    }

    /// Convenience constructor from plain tuples.
    pub fn from_pairs(points: &[(f64, f64)], edges: &[(usize, usize)]) -> Self {
        Self {
            positions: points.iter().map(|&(x, y)| Vector2::new(x, y)).collect(),
            edges: edges.iter().map(|&e| Edge::from(e)).collect(),
        }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Option<Vector2<f64>> {
        self.positions.get(index).copied()
    }

    #[inline]
    pub fn edge(&self, index: usize) -> Option<Edge> {
        self.edges.get(index).copied()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.positions
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Direction from `v` toward the other endpoint of edge `e`.
    ///
    /// Pre: `v` is an endpoint of `e` and both indices are in range.
    #[inline]
    pub(crate) fn direction(&self, v: usize, e: usize) -> Option<Vector2<f64>> {
        let w = self.edges.get(e)?.other(v)?;
        Some(self.positions.get(w)? - self.positions.get(v)?)
    }

    /// Check the preconditions the face tracer relies on.
    ///
    /// Reports the first problem found, scanning vertices then edges in index order.
    /// Planarity and parallel edges are not checked.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (vertex, p) in self.positions.iter().enumerate() {
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(GraphError::NonFinite { vertex });
            }
        }
        let num_vertices = self.positions.len();
        for (idx, e) in self.edges.iter().enumerate() {
            for vertex in [e.start, e.end] {
                if vertex >= num_vertices {
                    return Err(GraphError::VertexOutOfRange {
                        edge: idx,
                        vertex,
                        num_vertices,
                    });
                }
            }
            if e.start == e.end {
                return Err(GraphError::SelfLoop {
                    edge: idx,
                    vertex: e.start,
                });
            }
            if self.positions[e.start] == self.positions[e.end] {
                return Err(GraphError::ZeroLength { edge: idx });
            }
        }
        Ok(())
    }
}
