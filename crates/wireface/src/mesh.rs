//! Reconstructed mesh: raw graph + adjacency + traced faces.
//!
//! `reconstruct` is the single transformation from a `Graph` to a `Mesh`. A
//! `Mesh` is never mutated afterwards, so there is no "already computed" state
//! to guard: running the transformation again on the same graph yields an
//! identical value.

use std::fmt;

use nalgebra::Vector2;

use crate::faces::{trace_faces, AdjacencyTable, Polygon, TraceCfg, TraceError, TraceStats};
use crate::graph::{Edge, Graph, GraphError};

/// Reasons `reconstruct` can fail.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The input graph violates a precondition.
    Invalid(GraphError),
    /// Tracing hit an internal-consistency fault.
    Trace(TraceError),
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Invalid(err) => write!(f, "invalid graph: {err}"),
            MeshError::Trace(err) => write!(f, "face tracing failed: {err}"),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Invalid(err) => Some(err),
            MeshError::Trace(err) => Some(err),
        }
    }
}

impl From<GraphError> for MeshError {
    fn from(err: GraphError) -> Self {
        MeshError::Invalid(err)
    }
}

impl From<TraceError> for MeshError {
    fn from(err: TraceError) -> Self {
        MeshError::Trace(err)
    }
}

/// Graph plus its internal faces.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    graph: Graph,
    adjacency: AdjacencyTable,
    polygons: Vec<Polygon>,
    stats: TraceStats,
}

/// Validate `graph`, order its adjacency, and trace every internal face.
pub fn reconstruct(graph: Graph, cfg: TraceCfg) -> Result<Mesh, MeshError> {
    graph.validate()?;
    let adjacency = AdjacencyTable::build(&graph);
    let (polygons, stats) = trace_faces(&graph, &adjacency, cfg)?;
    tracing::debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        polygons = polygons.len(),
        "reconstructed mesh"
    );
    Ok(Mesh {
        graph,
        adjacency,
        polygons,
        stats,
    })
}

impl Graph {
    /// `reconstruct(self, TraceCfg::default())`.
    pub fn into_mesh(self) -> Result<Mesh, MeshError> {
        reconstruct(self, TraceCfg::default())
    }
}

impl Mesh {
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    #[inline]
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Option<Vector2<f64>> {
        self.graph.vertex(index)
    }

    #[inline]
    pub fn edge(&self, index: usize) -> Option<Edge> {
        self.graph.edge(index)
    }

    #[inline]
    pub fn polygon(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// Seed outcome counters from the reconstruction.
    #[inline]
    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    /// Corner positions of polygon `index`, in cycle order.
    pub fn polygon_points(&self, index: usize) -> Option<Vec<Vector2<f64>>> {
        let polygon = self.polygons.get(index)?;
        polygon
            .vertices
            .iter()
            .map(|&v| self.graph.vertex(v))
            .collect()
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces::{BoundaryTest, OrderStrategy};
    use nalgebra::vector;

    fn square_with_diagonal() -> Graph {
        Graph::from_pairs(
            &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)],
            &[(0, 1), (1, 2), (0, 2), (0, 3), (2, 3)],
        )
    }

    #[test]
    fn queries_after_reconstruction() {
        let mesh = square_with_diagonal().into_mesh().unwrap();
        assert_eq!(mesh.num_vertices(), 4);
        assert_eq!(mesh.num_edges(), 5);
        assert_eq!(mesh.num_polygons(), 2);
        assert_eq!(mesh.polygon(0).map(Polygon::len), Some(3));
        assert_eq!(mesh.polygon(1).map(Polygon::len), Some(3));
        assert!(mesh.polygon(2).is_none());
        assert_eq!(mesh.vertex(2), Some(vector![2.0, 2.0]));
        assert_eq!(mesh.edge(2), Some(Edge::new(2, 0)));
        assert!(mesh.polygons().iter().all(|p| p.closed));
        assert_eq!(mesh.stats().closed, 2);
        assert_eq!(
            mesh.polygon_points(1),
            Some(vec![vector![0.0, 0.0], vector![2.0, 2.0], vector![0.0, 2.0]])
        );
        assert_eq!(mesh.adjacency().incident(1), &[1, 0]);
    }

    #[test]
    fn reconstruction_is_repeatable() {
        let first = square_with_diagonal().into_mesh().unwrap();
        let again = reconstruct(first.graph().clone(), TraceCfg::default()).unwrap();
        assert_eq!(first.polygons(), again.polygons());
        assert_eq!(first, again);
        let graph = again.into_graph();
        assert_eq!(graph, square_with_diagonal());
    }

    #[test]
    fn strategies_agree_on_valid_input() {
        let global = TraceCfg {
            order: OrderStrategy::GlobalAngle,
            boundary: BoundaryTest::PerTurn,
            ..TraceCfg::default()
        };
        let a = reconstruct(square_with_diagonal(), TraceCfg::default()).unwrap();
        let b = reconstruct(square_with_diagonal(), global).unwrap();
        assert_eq!(a.polygons(), b.polygons());
    }

    #[test]
    fn invalid_graph_is_rejected() {
        let g = Graph::from_pairs(&[(0.0, 0.0), (1.0, 0.0)], &[(0, 3)]);
        let err = g.into_mesh().unwrap_err();
        assert!(matches!(
            err,
            MeshError::Invalid(GraphError::VertexOutOfRange { vertex: 3, .. })
        ));
        assert!(err.to_string().starts_with("invalid graph"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn empty_graph_has_no_faces() {
        let mesh = Graph::default().into_mesh().unwrap();
        assert_eq!(mesh.num_vertices(), 0);
        assert_eq!(mesh.num_polygons(), 0);
    }
}
