//! Rebuild the bounded faces of a planar graph from its wireframe.
//!
//! Pipeline: `Graph` (positions + undirected edges) → `AdjacencyTable`
//! (incident edges counter-clockwise per vertex) → `FaceTracer` (one walk per
//! vertex/edge seed) → `Mesh` (graph + closed polygons, read-only).
//!
//! - `graph`: raw input value and precondition checks.
//! - `faces`: adjacency ordering, ranking functions, and the boundary walk.
//! - `mesh`: the `reconstruct` transformation and query surface.
//! - `json`: structured codec for the `{"vertices", "edges", "polygons"}` form.
//! - `sample`: reproducible planar graphs (grids, wheels, stars).

pub mod faces;
pub mod graph;
pub mod json;
pub mod mesh;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use faces::{BoundaryTest, OrderStrategy, Polygon, TraceCfg};
pub use graph::{Edge, Graph};
pub use mesh::{reconstruct, Mesh, MeshError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::faces::{
        AdjacencyTable, BoundaryTest, FaceTracer, OrderStrategy, Polygon, TraceCfg, TraceOutcome,
    };
    pub use crate::graph::{Edge, Graph, GraphError};
    pub use crate::json::{graph_from_json, mesh_from_json, mesh_to_json, CodecError};
    pub use crate::mesh::{reconstruct, Mesh, MeshError};
    pub use crate::sample::{draw_grid, draw_wheel, GridCfg, ReplayToken, WheelCfg};
    pub use nalgebra::Vector2 as Vec2;
}
