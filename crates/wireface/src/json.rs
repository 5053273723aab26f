//! JSON codec for graphs and meshes.
//!
//! Format
//! ```json
//! {"vertices": [[0, 0], [2, 0], [2, 2]], "edges": [[0, 1], [1, 2], [2, 0]], "polygons": [[0, 1, 2]]}
//! ```
//! - Keys may appear in any order; decoding is structural (serde), not textual.
//! - `polygons` is optional on input and always ignored there: faces are
//!   recomputed from vertices and edges. Encoding a `Mesh` writes them.
//! - Decoded graphs are validated before they are returned.

use std::fmt;
use std::io::{Read, Write};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::faces::TraceCfg;
use crate::graph::{Edge, Graph, GraphError};
use crate::mesh::{reconstruct, Mesh, MeshError};

/// Errors from decoding or encoding.
#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
    Invalid(GraphError),
    Reconstruct(MeshError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Json(err) => write!(f, "malformed mesh JSON: {err}"),
            CodecError::Invalid(err) => write!(f, "invalid graph in JSON: {err}"),
            CodecError::Reconstruct(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Json(err) => Some(err),
            CodecError::Invalid(err) => Some(err),
            CodecError::Reconstruct(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Json(err)
    }
}

/// Wire shape shared by graphs and meshes.
#[derive(Debug, Serialize, Deserialize)]
struct MeshDoc {
    vertices: Vec<[f64; 2]>,
    edges: Vec<[usize; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    polygons: Option<Vec<Vec<usize>>>,
}

impl MeshDoc {
    fn from_graph(graph: &Graph, polygons: Option<Vec<Vec<usize>>>) -> Self {
        Self {
            vertices: graph.vertices().iter().map(|p| [p.x, p.y]).collect(),
            edges: graph.edges().iter().map(|e| [e.start, e.end]).collect(),
            polygons,
        }
    }

    /// Unchecked conversion; callers validate or hand off to `reconstruct`.
    fn into_graph(self) -> Graph {
        let positions = self
            .vertices
            .into_iter()
            .map(|[x, y]| Vector2::new(x, y))
            .collect();
        let edges = self
            .edges
            .into_iter()
            .map(|[a, b]| Edge::new(a, b))
            .collect();
        Graph::new(positions, edges)
    }
}

fn mesh_doc(mesh: &Mesh) -> MeshDoc {
    let polygons = mesh
        .polygons()
        .iter()
        .map(|p| p.vertices.clone())
        .collect();
    MeshDoc::from_graph(mesh.graph(), Some(polygons))
}

fn validated(graph: Graph) -> Result<Graph, CodecError> {
    graph.validate().map_err(CodecError::Invalid)?;
    Ok(graph)
}

/// Decode and validate a graph. Precondition failures are `CodecError::Invalid`.
pub fn graph_from_json(text: &str) -> Result<Graph, CodecError> {
    validated(serde_json::from_str::<MeshDoc>(text)?.into_graph())
}

/// Decode and validate a graph from a reader.
pub fn read_graph<R: Read>(reader: R) -> Result<Graph, CodecError> {
    validated(serde_json::from_reader::<_, MeshDoc>(reader)?.into_graph())
}

/// Decode, then reconstruct faces with `cfg`.
///
/// Validation happens once, inside `reconstruct`: a malformed graph comes back
/// as `CodecError::Reconstruct(MeshError::Invalid(_))`.
pub fn mesh_from_json(text: &str, cfg: TraceCfg) -> Result<Mesh, CodecError> {
    let graph = serde_json::from_str::<MeshDoc>(text)?.into_graph();
    reconstruct(graph, cfg).map_err(CodecError::Reconstruct)
}

/// Vertices and edges only (no `polygons` key).
pub fn graph_to_json(graph: &Graph) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&MeshDoc::from_graph(graph, None))?)
}

/// Vertices, edges, and polygons, compact.
pub fn mesh_to_json(mesh: &Mesh) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&mesh_doc(mesh))?)
}

/// Vertices, edges, and polygons, indented.
pub fn mesh_to_json_pretty(mesh: &Mesh) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(&mesh_doc(mesh))?)
}

/// Stream a pretty-printed mesh document into `writer`.
pub fn write_mesh<W: Write>(mesh: &Mesh, writer: W) -> Result<(), CodecError> {
    serde_json::to_writer_pretty(writer, &mesh_doc(mesh))?;
    Ok(())
}
