//! Raw planar graph: vertex positions plus undirected edges.
//!
//! Purpose
//! - Hold the decoded input exactly as given (index order preserved) so that
//!   face reconstruction is a pure function of this value.
//! - Offer the precondition check (`Graph::validate`) that upgrades undefined
//!   numeric behavior on bad input into an explicit error.
//!
//! Code cross-refs: `faces::AdjacencyTable`, `mesh::reconstruct`, `json`.

mod types;

pub use types::{Edge, Graph, GraphError};

#[cfg(test)]
mod tests;
