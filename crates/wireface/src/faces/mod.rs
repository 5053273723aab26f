//! Face reconstruction: angular adjacency + boundary tracing.
//!
//! Purpose
//! - Build, per vertex, the incident edges ordered counter-clockwise
//!   (`build.rs`), then walk every (vertex, edge) seed to trace the closed
//!   cycles bounding internal faces (`trace.rs`).
//!
//! Conventions
//! - Faces come out counter-clockwise: at each vertex the walk takes the
//!   tightest clockwise turn away from the edge it arrived on, which keeps the
//!   face on its left.
//! - A face is emitted once, from its lowest-indexed vertex. Walks that reach a
//!   lower index than their seed are dropped as duplicates.
//! - The unbounded face is traced clockwise and discarded by the configured
//!   `BoundaryTest`.
//!
//! Layout follows the rest of the crate: `types.rs` (config, outcomes,
//! errors), `build.rs` (adjacency + ranking), `trace.rs` (the walk).

mod build;
mod trace;
mod types;

pub use build::{clockwise_sweep, normalized_cross, AdjacencyTable};
pub use trace::{normalized_area, signed_area, trace_faces, FaceTracer};
pub use types::{
    BoundaryTest, OrderStrategy, Polygon, TraceCfg, TraceError, TraceOutcome, TraceStats,
};
