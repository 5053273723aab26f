//! Data types for face tracing: configuration, polygons, outcomes, faults.

use std::fmt;

/// How the next edge is chosen at each vertex of a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderStrategy {
    /// Circular lookup in the global counter-clockwise order: take the
    /// clockwise neighbour of the arrival edge.
    GlobalAngle,
    /// Rank candidates by their clockwise sweep from the arrival direction and
    /// take the smallest.
    #[default]
    EntryAware,
}

/// How a walk around the unbounded face is recognised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryTest {
    /// Abandon as soon as a single turn bends outward. Exact for convex faces
    /// only; a reflex corner of a concave face also trips it.
    PerTurn,
    /// Accept a closed walk only if its normalized signed area (see
    /// `normalized_area`) exceeds `eps_area`. Scale and position free.
    #[default]
    SignedArea,
}

/// Tracing configuration (strategy + tolerances).
#[derive(Clone, Copy, Debug)]
pub struct TraceCfg {
    pub order: OrderStrategy,
    pub boundary: BoundaryTest,
    /// Closed walks with `area / Σ side²` at or below this are treated as
    /// exterior. Dimensionless.
    pub eps_area: f64,
    /// Normalized cross products `> eps_turn` count as outward turns.
    pub eps_turn: f64,
}

impl Default for TraceCfg {
    fn default() -> Self {
        Self {
            order: OrderStrategy::default(),
            boundary: BoundaryTest::default(),
            eps_area: 1e-12,
            eps_turn: 1e-12,
        }
    }
}

/// Vertex cycle bounding one face.
///
/// Invariants for polygons handed out by `Mesh`:
/// - `closed` is true and there are at least 3 distinct vertices;
/// - `vertices[0]` is the lowest index in the cycle (the seed).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<usize>,
    pub closed: bool,
}

impl Polygon {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consecutive vertex pairs, including the closing pair `(last, first)`.
    pub fn sides(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| (self.vertices[k], self.vertices[(k + 1) % n]))
    }
}

/// Result of a single walk from one (vertex, edge) seed.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceOutcome {
    /// Returned to the seed vertex and passed the boundary test.
    Closed(Polygon),
    /// Reached a vertex below the seed; the face belongs to a lower seed.
    Duplicate,
    /// The walk went around the unbounded face.
    Exterior,
    /// Returned to the seed but the cycle is not simple (fewer than 3
    /// vertices after spur pruning, or a repeated vertex).
    Degenerate,
}

/// Counters over all seeds of one reconstruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub seeds: usize,
    pub closed: usize,
    pub duplicates: usize,
    pub exterior: usize,
    pub degenerate: usize,
}

impl TraceStats {
    pub(crate) fn record(&mut self, outcome: &TraceOutcome) {
        self.seeds += 1;
        match outcome {
            TraceOutcome::Closed(_) => self.closed += 1,
            TraceOutcome::Duplicate => self.duplicates += 1,
            TraceOutcome::Exterior => self.exterior += 1,
            TraceOutcome::Degenerate => self.degenerate += 1,
        }
    }
}

/// Internal-consistency faults. These indicate a broken adjacency table, not
/// bad data, and abort the reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The walk from `(seed, edge)` neither closed nor hit a discard rule
    /// within `steps` edge transitions.
    Unterminated {
        seed: usize,
        edge: usize,
        steps: usize,
    },
    /// `edge` is not incident to `vertex` where the walk expected it.
    MissingIncidence { vertex: usize, edge: usize },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Unterminated { seed, edge, steps } => write!(
                f,
                "trace from vertex {seed} along edge {edge} did not terminate after {steps} steps (inconsistent adjacency)"
            ),
            TraceError::MissingIncidence { vertex, edge } => write!(
                f,
                "edge {edge} is missing from the adjacency of vertex {vertex}"
            ),
        }
    }
}

impl std::error::Error for TraceError {}
