//! The boundary walk: one trace per (vertex, incident edge) seed.

use nalgebra::Vector2;

use crate::graph::Graph;

use super::build::{clockwise_sweep, normalized_cross, AdjacencyTable};
use super::types::{
    BoundaryTest, OrderStrategy, Polygon, TraceCfg, TraceError, TraceOutcome, TraceStats,
};

/// Trace every seed and collect the closed faces in seed order.
pub fn trace_faces(
    graph: &Graph,
    adjacency: &AdjacencyTable,
    cfg: TraceCfg,
) -> Result<(Vec<Polygon>, TraceStats), TraceError> {
    FaceTracer::new(graph, adjacency, cfg).run()
}

/// Shoelace signed area of the cycle `vertices` (positive when counter-clockwise).
///
/// Accumulated relative to the first vertex, so the result does not degrade
/// with the distance of the cycle from the origin.
///
/// Pre: every index is `< positions.len()`.
pub fn signed_area(positions: &[Vector2<f64>], vertices: &[usize]) -> f64 {
    let Some(&first) = vertices.first() else {
        return 0.0;
    };
    let p0 = positions[first];
    let twice: f64 = vertices
        .windows(2)
        .skip(1)
        .map(|w| (positions[w[0]] - p0).perp(&(positions[w[1]] - p0)))
        .sum();
    0.5 * twice
}

/// Signed area divided by the sum of squared side lengths.
///
/// Invariant under translation and uniform scaling (up to rounding).
/// Zero for cycles whose sides all have zero length.
pub fn normalized_area(positions: &[Vector2<f64>], polygon: &Polygon) -> f64 {
    let scale: f64 = polygon
        .sides()
        .map(|(a, b)| (positions[b] - positions[a]).norm_squared())
        .sum();
    if scale > 0.0 {
        signed_area(positions, &polygon.vertices) / scale
    } else {
        0.0
    }
}

/// Walker over read-only graph + adjacency. Traces never share state.
pub struct FaceTracer<'a> {
    graph: &'a Graph,
    adjacency: &'a AdjacencyTable,
    cfg: TraceCfg,
    step_limit: usize,
}

impl<'a> FaceTracer<'a> {
    pub fn new(graph: &'a Graph, adjacency: &'a AdjacencyTable, cfg: TraceCfg) -> Self {
        // A face boundary uses each directed edge at most once.
        let step_limit = 2 * graph.num_edges() + 1;
        Self {
            graph,
            adjacency,
            cfg,
            step_limit,
        }
    }

    #[inline]
    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// All seeds in ascending vertex order, then adjacency order.
    pub fn run(&self) -> Result<(Vec<Polygon>, TraceStats), TraceError> {
        let mut polygons = Vec::new();
        let mut stats = TraceStats::default();
        for seed in 0..self.adjacency.num_vertices() {
            for &edge in self.adjacency.incident(seed) {
                let outcome = self.trace(seed, edge)?;
                tracing::trace!(seed, edge, ?outcome, "trace");
                stats.record(&outcome);
                if let TraceOutcome::Closed(polygon) = outcome {
                    polygons.push(polygon);
                }
            }
        }
        tracing::debug!(
            polygons = polygons.len(),
            seeds = stats.seeds,
            duplicates = stats.duplicates,
            exterior = stats.exterior,
            degenerate = stats.degenerate,
            "traced faces"
        );
        Ok((polygons, stats))
    }

    /// Walk from `seed` along `first_edge` until the cycle closes or a discard
    /// rule fires.
    pub fn trace(&self, seed: usize, first_edge: usize) -> Result<TraceOutcome, TraceError> {
        let mut cycle = vec![seed];
        let mut here = seed;
        let mut edge = first_edge;
        for _ in 0..self.step_limit {
            let next = self.endpoint(edge, here)?;
            if next == seed {
                return Ok(self.close(cycle));
            }
            if next < seed {
                return Ok(TraceOutcome::Duplicate);
            }
            cycle.push(next);
            let out = self.next_edge(next, edge)?;
            if self.cfg.boundary == BoundaryTest::PerTurn && self.turns_outward(next, edge, out)? {
                return Ok(TraceOutcome::Exterior);
            }
            here = next;
            edge = out;
        }
        Err(TraceError::Unterminated {
            seed,
            edge: first_edge,
            steps: self.step_limit,
        })
    }

    /// Edge to leave `at` by, having arrived along `arrived`.
    fn next_edge(&self, at: usize, arrived: usize) -> Result<usize, TraceError> {
        let missing = TraceError::MissingIncidence {
            vertex: at,
            edge: arrived,
        };
        match self.cfg.order {
            OrderStrategy::GlobalAngle => self
                .adjacency
                .clockwise_neighbor(at, arrived)
                .ok_or(missing),
            OrderStrategy::EntryAware => {
                let list = self.adjacency.incident(at);
                if !list.contains(&arrived) {
                    return Err(missing);
                }
                let back = self.direction(at, arrived)?;
                let mut best: Option<(f64, usize)> = None;
                for &cand in list {
                    if cand == arrived {
                        continue;
                    }
                    let key = clockwise_sweep(back, self.direction(at, cand)?);
                    let better = match best {
                        None => true,
                        Some((k, e)) => key.total_cmp(&k).then(cand.cmp(&e)).is_lt(),
                    };
                    if better {
                        best = Some((key, cand));
                    }
                }
                // Dead end: turn back along the arrival edge.
                Ok(best.map_or(arrived, |(_, e)| e))
            }
        }
    }

    /// Right turn at `at` (cross of the two edges, both anchored at `at`, is positive).
    fn turns_outward(&self, at: usize, arrived: usize, out: usize) -> Result<bool, TraceError> {
        if out == arrived {
            return Ok(false);
        }
        let back = self.direction(at, arrived)?;
        let ahead = self.direction(at, out)?;
        Ok(normalized_cross(back, ahead) > self.cfg.eps_turn)
    }

    fn close(&self, cycle: Vec<usize>) -> TraceOutcome {
        let cycle = prune_spurs(cycle);
        if cycle.len() < 3 || !all_distinct(&cycle) {
            return TraceOutcome::Degenerate;
        }
        let polygon = Polygon {
            vertices: cycle,
            closed: true,
        };
        if self.cfg.boundary == BoundaryTest::SignedArea
            && normalized_area(self.graph.vertices(), &polygon) <= self.cfg.eps_area
        {
            return TraceOutcome::Exterior;
        }
        TraceOutcome::Closed(polygon)
    }

    fn endpoint(&self, edge: usize, here: usize) -> Result<usize, TraceError> {
        self.graph
            .edge(edge)
            .and_then(|e| e.other(here))
            .ok_or(TraceError::MissingIncidence { vertex: here, edge })
    }

    fn direction(&self, at: usize, edge: usize) -> Result<Vector2<f64>, TraceError> {
        self.graph
            .direction(at, edge)
            .ok_or(TraceError::MissingIncidence { vertex: at, edge })
    }
}

/// Collapse `a, b, a` back-and-forth runs left by dangling edges.
fn prune_spurs(cycle: Vec<usize>) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::with_capacity(cycle.len());
    for v in cycle {
        if out.len() >= 2 && out[out.len() - 2] == v {
            out.pop();
        } else {
            out.push(v);
        }
    }
    out
}

fn all_distinct(cycle: &[usize]) -> bool {
    let mut sorted = cycle.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[0] != w[1])
}

#[cfg(test)]
mod unit {
    use super::*;

    #[test]
    fn spur_runs_collapse() {
        assert_eq!(prune_spurs(vec![0, 1, 2, 4, 5, 4, 2, 3]), vec![0, 1, 2, 3]);
        assert_eq!(prune_spurs(vec![0, 1, 2, 1]), vec![0, 1]);
        assert_eq!(prune_spurs(vec![0, 1, 2]), vec![0, 1, 2]);
    }

    #[test]
    fn distinctness() {
        assert!(all_distinct(&[3, 1, 2]));
        assert!(!all_distinct(&[3, 1, 3, 2]));
    }
}
