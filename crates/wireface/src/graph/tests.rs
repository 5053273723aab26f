use super::*;
use nalgebra::vector;
use std::collections::HashSet;

fn unit_square() -> Graph {
    Graph::from_pairs(
        &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
        &[(0, 1), (1, 2), (2, 3), (3, 0)],
    )
}

#[test]
fn edge_equality_ignores_direction() {
    assert_eq!(Edge::new(2, 5), Edge::new(5, 2));
    assert_ne!(Edge::new(2, 5), Edge::new(2, 4));
    let set: HashSet<Edge> = [Edge::new(1, 3), Edge::new(3, 1), Edge::new(1, 2)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn edge_other_endpoint() {
    let e = Edge::new(4, 7);
    assert_eq!(e.other(4), Some(7));
    assert_eq!(e.other(7), Some(4));
    assert_eq!(e.other(5), None);
    assert!(e.touches(7) && !e.touches(0));
    assert_eq!(Edge::new(9, 2).canonical(), (2, 9));
}

#[test]
fn lookups_and_counts() {
    let g = unit_square();
    assert_eq!(g.num_vertices(), 4);
    assert_eq!(g.num_edges(), 4);
    assert_eq!(g.vertex(2), Some(vector![1.0, 1.0]));
    assert_eq!(g.vertex(4), None);
    assert_eq!(g.edge(3), Some(Edge::new(3, 0)));
    assert_eq!(g.edge(4), None);
    assert_eq!(g.direction(1, 1), Some(vector![0.0, 1.0]));
    assert_eq!(g.direction(0, 1), None);
    assert!(g.validate().is_ok());
}

#[test]
fn validate_reports_bad_input() {
    let out_of_range = Graph::from_pairs(&[(0.0, 0.0), (1.0, 0.0)], &[(0, 1), (1, 2)]);
    assert_eq!(
        out_of_range.validate(),
        Err(GraphError::VertexOutOfRange {
            edge: 1,
            vertex: 2,
            num_vertices: 2
        })
    );

    let self_loop = Graph::from_pairs(&[(0.0, 0.0), (1.0, 0.0)], &[(1, 1)]);
    assert_eq!(
        self_loop.validate(),
        Err(GraphError::SelfLoop { edge: 0, vertex: 1 })
    );

    let zero = Graph::from_pairs(&[(0.5, 0.5), (0.5, 0.5)], &[(0, 1)]);
    assert_eq!(zero.validate(), Err(GraphError::ZeroLength { edge: 0 }));

    let nan = Graph::from_pairs(&[(0.0, f64::NAN)], &[]);
    assert_eq!(nan.validate(), Err(GraphError::NonFinite { vertex: 0 }));
}

#[test]
fn isolated_vertices_are_valid() {
    let g = Graph::from_pairs(&[(0.0, 0.0), (3.0, 3.0)], &[]);
    assert!(g.validate().is_ok());
    assert_eq!(g.num_edges(), 0);
}

#[test]
fn error_messages_name_the_offender() {
    let msg = GraphError::ZeroLength { edge: 3 }.to_string();
    assert!(msg.contains("edge 3"));
}
