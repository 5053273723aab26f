//! Reconstruct the faces of a few small graphs and print them.
//!
//! Usage:
//!   cargo run -p wireface --example square_faces -- square
//!   cargo run -p wireface --example square_faces -- grid
//!   cargo run -p wireface --example square_faces -- star

use wireface::json::{graph_from_json, mesh_to_json_pretty};
use wireface::sample::{draw_grid, draw_wheel, GridCfg, ReplayToken, WheelCfg};
use wireface::Graph;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "square".to_string());
    let graph = match mode.as_str() {
        "square" => graph_from_json(
            r#"{"vertices": [[0, 0], [2, 0], [2, 2], [0, 2]],
                "edges": [[0, 1], [1, 2], [0, 2], [0, 3], [2, 3]]}"#,
        )
        .unwrap(),
        "grid" => draw_grid(
            GridCfg {
                rows: 2,
                cols: 3,
                ..GridCfg::default()
            },
            ReplayToken { seed: 2025, index: 0 },
        ),
        "star" => draw_wheel(
            WheelCfg {
                spokes: 7,
                radial_jitter: 0.6,
                hub: false,
                ..WheelCfg::default()
            },
            ReplayToken { seed: 777, index: 0 },
        ),
        _ => {
            eprintln!("usage: square_faces [square|grid|star]");
            return;
        }
    };
    show(graph);
}

fn show(graph: Graph) {
    let mesh = graph.into_mesh().unwrap();
    println!(
        "V={}, E={}, F={}",
        mesh.num_vertices(),
        mesh.num_edges(),
        mesh.num_polygons()
    );
    for (i, p) in mesh.polygons().iter().enumerate() {
        println!("face {i}: {:?}", p.vertices);
    }
    println!("{}", mesh_to_json_pretty(&mesh).unwrap());
}
