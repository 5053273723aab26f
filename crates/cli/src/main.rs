use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use wireface::faces::{BoundaryTest, OrderStrategy, TraceCfg};
use wireface::json::{graph_to_json, mesh_to_json_pretty, read_graph};
use wireface::sample::{draw_grid, draw_wheel, GridCfg, ReplayToken, WheelCfg};
use wireface::{reconstruct, Graph};

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Reconstruct planar faces from wireframe graphs")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Reconstruct the bounded faces of a JSON graph
    Faces {
        #[arg(long)]
        input: String,
        /// Mesh JSON destination; stdout when omitted
        #[arg(long)]
        out: Option<String>,
        #[arg(long, value_enum, default_value_t = Order::Entry)]
        order: Order,
        #[arg(long, value_enum, default_value_t = Boundary::Area)]
        boundary: Boundary,
    },
    /// Write a reproducible sampled graph
    Sample {
        #[command(subcommand)]
        shape: Shape,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Subcommand)]
enum Shape {
    /// Jittered lattice, optionally triangulated
    Grid {
        #[arg(long, default_value_t = 4)]
        rows: usize,
        #[arg(long, default_value_t = 4)]
        cols: usize,
        #[arg(long, default_value_t = 0.15)]
        jitter: f64,
        #[arg(long)]
        no_diagonals: bool,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Rim of spokes around an optional hub
    Wheel {
        #[arg(long, default_value_t = 8)]
        spokes: usize,
        #[arg(long, default_value_t = 0.3)]
        jitter: f64,
        #[arg(long)]
        no_hub: bool,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Order {
    Entry,
    Global,
}

impl From<Order> for OrderStrategy {
    fn from(o: Order) -> Self {
        match o {
            Order::Entry => OrderStrategy::EntryAware,
            Order::Global => OrderStrategy::GlobalAngle,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Boundary {
    Area,
    Turn,
}

impl From<Boundary> for BoundaryTest {
    fn from(b: Boundary) -> Self {
        match b {
            Boundary::Area => BoundaryTest::SignedArea,
            Boundary::Turn => BoundaryTest::PerTurn,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Faces {
            input,
            out,
            order,
            boundary,
        } => faces(&input, out.as_deref(), order, boundary, cmd.tag),
        Action::Sample { shape } => sample(shape, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn faces(
    input: &str,
    out: Option<&str>,
    order: Order,
    boundary: Boundary,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input, out, ?order, ?boundary, tag = ?tag, "faces");
    let file = fs::File::open(input).with_context(|| format!("opening {input}"))?;
    let graph = read_graph(std::io::BufReader::new(file))
        .with_context(|| format!("decoding graph from {input}"))?;
    let cfg = TraceCfg {
        order: order.into(),
        boundary: boundary.into(),
        ..TraceCfg::default()
    };
    let mesh = reconstruct(graph, cfg).with_context(|| format!("reconstructing {input}"))?;
    let stats = mesh.stats();
    tracing::info!(
        vertices = mesh.num_vertices(),
        edges = mesh.num_edges(),
        polygons = mesh.num_polygons(),
        duplicates = stats.duplicates,
        exterior = stats.exterior,
        degenerate = stats.degenerate,
        "reconstructed"
    );
    let text = mesh_to_json_pretty(&mesh)?;
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    write_output(out, &text)?;
    let mut payload = provenance::Payload::new(json!({
        "input": input,
        "order": format!("{order:?}").to_lowercase(),
        "boundary": format!("{boundary:?}").to_lowercase(),
    }));
    payload.tag = tag;
    payload.counts = json!({
        "vertices": mesh.num_vertices(),
        "edges": mesh.num_edges(),
        "polygons": mesh.num_polygons(),
    });
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn sample(shape: Shape, tag: Option<String>) -> Result<()> {
    let (graph, out, params): (Graph, String, serde_json::Value) = match shape {
        Shape::Grid {
            rows,
            cols,
            jitter,
            no_diagonals,
            seed,
            out,
        } => {
            let cfg = GridCfg {
                rows,
                cols,
                jitter_frac: jitter,
                diagonals: !no_diagonals,
                ..GridCfg::default()
            };
            let graph = draw_grid(cfg, ReplayToken { seed, index: 0 });
            let params = json!({
                "shape": "grid",
                "rows": rows,
                "cols": cols,
                "jitter": jitter,
                "diagonals": !no_diagonals,
                "seed": seed,
                "expected_faces": cfg.expected_faces(),
            });
            (graph, out, params)
        }
        Shape::Wheel {
            spokes,
            jitter,
            no_hub,
            seed,
            out,
        } => {
            let cfg = WheelCfg {
                spokes,
                radial_jitter: jitter,
                hub: !no_hub,
                ..WheelCfg::default()
            };
            let graph = draw_wheel(cfg, ReplayToken { seed, index: 0 });
            let params = json!({
                "shape": "wheel",
                "spokes": spokes,
                "jitter": jitter,
                "hub": !no_hub,
                "seed": seed,
                "expected_faces": cfg.expected_faces(),
            });
            (graph, out, params)
        }
    };
    tracing::info!(
        out,
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        tag = ?tag,
        "sample"
    );
    write_output(&out, &graph_to_json(&graph)?)?;
    let mut payload = provenance::Payload::new(params);
    payload.tag = tag;
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": wireface::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_output(out: &str, text: &str) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out_path, text).with_context(|| format!("writing {out}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn flags_map_onto_trace_options() {
        assert_eq!(OrderStrategy::from(Order::Entry), OrderStrategy::EntryAware);
        assert_eq!(OrderStrategy::from(Order::Global), OrderStrategy::GlobalAngle);
        assert_eq!(BoundaryTest::from(Boundary::Area), BoundaryTest::SignedArea);
        assert_eq!(BoundaryTest::from(Boundary::Turn), BoundaryTest::PerTurn);
    }

    #[test]
    fn parses_faces_with_global_tag() {
        let cmd = Cmd::try_parse_from([
            "cli", "faces", "--input", "g.json", "--order", "global", "--tag", "t1",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t1"));
        match cmd.action {
            Action::Faces {
                order, boundary, out, ..
            } => {
                assert_eq!(order, Order::Global);
                assert_eq!(boundary, Boundary::Area);
                assert!(out.is_none());
            }
            _ => panic!("expected faces"),
        }
    }

    #[test]
    fn sample_then_faces_writes_mesh_and_sidecars() {
        let dir = tempdir().unwrap();
        let graph_path = dir.path().join("grid.json");
        let mesh_path = dir.path().join("out/mesh.json");
        let graph_str = graph_path.to_string_lossy().to_string();
        let mesh_str = mesh_path.to_string_lossy().to_string();

        sample(
            Shape::Grid {
                rows: 2,
                cols: 3,
                jitter: 0.1,
                no_diagonals: false,
                seed: 9,
                out: graph_str.clone(),
            },
            Some("run".into()),
        )
        .unwrap();
        assert!(dir.path().join("grid.provenance.json").exists());

        faces(&graph_str, Some(&mesh_str), Order::Entry, Boundary::Area, None).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(&mesh_path).unwrap()).unwrap();
        assert_eq!(doc["polygons"].as_array().unwrap().len(), 12);

        let prov: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("out/mesh.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["counts"]["polygons"], 12);
        assert_eq!(prov["params"]["order"], "entry");
    }

    #[test]
    fn faces_reports_missing_input() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = faces(
            &missing.to_string_lossy(),
            None,
            Order::Entry,
            Boundary::Area,
            None,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("opening"));
    }
}
