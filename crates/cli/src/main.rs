use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use facegraph::generate::{jittered_grid, GridCfg};
use facegraph::{Dataset, FaceId, GeomCfg, Graph, Vec2};
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "facegraph")]
#[command(about = "Extract faces from planar graphs and query them")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Debug)]
struct Source {
    /// Built-in dataset name (see `list`); defaults to quadGrid
    #[arg(long, conflicts_with = "input")]
    dataset: Option<String>,
    /// Dataset JSON file
    #[arg(long)]
    input: Option<PathBuf>,
    /// Vertex-hit tolerance for point containment
    #[arg(long, default_value_t = GeomCfg::default().eps_vertex)]
    eps: f64,
}

#[derive(Subcommand)]
enum Action {
    /// List built-in datasets and check their expected face counts
    List,
    /// Print every face; optionally export the table as CSV
    Faces {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Locate the face under a point and show its neighbourhood
    Pick {
        #[command(flatten)]
        source: Source,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Breadth-first levels over face adjacency
    Bfs {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Write a random jittered grid as dataset JSON
    Generate {
        #[arg(long, default_value_t = 4)]
        rows: usize,
        #[arg(long, default_value_t = 4)]
        cols: usize,
        #[arg(long, default_value_t = 0.15)]
        jitter: f64,
        #[arg(long, default_value_t = 0.5)]
        diagonal_prob: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::List => list(),
        Action::Faces { source, out } => faces(&source, out.as_deref()),
        Action::Pick { source, x, y } => pick(&source, Vec2::new(x, y)).map(|_| ()),
        Action::Bfs { source, start } => bfs(&source, start).map(|_| ()),
        Action::Generate {
            rows,
            cols,
            jitter,
            diagonal_prob,
            seed,
            out,
        } => generate(
            GridCfg {
                rows,
                cols,
                jitter,
                diagonal_prob,
            },
            seed,
            &out,
        ),
        Action::Report => report(),
    }
}

impl Source {
    fn label(&self) -> String {
        match (&self.input, &self.dataset) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(name)) => name.clone(),
            (None, None) => "quadGrid".to_string(),
        }
    }

    fn load(&self) -> Result<(Dataset, Graph)> {
        let data = match &self.input {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Dataset::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => Dataset::builtin(self.dataset.as_deref().unwrap_or("quadGrid"))?,
        };
        let cfg = GeomCfg {
            eps_vertex: self.eps,
        };
        let graph = Graph::with_cfg(data.points(), &data.edges, cfg)
            .with_context(|| format!("building graph for {}", self.label()))?;
        if graph.face_count() != data.expect_face_count {
            tracing::warn!(
                expected = data.expect_face_count,
                actual = graph.face_count(),
                "face count differs from dataset"
            );
        }
        Ok((data, graph))
    }
}

fn list() -> Result<()> {
    for name in Dataset::builtin_names() {
        let data = Dataset::builtin(name)?;
        let (graph, ok) = data.check_face_count()?;
        println!(
            "{name:<16} vertices={:<3} edges={:<3} faces={}/{} {}",
            data.vertices.len(),
            data.edges.len(),
            graph.face_count(),
            data.expect_face_count,
            if ok { "ok" } else { "MISMATCH" }
        );
    }
    Ok(())
}

fn faces(source: &Source, out: Option<&Path>) -> Result<()> {
    let (_, graph) = source.load()?;
    tracing::info!(source = source.label(), faces = graph.face_count(), "faces");
    for face in graph.faces() {
        let bbox = face.bounding_box();
        let neighbours: Vec<usize> = face.adjacent_face_indices().iter().map(|f| f.0).collect();
        println!(
            "face {:>3}: {} edges, sign {:.4}, bbox [{:.3}, {:.3}] + [{:.3}, {:.3}], neighbours {:?}",
            face.index().0,
            face.edges().len(),
            face.sign(),
            bbox.position.x,
            bbox.position.y,
            bbox.size.x,
            bbox.size.y,
            neighbours
        );
    }
    if let Some(out) = out {
        export_faces(&graph, out, serde_json::to_value(SourceParams::from(source))?)?;
        tracing::info!(out = %out.display(), "wrote face table");
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct SourceParams {
    source: String,
    eps_vertex: f64,
}

impl From<&Source> for SourceParams {
    fn from(source: &Source) -> Self {
        Self {
            source: source.label(),
            eps_vertex: source.eps,
        }
    }
}

/// One row per face.
fn face_table(graph: &Graph) -> PolarsResult<DataFrame> {
    let n = graph.face_count();
    let mut index = Vec::with_capacity(n);
    let mut edges = Vec::with_capacity(n);
    let mut sign = Vec::with_capacity(n);
    let (mut min_x, mut min_y, mut width, mut height) =
        (Vec::with_capacity(n), Vec::with_capacity(n), Vec::with_capacity(n), Vec::with_capacity(n));
    let mut neighbours = Vec::with_capacity(n);
    for face in graph.faces() {
        let bbox = face.bounding_box();
        index.push(face.index().0 as u64);
        edges.push(face.edges().len() as u64);
        sign.push(face.sign());
        min_x.push(bbox.position.x);
        min_y.push(bbox.position.y);
        width.push(bbox.size.x);
        height.push(bbox.size.y);
        let adj: Vec<String> = face
            .adjacent_face_indices()
            .iter()
            .map(|f| f.0.to_string())
            .collect();
        neighbours.push(adj.join(" "));
    }
    df!(
        "face" => &index,
        "edges" => &edges,
        "sign" => &sign,
        "min_x" => &min_x,
        "min_y" => &min_y,
        "width" => &width,
        "height" => &height,
        "neighbours" => &neighbours
    )
}

fn export_faces(graph: &Graph, out: &Path, params: serde_json::Value) -> Result<PathBuf> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut df = face_table(graph)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    provenance::write_sidecar(out, params)
}

/// Face under a point with its neighbours and BFS levels.
#[derive(Debug)]
struct Picked {
    face: FaceId,
    neighbours: Vec<FaceId>,
    levels: Vec<Vec<FaceId>>,
}

fn locate(graph: &Graph, p: Vec2) -> Result<Option<Picked>> {
    let Some(face) = graph.pick(p) else {
        return Ok(None);
    };
    let view = graph
        .face(face)
        .context("picked face vanished from the graph")?;
    Ok(Some(Picked {
        face,
        neighbours: view.adjacent_face_indices(),
        levels: graph.bfs_levels(face)?,
    }))
}

fn pick(source: &Source, p: Vec2) -> Result<Option<Picked>> {
    let (_, graph) = source.load()?;
    tracing::info!(source = source.label(), x = p.x, y = p.y, "pick");
    let picked = locate(&graph, p)?;
    match &picked {
        None => println!("({}, {}) is outside every face", p.x, p.y),
        Some(hit) => {
            let neighbours: Vec<usize> = hit.neighbours.iter().map(|f| f.0).collect();
            println!("face {} (neighbours {:?})", hit.face.0, neighbours);
            print_levels(&hit.levels);
        }
    }
    Ok(picked)
}

fn bfs(source: &Source, start: usize) -> Result<Vec<Vec<FaceId>>> {
    let (_, graph) = source.load()?;
    tracing::info!(source = source.label(), start, "bfs");
    let levels = graph
        .bfs_levels(FaceId(start))
        .with_context(|| format!("bfs from face {start} of {}", source.label()))?;
    print_levels(&levels);
    Ok(levels)
}

fn print_levels(levels: &[Vec<FaceId>]) {
    for (depth, level) in levels.iter().enumerate() {
        let ids: Vec<usize> = level.iter().map(|f| f.0).collect();
        println!("depth {depth}: {ids:?}");
    }
}

fn generate(cfg: GridCfg, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(rows = cfg.rows, cols = cfg.cols, seed, out = %out.display(), "generate");
    let data = jittered_grid(cfg, seed);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, data.to_json()?).with_context(|| format!("writing {}", out.display()))?;
    provenance::write_sidecar(
        out,
        serde_json::json!({
            "rows": cfg.rows,
            "cols": cfg.cols,
            "jitter": cfg.jitter,
            "diagonal_prob": cfg.diagonal_prob,
            "seed": seed,
            "expect_face_count": data.expect_face_count,
        }),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": facegraph::VERSION,
        "datasets": Dataset::builtin_names().collect::<Vec<_>>(),
        "eps_vertex": GeomCfg::default().eps_vertex,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
