//! CLI timing harness for the BSP engine (§6) — not part of the core library.
//!
//! Loads a graph (a road-graph text file, a binary blob, or an in-process
//! `grid:<height>x<width>` pseudo-path), runs the engine from one or more sources, and
//! prints summary statistics. Exits non-zero on any parse failure or engine
//! precondition violation.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use bsp_pareto::graph::formats::{read_binary_graph, read_road_graph};
use bsp_pareto::graph::grid::generate_grid;
use bsp_pareto::graph::CsrGraph;
use bsp_pareto::pareto::{Config, Representation};

/// Which priority-structure / label-set representation a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum RepresentationArg {
    /// R1: sorted sequences.
    Sequence,
    /// R2: ordered trees.
    Tree,
}

impl From<RepresentationArg> for Representation {
    fn from(value: RepresentationArg) -> Self {
        match value {
            RepresentationArg::Sequence => Representation::Sequence,
            RepresentationArg::Tree => Representation::Tree,
        }
    }
}

/// Timing harness for the bi-objective shortest-path Pareto engine.
#[derive(Debug, Parser)]
#[command(name = "bsp", version, about)]
struct Args {
    /// Graph path: a road-graph text file, a `.bin` binary blob, or `grid:HxW`.
    #[arg(short = 'g', long)]
    graph: String,

    /// Repeat count: how many times to re-run the full batch, for timing stability.
    #[arg(short = 'i', long = "repeat", default_value_t = 1)]
    repeat: usize,

    /// Print per-source statistics instead of just the summary line.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// A free-form tag attached to the summary line, for distinguishing runs in logs.
    #[arg(short = 'l', long)]
    label: Option<String>,

    /// Number of sources (node ids `0..c`) to search from.
    #[arg(short = 'c', long = "count", default_value_t = 1)]
    sources: usize,

    /// Maximum per-edge coordinate weight used by the `grid:HxW` generator.
    #[arg(long, default_value_t = 10)]
    max_weight: u32,

    /// Which label-set / priority-structure representation to search with.
    #[arg(long, value_enum, default_value_t = RepresentationArg::Sequence)]
    representation: RepresentationArg,

    /// Print each source's summary as a JSON object (one per line) instead of the
    /// plain-text `-v` statistics line.
    #[arg(long)]
    json: bool,

    /// Worker thread count for the optional parallel steps.
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn load_graph(spec: &str, max_weight: u32) -> anyhow::Result<CsrGraph> {
    if let Some(dims) = spec.strip_prefix("grid:") {
        let (h, w) = dims
            .split_once('x')
            .with_context(|| format!("grid spec must be 'grid:HxW', got {spec:?}"))?;
        let height: usize = h.parse().with_context(|| format!("invalid grid height {h:?}"))?;
        let width: usize = w.parse().with_context(|| format!("invalid grid width {w:?}"))?;
        let mut rng = SmallRng::seed_from_u64(0x5a5a_5a5a);
        return generate_grid(height, width, max_weight, &mut rng)
            .with_context(|| format!("failed to generate {height}x{width} grid"));
    }

    let path = PathBuf::from(spec);
    if path.extension().is_some_and(|ext| ext == "bin") {
        let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        read_binary_graph(BufReader::new(file)).with_context(|| format!("parsing binary graph {}", path.display()))
    } else {
        let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        read_road_graph(BufReader::new(file)).with_context(|| format!("parsing road graph {}", path.display()))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    #[cfg(feature = "cli")]
    {
        use tracing_subscriber::EnvFilter;
        let filter = if args.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let graph = load_graph(&args.graph, args.max_weight)?;
    if args.sources == 0 || args.sources > graph.node_count() {
        bail!(
            "source count {} out of range 0..{} for graph {:?}",
            args.sources,
            graph.node_count(),
            args.graph
        );
    }

    let config = Config {
        representation: args.representation.into(),
        threads: args.threads.max(1),
        ..Config::sequential()
    };

    let mut total_labels = 0usize;
    let mut elapsed_runs = Vec::with_capacity(args.repeat);

    for repeat in 0..args.repeat {
        let start = Instant::now();
        total_labels = 0;
        for source in 0..args.sources {
            let result = bsp_pareto::pareto::run(&graph, source, &config)
                .with_context(|| format!("searching from source {source}"))?;
            let summary = result.summary();
            total_labels += summary.total_labels;
            if args.json {
                let line = serde_json::to_string(&summary).context("serializing search summary")?;
                println!("{line}");
            } else if args.verbose {
                info!(repeat, source, reached = summary.reached_count, labels = summary.total_labels, "source search complete");
            }
        }
        elapsed_runs.push(start.elapsed());
    }

    let median = {
        let mut sorted = elapsed_runs.clone();
        sorted.sort();
        sorted[sorted.len() / 2]
    };

    println!(
        "{} nodes={} edges={} sources={} repeat={} total_labels={} median={:?}",
        args.label.as_deref().unwrap_or("bsp"),
        graph.node_count(),
        graph.edge_count(),
        args.sources,
        args.repeat,
        total_labels,
        median,
    );

    Ok(())
}
