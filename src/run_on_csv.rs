use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs::File;
use std::time::Instant;
use tracing::{debug, info};

use dijkstra_paths::{csv_graph, logging, QueueKind};

#[derive(Parser, Debug)]
#[command(name = "csv")]
#[command(about = "Build a graph from a CSV with from,to,weight per row and run Dijkstra from a source vertex.", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Label of the vertex to run from
    #[arg(short, long)]
    source: String,

    /// Priority queue backing the run: indexed, lazy, orx or keyed
    #[arg(short, long, default_value_t = QueueKind::Indexed)]
    queue: QueueKind,

    /// Output CSV (vertex, distance, previous, path). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Print the shortest path to this vertex
    #[arg(short, long)]
    target: Option<String>,

    /// Include unreachable vertices in output with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,

    /// Number of runs, reported with their timings
    #[arg(short = 'n', long = "runs", default_value_t = 1)]
    num_runs: usize,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Log filter, e.g. "debug" or "dijkstra_paths=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.log_level.as_deref())
        .map_err(|e| anyhow!("initializing logging: {e}"))?;

    let graph = csv_graph::read_graph_from_path(&cli.csv)
        .with_context(|| format!("reading graph from {}", &cli.csv))?;
    println!(
        "Graph: {} vertices, {} directed edges",
        graph.len(),
        graph.edge_count()
    );

    let source = graph
        .find(&cli.source)
        .with_context(|| format!("source vertex {:?} not found in {}", &cli.source, &cli.csv))?;

    let mut duration_millis = Vec::with_capacity(cli.num_runs);
    let mut paths = None;
    for run in 0..cli.num_runs.max(1) {
        let now = Instant::now();
        let result = cli.queue.run(&graph, source)?;
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
        debug!(run, queue = %cli.queue, "run done");
        paths = Some(result);
    }
    let paths = paths.context("no run completed")?;
    info!(queue = %cli.queue, ?duration_millis, "timings (ms)");
    println!("{:?}", duration_millis);

    if let Some(target) = &cli.target {
        let vertex = graph
            .find(target)
            .with_context(|| format!("target vertex {:?} not found in {}", target, &cli.csv))?;
        match paths.path_to(vertex) {
            Some(path) => {
                let labels: Vec<_> = path
                    .into_iter()
                    .filter_map(|v| graph.label(v))
                    .collect();
                println!("{} ({:.6})", labels.join(" > "), paths.distance(vertex));
            }
            None => println!("{} is unreachable from {}", target, &cli.source),
        }
    }

    if let Some(out_path) = cli.out {
        let file = File::create(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        let rows = csv_graph::write_paths(&graph, &paths, file, cli.include_unreachable)
            .with_context(|| format!("writing CSV {}", &out_path))?;
        println!("Wrote distances for {} vertices to {}", rows, out_path);
    } else {
        println!("Vertices: {}", paths.len());
        println!("Reachable from {}: {}", cli.source, paths.reachable_count());
        if let Some(max_distance) = paths.max_distance() {
            println!("Max finite distance: {:.2}", max_distance);
        }
        let stats = paths.stats();
        println!(
            "Settled {} vertices, {} relaxations, {} stale queue entries",
            stats.settled, stats.relaxations, stats.stale_entries
        );
    }

    Ok(())
}
