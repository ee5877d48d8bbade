use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use clap::Parser;

use citygrid::dijkstra::route;
use citygrid::graph::TransitGraph;
use citygrid::input::{read_problem, Mode, Problem};

#[derive(Parser, Debug)]
#[command(name = "citygrid")]
#[command(about = "Parse an ASCII transit map into a weighted graph and answer shortest-route queries.", long_about = None)]
struct Cli {
    /// Input file with the map, flights and queries. Reads stdin if omitted.
    #[arg(short, long)]
    input: Option<String>,

    /// Print station and edge counts to stderr after construction.
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Dump the full adjacency list to stderr after construction.
    #[arg(long, default_value_t = false)]
    log_graph: bool,
}

fn log_graph(graph: &TransitGraph) {
    for id in 0..graph.len() {
        let mut line = format!("{}. {}", id, graph.station(id).name);
        for &(target, time) in graph.neighbors(id) {
            line.push_str(&format!(" [{}-{}]", target, time));
        }
        eprintln!("{line}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Problem { grid, flights, requests } = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {path}"))?;
            read_problem(BufReader::new(file))?
        }
        None => read_problem(io::stdin().lock())?,
    };

    let mut graph = TransitGraph::from_grid(&grid)?;
    drop(grid);
    for flight in &flights {
        graph
            .add_flight(&flight.dep, &flight.dest, flight.time)
            .context("adding flight")?;
    }

    if cli.stats {
        eprintln!("Graph: {} stations, {} directed edges", graph.len(), graph.edge_count());
    }
    if cli.log_graph {
        log_graph(&graph);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for request in &requests {
        // A bad name fails this query only; later queries still run.
        let (Some(from), Some(to)) = (
            graph.station_id(&request.dep),
            graph.station_id(&request.dest),
        ) else {
            eprintln!(
                "skipping query {} -> {}: unknown station name",
                request.dep, request.dest
            );
            continue;
        };
        let result = route(&graph, from, to, request.mode == Mode::TimeAndRoute);
        write!(out, "{}", result.time)?;
        for name in &result.via {
            write!(out, " {name}")?;
        }
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
