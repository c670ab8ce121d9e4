use pathgraph::algorithm::ShortestPathAlgorithm;
use pathgraph::graph::Graph;
use pathgraph::{io, Dijkstra};
use std::env;
use std::process;

const USAGE: &str = "usage: pathgraph <graph-file> <source> [destination]";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }

    if let Err(e) = run(&args[0], &args[1], args.get(2).map(String::as_str)) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(path: &str, source: &str, destination: Option<&str>) -> pathgraph::Result<()> {
    let graph = io::import_file(path)?;
    let source = graph.resolve_label(source)?;
    let dijkstra: Dijkstra<i64> = Dijkstra::new();

    match destination {
        Some(dest) => {
            let dest = graph.resolve_label(dest)?;
            let best = dijkstra.shortest(&graph, source, dest)?;
            let path = best
                .path
                .iter()
                .map(|&v| graph.label_of(v).map(|l| l.into_owned()))
                .collect::<pathgraph::Result<Vec<_>>>()?;
            println!("distance: {}", best.distance);
            println!("path: {}", path.join(" -> "));
        }
        None => {
            let result = dijkstra.compute_shortest_paths(&graph, source)?;
            for v in 0..graph.vertex_count() {
                let label = graph.label_of(v)?;
                match result.distance(v) {
                    Some(d) => {
                        let preds = result
                            .predecessors(v)
                            .iter()
                            .map(|&p| graph.label_of(p).map(|l| l.into_owned()))
                            .collect::<pathgraph::Result<Vec<_>>>()?;
                        println!("{}\t{}\t{}", label, d, preds.join(","));
                    }
                    None => println!("{}\tunreachable", label),
                }
            }
        }
    }

    Ok(())
}
