use pathgraph::algorithm::{SearchSession, ShortestPathAlgorithm};
use pathgraph::graph::generators::generate_random;
use pathgraph::graph::Graph;
use pathgraph::{DirectedGraph, Dijkstra};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::time::{Duration, Instant};

// Full search from vertex 0 with a fresh session
fn benchmark_full(dijkstra: &Dijkstra<i64>, graph: &DirectedGraph<i64>) -> (Duration, usize) {
    let start = Instant::now();
    let result = dijkstra
        .compute_shortest_paths(graph, 0)
        .expect("generated graphs are valid");
    (start.elapsed(), result.reachable_count())
}

// Early-stopping searches to several destinations, reusing one session
fn benchmark_targets(
    dijkstra: &Dijkstra<i64>,
    graph: &DirectedGraph<i64>,
    targets: &[usize],
) -> Duration {
    let mut session = SearchSession::new(graph.vertex_count(), dijkstra.sentinel());
    let start = Instant::now();
    for &target in targets {
        dijkstra
            .run(graph, 0, Some(target), &mut session)
            .expect("generated graphs are valid");
    }
    start.elapsed()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let edge_factor: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(4.0);
    let graph_sizes: Vec<usize> = match args.get(1).and_then(|s| s.parse().ok()) {
        Some(n) if n > 0 => vec![n],
        Some(_) => vec![1],
        None => vec![1_000, 10_000, 50_000, 100_000, 200_000],
    };

    println!("=====================================================");
    println!("Benchmark: Dijkstra with tied predecessors");
    println!("Edge factor: {} arcs per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph = generate_random(size, edge_factor, 100, &mut rng);
        println!(
            "\nGraph with {} vertices and {} arcs",
            graph.vertex_count(),
            graph.arc_count()
        );

        let (full_time, reachable) = benchmark_full(&dijkstra, &graph);
        println!("  - full search reached {} vertices in {:?}", reachable, full_time);

        let targets: Vec<usize> = (1..=10).map(|i| i * size / 11).collect();
        let target_time = benchmark_targets(&dijkstra, &graph, &targets);
        println!("  - {} early-stop searches in {:?}", targets.len(), target_time);

        results.push((size, full_time, target_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Vertices", "Full (ms)", "10 targets (ms)");
    println!("-----------------------------------------------------");
    for (size, full_time, target_time) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2}",
            size,
            full_time.as_secs_f64() * 1000.0,
            target_time.as_secs_f64() * 1000.0
        );
    }
}
