use crate::graph::{DirectedGraph, Graph, MutableGraph};
use rand::Rng;

/// Generates a random directed graph with `n` vertices and roughly
/// `edge_factor * n` arcs, weights drawn uniformly from `1..=max_weight`.
/// Self-loops are skipped; repeated pairs overwrite each other.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    rng: &mut R,
) -> DirectedGraph<i64> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return graph;
    }

    let arcs = (edge_factor * n as f64) as usize;
    for _ in 0..arcs {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            graph.add_vertex(u).add_arc(v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 4-connectivity and unit weights,
/// arcs in both directions. Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            let vertex = graph.add_vertex(current);
            if x > 0 {
                vertex.add_arc(index(x - 1, y), 1);
            }
            if x + 1 < width {
                vertex.add_arc(index(x + 1, y), 1);
            }
            if y > 0 {
                vertex.add_arc(index(x, y - 1), 1);
            }
            if y + 1 < height {
                vertex.add_arc(index(x, y + 1), 1);
            }
        }
    }

    debug_assert_eq!(graph.vertex_count(), width * height);
    graph
}
