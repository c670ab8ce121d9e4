use serde::Serialize;

use crate::algorithm::session::SearchSession;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path search
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Source vertex ID
    pub source: usize,

    /// Destination the search was asked to stop at, if any
    pub destination: Option<usize>,

    /// Whether `destination` was settled before the search stopped
    pub visited_destination: bool,

    /// Distance value meaning "no path found"
    pub sentinel: W,

    /// Distances from source to each vertex
    pub distances: Vec<W>,

    /// Every predecessor achieving each vertex's distance, first-found first
    pub predecessors: Vec<Vec<usize>>,
}

/// A single shortest path and its length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestPath<W>
where
    W: Weight,
{
    pub distance: W,
    pub path: Vec<usize>,
}

/// Every shortest path between two vertices, all of the same length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestPaths<W>
where
    W: Weight,
{
    pub distance: W,
    pub paths: Vec<Vec<usize>>,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    pub(crate) fn from_session(
        session: SearchSession<W>,
        source: usize,
        destination: Option<usize>,
        sentinel: W,
    ) -> Self {
        ShortestPathResult {
            source,
            destination,
            visited_destination: session.visited_destination,
            sentinel,
            distances: session.distances,
            predecessors: session.best,
        }
    }

    /// Number of vertex slots covered by the result
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances
            .get(vertex)
            .map_or(false, |&d| d < self.sentinel)
    }

    /// Best known distance to `vertex`, `None` if it was not reached
    pub fn distance(&self, vertex: usize) -> Option<W> {
        if self.is_reachable(vertex) {
            Some(self.distances[vertex])
        } else {
            None
        }
    }

    pub fn predecessors(&self, vertex: usize) -> &[usize] {
        self.predecessors
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn reachable_count(&self) -> usize {
        (0..self.len()).filter(|&v| self.is_reachable(v)).count()
    }

    /// One shortest path from the source to `target`.
    ///
    /// Follows the first recorded predecessor at every step. That predecessor
    /// is the one which first lowered the vertex to its final distance, so the
    /// walk always makes progress back towards the source.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.predecessors.get(current)?.first()?;
            path.push(current);
            if path.len() > self.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Every shortest path from the source to `target`.
    ///
    /// The number of tied paths can grow exponentially with the graph, e.g.
    /// on unit-weight grids; see [`ShortestPathResult::paths_to`] for a
    /// bounded variant.
    pub fn all_paths_to(&self, target: usize) -> Vec<Vec<usize>> {
        self.paths_to(target, usize::MAX)
    }

    /// At most `limit` shortest paths from the source to `target`, in
    /// predecessor order.
    pub fn paths_to(&self, target: usize, limit: usize) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        if limit > 0 && self.is_reachable(target) {
            let mut suffix = Vec::new();
            self.collect_paths(target, limit, &mut suffix, &mut paths);
        }
        paths
    }

    fn collect_paths(
        &self,
        vertex: usize,
        limit: usize,
        suffix: &mut Vec<usize>,
        paths: &mut Vec<Vec<usize>>,
    ) {
        suffix.push(vertex);
        if vertex == self.source {
            paths.push(suffix.iter().rev().copied().collect());
        } else {
            for &pred in self.predecessors(vertex) {
                if paths.len() >= limit {
                    break;
                }
                // zero-weight cycles can make predecessor sets cyclic
                if !suffix.contains(&pred) {
                    self.collect_paths(pred, limit, suffix, paths);
                }
            }
        }
        suffix.pop();
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Search from `source`, stopping early once `destination` is settled.
    fn search(
        &self,
        graph: &G,
        source: usize,
        destination: Option<usize>,
    ) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.search(graph, source, None)
    }

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }
}
