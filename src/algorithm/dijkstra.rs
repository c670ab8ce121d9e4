use log::{debug, trace};

use crate::algorithm::session::SearchSession;
use crate::algorithm::traits::{BestPath, BestPaths, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm, recording every predecessor on a tied shortest path.
///
/// The graph is borrowed immutably; all per-search state lives in a
/// [`SearchSession`]. Arc weights must be non-negative and are checked before
/// the search starts.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra<W: Weight = i64> {
    /// Distance assigned to vertices without a path
    sentinel: W,
}

impl<W> Dijkstra<W>
where
    W: Weight,
{
    /// Creates a new Dijkstra instance using `W::max_value()` as "infinite"
    pub fn new() -> Self {
        Dijkstra {
            sentinel: W::max_value(),
        }
    }

    /// Uses `sentinel` as the "no path" distance. Any path of length
    /// `sentinel` or more is treated as unreachable.
    pub fn with_sentinel(mut self, sentinel: W) -> Self {
        self.sentinel = sentinel;
        self
    }

    pub fn sentinel(&self) -> W {
        self.sentinel
    }

    /// Runs a search inside a caller-owned session, reusing its storage.
    pub fn run<G>(
        &self,
        graph: &G,
        source: usize,
        destination: Option<usize>,
        session: &mut SearchSession<W>,
    ) -> Result<()>
    where
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }
        if let Some(dest) = destination {
            if !graph.has_vertex(dest) {
                return Err(Error::NotFound(dest));
            }
        }
        if self.sentinel <= W::zero() {
            return Err(Error::AlgorithmError(format!(
                "sentinel distance must be positive, got {}",
                self.sentinel
            )));
        }
        check_arcs(graph)?;

        session.prepare(graph.vertex_count(), self.sentinel);
        session.running = true;
        debug!(
            "searching from {} (destination {:?}) over {} vertices",
            source,
            destination,
            graph.vertex_count()
        );

        self.relax_all(graph, source, destination, session);
        session.running = false;
        Ok(())
    }

    fn relax_all<G>(
        &self,
        graph: &G,
        source: usize,
        destination: Option<usize>,
        session: &mut SearchSession<W>,
    ) where
        G: Graph<W>,
    {
        session.distances[source] = W::zero();
        session.frontier.push(source, W::zero());

        let mut settled = 0usize;
        while let Some((u, dist_u)) = session.frontier.pop() {
            settled += 1;
            if destination == Some(u) {
                session.visited_destination = true;
                trace!("destination {} settled at distance {}", u, dist_u);
                break;
            }

            for (v, weight) in graph.outgoing_arcs(u) {
                if v == u {
                    continue;
                }
                // sums past the sentinel, overflowing ones included, are unreachable
                let candidate = match dist_u.checked_add(&weight) {
                    Some(candidate) if candidate < self.sentinel => candidate,
                    _ => continue,
                };

                let current = session.distances[v];
                if candidate < current {
                    session.distances[v] = candidate;
                    let preds = &mut session.best[v];
                    preds.clear();
                    preds.push(u);
                    session.frontier.push(v, candidate);
                } else if candidate == current && v != source && !session.best[v].contains(&u) {
                    session.best[v].push(u);
                }
            }
        }

        debug!("search from {} settled {} vertices", source, settled);
    }

    /// Shortest path from `source` to `destination`, stopping as soon as the
    /// destination is settled.
    pub fn shortest<G>(&self, graph: &G, source: usize, destination: usize) -> Result<BestPath<W>>
    where
        G: Graph<W>,
    {
        let result = self.search(graph, source, Some(destination))?;
        match (result.distance(destination), result.path_to(destination)) {
            (Some(distance), Some(path)) => Ok(BestPath { distance, path }),
            _ => Err(Error::NoPath {
                from: source,
                to: destination,
            }),
        }
    }

    /// Every tied shortest path from `source` to `destination`.
    pub fn shortest_all<G>(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
    ) -> Result<BestPaths<W>>
    where
        G: Graph<W>,
    {
        // run to completion: a tie can still arrive after the destination
        // is settled when zero-weight arcs are involved
        let result = self.search(graph, source, None)?;
        let distance = result.distance(destination).ok_or(Error::NoPath {
            from: source,
            to: destination,
        })?;
        Ok(BestPaths {
            distance,
            paths: result.all_paths_to(destination),
        })
    }
}

impl<W> Default for Dijkstra<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra<W>
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(
        &self,
        graph: &G,
        source: usize,
        destination: Option<usize>,
    ) -> Result<ShortestPathResult<W>> {
        let mut session = SearchSession::new(graph.vertex_count(), self.sentinel);
        self.run(graph, source, destination, &mut session)?;
        Ok(ShortestPathResult::from_session(
            session,
            source,
            destination,
            self.sentinel,
        ))
    }
}

/// Rejects negative weights and out-of-range targets before a search begins.
fn check_arcs<W, G>(graph: &G) -> Result<()>
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    for u in 0..n {
        for (v, weight) in graph.outgoing_arcs(u) {
            if weight < W::zero() {
                return Err(Error::NegativeWeight {
                    from: u,
                    to: v,
                    weight: weight.to_string(),
                });
            }
            if v >= n {
                return Err(Error::Validation { vertex: u, target: v });
            }
        }
    }
    Ok(())
}
