use crate::data_structures::Frontier;
use crate::graph::Weight;

/// Mutable state of one search, kept apart from the graph topology.
///
/// The graph is only ever borrowed immutably by a search, so a single graph
/// can serve any number of sessions. A session may be reused across searches;
/// each run starts by resetting it with [`SearchSession::set_defaults`].
#[derive(Debug)]
pub struct SearchSession<W>
where
    W: Weight,
{
    pub(crate) distances: Vec<W>,
    pub(crate) best: Vec<Vec<usize>>,
    pub(crate) frontier: Frontier<W>,
    pub(crate) visited_destination: bool,
    pub(crate) running: bool,
}

impl<W> SearchSession<W>
where
    W: Weight,
{
    /// Creates a session for `vertices` vertices, every distance set to
    /// `sentinel` and no predecessors recorded.
    pub fn new(vertices: usize, sentinel: W) -> Self {
        SearchSession {
            distances: vec![sentinel; vertices],
            best: vec![Vec::new(); vertices],
            frontier: Frontier::new(vertices),
            visited_destination: false,
            running: false,
        }
    }

    /// Resets every vertex to `distance` with predecessor set `{best_node}`
    /// (empty for `None`), erasing the previous search's results.
    pub fn set_defaults(&mut self, distance: W, best_node: Option<usize>) {
        for d in self.distances.iter_mut() {
            *d = distance;
        }
        for preds in self.best.iter_mut() {
            preds.clear();
            preds.extend(best_node);
        }
        self.frontier.reset(self.distances.len());
        self.visited_destination = false;
        self.running = false;
    }

    /// Resizes the session to `vertices` vertices and applies `set_defaults`.
    pub(crate) fn prepare(&mut self, vertices: usize, sentinel: W) {
        self.distances.resize(vertices, sentinel);
        self.best.resize_with(vertices, Vec::new);
        self.set_defaults(sentinel, None);
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Current best distance of `vertex`; the sentinel when nothing was found.
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    pub fn predecessors(&self, vertex: usize) -> &[usize] {
        self.best.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True once the requested destination has been settled.
    pub fn visited_destination(&self) -> bool {
        self.visited_destination
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
