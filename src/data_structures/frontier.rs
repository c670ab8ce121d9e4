use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Visitation frontier for a label-setting search.
///
/// A min-heap keyed on tentative distance, with lazy deletion: a vertex may be
/// pushed several times as its distance improves, and `pop` discards every
/// stale entry whose vertex has already been settled. Equal distances pop in
/// ascending vertex order, so a search over the same graph is deterministic.
#[derive(Debug)]
pub struct Frontier<P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
    settled: Vec<bool>,
}

impl<P> Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty frontier over `vertices` vertex ids
    pub fn new(vertices: usize) -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            settled: vec![false; vertices],
        }
    }

    /// Empties the frontier and forgets every settled vertex
    pub fn reset(&mut self, vertices: usize) {
        self.heap.clear();
        self.settled.clear();
        self.settled.resize(vertices, false);
    }

    pub fn push(&mut self, vertex: usize, priority: P) {
        if !self.settled[vertex] {
            self.heap.push(Reverse((priority, vertex)));
        }
    }

    /// Removes the unsettled vertex with the smallest priority and settles it.
    pub fn pop(&mut self) -> Option<(usize, P)> {
        while let Some(Reverse((priority, vertex))) = self.heap.pop() {
            if !self.settled[vertex] {
                self.settled[vertex] = true;
                return Some((vertex, priority));
            }
        }
        None
    }

    pub fn is_settled(&self, vertex: usize) -> bool {
        self.settled.get(vertex).copied().unwrap_or(false)
    }

    /// Number of queued entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
