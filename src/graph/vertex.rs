use std::collections::HashMap;

use crate::graph::traits::Weight;

/// Occupancy of a vertex slot in the dense store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Explicitly created, by ingestion or by an `add_vertex` call.
    Declared,
    /// Created only to keep indices dense when a later id was added.
    Vacant,
}

/// A single vertex and its outgoing arcs (destination -> weight).
#[derive(Debug, Clone)]
pub struct Vertex<W>
where
    W: Weight,
{
    id: usize,
    state: SlotState,
    arcs: HashMap<usize, W>,
}

impl<W> Vertex<W>
where
    W: Weight,
{
    pub(crate) fn new(id: usize, state: SlotState) -> Self {
        Vertex {
            id,
            state,
            arcs: HashMap::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    /// True unless the slot only exists to fill a gap.
    pub fn is_declared(&self) -> bool {
        self.state == SlotState::Declared
    }

    pub(crate) fn declare(&mut self) {
        self.state = SlotState::Declared;
    }

    /// Adds an arc to `destination`. A repeated destination overwrites the
    /// previous weight, which is returned.
    pub fn add_arc(&mut self, destination: usize, weight: W) -> Option<W> {
        self.arcs.insert(destination, weight)
    }

    pub fn remove_arc(&mut self, destination: usize) -> Option<W> {
        self.arcs.remove(&destination)
    }

    pub fn weight_to(&self, destination: usize) -> Option<W> {
        self.arcs.get(&destination).copied()
    }

    /// Outgoing arcs in unspecified order.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, W)> + '_ {
        self.arcs.iter().map(|(&to, &weight)| (to, weight))
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }
}
