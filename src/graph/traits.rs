use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Signed};
use serde::Serialize;

use crate::graph::vertex::Vertex;
use crate::Result;

/// Integer arc weight.
///
/// Weights are signed so that a negative weight can be represented and
/// rejected, rather than silently wrapped at parse time.
pub trait Weight: PrimInt + Signed + Debug + Display + Serialize + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Signed + Debug + Display + Serialize + Send + Sync + 'static {}

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertex slots in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of arcs in the graph
    fn arc_count(&self) -> usize;

    /// Returns an iterator over the outgoing arcs of a vertex
    fn outgoing_arcs(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an arc between the two vertices
    fn has_arc(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an arc if it exists
    fn arc_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Declares the vertex `id`, growing the store as needed.
    fn add_vertex(&mut self, id: usize) -> &mut Vertex<W>;

    /// Declares a vertex in the first vacant slot, or at the end.
    fn add_new_vertex(&mut self) -> &mut Vertex<W>;

    /// Adds (or overwrites) the arc `from -> to`, returning the previous weight.
    ///
    /// `from` must already exist; `to` is only checked by validation.
    fn add_arc(&mut self, from: usize, to: usize, weight: W) -> Result<Option<W>>;

    /// Removes an arc from the graph, returning its weight
    fn remove_arc(&mut self, from: usize, to: usize) -> Option<W>;
}
