use std::borrow::Cow;

use crate::graph::identifier::IdentifierSpace;
use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::graph::vertex::{SlotState, Vertex};
use crate::{Error, Result};

/// A directed graph stored as a dense vertex arena.
///
/// `vertices[i].id() == i` always holds: growing the store past its end
/// fills the gap with vacant slots so every index stays addressable.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W: Weight = i64> {
    /// Vertex slots, indexed by id
    vertices: Vec<Vertex<W>>,

    /// Label <-> id mapping, only meaningful when `using_map` is set
    identifiers: IdentifierSpace,

    /// Whether vertex ids come from `identifiers` rather than raw integers
    using_map: bool,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            identifiers: IdentifierSpace::new(),
            using_map: false,
        }
    }

    /// Creates a new directed graph with `vertices` declared vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: (0..vertices)
                .map(|id| Vertex::new(id, SlotState::Declared))
                .collect(),
            identifiers: IdentifierSpace::new(),
            using_map: false,
        }
    }

    /// Gets the vertex at `id`, or `NotFound` if it is out of range.
    pub fn get_vertex(&self, id: usize) -> Result<&Vertex<W>> {
        self.vertices.get(id).ok_or(Error::NotFound(id))
    }

    pub fn get_vertex_mut(&mut self, id: usize) -> Result<&mut Vertex<W>> {
        self.vertices.get_mut(id).ok_or(Error::NotFound(id))
    }

    pub fn vertices(&self) -> &[Vertex<W>] {
        &self.vertices
    }

    pub fn is_mapped(&self) -> bool {
        self.using_map
    }

    pub fn identifiers(&self) -> &IdentifierSpace {
        &self.identifiers
    }

    /// Declares a vertex by label, switching an empty graph to mapped mode.
    ///
    /// Fails with `MixedMode` if the graph already holds raw integer ids.
    pub fn add_labeled_vertex(&mut self, label: &str) -> Result<&mut Vertex<W>> {
        if !self.using_map {
            if !self.vertices.is_empty() {
                return Err(Error::MixedMode(label.to_string()));
            }
            self.enable_mapping();
        }
        let id = self.map_label(label);
        Ok(&mut self.vertices[id])
    }

    /// Reverse lookup of a vertex label. Only valid in mapped mode.
    pub fn get_mapped(&self, id: usize) -> Result<&str> {
        if !self.using_map {
            return Err(Error::Mapping(id));
        }
        self.identifiers.get_mapped(id)
    }

    /// External label of a vertex: its mapped label, or the id itself.
    pub fn label_of(&self, id: usize) -> Result<Cow<'_, str>> {
        if self.using_map {
            return self.get_mapped(id).map(Cow::Borrowed);
        }
        if id < self.vertices.len() {
            Ok(Cow::Owned(id.to_string()))
        } else {
            Err(Error::NotFound(id))
        }
    }

    /// Resolves an external label to a vertex id.
    pub fn resolve_label(&self, label: &str) -> Result<usize> {
        let id = if self.using_map {
            self.identifiers.get_id(label)
        } else {
            label.parse::<usize>().ok()
        };
        match id {
            Some(id) if id < self.vertices.len() => Ok(id),
            _ => Err(Error::UnknownLabel(label.to_string())),
        }
    }

    pub(crate) fn enable_mapping(&mut self) {
        self.using_map = true;
    }

    /// Looks up or assigns the id for `label` and makes sure its slot is declared.
    pub(crate) fn map_label(&mut self, label: &str) -> usize {
        let id = self.identifiers.lookup_or_create(label);
        self.add_vertex(id);
        id
    }

    /// Appends vacant slots until `id` is addressable.
    fn grow_to(&mut self, id: usize) {
        while self.vertices.len() <= id {
            let id = self.vertices.len();
            self.vertices.push(Vertex::new(id, SlotState::Vacant));
        }
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn arc_count(&self) -> usize {
        self.vertices.iter().map(Vertex::arc_count).sum()
    }

    fn outgoing_arcs(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.vertices.get(vertex) {
            Some(v) => Box::new(v.arcs()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertices.len()
    }

    fn has_arc(&self, from: usize, to: usize) -> bool {
        self.arc_weight(from, to).is_some()
    }

    fn arc_weight(&self, from: usize, to: usize) -> Option<W> {
        self.vertices.get(from).and_then(|v| v.weight_to(to))
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self, id: usize) -> &mut Vertex<W> {
        self.grow_to(id);
        let vertex = &mut self.vertices[id];
        vertex.declare();
        vertex
    }

    fn add_new_vertex(&mut self) -> &mut Vertex<W> {
        let id = self
            .vertices
            .iter()
            .position(|v| !v.is_declared())
            .unwrap_or(self.vertices.len());
        self.add_vertex(id)
    }

    fn add_arc(&mut self, from: usize, to: usize, weight: W) -> Result<Option<W>> {
        Ok(self.get_vertex_mut(from)?.add_arc(to, weight))
    }

    fn remove_arc(&mut self, from: usize, to: usize) -> Option<W> {
        self.vertices.get_mut(from).and_then(|v| v.remove_arc(to))
    }
}
