//! Arena-backed directed graph.
//!
//! Vertices are kept in insertion order and addressed by [`VertexId`]. Edges
//! live in a slot arena addressed by [`EdgeId`]; freed slots are recycled.
//! Each vertex indexes its edges twice (outgoing only, and everything in
//! attachment order), so degree queries are O(1) and rendering order is
//! deterministic.

use crate::error::{Error, Result};

use super::capability::Capabilities;
use super::types::{Edge, EdgeId, Vertex, VertexId};

/// A mutable directed graph with weighted edges.
///
/// At most one vertex exists per distinct value (per the equality
/// capability), and at most one edge per ordered `(source, target)` pair.
///
/// # Example
///
/// ```rust
/// use kgraph_core::graph::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add("A".to_string());
/// graph.add("B".to_string());
/// graph.connect(&"A".to_string(), &"B".to_string(), 3.0).unwrap();
///
/// assert_eq!(graph.weight(&"A".to_string(), &"B".to_string()), Ok(3.0));
/// assert_eq!(graph.to_string(), "[(A, 0, 1, [(A, B, 3.000000)]), (B, 1, 0, [(A, B, 3.000000)])]");
/// ```
#[derive(Debug)]
pub struct DirectedGraph<V> {
    /// Vertices in insertion order.
    nodes: Vec<Vertex<V>>,
    /// Edge slots; `None` marks a freed slot.
    edges: Vec<Option<Edge>>,
    /// Freed edge slots available for reuse.
    free: Vec<EdgeId>,
    capabilities: Capabilities<V>,
}

impl<V: PartialEq> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> DirectedGraph<V> {
    /// Creates an empty graph using `PartialEq` and `Display` for values.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::new())
    }

    /// Creates an empty graph with caller-supplied capabilities.
    #[must_use]
    pub fn with_capabilities(capabilities: Capabilities<V>) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            free: Vec::new(),
            capabilities,
        }
    }

    /// Returns the injected capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities<V> {
        &self.capabilities
    }

    // ── Vertex lookup ──────────────────────────────────────────────────

    /// Finds the vertex holding `value`.
    #[must_use]
    pub fn find(&self, value: &V) -> Option<VertexId> {
        self.nodes
            .iter()
            .position(|node| self.capabilities.equals(node.value(), value))
            .map(VertexId)
    }

    fn require(&self, value: &V) -> Result<VertexId> {
        self.find(value).ok_or(Error::VertexNotFound)
    }

    fn require_pair(&self, from: &V, to: &V) -> Result<(VertexId, VertexId)> {
        Ok((self.require(from)?, self.require(to)?))
    }

    /// Returns the vertex with the given id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.nodes.get(id.0)
    }

    /// Returns the value of the vertex with the given id.
    #[must_use]
    pub fn value(&self, id: VertexId) -> Option<&V> {
        self.vertex(id).map(Vertex::value)
    }

    /// Returns the edge in the given slot.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0).and_then(Option::as_ref)
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Adds a vertex. Does nothing if an equal value is already present.
    pub fn add(&mut self, value: V) -> VertexId {
        if let Some(id) = self.find(&value) {
            return id;
        }
        self.nodes.push(Vertex::new(value));
        VertexId(self.nodes.len() - 1)
    }

    /// Returns true if a vertex with an equal value exists.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.find(value).is_some()
    }

    /// Connects `from` to `to`, or updates the weight of the existing edge.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is absent.
    pub fn connect(&mut self, from: &V, to: &V, weight: f32) -> Result<()> {
        let (source, target) = self.require_pair(from, to)?;
        self.connect_ids(source, target, weight);
        Ok(())
    }

    /// Removes the edge from `from` to `to`. A missing edge is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is absent.
    pub fn disconnect(&mut self, from: &V, to: &V) -> Result<()> {
        let (source, target) = self.require_pair(from, to)?;
        self.remove_to(source, target);
        Ok(())
    }

    pub(crate) fn connect_ids(&mut self, source: VertexId, target: VertexId, weight: f32) {
        if let Some(id) = self.edge_id_between(source, target) {
            if let Some(edge) = self.edges[id.0].as_mut() {
                edge.set_weight(weight);
            }
            return;
        }

        let edge = Edge::new(source, target, weight);
        let id = match self.free.pop() {
            Some(id) => {
                self.edges[id.0] = Some(edge);
                id
            }
            None => {
                self.edges.push(Some(edge));
                EdgeId(self.edges.len() - 1)
            }
        };

        self.nodes[source.0].attach_outgoing(id);
        self.nodes[target.0].attach_incoming(id);
    }

    /// Removes the edge `source → target` from both adjacency views and
    /// frees its slot. No-op when the edge does not exist.
    pub(crate) fn remove_to(&mut self, source: VertexId, target: VertexId) {
        let Some(id) = self.edge_id_between(source, target) else {
            return;
        };
        self.nodes[source.0].detach_outgoing(id);
        self.nodes[target.0].detach(id);
        self.edges[id.0] = None;
        self.free.push(id);
    }

    /// Drops every edge, then every vertex.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.free.clear();
        self.nodes.clear();
    }

    // ── Queries ────────────────────────────────────────────────────────

    fn edge_id_between(&self, source: VertexId, target: VertexId) -> Option<EdgeId> {
        self.nodes[source.0]
            .outgoing()
            .iter()
            .copied()
            .find(|&id| self.edge(id).is_some_and(|e| e.target() == target))
    }

    /// Returns the edge `source → target`, scanning the source's outgoing list.
    #[must_use]
    pub fn edge_between(&self, source: VertexId, target: VertexId) -> Option<&Edge> {
        self.vertex(source)?;
        self.vertex(target)?;
        self.edge_id_between(source, target)
            .and_then(|id| self.edge(id))
    }

    /// Returns true if an edge `from → to` exists.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is absent.
    pub fn connected(&self, from: &V, to: &V) -> Result<bool> {
        let (source, target) = self.require_pair(from, to)?;
        Ok(self.edge_id_between(source, target).is_some())
    }

    /// Returns the weight of the edge `from → to`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is absent and
    /// `Error::EdgeNotFound` if they are not connected.
    pub fn weight(&self, from: &V, to: &V) -> Result<f32> {
        let (source, target) = self.require_pair(from, to)?;
        self.edge_between(source, target)
            .map(Edge::weight)
            .ok_or(Error::EdgeNotFound)
    }

    /// Returns the edges leaving `from`, in attachment order.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if `from` is absent.
    pub fn outward_edges(&self, from: &V) -> Result<Vec<&Edge>> {
        let id = self.require(from)?;
        Ok(self.outward_edges_of(id))
    }

    /// Returns the edges leaving the vertex `id`, in attachment order.
    #[must_use]
    pub fn outward_edges_of(&self, id: VertexId) -> Vec<&Edge> {
        self.vertex(id)
            .map(|node| {
                node.outgoing()
                    .iter()
                    .filter_map(|&edge| self.edge(edge))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the in-degree of `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if `value` is absent.
    pub fn in_degree(&self, value: &V) -> Result<usize> {
        let id = self.require(value)?;
        Ok(self.nodes[id.0].in_degree())
    }

    /// Returns the out-degree of `value`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if `value` is absent.
    pub fn out_degree(&self, value: &V) -> Result<usize> {
        let id = self.require(value)?;
        Ok(self.nodes[id.0].out_degree())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len() - self.free.len()
    }

    /// Returns every vertex value in insertion order.
    #[must_use]
    pub fn vertices(&self) -> Vec<&V> {
        self.nodes.iter().map(Vertex::value).collect()
    }

    /// Iterates over `(id, vertex)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex<V>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (VertexId(idx), node))
    }
}
