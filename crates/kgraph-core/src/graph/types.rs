//! Vertex and edge types for the arena-backed directed graph.
//!
//! Vertices and edges refer to each other by stable index, never by address.
//! An edge lives exactly once in the graph's edge arena; the adjacency lists
//! of its endpoints only hold its [`EdgeId`].

use std::fmt;

/// Stable index of a vertex inside its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Returns the insertion position of the vertex.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Stable index of an edge slot inside its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Returns the arena slot of the edge.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A directed, weighted link between two vertices.
///
/// Endpoints are fixed at creation; only the weight changes. Two edges are
/// equal when they share source and target, whatever their weights.
///
/// # Example
///
/// ```rust
/// use kgraph_core::graph::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add('A');
/// graph.add('B');
/// graph.connect(&'A', &'B', 2.5).unwrap();
///
/// let edges = graph.outward_edges(&'A').unwrap();
/// assert_eq!(edges[0].weight(), 2.5);
/// assert_eq!(graph.value(edges[0].target()), Some(&'B'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
    weight: f32,
}

impl Edge {
    pub(crate) fn new(source: VertexId, target: VertexId, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the target vertex.
    #[must_use]
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub(crate) fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

/// Compares two optional edges by endpoint identity.
///
/// Returns false when either side is absent.
#[must_use]
pub fn edge_eq(lhs: Option<&Edge>, rhs: Option<&Edge>) -> bool {
    match (lhs, rhs) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// A vertex holding a value and its two adjacency views.
///
/// `outgoing` lists edges this vertex is the source of. `all` lists every
/// edge touching the vertex in the order it was attached, and is the order
/// used for rendering. Degrees are derived from the two lengths.
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    value: V,
    outgoing: Vec<EdgeId>,
    all: Vec<EdgeId>,
}

impl<V> Vertex<V> {
    pub(crate) fn new(value: V) -> Self {
        Self {
            value,
            outgoing: Vec::new(),
            all: Vec::new(),
        }
    }

    /// Returns the vertex value.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the number of edges entering this vertex.
    #[must_use]
    pub fn in_degree(&self) -> usize {
        self.all.len() - self.outgoing.len()
    }

    /// Returns the number of edges leaving this vertex.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns outgoing edge ids in attachment order.
    #[must_use]
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Returns every attached edge id in attachment order.
    #[must_use]
    pub fn all_edges(&self) -> &[EdgeId] {
        &self.all
    }

    pub(crate) fn attach_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
        self.all.push(edge);
    }

    pub(crate) fn attach_incoming(&mut self, edge: EdgeId) {
        self.all.push(edge);
    }

    pub(crate) fn detach_outgoing(&mut self, edge: EdgeId) {
        if let Some(pos) = self.outgoing.iter().position(|&id| id == edge) {
            self.outgoing.remove(pos);
        }
        self.detach(edge);
    }

    pub(crate) fn detach(&mut self, edge: EdgeId) {
        if let Some(pos) = self.all.iter().position(|&id| id == edge) {
            self.all.remove(pos);
        }
    }
}
