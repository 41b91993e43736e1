//! Textual rendering of edges, vertices and whole graphs.
//!
//! Formats:
//!
//! - edge: `(src, dst, 8.000000)`
//! - vertex: `(value, in_degree, out_degree, [edge, ...])`
//! - graph: `[vertex, ...]`
//!
//! Weights always use six fixed-point decimals. Values go through the
//! display capability when one was supplied, otherwise through `Display`.
//!
//! Rendering and traversal output require `V: Display` even when a display
//! capability is set. Value types without `Display` need a newtype wrapper.

use std::fmt;

use super::directed::DirectedGraph;
use super::types::{Edge, VertexId};

/// Renders an [`Edge`] against the graph that owns it.
pub struct EdgeDisplay<'a, V> {
    graph: &'a DirectedGraph<V>,
    edge: &'a Edge,
}

/// Renders a vertex with its degrees and full edge list.
pub struct VertexDisplay<'a, V> {
    graph: &'a DirectedGraph<V>,
    id: VertexId,
}

impl<V: PartialEq + fmt::Display> DirectedGraph<V> {
    /// Returns a displayable view of `edge`.
    #[must_use]
    pub fn display_edge<'a>(&'a self, edge: &'a Edge) -> EdgeDisplay<'a, V> {
        EdgeDisplay { graph: self, edge }
    }

    /// Returns a displayable view of the vertex `id`.
    #[must_use]
    pub fn display_vertex(&self, id: VertexId) -> VertexDisplay<'_, V> {
        VertexDisplay { graph: self, id }
    }

    /// Renders the value held by `id`.
    fn write_value(&self, f: &mut fmt::Formatter<'_>, id: VertexId) -> fmt::Result {
        let Some(value) = self.value(id) else {
            return Ok(());
        };
        match self.capabilities().display(value) {
            Some(text) => f.write_str(&text),
            None => write!(f, "{value}"),
        }
    }

    /// Label used for a vertex in traversal output.
    ///
    /// The display capability wins; without one the full vertex rendering is
    /// used, which differs from how values appear inside edges.
    pub(crate) fn traversal_label(&self, id: VertexId) -> String {
        self.value(id)
            .and_then(|value| self.capabilities().display(value))
            .unwrap_or_else(|| self.display_vertex(id).to_string())
    }
}

/// Writes `[a, b, ...]`.
pub(crate) fn write_list<I, T>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

impl<V: PartialEq + fmt::Display> fmt::Display for EdgeDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.graph.write_value(f, self.edge.source())?;
        f.write_str(", ")?;
        self.graph.write_value(f, self.edge.target())?;
        write!(f, ", {:.6})", self.edge.weight())
    }
}

impl<V: PartialEq + fmt::Display> fmt::Display for VertexDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(vertex) = self.graph.vertex(self.id) else {
            return Ok(());
        };
        f.write_str("(")?;
        self.graph.write_value(f, self.id)?;
        write!(f, ", {}, {}, ", vertex.in_degree(), vertex.out_degree())?;
        write_list(
            f,
            vertex
                .all_edges()
                .iter()
                .filter_map(|&edge| self.graph.edge(edge))
                .map(|edge| self.graph.display_edge(edge)),
        )?;
        f.write_str(")")
    }
}

impl<V: PartialEq + fmt::Display> fmt::Display for DirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.iter().map(|(id, _)| self.display_vertex(id)))
    }
}
