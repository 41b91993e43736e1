//! Graph traversal algorithms (BFS/DFS) over outgoing edges.
//!
//! The algorithms are generic over the [`GraphTraversal`] trait so any store
//! exposing ordered successors can reuse them. Only outgoing edges are
//! followed; incoming edges are never back-traced.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, Result};

use super::directed::DirectedGraph;
use super::types::VertexId;

/// Ordered successor access needed by the traversal algorithms.
///
/// Vertex ids must be dense: every id handed out is below `vertex_count()`.
pub trait GraphTraversal {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the targets of the outgoing edges of `id`, in attachment order.
    fn successors(&self, id: VertexId) -> Vec<VertexId>;
}

impl<V: PartialEq> GraphTraversal for DirectedGraph<V> {
    fn vertex_count(&self) -> usize {
        self.size()
    }

    fn successors(&self, id: VertexId) -> Vec<VertexId> {
        self.outward_edges_of(id)
            .into_iter()
            .map(|edge| edge.target())
            .collect()
    }
}

/// A vertex reached during a bounded traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalStep {
    /// The vertex reached at this step.
    pub vertex: VertexId,
    /// Number of hops from the source.
    pub depth: usize,
}

/// Configuration for bounded traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Maximum traversal depth; vertices at this depth are reported but not
    /// expanded.
    pub max_depth: usize,
    /// Maximum number of results.
    pub limit: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            limit: usize::MAX,
        }
    }
}

impl TraversalConfig {
    /// Creates a config with the given max depth and limit.
    #[must_use]
    pub fn new(max_depth: usize, limit: usize) -> Self {
        Self { max_depth, limit }
    }

    /// Sets the maximum depth (builder pattern).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the result limit (builder pattern).
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Breadth-first visitation order starting at `start`.
///
/// Vertices are marked when enqueued, so each is queued at most once.
/// Returns an empty order when `start` is not a vertex of `graph`.
#[must_use]
pub fn bfs_order<G: GraphTraversal>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let mut order = Vec::new();
    if start.index() >= graph.vertex_count() {
        return order;
    }
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for next in graph.successors(current) {
            if !visited[next.index()] {
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    order
}

/// Depth-first visitation order starting at `start`.
///
/// Successors are pushed in reverse so they pop in adjacency order. A vertex
/// may sit on the stack twice; the second pop is discarded. Returns an empty
/// order when `start` is not a vertex of `graph`.
#[must_use]
pub fn dfs_order<G: GraphTraversal>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let mut order = Vec::new();
    if start.index() >= graph.vertex_count() {
        return order;
    }
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;
        order.push(current);

        for next in graph.successors(current).into_iter().rev() {
            if !visited[next.index()] {
                stack.push(next);
            }
        }
    }

    order
}

/// Returns true if `goal` is dequeued during a BFS from `start`.
///
/// Reflexive: the start vertex is dequeued first. False when either id is
/// not a vertex of `graph`.
#[must_use]
pub fn bfs_reaches<G: GraphTraversal>(graph: &G, start: VertexId, goal: VertexId) -> bool {
    let count = graph.vertex_count();
    if start.index() >= count || goal.index() >= count {
        return false;
    }
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return true;
        }
        for next in graph.successors(current) {
            if !visited[next.index()] {
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
    }

    false
}

/// BFS bounded by `config.max_depth` hops and `config.limit` results.
///
/// Reports every vertex at distance `1..=max_depth` once, at first
/// discovery. The source itself is never reported, and nothing is when it
/// is not a vertex of `graph`.
#[must_use]
pub fn bounded_bfs<G: GraphTraversal>(
    graph: &G,
    source: VertexId,
    config: &TraversalConfig,
) -> Vec<TraversalStep> {
    let mut results = Vec::new();
    if source.index() >= graph.vertex_count() {
        return results;
    }
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();

    visited[source.index()] = true;
    queue.push_back((source, 0usize));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= config.max_depth {
            continue;
        }

        for next in graph.successors(current) {
            if results.len() >= config.limit {
                return results;
            }
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            results.push(TraversalStep {
                vertex: next,
                depth: depth + 1,
            });
            queue.push_back((next, depth + 1));
        }
    }

    results
}

impl<V: PartialEq + fmt::Display> DirectedGraph<V> {
    /// Breadth-first traversal from `start`, rendered as `[label, ...]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if `start` is absent.
    pub fn bfs(&self, start: &V) -> Result<String> {
        let id = self.find(start).ok_or(Error::VertexNotFound)?;
        tracing::trace!(start = %id, "bfs");
        Ok(self.render_traversal(&bfs_order(self, id)))
    }

    /// Depth-first traversal from `start`, rendered as `[label, ...]`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if `start` is absent.
    pub fn dfs(&self, start: &V) -> Result<String> {
        let id = self.find(start).ok_or(Error::VertexNotFound)?;
        tracing::trace!(start = %id, "dfs");
        Ok(self.render_traversal(&dfs_order(self, id)))
    }

    pub(crate) fn render_traversal(&self, order: &[VertexId]) -> String {
        let labels: Vec<String> = order.iter().map(|&id| self.traversal_label(id)).collect();
        format!("[{}]", labels.join(", "))
    }
}
