//! Weighted shortest paths and common-ancestor resolution.

use crate::error::Result;
use crate::graph::traversal::bfs_reaches;
use crate::graph::{DirectedGraph, VertexId};

use super::store::KnowledgeGraph;

/// Shortest weighted distance from `source` to `target` over outgoing edges.
///
/// Selection is the O(n²) form of Dijkstra: each round settles the unsettled
/// vertex with the smallest finite tentative distance (lowest id on ties) and
/// relaxes its outgoing edges. The search stops once `target` is settled.
///
/// Weights are used as-is. With negative weights the result is not
/// guaranteed to be the true shortest distance.
pub(crate) fn shortest_distance<V: PartialEq>(
    graph: &DirectedGraph<V>,
    source: VertexId,
    target: VertexId,
) -> Option<f32> {
    let n = graph.size();
    let mut dist = vec![f32::INFINITY; n];
    let mut settled = vec![false; n];
    let mut warned = false;

    dist[source.index()] = 0.0;

    for _ in 0..n {
        let Some(u) = (0..n)
            .filter(|&i| !settled[i] && dist[i].is_finite())
            .min_by(|&a, &b| dist[a].total_cmp(&dist[b]))
        else {
            break;
        };

        settled[u] = true;
        if u == target.index() {
            break;
        }

        for edge in graph.outward_edges_of(VertexId(u)) {
            let weight = edge.weight();
            if weight < 0.0 && !warned {
                tracing::warn!(
                    weight,
                    "negative edge weight in shortest-path search; distance may be inaccurate"
                );
                warned = true;
            }
            let v = edge.target().index();
            let candidate = dist[u] + weight;
            if candidate < dist[v] {
                dist[v] = candidate;
            }
        }
    }

    let d = dist[target.index()];
    d.is_finite().then_some(d)
}

impl KnowledgeGraph {
    /// Shortest weighted distance along relations from `from` to `to`.
    ///
    /// Returns `None` when `to` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if either entity is absent.
    pub fn shortest_distance(&self, from: &str, to: &str) -> Result<Option<f32>> {
        let source = self.entity_id(from)?;
        let target = self.entity_id(to)?;
        Ok(shortest_distance(self.graph(), source, target))
    }

    /// Resolves the closest common ancestor of two entities.
    ///
    /// 1. An entity is its own ancestor.
    /// 2. If one entity reaches the other, it is the answer (`first` is
    ///    checked before `second`).
    /// 3. Otherwise every other entity reaching both is scored by the sum of
    ///    its shortest distances to them. The lowest sum wins; on a tie the
    ///    candidate inserted later wins.
    ///
    /// Sums are not capped: a candidate qualifies at any finite total, so
    /// very heavy paths (above 1e9, say) still produce an ancestor rather
    /// than falling back to "no common ancestor".
    ///
    /// Returns `None` when no entity reaches both.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if either entity is absent.
    pub fn common_ancestor(&self, first: &str, second: &str) -> Result<Option<&str>> {
        let a = self.entity_id(first)?;
        let b = self.entity_id(second)?;
        let graph = self.graph();

        if a == b || bfs_reaches(graph, a, b) {
            return Ok(self.entity_name(a));
        }
        if bfs_reaches(graph, b, a) {
            return Ok(self.entity_name(b));
        }

        let mut best: Option<(VertexId, f32)> = None;
        for candidate in (0..self.len()).map(VertexId) {
            if candidate == a || candidate == b {
                continue;
            }
            if !bfs_reaches(graph, candidate, a) || !bfs_reaches(graph, candidate, b) {
                continue;
            }
            let (Some(to_a), Some(to_b)) = (
                shortest_distance(graph, candidate, a),
                shortest_distance(graph, candidate, b),
            ) else {
                continue;
            };

            let total = to_a + to_b;
            if best.is_none_or(|(_, best_total)| total <= best_total) {
                best = Some((candidate, total));
            }
        }

        Ok(best.and_then(|(id, _)| self.entity_name(id)))
    }

    /// Like [`common_ancestor`](Self::common_ancestor), but returns the
    /// configured sentinel (`"No common ancestor"` by default) when there is
    /// none.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if either entity is absent.
    pub fn find_common_ancestors(&self, first: &str, second: &str) -> Result<String> {
        Ok(self
            .common_ancestor(first, second)?
            .map_or_else(|| self.config().no_common_ancestor.clone(), str::to_owned))
    }
}
