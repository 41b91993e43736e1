//! String-keyed knowledge graph on top of [`DirectedGraph`].

use std::fmt;

use indexmap::IndexSet;

use crate::config::KnowledgeGraphConfig;
use crate::error::{Error, Result};
use crate::graph::traversal::{bfs_order, bfs_reaches, bounded_bfs, dfs_order};
use crate::graph::{DirectedGraph, TraversalConfig, VertexId};

/// A directed, weighted graph of named entities.
///
/// Entities are kept in insertion order. Position `i` in the entity index is
/// always vertex `i` of the underlying graph, so both views hold the same set
/// of names at all times.
///
/// # Example
///
/// ```rust
/// use kgraph_core::KnowledgeGraph;
///
/// let mut kg = KnowledgeGraph::new();
/// for name in ["A", "B", "C"] {
///     kg.add_entity(name).unwrap();
/// }
/// kg.add_relation("A", "B").unwrap();
/// kg.add_relation("B", "C").unwrap();
///
/// assert!(kg.is_reachable("A", "C").unwrap());
/// assert!(!kg.is_reachable("C", "A").unwrap());
/// assert_eq!(kg.related_entities("A", 1).unwrap(), vec!["B"]);
/// ```
#[derive(Debug)]
pub struct KnowledgeGraph {
    graph: DirectedGraph<String>,
    entities: IndexSet<String>,
    config: KnowledgeGraphConfig,
}

impl Default for KnowledgeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeGraph {
    /// Creates an empty knowledge graph with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(KnowledgeGraphConfig::default())
    }

    /// Creates an empty knowledge graph with the given configuration.
    #[must_use]
    pub fn with_config(config: KnowledgeGraphConfig) -> Self {
        Self {
            graph: DirectedGraph::new(),
            entities: IndexSet::new(),
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &KnowledgeGraphConfig {
        &self.config
    }

    /// Returns the underlying graph.
    #[must_use]
    pub fn graph(&self) -> &DirectedGraph<String> {
        &self.graph
    }

    pub(crate) fn entity_id(&self, name: &str) -> Result<VertexId> {
        self.entities
            .get_index_of(name)
            .map(VertexId)
            .ok_or(Error::EntityNotFound)
    }

    pub(crate) fn entity_name(&self, id: VertexId) -> Option<&str> {
        self.entities.get_index(id.index()).map(String::as_str)
    }

    fn names(&self, ids: impl IntoIterator<Item = VertexId>) -> Vec<String> {
        ids.into_iter()
            .filter_map(|id| self.entity_name(id))
            .map(str::to_owned)
            .collect()
    }

    // ── Entities & relations ───────────────────────────────────────────

    /// Adds an entity.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityExists` if the entity is already present.
    pub fn add_entity(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.entities.contains(&name) {
            return Err(Error::EntityExists);
        }
        let id = self.graph.add(name.clone());
        debug_assert_eq!(id.index(), self.entities.len());
        tracing::debug!(entity = %name, "entity added");
        self.entities.insert(name);
        Ok(())
    }

    /// Adds a relation weighted with the configured default weight.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if either endpoint is absent.
    pub fn add_relation(&mut self, from: &str, to: &str) -> Result<()> {
        self.add_weighted_relation(from, to, self.config.default_relation_weight)
    }

    /// Adds a relation, or reweights the existing one.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if either endpoint is absent.
    pub fn add_weighted_relation(&mut self, from: &str, to: &str, weight: f32) -> Result<()> {
        let source = self.entity_id(from)?;
        let target = self.entity_id(to)?;
        self.graph.connect_ids(source, target, weight);
        tracing::debug!(from, to, weight, "relation added");
        Ok(())
    }

    /// Removes the relation `from → to`. A missing relation is not an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if either endpoint is absent.
    pub fn remove_relation(&mut self, from: &str, to: &str) -> Result<()> {
        let source = self.entity_id(from)?;
        let target = self.entity_id(to)?;
        self.graph.remove_to(source, target);
        Ok(())
    }

    /// Returns the weight of the relation `from → to`.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if either endpoint is absent and
    /// `Error::EdgeNotFound` if there is no such relation.
    pub fn relation_weight(&self, from: &str, to: &str) -> Result<f32> {
        let source = self.entity_id(from)?;
        let target = self.entity_id(to)?;
        self.graph
            .edge_between(source, target)
            .map(|edge| edge.weight())
            .ok_or(Error::EdgeNotFound)
    }

    /// Returns all entities in insertion order.
    #[must_use]
    pub fn all_entities(&self) -> Vec<String> {
        self.entities.iter().cloned().collect()
    }

    /// Returns true if the entity exists.
    #[must_use]
    pub fn contains_entity(&self, name: &str) -> bool {
        self.entities.contains(name)
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if there are no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Removes every entity and relation.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.entities.clear();
        tracing::debug!("knowledge graph cleared");
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Returns the direct targets of `entity`'s relations, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if the entity is absent.
    pub fn neighbors(&self, entity: &str) -> Result<Vec<String>> {
        let id = self.entity_id(entity)?;
        Ok(self.names(
            self.graph
                .outward_edges_of(id)
                .into_iter()
                .map(|edge| edge.target()),
        ))
    }

    /// Breadth-first traversal rendered with full vertex detail.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if the entity is absent.
    pub fn bfs(&self, start: &str) -> Result<String> {
        let id = self.entity_id(start)?;
        Ok(self.graph.render_traversal(&bfs_order(&self.graph, id)))
    }

    /// Depth-first traversal rendered with full vertex detail.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if the entity is absent.
    pub fn dfs(&self, start: &str) -> Result<String> {
        let id = self.entity_id(start)?;
        Ok(self.graph.render_traversal(&dfs_order(&self.graph, id)))
    }

    /// Returns true if `to` can be reached from `from` along relations.
    ///
    /// Every entity reaches itself.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if either entity is absent.
    pub fn is_reachable(&self, from: &str, to: &str) -> Result<bool> {
        let source = self.entity_id(from)?;
        let target = self.entity_id(to)?;
        Ok(bfs_reaches(&self.graph, source, target))
    }

    /// Returns entities within `depth` hops of `entity`, in BFS discovery
    /// order, excluding `entity` itself.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if the entity is absent.
    pub fn related_entities(&self, entity: &str, depth: usize) -> Result<Vec<String>> {
        let id = self.entity_id(entity)?;
        let config = TraversalConfig::default().with_max_depth(depth);
        Ok(self.names(
            bounded_bfs(&self.graph, id, &config)
                .into_iter()
                .map(|step| step.vertex),
        ))
    }

    /// Like [`related_entities`](Self::related_entities), using the
    /// configured default depth (unbounded unless configured).
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` if the entity is absent.
    pub fn all_related_entities(&self, entity: &str) -> Result<Vec<String>> {
        let depth = self.config.traversal.max_depth.unwrap_or(usize::MAX);
        self.related_entities(entity, depth)
    }
}

impl fmt::Display for KnowledgeGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}
