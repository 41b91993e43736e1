//! Serializable snapshots of a knowledge graph.
//!
//! A snapshot lists entities in insertion order and relations grouped by
//! source (entity order), each group in attachment order. Rebuilding from a
//! snapshot replays those insertions, so entity order and every entity's
//! outgoing order survive the round trip.

use serde::{Deserialize, Serialize};

use crate::config::KnowledgeGraphConfig;
use crate::error::Result;

use super::store::KnowledgeGraph;

/// A single weighted relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRecord {
    /// Source entity.
    pub from: String,
    /// Target entity.
    pub to: String,
    /// Relation weight.
    pub weight: f32,
}

/// Entities and relations of a knowledge graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Entity names in insertion order.
    pub entities: Vec<String>,
    /// Relations grouped by source.
    pub relations: Vec<RelationRecord>,
}

impl KnowledgeGraph {
    /// Captures the current entities and relations.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        let graph = self.graph();
        let relations = graph
            .iter()
            .flat_map(|(id, vertex)| {
                graph.outward_edges_of(id).into_iter().map(move |edge| {
                    let to = graph.value(edge.target()).cloned().unwrap_or_default();
                    RelationRecord {
                        from: vertex.value().clone(),
                        to,
                        weight: edge.weight(),
                    }
                })
            })
            .collect();

        GraphSnapshot {
            entities: self.all_entities(),
            relations,
        }
    }

    /// Rebuilds a knowledge graph from a snapshot with default configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityExists` on duplicate entities and
    /// `Error::EntityNotFound` when a relation names an unknown entity.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self> {
        Self::from_snapshot_with_config(snapshot, KnowledgeGraphConfig::default())
    }

    /// Rebuilds a knowledge graph from a snapshot with the given configuration.
    ///
    /// # Errors
    ///
    /// Same as [`from_snapshot`](Self::from_snapshot).
    pub fn from_snapshot_with_config(
        snapshot: &GraphSnapshot,
        config: KnowledgeGraphConfig,
    ) -> Result<Self> {
        let mut kg = Self::with_config(config);
        for entity in &snapshot.entities {
            kg.add_entity(entity.as_str())?;
        }
        for relation in &snapshot.relations {
            kg.add_weighted_relation(&relation.from, &relation.to, relation.weight)?;
        }
        Ok(kg)
    }
}
