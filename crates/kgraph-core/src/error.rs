//! Error types for graph and knowledge-graph operations.
//!
//! Every variant is a bare kind: callers branch on the variant, never on a
//! payload. Configuration failures live in [`crate::config::ConfigError`].

use thiserror::Error;

/// Errors raised by [`DirectedGraph`](crate::graph::DirectedGraph) and
/// [`KnowledgeGraph`](crate::knowledge::KnowledgeGraph).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A referenced vertex value has no corresponding vertex.
    #[error("Vertex not found")]
    VertexNotFound,

    /// The queried edge does not exist.
    #[error("Edge not found")]
    EdgeNotFound,

    /// A referenced entity is not in the knowledge graph.
    #[error("Entity not found")]
    EntityNotFound,

    /// The entity is already in the knowledge graph.
    #[error("Entity already exists")]
    EntityExists,
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
