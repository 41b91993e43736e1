//! # kgraph core
//!
//! A directed-graph engine with a knowledge-graph layer on top.
//!
//! - [`graph`]: a generic directed graph with weighted edges, O(1) degrees,
//!   insertion-ordered rendering and BFS/DFS traversal. Vertex equality and
//!   display are injected through [`graph::Capabilities`].
//! - [`knowledge`]: a string-keyed [`KnowledgeGraph`] adding reachability,
//!   depth-bounded relation expansion and weighted common-ancestor lookup.
//!
//! ## Quick Start
//!
//! ```rust
//! use kgraph_core::KnowledgeGraph;
//!
//! fn main() -> kgraph_core::Result<()> {
//!     let mut kg = KnowledgeGraph::new();
//!     for name in ["root", "left", "right"] {
//!         kg.add_entity(name)?;
//!     }
//!     kg.add_relation("root", "left")?;
//!     kg.add_relation("root", "right")?;
//!
//!     assert_eq!(kg.find_common_ancestors("left", "right")?, "root");
//!     assert_eq!(kg.neighbors("root")?, vec!["left", "right"]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod graph;
pub mod knowledge;

pub use config::{ConfigError, KnowledgeGraphConfig, NO_COMMON_ANCESTOR};
pub use error::{Error, Result};
pub use graph::{Capabilities, DirectedGraph, Edge, Vertex, VertexId};
pub use knowledge::{GraphSnapshot, KnowledgeGraph, RelationRecord};
