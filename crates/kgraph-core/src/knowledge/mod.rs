//! Knowledge graph: named entities linked by weighted, directed relations.
//!
//! Built on [`DirectedGraph<String>`](crate::graph::DirectedGraph). Adds
//! entity bookkeeping in insertion order, reachability, bounded relation
//! expansion and weighted common-ancestor resolution.

mod ancestry;
mod snapshot;
mod store;


pub use snapshot::{GraphSnapshot, RelationRecord};
pub use store::KnowledgeGraph;
