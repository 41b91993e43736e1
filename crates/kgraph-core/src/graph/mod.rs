//! Generic in-memory directed graph.
//!
//! Provides the vertex/edge model, an arena-backed [`DirectedGraph`] with
//! dual adjacency views, deterministic rendering, and BFS/DFS traversal.
//!
//! # Example
//!
//! ```rust
//! use kgraph_core::graph::{Capabilities, DirectedGraph};
//!
//! let mut graph = DirectedGraph::with_capabilities(
//!     Capabilities::new().with_display(|v: &char| v.to_string()),
//! );
//! for v in ['A', 'B', 'C'] {
//!     graph.add(v);
//! }
//! graph.connect(&'A', &'B', 1.0).unwrap();
//! graph.connect(&'A', &'C', 1.0).unwrap();
//!
//! assert_eq!(graph.bfs(&'A').unwrap(), "[A, B, C]");
//! ```

mod capability;
mod directed;
mod render;
pub mod traversal;
mod types;

#[cfg(test)]
mod capability_tests;

pub use capability::{Capabilities, DisplayFn, EqualityFn};
pub use directed::DirectedGraph;
pub use render::{EdgeDisplay, VertexDisplay};
pub use traversal::{GraphTraversal, TraversalConfig, TraversalStep};
pub use types::{edge_eq, Edge, EdgeId, Vertex, VertexId};
