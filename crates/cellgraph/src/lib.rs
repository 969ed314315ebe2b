//! cellgraph: decoder and text exporters for cellular-automaton grid
//! adjacency dumps.
//!
//! An automaton engine periodically dumps its cell-adjacency relation as a
//! compact binary stream. This crate decodes such a dump into an in-memory
//! directed graph (nodes are the grid's interior cells) and serializes that
//! graph into text interchange formats for external tooling.
//!
//! # Overview
//!
//! - **Decode**: a dump stream becomes a [`DirectedGraph`] value, with the
//!   engine's bordered-grid addressing remapped to dense interior node
//!   indices.
//! - **Encode**: a populated graph is written out as Trivial Graph Format or
//!   as an attributed DOT digraph for visualization tools.
//!
//! The graph value is the sole handoff between the two steps; decode fully
//! completes before any encode begins, and a decoded graph is read-only.
//!
//! # Quick Start
//!
//! ```rust
//! use cellgraph::{decode_graph, tgf_string, AdjacencyGraph, DirectedGraph};
//!
//! // 4x4 bordered grid: 2x2 interior. Node 0 is adjacent to cell 6
//! // (interior node 1); the other nodes have empty lists.
//! let mut dump = Vec::new();
//! dump.extend_from_slice(&4u32.to_ne_bytes());
//! dump.extend_from_slice(&4u32.to_ne_bytes());
//! for value in [6i32, -1, -1, -1, -1] {
//!     dump.extend_from_slice(&value.to_ne_bytes());
//! }
//!
//! let graph: AdjacencyGraph = decode_graph(&dump).unwrap();
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(tgf_string(&graph), "1 v_1\n2 v_2\n3 v_3\n4 v_4\n#\n1 2\n");
//! ```
//!
//! # Modules
//!
//! - [`model`]: graph containers, grid dimensions, coordinate mapping
//! - [`codec`]: binary dump decoding
//! - [`export`]: TGF and DOT text encoding
//! - [`error`]: error types
//! - [`limits`]: format constants and decoder bounds
//!
//! # Wire Format
//!
//! A dump is two host-endian `u32` header fields (`width`, `height`, full
//! bordered dimensions) followed by `i32` adjacency coordinates, one
//! `-1`-terminated list per interior node in ascending node order. Byte
//! order is the producing engine's native order; the dump is a same-host
//! handoff, not a portable interchange format.
//!
//! # Security
//!
//! The decoder safely handles untrusted input: vertex allocation is bounded
//! by [`limits::MAX_GRID_CELLS`] before the body is read, truncated streams
//! fail with a descriptive error instead of yielding a partial graph, and
//! coordinates outside the interior are rejected rather than remapped.

pub mod codec;
pub mod error;
pub mod export;
pub mod limits;
pub mod model;

// Re-export commonly used items at crate root
pub use codec::{decode_graph, decode_graph_with_dims, Reader};
pub use error::{DecodeError, ExportError};
pub use export::{tgf_string, write_dot, write_dot_file, write_dot_temp_file, write_tgf, DotStyle};
pub use model::{
    AdjacencyGraph, Cell, CellCount, Coord, DirectedGraph, EdgeListGraph, GridDims, NodeId,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
