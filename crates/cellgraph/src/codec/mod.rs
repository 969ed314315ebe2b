//! Binary decoding for grid adjacency dumps.
//!
//! This module implements the read side of the automaton engine's dump
//! layout; the engine itself is the only producer of that format.

pub mod decode;
pub mod primitives;

pub use decode::{decode_graph, decode_graph_with_dims};
pub use primitives::Reader;
