//! Text encodings of a decoded graph.
//!
//! Two formats are supported: Trivial Graph Format for plain vertex/edge
//! lists, and DOT for external visualization tooling that wants per-vertex
//! and per-edge attributes.

pub mod dot;
pub mod tgf;

pub use dot::{write_dot, write_dot_file, write_dot_temp_file, DotStyle};
pub use tgf::{tgf_string, write_tgf};
