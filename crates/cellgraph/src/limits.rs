//! Format constants and decoder limits.
//!
//! The dump header is untrusted input; [`MAX_GRID_CELLS`] bounds the vertex
//! allocation a header can trigger before any of the body is read.

/// Sentinel closing one node's adjacency list in the dump body.
pub const LIST_END: i32 = -1;

/// Size in bytes of the dump header (`width` and `height`).
pub const HEADER_BYTES: usize = 8;

/// Maximum interior cell count the decoder will allocate vertices for.
///
/// 16M nodes; a full automaton grid of roughly 4096x4096.
pub const MAX_GRID_CELLS: u64 = 1 << 24;
