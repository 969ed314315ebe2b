//! Grid dump decoding.
//!
//! A dump is the automaton engine's serialized cell-adjacency relation:
//!
//! ```text
//! u32 width       full grid width, border ring included
//! u32 height      full grid height, border ring included
//! i32 ...         per node, ascending: adjacency coordinates, then -1
//! ```
//!
//! The body carries exactly `(width-2)*(height-2)` sentinels; reading stops
//! after the last one and trailing stream content is not interpreted.

use crate::codec::primitives::Reader;
use crate::error::DecodeError;
use crate::limits::{HEADER_BYTES, LIST_END, MAX_GRID_CELLS};
use crate::model::{DirectedGraph, GridDims, NodeId};

/// Decodes a grid adjacency dump into a directed graph.
///
/// Convenience over [`decode_graph_with_dims`] for callers that do not need
/// the grid dimensions afterwards.
pub fn decode_graph<G: DirectedGraph + Default>(input: &[u8]) -> Result<G, DecodeError> {
    decode_graph_with_dims(input).map(|(_, graph)| graph)
}

/// Decodes a grid adjacency dump, returning the dimensions alongside the
/// graph.
///
/// The graph gets one node per interior cell and one directed edge per valid
/// adjacency coordinate in the body. Adjacency coordinates that map back to
/// the node currently being read are dropped: a cell listing itself is an
/// artifact of the bordered addressing, not an adjacency. Multi-edges are
/// kept as-is.
///
/// # Errors
///
/// - [`DecodeError::DegenerateGrid`] if either dimension is below 2,
///   rejected before any allocation.
/// - [`DecodeError::GridTooLarge`] if the header declares more interior
///   cells than [`MAX_GRID_CELLS`].
/// - [`DecodeError::CoordOutsideGrid`] / [`DecodeError::CoordOnBorder`] for
///   adjacency values with no node index.
/// - [`DecodeError::UnexpectedEof`] if the stream ends before the last
///   sentinel. No partially built graph is ever returned.
pub fn decode_graph_with_dims<G: DirectedGraph + Default>(
    input: &[u8],
) -> Result<(GridDims, G), DecodeError> {
    if input.len() < HEADER_BYTES {
        return Err(DecodeError::UnexpectedEof { context: "header" });
    }
    let mut reader = Reader::new(input);

    let width = reader.read_u32("width")?;
    let height = reader.read_u32("height")?;
    let dims = GridDims::new(width, height)?;

    let node_cells = dims.node_cells();
    if node_cells > MAX_GRID_CELLS {
        return Err(DecodeError::GridTooLarge {
            cells: node_cells,
            max: MAX_GRID_CELLS,
        });
    }
    let num_nodes = node_cells as usize;

    let mut graph = G::default();
    for _ in 0..num_nodes {
        graph.add_node();
    }

    let mut current: NodeId = 0;
    while current < num_nodes {
        let value = reader.read_i32("adjacency list")?;
        if value == LIST_END {
            current += 1;
            continue;
        }
        let target = dims.node_index(value)?;
        if target == current {
            continue;
        }
        graph.add_edge(current, target);
    }

    Ok((dims, graph))
}
