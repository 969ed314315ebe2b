//! Error types for dump decoding and graph export.

use thiserror::Error;

/// Error during binary dump decoding.
///
/// Decoding never yields a partial graph: any of these conditions aborts the
/// decode and the caller gets the error instead of a graph value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The stream ended before the required number of sentinels was read.
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    /// A dimension below 2 leaves no interior ring to map nodes onto.
    #[error("degenerate grid dimensions {width}x{height} (both must be >= 2)")]
    DegenerateGrid { width: u32, height: u32 },

    /// The header declares more interior cells than the decoder will
    /// allocate vertices for.
    #[error("grid interior of {cells} cells exceeds maximum {max}")]
    GridTooLarge { cells: u64, max: u64 },

    /// An adjacency value does not address any cell of the bordered grid.
    #[error("coordinate {coord} outside the {cells}-cell grid")]
    CoordOutsideGrid { coord: i32, cells: u64 },

    /// An adjacency value addresses a cell on the border ring, which has no
    /// node index.
    #[error("coordinate {coord} on the border ring (row {row}, column {col})")]
    CoordOnBorder { coord: i32, row: u32, col: u32 },
}

/// Error during graph export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination stream or file could not be opened or written.
    #[error("export I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
