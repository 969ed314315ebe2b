//! Bordered-grid dimensions and coordinate mapping.
//!
//! The automaton engine addresses cells by a linear index over the *full*
//! grid, border ring included ("internal" coordinates). Graph nodes are the
//! interior cells only, indexed in row-major interior scan order. [`GridDims`]
//! owns the bijection between the two systems.

use crate::error::DecodeError;
use crate::model::coord::Coord;
use crate::model::graph::NodeId;

/// Wire coordinate type for grid dimensions.
pub type Cell = u32;

/// Cell-count type paired with [`Cell`] by the widening policy.
pub type CellCount = <Cell as Coord>::Area;

/// Dimensions of a full automaton grid, border ring included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    width: Cell,
    height: Cell,
}

impl GridDims {
    /// Creates grid dimensions, rejecting degenerate extents.
    ///
    /// Both dimensions must be at least 2 so that the interior extent
    /// `dimension - 2` cannot underflow.
    pub fn new(width: Cell, height: Cell) -> Result<Self, DecodeError> {
        if width < 2 || height < 2 {
            return Err(DecodeError::DegenerateGrid { width, height });
        }
        Ok(Self { width, height })
    }

    /// Full grid width, border included.
    pub fn width(&self) -> Cell {
        self.width
    }

    /// Full grid height, border included.
    pub fn height(&self) -> Cell {
        self.height
    }

    /// Interior width (cells per interior row).
    pub fn interior_width(&self) -> Cell {
        self.width - 2
    }

    /// Interior height (number of interior rows).
    pub fn interior_height(&self) -> Cell {
        self.height - 2
    }

    /// Total cell count of the full grid.
    pub fn cells(&self) -> CellCount {
        self.width.area() * self.height.area()
    }

    /// Number of interior cells, i.e. graph nodes.
    pub fn node_cells(&self) -> CellCount {
        self.interior_width().area() * self.interior_height().area()
    }

    /// Maps a full-grid linear coordinate to its interior node index.
    ///
    /// Coordinates outside the grid and coordinates on the border ring have
    /// no node index and are rejected; a misleading index is never returned.
    pub fn node_index(&self, coord: i32) -> Result<NodeId, DecodeError> {
        if coord < 0 || coord.unsigned_abs() as CellCount >= self.cells() {
            return Err(DecodeError::CoordOutsideGrid {
                coord,
                cells: self.cells(),
            });
        }
        let linear = coord as Cell;
        let row = linear / self.width;
        let col = linear % self.width;
        if row == 0 || row == self.height - 1 || col == 0 || col == self.width - 1 {
            return Err(DecodeError::CoordOnBorder { coord, row, col });
        }
        let index = (row - 1).area() * self.interior_width().area() + (col - 1).area();
        Ok(index as NodeId)
    }

    /// Full-grid `(row, column)` position of an interior node index.
    ///
    /// Returns `None` for indices outside `[0, node_cells())`.
    pub fn grid_pos(&self, node: NodeId) -> Option<(Cell, Cell)> {
        if (node as CellCount) >= self.node_cells() {
            return None;
        }
        let interior_width = self.interior_width().area();
        let row = (node as CellCount / interior_width) as Cell + 1;
        let col = (node as CellCount % interior_width) as Cell + 1;
        Some((row, col))
    }

    /// Full-grid linear coordinate of an interior node index.
    ///
    /// Inverse of [`GridDims::node_index`] for every interior cell.
    pub fn internal_coord(&self, node: NodeId) -> Option<CellCount> {
        let (row, col) = self.grid_pos(node)?;
        Some(row.area() * self.width.area() + col.area())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_dims_rejected() {
        for (w, h) in [(0, 4), (1, 4), (4, 0), (4, 1), (1, 1)] {
            assert!(matches!(
                GridDims::new(w, h),
                Err(DecodeError::DegenerateGrid { .. })
            ));
        }
    }

    #[test]
    fn test_minimal_dims_have_no_nodes() {
        let dims = GridDims::new(2, 2).unwrap();
        assert_eq!(dims.node_cells(), 0);
        assert_eq!(dims.grid_pos(0), None);
    }

    #[test]
    fn test_interior_mapping_4x4() {
        // 4x4 grid, 2x2 interior: rows 1-2, columns 1-2.
        let dims = GridDims::new(4, 4).unwrap();
        assert_eq!(dims.node_cells(), 4);
        assert_eq!(dims.node_index(5).unwrap(), 0);
        assert_eq!(dims.node_index(6).unwrap(), 1);
        assert_eq!(dims.node_index(9).unwrap(), 2);
        assert_eq!(dims.node_index(10).unwrap(), 3);
    }

    #[test]
    fn test_border_coords_rejected() {
        let dims = GridDims::new(4, 4).unwrap();
        // Top row, bottom row, left and right columns.
        for coord in [0, 1, 2, 3, 12, 13, 14, 15, 4, 8, 7, 11] {
            assert!(matches!(
                dims.node_index(coord),
                Err(DecodeError::CoordOnBorder { .. })
            ));
        }
    }

    #[test]
    fn test_out_of_grid_coords_rejected() {
        let dims = GridDims::new(4, 4).unwrap();
        for coord in [-2, -100, 16, 17, i32::MAX] {
            assert!(matches!(
                dims.node_index(coord),
                Err(DecodeError::CoordOutsideGrid { .. })
            ));
        }
    }

    #[test]
    fn test_mapping_round_trip() {
        let dims = GridDims::new(7, 5).unwrap();
        for node in 0..dims.node_cells() as NodeId {
            let coord = dims.internal_coord(node).unwrap();
            assert_eq!(dims.node_index(coord as i32).unwrap(), node);
        }
        assert_eq!(dims.internal_coord(dims.node_cells() as NodeId), None);
    }

    #[test]
    fn test_grid_pos_row_major() {
        let dims = GridDims::new(5, 4).unwrap();
        // 3x2 interior: nodes 0-2 on row 1, nodes 3-5 on row 2.
        assert_eq!(dims.grid_pos(0), Some((1, 1)));
        assert_eq!(dims.grid_pos(2), Some((1, 3)));
        assert_eq!(dims.grid_pos(3), Some((2, 1)));
        assert_eq!(dims.grid_pos(5), Some((2, 3)));
        assert_eq!(dims.grid_pos(6), None);
    }
}
