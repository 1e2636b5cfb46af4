//! The state grid: a fixed-size, row-major array of cell states.

use crate::error::GridError;
use crate::id::Coord;
use crate::state::CellState;
use smallvec::smallvec;

/// Dimensions of a lattice, fixed for the lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dims {
    /// A 1D line of `len` cells, coordinate `[i]`.
    Line {
        /// Number of cells.
        len: u32,
    },
    /// A 2D plane of `rows * cols` cells, coordinate `[row, col]`.
    Plane {
        /// Number of rows.
        rows: u32,
        /// Number of columns.
        cols: u32,
    },
}

impl Dims {
    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        match *self {
            Self::Line { len } => len as usize,
            Self::Plane { rows, cols } => rows as usize * cols as usize,
        }
    }

    /// Number of spatial dimensions (1 or 2).
    pub fn ndim(&self) -> usize {
        match self {
            Self::Line { .. } => 1,
            Self::Plane { .. } => 2,
        }
    }

    /// Row count. A line is a single row.
    pub fn rows(&self) -> u32 {
        match *self {
            Self::Line { .. } => 1,
            Self::Plane { rows, .. } => rows,
        }
    }

    /// Column count. A line's length is its column count.
    pub fn cols(&self) -> u32 {
        match *self {
            Self::Line { len } => len,
            Self::Plane { cols, .. } => cols,
        }
    }

    /// Flat row-major index of `coord`, or `None` if out of range or of
    /// the wrong dimensionality.
    pub fn index_of(&self, coord: &[i32]) -> Option<usize> {
        match (*self, coord) {
            (Self::Line { len }, &[i]) => {
                if i >= 0 && (i as u32) < len {
                    Some(i as usize)
                } else {
                    None
                }
            }
            (Self::Plane { rows, cols }, &[r, c]) => {
                if r >= 0 && c >= 0 && (r as u32) < rows && (c as u32) < cols {
                    Some(r as usize * cols as usize + c as usize)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Coordinate of the flat index `index`. The caller guarantees
    /// `index < cell_count()`.
    pub fn coord_of(&self, index: usize) -> Coord {
        match *self {
            Self::Line { .. } => smallvec![index as i32],
            Self::Plane { cols, .. } => {
                let cols = cols as usize;
                smallvec![(index / cols) as i32, (index % cols) as i32]
            }
        }
    }
}

/// A grid of cell states with fixed [`Dims`].
///
/// Cells are stored row-major. Cloning a grid is a deep copy, which is
/// what history snapshots rely on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<S: CellState> {
    dims: Dims,
    cells: Vec<S>,
}

impl<S: CellState> Grid<S> {
    /// A grid with every cell in the state's default (background) value.
    pub fn new(dims: Dims) -> Self {
        Self::filled(dims, S::default())
    }

    /// A grid with every cell set to `state`.
    pub fn filled(dims: Dims, state: S) -> Self {
        Self {
            dims,
            cells: vec![state; dims.cell_count()],
        }
    }

    /// Wrap an existing row-major cell vector.
    pub fn from_cells(dims: Dims, cells: Vec<S>) -> Result<Self, GridError> {
        if cells.len() != dims.cell_count() {
            return Err(GridError::LengthMismatch {
                expected: dims.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { dims, cells })
    }

    /// Grid dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for grids built through a validated config.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[S] {
        &self.cells
    }

    /// Mutable access to all cells, row-major.
    pub fn cells_mut(&mut self) -> &mut [S] {
        &mut self.cells
    }

    /// State at flat index `index`.
    pub fn get(&self, index: usize) -> Option<S> {
        self.cells.get(index).copied()
    }

    /// State at `coord`.
    pub fn get_at(&self, coord: &[i32]) -> Option<S> {
        self.dims.index_of(coord).map(|i| self.cells[i])
    }

    /// Overwrite the state at `coord`, returning the previous state.
    pub fn set_at(&mut self, coord: &[i32], state: S) -> Result<S, GridError> {
        let index = self
            .dims
            .index_of(coord)
            .ok_or_else(|| GridError::CoordOutOfBounds {
                coord: Coord::from_slice(coord),
                dims: self.dims,
            })?;
        Ok(std::mem::replace(&mut self.cells[index], state))
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: S) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_live()).count()
    }

    /// Row `r` as a slice. A line has a single row 0.
    pub fn row(&self, r: u32) -> Option<&[S]> {
        if r >= self.dims.rows() {
            return None;
        }
        let cols = self.dims.cols() as usize;
        let start = r as usize * cols;
        Some(&self.cells[start..start + cols])
    }

    /// Numeric state codes, row-major.
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|s| s.code()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Bit, LifeState};
    use proptest::prelude::*;

    fn plane(rows: u32, cols: u32) -> Dims {
        Dims::Plane { rows, cols }
    }

    #[test]
    fn new_grid_is_background() {
        let g: Grid<LifeState> = Grid::new(plane(3, 4));
        assert_eq!(g.len(), 12);
        assert_eq!(g.count(LifeState::Dead), 12);
        assert_eq!(g.live_count(), 0);
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        let err = Grid::from_cells(Dims::Line { len: 4 }, vec![Bit::One; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn set_at_returns_previous() {
        let mut g: Grid<LifeState> = Grid::new(plane(2, 2));
        let prev = g.set_at(&[1, 0], LifeState::Alive).unwrap();
        assert_eq!(prev, LifeState::Dead);
        assert_eq!(g.get_at(&[1, 0]), Some(LifeState::Alive));
        assert_eq!(g.get(2), Some(LifeState::Alive));
    }

    #[test]
    fn set_at_out_of_bounds_is_error() {
        let mut g: Grid<LifeState> = Grid::new(plane(2, 2));
        assert!(matches!(
            g.set_at(&[2, 0], LifeState::Alive),
            Err(GridError::CoordOutOfBounds { .. })
        ));
        assert!(g.set_at(&[0], LifeState::Alive).is_err());
    }

    #[test]
    fn rows_slice_row_major() {
        let cells = vec![Bit::Zero, Bit::One, Bit::One, Bit::Zero, Bit::Zero, Bit::One];
        let g = Grid::from_cells(plane(2, 3), cells).unwrap();
        assert_eq!(g.row(0), Some(&[Bit::Zero, Bit::One, Bit::One][..]));
        assert_eq!(g.row(1), Some(&[Bit::Zero, Bit::Zero, Bit::One][..]));
        assert_eq!(g.row(2), None);
    }

    #[test]
    fn line_is_single_row() {
        let g: Grid<Bit> = Grid::new(Dims::Line { len: 5 });
        assert_eq!(g.dims().rows(), 1);
        assert_eq!(g.row(0).map(<[Bit]>::len), Some(5));
    }

    proptest! {
        #[test]
        fn index_coord_roundtrip(rows in 1u32..20, cols in 1u32..20, seed in 0usize..400) {
            let dims = plane(rows, cols);
            let index = seed % dims.cell_count();
            let coord = dims.coord_of(index);
            prop_assert_eq!(dims.index_of(&coord), Some(index));
        }
    }
}
