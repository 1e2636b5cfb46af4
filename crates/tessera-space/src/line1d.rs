//! 1D line lattice with configurable boundary policy.

use crate::boundary::BoundaryPolicy;
use crate::error::SpaceError;
use crate::grid2d;
use crate::space::{Slots, Space};
use smallvec::smallvec;
use tessera_core::{Coord, Dims};

/// A one-dimensional line lattice.
///
/// Each cell has coordinate `[i]` where `0 <= i < len`. The neighbourhood
/// is the immediate left and right cell, in that slot order.
///
/// # Examples
///
/// ```
/// use tessera_space::{BoundaryPolicy, Line1D, Space};
///
/// let line = Line1D::new(5, BoundaryPolicy::Absorbing).unwrap();
/// assert_eq!(line.len(), 5);
/// assert_eq!(line.ndim(), 1);
///
/// // The left slot of cell 0 is empty; the right slot is cell 1.
/// assert_eq!(line.neighbour_index_slots(0, BoundaryPolicy::Absorbing).to_vec(), vec![None, Some(1)]);
///
/// // Periodic wraps to the far end.
/// assert_eq!(line.neighbour_index_slots(0, BoundaryPolicy::Periodic).to_vec(), vec![Some(4), Some(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct Line1D {
    len: u32,
    boundary: BoundaryPolicy,
}

impl Line1D {
    /// Maximum length: coordinates use `i32`, so `len` must fit.
    pub const MAX_LEN: u32 = i32::MAX as u32;

    /// Create a new 1D line with `len` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if `len == 0`, or
    /// `Err(SpaceError::DimensionTooLarge)` if `len > i32::MAX`.
    pub fn new(len: u32, boundary: BoundaryPolicy) -> Result<Self, SpaceError> {
        if len == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if len > Self::MAX_LEN {
            return Err(SpaceError::DimensionTooLarge {
                name: "len",
                value: len,
                max: Self::MAX_LEN,
            });
        }
        Ok(Self { len, boundary })
    }

    /// Number of cells.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Always returns `false`: construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Check that a 1D coordinate is in bounds.
fn check_1d_bounds(coord: &Coord, len: u32) -> Result<i32, SpaceError> {
    if coord.len() != 1 {
        return Err(SpaceError::CoordOutOfBounds {
            coord: coord.clone(),
            bounds: format!("expected 1D coordinate, got {}D", coord.len()),
        });
    }
    let i = coord[0];
    if i < 0 || i >= len as i32 {
        return Err(SpaceError::CoordOutOfBounds {
            coord: coord.clone(),
            bounds: format!("[0, {len})"),
        });
    }
    Ok(i)
}

impl Space for Line1D {
    fn dims(&self) -> Dims {
        Dims::Line { len: self.len }
    }

    fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    fn neighbour_index_slots(&self, index: usize, policy: BoundaryPolicy) -> Slots<usize> {
        let i = index as i32;
        let left = grid2d::resolve_axis(i - 1, self.len, policy).map(|v| v as usize);
        let right = grid2d::resolve_axis(i + 1, self.len, policy).map(|v| v as usize);
        smallvec![left, right]
    }

    fn distance(&self, a: &Coord, b: &Coord) -> f64 {
        grid2d::axis_distance(a[0], b[0], self.len, self.boundary)
    }

    fn square_region(&self, center: &Coord, radius: u32) -> Result<Vec<usize>, SpaceError> {
        let c = check_1d_bounds(center, self.len)?;
        Ok(grid2d::clipped_span(c, radius, self.len)
            .map(|i| i as usize)
            .collect())
    }
}
