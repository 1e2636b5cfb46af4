//! The core `Space` trait and `dyn Space` downcast support.

use crate::boundary::BoundaryPolicy;
use crate::error::SpaceError;
use smallvec::SmallVec;
use std::any::Any;
use tessera_core::{Coord, Dims};

/// Neighbour slots of one cell: one entry per neighbourhood offset,
/// `None` where the offset falls off the lattice.
pub type Slots<T> = SmallVec<[Option<T>; 8]>;

/// Central spatial abstraction for Tessera lattices.
///
/// Every rule sweep resolves neighbours through this trait. Concrete
/// backends ([`Line1D`](crate::Line1D), [`Square8`](crate::Square8))
/// define the neighbourhood offsets; the [`BoundaryPolicy`] decides what
/// happens at the edges.
///
/// # Purity
///
/// All queries are pure: the same coordinate and policy always yield the
/// same neighbour set, in the same backend-defined order.
pub trait Space: Any + Send + Sync + 'static {
    /// Lattice dimensions.
    fn dims(&self) -> Dims;

    /// The policy used by [`neighbours`](Self::neighbours) and
    /// [`neighbour_slots`](Self::neighbour_slots).
    fn boundary(&self) -> BoundaryPolicy;

    /// Neighbour slots of the cell at flat index `index` under `policy`.
    ///
    /// This is the primitive every other neighbour query is built on.
    /// Slot order is fixed per backend, so slot `k` always refers to the
    /// same offset. Resolved indices are always `< cell_count()`.
    fn neighbour_index_slots(&self, index: usize, policy: BoundaryPolicy) -> Slots<usize>;

    /// Graph-geodesic distance between two cells under the space's policy.
    fn distance(&self, a: &Coord, b: &Coord) -> f64;

    /// Flat indices of the square of side `2 * radius + 1` centred on
    /// `center`, clipped to the lattice (never wrapped). On a line this
    /// is the clipped interval `[c - radius, c + radius]`.
    fn square_region(&self, center: &Coord, radius: u32) -> Result<Vec<usize>, SpaceError>;

    /// Number of spatial dimensions.
    fn ndim(&self) -> usize {
        self.dims().ndim()
    }

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        self.dims().cell_count()
    }

    /// Neighbour slots of `coord` under `policy`.
    ///
    /// Returns an empty list for a coordinate outside the lattice.
    fn neighbour_slots_under(&self, coord: &Coord, policy: BoundaryPolicy) -> Slots<Coord> {
        let dims = self.dims();
        match dims.index_of(coord) {
            Some(index) => self
                .neighbour_index_slots(index, policy)
                .into_iter()
                .map(|slot| slot.map(|i| dims.coord_of(i)))
                .collect(),
            None => SmallVec::new(),
        }
    }

    /// Neighbour slots of `coord` under the space's own policy.
    fn neighbour_slots(&self, coord: &Coord) -> Slots<Coord> {
        self.neighbour_slots_under(coord, self.boundary())
    }

    /// In-range neighbours of `coord` under `policy`, in slot order.
    fn neighbours_under(&self, coord: &Coord, policy: BoundaryPolicy) -> SmallVec<[Coord; 8]> {
        self.neighbour_slots_under(coord, policy)
            .into_iter()
            .flatten()
            .collect()
    }

    /// In-range neighbours of `coord` under the space's own policy.
    fn neighbours(&self, coord: &Coord) -> SmallVec<[Coord; 8]> {
        self.neighbours_under(coord, self.boundary())
    }

    /// All cells in row-major canonical order.
    fn canonical_ordering(&self) -> Vec<Coord> {
        let dims = self.dims();
        (0..dims.cell_count()).map(|i| dims.coord_of(i)).collect()
    }

    /// Position of `coord` in the canonical ordering.
    fn canonical_rank(&self, coord: &Coord) -> Option<usize> {
        self.dims().index_of(coord)
    }
}

impl dyn Space {
    /// Attempt to downcast a trait object to a concrete backend.
    pub fn downcast_ref<T: Space>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
