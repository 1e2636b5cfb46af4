//! 2D square grid with the Moore (8-connected) neighbourhood.

use crate::boundary::BoundaryPolicy;
use crate::error::SpaceError;
use crate::grid2d;
use crate::space::{Slots, Space};
use smallvec::SmallVec;
use tessera_core::{Coord, Dims};

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A two-dimensional square grid with the Moore neighbourhood.
///
/// Each cell has coordinate `[row, col]`. Neighbours are the four
/// cardinal directions plus four diagonals. Distance is Chebyshev (L-inf),
/// consistent with 8-connected moves.
///
/// Boundary handling is controlled by [`BoundaryPolicy`]:
/// - **Periodic**: torus, every cell has 8 neighbours
/// - **Absorbing** / **Reflective**: corners have 3 neighbours, edges 5
#[derive(Debug, Clone)]
pub struct Square8 {
    rows: u32,
    cols: u32,
    boundary: BoundaryPolicy,
}

impl Square8 {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new 2D grid with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32, boundary: BoundaryPolicy) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            boundary,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }
}

impl Space for Square8 {
    fn dims(&self) -> Dims {
        Dims::Plane {
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    fn neighbour_index_slots(&self, index: usize, policy: BoundaryPolicy) -> Slots<usize> {
        let cols = self.cols as usize;
        let r = (index / cols) as i32;
        let c = (index % cols) as i32;
        let mut slots = SmallVec::new();
        for (dr, dc) in MOORE_OFFSETS {
            let nr = grid2d::resolve_axis(r + dr, self.rows, policy);
            let nc = grid2d::resolve_axis(c + dc, self.cols, policy);
            slots.push(match (nr, nc) {
                (Some(nr), Some(nc)) => Some(nr as usize * cols + nc as usize),
                _ => None,
            });
        }
        slots
    }

    fn distance(&self, a: &Coord, b: &Coord) -> f64 {
        let dr = grid2d::axis_distance(a[0], b[0], self.rows, self.boundary);
        let dc = grid2d::axis_distance(a[1], b[1], self.cols, self.boundary);
        dr.max(dc)
    }

    fn square_region(&self, center: &Coord, radius: u32) -> Result<Vec<usize>, SpaceError> {
        let (cr, cc) = grid2d::check_2d_bounds(center, self.rows, self.cols)?;
        let cols = self.cols as usize;
        let mut out = Vec::new();
        for r in grid2d::clipped_span(cr, radius, self.rows) {
            for c in grid2d::clipped_span(cc, radius, self.cols) {
                out.push(r as usize * cols + c as usize);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use smallvec::smallvec;

    fn c(r: i32, col: i32) -> Coord {
        smallvec![r, col]
    }

    fn arb_policy() -> impl Strategy<Value = BoundaryPolicy> {
        prop_oneof![
            Just(BoundaryPolicy::Periodic),
            Just(BoundaryPolicy::Absorbing),
            Just(BoundaryPolicy::Reflective),
        ]
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior_has_eight() {
        let s = Square8::new(5, 5, BoundaryPolicy::Reflective).unwrap();
        assert_eq!(s.neighbours(&c(2, 2)).len(), 8);
    }

    #[test]
    fn neighbours_reflective_corner() {
        let s = Square8::new(5, 5, BoundaryPolicy::Reflective).unwrap();
        let n = s.neighbours(&c(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 1)));
    }

    #[test]
    fn neighbours_reflective_edge() {
        let s = Square8::new(5, 5, BoundaryPolicy::Reflective).unwrap();
        assert_eq!(s.neighbours(&c(0, 2)).len(), 5);
    }

    #[test]
    fn absorbing_keeps_empty_slots() {
        let s = Square8::new(5, 5, BoundaryPolicy::Absorbing).unwrap();
        let slots = s.neighbour_slots(&c(0, 0));
        assert_eq!(slots.len(), 8);
        assert_eq!(slots.iter().filter(|s| s.is_none()).count(), 5);
    }

    #[test]
    fn neighbours_wrap_corner() {
        let s = Square8::new(5, 5, BoundaryPolicy::Periodic).unwrap();
        let n = s.neighbours(&c(0, 0));
        assert_eq!(n.len(), 8);
        assert!(n.contains(&c(4, 4)));
        assert!(n.contains(&c(4, 0)));
        assert!(n.contains(&c(0, 4)));
    }

    #[test]
    fn explicit_policy_overrides_space_policy() {
        let s = Square8::new(5, 5, BoundaryPolicy::Reflective).unwrap();
        assert_eq!(s.neighbours(&c(0, 0)).len(), 3);
        assert_eq!(s.neighbours_under(&c(0, 0), BoundaryPolicy::Periodic).len(), 8);
    }

    #[test]
    fn slot_order_follows_offsets() {
        let s = Square8::new(3, 3, BoundaryPolicy::Periodic).unwrap();
        let slots = s.neighbour_index_slots(4, BoundaryPolicy::Periodic);
        // centre of 3x3: N=1, S=7, W=3, E=5, NW=0, NE=2, SW=6, SE=8
        let expected: Vec<Option<usize>> = [1, 7, 3, 5, 0, 2, 6, 8].into_iter().map(Some).collect();
        assert_eq!(slots.to_vec(), expected);
    }

    #[test]
    fn out_of_range_coord_has_no_neighbours() {
        let s = Square8::new(3, 3, BoundaryPolicy::Periodic).unwrap();
        assert!(s.neighbours(&c(3, 0)).is_empty());
    }

    // ── Region tests ────────────────────────────────────────────

    #[test]
    fn square_region_interior() {
        let s = Square8::new(10, 10, BoundaryPolicy::Periodic).unwrap();
        assert_eq!(s.square_region(&c(5, 5), 2).unwrap().len(), 25);
    }

    #[test]
    fn square_region_clips_instead_of_wrapping() {
        let s = Square8::new(10, 10, BoundaryPolicy::Periodic).unwrap();
        let region = s.square_region(&c(0, 0), 1).unwrap();
        assert_eq!(region, vec![0, 1, 10, 11]);
    }

    #[test]
    fn square_region_rejects_outside_center() {
        let s = Square8::new(4, 4, BoundaryPolicy::Reflective).unwrap();
        assert!(matches!(
            s.square_region(&c(4, 1), 1),
            Err(SpaceError::CoordOutOfBounds { .. })
        ));
    }

    // ── Distance tests ──────────────────────────────────────────

    #[test]
    fn distance_chebyshev() {
        let s = Square8::new(10, 10, BoundaryPolicy::Reflective).unwrap();
        assert_eq!(s.distance(&c(0, 0), &c(1, 1)), 1.0);
        assert_eq!(s.distance(&c(0, 0), &c(3, 4)), 4.0);
    }

    #[test]
    fn distance_chebyshev_wrap() {
        let s = Square8::new(10, 10, BoundaryPolicy::Periodic).unwrap();
        assert_eq!(s.distance(&c(0, 0), &c(9, 9)), 1.0);
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_rows_returns_error() {
        assert!(matches!(
            Square8::new(0, 5, BoundaryPolicy::Periodic),
            Err(SpaceError::EmptySpace)
        ));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Square8::new(big, 5, BoundaryPolicy::Periodic),
            Err(SpaceError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Square8::new(5, big, BoundaryPolicy::Periodic),
            Err(SpaceError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn single_cell_wrap_is_own_neighbour() {
        let s = Square8::new(1, 1, BoundaryPolicy::Periodic).unwrap();
        let n = s.neighbours(&c(0, 0));
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|nb| nb == &c(0, 0)));
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_all_policies() {
        for policy in [
            BoundaryPolicy::Periodic,
            BoundaryPolicy::Absorbing,
            BoundaryPolicy::Reflective,
        ] {
            let s = Square8::new(6, 7, policy).unwrap();
            compliance::run_full_compliance(&s, 8);
        }
    }

    #[test]
    fn downcast_ref_square8() {
        let s: Box<dyn Space> = Box::new(Square8::new(3, 3, BoundaryPolicy::Periodic).unwrap());
        assert!(s.downcast_ref::<Square8>().is_some());
        assert!(s.downcast_ref::<crate::Line1D>().is_none());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn periodic_neighbours_always_in_range(
            rows in 1u32..12,
            cols in 1u32..12,
            r in 0i32..12,
            col in 0i32..12,
        ) {
            let r = r % rows as i32;
            let col = col % cols as i32;
            let s = Square8::new(rows, cols, BoundaryPolicy::Periodic).unwrap();
            let n = s.neighbours(&c(r, col));
            prop_assert_eq!(n.len(), 8);
            for nb in n {
                prop_assert!(nb[0] >= 0 && nb[0] < rows as i32);
                prop_assert!(nb[1] >= 0 && nb[1] < cols as i32);
            }
        }

        #[test]
        fn neighbours_are_pure(
            rows in 1u32..10,
            cols in 1u32..10,
            policy in arb_policy(),
            idx in 0usize..100,
        ) {
            let s = Square8::new(rows, cols, policy).unwrap();
            let idx = idx % s.cell_count();
            prop_assert_eq!(
                s.neighbour_index_slots(idx, policy),
                s.neighbour_index_slots(idx, policy)
            );
        }

        #[test]
        fn neighbours_symmetric(
            rows in 2u32..10,
            cols in 2u32..10,
            policy in arb_policy(),
            r in 0i32..10, col in 0i32..10,
        ) {
            let r = r % rows as i32;
            let col = col % cols as i32;
            let s = Square8::new(rows, cols, policy).unwrap();
            let coord = c(r, col);
            for nb in s.neighbours(&coord) {
                prop_assert!(
                    s.neighbours(&nb).contains(&coord),
                    "neighbour symmetry violated: {:?} in N({:?}) but not vice versa",
                    nb, coord,
                );
            }
        }
    }
}
