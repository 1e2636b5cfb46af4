//! Contract checks shared by the backend test modules.
//!
//! Each check walks every cell of a lattice, so callers keep the
//! lattices small.

use crate::boundary::BoundaryPolicy;
use crate::space::Space;
use indexmap::IndexSet;

const POLICIES: [BoundaryPolicy; 3] = [
    BoundaryPolicy::Periodic,
    BoundaryPolicy::Absorbing,
    BoundaryPolicy::Reflective,
];

/// Every cell has `width` slots, every resolved index is on the lattice,
/// and periodic lattices leave no slot empty.
pub fn check_slots(space: &dyn Space, width: usize) {
    let n = space.cell_count();
    for policy in POLICIES {
        for i in 0..n {
            let slots = space.neighbour_index_slots(i, policy);
            assert_eq!(slots.len(), width, "cell {i} under {policy}: {slots:?}");
            for nb in slots.iter().flatten() {
                assert!(*nb < n, "cell {i} under {policy} resolved {nb} of {n}");
            }
            if policy == BoundaryPolicy::Periodic {
                assert!(slots.iter().all(Option::is_some), "cell {i} has an empty periodic slot");
            }
        }
    }
}

/// Repeated queries agree, and the coordinate-level queries are the
/// index-level slots translated through the canonical ordering.
pub fn check_purity(space: &dyn Space) {
    let order = space.canonical_ordering();
    for policy in POLICIES {
        for (i, coord) in order.iter().enumerate() {
            let slots = space.neighbour_index_slots(i, policy);
            assert_eq!(slots, space.neighbour_index_slots(i, policy));

            let expected: Vec<_> = slots.iter().flatten().map(|&j| order[j].clone()).collect();
            assert_eq!(space.neighbours_under(coord, policy).to_vec(), expected);
            assert_eq!(space.neighbour_slots_under(coord, policy).len(), slots.len());
        }
    }
}

/// If `j` neighbours `i` then `i` neighbours `j`, under every policy.
pub fn check_symmetry(space: &dyn Space) {
    let n = space.cell_count();
    for policy in POLICIES {
        let sets: Vec<IndexSet<usize>> = (0..n)
            .map(|i| space.neighbour_index_slots(i, policy).into_iter().flatten().collect())
            .collect();
        for (i, set) in sets.iter().enumerate() {
            for &j in set {
                assert!(sets[j].contains(&i), "{j} neighbours {i} under {policy}, not back");
            }
        }
    }
}

/// Canonical ordering visits each cell once, at its own rank, and
/// distance is zero on the diagonal and symmetric.
pub fn check_ordering(space: &dyn Space) {
    let order = space.canonical_ordering();
    assert_eq!(order.len(), space.cell_count());
    let unique: IndexSet<_> = order.iter().collect();
    assert_eq!(unique.len(), order.len(), "duplicate coordinates in {order:?}");
    for (rank, coord) in order.iter().enumerate() {
        assert_eq!(space.canonical_rank(coord), Some(rank));
        assert_eq!(space.distance(coord, coord), 0.0);
        if let Some(next) = order.get(rank + 1) {
            assert_eq!(space.distance(coord, next), space.distance(next, coord));
        }
    }
}

/// All of the above.
pub fn run_full_compliance(space: &dyn Space, width: usize) {
    check_slots(space, width);
    check_purity(space);
    check_symmetry(space);
    check_ordering(space);
}
