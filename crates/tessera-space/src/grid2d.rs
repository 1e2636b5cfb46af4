//! Shared axis helpers for lattice backends.

use crate::boundary::BoundaryPolicy;
use crate::error::SpaceError;
use tessera_core::Coord;

/// Resolve a single axis value under the given policy.
/// Returns `Some(value)` in range, or `None` when the value falls off a
/// non-periodic edge.
pub(crate) fn resolve_axis(val: i32, len: u32, policy: BoundaryPolicy) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match policy {
        BoundaryPolicy::Periodic => Some(val.rem_euclid(n)),
        BoundaryPolicy::Absorbing | BoundaryPolicy::Reflective => None,
    }
}

/// 1D distance along a single axis, accounting for wrap.
pub(crate) fn axis_distance(a: i32, b: i32, len: u32, policy: BoundaryPolicy) -> f64 {
    let diff = (a - b).unsigned_abs();
    if policy.wraps() {
        diff.min(len - diff) as f64
    } else {
        diff as f64
    }
}

/// Inclusive clipped range `[c - radius, c + radius] ∩ [0, len)`.
pub(crate) fn clipped_span(center: i32, radius: u32, len: u32) -> std::ops::Range<i32> {
    let r = radius.min(i32::MAX as u32) as i32;
    let lo = center.saturating_sub(r).max(0);
    let hi = center.saturating_add(r).min(len as i32 - 1);
    lo..hi + 1
}

/// Check that a 2D coordinate is in bounds and return `(row, col)`.
pub(crate) fn check_2d_bounds(coord: &Coord, rows: u32, cols: u32) -> Result<(i32, i32), SpaceError> {
    if coord.len() != 2 {
        return Err(SpaceError::CoordOutOfBounds {
            coord: coord.clone(),
            bounds: format!("expected 2D coordinate, got {}D", coord.len()),
        });
    }
    let r = coord[0];
    let c = coord[1];
    if r < 0 || r >= rows as i32 || c < 0 || c >= cols as i32 {
        return Err(SpaceError::CoordOutOfBounds {
            coord: coord.clone(),
            bounds: format!("[0, {rows}) x [0, {cols})"),
        });
    }
    Ok((r, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(2, 5, BoundaryPolicy::Reflective), Some(2));
        assert_eq!(resolve_axis(0, 5, BoundaryPolicy::Periodic), Some(0));
    }

    #[test]
    fn resolve_axis_off_edge() {
        assert_eq!(resolve_axis(-1, 5, BoundaryPolicy::Reflective), None);
        assert_eq!(resolve_axis(5, 5, BoundaryPolicy::Absorbing), None);
    }

    #[test]
    fn resolve_axis_wrap() {
        assert_eq!(resolve_axis(-1, 5, BoundaryPolicy::Periodic), Some(4));
        assert_eq!(resolve_axis(5, 5, BoundaryPolicy::Periodic), Some(0));
        assert_eq!(resolve_axis(7, 5, BoundaryPolicy::Periodic), Some(2));
    }

    #[test]
    fn clipped_span_clips_both_ends() {
        assert_eq!(clipped_span(1, 3, 10), 0..5);
        assert_eq!(clipped_span(8, 3, 10), 5..10);
        assert_eq!(clipped_span(4, 0, 10), 4..5);
    }

    #[test]
    fn axis_distance_wraps_only_when_periodic() {
        assert_eq!(axis_distance(0, 9, 10, BoundaryPolicy::Periodic), 1.0);
        assert_eq!(axis_distance(0, 9, 10, BoundaryPolicy::Reflective), 9.0);
    }
}
