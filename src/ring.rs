//! Circular index arithmetic.
//!
//! The carousel treats its card collection as a fixed-size ring; distances
//! between indices are always the shortest signed wraparound path.

/// Signed shortest wraparound distance from `center_index` to `card_index`
/// in a ring of `total` positions.
///
/// Computes `card_index - center_index`, then corrects once: differences
/// above `total / 2` wrap negative, differences below `-(total / 2)` wrap
/// positive. At an exact half-ring tie (even `total`) the raw sign is kept,
/// so the opposite card reports `+total / 2` when counted forward from the
/// center and `-total / 2` when counted backward.
///
/// `total` must be at least 1 and both indices must be in `0..total`.
#[inline]
pub fn circular_offset(card_index: usize, center_index: usize, total: usize) -> isize {
    debug_assert!(total >= 1);
    debug_assert!(card_index < total && center_index < total);

    let total = total as isize;
    let mut diff = card_index as isize - center_index as isize;
    if diff > total / 2 {
        diff -= total;
    } else if diff < -(total / 2) {
        diff += total;
    }
    diff
}
