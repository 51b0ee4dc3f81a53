//! Conversions between the host list's native index space and logical item
//! indices, plus minimal rotation paths around the ring.
//!
//! Infinite wrap is emulated the way bounded virtualizers expect it: the
//! native space is `[0, MAX_NATIVE)` and the starting position is biased by
//! [`INFINITE_OFFSET`] so backward scrolling never underflows. The contract
//! that matters is smaller than the trick: logical indices always land in
//! `[0, item_count)` and programmatic moves take the shorter way around.

/// Bias applied to the native index when infinite wrap is on.
pub const INFINITE_OFFSET: i64 = (i32::MAX / 2) as i64;

/// Exclusive upper bound of the emulated native index space.
pub const MAX_NATIVE: i64 = i32::MAX as i64;

/// Logical index for a native scroll position, normalized to
/// `[0, item_count)`. For finite wheels this is the identity, clamped to
/// the valid range.
pub fn logical_index(native: i64, item_count: usize, infinite: bool) -> usize {
    if item_count == 0 {
        return 0;
    }
    let n = item_count as i64;
    if infinite {
        (native - INFINITE_OFFSET).rem_euclid(n) as usize
    } else {
        native.clamp(0, n - 1) as usize
    }
}

/// Signed native deltas travelling from `from` to `to` around the ring.
///
/// The first element is the smaller-magnitude direction, the second the
/// opposite way (used when the primary would leave the representable native
/// range). When both directions are the same length, forward wins; the
/// choice is arbitrary but has to be deterministic. `(0, 0)` for equal
/// endpoints or a degenerate count.
pub fn minimal_shift(item_count: usize, from: i64, to: i64) -> (i64, i64) {
    if item_count == 0 {
        return (0, 0);
    }
    let n = item_count as i64;
    let from = from.rem_euclid(n);
    let to = to.rem_euclid(n);
    if from == to {
        return (0, 0);
    }

    let forward = (to - from).rem_euclid(n);
    let backward = forward - n;

    if forward <= -backward {
        (forward, backward)
    } else {
        (backward, forward)
    }
}
