//! Tap resolution against the curved wheel.
//!
//! The curve is inverted analytically (arcsine of the tap's distance from
//! center over the wheel radius) to recover where the tap would land on the
//! *uncurved* column, then the visible items' linear layout bounds are
//! binary-searched for that position. This is the canonical strategy; a
//! direct apparent-bounds test gives the same answers for the shipped curve
//! tunings but is not proven equivalent for arbitrary ones.

use smallvec::SmallVec;
use std::f32::consts::FRAC_PI_2;

use crate::curve::{CurveParams, wheel_radius};

/// One visible item as reported by the host list: native index, pixel offset
/// of its top edge past the content padding, and pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleItem {
    pub index: i64,
    pub offset: f32,
    pub size: f32,
}

/// Snapshot of the host list's layout, the narrow interface everything in
/// this crate reads the scroll position through.
#[derive(Clone, Debug, Default)]
pub struct LayoutInfo {
    pub visible: SmallVec<[VisibleItem; 16]>,
    pub viewport_height: f32,
    pub before_padding: f32,
}

impl LayoutInfo {
    /// Linear (uncurved) bounds of the nth visible item, viewport coords.
    fn bounds(&self, nth: usize) -> (f32, f32) {
        let item = &self.visible[nth];
        let top = self.before_padding + item.offset;
        (top, top + item.size)
    }
}

/// Resolves a tap's Y coordinate to the native index of the item whose
/// curved visual bounds contain it. `None` for taps outside every item,
/// empty layouts, and degenerate geometry; never panics.
pub fn resolve_tap(tap_y: f32, layout: &LayoutInfo, params: &CurveParams) -> Option<i64> {
    if layout.visible.is_empty() || layout.viewport_height <= 0.0 {
        return None;
    }

    let half = layout.viewport_height / 2.0;
    let r = wheel_radius(half, params.curve_rate);
    if r <= 0.0 {
        return None;
    }

    // Height from the wheel center up to the tap. Past the rim nothing is
    // drawn; the clamp below only absorbs float drift at the boundary.
    let h = half - tap_y;
    if h.abs() / r > 1.0 + 1e-3 {
        return None;
    }
    let fraction = -(h / r).clamp(-1.0, 1.0).asin() / FRAC_PI_2;

    // Tap position relative to the uncurved item column.
    let uncurved_y = half * (fraction + 1.0);

    let mut lo = 0usize;
    let mut hi = layout.visible.len() - 1;

    let (first_top, _) = layout.bounds(lo);
    let (_, last_bottom) = layout.bounds(hi);
    if uncurved_y < first_top || uncurved_y > last_bottom {
        return None;
    }

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let (top, bottom) = layout.bounds(mid);
        if uncurved_y < top {
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        } else if uncurved_y > bottom {
            if mid + 1 >= layout.visible.len() {
                break;
            }
            lo = mid + 1;
        } else {
            return Some(layout.visible[mid].index);
        }
    }
    None
}
