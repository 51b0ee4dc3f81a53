//! The drum illusion: per-item transform parameters derived from the item's
//! vertical offset from the viewport center.
//!
//! The viewport height is treated as a fraction (`1 / curve_rate`) of the
//! implied cylinder's half-circumference, which fixes the radius; each item's
//! linear scroll position is then bent onto that cylinder with a sine chord,
//! so motion decelerates near the center and compresses toward the edges.

use std::f32::consts::{FRAC_PI_2, PI};

/// Empirically tuned curve constants. `curve_rate = 1.29` together with a
/// wider `viewport_curve_rate` gives the iOS-like tighter drum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParams {
    /// Ratio of the cylinder half-circumference to the viewport height.
    pub curve_rate: f32,
    /// Frame-height ratio at which the curved content fills its frame.
    pub viewport_curve_rate: f32,
    /// Quadratic horizontal narrowing factor toward the edges.
    pub squeeze: f32,
    /// Viewport height divided by this gives the camera distance.
    pub camera_divisor: f32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            curve_rate: 1.0,
            viewport_curve_rate: 0.653,
            squeeze: 0.11,
            camera_divisor: 25.0,
        }
    }
}

impl CurveParams {
    /// iOS-flavored tuning of the same curve.
    pub fn ios() -> Self {
        Self {
            curve_rate: 1.29,
            viewport_curve_rate: 1.53,
            squeeze: 0.1,
            camera_divisor: 22.0,
        }
    }
}

/// Render parameters for one visible item. Recomputed every frame from the
/// scroll position; never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    pub scale_x: f32,
    /// Rotation around the horizontal axis, in degrees.
    pub rotation_x: f32,
    pub translation_y: f32,
    pub opacity: f32,
    pub camera_distance: f32,
}

impl ItemTransform {
    pub const IDENTITY: ItemTransform = ItemTransform {
        scale_x: 1.0,
        rotation_x: 0.0,
        translation_y: 0.0,
        opacity: 1.0,
        camera_distance: 0.0,
    };
}

/// Radius of the implied cylinder for a viewport half-height.
pub fn wheel_radius(viewport_half_height: f32, curve_rate: f32) -> f32 {
    if curve_rate <= 0.0 {
        return 0.0;
    }
    2.0 * viewport_half_height / curve_rate / PI
}

/// Transform for an item whose untransformed center sits at `item_center_y`
/// (viewport coordinates, y down) in a viewport of `viewport_height` px.
///
/// Degenerate viewports produce the identity transform rather than NaN.
pub fn item_transform(
    item_center_y: f32,
    viewport_height: f32,
    params: &CurveParams,
) -> ItemTransform {
    if viewport_height <= 0.0 {
        return ItemTransform::IDENTITY;
    }

    let half = viewport_height / 2.0;
    let fraction = (item_center_y - half) / half;

    // Quadratic narrowing reads smoother than linear at the rim.
    let scale_x = 1.0 - fraction.abs().powi(2) * params.squeeze;

    // Past a quarter turn the item faces away; hide it instead of drawing
    // it edge-on.
    let opacity = if fraction.abs() >= 1.0 { 0.0 } else { 1.0 };

    let rotation_x = -90.0 * fraction;

    let translation_y = if fraction == 0.0 {
        0.0
    } else {
        let r = wheel_radius(half, params.curve_rate);
        let chord = (fraction.abs() * FRAC_PI_2).sin() * r;
        let curved_center = if fraction < 0.0 {
            half - chord
        } else {
            half + chord
        };
        curved_center - item_center_y.abs()
    };

    ItemTransform {
        scale_x,
        rotation_x,
        translation_y,
        opacity,
        camera_distance: viewport_height / params.camera_divisor,
    }
}

/// Where the item's center lands on screen after the curve is applied.
pub fn curved_center_y(item_center_y: f32, viewport_height: f32, params: &CurveParams) -> f32 {
    item_center_y + item_transform(item_center_y, viewport_height, params).translation_y
}
