//! Selection-band geometry: a dimmed scrim above and below a highlighted
//! band around the centered slot. Pure rect math; the host paints it.

use rondel_core::color::Color;
use rondel_core::geometry::{Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Dimmed background outside the focused band.
    pub scrim: Color,
    /// Fill of the focused band behind the centered item.
    pub focus: Color,
    pub corner_radius: f32,
    pub horizontal_padding: f32,
    /// Negative values let the band poke slightly past the item slot.
    pub vertical_padding: f32,
    /// Scale applied to the centered item's content by the host.
    pub selection_scale: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            scrim: Color::WHITE.with_opacity(0.7),
            focus: Color::GRAY.with_opacity(0.4),
            corner_radius: 7.0,
            horizontal_padding: 0.0,
            vertical_padding: -2.0,
            selection_scale: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayBands {
    pub top_scrim: Rect,
    pub focus_band: Rect,
    pub bottom_scrim: Rect,
}

/// Splits the widget frame into scrim / focus band / scrim.
pub fn overlay_bands(frame: Size, item_height: f32, style: &OverlayStyle) -> OverlayBands {
    let scrim_h = ((frame.height - item_height) / 2.0 + style.vertical_padding).max(0.0);
    let band_h = (item_height - 2.0 * style.vertical_padding).min(frame.height);
    OverlayBands {
        top_scrim: Rect {
            x: 0.0,
            y: 0.0,
            w: frame.width,
            h: scrim_h,
        },
        focus_band: Rect {
            x: style.horizontal_padding,
            y: scrim_h,
            w: (frame.width - 2.0 * style.horizontal_padding).max(0.0),
            h: band_h,
        },
        bottom_scrim: Rect {
            x: 0.0,
            y: scrim_h + band_h,
            w: frame.width,
            h: (frame.height - scrim_h - band_h).max(0.0),
        },
    }
}
