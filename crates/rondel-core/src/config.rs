use crate::curve::CurveParams;
use crate::index::INFINITE_OFFSET;

pub const DEFAULT_NON_FOCUSED_ITEMS: usize = 8;
pub const DEFAULT_ITEM_HEIGHT: f32 = 44.0;

/// Immutable per-wheel settings, created once and shared by the math layers.
#[derive(Clone, Debug)]
pub struct WheelConfig {
    pub item_count: usize,
    /// Height of one item slot in px.
    pub item_height: f32,
    /// Visible non-focused neighbors; the total visible count is normalized
    /// to an odd number so exactly one item sits centered.
    pub non_focused_items: usize,
    pub infinite: bool,
    pub initial_index: usize,
    pub curve: CurveParams,
}

impl WheelConfig {
    pub fn new(item_count: usize) -> Self {
        if item_count == 0 {
            log::warn!("wheel configured with zero items; geometry degrades to identity");
        }
        Self {
            item_count,
            item_height: DEFAULT_ITEM_HEIGHT,
            non_focused_items: DEFAULT_NON_FOCUSED_ITEMS,
            infinite: false,
            initial_index: 0,
            curve: CurveParams::default(),
        }
    }

    pub fn item_height(mut self, h: f32) -> Self {
        self.item_height = h;
        self
    }

    pub fn non_focused_items(mut self, n: usize) -> Self {
        self.non_focused_items = n;
        self
    }

    pub fn infinite(mut self, on: bool) -> Self {
        self.infinite = on;
        self
    }

    pub fn initial_index(mut self, i: usize) -> Self {
        self.initial_index = i;
        self
    }

    pub fn curve(mut self, curve: CurveParams) -> Self {
        self.curve = curve;
        self
    }

    /// Total visible item slots, always odd.
    pub fn visible_items(&self) -> usize {
        self.non_focused_items / 2 * 2 + 1
    }

    /// Height of the uncurved item column, which is also the scroll
    /// viewport height the curve math works in.
    pub fn column_height(&self) -> f32 {
        self.item_height * self.visible_items() as f32
    }

    /// Height of the widget frame. The curved content hugs the cylinder, so
    /// the frame is shorter than the flat column by the tuned ratio.
    pub fn frame_height(&self) -> f32 {
        if self.curve.curve_rate <= 0.0 || self.curve.viewport_curve_rate <= 0.0 {
            return self.column_height();
        }
        self.column_height() / (self.curve.curve_rate / self.curve.viewport_curve_rate)
    }

    /// Leading/trailing content padding that lets the first and last items
    /// reach the center slot.
    pub fn edge_offset(&self) -> f32 {
        (self.column_height() - self.item_height) / 2.0
    }

    /// Native scroll index the wheel starts at.
    pub fn initial_native(&self) -> i64 {
        if self.infinite {
            INFINITE_OFFSET + self.initial_index as i64
        } else {
            self.initial_index as i64
        }
    }

    /// Native slots the host list has to expose.
    pub fn native_len(&self) -> i64 {
        if self.infinite {
            crate::index::MAX_NATIVE
        } else {
            self.item_count as i64
        }
    }
}
