//! One wheel, assembled: configuration, the reference scroll surface, and a
//! session wired through it. The host render layer asks for
//! [`visible_transforms`](WheelPicker::visible_transforms) each frame and
//! forwards taps.

use std::rc::Rc;

use rondel_core::anim::AnimationHandle;
use rondel_core::config::WheelConfig;
use rondel_core::curve::{ItemTransform, item_transform};
use rondel_core::geometry::Vec2;
use rondel_core::hit::resolve_tap;
use rondel_core::index::logical_index;
use rondel_core::session::{ScrollSurface, WheelSession};

use crate::surface::VirtualWheel;

/// A visible item ready to draw: its native slot, the logical index into the
/// data, and the cylinder transform for this frame.
#[derive(Clone, Copy, Debug)]
pub struct WheelItemFrame {
    pub native: i64,
    pub logical: usize,
    pub transform: ItemTransform,
}

pub struct WheelPicker {
    surface: Rc<VirtualWheel>,
    session: WheelSession,
}

impl WheelPicker {
    pub fn new(config: WheelConfig) -> Self {
        let surface = Rc::new(VirtualWheel::new(config.clone()));
        let session = WheelSession::new(config, surface.clone() as Rc<dyn ScrollSurface>);
        Self { surface, session }
    }

    pub fn config(&self) -> &WheelConfig {
        self.session.config()
    }

    pub fn session(&self) -> &WheelSession {
        &self.session
    }

    pub fn surface(&self) -> &Rc<VirtualWheel> {
        &self.surface
    }

    pub fn selected_index(&self) -> usize {
        self.session.selected_index(self.config().item_count)
    }

    pub fn animate_to_index(&self, target: i64) -> AnimationHandle {
        self.session
            .animate_to_index(target, self.config().item_count)
    }

    /// Advance animations one frame; true while anything is moving.
    pub fn tick(&self) -> bool {
        self.surface.tick()
    }

    /// A tap lands on the item it visually covers; taps during scrolls are
    /// dropped, matching the gesture contract. Returns the native index the
    /// wheel starts animating toward.
    pub fn tap(&self, point: Vec2) -> Option<i64> {
        if self.surface.is_scroll_in_progress() {
            return None;
        }
        let layout = self.surface.layout_info();
        let native = resolve_tap(point.y, &layout, &self.config().curve)?;
        self.surface.animate_scroll_to(native);
        Some(native)
    }

    /// Per-item render parameters for this frame, recomputed from the
    /// current scroll position.
    pub fn visible_transforms(&self) -> Vec<WheelItemFrame> {
        let config = self.config();
        let layout = self.surface.layout_info();
        layout
            .visible
            .iter()
            .map(|item| {
                let center = layout.before_padding + item.offset + item.size / 2.0;
                WheelItemFrame {
                    native: item.index,
                    logical: logical_index(item.index, config.item_count, config.infinite),
                    transform: item_transform(center, layout.viewport_height, &config.curve),
                }
            })
            .collect()
    }
}
