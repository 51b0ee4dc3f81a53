use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::anim::AnimationHandle;
use crate::config::WheelConfig;
use crate::hit::LayoutInfo;
use crate::index::{self, MAX_NATIVE};
use crate::signal::{Signal, signal};

/// The narrow seam to the host's virtualized scrolling primitive.
///
/// The session never touches the host's layout or gesture machinery
/// directly; everything it needs is a layout snapshot, an animated scroll
/// request, and the scroll-activity queries.
pub trait ScrollSurface {
    fn layout_info(&self) -> LayoutInfo;
    /// Starts an animated scroll to a native index; superseding requests
    /// cancel the one in flight (last request wins).
    fn animate_scroll_to(&self, native: i64) -> AnimationHandle;
    fn is_scroll_in_progress(&self) -> bool;
    fn can_scroll_forward(&self) -> bool;
    fn can_scroll_backward(&self) -> bool;
}

/// Opaque persisted form of a wheel: wrap mode plus selected logical index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWheel {
    pub infinite: bool,
    pub index: usize,
}

impl SavedWheel {
    /// Applies the saved pair onto a fresh configuration.
    pub fn apply_to(self, config: WheelConfig) -> WheelConfig {
        config.infinite(self.infinite).initial_index(self.index)
    }
}

/// Long-lived state of one wheel: ties the surface's scroll position to a
/// selection and drives programmatic animated navigation.
///
/// Selection is derived on every read from the current layout; nothing here
/// caches it across scroll updates.
pub struct WheelSession {
    config: WheelConfig,
    surface: Rc<dyn ScrollSurface>,
    programmatic: Signal<bool>,
    in_flight: RefCell<Option<AnimationHandle>>,
}

impl WheelSession {
    pub fn new(config: WheelConfig, surface: Rc<dyn ScrollSurface>) -> Self {
        Self {
            config,
            surface,
            programmatic: signal(false),
            in_flight: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn surface(&self) -> &Rc<dyn ScrollSurface> {
        &self.surface
    }

    /// True while a programmatic scroll is in flight, letting dependent UI
    /// tell programmatic motion from user drags.
    pub fn is_programmatic(&self) -> bool {
        self.programmatic.get()
    }

    pub fn programmatic_signal(&self) -> &Signal<bool> {
        &self.programmatic
    }

    pub fn is_scroll_in_progress(&self) -> bool {
        self.surface.is_scroll_in_progress()
    }

    /// Native index of the centered item: the first visible item whose
    /// bottom edge crosses the viewport midline. Falls back to the initial
    /// position while the surface has no layout yet.
    pub fn selected_native(&self) -> i64 {
        let layout = self.surface.layout_info();
        let midline = layout.viewport_height / 2.0;
        layout
            .visible
            .iter()
            .find(|item| layout.before_padding + item.offset + item.size > midline)
            .map(|item| item.index)
            .unwrap_or_else(|| self.config.initial_native())
    }

    /// Logical selected index, always in `[0, item_count)`.
    pub fn selected_index(&self, item_count: usize) -> usize {
        index::logical_index(self.selected_native(), item_count, self.config.infinite)
    }

    /// Animated navigation to a logical index.
    ///
    /// Out-of-range targets and already-selected targets are no-ops that
    /// return a settled handle. Infinite wheels travel the shorter way
    /// around, falling back to the long way when the short one would leave
    /// the representable native range. The programmatic flag clears when the
    /// returned handle settles, cancelled or not.
    pub fn animate_to_index(&self, target: i64, item_count: usize) -> AnimationHandle {
        if target < 0 || target >= item_count as i64 {
            return AnimationHandle::completed();
        }
        let selected = self.selected_index(item_count) as i64;
        if selected == target {
            return AnimationHandle::completed();
        }

        if !self.config.infinite {
            return self.begin(target);
        }

        let current_native = self.selected_native();
        let (primary, secondary) = index::minimal_shift(item_count, selected, target);
        let chosen = if primary > 0 {
            if current_native + primary < MAX_NATIVE {
                primary
            } else {
                secondary
            }
        } else if current_native + primary > 0 {
            primary
        } else {
            secondary
        };
        log::debug!(
            "wheel animate {selected} -> {target}: shift {chosen} (primary {primary}, secondary {secondary})"
        );
        self.begin(current_native + chosen)
    }

    fn begin(&self, native: i64) -> AnimationHandle {
        // Last request wins.
        if let Some(prev) = self.in_flight.borrow_mut().take() {
            prev.cancel();
        }

        self.programmatic.set(true);
        let handle = self.surface.animate_scroll_to(native);
        let flag = self.programmatic.clone();
        handle.on_settled(move |_| flag.set(false));
        *self.in_flight.borrow_mut() = Some(handle.clone());
        handle
    }

    pub fn save(&self) -> SavedWheel {
        SavedWheel {
            infinite: self.config.infinite,
            index: self.selected_index(self.config.item_count),
        }
    }
}

impl Drop for WheelSession {
    fn drop(&mut self) {
        // The surface outlives its session only in the host's hands; never
        // leave an animation driving a torn-down wheel.
        if let Some(handle) = self.in_flight.borrow_mut().take() {
            handle.cancel();
        }
    }
}
