//! Headless virtualized wheel column: the reference [`ScrollSurface`].
//!
//! Stands in for a host framework's lazy list. The scroll position lives in
//! pixels, `offset == native_index * item_height` meaning that native slot
//! is centered. The offset is an `f64`: with infinite wrap the native space
//! is biased by a billion-slot constant, which an `f32` cannot carry at
//! per-pixel granularity. Programmatic scrolls and the release snap are
//! tick-driven tweens over that offset, advanced by the installed clock.

use std::cell::{Cell, RefCell};

use smallvec::SmallVec;
use web_time::Instant;

use rondel_core::anim::{self, AnimationHandle, AnimationSpec};
use rondel_core::config::WheelConfig;
use rondel_core::hit::{LayoutInfo, VisibleItem};
use rondel_core::session::ScrollSurface;
use rondel_core::signal::{Signal, signal};

struct Tween {
    from: f64,
    to: f64,
    started: Instant,
    spec: AnimationSpec,
    handle: AnimationHandle,
}

pub struct VirtualWheel {
    config: WheelConfig,
    /// Pixel scroll offset into the item column, `>= 0`.
    offset: Signal<f64>,
    dragging: Cell<bool>,
    tween: RefCell<Option<Tween>>,
}

impl VirtualWheel {
    pub fn new(config: WheelConfig) -> Self {
        let offset = signal(config.initial_native() as f64 * config.item_height as f64);
        Self {
            config,
            offset,
            dragging: Cell::new(false),
            tween: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    pub fn offset_signal(&self) -> &Signal<f64> {
        &self.offset
    }

    fn item_height(&self) -> f64 {
        self.config.item_height as f64
    }

    fn max_offset(&self) -> f64 {
        (self.config.native_len() - 1).max(0) as f64 * self.item_height()
    }

    /// Consume a drag delta in px; returns the leftover the host may hand to
    /// an outer scroll container. Interrupts any tween in flight.
    pub fn scroll_by(&self, dy: f32) -> f32 {
        self.cancel_tween();
        let before = self.offset.get();
        let new_offset = (before + dy as f64).clamp(0.0, self.max_offset());
        self.offset.set(new_offset);
        dy - (new_offset - before) as f32
    }

    pub fn begin_drag(&self) {
        self.cancel_tween();
        self.dragging.set(true);
    }

    /// Drag released: snap to the nearest item slot.
    pub fn end_drag(&self) -> AnimationHandle {
        self.dragging.set(false);
        let h = self.item_height();
        if h <= 0.0 {
            return AnimationHandle::completed();
        }
        let target = (self.offset.get() / h).round() * h;
        self.animate_offset(target, AnimationSpec::fast())
    }

    /// Advance the tween one frame; true while still animating.
    pub fn tick(&self) -> bool {
        let (from, to, started, spec, handle) = {
            let slot = self.tween.borrow();
            let Some(tween) = slot.as_ref() else {
                return false;
            };
            (
                tween.from,
                tween.to,
                tween.started,
                tween.spec,
                tween.handle.clone(),
            )
        };

        if handle.is_settled() {
            // Cancelled from outside; leave the offset where it is.
            *self.tween.borrow_mut() = None;
            return false;
        }

        let elapsed = anim::now().saturating_duration_since(started);
        if spec.duration.is_zero() || elapsed >= spec.duration {
            self.offset.set(to);
            *self.tween.borrow_mut() = None;
            handle.complete();
            return false;
        }

        let t = elapsed.as_secs_f32() / spec.duration.as_secs_f32();
        let eased = spec.easing.interpolate(t) as f64;
        self.offset.set(from + (to - from) * eased);
        true
    }

    fn cancel_tween(&self) {
        if let Some(tween) = self.tween.borrow_mut().take() {
            tween.handle.cancel();
        }
    }

    fn animate_offset(&self, to: f64, spec: AnimationSpec) -> AnimationHandle {
        self.cancel_tween();
        let from = self.offset.get();
        let to = to.clamp(0.0, self.max_offset());
        if (to - from).abs() < f64::EPSILON {
            return AnimationHandle::completed();
        }
        let handle = AnimationHandle::new();
        *self.tween.borrow_mut() = Some(Tween {
            from,
            to,
            started: anim::now(),
            spec,
            handle: handle.clone(),
        });
        handle
    }
}

impl ScrollSurface for VirtualWheel {
    fn layout_info(&self) -> LayoutInfo {
        let h = self.item_height();
        let viewport_height = self.config.column_height();
        let before_padding = self.config.edge_offset();
        let native_len = self.config.native_len();

        let mut visible: SmallVec<[VisibleItem; 16]> = SmallVec::new();
        if h > 0.0 && native_len > 0 {
            let offset = self.offset.get();
            let center = (offset / h).round() as i64;
            let span = self.config.visible_items() as i64 / 2 + 1;
            for i in (center - span)..=(center + span) {
                if i < 0 || i >= native_len {
                    continue;
                }
                // Differences of huge offsets stay small; only then narrow
                // back down to f32.
                let item_offset = (i as f64 * h - offset) as f32;
                let top = before_padding + item_offset;
                if top + h as f32 <= 0.0 || top >= viewport_height {
                    continue;
                }
                visible.push(VisibleItem {
                    index: i,
                    offset: item_offset,
                    size: h as f32,
                });
            }
        }

        LayoutInfo {
            visible,
            viewport_height,
            before_padding,
        }
    }

    fn animate_scroll_to(&self, native: i64) -> AnimationHandle {
        let native = native.clamp(0, (self.config.native_len() - 1).max(0));
        log::trace!("virtual wheel: animate to native {native}");
        self.animate_offset(native as f64 * self.item_height(), AnimationSpec::default())
    }

    fn is_scroll_in_progress(&self) -> bool {
        self.dragging.get() || self.tween.borrow().is_some()
    }

    fn can_scroll_forward(&self) -> bool {
        self.offset.get() < self.max_offset()
    }

    fn can_scroll_backward(&self) -> bool {
        self.offset.get() > 0.0
    }
}
