#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use smallvec::SmallVec;

    use crate::anim::{AnimationHandle, Phase, join_all};
    use crate::composite::{GroupError, WheelGroup};
    use crate::config::WheelConfig;
    use crate::hit::{LayoutInfo, VisibleItem};
    use crate::index::{INFINITE_OFFSET, MAX_NATIVE};
    use crate::session::{SavedWheel, ScrollSurface, WheelSession};
    use crate::signal::signal;

    /// Scripted stand-in for the host list. Scroll requests are recorded
    /// and stay pending until the test completes or interrupts them.
    struct FakeSurface {
        config: WheelConfig,
        native: Cell<i64>,
        requests: RefCell<Vec<i64>>,
        pending: RefCell<Option<(i64, AnimationHandle)>>,
    }

    impl FakeSurface {
        fn new(config: WheelConfig) -> Rc<Self> {
            let native = config.initial_native();
            Rc::new(Self {
                config,
                native: Cell::new(native),
                requests: RefCell::new(Vec::new()),
                pending: RefCell::new(None),
            })
        }

        /// Lands the pending scroll on its target and settles its handle.
        fn finish(&self) {
            if let Some((target, handle)) = self.pending.borrow_mut().take() {
                self.native.set(target);
                handle.complete();
            }
        }

        /// A user drag interrupting the programmatic scroll mid-flight.
        fn interrupt(&self) {
            if let Some((_, handle)) = self.pending.borrow_mut().take() {
                handle.cancel();
            }
        }

        fn requests(&self) -> Vec<i64> {
            self.requests.borrow().clone()
        }
    }

    impl ScrollSurface for FakeSurface {
        fn layout_info(&self) -> LayoutInfo {
            let h = self.config.item_height;
            let native = self.native.get();
            let half = (self.config.visible_items() as i64 - 1) / 2;
            let first = (native - half).max(0);
            let last = (native + half).min(self.config.native_len() - 1);
            let visible: SmallVec<[VisibleItem; 16]> = (first..=last)
                .map(|i| VisibleItem {
                    index: i,
                    offset: (i - native) as f32 * h,
                    size: h,
                })
                .collect();
            LayoutInfo {
                visible,
                viewport_height: self.config.column_height(),
                before_padding: self.config.edge_offset(),
            }
        }

        fn animate_scroll_to(&self, native: i64) -> AnimationHandle {
            self.requests.borrow_mut().push(native);
            if let Some((_, prev)) = self.pending.borrow_mut().take() {
                prev.cancel();
            }
            let handle = AnimationHandle::new();
            *self.pending.borrow_mut() = Some((native, handle.clone()));
            handle
        }

        fn is_scroll_in_progress(&self) -> bool {
            self.pending.borrow().is_some()
        }

        fn can_scroll_forward(&self) -> bool {
            self.native.get() + 1 < self.config.native_len()
        }

        fn can_scroll_backward(&self) -> bool {
            self.native.get() > 0
        }
    }

    fn finite_wheel(count: usize, initial: usize) -> (WheelSession, Rc<FakeSurface>) {
        let config = WheelConfig::new(count).initial_index(initial);
        let surface = FakeSurface::new(config.clone());
        (WheelSession::new(config, surface.clone()), surface)
    }

    fn infinite_wheel(count: usize, initial: usize) -> (WheelSession, Rc<FakeSurface>) {
        let config = WheelConfig::new(count).initial_index(initial).infinite(true);
        let surface = FakeSurface::new(config.clone());
        (WheelSession::new(config, surface.clone()), surface)
    }

    #[test]
    fn selection_follows_the_midline_rule() {
        let (session, surface) = finite_wheel(10, 4);
        assert_eq!(session.selected_index(10), 4);
        surface.native.set(7);
        assert_eq!(session.selected_index(10), 7);
    }

    #[test]
    fn selection_unbiases_infinite_natives() {
        let (session, surface) = infinite_wheel(10, 8);
        assert_eq!(session.selected_index(10), 8);
        surface.native.set(INFINITE_OFFSET + 23);
        assert_eq!(session.selected_index(10), 3);
    }

    #[test]
    fn animate_to_current_index_issues_no_scroll() {
        let (session, surface) = finite_wheel(10, 4);
        let handle = session.animate_to_index(4, 10);
        assert!(handle.is_settled());
        assert!(surface.requests().is_empty());
        assert!(!session.is_programmatic());
    }

    #[test]
    fn finite_wheel_scrolls_directly_to_target() {
        let (session, surface) = finite_wheel(10, 4);
        session.animate_to_index(0, 10);
        assert_eq!(surface.requests(), vec![0]);
    }

    #[test]
    fn out_of_range_targets_are_ignored() {
        let (session, surface) = finite_wheel(10, 4);
        session.animate_to_index(-1, 10);
        session.animate_to_index(10, 10);
        session.animate_to_index(3, 0);
        assert!(surface.requests().is_empty());
    }

    #[test]
    fn infinite_wheel_takes_the_short_way_around() {
        // Logical 8 -> 1 in a 10-ring: forward 3 beats backward -7.
        let (session, surface) = infinite_wheel(10, 8);
        session.animate_to_index(1, 10);
        assert_eq!(surface.requests(), vec![INFINITE_OFFSET + 8 + 3]);
    }

    #[test]
    fn tie_goes_forward() {
        let (session, surface) = infinite_wheel(10, 0);
        session.animate_to_index(5, 10);
        assert_eq!(surface.requests(), vec![INFINITE_OFFSET + 5]);
    }

    #[test]
    fn falls_back_when_primary_overflows_native_space() {
        let (session, surface) = infinite_wheel(10, 0);
        surface.native.set(MAX_NATIVE - 1); // logical 3
        assert_eq!(session.selected_index(10), 3);
        session.animate_to_index(4, 10);
        // Forward +1 would hit the end of the native space; go -9 instead.
        assert_eq!(surface.requests(), vec![MAX_NATIVE - 10]);
    }

    #[test]
    fn falls_back_when_primary_underflows_native_space() {
        let (session, surface) = infinite_wheel(10, 0);
        surface.native.set(1); // logical 8
        assert_eq!(session.selected_index(10), 8);
        session.animate_to_index(6, 10);
        // Backward -2 would underflow; take the long way, +8.
        assert_eq!(surface.requests(), vec![9]);
    }

    #[test]
    fn programmatic_flag_spans_the_animation() {
        let (session, surface) = finite_wheel(10, 4);
        session.animate_to_index(7, 10);
        assert!(session.is_programmatic());
        surface.finish();
        assert!(!session.is_programmatic());
        assert_eq!(session.selected_index(10), 7);
    }

    #[test]
    fn programmatic_flag_clears_on_user_interrupt() {
        let (session, surface) = finite_wheel(10, 4);
        let handle = session.animate_to_index(7, 10);
        assert!(session.is_programmatic());
        surface.interrupt();
        assert_eq!(handle.phase(), Phase::Cancelled);
        assert!(!session.is_programmatic());
    }

    #[test]
    fn newer_request_cancels_the_older() {
        let (session, surface) = finite_wheel(10, 4);
        let first = session.animate_to_index(9, 10);
        let second = session.animate_to_index(0, 10);
        assert_eq!(first.phase(), Phase::Cancelled);
        assert!(!second.is_settled());
        assert!(session.is_programmatic());
        assert_eq!(surface.requests(), vec![9, 0]);
        surface.finish();
        assert!(!session.is_programmatic());
    }

    #[test]
    fn teardown_cancels_in_flight_animation() {
        let (session, surface) = finite_wheel(10, 4);
        let handle = session.animate_to_index(7, 10);
        drop(session);
        assert_eq!(handle.phase(), Phase::Cancelled);
        assert!(surface.is_scroll_in_progress()); // surface outlives session
    }

    #[test]
    fn join_all_waits_for_every_child() {
        let a = AnimationHandle::new();
        let b = AnimationHandle::new();
        let joined = join_all(vec![a.clone(), b.clone()]);
        a.complete();
        assert!(!joined.is_settled());
        b.complete();
        assert_eq!(joined.phase(), Phase::Completed);
    }

    #[test]
    fn join_all_reports_any_cancellation_without_hanging() {
        let a = AnimationHandle::new();
        let b = AnimationHandle::new();
        let joined = join_all(vec![a.clone(), b.clone()]);
        a.cancel();
        assert!(!joined.is_settled()); // still joining b
        b.complete();
        assert_eq!(joined.phase(), Phase::Cancelled);
    }

    #[test]
    fn cancelling_the_join_cancels_children() {
        let a = AnimationHandle::new();
        let b = AnimationHandle::new();
        let joined = join_all(vec![a.clone(), b.clone()]);
        joined.cancel();
        assert_eq!(a.phase(), Phase::Cancelled);
        assert_eq!(b.phase(), Phase::Cancelled);
        assert_eq!(joined.phase(), Phase::Cancelled);
    }

    #[test]
    fn join_of_nothing_is_already_done() {
        assert_eq!(join_all(Vec::new()).phase(), Phase::Completed);
    }

    #[test]
    fn group_requires_a_wheel() {
        assert!(matches!(WheelGroup::new(Vec::new()), Err(GroupError::Empty)));
    }

    #[test]
    fn group_jump_joins_all_wheels() {
        let (day, day_surface) = infinite_wheel(31, 0);
        let (month, month_surface) = infinite_wheel(12, 0);
        let (year, year_surface) = finite_wheel(100, 0);
        let group = WheelGroup::new(vec![day, month, year]).unwrap();

        let handle = group.animate_all(&[(14, 31), (5, 12), (73, 100)]);
        assert!(!handle.is_settled());

        day_surface.finish();
        month_surface.finish();
        assert!(!handle.is_settled());
        year_surface.finish();
        assert_eq!(handle.phase(), Phase::Completed);

        assert_eq!(group.wheel(0).unwrap().selected_index(31), 14);
        assert_eq!(group.wheel(1).unwrap().selected_index(12), 5);
        assert_eq!(group.wheel(2).unwrap().selected_index(100), 73);
    }

    #[test]
    fn group_jump_with_one_interrupted_wheel_still_settles() {
        let (a, a_surface) = finite_wheel(10, 0);
        let (b, b_surface) = finite_wheel(10, 0);
        let group = WheelGroup::new(vec![a, b]).unwrap();

        let handle = group.animate_all(&[(3, 10), (7, 10)]);
        a_surface.interrupt();
        assert!(!handle.is_settled());
        b_surface.finish();
        assert_eq!(handle.phase(), Phase::Cancelled);
        // Every wheel's flag ended cleared regardless of outcome.
        assert!(!group.wheel(0).unwrap().is_programmatic());
        assert!(!group.wheel(1).unwrap().is_programmatic());
    }

    #[test]
    fn save_restore_round_trip() {
        let (session, surface) = infinite_wheel(10, 2);
        surface.native.set(INFINITE_OFFSET + 17); // logical 7
        let saved = session.save();
        assert_eq!(
            saved,
            SavedWheel {
                infinite: true,
                index: 7
            }
        );

        let config = saved.apply_to(WheelConfig::new(10));
        let restored_surface = FakeSurface::new(config.clone());
        let restored = WheelSession::new(config, restored_surface);
        assert_eq!(restored.selected_index(10), 7);

        let json = serde_json::to_string(&saved).unwrap();
        let back: SavedWheel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, saved);
    }

    #[test]
    fn subscribers_can_read_the_signal_they_observe() {
        let sig = signal(0);
        let seen = Rc::new(Cell::new(-1));
        sig.subscribe({
            let sig = sig.clone();
            let seen = seen.clone();
            move |_| seen.set(sig.get())
        });
        sig.set(5);
        assert_eq!(seen.get(), 5);
        sig.update(|v| *v += 1);
        assert_eq!(seen.get(), 6);
    }

    #[test]
    fn flag_subscribers_can_query_the_session() {
        let (session, surface) = finite_wheel(10, 4);
        let session = Rc::new(session);
        let observed = Rc::new(RefCell::new(Vec::new()));
        session.programmatic_signal().subscribe({
            let session = session.clone();
            let observed = observed.clone();
            move |_| observed.borrow_mut().push(session.is_programmatic())
        });

        session.animate_to_index(7, 10);
        surface.finish();
        assert_eq!(&*observed.borrow(), &[true, false]);
    }

    #[test]
    fn signal_subscriptions_can_be_removed() {
        let sig = signal(0);
        let seen = Rc::new(Cell::new(0));
        let key = sig.subscribe({
            let seen = seen.clone();
            move |v| seen.set(*v)
        });
        sig.set(5);
        assert_eq!(seen.get(), 5);
        sig.unsubscribe(key);
        sig.set(9);
        assert_eq!(seen.get(), 5);
    }
}
