use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn fast() -> Self {
        Self {
            duration: Duration::from_millis(150),
            easing: Easing::EaseOut,
        }
    }
}

// Animation clock. The platform installs SystemClock; tests install TestClock.
pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

thread_local! {
    static CLOCK: RefCell<Rc<dyn Clock>> = RefCell::new(Rc::new(SystemClock));
}

/// Replace the animation clock for this thread.
pub fn set_clock(clock: Rc<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = clock);
}

pub fn now() -> Instant {
    CLOCK.with(|c| c.borrow().now())
}

/// A clock tests can drive deterministically.
pub struct TestClock {
    t: Cell<Instant>,
}

impl TestClock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            t: Cell::new(Instant::now()),
        })
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Terminal state of an animated scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Completed,
    Cancelled,
}

/// Shared completion state of one animated scroll request.
///
/// A handle settles exactly once, either `Completed` (the driver finished the
/// tween) or `Cancelled` (torn down, superseded, or interrupted by the user).
/// Cancellation is normal control flow, not an error: `on_settled` callbacks
/// fire for both outcomes so flags tied to the animation always clear.
#[derive(Clone)]
pub struct AnimationHandle(Rc<HandleInner>);

struct HandleInner {
    phase: Cell<Phase>,
    on_settled: RefCell<Vec<Box<dyn FnOnce(Phase)>>>,
    on_cancel: RefCell<Vec<Box<dyn Fn()>>>,
}

impl AnimationHandle {
    pub fn new() -> Self {
        Self(Rc::new(HandleInner {
            phase: Cell::new(Phase::Running),
            on_settled: RefCell::new(Vec::new()),
            on_cancel: RefCell::new(Vec::new()),
        }))
    }

    /// A handle that is already done. Used for no-op requests.
    pub fn completed() -> Self {
        let h = Self::new();
        h.settle(Phase::Completed);
        h
    }

    pub fn phase(&self) -> Phase {
        self.0.phase.get()
    }

    pub fn is_settled(&self) -> bool {
        self.0.phase.get() != Phase::Running
    }

    /// Called by the driver when the tween reaches its target.
    pub fn complete(&self) {
        self.settle(Phase::Completed);
    }

    /// Idempotent. Settles the handle as `Cancelled` and cancels any
    /// aggregated children first, so a composite never leaves a sub-wheel
    /// animation un-joined.
    pub fn cancel(&self) {
        if self.is_settled() {
            return;
        }
        let hooks = std::mem::take(&mut *self.0.on_cancel.borrow_mut());
        for hook in &hooks {
            hook();
        }
        // A hook may have settled us through a child callback chain.
        self.settle(Phase::Cancelled);
    }

    /// Runs `f` when the animation settles; immediately if it already has.
    pub fn on_settled(&self, f: impl FnOnce(Phase) + 'static) {
        let phase = self.0.phase.get();
        if phase != Phase::Running {
            f(phase);
        } else {
            self.0.on_settled.borrow_mut().push(Box::new(f));
        }
    }

    fn settle(&self, phase: Phase) {
        if self.0.phase.get() != Phase::Running {
            return;
        }
        self.0.phase.set(phase);
        let callbacks = std::mem::take(&mut *self.0.on_settled.borrow_mut());
        for cb in callbacks {
            cb(phase);
        }
    }

    fn add_cancel_hook(&self, f: impl Fn() + 'static) {
        self.0.on_cancel.borrow_mut().push(Box::new(f));
    }
}

impl Default for AnimationHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Joins several independent animations into one handle.
///
/// The aggregate settles only once *every* child has settled, whatever each
/// one settled as (join-all, never fail-fast). It reports `Cancelled` when
/// any child was cancelled, `Completed` otherwise. Cancelling the aggregate
/// cancels all still-running children.
pub fn join_all(children: Vec<AnimationHandle>) -> AnimationHandle {
    let agg = AnimationHandle::new();
    if children.is_empty() {
        agg.settle(Phase::Completed);
        return agg;
    }

    let remaining = Rc::new(Cell::new(children.len()));
    let any_cancelled = Rc::new(Cell::new(false));
    for child in &children {
        let agg = agg.clone();
        let remaining = remaining.clone();
        let any_cancelled = any_cancelled.clone();
        child.on_settled(move |phase| {
            if phase == Phase::Cancelled {
                any_cancelled.set(true);
            }
            remaining.set(remaining.get() - 1);
            if remaining.get() == 0 {
                agg.settle(if any_cancelled.get() {
                    Phase::Cancelled
                } else {
                    Phase::Completed
                });
            }
        });
    }

    if !agg.is_settled() {
        agg.add_cancel_hook(move || {
            for child in &children {
                child.cancel();
            }
        });
    }

    agg
}
