use slotmap::{DefaultKey, SlotMap};
use std::cell::RefCell;
use std::rc::Rc;

pub type SubKey = DefaultKey;

/// Observable value. Selection and render parameters are *derived* from the
/// scroll position on every read; the signal only carries the raw position
/// and notifies subscribers when it moves.
///
/// Subscribers run outside the cell borrow, so a callback may read the
/// signal (or the session holding it) it is observing.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: SlotMap<DefaultKey, Rc<dyn Fn(&T)>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SlotMap::new(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    pub fn set(&self, v: T)
    where
        T: Clone,
    {
        let subs: Vec<Rc<dyn Fn(&T)>> = {
            let mut inner = self.0.borrow_mut();
            inner.value = v.clone();
            inner.subs.values().cloned().collect()
        };
        for s in &subs {
            s(&v);
        }
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        let (value, subs): (T, Vec<Rc<dyn Fn(&T)>>) = {
            let mut inner = self.0.borrow_mut();
            f(&mut inner.value);
            (inner.value.clone(), inner.subs.values().cloned().collect())
        };
        for s in &subs {
            s(&value);
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubKey {
        self.0.borrow_mut().subs.insert(Rc::new(f))
    }

    /// Wheels are torn down with their UI node; dropping a subscription must
    /// not leave a callback into a dead widget behind.
    pub fn unsubscribe(&self, key: SubKey) {
        self.0.borrow_mut().subs.remove(key);
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
