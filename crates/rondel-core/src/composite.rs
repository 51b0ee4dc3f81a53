//! Coordination of several independent wheels (day/month/year style
//! pickers). Each wheel animates on its own; a composite jump launches one
//! animation per wheel and joins them all, so one wheel being cancelled or
//! finishing early never leaves the others un-joined.

use thiserror::Error;

use crate::anim::{AnimationHandle, join_all};
use crate::session::WheelSession;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("wheel group requires at least one wheel")]
    Empty,
}

pub struct WheelGroup {
    wheels: Vec<WheelSession>,
}

impl WheelGroup {
    /// The one fail-fast construction check in this crate: a composite of
    /// zero wheels is a static misconfiguration.
    pub fn new(wheels: Vec<WheelSession>) -> Result<Self, GroupError> {
        if wheels.is_empty() {
            return Err(GroupError::Empty);
        }
        Ok(Self { wheels })
    }

    pub fn wheels(&self) -> &[WheelSession] {
        &self.wheels
    }

    pub fn wheel(&self, i: usize) -> Option<&WheelSession> {
        self.wheels.get(i)
    }

    /// One logical jump across all wheels: `targets[i]` is the
    /// `(logical index, item count)` pair for wheel `i`. Returns the joined
    /// handle; it settles once every sub-wheel animation has.
    pub fn animate_all(&self, targets: &[(i64, usize)]) -> AnimationHandle {
        let handles: Vec<AnimationHandle> = self
            .wheels
            .iter()
            .zip(targets)
            .map(|(wheel, &(target, count))| wheel.animate_to_index(target, count))
            .collect();
        join_all(handles)
    }
}
