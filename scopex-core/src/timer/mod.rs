#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
#[cfg(feature = "async")]
mod r#async;
mod manual;

use std::time::Duration;

#[cfg(feature = "async")]
pub use r#async::{TimerEvents, TokioTimer};
pub use manual::ManualTimer;

/// Identifies a task scheduled on a [`Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) u64);

impl TaskId {
    /// Returns the raw id.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// A service that delivers an event once after a delay.
///
/// Events are delivered back to the owner of the timer; a timer never runs user code itself.
pub trait Timer<E> {
    /// Schedules `event` to fire after `delay`.
    fn schedule_once(&mut self, delay: Duration, event: E) -> TaskId;

    /// Cancels a task that has not fired yet.
    ///
    /// Returns `false` if the task already fired or was already cancelled.
    fn cancel(&mut self, id: TaskId) -> bool;
}

impl<E> Timer<E> for Box<dyn Timer<E> + Send> {
    fn schedule_once(&mut self, delay: Duration, event: E) -> TaskId {
        self.as_mut().schedule_once(delay, event)
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        self.as_mut().cancel(id)
    }
}
