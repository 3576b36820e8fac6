use std::time::Duration;

use super::{TaskId, Timer};

#[derive(Debug)]
struct Pending<E> {
    id: TaskId,
    deadline: Duration,
    event: E,
}

/// A [`Timer`] driven by a virtual clock.
///
/// Time only moves when [`ManualTimer::advance`] is called, which makes the firing order fully
/// deterministic.
#[derive(Debug)]
pub struct ManualTimer<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<E>>,
}

impl<E> Default for ManualTimer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ManualTimer<E> {
    /// Creates a new [`ManualTimer`] at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// The current virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks that have not fired yet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no task is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending tasks as `(delay from now, event)`, in firing order.
    pub fn pending(&self) -> impl Iterator<Item = (Duration, &E)> {
        let now = self.now;
        let mut pending = self.pending.iter().collect::<Vec<_>>();
        pending.sort_by_key(|p| (p.deadline, p.id));
        pending
            .into_iter()
            .map(move |p| (p.deadline.saturating_sub(now), &p.event))
    }

    /// Moves the clock forward by `duration` and returns the events that fired, in firing order.
    pub fn advance(&mut self, duration: Duration) -> Vec<E> {
        self.now += duration;
        let now = self.now;
        let (mut fired, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.deadline <= now);
        self.pending = pending;
        fired.sort_by_key(|p| (p.deadline, p.id));
        fired.into_iter().map(|p| p.event).collect()
    }

    /// Advances the clock to the last deadline and returns every pending event.
    pub fn run_to_end(&mut self) -> Vec<E> {
        let remaining = self
            .pending
            .iter()
            .map(|p| p.deadline.saturating_sub(self.now))
            .max()
            .unwrap_or(Duration::ZERO);
        self.advance(remaining)
    }
}

impl<E> Timer<E> for ManualTimer<E> {
    fn schedule_once(&mut self, delay: Duration, event: E) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            deadline: self.now + delay,
            event,
        });
        id
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        before != self.pending.len()
    }
}
