use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use super::{TaskId, Timer};

/// A [`Timer`] backed by tokio tasks.
///
/// Each scheduled event is a spawned task that sleeps until its deadline. Fired events are
/// received from the [`TimerEvents`] returned by [`TokioTimer::new`]. Must be used inside a tokio
/// runtime.
pub struct TokioTimer<E> {
    next_id: u64,
    tasks: HashMap<TaskId, JoinHandle<()>>,
    live: Arc<Mutex<HashSet<TaskId>>>,
    tx: UnboundedSender<(TaskId, E)>,
}

/// The receiving half of a [`TokioTimer`].
pub struct TimerEvents<E> {
    live: Arc<Mutex<HashSet<TaskId>>>,
    rx: UnboundedReceiver<(TaskId, E)>,
}

impl<E: Send + 'static> TokioTimer<E> {
    /// Creates a new [`TokioTimer`] and the receiver of its events.
    #[must_use]
    pub fn new() -> (Self, TimerEvents<E>) {
        let (tx, rx) = unbounded_channel();
        let live = Arc::new(Mutex::new(HashSet::new()));
        (
            Self {
                next_id: 0,
                tasks: HashMap::new(),
                live: live.clone(),
                tx,
            },
            TimerEvents { live, rx },
        )
    }
}

impl<E: Send + 'static> Timer<E> for TokioTimer<E> {
    fn schedule_once(&mut self, delay: Duration, event: E) -> TaskId {
        self.tasks.retain(|_, handle| !handle.is_finished());

        let id = TaskId(self.next_id);
        self.next_id += 1;
        if let Ok(mut live) = self.live.lock() {
            live.insert(id);
        }
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send((id, event));
        });
        self.tasks.insert(id, handle);
        id
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
        }
        self.live.lock().is_ok_and(|mut live| live.remove(&id))
    }
}

impl<E> Drop for TokioTimer<E> {
    fn drop(&mut self) {
        self.tasks.drain().for_each(|(_, handle)| handle.abort());
    }
}

impl<E> TimerEvents<E> {
    /// Waits for the next event that was not cancelled.
    ///
    /// Returns `None` once the [`TokioTimer`] is dropped and every fired event was received.
    pub async fn recv(&mut self) -> Option<E> {
        loop {
            let (id, event) = self.rx.recv().await?;
            if self.live.lock().is_ok_and(|mut live| live.remove(&id)) {
                return Some(event);
            }
            tracing::trace!("Dropping cancelled timer task {:?}", id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (mut timer, mut events) = TokioTimer::new();
        timer.schedule_once(Duration::from_millis(200), 2);
        timer.schedule_once(Duration::from_millis(100), 1);

        let start = tokio::time::Instant::now();
        assert_eq!(Some(1), events.recv().await);
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert_eq!(Some(2), events.recv().await);
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_task_never_fires() {
        let (mut timer, mut events) = TokioTimer::new();
        let a = timer.schedule_once(Duration::from_millis(100), 'a');
        timer.schedule_once(Duration::from_millis(200), 'b');

        assert!(timer.cancel(a));
        assert!(!timer.cancel(a));
        assert_eq!(Some('b'), events.recv().await);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_fire_drops_queued_event() {
        let (mut timer, mut events) = TokioTimer::new();
        let a = timer.schedule_once(Duration::ZERO, 'a');
        timer.schedule_once(Duration::from_millis(10), 'b');

        tokio::time::sleep(Duration::from_millis(1)).await;
        timer.cancel(a);
        assert_eq!(Some('b'), events.recv().await);
    }
}
