use std::time::Duration;

/// Handle to a scheduled task. Canceling it removes the task from the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct PendingTimer<T> {
    handle: TimerHandle,
    deadline: Duration,
    task: T,
}

/// One-shot timers over a monotonic clock.
///
/// Tasks are plain values; the owner decides what firing means. A canceled
/// task is dropped from the queue immediately and can never be returned by
/// [`TimerQueue::pop_due`].
#[derive(Debug)]
pub struct TimerQueue<T> {
    next_handle: u64,
    pending: Vec<PendingTimer<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_handle: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to become due at `now + delay`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(PendingTimer {
            handle,
            deadline: now + delay,
            task,
        });
        handle
    }

    /// Remove a scheduled task. Returns false if it already fired or was canceled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.handle != handle);
        self.pending.len() != before
    }

    /// Remove and return the earliest task whose deadline is at or before `now`,
    /// together with that deadline. Ties fire in scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, T)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= now)
            .min_by_key(|(_, timer)| (timer.deadline, timer.handle.0))
            .map(|(index, _)| index)?;

        let timer = self.pending.remove(index);
        Some((timer.deadline, timer.task))
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_task_not_due_before_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(100), ms(500), "boot");

        assert_eq!(queue.pop_due(ms(599)), None);
        assert_eq!(queue.pop_due(ms(600)), Some((ms(600), "boot")));
        assert_eq!(queue.pop_due(ms(10_000)), None);
    }

    #[test]
    fn test_canceled_task_never_fires() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(ms(0), ms(500), "boot");

        assert!(queue.cancel(handle));
        assert_eq!(queue.pop_due(ms(10_000)), None);
        assert!(!queue.cancel(handle));
    }

    #[test]
    fn test_due_tasks_fire_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(0), ms(300), "late");
        queue.schedule(ms(0), ms(100), "early");
        queue.schedule(ms(0), ms(100), "early-second");

        assert_eq!(queue.pop_due(ms(1000)), Some((ms(100), "early")));
        assert_eq!(queue.pop_due(ms(1000)), Some((ms(100), "early-second")));
        assert_eq!(queue.pop_due(ms(1000)), Some((ms(300), "late")));
        assert_eq!(queue.pop_due(ms(1000)), None);
    }

    #[test]
    fn test_cancel_leaves_other_tasks() {
        let mut queue = TimerQueue::new();
        let first = queue.schedule(ms(0), ms(100), 1);
        queue.schedule(ms(0), ms(200), 2);

        queue.cancel(first);

        assert_eq!(queue.pop_due(ms(199)), None);
        assert_eq!(queue.pop_due(ms(200)), Some((ms(200), 2)));
        assert_eq!(queue.pop_due(ms(10_000)), None);
    }
}
