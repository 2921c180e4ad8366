use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use thiserror::Error;

/// Browsers clamp nested timers; a zero period would also spin the manual queue forever.
const MIN_PERIOD: Duration = Duration::from_millis(1);

pub type IntervalTask = Box<dyn FnMut()>;
pub type TimeoutTask = Box<dyn FnOnce()>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("timer rejected by host: {0}")]
    Rejected(String),
}

/// Single-threaded timer source. Every task runs to completion before the next one starts.
pub trait Scheduler {
    fn set_interval(&self, period: Duration, task: IntervalTask)
        -> Result<TaskHandle, ScheduleError>;

    fn set_timeout(&self, delay: Duration, task: TimeoutTask) -> Result<TaskHandle, ScheduleError>;
}

/// Owned cancellation for a scheduled task. Cancelling twice is a no-op, and dropping the
/// handle cancels the task.
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

enum TaskKind {
    Interval {
        period: Duration,
        task: Rc<RefCell<IntervalTask>>,
    },
    Timeout(TimeoutTask),
}

struct Entry {
    due: Duration,
    kind: TaskKind,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<u64, Entry>,
}

impl Queue {
    fn push(&mut self, due: Duration, kind: TaskKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.insert(id, Entry { due, kind });
        id
    }

    /// Earliest task due at or before `limit`; ties go to the task scheduled first.
    fn next_due(&self, limit: Duration) -> Option<(u64, Duration)> {
        self.tasks
            .iter()
            .filter(|(_, entry)| entry.due <= limit)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, entry)| (*id, entry.due))
    }
}

/// Deterministic scheduler driven by a virtual clock.
///
/// Time only moves when [`ManualScheduler::advance`] is called, which makes it possible to
/// step timers one millisecond at a time in tests or in a headless host.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }

    /// Moves the virtual clock forward, running every task that comes due on the way.
    /// Returns how many task invocations happened. The clock stops at `Duration::MAX`.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.queue.borrow().now.saturating_add(by);
        let mut ran = 0;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let Some((id, due)) = queue.next_due(target) else {
                    break;
                };
                queue.now = due;
                match queue.tasks.remove(&id) {
                    Some(Entry {
                        kind: TaskKind::Interval { period, task },
                        ..
                    }) => {
                        // an interval whose next run is past the end of time is retired
                        if let Some(next_due) = due.checked_add(period) {
                            queue.tasks.insert(
                                id,
                                Entry {
                                    due: next_due,
                                    kind: TaskKind::Interval {
                                        period,
                                        task: Rc::clone(&task),
                                    },
                                },
                            );
                        }
                        Runnable::Interval(task)
                    }
                    Some(Entry {
                        kind: TaskKind::Timeout(task),
                        ..
                    }) => Runnable::Timeout(task),
                    None => break,
                }
            };
            // the queue borrow is released here so tasks may schedule or cancel
            match next {
                Runnable::Interval(task) => (*task.borrow_mut())(),
                Runnable::Timeout(task) => task(),
            }
            ran += 1;
        }
        self.queue.borrow_mut().now = target;
        ran
    }

    fn handle_for(&self, id: u64) -> TaskHandle {
        let queue: Weak<RefCell<Queue>> = Rc::downgrade(&self.queue);
        TaskHandle::new(move || {
            if let Some(queue) = queue.upgrade() {
                let removed = queue.borrow_mut().tasks.remove(&id);
                // dropped outside the borrow: the task may own handles of its own
                drop(removed);
            }
        })
    }
}

enum Runnable {
    Interval(Rc<RefCell<IntervalTask>>),
    Timeout(TimeoutTask),
}

impl Scheduler for ManualScheduler {
    fn set_interval(
        &self,
        period: Duration,
        task: IntervalTask,
    ) -> Result<TaskHandle, ScheduleError> {
        let period = period.max(MIN_PERIOD);
        let id = {
            let mut queue = self.queue.borrow_mut();
            let due = queue.now.saturating_add(period);
            queue.push(
                due,
                TaskKind::Interval {
                    period,
                    task: Rc::new(RefCell::new(task)),
                },
            )
        };
        Ok(self.handle_for(id))
    }

    fn set_timeout(&self, delay: Duration, task: TimeoutTask) -> Result<TaskHandle, ScheduleError> {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let due = queue.now.saturating_add(delay);
            queue.push(due, TaskKind::Timeout(task))
        };
        Ok(self.handle_for(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_interval_fires_once_per_period() {
        let scheduler = ManualScheduler::new();
        let (count, task) = counter();
        let _handle = scheduler
            .set_interval(Duration::from_millis(1000), Box::new(task))
            .unwrap();

        scheduler.advance(Duration::from_millis(999));
        assert_eq!(count.get(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(count.get(), 1);
        scheduler.advance(Duration::from_millis(5000));
        assert_eq!(count.get(), 6);
        assert_eq!(scheduler.now(), Duration::from_millis(6000));
    }

    #[test]
    fn test_timeout_fires_once() {
        let scheduler = ManualScheduler::new();
        let (count, mut task) = counter();
        let _handle = scheduler
            .set_timeout(Duration::from_millis(200), Box::new(move || task()))
            .unwrap();

        assert_eq!(scheduler.advance(Duration::from_millis(199)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel_and_drop_stop_tasks() {
        let scheduler = ManualScheduler::new();
        let (count, task) = counter();
        let mut handle = scheduler
            .set_interval(Duration::from_millis(10), Box::new(task))
            .unwrap();
        scheduler.advance(Duration::from_millis(30));
        assert_eq!(count.get(), 3);

        handle.cancel();
        handle.cancel();
        assert!(handle.is_cancelled());
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(count.get(), 3);

        let (dropped_count, mut task) = counter();
        let handle = scheduler
            .set_timeout(Duration::from_millis(5), Box::new(move || task()))
            .unwrap();
        drop(handle);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(dropped_count.get(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_tasks_run_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut handles = Vec::new();
        for (name, delay) in [("late", 30), ("early", 10), ("tie-a", 20), ("tie-b", 20)] {
            let order = Rc::clone(&order);
            handles.push(
                scheduler
                    .set_timeout(
                        Duration::from_millis(delay),
                        Box::new(move || order.borrow_mut().push(name)),
                    )
                    .unwrap(),
            );
        }
        scheduler.advance(Duration::from_millis(50));
        assert_eq!(*order.borrow(), vec!["early", "tie-a", "tie-b", "late"]);
    }

    #[test]
    fn test_task_can_schedule_from_inside_a_task() {
        let scheduler = ManualScheduler::new();
        let (count, mut task) = counter();
        let nested = Rc::new(RefCell::new(None::<TaskHandle>));
        let slot = Rc::clone(&nested);
        let inner = scheduler.clone();
        let _outer = scheduler
            .set_timeout(
                Duration::from_millis(10),
                Box::new(move || {
                    let handle = inner
                        .set_timeout(Duration::from_millis(10), Box::new(move || task()))
                        .unwrap();
                    *slot.borrow_mut() = Some(handle);
                }),
            )
            .unwrap();

        scheduler.advance(Duration::from_millis(20));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_advance_saturates_at_max() {
        let scheduler = ManualScheduler::new();
        let (count, mut task) = counter();
        let _handle = scheduler
            .set_timeout(Duration::from_millis(10), Box::new(move || task()))
            .unwrap();
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(scheduler.advance(Duration::MAX), 1);
        assert_eq!(scheduler.now(), Duration::MAX);
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_far_deadlines_do_not_overflow() {
        let scheduler = ManualScheduler::new();
        scheduler.advance(Duration::from_millis(1));
        let (timeout_count, mut task) = counter();
        let _timeout = scheduler
            .set_timeout(Duration::MAX, Box::new(move || task()))
            .unwrap();
        let (interval_count, task) = counter();
        let _interval = scheduler.set_interval(Duration::MAX, Box::new(task)).unwrap();
        assert_eq!(scheduler.pending(), 2);

        assert_eq!(scheduler.advance(Duration::from_secs(3600)), 0);
        assert_eq!(scheduler.advance(Duration::MAX), 2);
        assert_eq!(timeout_count.get(), 1);
        assert_eq!(interval_count.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let scheduler = ManualScheduler::new();
        let (count, task) = counter();
        let _handle = scheduler.set_interval(Duration::ZERO, Box::new(task)).unwrap();
        scheduler.advance(Duration::from_millis(3));
        assert_eq!(count.get(), 3);
    }
}
