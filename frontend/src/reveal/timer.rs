use gloo_timers::callback::Timeout;

/// Schedules a one-shot deferred task. Dropping the returned task cancels it.
pub trait Scheduler {
    type Task;

    fn schedule<F>(&self, delay_ms: u32, task: F) -> Self::Task
    where
        F: FnOnce() + 'static;
}

/// Runs tasks on the browser event loop via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Task = Timeout;

    fn schedule<F>(&self, delay_ms: u32, task: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(delay_ms, task)
    }
}

#[cfg(test)]
pub mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct Entry {
        id: u64,
        due: u64,
        job: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        entries: Vec<Entry>,
    }

    /// Deterministic clock for tests: time only moves through `advance`.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualTask {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualTask {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().entries.retain(|entry| entry.id != self.id);
            }
        }
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.queue.borrow().entries.len()
        }

        /// Moves the clock forward, running every task that falls due on the way.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    let due = queue
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, entry)| entry.due <= target)
                        .min_by_key(|(_, entry)| (entry.due, entry.id))
                        .map(|(idx, _)| idx);
                    due.map(|idx| {
                        let entry = queue.entries.remove(idx);
                        queue.now = entry.due;
                        entry
                    })
                };
                match next {
                    Some(entry) => (entry.job)(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Task = ManualTask;

        fn schedule<F>(&self, delay_ms: u32, task: F) -> ManualTask
        where
            F: FnOnce() + 'static,
        {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + u64::from(delay_ms);
            queue.entries.push(Entry {
                id,
                due,
                job: Box::new(task),
            });
            ManualTask {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn test_runs_when_due() {
            let scheduler = ManualScheduler::default();
            let fired = Rc::new(Cell::new(false));
            let _task = scheduler.schedule(100, {
                let fired = fired.clone();
                move || fired.set(true)
            });

            scheduler.advance(99);
            assert!(!fired.get());
            scheduler.advance(1);
            assert!(fired.get());
            assert_eq!(scheduler.now(), 100);
            assert_eq!(scheduler.pending(), 0);
        }

        #[test]
        fn test_drop_cancels() {
            let scheduler = ManualScheduler::default();
            let fired = Rc::new(Cell::new(false));
            let task = scheduler.schedule(10, {
                let fired = fired.clone();
                move || fired.set(true)
            });
            drop(task);

            scheduler.advance(50);
            assert!(!fired.get());
        }
    }
}
