use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;

use crate::config::{PREFILL_DELAY_MS, RIPPLE_LIFETIME_MS, SUCCESS_HIDE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskName {
    PrefillSubject,
    RemoveRipple,
    HideSuccess,
}

impl TaskName {
    pub fn delay_ms(self) -> u32 {
        match self {
            TaskName::PrefillSubject => PREFILL_DELAY_MS,
            TaskName::RemoveRipple => RIPPLE_LIFETIME_MS,
            TaskName::HideSuccess => SUCCESS_HIDE_MS,
        }
    }
}

/// Keeps a started timer alive. Dropping it clears the timer.
pub type TimerGuard = Box<dyn Any>;

/// Callback handed to a [`Timer`]. Aliased so `automock` accepts the signature.
pub type TimerTask = Box<dyn FnOnce()>;

/// One-shot timer source the scheduler runs on.
#[cfg_attr(test, mockall::automock)]
pub trait Timer {
    fn start(&self, delay_ms: u32, task: TimerTask) -> TimerGuard;
}

pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn start(&self, delay_ms: u32, task: TimerTask) -> TimerGuard {
        Box::new(Timeout::new(delay_ms, task))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

struct Entry {
    id: TaskId,
    name: TaskName,
    fired: Rc<Cell<bool>>,
    // Pending entries must stay here; dropping the guard clears the timer.
    _guard: TimerGuard,
}

#[derive(Default)]
struct Pending {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Named delayed tasks owned by one component.
///
/// Nothing in the page cancels a task today, so every scheduled task fires.
/// Dropping the scheduler clears whatever has not fired yet.
#[derive(Clone)]
pub struct Scheduler {
    timer: Rc<dyn Timer>,
    pending: Rc<RefCell<Pending>>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::with_timer(BrowserTimer)
    }
}

impl PartialEq for Scheduler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.pending, &other.pending)
    }
}

impl Scheduler {
    pub fn with_timer(timer: impl Timer + 'static) -> Self {
        Self {
            timer: Rc::new(timer),
            pending: Rc::default(),
        }
    }

    pub fn schedule<F>(&self, name: TaskName, run: F) -> TaskId
    where
        F: FnOnce() + 'static,
    {
        let mut pending = self.pending.borrow_mut();
        // Fired entries are dropped here rather than from inside their own
        // callback.
        pending.entries.retain(|e| !e.fired.get());

        let id = TaskId(pending.next_id);
        pending.next_id += 1;

        let fired = Rc::new(Cell::new(false));
        let guard = {
            let fired = fired.clone();
            self.timer.start(
                name.delay_ms(),
                Box::new(move || {
                    debug!("task {:?} fired", name);
                    run();
                    // Set last so a task that schedules another one cannot
                    // prune its own running timer.
                    fired.set(true);
                }),
            )
        };
        debug!("scheduled {:?} in {}ms", name, name.delay_ms());
        pending.entries.push(Entry {
            id,
            name,
            fired,
            _guard: guard,
        });
        id
    }

    /// Returns true if the task had not fired yet.
    #[allow(dead_code)]
    pub fn cancel(&self, id: TaskId) -> bool {
        let mut pending = self.pending.borrow_mut();
        match pending.entries.iter().position(|e| e.id == id) {
            Some(pos) => {
                let entry = pending.entries.remove(pos);
                !entry.fired.get()
            }
            None => false,
        }
    }

    /// Returns how many tasks of this name were still pending.
    #[allow(dead_code)]
    pub fn cancel_all(&self, name: TaskName) -> usize {
        let mut pending = self.pending.borrow_mut();
        let (matching, rest): (Vec<Entry>, Vec<Entry>) = pending
            .entries
            .drain(..)
            .partition(|e| e.name == name);
        pending.entries = rest;
        matching.iter().filter(|e| !e.fired.get()).count()
    }

    #[cfg(test)]
    pub fn pending(&self, name: TaskName) -> usize {
        self.pending
            .borrow()
            .entries
            .iter()
            .filter(|e| e.name == name && !e.fired.get())
            .count()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) type Started = Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>;

    struct CountDrop(Rc<Cell<usize>>);

    impl Drop for CountDrop {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    /// Timer that holds started tasks until the test runs them. The counter
    /// tracks how many guards were dropped (i.e. timers cleared).
    pub(crate) fn manual_timer() -> (MockTimer, Started, Rc<Cell<usize>>) {
        let started: Started = Rc::default();
        let cleared = Rc::new(Cell::new(0));
        let mut timer = MockTimer::new();
        {
            let started = started.clone();
            let cleared = cleared.clone();
            timer.expect_start().returning_st(move |delay, task| {
                started.borrow_mut().push((delay, task));
                Box::new(CountDrop(cleared.clone())) as TimerGuard
            });
        }
        (timer, started, cleared)
    }

    fn fire(started: &Started, index: usize) {
        let (_, task) = started.borrow_mut().remove(index);
        task();
    }

    #[test]
    fn delays_match_page_timings() {
        assert_eq!(TaskName::PrefillSubject.delay_ms(), 500);
        assert_eq!(TaskName::RemoveRipple.delay_ms(), 600);
        assert_eq!(TaskName::HideSuccess.delay_ms(), 5_000);
    }

    #[test]
    fn schedule_starts_timer_with_task_delay() {
        let (timer, started, _) = manual_timer();
        let scheduler = Scheduler::with_timer(timer);

        scheduler.schedule(TaskName::HideSuccess, || {});
        scheduler.schedule(TaskName::RemoveRipple, || {});

        let delays: Vec<u32> = started.borrow().iter().map(|(d, _)| *d).collect();
        assert_eq!(delays, vec![5_000, 600]);
        assert_eq!(scheduler.pending(TaskName::HideSuccess), 1);
        assert_eq!(scheduler.pending(TaskName::RemoveRipple), 1);
    }

    #[test]
    fn firing_runs_task_and_clears_pending() {
        let (timer, started, _) = manual_timer();
        let scheduler = Scheduler::with_timer(timer);
        let ran = Rc::new(Cell::new(false));
        {
            let ran = ran.clone();
            scheduler.schedule(TaskName::HideSuccess, move || ran.set(true));
        }

        fire(&started, 0);

        assert!(ran.get());
        assert_eq!(scheduler.pending(TaskName::HideSuccess), 0);
    }

    #[test]
    fn cancel_reports_pending_only() {
        let (timer, started, cleared) = manual_timer();
        let scheduler = Scheduler::with_timer(timer);
        let live = scheduler.schedule(TaskName::RemoveRipple, || {});
        let done = scheduler.schedule(TaskName::RemoveRipple, || {});
        fire(&started, 1);

        assert!(scheduler.cancel(live));
        assert_eq!(cleared.get(), 1);
        assert!(!scheduler.cancel(live));
        assert!(!scheduler.cancel(done));
        assert!(!scheduler.cancel(TaskId(99)));
        assert_eq!(scheduler.pending(TaskName::RemoveRipple), 0);
    }

    #[test]
    fn cancel_all_counts_unfired_tasks_of_that_name() {
        let (timer, started, _) = manual_timer();
        let scheduler = Scheduler::with_timer(timer);
        scheduler.schedule(TaskName::RemoveRipple, || {});
        scheduler.schedule(TaskName::RemoveRipple, || {});
        scheduler.schedule(TaskName::RemoveRipple, || {});
        scheduler.schedule(TaskName::HideSuccess, || {});
        fire(&started, 0);

        assert_eq!(scheduler.cancel_all(TaskName::RemoveRipple), 2);
        assert_eq!(scheduler.pending(TaskName::RemoveRipple), 0);
        assert_eq!(scheduler.pending(TaskName::HideSuccess), 1);
        assert_eq!(scheduler.cancel_all(TaskName::RemoveRipple), 0);
    }

    #[test]
    fn fired_entries_are_dropped_on_next_schedule() {
        let (timer, started, cleared) = manual_timer();
        let scheduler = Scheduler::with_timer(timer);
        scheduler.schedule(TaskName::RemoveRipple, || {});
        fire(&started, 0);
        assert_eq!(cleared.get(), 0);

        scheduler.schedule(TaskName::RemoveRipple, || {});

        assert_eq!(cleared.get(), 1);
        assert_eq!(scheduler.pending(TaskName::RemoveRipple), 1);
    }

    #[test]
    fn task_may_schedule_another_while_running() {
        let (timer, started, cleared) = manual_timer();
        let scheduler = Scheduler::with_timer(timer);
        {
            let inner = scheduler.clone();
            scheduler.schedule(TaskName::PrefillSubject, move || {
                inner.schedule(TaskName::HideSuccess, || {});
            });
        }

        fire(&started, 0);

        // The running entry was not pruned by the nested schedule.
        assert_eq!(cleared.get(), 0);
        assert_eq!(scheduler.pending(TaskName::HideSuccess), 1);
        assert_eq!(scheduler.pending(TaskName::PrefillSubject), 0);
    }

    #[test]
    fn dropping_scheduler_clears_pending_timers() {
        let (timer, _started, cleared) = manual_timer();
        let scheduler = Scheduler::with_timer(timer);
        scheduler.schedule(TaskName::HideSuccess, || {});
        scheduler.schedule(TaskName::RemoveRipple, || {});

        drop(scheduler);

        assert_eq!(cleared.get(), 2);
    }
}
