//! Timed state machines driven by cancellable timers.
//!
//! A [`Runner`] owns the current state of a [`Steps`] machine together with
//! the guard of its one pending timer. Dropping the runner drops the guard,
//! which cancels the timer, so nothing can touch the state after teardown.

use std::{cell::RefCell, rc::Rc};

/// Schedules one-shot tasks. Dropping the returned guard cancels the task
/// if it has not fired yet.
pub trait Scheduler: 'static {
    type Guard: 'static;

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Guard;
}

pub trait Steps: Clone + 'static {
    /// Delay before the next state, or `None` once the machine has settled.
    fn next(&self) -> Option<(u32, Self)>;
}

pub struct Runner<S: Scheduler, M: Steps> {
    inner: Rc<RefCell<Inner<S, M>>>,
}

struct Inner<S: Scheduler, M> {
    scheduler: S,
    state: M,
    pending: Option<S::Guard>,
    // Guard of the timer that fired last. It is released on the following
    // step so a timer is never freed from inside its own callback.
    spent: Option<S::Guard>,
    on_change: Rc<dyn Fn(&M)>,
}

impl<S: Scheduler, M: Steps> Runner<S, M> {
    pub fn start(scheduler: S, initial: M, on_change: impl Fn(&M) + 'static) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            scheduler,
            state: initial,
            pending: None,
            spent: None,
            on_change: Rc::new(on_change),
        }));
        arm(&inner);
        Self { inner }
    }

    pub fn state(&self) -> M {
        self.inner.borrow().state.clone()
    }

    pub fn is_settled(&self) -> bool {
        self.inner.borrow().pending.is_none()
    }
}

fn arm<S: Scheduler, M: Steps>(inner: &Rc<RefCell<Inner<S, M>>>) {
    let mut slot = inner.borrow_mut();
    let Some((delay_ms, next)) = slot.state.next() else {
        slot.pending = None;
        return;
    };

    let weak = Rc::downgrade(inner);
    let guard = slot.scheduler.after(
        delay_ms,
        Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let on_change = {
                let mut slot = inner.borrow_mut();
                slot.spent = slot.pending.take();
                slot.state = next.clone();
                Rc::clone(&slot.on_change)
            };
            on_change(&next);
            arm(&inner);
        }),
    );
    slot.pending = Some(guard);
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, PartialEq, Debug)]
    struct Countdown(u32);

    impl Steps for Countdown {
        fn next(&self) -> Option<(u32, Self)> {
            (self.0 > 0).then(|| (10, Countdown(self.0 - 1)))
        }
    }

    fn counting_runner(
        scheduler: &ManualScheduler,
        from: u32,
    ) -> (Runner<ManualScheduler, Countdown>, Rc<Cell<u32>>) {
        let changes = Rc::new(Cell::new(0));
        let seen = Rc::clone(&changes);
        let runner = Runner::start(scheduler.clone(), Countdown(from), move |_| {
            seen.set(seen.get() + 1)
        });
        (runner, changes)
    }

    #[test]
    fn runner_steps_until_settled() {
        let scheduler = ManualScheduler::default();
        let (runner, changes) = counting_runner(&scheduler, 3);

        scheduler.advance(25);
        assert_eq!(runner.state(), Countdown(1));
        assert_eq!(changes.get(), 2);

        scheduler.advance(100);
        assert_eq!(runner.state(), Countdown(0));
        assert_eq!(changes.get(), 3);
        assert!(runner.is_settled());
        assert_eq!(scheduler.live(), 0);
    }

    #[test]
    fn dropping_the_runner_cancels_the_pending_timer() {
        let scheduler = ManualScheduler::default();
        let (runner, changes) = counting_runner(&scheduler, 5);

        scheduler.advance(15);
        assert_eq!(changes.get(), 1);
        assert_eq!(scheduler.live(), 1);

        drop(runner);
        assert_eq!(scheduler.live(), 0);

        scheduler.advance(1_000);
        assert_eq!(changes.get(), 1);
    }

    #[test]
    fn settled_machine_never_schedules() {
        let scheduler = ManualScheduler::default();
        let (runner, changes) = counting_runner(&scheduler, 0);

        assert!(runner.is_settled());
        scheduler.advance(1_000);
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn independent_runners_do_not_share_timers() {
        let scheduler = ManualScheduler::default();
        let (first, first_changes) = counting_runner(&scheduler, 5);
        let (second, second_changes) = counting_runner(&scheduler, 5);

        scheduler.advance(10);
        drop(first);
        scheduler.advance(30);

        assert_eq!(first_changes.get(), 1);
        assert_eq!(second_changes.get(), 4);
        assert_eq!(second.state(), Countdown(1));
    }

    #[derive(Clone, Default)]
    struct Immediate {
        queue: Rc<RefCell<Vec<(Rc<Cell<bool>>, Box<dyn FnOnce()>)>>>,
        freed_while_running: Rc<Cell<u32>>,
    }

    // Records a drop that happens while its own task is still executing.
    struct RunningGuard {
        running: Rc<Cell<bool>>,
        freed_while_running: Rc<Cell<u32>>,
    }

    impl Drop for RunningGuard {
        fn drop(&mut self) {
            if self.running.get() {
                self.freed_while_running.set(self.freed_while_running.get() + 1);
            }
        }
    }

    impl Scheduler for Immediate {
        type Guard = RunningGuard;

        fn after(&self, _delay_ms: u32, task: Box<dyn FnOnce()>) -> RunningGuard {
            let running = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push((Rc::clone(&running), task));
            RunningGuard {
                running,
                freed_while_running: Rc::clone(&self.freed_while_running),
            }
        }
    }

    impl Immediate {
        fn drain(&self) {
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    (!queue.is_empty()).then(|| queue.remove(0))
                };
                let Some((running, task)) = next else {
                    break;
                };
                running.set(true);
                task();
                running.set(false);
            }
        }
    }

    #[derive(Clone)]
    struct Burst(u32);

    impl Steps for Burst {
        fn next(&self) -> Option<(u32, Self)> {
            (self.0 > 0).then(|| (0, Burst(self.0 - 1)))
        }
    }

    #[test]
    fn fired_guard_outlives_its_own_callback() {
        let scheduler = Immediate::default();
        let runner = Runner::start(scheduler.clone(), Burst(5), |_| {});

        scheduler.drain();

        assert!(runner.is_settled());
        assert_eq!(runner.state().0, 0);
        assert_eq!(scheduler.freed_while_running.get(), 0);

        drop(runner);
        assert_eq!(scheduler.freed_while_running.get(), 0);
    }
}
