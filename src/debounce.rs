//! Debounce Timer
//!
//! Each search box owns one `Debouncer`. Scheduling a task drops the previous
//! handle, and dropping a handle cancels a timer that has not fired yet.

use gloo_timers::callback::Timeout;

/// Source of one-shot timers. Dropping the returned handle cancels the timer.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Let the timer run without keeping its handle
    fn detach(&self, handle: Self::Handle) {
        std::mem::forget(handle);
    }
}

/// `setTimeout`-backed timers
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn detach(&self, handle: Timeout) {
        handle.forget();
    }
}

pub struct Debouncer<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms, pending: None }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Run `task` after the quiet period, replacing any task still waiting
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    /// Drop the waiting task, if any. A task that already fired is unaffected.
    pub fn cancel(&mut self) {
        self.pending.take();
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::testing::ManualScheduler;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let sink = fired.clone();
        let make = move |label: &'static str| -> Box<dyn FnOnce()> {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(label))
        };
        (fired, make)
    }

    #[test]
    fn test_later_call_replaces_pending() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let (fired, task) = recorder();

        debouncer.call(task("q1"));
        clock.advance(120);
        debouncer.call(task("q2"));
        assert_eq!(clock.live_timers(), 1);

        clock.advance(299);
        assert!(fired.borrow().is_empty());
        clock.advance(1);
        assert_eq!(*fired.borrow(), vec!["q2"]);
    }

    #[test]
    fn test_quiet_period_lets_each_fire() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let (fired, task) = recorder();

        debouncer.call(task("a"));
        clock.advance(300);
        debouncer.call(task("b"));
        clock.advance(300);
        assert_eq!(*fired.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let clock = ManualScheduler::default();
        let mut debouncer = Debouncer::new(clock.clone(), 300);
        let (fired, task) = recorder();

        debouncer.call(task("a"));
        debouncer.cancel();
        clock.advance(1_000);
        assert!(fired.borrow().is_empty());
        assert_eq!(debouncer.delay_ms(), 300);
    }

    #[test]
    fn test_independent_debouncers_do_not_interfere() {
        let clock = ManualScheduler::default();
        let mut page = Debouncer::new(clock.clone(), 300);
        let mut admin = Debouncer::new(clock.clone(), 300);
        let (fired, task) = recorder();

        page.call(task("page"));
        admin.call(task("admin"));
        clock.advance(300);
        assert_eq!(*fired.borrow(), vec!["page", "admin"]);
    }
}
