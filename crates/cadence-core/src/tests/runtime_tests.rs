use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct CountingScheduler {
    requests: Cell<usize>,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn frame_callbacks_receive_frame_time() {
    let runtime = Runtime::default();
    let seen = Rc::new(Cell::new(None));
    let registration = {
        let seen = Rc::clone(&seen);
        runtime
            .frame_clock()
            .with_frame_nanos(move |time| seen.set(Some(time)))
    };
    assert!(runtime.needs_frame());
    assert!(runtime.has_frame_callbacks());

    runtime.drain_frame_callbacks(16_000_000);

    assert_eq!(seen.get(), Some(16_000_000));
    assert!(!runtime.needs_frame());
    assert_eq!(runtime.last_frame_nanos(), Some(16_000_000));
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let fired = Rc::new(Cell::new(false));
    {
        let fired = Rc::clone(&fired);
        let registration = runtime
            .frame_clock()
            .with_frame_nanos(move |_| fired.set(true));
        drop(registration);
    }
    assert!(!runtime.has_frame_callbacks());

    runtime.drain_frame_callbacks(1);
    assert!(!fired.get());
}

#[test]
fn callbacks_registered_during_drain_run_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let keep = Rc::new(RefCell::new(Vec::new()));

    {
        let frames = Rc::clone(&frames);
        let keep_inner = Rc::clone(&keep);
        let clock = handle.frame_clock();
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            frames.borrow_mut().push(time);
            let frames = Rc::clone(&frames);
            let next = clock.with_frame_nanos(move |time| frames.borrow_mut().push(time));
            keep_inner.borrow_mut().push(next);
        });
        keep.borrow_mut().push(registration);
    }

    runtime.drain_frame_callbacks(10);
    assert_eq!(frames.borrow().as_slice(), &[10]);
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(20);
    assert_eq!(frames.borrow().as_slice(), &[10, 20]);
    assert!(!runtime.needs_frame());
}

#[test]
fn cancel_after_callback_ran_is_harmless() {
    let runtime = Runtime::default();
    let runs = Rc::new(Cell::new(0));
    let registration = {
        let runs = Rc::clone(&runs);
        runtime
            .frame_clock()
            .with_frame_nanos(move |_| runs.set(runs.get() + 1))
    };
    runtime.drain_frame_callbacks(1);
    registration.cancel();

    assert_eq!(runs.get(), 1);
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn scheduler_is_notified_on_registration() {
    let scheduler = Rc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let _registration = runtime.frame_clock().with_frame_nanos(|_| {});
    assert_eq!(scheduler.requests.get(), 1);
    runtime.handle().schedule();
    assert_eq!(scheduler.requests.get(), 2);
}

#[test]
fn handle_is_inert_after_runtime_drop() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(handle.register_frame_callback(|_| {}).is_none());
    assert!(!handle.has_frame_callbacks());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    registration.cancel();
}
