//! Standard runtime services backed by Rust's `std` library.
//!
//! This crate provides concrete implementations of the platform abstraction
//! traits defined in `cadence-core`. The desktop launcher builds a
//! [`StdRuntime`] and feeds it frame timestamps measured from its creation.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use cadence_core::{Clock, Runtime, RuntimeHandle, RuntimeScheduler};
use log::trace;
use web_time::Instant;

/// Scheduler that records frame requests and optionally wakes the host.
pub struct StdScheduler {
    frame_requested: Cell<bool>,
    frame_waker: RefCell<Option<Rc<dyn Fn() + 'static>>>,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self {
            frame_requested: Cell::new(false),
            frame_waker: RefCell::new(None),
        }
    }

    /// Returns whether a frame has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.replace(false)
    }

    /// Registers the host's waker. It fires once per pending request, and
    /// right away if a frame was requested before the waker existed.
    pub fn set_frame_waker(&self, waker: impl Fn() + 'static) {
        *self.frame_waker.borrow_mut() = Some(Rc::new(waker));
        if self.frame_requested.get() {
            self.wake();
        }
    }

    fn wake(&self) {
        let waker = self.frame_waker.borrow().clone();
        if let Some(waker) = waker {
            waker();
        }
    }
}

impl Default for StdScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field("frame_requested", &self.frame_requested.get())
            .finish()
    }
}

impl RuntimeScheduler for StdScheduler {
    // Further requests are folded into the pending one until the host takes it.
    fn schedule_frame(&self) {
        if !self.frame_requested.replace(true) {
            trace!("frame requested");
            self.wake();
        }
    }
}

/// Clock implementation backed by [`web_time::Instant`].
#[derive(Debug, Default, Clone)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Self::Instant) -> u64 {
        since.elapsed().as_nanos().min(u64::MAX as u128) as u64
    }
}

/// Convenience container bundling the standard scheduler and clock.
#[derive(Clone)]
pub struct StdRuntime {
    scheduler: Rc<StdScheduler>,
    clock: StdClock,
    origin: Instant,
    runtime: Runtime,
}

impl StdRuntime {
    /// Creates a new standard runtime instance.
    pub fn new() -> Self {
        let scheduler = Rc::new(StdScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        let clock = StdClock;
        Self {
            scheduler,
            origin: clock.now(),
            clock,
            runtime,
        }
    }

    /// Returns a handle to the runtime.
    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    /// Returns whether a frame was requested since the last poll. Taking the
    /// request re-arms the waker.
    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    /// Registers a waker to be called when the runtime schedules a new frame.
    pub fn set_frame_waker(&self, waker: impl Fn() + 'static) {
        self.scheduler.set_frame_waker(waker);
    }

    /// Nanoseconds since this runtime was created; used as frame time.
    pub fn frame_time_nanos(&self) -> u64 {
        self.clock.elapsed_nanos(self.origin)
    }

    /// Drains pending frame callbacks using the current clock time.
    pub fn drain_frame(&self) -> u64 {
        let now = self.frame_time_nanos();
        self.runtime.drain_frame_callbacks(now);
        now
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
