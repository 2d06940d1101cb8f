//! Core runtime for Cadence.
//!
//! Provides the single-threaded frame loop plumbing (frame callbacks and the
//! frame clock) and observable state cells that notify subscribers when they
//! change. Everything here is driven by the host: nothing runs until the host
//! drains a frame.

mod frame_clock;
pub mod platform;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};
pub use state::{MutableState, State, Subscription};

pub type FrameCallbackId = u64;

/// Creates a state cell bound to `runtime`, so writes request a new frame.
#[allow(non_snake_case)]
pub fn mutableStateOf<T: Clone + PartialEq + 'static>(
    value: T,
    runtime: &RuntimeHandle,
) -> MutableState<T> {
    MutableState::with_runtime(value, runtime.clone())
}
