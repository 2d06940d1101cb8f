//! One-shot callbacks tied to the host's frame loop.
//!
//! An animation asks the [`FrameClock`] for the next frame, does its work in
//! the callback and asks again if it is still moving. The returned
//! [`FrameCallbackRegistration`] is the animation's claim on that frame:
//! dropping it takes the callback back out of the queue.

use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;

#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub(crate) fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Queues `callback` for the next drained frame; it receives that frame's
    /// time in nanoseconds. A clock whose runtime is gone returns an inactive
    /// registration and never calls `callback`.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        FrameCallbackRegistration {
            id: self.runtime.register_frame_callback(callback),
            runtime: self.runtime.clone(),
        }
    }
}

#[must_use = "dropping the registration cancels the frame callback"]
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        // Cancelling an id that already ran finds nothing to remove.
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}
