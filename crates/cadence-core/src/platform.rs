//! Platform abstraction traits for runtime services.
//!
//! The runtime delegates frame scheduling and timekeeping to the host so the
//! same screen can be driven by a window event loop or by a test feeding
//! synthetic timestamps.

/// Schedules work for the runtime.
///
/// Implementations are told whenever the runtime wants another frame, for
/// example because a state changed or an animation registered a callback.
pub trait RuntimeScheduler {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of nanoseconds elapsed since `since`.
    fn elapsed_nanos(&self, since: Self::Instant) -> u64;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        self.elapsed_nanos(since) / 1_000_000
    }
}
