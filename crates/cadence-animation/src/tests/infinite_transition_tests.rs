use super::*;

use crate::easing::Easing;
use crate::spec::{infiniteRepeatable, RepeatMode, TweenSpec};
use cadence_core::Runtime;

const MILLIS: u64 = 1_000_000;

#[test]
fn reverse_mode_bounces_between_bounds() {
    let runtime = Runtime::default();
    let transition = rememberInfiniteTransition("pulse", &runtime.handle());
    let size = transition.animateFloat(
        12.0,
        24.0,
        infiniteRepeatable(TweenSpec::linear(1000), RepeatMode::Reverse),
        "font size",
    );
    assert_eq!(size.get(), 12.0);

    let expected = [(0, 12.0), (500, 18.0), (1000, 24.0), (1500, 18.0), (2000, 12.0)];
    for (ms, value) in expected {
        runtime.drain_frame_callbacks(ms * MILLIS);
        assert_eq!(size.get(), value, "at {ms}ms");
    }
    assert!(transition.is_running());
    assert_eq!(transition.play_time_nanos(), 2000 * MILLIS);
}

#[test]
fn restart_mode_wraps_to_initial() {
    let spec = infiniteRepeatable(TweenSpec::linear(1000), RepeatMode::Restart);
    assert_eq!(spec.value_at(&0.0f32, &10.0, 500 * MILLIS), 5.0);
    assert_eq!(spec.value_at(&0.0f32, &10.0, 1000 * MILLIS), 0.0);
    assert_eq!(spec.value_at(&0.0f32, &10.0, 1250 * MILLIS), 2.5);
}

#[test]
fn reverse_pulse_is_bounded_and_periodic() {
    let spec = infiniteRepeatable(
        TweenSpec::tween(1000, Easing::FastOutSlowInEasing),
        RepeatMode::Reverse,
    );
    for ms in (0..5000).step_by(37) {
        let value = spec.value_at(&12.0f32, &24.0, ms * MILLIS);
        assert!((12.0..=24.0).contains(&value), "{value} at {ms}ms");
        let later = spec.value_at(&12.0f32, &24.0, (ms + 2000) * MILLIS);
        assert_eq!(value, later, "period broken at {ms}ms");
    }
}

#[test]
fn keeps_requesting_frames_until_dropped() {
    let runtime = Runtime::default();
    let transition = InfiniteTransition::new("pulse", &runtime.handle());
    let _size = transition.animateFloat(
        0.0,
        1.0,
        infiniteRepeatable(TweenSpec::linear(100), RepeatMode::Reverse),
        "alpha",
    );
    for frame in 0..10 {
        runtime.drain_frame_callbacks(frame * 16 * MILLIS);
        assert!(runtime.has_frame_callbacks());
    }

    drop(transition);
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn late_children_join_in_phase() {
    let runtime = Runtime::default();
    let transition = InfiniteTransition::new("shared", &runtime.handle());
    let spec = infiniteRepeatable(TweenSpec::linear(1000), RepeatMode::Reverse);
    let first = transition.animateFloat(0.0, 10.0, spec, "first");
    runtime.drain_frame_callbacks(0);
    runtime.drain_frame_callbacks(250 * MILLIS);

    let second = transition.animateFloat(0.0, 10.0, spec, "second");
    assert_eq!(second.get(), first.get());
    runtime.drain_frame_callbacks(400 * MILLIS);
    assert_eq!(first.get(), 4.0);
    assert_eq!(second.get(), 4.0);
}
