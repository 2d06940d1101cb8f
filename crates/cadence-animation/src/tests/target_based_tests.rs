use super::*;

use crate::spec::{keyframes, tween, SpringSpec};
use cadence_ui_graphics::{Color, Dp};

const MILLIS: u64 = 1_000_000;

fn keyframe_lane(initial: Dp, target: Dp) -> TargetBasedAnimation<Dp> {
    let spec = keyframes(6000, |frames| {
        frames
            .at(Dp(-20.0), 600)
            .using(Easing::FastOutSlowInEasing)
            .at(Dp(224.0), 3000)
            .at(Dp(266.0), 5400)
            .using(Easing::LinearEasing)
    });
    TargetBasedAnimation::new(spec, initial, target, AnimationVector::new())
}

#[test]
fn linear_tween_is_proportional_to_play_time() {
    let animation = TargetBasedAnimation::new(
        tween(6000, Easing::LinearEasing),
        Dp(0.0),
        Dp(280.0),
        AnimationVector::new(),
    );
    assert_eq!(animation.duration_nanos(), 6000 * MILLIS);
    assert_eq!(animation.value_from_nanos(0), Dp(0.0));
    assert_eq!(animation.value_from_nanos(3000 * MILLIS), Dp(140.0));
    assert!(animation.is_finished_from_nanos(6000 * MILLIS));
    assert_eq!(animation.value_from_nanos(7000 * MILLIS), Dp(280.0));
}

#[test]
fn tween_holds_initial_value_during_delay() {
    let spec = TweenSpec::linear(1000).with_delay(500);
    let animation =
        TargetBasedAnimation::new(spec.into(), 10.0f32, 20.0, AnimationVector::new());
    assert_eq!(animation.value_from_nanos(400 * MILLIS), 10.0);
    assert_eq!(animation.value_from_nanos(1000 * MILLIS), 15.0);
    assert_eq!(animation.duration_nanos(), 1500 * MILLIS);
}

#[test]
fn tween_velocity_follows_slope() {
    let animation = TargetBasedAnimation::new(
        tween(6000, Easing::LinearEasing),
        0.0f32,
        280.0,
        AnimationVector::new(),
    );
    let velocity = animation.velocity_vector_from_nanos(2000 * MILLIS)[0];
    assert!((velocity - 280.0 / 6.0).abs() < 0.1, "velocity {velocity}");
    assert_eq!(animation.velocity_vector_from_nanos(6000 * MILLIS)[0], 0.0);
}

#[test]
fn keyframes_pass_through_each_value() {
    let animation = keyframe_lane(Dp(0.0), Dp(280.0));
    assert_eq!(animation.value_from_nanos(0), Dp(0.0));
    assert_eq!(animation.value_from_nanos(300 * MILLIS), Dp(-10.0));
    assert_eq!(animation.value_from_nanos(600 * MILLIS), Dp(-20.0));
    assert_eq!(animation.value_from_nanos(3000 * MILLIS), Dp(224.0));
    assert_eq!(animation.value_from_nanos(5400 * MILLIS), Dp(266.0));
    assert_eq!(animation.value_from_nanos(5700 * MILLIS), Dp(273.0));
    assert_eq!(animation.value_from_nanos(6000 * MILLIS), Dp(280.0));
}

#[test]
fn keyframe_segments_stay_between_their_endpoints() {
    let animation = keyframe_lane(Dp(0.0), Dp(280.0));
    for ms in (600..=3000).step_by(50) {
        let value = animation.value_from_nanos(ms * MILLIS).0;
        assert!((-20.0..=224.0).contains(&value), "{value} at {ms}ms");
    }
}

#[test]
fn keyframes_are_absolute_on_the_way_back() {
    let animation = keyframe_lane(Dp(280.0), Dp(0.0));
    assert_eq!(animation.value_from_nanos(0), Dp(280.0));
    assert_eq!(animation.value_from_nanos(600 * MILLIS), Dp(-20.0));
    assert_eq!(animation.value_from_nanos(6000 * MILLIS), Dp(0.0));
}

#[test]
fn keyframe_builder_sorts_and_replaces_duplicates() {
    let spec = KeyframesSpec::builder(1000)
        .at(5.0f32, 800)
        .at(1.0, 200)
        .at(2.0, 200)
        .at(9.0, 4000)
        .build();
    let times: Vec<u64> = spec.keyframes().iter().map(|frame| frame.at_millis).collect();
    assert_eq!(times, vec![200, 800, 1000]);
    assert_eq!(spec.keyframes()[0].value, 2.0);
}

#[test]
fn color_tween_interpolates_channels() {
    let animation = TargetBasedAnimation::new(
        tween(1000, Easing::LinearEasing),
        Color::BLACK,
        Color::WHITE,
        AnimationVector::new(),
    );
    assert_eq!(
        animation.value_from_nanos(500 * MILLIS),
        Color::rgba(0.5, 0.5, 0.5, 1.0)
    );
}

#[test]
fn spring_settles_on_target() {
    let spec: AnimationSpec<Dp> = SpringSpec::new(0.2, 50.0).into();
    let animation = TargetBasedAnimation::new(spec, Dp(0.0), Dp(280.0), AnimationVector::new());
    let duration = animation.duration_nanos();
    assert!(duration > 0);
    assert_eq!(animation.value_from_nanos(duration), Dp(280.0));
    let peak = (0..duration / MILLIS)
        .map(|ms| animation.value_from_nanos(ms * MILLIS).0)
        .fold(f32::MIN, f32::max);
    assert!(peak > 280.0);
}

#[test]
fn spring_with_initial_velocity_moves_even_without_displacement() {
    let spec: AnimationSpec<f32> = SpringSpec::default_spring().into();
    let mut velocity = AnimationVector::new();
    velocity.push(500.0);
    let animation = TargetBasedAnimation::new(spec, 10.0f32, 10.0, velocity);
    assert!(animation.duration_nanos() > 0);
    assert!(animation.value_from_nanos(5 * MILLIS) > 10.0);
}

#[test]
fn mismatched_velocity_is_treated_as_rest() {
    let spec: AnimationSpec<Color> = SpringSpec::default_spring().into();
    let mut velocity = AnimationVector::new();
    velocity.push(1.0);
    let animation = TargetBasedAnimation::new(spec, Color::BLACK, Color::BLACK, velocity);
    assert_eq!(animation.duration_nanos(), 0);
}
