use super::*;

const MILLIS: u64 = 1_000_000;

#[test]
fn motion_starts_at_initial_conditions() {
    let spring = SpringSimulation::new(280.0, 0.2, 50.0);
    let motion = spring.motion_at(0.0, 12.0, 0);
    assert!(motion.value.abs() < 1e-3);
    assert!((motion.velocity - 12.0).abs() < 1e-3);
}

#[test]
fn critically_damped_spring_does_not_overshoot() {
    let spring = SpringSimulation::new(280.0, 1.0, 1500.0);
    for ms in 0..2000 {
        let value = spring.motion_at(0.0, 0.0, ms * MILLIS).value;
        assert!(value <= 280.0 + 1e-3, "overshot at {ms}ms: {value}");
    }
}

#[test]
fn overdamped_spring_approaches_monotonically() {
    let spring = SpringSimulation::new(100.0, 2.0, 200.0);
    let mut previous = 0.0;
    for ms in 1..3000 {
        let value = spring.motion_at(0.0, 0.0, ms * MILLIS).value;
        assert!(value + 1e-4 >= previous);
        assert!(value <= 100.0 + 1e-3);
        previous = value;
    }
}

#[test]
fn high_bouncy_spring_overshoots_target() {
    let spring = SpringSimulation::new(280.0, 0.2, 50.0);
    let peak = (0..3000)
        .map(|ms| spring.motion_at(0.0, 0.0, ms * MILLIS).value)
        .fold(f32::MIN, f32::max);
    assert!(peak > 280.0, "peak was {peak}");
}

#[test]
fn velocity_matches_position_slope() {
    let spring = SpringSimulation::new(280.0, 0.2, 50.0);
    let t = 200 * MILLIS;
    let before = spring.motion_at(0.0, 0.0, t - MILLIS).value;
    let after = spring.motion_at(0.0, 0.0, t + MILLIS).value;
    let slope = (after - before) / 0.002;
    let velocity = spring.motion_at(0.0, 0.0, t).velocity;
    assert!(
        (slope - velocity).abs() < 0.02 * velocity.abs() + 5.0,
        "slope {slope} vs velocity {velocity}"
    );
}

#[test]
fn settle_duration_is_finite_and_at_rest() {
    let spring = SpringSimulation::new(280.0, 0.2, 50.0);
    let duration = spring.settle_duration_nanos(0.0, 0.0, 0.1);
    assert!(duration > 3_000 * MILLIS);
    assert!(duration < 10_000 * MILLIS);
    assert!(spring.is_at_rest(spring.motion_at(0.0, 0.0, duration), 0.1));
}

#[test]
fn spring_already_at_rest_settles_immediately() {
    let spring = SpringSimulation::new(5.0, 1.0, 400.0);
    assert_eq!(spring.settle_duration_nanos(5.0, 0.0, 0.01), 0);
}
