use smallvec::smallvec;

use crate::easing::Easing;
use crate::spec::{AnimationSpec, KeyframesSpec, SpringSpec, TweenSpec, NANOS_PER_MILLI};
use crate::spring::SpringSimulation;
use crate::vector::{Animate, AnimationVector};

const VELOCITY_SAMPLE_NANOS: u64 = NANOS_PER_MILLI;

#[derive(Debug, Clone)]
struct KeyframePoint {
    at_millis: u64,
    vector: AnimationVector,
    easing: Easing,
}

#[derive(Debug, Clone)]
enum Plan {
    Tween(TweenSpec),
    Keyframes {
        delay_millis: u64,
        duration_millis: u64,
        points: Vec<KeyframePoint>,
    },
    Spring {
        springs: Vec<SpringSimulation>,
    },
}

/// An animation from a fixed initial value to a fixed target.
///
/// The value is a pure function of play time: sampling the same time twice
/// yields the same value, whatever the frame rate.
#[derive(Debug, Clone)]
pub struct TargetBasedAnimation<T: Animate> {
    spec: AnimationSpec<T>,
    plan: Plan,
    initial_value: T,
    target_value: T,
    initial: AnimationVector,
    target: AnimationVector,
    initial_velocity: AnimationVector,
    duration_nanos: u64,
}

impl<T: Animate> TargetBasedAnimation<T> {
    pub fn new(
        spec: AnimationSpec<T>,
        initial_value: T,
        target_value: T,
        initial_velocity: AnimationVector,
    ) -> Self {
        let initial = initial_value.to_vector();
        let target = target_value.to_vector();
        let initial_velocity = if initial_velocity.len() == initial.len() {
            initial_velocity
        } else {
            smallvec![0.0; initial.len()]
        };

        let (plan, duration_nanos) = match &spec {
            AnimationSpec::Tween(tween) => (Plan::Tween(*tween), tween.total_duration_nanos()),
            AnimationSpec::Keyframes(keyframes) => (
                Plan::Keyframes {
                    delay_millis: keyframes.delay_millis,
                    duration_millis: keyframes.duration_millis,
                    points: keyframe_points(keyframes, &initial, &target),
                },
                keyframes.total_duration_nanos(),
            ),
            AnimationSpec::Spring(spring) => {
                let springs: Vec<SpringSimulation> = target
                    .iter()
                    .map(|&end| SpringSimulation::new(end, spring.damping_ratio, spring.stiffness))
                    .collect();
                let duration = spring_duration_nanos::<T>(
                    spring,
                    &springs,
                    &initial,
                    &initial_velocity,
                );
                (Plan::Spring { springs }, duration)
            }
        };

        Self {
            spec,
            plan,
            initial_value,
            target_value,
            initial,
            target,
            initial_velocity,
            duration_nanos,
        }
    }

    pub fn spec(&self) -> &AnimationSpec<T> {
        &self.spec
    }

    pub fn initial_value(&self) -> &T {
        &self.initial_value
    }

    pub fn target_value(&self) -> &T {
        &self.target_value
    }

    /// Time after which the value rests at the target.
    pub fn duration_nanos(&self) -> u64 {
        self.duration_nanos
    }

    pub fn is_finished_from_nanos(&self, play_time_nanos: u64) -> bool {
        play_time_nanos >= self.duration_nanos
    }

    pub fn value_from_nanos(&self, play_time_nanos: u64) -> T {
        if self.is_finished_from_nanos(play_time_nanos) {
            return self.target_value.clone();
        }
        T::from_vector(&self.vector_from_nanos(play_time_nanos))
    }

    /// Per-component velocity in units per second.
    pub fn velocity_vector_from_nanos(&self, play_time_nanos: u64) -> AnimationVector {
        if self.is_finished_from_nanos(play_time_nanos) {
            return smallvec![0.0; self.target.len()];
        }
        match &self.plan {
            Plan::Spring { springs } => springs
                .iter()
                .enumerate()
                .map(|(index, spring)| {
                    spring
                        .motion_at(
                            self.initial[index],
                            self.initial_velocity[index],
                            play_time_nanos,
                        )
                        .velocity
                })
                .collect(),
            _ => {
                let (earlier, later) = if play_time_nanos >= VELOCITY_SAMPLE_NANOS {
                    (play_time_nanos - VELOCITY_SAMPLE_NANOS, play_time_nanos)
                } else {
                    (play_time_nanos, play_time_nanos + VELOCITY_SAMPLE_NANOS)
                };
                let from = self.vector_from_nanos(earlier);
                let to = self.vector_from_nanos(later);
                let seconds = VELOCITY_SAMPLE_NANOS as f32 / 1_000_000_000.0;
                from.iter()
                    .zip(to.iter())
                    .map(|(a, b)| (b - a) / seconds)
                    .collect()
            }
        }
    }

    fn vector_from_nanos(&self, play_time_nanos: u64) -> AnimationVector {
        match &self.plan {
            Plan::Tween(tween) => {
                let fraction = tween.fraction_at(play_time_nanos);
                self.initial
                    .iter()
                    .zip(self.target.iter())
                    .map(|(from, to)| from + (to - from) * fraction)
                    .collect()
            }
            Plan::Keyframes {
                delay_millis,
                duration_millis,
                points,
            } => {
                let delay_nanos = delay_millis * NANOS_PER_MILLI;
                let elapsed_millis = play_time_nanos.saturating_sub(delay_nanos) as f64
                    / NANOS_PER_MILLI as f64;
                sample_keyframes(points, elapsed_millis.min(*duration_millis as f64))
            }
            Plan::Spring { springs } => springs
                .iter()
                .enumerate()
                .map(|(index, spring)| {
                    spring
                        .motion_at(
                            self.initial[index],
                            self.initial_velocity[index],
                            play_time_nanos,
                        )
                        .value
                })
                .collect(),
        }
    }
}

// The target always owns the final instant; a keyframe placed there is
// dropped. A keyframe at time 0 replaces the initial value.
fn keyframe_points<T: Animate>(
    spec: &KeyframesSpec<T>,
    initial: &AnimationVector,
    target: &AnimationVector,
) -> Vec<KeyframePoint> {
    let mut points = vec![KeyframePoint {
        at_millis: 0,
        vector: initial.clone(),
        easing: Easing::LinearEasing,
    }];
    for frame in spec.keyframes() {
        if frame.at_millis >= spec.duration_millis {
            continue;
        }
        let point = KeyframePoint {
            at_millis: frame.at_millis,
            vector: frame.value.to_vector(),
            easing: frame.easing,
        };
        if frame.at_millis == 0 {
            points[0] = point;
        } else {
            points.push(point);
        }
    }
    if spec.duration_millis > 0 {
        points.push(KeyframePoint {
            at_millis: spec.duration_millis,
            vector: target.clone(),
            easing: Easing::LinearEasing,
        });
    }
    points
}

fn sample_keyframes(points: &[KeyframePoint], at_millis: f64) -> AnimationVector {
    let Some(last) = points.last() else {
        return AnimationVector::new();
    };
    if points.len() == 1 || at_millis >= last.at_millis as f64 {
        return last.vector.clone();
    }
    let index = points
        .windows(2)
        .position(|pair| at_millis < pair[1].at_millis as f64)
        .unwrap_or(points.len() - 2);
    let start = &points[index];
    let end = &points[index + 1];
    let span = (end.at_millis - start.at_millis) as f64;
    let linear = ((at_millis - start.at_millis as f64) / span).clamp(0.0, 1.0) as f32;
    let fraction = start.easing.transform(linear);
    start
        .vector
        .iter()
        .zip(end.vector.iter())
        .map(|(from, to)| from + (to - from) * fraction)
        .collect()
}

fn spring_duration_nanos<T: Animate>(
    spec: &SpringSpec,
    springs: &[SpringSimulation],
    initial: &AnimationVector,
    initial_velocity: &AnimationVector,
) -> u64 {
    let threshold = spec
        .visibility_threshold
        .unwrap_or_else(T::visibility_threshold);
    springs
        .iter()
        .enumerate()
        .map(|(index, spring)| {
            spring.settle_duration_nanos(initial[index], initial_velocity[index], threshold)
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "tests/target_based_tests.rs"]
mod tests;
