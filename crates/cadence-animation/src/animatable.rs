use std::cell::RefCell;
use std::rc::Rc;

use cadence_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State, Subscription};
use cadence_ui_graphics::{Color, Dp};
use log::{debug, trace};
use smallvec::smallvec;

use crate::spec::AnimationSpec;
use crate::target_based::TargetBasedAnimation;
use crate::vector::{Animate, AnimationVector};

/// Generic animatable value holder.
///
/// Cloning yields another handle to the same animated value.
pub struct Animatable<T: Animate> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: Animate> {
    label: String,
    state: MutableState<T>,
    runtime: RuntimeHandle,
    current: T,
    velocity: AnimationVector,
    target: T,
    animation: Option<TargetBasedAnimation<T>>,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl<T: Animate> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        Self::with_label(initial, "Animatable", runtime)
    }

    pub fn with_label(initial: T, label: &str, runtime: RuntimeHandle) -> Self {
        let velocity = smallvec![0.0; initial.to_vector().len()];
        let inner = AnimatableInner {
            label: label.to_owned(),
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            current: initial.clone(),
            velocity,
            target: initial,
            animation: None,
            start_time_nanos: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate from the current value to `target` using `spec`.
    ///
    /// A running animation is replaced; its current value and velocity carry
    /// over so motion stays continuous.
    pub fn animateTo(&self, target: T, spec: AnimationSpec<T>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.animation.is_none() && inner.current == target {
                inner.target = target;
                return;
            }

            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }

            debug!("{}: animating to new target", inner.label);
            let animation = TargetBasedAnimation::new(
                spec,
                inner.current.clone(),
                target.clone(),
                inner.velocity.clone(),
            );
            inner.target = target;
            inner.animation = Some(animation);
            inner.start_time_nanos = None;
        }
        Self::schedule_frame(&self.inner);
    }

    pub fn value(&self) -> T {
        self.inner.borrow().current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().animation.is_some()
    }

    /// Get the current state.
    pub fn state(&self) -> State<T> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let (state, value, schedule_next) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let Some(animation) = inner.animation.take() else {
                return;
            };

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let play_time = frame_time_nanos.saturating_sub(start_time);
            let value = animation.value_from_nanos(play_time);
            inner.current = value.clone();

            let finished = animation.is_finished_from_nanos(play_time);
            if finished {
                trace!("{}: settled after {}ns", inner.label, play_time);
                inner.velocity.iter_mut().for_each(|v| *v = 0.0);
                inner.start_time_nanos = None;
            } else {
                inner.velocity = animation.velocity_vector_from_nanos(play_time);
                inner.animation = Some(animation);
            }
            (inner.state.clone(), value, !finished)
        };

        // Observers may call back into this animatable, so no borrow is held.
        state.set(value);

        if schedule_next && this.borrow().animation.is_some() {
            Self::schedule_frame(this);
        }
    }
}

impl<T: Animate> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// A value that animates whenever its source state changes.
///
/// Dropping it stops following the source.
pub struct AnimatedValue<T: Animate> {
    animatable: Animatable<T>,
    _subscription: Subscription,
}

impl<T: Animate> AnimatedValue<T> {
    pub fn value(&self) -> T {
        self.animatable.value()
    }

    pub fn target(&self) -> T {
        self.animatable.target()
    }

    pub fn is_running(&self) -> bool {
        self.animatable.is_running()
    }

    pub fn state(&self) -> State<T> {
        self.animatable.state()
    }

    pub fn animatable(&self) -> &Animatable<T> {
        &self.animatable
    }
}

/// Follow `source` through `map`, animating each new target with `spec`.
///
/// Starts at the mapped value of the source without animating.
pub fn animateValueAsState<S, T>(
    source: &State<S>,
    map: impl Fn(&S) -> T + 'static,
    spec: AnimationSpec<T>,
    label: &str,
    runtime: &RuntimeHandle,
) -> AnimatedValue<T>
where
    S: Clone + 'static,
    T: Animate,
{
    let initial = source.with(|value| map(value));
    let animatable = Animatable::with_label(initial, label, runtime.clone());
    let subscription = {
        let animatable = animatable.clone();
        source.subscribe(move |value| animatable.animateTo(map(value), spec.clone()))
    };
    AnimatedValue {
        animatable,
        _subscription: subscription,
    }
}

pub fn animateDpAsState<S: Clone + 'static>(
    source: &State<S>,
    map: impl Fn(&S) -> Dp + 'static,
    spec: AnimationSpec<Dp>,
    label: &str,
    runtime: &RuntimeHandle,
) -> AnimatedValue<Dp> {
    animateValueAsState(source, map, spec, label, runtime)
}

pub fn animateFloatAsState<S: Clone + 'static>(
    source: &State<S>,
    map: impl Fn(&S) -> f32 + 'static,
    spec: AnimationSpec<f32>,
    label: &str,
    runtime: &RuntimeHandle,
) -> AnimatedValue<f32> {
    animateValueAsState(source, map, spec, label, runtime)
}

pub fn animateColorAsState<S: Clone + 'static>(
    source: &State<S>,
    map: impl Fn(&S) -> Color + 'static,
    spec: AnimationSpec<Color>,
    label: &str,
    runtime: &RuntimeHandle,
) -> AnimatedValue<Color> {
    animateValueAsState(source, map, spec, label, runtime)
}

#[cfg(test)]
#[path = "tests/animatable_tests.rs"]
mod tests;
