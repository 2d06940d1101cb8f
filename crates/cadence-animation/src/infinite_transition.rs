use std::cell::RefCell;
use std::rc::Rc;

use cadence_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};
use log::debug;

use crate::spec::InfiniteRepeatableSpec;

/// Runs any number of infinitely repeating animations off a shared clock.
///
/// All child animations share one start time, so they stay in phase.
/// Dropping the transition stops requesting frames.
pub struct InfiniteTransition {
    inner: Rc<RefCell<TransitionInner>>,
}

struct TransitionInner {
    label: String,
    runtime: RuntimeHandle,
    start_time_nanos: Option<u64>,
    play_time_nanos: u64,
    animations: Vec<InfiniteFloat>,
    registration: Option<FrameCallbackRegistration>,
}

struct InfiniteFloat {
    initial: f32,
    target: f32,
    spec: InfiniteRepeatableSpec,
    state: MutableState<f32>,
}

impl InfiniteTransition {
    pub fn new(label: &str, runtime: &RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TransitionInner {
                label: label.to_owned(),
                runtime: runtime.clone(),
                start_time_nanos: None,
                play_time_nanos: 0,
                animations: Vec::new(),
                registration: None,
            })),
        }
    }

    /// Adds a float oscillating between `initial` and `target` forever.
    pub fn animateFloat(
        &self,
        initial: f32,
        target: f32,
        spec: InfiniteRepeatableSpec,
        label: &str,
    ) -> State<f32> {
        let state = {
            let mut inner = self.inner.borrow_mut();
            debug!("{}: adding {}", inner.label, label);
            let value = spec.value_at(&initial, &target, inner.play_time_nanos);
            let state = MutableState::with_runtime(value, inner.runtime.clone());
            inner.animations.push(InfiniteFloat {
                initial,
                target,
                spec,
                state: state.clone(),
            });
            state
        };
        Self::schedule_frame(&self.inner);
        state.as_state()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Time since the first frame this transition observed.
    pub fn play_time_nanos(&self) -> u64 {
        self.inner.borrow().play_time_nanos
    }

    fn schedule_frame(this: &Rc<RefCell<TransitionInner>>) {
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

    fn on_frame(this: &Rc<RefCell<TransitionInner>>, frame_time_nanos: u64) {
        let updates: Vec<(MutableState<f32>, f32)> = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let start = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let play_time = frame_time_nanos.saturating_sub(start);
            inner.play_time_nanos = play_time;
            inner
                .animations
                .iter()
                .map(|animation| {
                    let value =
                        animation
                            .spec
                            .value_at(&animation.initial, &animation.target, play_time);
                    (animation.state.clone(), value)
                })
                .collect()
        };
        for (state, value) in updates {
            state.set(value);
        }
        Self::schedule_frame(this);
    }
}

pub fn rememberInfiniteTransition(label: &str, runtime: &RuntimeHandle) -> InfiniteTransition {
    InfiniteTransition::new(label, runtime)
}

#[cfg(test)]
#[path = "tests/infinite_transition_tests.rs"]
mod tests;
