//! Cross-fading/sliding swap between successive values of a piece of state.

use std::cell::RefCell;
use std::fmt;
use std::ops::Add;
use std::rc::Rc;

use cadence_core::{RuntimeHandle, State, Subscription};
use log::debug;

use crate::animatable::Animatable;
use crate::spec::{AnimationSpec, Spring, SpringSpec};

type OffsetFn = Rc<dyn Fn(f32) -> f32>;

#[derive(Clone)]
struct Slide {
    offset_y: OffsetFn,
    spec: AnimationSpec<f32>,
}

#[derive(Clone)]
struct Fade {
    alpha: f32,
    spec: AnimationSpec<f32>,
}

fn default_slide_spec() -> AnimationSpec<f32> {
    SpringSpec::new(Spring::DAMPING_RATIO_NO_BOUNCY, Spring::STIFFNESS_MEDIUM_LOW)
        .with_visibility_threshold(1.0)
        .into()
}

fn default_fade_spec() -> AnimationSpec<f32> {
    SpringSpec::new(Spring::DAMPING_RATIO_NO_BOUNCY, Spring::STIFFNESS_MEDIUM_LOW).into()
}

/// How incoming content appears. Combine with `+`; the left side wins
/// when both sides configure the same property.
#[derive(Clone, Default)]
pub struct EnterTransition {
    slide: Option<Slide>,
    fade: Option<Fade>,
}

/// How outgoing content disappears. Combine with `+`.
#[derive(Clone, Default)]
pub struct ExitTransition {
    slide: Option<Slide>,
    fade: Option<Fade>,
}

impl EnterTransition {
    pub fn none() -> Self {
        Self::default()
    }

    /// Pairs this enter transition with `exit` into a content transform.
    pub fn togetherWith(self, exit: ExitTransition) -> ContentTransform {
        ContentTransform { enter: self, exit }
    }
}

impl ExitTransition {
    pub fn none() -> Self {
        Self::default()
    }
}

impl Add for EnterTransition {
    type Output = EnterTransition;

    fn add(self, other: EnterTransition) -> EnterTransition {
        EnterTransition {
            slide: self.slide.or(other.slide),
            fade: self.fade.or(other.fade),
        }
    }
}

impl Add for ExitTransition {
    type Output = ExitTransition;

    fn add(self, other: ExitTransition) -> ExitTransition {
        ExitTransition {
            slide: self.slide.or(other.slide),
            fade: self.fade.or(other.fade),
        }
    }
}

impl fmt::Debug for EnterTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnterTransition")
            .field("slide", &self.slide.is_some())
            .field("fade", &self.fade.as_ref().map(|fade| fade.alpha))
            .finish()
    }
}

impl fmt::Debug for ExitTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitTransition")
            .field("slide", &self.slide.is_some())
            .field("fade", &self.fade.as_ref().map(|fade| fade.alpha))
            .finish()
    }
}

/// Slide in from `initial_offset_y(full_height)` to rest.
pub fn slideInVertically(initial_offset_y: impl Fn(f32) -> f32 + 'static) -> EnterTransition {
    slideInVerticallyWith(default_slide_spec(), initial_offset_y)
}

pub fn slideInVerticallyWith(
    spec: AnimationSpec<f32>,
    initial_offset_y: impl Fn(f32) -> f32 + 'static,
) -> EnterTransition {
    EnterTransition {
        slide: Some(Slide {
            offset_y: Rc::new(initial_offset_y),
            spec,
        }),
        fade: None,
    }
}

/// Slide out from rest to `target_offset_y(full_height)`.
pub fn slideOutVertically(target_offset_y: impl Fn(f32) -> f32 + 'static) -> ExitTransition {
    slideOutVerticallyWith(default_slide_spec(), target_offset_y)
}

pub fn slideOutVerticallyWith(
    spec: AnimationSpec<f32>,
    target_offset_y: impl Fn(f32) -> f32 + 'static,
) -> ExitTransition {
    ExitTransition {
        slide: Some(Slide {
            offset_y: Rc::new(target_offset_y),
            spec,
        }),
        fade: None,
    }
}

pub fn fadeIn() -> EnterTransition {
    fadeInWith(default_fade_spec(), 0.0)
}

pub fn fadeInWith(spec: AnimationSpec<f32>, initial_alpha: f32) -> EnterTransition {
    EnterTransition {
        slide: None,
        fade: Some(Fade {
            alpha: initial_alpha,
            spec,
        }),
    }
}

pub fn fadeOut() -> ExitTransition {
    fadeOutWith(default_fade_spec(), 0.0)
}

pub fn fadeOutWith(spec: AnimationSpec<f32>, target_alpha: f32) -> ExitTransition {
    ExitTransition {
        slide: None,
        fade: Some(Fade {
            alpha: target_alpha,
            spec,
        }),
    }
}

/// Enter and exit transitions applied together when content changes.
#[derive(Clone, Debug, Default)]
pub struct ContentTransform {
    pub enter: EnterTransition,
    pub exit: ExitTransition,
}

/// Whether an entry is the current target or on its way out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentRole {
    Incoming,
    Outgoing,
}

/// A snapshot of one visible entry, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentFrame<S> {
    pub key: u64,
    pub value: S,
    pub role: ContentRole,
    /// Vertical displacement from the resting position.
    pub offset_y: f32,
    pub alpha: f32,
}

struct ContentEntry<S> {
    key: u64,
    value: S,
    role: ContentRole,
    offset_y: Animatable<f32>,
    alpha: Animatable<f32>,
}

impl<S> ContentEntry<S> {
    fn is_animating(&self) -> bool {
        self.offset_y.is_running() || self.alpha.is_running()
    }
}

struct ContentInner<S> {
    label: String,
    runtime: RuntimeHandle,
    transform: ContentTransform,
    content_height: f32,
    target: S,
    entries: Vec<ContentEntry<S>>,
    next_key: u64,
}

impl<S> ContentInner<S> {
    fn prune(&mut self) {
        self.entries
            .retain(|entry| entry.role == ContentRole::Incoming || entry.is_animating());
    }
}

/// Animates between successive values of some state.
///
/// When the target changes, the current content exits and the new content
/// enters at the same time. Rapid changes stack: every superseded value
/// keeps exiting from wherever it was, and only the last value stays.
pub struct AnimatedContent<S: Clone + PartialEq + 'static> {
    inner: Rc<RefCell<ContentInner<S>>>,
}

impl<S: Clone + PartialEq + 'static> AnimatedContent<S> {
    pub fn new(
        initial: S,
        transform: ContentTransform,
        content_height: f32,
        label: &str,
        runtime: &RuntimeHandle,
    ) -> Self {
        let entry = ContentEntry {
            key: 0,
            value: initial.clone(),
            role: ContentRole::Incoming,
            offset_y: Animatable::with_label(0.0, label, runtime.clone()),
            alpha: Animatable::with_label(1.0, label, runtime.clone()),
        };
        Self {
            inner: Rc::new(RefCell::new(ContentInner {
                label: label.to_owned(),
                runtime: runtime.clone(),
                transform,
                content_height,
                target: initial,
                entries: vec![entry],
                next_key: 1,
            })),
        }
    }

    pub fn content_height(&self) -> f32 {
        self.inner.borrow().content_height
    }

    /// Height handed to the slide offset functions of later transitions.
    pub fn set_content_height(&self, height: f32) {
        self.inner.borrow_mut().content_height = height;
    }

    /// Swaps to `value`. Setting the current target again is a no-op.
    pub fn set_target(&self, value: S) {
        let mut inner = self.inner.borrow_mut();
        if inner.target == value {
            return;
        }
        debug!("{}: content changed", inner.label);
        inner.target = value.clone();
        inner.prune();

        let height = inner.content_height;
        let ContentTransform { enter, exit } = inner.transform.clone();

        let mut vanished = Vec::new();
        for entry in inner
            .entries
            .iter_mut()
            .filter(|entry| entry.role == ContentRole::Incoming)
        {
            entry.role = ContentRole::Outgoing;
            if let Some(slide) = &exit.slide {
                entry
                    .offset_y
                    .animateTo((slide.offset_y)(height), slide.spec.clone());
            }
            if let Some(fade) = &exit.fade {
                entry.alpha.animateTo(fade.alpha, fade.spec.clone());
            }
            if !entry.is_animating() {
                vanished.push(entry.key);
            }
        }
        inner.entries.retain(|entry| !vanished.contains(&entry.key));

        let runtime = inner.runtime.clone();
        let label = inner.label.clone();
        let offset_y = Animatable::with_label(
            enter
                .slide
                .as_ref()
                .map_or(0.0, |slide| (slide.offset_y)(height)),
            &label,
            runtime.clone(),
        );
        if let Some(slide) = &enter.slide {
            offset_y.animateTo(0.0, slide.spec.clone());
        }
        let alpha = Animatable::with_label(
            enter.fade.as_ref().map_or(1.0, |fade| fade.alpha),
            &label,
            runtime,
        );
        if let Some(fade) = &enter.fade {
            alpha.animateTo(1.0, fade.spec.clone());
        }

        let key = inner.next_key;
        inner.next_key += 1;
        inner.entries.push(ContentEntry {
            key,
            value,
            role: ContentRole::Incoming,
            offset_y,
            alpha,
        });
    }

    /// Drives the target from `source` until the subscription is dropped.
    pub fn follow(&self, source: &State<S>) -> Subscription {
        self.set_target(source.get());
        let weak = Rc::downgrade(&self.inner);
        source.subscribe(move |value| {
            if let Some(inner) = weak.upgrade() {
                AnimatedContent { inner }.set_target(value.clone());
            }
        })
    }

    /// Entries still on screen, outgoing first, in drawing order.
    ///
    /// Outgoing entries whose exit has finished are discarded here.
    pub fn visible_contents(&self) -> Vec<ContentFrame<S>> {
        let mut inner = self.inner.borrow_mut();
        inner.prune();
        let mut frames: Vec<ContentFrame<S>> = inner
            .entries
            .iter()
            .map(|entry| ContentFrame {
                key: entry.key,
                value: entry.value.clone(),
                role: entry.role,
                offset_y: entry.offset_y.value(),
                alpha: entry.alpha.value(),
            })
            .collect();
        frames.sort_by_key(|frame| frame.role == ContentRole::Incoming);
        frames
    }

    pub fn is_running(&self) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|entry| entry.is_animating() || entry.role == ContentRole::Outgoing)
    }
}

#[cfg(test)]
#[path = "tests/animated_content_tests.rs"]
mod tests;
