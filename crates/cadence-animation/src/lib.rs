//! Animation system for Cadence
//!
//! Time-based tweens, keyframes and spring physics, evaluated as pure
//! functions of play time and driven frame by frame through the runtime's
//! frame clock.
//!
//! Note: the public entry points use camelCase names (`animateTo`,
//! `animateDpAsState`, `slideInVertically`, ...) to keep 1:1 API parity with
//! Jetpack Compose.

#![allow(non_snake_case)]

mod animatable;
mod animated_content;
mod easing;
mod infinite_transition;
mod spec;
mod spring;
mod target_based;
mod vector;

pub use animatable::{
    animateColorAsState, animateDpAsState, animateFloatAsState, animateValueAsState, Animatable,
    AnimatedValue,
};
pub use animated_content::{
    fadeIn, fadeInWith, fadeOut, fadeOutWith, slideInVertically, slideInVerticallyWith,
    slideOutVertically, slideOutVerticallyWith, AnimatedContent, ContentFrame, ContentRole,
    ContentTransform, EnterTransition, ExitTransition,
};
pub use easing::Easing;
pub use infinite_transition::{rememberInfiniteTransition, InfiniteTransition};
pub use spec::{
    infiniteRepeatable, keyframes, spring, tween, AnimationSpec, InfiniteRepeatableSpec, Keyframe,
    KeyframesSpec, KeyframesSpecBuilder, RepeatMode, Spring, SpringSpec, TweenSpec,
};
pub use spring::{Motion, SpringSimulation};
pub use target_based::TargetBasedAnimation;
pub use vector::{Animate, AnimationVector};
