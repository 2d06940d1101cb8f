use crate::easing::Easing;
use crate::vector::Animate;

pub(crate) const NANOS_PER_MILLI: u64 = 1_000_000;

/// Duration-based animation combining a duration and an easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl TweenSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Total running time including the delay.
    pub fn total_duration_nanos(&self) -> u64 {
        (self.delay_millis + self.duration_millis) * NANOS_PER_MILLI
    }

    /// Eased progress at `play_time_nanos`, measured from the start of the delay.
    pub fn fraction_at(&self, play_time_nanos: u64) -> f32 {
        let delay_nanos = self.delay_millis * NANOS_PER_MILLI;
        if play_time_nanos < delay_nanos {
            return self.easing.transform(0.0);
        }
        let duration_nanos = self.duration_millis * NANOS_PER_MILLI;
        if duration_nanos == 0 {
            return 1.0;
        }
        let linear =
            ((play_time_nanos - delay_nanos) as f64 / duration_nanos as f64).clamp(0.0, 1.0);
        self.easing.transform(linear as f32)
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Named spring constants matching Jetpack Compose's `Spring` object.
pub struct Spring;

impl Spring {
    pub const DAMPING_RATIO_HIGH_BOUNCY: f32 = 0.2;
    pub const DAMPING_RATIO_MEDIUM_BOUNCY: f32 = 0.5;
    pub const DAMPING_RATIO_LOW_BOUNCY: f32 = 0.75;
    pub const DAMPING_RATIO_NO_BOUNCY: f32 = 1.0;

    pub const STIFFNESS_HIGH: f32 = 10_000.0;
    pub const STIFFNESS_MEDIUM: f32 = 1_500.0;
    pub const STIFFNESS_MEDIUM_LOW: f32 = 400.0;
    pub const STIFFNESS_LOW: f32 = 200.0;
    pub const STIFFNESS_VERY_LOW: f32 = 50.0;
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Settle distance; `None` uses the animated type's own threshold.
    pub visibility_threshold: Option<f32>,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            visibility_threshold: None,
        }
    }

    /// Create a spring with default material design values.
    pub fn default_spring() -> Self {
        Self::new(Spring::DAMPING_RATIO_NO_BOUNCY, Spring::STIFFNESS_MEDIUM)
    }

    /// Create a bouncy spring.
    pub fn bouncy() -> Self {
        Self::new(Spring::DAMPING_RATIO_MEDIUM_BOUNCY, Spring::STIFFNESS_MEDIUM)
    }

    pub fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = Some(threshold);
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// A value pinned to a point in time inside a [`KeyframesSpec`].
///
/// `easing` shapes the segment that starts at this keyframe.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe<T> {
    pub at_millis: u64,
    pub value: T,
    pub easing: Easing,
}

/// Piecewise animation through absolute values at fixed times.
///
/// The animation's start value sits at time 0 and its target at
/// `duration_millis`, unless a keyframe is placed at either end explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframesSpec<T> {
    pub duration_millis: u64,
    pub delay_millis: u64,
    keyframes: Vec<Keyframe<T>>,
}

impl<T: Animate> KeyframesSpec<T> {
    pub fn builder(duration_millis: u64) -> KeyframesSpecBuilder<T> {
        KeyframesSpecBuilder {
            spec: KeyframesSpec {
                duration_millis,
                delay_millis: 0,
                keyframes: Vec::new(),
            },
        }
    }

    /// Keyframes sorted by time.
    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    pub fn total_duration_nanos(&self) -> u64 {
        (self.delay_millis + self.duration_millis) * NANOS_PER_MILLI
    }
}

/// Builder mirroring Compose's `keyframes { value at time using easing }` DSL.
#[derive(Debug, Clone)]
pub struct KeyframesSpecBuilder<T> {
    spec: KeyframesSpec<T>,
}

impl<T: Animate> KeyframesSpecBuilder<T> {
    pub fn delay_millis(mut self, delay_millis: u64) -> Self {
        self.spec.delay_millis = delay_millis;
        self
    }

    /// Pin `value` at `at_millis`. Times past the duration are clamped to it;
    /// a second keyframe at the same time replaces the first.
    pub fn at(mut self, value: T, at_millis: u64) -> Self {
        let at_millis = at_millis.min(self.spec.duration_millis);
        self.spec.keyframes.retain(|frame| frame.at_millis != at_millis);
        self.spec.keyframes.push(Keyframe {
            at_millis,
            value,
            easing: Easing::LinearEasing,
        });
        self
    }

    /// Easing for the segment that starts at the most recently added keyframe.
    pub fn using(mut self, easing: Easing) -> Self {
        if let Some(last) = self.spec.keyframes.last_mut() {
            last.easing = easing;
        }
        self
    }

    pub fn build(mut self) -> KeyframesSpec<T> {
        self.spec.keyframes.sort_by_key(|frame| frame.at_millis);
        self.spec
    }
}

/// Whether an infinitely repeating animation restarts or plays backwards
/// on alternate iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatMode {
    #[default]
    Restart,
    Reverse,
}

/// A tween repeated forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteRepeatableSpec {
    pub animation: TweenSpec,
    pub repeat_mode: RepeatMode,
}

impl InfiniteRepeatableSpec {
    pub fn iteration_duration_nanos(&self) -> u64 {
        self.animation.total_duration_nanos()
    }

    /// Maps overall play time onto the play time of the current iteration.
    pub fn repetition_play_time_nanos(&self, play_time_nanos: u64) -> u64 {
        let iteration = self.iteration_duration_nanos();
        if iteration == 0 {
            return 0;
        }
        let repeats = play_time_nanos / iteration;
        let within = play_time_nanos % iteration;
        match self.repeat_mode {
            RepeatMode::Restart => within,
            RepeatMode::Reverse if repeats % 2 == 0 => within,
            RepeatMode::Reverse => iteration - within,
        }
    }

    /// Value of an animation between `initial` and `target` at `play_time_nanos`.
    pub fn value_at<T: Animate>(&self, initial: &T, target: &T, play_time_nanos: u64) -> T {
        let fraction = self
            .animation
            .fraction_at(self.repetition_play_time_nanos(play_time_nanos));
        let start = initial.to_vector();
        let end = target.to_vector();
        let values: Vec<f32> = start
            .iter()
            .zip(end.iter())
            .map(|(from, to)| from + (to - from) * fraction)
            .collect();
        T::from_vector(&values)
    }
}

/// How a single animated value moves towards its target.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationSpec<T> {
    /// Time-based tween animation.
    Tween(TweenSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
    /// Piecewise animation through keyframes.
    Keyframes(KeyframesSpec<T>),
}

impl<T> Default for AnimationSpec<T> {
    fn default() -> Self {
        AnimationSpec::Spring(SpringSpec::default())
    }
}

impl<T> From<TweenSpec> for AnimationSpec<T> {
    fn from(spec: TweenSpec) -> Self {
        AnimationSpec::Tween(spec)
    }
}

impl<T> From<SpringSpec> for AnimationSpec<T> {
    fn from(spec: SpringSpec) -> Self {
        AnimationSpec::Spring(spec)
    }
}

impl<T> From<KeyframesSpec<T>> for AnimationSpec<T> {
    fn from(spec: KeyframesSpec<T>) -> Self {
        AnimationSpec::Keyframes(spec)
    }
}

pub fn tween<T>(duration_millis: u64, easing: Easing) -> AnimationSpec<T> {
    AnimationSpec::Tween(TweenSpec::tween(duration_millis, easing))
}

pub fn spring<T>(damping_ratio: f32, stiffness: f32) -> AnimationSpec<T> {
    AnimationSpec::Spring(SpringSpec::new(damping_ratio, stiffness))
}

pub fn keyframes<T: Animate>(
    duration_millis: u64,
    build: impl FnOnce(KeyframesSpecBuilder<T>) -> KeyframesSpecBuilder<T>,
) -> AnimationSpec<T> {
    AnimationSpec::Keyframes(build(KeyframesSpec::builder(duration_millis)).build())
}

pub fn infiniteRepeatable(animation: TweenSpec, repeat_mode: RepeatMode) -> InfiniteRepeatableSpec {
    InfiniteRepeatableSpec {
        animation,
        repeat_mode,
    }
}
