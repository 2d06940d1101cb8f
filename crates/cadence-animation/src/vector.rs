use cadence_ui_graphics::{Color, Dp};
use smallvec::{smallvec, SmallVec};

/// Component-wise representation of an animated value.
///
/// Scalars use one lane, colors use four (r, g, b, a).
pub type AnimationVector = SmallVec<[f32; 4]>;

/// Values that can be driven by the animation system.
///
/// Every animation spec runs on [`AnimationVector`]s; this trait converts a
/// concrete value type to and from that representation.
pub trait Animate: Clone + PartialEq + 'static {
    fn to_vector(&self) -> AnimationVector;

    fn from_vector(vector: &[f32]) -> Self;

    /// Distance under which two values are visually indistinguishable.
    /// Springs settle once displacement falls below it.
    fn visibility_threshold() -> f32 {
        0.01
    }
}

impl Animate for f32 {
    fn to_vector(&self) -> AnimationVector {
        smallvec![*self]
    }

    fn from_vector(vector: &[f32]) -> Self {
        vector.first().copied().unwrap_or_default()
    }
}

impl Animate for Dp {
    fn to_vector(&self) -> AnimationVector {
        smallvec![self.0]
    }

    fn from_vector(vector: &[f32]) -> Self {
        Dp(vector.first().copied().unwrap_or_default())
    }

    fn visibility_threshold() -> f32 {
        0.1
    }
}

impl Animate for Color {
    fn to_vector(&self) -> AnimationVector {
        smallvec![self.r(), self.g(), self.b(), self.a()]
    }

    // Springs may overshoot; channels are clamped back into gamut.
    fn from_vector(vector: &[f32]) -> Self {
        let channel = |index: usize| vector.get(index).copied().unwrap_or(1.0).clamp(0.0, 1.0);
        Color::rgba(channel(0), channel(1), channel(2), channel(3))
    }

    fn visibility_threshold() -> f32 {
        1.0 / 1000.0
    }
}
