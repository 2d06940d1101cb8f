//! Unit types: Dp, Sp, and conversions

use std::ops::{Add, Mul, Neg, Sub};

/// Density-independent pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

/// Scale-independent pixels (for text)
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

impl Sp {
    pub fn to_px(&self, density: f32, font_scale: f32) -> f32 {
        self.0 * density * font_scale
    }
}
