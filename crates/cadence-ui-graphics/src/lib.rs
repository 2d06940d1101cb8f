//! Pure math/data for drawing & units in Cadence
//!
//! Geometry primitives, colors, unit types and text styles shared by the
//! animation, UI and renderer crates.

mod color;
mod geometry;
mod typography;
mod unit;

pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

#[cfg(test)]
#[path = "tests/graphics_tests.rs"]
mod tests;
