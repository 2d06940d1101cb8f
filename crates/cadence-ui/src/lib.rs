//! Declarative node tree, layout and scene building for Cadence
//!
//! A screen describes itself as a tree of [`Node`]s every frame; [`render`]
//! measures and places that tree in a viewport and emits a [`Scene`]: the
//! shapes and text to rasterise plus the hit regions for pointer input.

#![allow(non_snake_case)]

mod arrangement;
mod render;
pub mod scene;
mod text;
pub mod widgets;

pub use arrangement::{Arrangement, HorizontalAlignment, LinearArrangement};
pub use render::{render, RenderContext};
pub use scene::{DrawShape, HitRegion, PointerEvent, PointerEventKind, Scene, TextDraw};
pub use text::{measure_text, set_text_measurer, MonospacedTextMeasurer, TextMeasurer, TextMetrics};
pub use widgets::{
    AnimatedContentText, AnimatedLane, Button, ButtonNode, Column, ColumnNode, ContentNode,
    LaneNode, Node, Spacer, Text, TextNode, WeightedSpacer,
};

pub use cadence_ui_graphics::*;
