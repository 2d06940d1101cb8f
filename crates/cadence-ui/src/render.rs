//! Measures and places a node tree, emitting its scene.
//!
//! Nodes are sized in dp and sp; everything emitted into the scene is in
//! physical pixels.

use std::rc::Rc;

use cadence_ui_graphics::{Color, EdgeInsets, Rect, RoundedCornerShape, Size, TextStyle};
use log::trace;

use crate::arrangement::{Arrangement, LinearArrangement};
use crate::scene::{Scene, TextDraw};
use crate::text::{measure_text, TextMetrics};
use crate::widgets::{ButtonNode, ColumnNode, ContentNode, LaneNode, Node};

/// Viewport and density a tree is rendered into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderContext {
    /// Viewport size in pixels.
    pub viewport: Size,
    /// Pixels per dp.
    pub density: f32,
    pub background: Color,
}

impl RenderContext {
    pub fn new(viewport: Size, density: f32) -> Self {
        Self {
            viewport,
            density,
            background: Color::WHITE,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    fn px(&self, dp: f32) -> f32 {
        dp * self.density
    }

    fn px_insets(&self, insets: EdgeInsets) -> EdgeInsets {
        EdgeInsets {
            left: self.px(insets.left),
            top: self.px(insets.top),
            right: self.px(insets.right),
            bottom: self.px(insets.bottom),
        }
    }

    fn font_px(&self, style: &TextStyle) -> f32 {
        style.font_size.to_px(self.density, 1.0)
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> TextMetrics {
        measure_text(text, self.font_px(style))
    }
}

/// Lays `root` out over the whole viewport and builds its scene.
pub fn render(root: &Node, context: &RenderContext) -> Scene {
    let mut scene = Scene::new();
    scene.background = context.background;
    let bounds = Rect::new(
        0.0,
        0.0,
        context.viewport.width,
        context.viewport.height,
    );
    place(root, bounds, context, &mut scene);
    trace!(
        "scene built: {} shapes, {} texts, {} hit regions",
        scene.shapes.len(),
        scene.texts.len(),
        scene.hits.len()
    );
    scene
}

fn measure(node: &Node, max_width: f32, context: &RenderContext) -> Size {
    match node {
        Node::Text(text) => {
            let metrics = context.measure_text(&text.text, &text.style);
            Size::new(metrics.width.min(max_width), metrics.height)
        }
        Node::Button(button) => measure_button(button, max_width, context),
        Node::Lane(lane) => {
            let label = context.measure_text(&lane.label, &lane.label_style);
            Size::new(max_width, label.height + context.px(lane.track_height.0))
        }
        Node::Spacer(height) => Size::new(0.0, context.px(height.0)),
        Node::Weighted(_) => Size::ZERO,
        Node::Column(column) => {
            let padding = column.padding;
            let inner_width = (max_width - context.px(padding.horizontal_sum())).max(0.0);
            let heights: f32 = column
                .children
                .iter()
                .map(|child| measure(child, inner_width, context).height)
                .sum();
            let gaps = context.px(column.arrangement.gaps(column.children.len()));
            Size::new(
                max_width,
                heights + gaps + context.px(padding.vertical_sum()),
            )
        }
        Node::Content(content) => {
            let line = context.measure_text("0", &content.style);
            let width = content
                .frames
                .iter()
                .map(|frame| context.measure_text(&frame.value, &content.style).width)
                .fold(0.0, f32::max);
            Size::new(width.min(max_width), line.height)
        }
    }
}

fn measure_button(button: &ButtonNode, max_width: f32, context: &RenderContext) -> Size {
    let label = context.measure_text(&button.label, &button.style);
    let padding = button.content_padding;
    let width = if button.fill_max_width {
        max_width
    } else {
        (label.width + context.px(padding.horizontal_sum())).min(max_width)
    };
    let height = (label.height + context.px(padding.vertical_sum()))
        .max(context.px(button.min_height.0));
    Size::new(width, height)
}

fn place(node: &Node, rect: Rect, context: &RenderContext, scene: &mut Scene) {
    match node {
        Node::Text(text) => {
            push_text(scene, rect, &text.text, &text.style, None, context);
        }
        Node::Button(button) => place_button(button, rect, context, scene),
        Node::Lane(lane) => place_lane(lane, rect, context, scene),
        Node::Spacer(_) | Node::Weighted(_) => {}
        Node::Column(column) => place_column(column, rect, context, scene),
        Node::Content(content) => place_content(content, rect, context, scene),
    }
}

fn place_column(column: &ColumnNode, rect: Rect, context: &RenderContext, scene: &mut Scene) {
    let inner = rect.inset(context.px_insets(column.padding));

    let mut sizes: Vec<Size> = column
        .children
        .iter()
        .map(|child| measure(child, inner.width, context))
        .collect();

    let total_weight: f32 = column
        .children
        .iter()
        .filter_map(|child| match child {
            Node::Weighted(weight) => Some(*weight),
            _ => None,
        })
        .sum();
    if total_weight > 0.0 {
        let fixed: f32 = sizes.iter().map(|size| size.height).sum();
        let gaps = context.px(column.arrangement.gaps(sizes.len()));
        let leftover = (inner.height - fixed - gaps).max(0.0);
        for (child, size) in column.children.iter().zip(sizes.iter_mut()) {
            if let Node::Weighted(weight) = child {
                size.height = leftover * weight / total_weight;
            }
        }
    }

    let heights: Vec<f32> = sizes.iter().map(|size| size.height).collect();
    let mut positions = vec![0.0; heights.len()];
    let arrangement = match column.arrangement {
        LinearArrangement::SpacedBy(spacing) => LinearArrangement::SpacedBy(context.px(spacing)),
        other => other,
    };
    arrangement.arrange(inner.height, &heights, &mut positions);

    for ((child, size), y) in column.children.iter().zip(sizes).zip(positions) {
        let x = column.alignment.align(inner.width, size.width);
        let child_rect = Rect::new(inner.x + x, inner.y + y, size.width, size.height);
        place(child, child_rect, context, scene);
    }
}

fn place_button(button: &ButtonNode, rect: Rect, context: &RenderContext, scene: &mut Scene) {
    let shape = scale_shape(button.shape, context);
    scene.push_shape(rect, button.container_color, Some(shape), None);

    let label = context.measure_text(&button.label, &button.style);
    let label_rect = Rect::new(
        rect.x + (rect.width - label.width) / 2.0,
        rect.y + (rect.height - label.height) / 2.0,
        label.width,
        label.height,
    );
    push_text(scene, label_rect, &button.label, &button.style, Some(rect), context);

    scene.push_hit(rect, Some(shape), Rc::clone(&button.on_click));
}

fn place_lane(lane: &LaneNode, rect: Rect, context: &RenderContext, scene: &mut Scene) {
    let label = context.measure_text(&lane.label, &lane.label_style);
    let label_rect = Rect::new(rect.x, rect.y, label.width, label.height);
    push_text(scene, label_rect, &lane.label, &lane.label_style, None, context);

    let track = Rect::new(
        rect.x,
        rect.y + label.height,
        rect.width,
        context.px(lane.track_height.0),
    );
    scene.push_shape(
        track,
        lane.track_color,
        Some(scale_shape(lane.track_shape, context)),
        None,
    );

    // Overshoot past either end paints over the track's edge.
    let padding = context.px(lane.track_padding.0);
    let token = Rect::new(
        track.x + padding + context.px(lane.offset.0),
        track.y + padding,
        context.px(lane.token_size.0),
        context.px(lane.token_size.0),
    );
    scene.push_shape(token, lane.color, Some(RoundedCornerShape::circle()), None);
}

fn place_content(content: &ContentNode, rect: Rect, context: &RenderContext, scene: &mut Scene) {
    for frame in &content.frames {
        let metrics = context.measure_text(&frame.value, &content.style);
        let frame_rect = Rect::new(
            rect.x + (rect.width - metrics.width) / 2.0,
            rect.y + context.px(frame.offset_y),
            metrics.width,
            metrics.height,
        );
        let alpha = frame.alpha.clamp(0.0, 1.0);
        let style = content
            .style
            .with_color(content.style.color.with_alpha(content.style.color.a() * alpha));
        push_text(scene, frame_rect, &frame.value, &style, Some(rect), context);
    }
}

fn push_text(
    scene: &mut Scene,
    rect: Rect,
    text: &str,
    style: &TextStyle,
    clip: Option<Rect>,
    context: &RenderContext,
) {
    if text.is_empty() || style.color.a() <= 0.0 {
        return;
    }
    scene.push_text(TextDraw {
        rect,
        text: text.to_owned(),
        color: style.color,
        font_size: context.font_px(style),
        bold: style.font_weight.is_bold(),
        z_index: 0,
        clip,
    });
}

fn scale_shape(shape: RoundedCornerShape, context: &RenderContext) -> RoundedCornerShape {
    shape.scale(context.density)
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
