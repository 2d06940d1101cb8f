use cadence_ui::{DrawShape, Scene, TextDraw};
use cadence_ui_graphics::{point_in_rounded_rect, Color, Rect};
use rusttype::{point, Font, Scale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ClipBounds {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl ClipBounds {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
}

fn clip_rect_to_bounds(
    rect: Rect,
    clip: Option<Rect>,
    width: u32,
    height: u32,
) -> Option<ClipBounds> {
    let mut min_x = rect.x;
    let mut min_y = rect.y;
    let mut max_x = rect.x + rect.width;
    let mut max_y = rect.y + rect.height;

    if let Some(clip_rect) = clip {
        min_x = min_x.max(clip_rect.x);
        min_y = min_y.max(clip_rect.y);
        max_x = max_x.min(clip_rect.x + clip_rect.width);
        max_y = max_y.min(clip_rect.y + clip_rect.height);
    }

    let min_x = (min_x.max(0.0).floor() as i32).clamp(0, width as i32);
    let min_y = (min_y.max(0.0).floor() as i32).clamp(0, height as i32);
    let max_x = (max_x.min(width as f32).ceil() as i32).clamp(0, width as i32);
    let max_y = (max_y.min(height as f32).ceil() as i32).clamp(0, height as i32);

    if min_x >= max_x || min_y >= max_y {
        return None;
    }
    Some(ClipBounds {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}

fn frame_bounds(width: u32, height: u32) -> ClipBounds {
    ClipBounds {
        min_x: 0,
        min_y: 0,
        max_x: width as i32,
        max_y: height as i32,
    }
}

/// Rasterises `scene` into an RGBA8 `frame` of `width` x `height` pixels.
///
/// Text is skipped when no font is available.
pub fn draw_scene(
    frame: &mut [u8],
    width: u32,
    height: u32,
    scene: &Scene,
    font: Option<&Font<'_>>,
) {
    let background = scene.background.with_alpha(1.0).to_rgba_u8();
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&background);
    }

    for command in draw_order(scene) {
        match command {
            DrawCommand::Shape(shape) => draw_shape(frame, width, height, shape),
            DrawCommand::Text(text) => {
                if let Some(font) = font {
                    draw_text(frame, width, height, text, font);
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum DrawCommand<'a> {
    Shape(&'a DrawShape),
    Text(&'a TextDraw),
}

impl DrawCommand<'_> {
    fn z_index(&self) -> usize {
        match self {
            DrawCommand::Shape(shape) => shape.z_index,
            DrawCommand::Text(text) => text.z_index,
        }
    }
}

/// Shapes and texts interleaved by their shared z order.
fn draw_order(scene: &Scene) -> Vec<DrawCommand<'_>> {
    let mut commands: Vec<DrawCommand<'_>> = scene
        .shapes
        .iter()
        .map(DrawCommand::Shape)
        .chain(scene.texts.iter().map(DrawCommand::Text))
        .collect();
    commands.sort_by_key(|command| command.z_index());
    commands
}

fn draw_shape(frame: &mut [u8], width: u32, height: u32, draw: &DrawShape) {
    let Some(bounds) = clip_rect_to_bounds(draw.rect, draw.clip, width, height) else {
        return;
    };
    let color = color_to_rgba(draw.color);
    if color[3] <= 0.0 {
        return;
    }
    let radii = draw
        .shape
        .map(|shape| shape.resolve(draw.rect.width, draw.rect.height));
    for py in bounds.min_y..bounds.max_y {
        for px in bounds.min_x..bounds.max_x {
            let center_x = px as f32 + 0.5;
            let center_y = py as f32 + 0.5;
            if let Some(radii) = &radii {
                if !point_in_rounded_rect(center_x, center_y, draw.rect, radii) {
                    continue;
                }
            }
            blend_pixel(frame, width, px, py, color, color[3]);
        }
    }
}

fn draw_text(frame: &mut [u8], width: u32, height: u32, draw: &TextDraw, font: &Font<'_>) {
    if draw.font_size <= 0.0 || draw.text.is_empty() {
        return;
    }
    let bounds = match draw.clip {
        Some(clip) => match clip_rect_to_bounds(clip, None, width, height) {
            Some(bounds) => bounds,
            None => return,
        },
        None => frame_bounds(width, height),
    };
    let color = color_to_rgba(draw.color);
    if color[3] <= 0.0 {
        return;
    }
    let scale = Scale::uniform(draw.font_size);
    let ascent = font.v_metrics(scale).ascent;
    // Synthetic bold: a second pass shifted right by a fraction of the size.
    let passes: &[f32] = if draw.bold {
        &[0.0, (draw.font_size / 24.0).max(1.0)]
    } else {
        &[0.0]
    };
    for &shift in passes {
        let origin = point(draw.rect.x + shift, draw.rect.y + ascent);
        for glyph in font.layout(&draw.text, scale, origin) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            if bb.max.x <= bounds.min_x
                || bb.min.x >= bounds.max_x
                || bb.max.y <= bounds.min_y
                || bb.min.y >= bounds.max_y
            {
                continue;
            }
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if bounds.contains(px, py) {
                    blend_pixel(frame, width, px, py, color, coverage * color[3]);
                }
            });
        }
    }
}

fn blend_pixel(frame: &mut [u8], width: u32, px: i32, py: i32, color: [f32; 4], alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let idx = ((py as u32 * width + px as u32) * 4) as usize;
    let Some(existing) = frame.get_mut(idx..idx + 4) else {
        return;
    };
    for channel in 0..3 {
        let dst = existing[channel] as f32 / 255.0;
        let blended = color[channel] * alpha + dst * (1.0 - alpha);
        existing[channel] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    let dst_alpha = existing[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    existing[3] = (out_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
}

fn color_to_rgba(color: Color) -> [f32; 4] {
    [
        color.r().clamp(0.0, 1.0),
        color.g().clamp(0.0, 1.0),
        color.b().clamp(0.0, 1.0),
        color.a().clamp(0.0, 1.0),
    ]
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;
