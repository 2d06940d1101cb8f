use std::fmt;
use std::rc::Rc;

use cadence_ui_graphics::{point_in_rounded_rect, Color, Point, Rect, RoundedCornerShape};
use log::trace;

#[derive(Clone, Debug)]
pub struct DrawShape {
    pub rect: Rect,
    pub color: Color,
    pub shape: Option<RoundedCornerShape>,
    pub z_index: usize,
    pub clip: Option<Rect>,
}

#[derive(Clone, Debug)]
pub struct TextDraw {
    /// Line box; the baseline sits at `rect.y + ascent`.
    pub rect: Rect,
    pub text: String,
    pub color: Color,
    /// Font size in pixels.
    pub font_size: f32,
    pub bold: bool,
    pub z_index: usize,
    pub clip: Option<Rect>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Pointer input in physical pixels, relative to the window's top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }
}

#[derive(Clone)]
pub struct HitRegion {
    pub rect: Rect,
    pub shape: Option<RoundedCornerShape>,
    pub on_click: Rc<dyn Fn()>,
    pub z_index: usize,
}

impl HitRegion {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        match self.shape {
            Some(shape) => {
                let radii = shape.resolve(self.rect.width, self.rect.height);
                point_in_rounded_rect(x, y, self.rect, &radii)
            }
            None => self.rect.contains(x, y),
        }
    }
}

impl fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitRegion")
            .field("rect", &self.rect)
            .field("shape", &self.shape)
            .field("z_index", &self.z_index)
            .finish()
    }
}

/// Display list for one frame plus the regions that react to pointer input.
#[derive(Debug)]
pub struct Scene {
    pub background: Color,
    pub shapes: Vec<DrawShape>,
    pub texts: Vec<TextDraw>,
    pub hits: Vec<HitRegion>,
    next_z: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            background: Color::WHITE,
            shapes: Vec::new(),
            texts: Vec::new(),
            hits: Vec::new(),
            next_z: 0,
        }
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.texts.clear();
        self.hits.clear();
        self.next_z = 0;
    }

    fn next_z(&mut self) -> usize {
        let z_index = self.next_z;
        self.next_z += 1;
        z_index
    }

    pub fn push_shape(
        &mut self,
        rect: Rect,
        color: Color,
        shape: Option<RoundedCornerShape>,
        clip: Option<Rect>,
    ) {
        let z_index = self.next_z();
        self.shapes.push(DrawShape {
            rect,
            color,
            shape,
            z_index,
            clip,
        });
    }

    pub fn push_text(&mut self, draw: TextDraw) {
        let z_index = self.next_z();
        self.texts.push(TextDraw { z_index, ..draw });
    }

    pub fn push_hit(
        &mut self,
        rect: Rect,
        shape: Option<RoundedCornerShape>,
        on_click: Rc<dyn Fn()>,
    ) {
        let z_index = self.next_z();
        self.hits.push(HitRegion {
            rect,
            shape,
            on_click,
            z_index,
        });
    }

    /// Regions under `(x, y)`, topmost first.
    pub fn hit_test(&self, x: f32, y: f32) -> Vec<&HitRegion> {
        let mut hits: Vec<&HitRegion> =
            self.hits.iter().filter(|hit| hit.contains(x, y)).collect();
        hits.sort_by(|a, b| b.z_index.cmp(&a.z_index));
        hits
    }

    /// Delivers a pointer event. A press on a region fires its click handler;
    /// returns whether a handler ran.
    pub fn dispatch(&self, event: PointerEvent) -> bool {
        if event.kind != PointerEventKind::Down {
            return false;
        }
        let Point { x, y } = event.position;
        let Some(target) = self.hit_test(x, y).into_iter().next() else {
            return false;
        };
        trace!("click at ({x}, {y}) hit region z={}", target.z_index);
        let on_click = Rc::clone(&target.on_click);
        on_click();
        true
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/scene_tests.rs"]
mod tests;
