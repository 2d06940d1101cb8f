//! Translates winit window state into Cadence render contexts and pointer
//! events.
//!
//! Scenes are laid out in physical pixels, so pointer positions pass through
//! unscaled and the window scale factor becomes the render density.

use cadence_ui::{PointerEvent, PointerEventKind, RenderContext};
use cadence_ui_graphics::{Color, Point, Size};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::ElementState;

pub struct DesktopWinitPlatform {
    scale_factor: f64,
    cursor: Option<PhysicalPosition<f64>>,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: None,
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    /// Pixels per dp.
    pub fn density(&self) -> f32 {
        self.scale_factor as f32
    }

    pub fn render_context(&self, size: PhysicalSize<u32>, background: Color) -> RenderContext {
        RenderContext::new(
            Size::new(size.width as f32, size.height as f32),
            self.density(),
        )
        .with_background(background)
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point::new(position.x as f32, position.y as f32)
    }

    /// Records the cursor and returns the matching move event.
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> PointerEvent {
        self.cursor = Some(position);
        self.pointer_event(PointerEventKind::Move, position)
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Button press or release at the last known cursor position.
    pub fn button_event(&self, state: ElementState) -> Option<PointerEvent> {
        let kind = match state {
            ElementState::Pressed => PointerEventKind::Down,
            ElementState::Released => PointerEventKind::Up,
        };
        self.cursor
            .map(|position| self.pointer_event(kind, position))
    }

    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        position: PhysicalPosition<f64>,
    ) -> PointerEvent {
        let point = self.pointer_position(position);
        PointerEvent::new(kind, point.x, point.y)
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
#[path = "tests/platform_tests.rs"]
mod tests;
