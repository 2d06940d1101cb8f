mod draw;
mod font;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use cadence_ui::{render, set_text_measurer, Node, RenderContext, Scene};
use log::{info, warn};
use rusttype::Font;

pub use draw::draw_scene;
pub use font::{load_font_file, system_font, CachedRusttypeTextMeasurer, FONT_ENV_VAR};

#[derive(Debug)]
pub enum RenderError {
    /// The font file could not be read.
    FontIo { path: PathBuf, source: io::Error },
    /// The file was read but is not a usable TrueType/OpenType font.
    InvalidFont { path: PathBuf },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::FontIo { path, source } => {
                write!(f, "failed to read font {}: {source}", path.display())
            }
            RenderError::InvalidFont { path } => {
                write!(f, "{} is not a valid font file", path.display())
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::FontIo { source, .. } => Some(source),
            RenderError::InvalidFont { .. } => None,
        }
    }
}

/// Holds the current scene and rasterises it into RGBA frames.
pub struct PixelsRenderer {
    scene: Scene,
    font: Option<Font<'static>>,
}

impl Default for PixelsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelsRenderer {
    /// Renderer using the font named by `CADENCE_FONT` or the first system font found.
    pub fn new() -> Self {
        let font = system_font().cloned();
        if font.is_none() {
            warn!("no usable font found; set {FONT_ENV_VAR} to a .ttf file to render text");
        }
        Self::with_font(font)
    }

    /// Renderer using the font at `path`.
    pub fn with_font_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let font = load_font_file(path.as_ref())?;
        info!("using font {}", path.as_ref().display());
        Ok(Self::with_font(Some(font)))
    }

    fn with_font(font: Option<Font<'static>>) -> Self {
        if let Some(font) = &font {
            set_text_measurer(CachedRusttypeTextMeasurer::new(font.clone(), 64));
        }
        Self {
            scene: Scene::new(),
            font,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Lays out `root` and replaces the current scene with it.
    pub fn rebuild_scene(&mut self, root: &Node, context: &RenderContext) {
        self.scene = render(root, context);
    }

    pub fn draw(&self, frame: &mut [u8], width: u32, height: u32) {
        draw::draw_scene(frame, width, height, &self.scene, self.font.as_ref());
    }
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
