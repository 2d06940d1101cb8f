//! Font discovery and the rusttype-backed text measurer.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cadence_ui::{TextMeasurer, TextMetrics};
use log::debug;
use lru::LruCache;
use once_cell::sync::Lazy;
use rusttype::{point, Font, Scale};

use crate::RenderError;

/// Environment variable naming a TrueType font to render text with.
pub const FONT_ENV_VAR: &str = "CADENCE_FONT";

const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

static SYSTEM_FONT: Lazy<Option<Font<'static>>> = Lazy::new(|| {
    let from_env = std::env::var_os(FONT_ENV_VAR).map(PathBuf::from);
    from_env
        .into_iter()
        .chain(SYSTEM_FONT_PATHS.iter().map(PathBuf::from))
        .find_map(|path| match load_font_file(&path) {
            Ok(font) => {
                debug!("loaded font {}", path.display());
                Some(font)
            }
            Err(err) => {
                debug!("skipping font candidate: {err}");
                None
            }
        })
});

/// The first loadable font from `CADENCE_FONT` or the usual system locations.
pub fn system_font() -> Option<&'static Font<'static>> {
    SYSTEM_FONT.as_ref()
}

pub fn load_font_file(path: &Path) -> Result<Font<'static>, RenderError> {
    let bytes = std::fs::read(path).map_err(|source| RenderError::FontIo {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(bytes).ok_or_else(|| RenderError::InvalidFont {
        path: path.to_path_buf(),
    })
}

#[derive(Clone)]
struct TextKey {
    text: Arc<str>,
    font_size_bits: u32,
}

impl PartialEq for TextKey {
    fn eq(&self, other: &Self) -> bool {
        self.font_size_bits == other.font_size_bits
            && (Arc::ptr_eq(&self.text, &other.text) || *self.text == *other.text)
    }
}

impl Eq for TextKey {}

impl Hash for TextKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.font_size_bits.hash(state);
    }
}

/// Measures with a rusttype font, remembering recent results.
pub struct CachedRusttypeTextMeasurer {
    font: Font<'static>,
    cache: Mutex<LruCache<TextKey, TextMetrics>>,
}

impl CachedRusttypeTextMeasurer {
    pub fn new(font: Font<'static>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            font,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl TextMeasurer for CachedRusttypeTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let key = TextKey {
            text: Arc::from(text),
            font_size_bits: font_size.to_bits(),
        };
        let mut cache = self.cache.lock().expect("text metrics cache poisoned");
        if let Some(metrics) = cache.get(&key) {
            return *metrics;
        }
        let metrics = measure_with_font(&self.font, text, font_size);
        cache.put(key, metrics);
        metrics
    }
}

pub(crate) fn measure_with_font(font: &Font<'_>, text: &str, font_size: f32) -> TextMetrics {
    let scale = Scale::uniform(font_size.max(0.0));
    let v_metrics = font.v_metrics(scale);
    let width = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .fold(0.0, f32::max);
    TextMetrics {
        width,
        height: (v_metrics.ascent - v_metrics.descent + v_metrics.line_gap).ceil(),
        ascent: v_metrics.ascent,
    }
}
