use std::sync::{OnceLock, RwLock};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
}

/// Measures single-line text at a font size in pixels.
pub trait TextMeasurer: Send + Sync + 'static {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics;
}

/// Fixed-advance measurer used until a renderer installs a real one.
#[derive(Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    const ADVANCE: f32 = 0.6;
    const LINE_HEIGHT: f32 = 1.2;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * font_size * Self::ADVANCE,
            height: font_size * Self::LINE_HEIGHT,
            ascent: font_size,
        }
    }
}

fn global_text_measurer() -> &'static RwLock<Box<dyn TextMeasurer>> {
    static TEXT_MEASURER: OnceLock<RwLock<Box<dyn TextMeasurer>>> = OnceLock::new();
    TEXT_MEASURER.get_or_init(|| RwLock::new(Box::new(MonospacedTextMeasurer)))
}

pub fn set_text_measurer<M: TextMeasurer>(measurer: M) {
    let mut guard = global_text_measurer()
        .write()
        .expect("text measurer lock poisoned");
    *guard = Box::new(measurer);
}

pub fn measure_text(text: &str, font_size: f32) -> TextMetrics {
    global_text_measurer()
        .read()
        .expect("text measurer lock poisoned")
        .measure(text, font_size)
}
