//! Typography data structures (font weights, text styles)

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);

    pub fn is_bold(&self) -> bool {
        self.0 >= 600
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Text style (data only, no rendering)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: crate::Sp,
    pub font_weight: FontWeight,
    pub color: crate::Color,
}

impl TextStyle {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size: crate::Sp(font_size),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: crate::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Material 3 `headlineMedium`.
    pub fn headline_medium() -> Self {
        Self::new(28.0)
    }

    /// Material 3 `labelMedium`.
    pub fn label_medium() -> Self {
        Self::new(12.0).with_weight(FontWeight::MEDIUM)
    }

    /// Material 3 `labelLarge`, the default button text style.
    pub fn label_large() -> Self {
        Self::new(14.0).with_weight(FontWeight::MEDIUM)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: crate::Sp(16.0),
            font_weight: FontWeight::NORMAL,
            color: crate::Color::BLACK,
        }
    }
}
