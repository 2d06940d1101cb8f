//! Tuned constants for the showcase screen.

use cadence_ui_graphics::{Color, Dp};

/// Visual tuning of the animation screen. The defaults reproduce the
/// reference layout; none of the values carry behavioural meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenConfig {
    pub title: String,
    /// How far every token travels when the lanes are started.
    pub distance: Dp,
    /// Duration of the tween and keyframe lanes.
    pub duration_millis: u64,
    /// Bounds of the start button's pulsing font size, in sp.
    pub pulse_min_sp: f32,
    pub pulse_max_sp: f32,
    /// Time to grow from the smaller font size to the larger one.
    pub pulse_half_cycle_millis: u64,
    pub counter_font_sp: f32,
    pub background: Color,
    pub title_color: Color,
    pub linear_start_color: Color,
    pub linear_end_color: Color,
    pub rocket_color: Color,
    pub braking_color: Color,
    pub spring_color: Color,
    pub keyframes_color: Color,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title: "Animation showcase".to_owned(),
            distance: Dp(280.0),
            duration_millis: 6000,
            pulse_min_sp: 12.0,
            pulse_max_sp: 24.0,
            pulse_half_cycle_millis: 1000,
            counter_font_sp: 80.0,
            background: Color::from_argb(0xFFF3EDF7),
            title_color: Color::from_argb(0xFF333333),
            linear_start_color: Color::from_argb(0xFFFAFA27),
            linear_end_color: Color::from_argb(0xFFEF5350),
            rocket_color: Color::from_argb(0xFFC0A100),
            braking_color: Color::from_argb(0xFF272772),
            spring_color: Color::from_argb(0xFF66BB6A),
            keyframes_color: Color::from_argb(0xFFFFA726),
        }
    }
}
