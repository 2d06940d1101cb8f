//! The animation showcase screen: five racing lanes, a pulsing start button
//! and an animated counter.

use cadence_animation::{
    animateColorAsState, animateDpAsState, fadeIn, fadeOut, infiniteRepeatable, keyframes,
    rememberInfiniteTransition, slideInVertically, slideOutVertically, spring, tween,
    AnimatedContent, AnimatedValue, AnimationSpec, ContentFrame, Easing, InfiniteTransition,
    RepeatMode, Spring, TweenSpec,
};
use cadence_core::{mutableStateOf, MutableState, RuntimeHandle, State, Subscription};
use cadence_ui::widgets::{
    AnimatedContentText, AnimatedLane, Button, Column, Node, Spacer, Text, WeightedSpacer,
};
use cadence_ui::{
    measure_text, render, HorizontalAlignment, LinearArrangement, RenderContext, Scene,
};
use cadence_ui_graphics::{Color, Dp, EdgeInsets, FontWeight, RoundedCornerShape, Sp, TextStyle};
use log::info;

use crate::config::ScreenConfig;

/// The five lanes, in screen order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LaneKind {
    Linear,
    Rocket,
    Braking,
    Spring,
    Keyframes,
}

impl LaneKind {
    pub const ALL: [LaneKind; 5] = [
        LaneKind::Linear,
        LaneKind::Rocket,
        LaneKind::Braking,
        LaneKind::Spring,
        LaneKind::Keyframes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LaneKind::Linear => "Linear (Robot)",
            LaneKind::Rocket => "Rocket",
            LaneKind::Braking => "Braking",
            LaneKind::Spring => "Spring (Bounce)",
            LaneKind::Keyframes => "Keyframes (Custom)",
        }
    }

    /// How this lane interpolates between rest and `distance`.
    pub fn spec(self, distance: Dp, duration_millis: u64) -> AnimationSpec<Dp> {
        match self {
            LaneKind::Linear => tween(duration_millis, Easing::LinearEasing),
            LaneKind::Rocket => tween(duration_millis, Easing::FastOutLinearInEasing),
            LaneKind::Braking => tween(duration_millis, Easing::LinearOutSlowInEasing),
            LaneKind::Spring => spring(
                Spring::DAMPING_RATIO_HIGH_BOUNCY,
                Spring::STIFFNESS_VERY_LOW,
            ),
            // Winds up backwards before racing forward.
            LaneKind::Keyframes => keyframes(duration_millis, |frames| {
                frames
                    .at(Dp(-20.0), duration_millis / 10)
                    .using(Easing::FastOutSlowInEasing)
                    .at(distance * 0.8, duration_millis / 2)
                    .at(distance * 0.95, duration_millis * 9 / 10)
                    .using(Easing::LinearEasing)
            }),
        }
    }
}

enum LaneColor {
    Fixed(Color),
    Animated(AnimatedValue<Color>),
}

impl LaneColor {
    fn value(&self) -> Color {
        match self {
            LaneColor::Fixed(color) => *color,
            LaneColor::Animated(color) => color.value(),
        }
    }
}

struct Lane {
    kind: LaneKind,
    offset: AnimatedValue<Dp>,
    color: LaneColor,
}

pub struct AnimationScreen {
    config: ScreenConfig,
    moved: MutableState<bool>,
    counter: MutableState<u32>,
    lanes: Vec<Lane>,
    pulse_transition: InfiniteTransition,
    pulse: State<f32>,
    counter_content: AnimatedContent<u32>,
    _counter_follow: Subscription,
}

impl AnimationScreen {
    pub fn new(config: ScreenConfig, runtime: &RuntimeHandle) -> Self {
        let moved = mutableStateOf(false, runtime);
        let counter = mutableStateOf(0u32, runtime);
        let toggle = moved.as_state();

        let lanes = LaneKind::ALL
            .into_iter()
            .map(|kind| {
                let distance = config.distance;
                let offset = animateDpAsState(
                    &toggle,
                    move |moved| if *moved { distance } else { Dp::ZERO },
                    kind.spec(distance, config.duration_millis),
                    kind.label(),
                    runtime,
                );
                let color = match kind {
                    LaneKind::Linear => {
                        let (start, end) = (config.linear_start_color, config.linear_end_color);
                        LaneColor::Animated(animateColorAsState(
                            &toggle,
                            move |moved| if *moved { end } else { start },
                            TweenSpec::tween(config.duration_millis, Easing::FastOutSlowInEasing)
                                .into(),
                            "linear color",
                            runtime,
                        ))
                    }
                    LaneKind::Rocket => LaneColor::Fixed(config.rocket_color),
                    LaneKind::Braking => LaneColor::Fixed(config.braking_color),
                    LaneKind::Spring => LaneColor::Fixed(config.spring_color),
                    LaneKind::Keyframes => LaneColor::Fixed(config.keyframes_color),
                };
                Lane {
                    kind,
                    offset,
                    color,
                }
            })
            .collect();

        let pulse_transition = rememberInfiniteTransition("pulse", runtime);
        let pulse = pulse_transition.animateFloat(
            config.pulse_min_sp,
            config.pulse_max_sp,
            infiniteRepeatable(
                TweenSpec::tween(config.pulse_half_cycle_millis, Easing::FastOutSlowInEasing),
                RepeatMode::Reverse,
            ),
            "font size",
        );

        let transform = (slideInVertically(|height| height) + fadeIn())
            .togetherWith(slideOutVertically(|height| -height) + fadeOut());
        let counter_content = AnimatedContent::new(
            counter.get(),
            transform,
            counter_line_height(config.counter_font_sp),
            "counter",
            runtime,
        );
        let counter_follow = counter_content.follow(&counter.as_state());

        Self {
            config,
            moved,
            counter,
            lanes,
            pulse_transition,
            pulse,
            counter_content,
            _counter_follow: counter_follow,
        }
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn is_moved(&self) -> bool {
        self.moved.get()
    }

    pub fn counter(&self) -> u32 {
        self.counter.get()
    }

    /// Flips every lane towards the other end of its track.
    pub fn toggle(&self) {
        toggle_lanes(&self.moved);
    }

    pub fn increment(&self) {
        increment_counter(&self.counter);
    }

    pub fn lane_offset(&self, kind: LaneKind) -> Dp {
        self.lane(kind).map_or(Dp::ZERO, |lane| lane.offset.value())
    }

    pub fn lane_color(&self, kind: LaneKind) -> Color {
        self.lane(kind).map_or(Color::TRANSPARENT, |lane| lane.color.value())
    }

    pub fn is_lane_running(&self, kind: LaneKind) -> bool {
        self.lane(kind).is_some_and(|lane| lane.offset.is_running())
    }

    fn lane(&self, kind: LaneKind) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.kind == kind)
    }

    /// Current font size of the start button's label, in sp.
    pub fn pulse_font_size(&self) -> f32 {
        self.pulse.get()
    }

    pub fn is_pulsing(&self) -> bool {
        self.pulse_transition.is_running()
    }

    /// Counter values on screen, outgoing first.
    pub fn visible_counter(&self) -> Vec<ContentFrame<u32>> {
        self.counter_content.visible_contents()
    }

    pub fn start_label(&self) -> &'static str {
        if self.is_moved() {
            "Restart"
        } else {
            "Start animation"
        }
    }

    pub fn build_tree(&self) -> Node {
        self.counter_content
            .set_content_height(counter_line_height(self.config.counter_font_sp));

        let mut children: Vec<Node> = Vec::with_capacity(self.lanes.len() + 4);
        children.push(
            Text(
                self.config.title.clone(),
                TextStyle::headline_medium()
                    .with_weight(FontWeight::BOLD)
                    .with_color(self.config.title_color),
            )
            .into(),
        );
        children.extend(self.lanes.iter().map(|lane| {
            AnimatedLane(lane.kind.label(), lane.offset.value(), lane.color.value()).into()
        }));

        let moved = self.moved.clone();
        children.push(
            Button(self.start_label(), move || toggle_lanes(&moved))
                .fill_max_width()
                .height(Dp(56.0))
                .shape(RoundedCornerShape::uniform(12.0))
                .font_size(Sp(self.pulse_font_size()))
                .into(),
        );
        children.push(WeightedSpacer(1.0));

        let frames = self
            .visible_counter()
            .into_iter()
            .map(|frame| ContentFrame {
                key: frame.key,
                value: frame.value.to_string(),
                role: frame.role,
                offset_y: frame.offset_y,
                alpha: frame.alpha,
            })
            .collect();
        let counter = self.counter.clone();
        children.push(
            Column(vec![
                AnimatedContentText(
                    frames,
                    TextStyle::new(self.config.counter_font_sp).with_weight(FontWeight::BOLD),
                )
                .into(),
                Spacer(Dp(20.0)),
                Button("Increment", move || increment_counter(&counter)).into(),
            ])
            .alignment(HorizontalAlignment::CenterHorizontally)
            .into(),
        );

        Column(children)
            .padding(EdgeInsets::uniform(16.0))
            .arrangement(LinearArrangement::spaced_by(24.0))
            .into()
    }

    pub fn render(&self, context: &RenderContext) -> Scene {
        let context = context.with_background(self.config.background);
        render(&self.build_tree(), &context)
    }
}

fn toggle_lanes(moved: &MutableState<bool>) {
    let next = !moved.get();
    info!("lanes {}", if next { "started" } else { "returning" });
    moved.set(next);
}

fn increment_counter(counter: &MutableState<u32>) {
    let next = counter.update(|value| {
        *value = value.saturating_add(1);
        *value
    });
    info!("counter -> {next}");
}

// Slide distance for the counter, in dp.
fn counter_line_height(font_sp: f32) -> f32 {
    measure_text("0", font_sp).height
}
