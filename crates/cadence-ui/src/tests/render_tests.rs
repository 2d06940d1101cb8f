use super::*;

use std::cell::Cell;

use cadence_animation::{ContentFrame, ContentRole};
use cadence_ui_graphics::{Dp, EdgeInsets};

use crate::arrangement::HorizontalAlignment;
use crate::scene::{PointerEvent, PointerEventKind};
use crate::widgets::{
    AnimatedContentText, AnimatedLane, Button, Column, Spacer, Text, WeightedSpacer,
};

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

fn context(width: f32, height: f32, density: f32) -> RenderContext {
    RenderContext::new(Size::new(width, height), density)
}

#[test]
fn column_applies_padding_and_spacing() {
    let style = TextStyle::new(10.0);
    let root: Node = Column(vec![Text("a", style).into(), Text("b", style).into()])
        .padding(EdgeInsets::uniform(16.0))
        .arrangement(LinearArrangement::spaced_by(24.0))
        .into();
    let line = measure_text("a", 10.0).height;

    let scene = render(&root, &context(400.0, 800.0, 1.0));

    assert_eq!(scene.texts.len(), 2);
    assert_close(scene.texts[0].rect.x, 16.0);
    assert_close(scene.texts[0].rect.y, 16.0);
    assert_close(scene.texts[1].rect.y, 16.0 + line + 24.0);
}

#[test]
fn density_scales_spacing_and_fonts() {
    let style = TextStyle::new(10.0);
    let root: Node = Column(vec![Spacer(Dp(10.0)), Text("a", style).into()]).into();

    let scene = render(&root, &context(400.0, 800.0, 2.0));

    assert_close(scene.texts[0].rect.y, 20.0);
    assert_close(scene.texts[0].font_size, 20.0);
}

#[test]
fn weighted_spacer_pushes_trailing_children_down() {
    let style = TextStyle::new(10.0);
    let root: Node = Column(vec![
        Text("top", style).into(),
        WeightedSpacer(1.0),
        Text("bottom", style).into(),
    ])
    .into();
    let line = measure_text("bottom", 10.0).height;

    let scene = render(&root, &context(300.0, 500.0, 1.0));

    assert_close(scene.texts[1].rect.y, 500.0 - line);
}

#[test]
fn centered_children_share_the_middle() {
    let style = TextStyle::new(10.0);
    let root: Node = Column(vec![Text("abcd", style).into()])
        .alignment(HorizontalAlignment::CenterHorizontally)
        .into();
    let width = measure_text("abcd", 10.0).width;

    let scene = render(&root, &context(200.0, 100.0, 1.0));

    assert_close(scene.texts[0].rect.x, (200.0 - width) / 2.0);
}

#[test]
fn full_width_button_receives_clicks() {
    let clicks = Rc::new(Cell::new(0));
    let button = {
        let clicks = Rc::clone(&clicks);
        Button("Go", move || clicks.set(clicks.get() + 1))
            .fill_max_width()
            .height(Dp(56.0))
            .shape(RoundedCornerShape::uniform(12.0))
    };
    let root: Node = Column(vec![button.into()])
        .padding(EdgeInsets::uniform(16.0))
        .into();

    let scene = render(&root, &context(400.0, 800.0, 1.0));

    assert_eq!(scene.hits.len(), 1);
    assert_close(scene.hits[0].rect.width, 368.0);
    assert_close(scene.hits[0].rect.height, 56.0);
    assert!(scene.dispatch(PointerEvent::new(PointerEventKind::Down, 200.0, 44.0)));
    assert!(!scene.dispatch(PointerEvent::new(PointerEventKind::Down, 200.0, 100.0)));
    assert_eq!(clicks.get(), 1);
}

#[test]
fn lane_token_follows_offset_along_track() {
    let root: Node = Column(vec![AnimatedLane("Linear", Dp(100.0), Color::BLACK).into()]).into();
    let label = measure_text("Linear", 24.0).height;

    let scene = render(&root, &context(800.0, 600.0, 2.0));

    assert_eq!(scene.shapes.len(), 2);
    let track = &scene.shapes[0];
    let token = &scene.shapes[1];
    assert_close(track.rect.y, label);
    assert_close(track.rect.height, 100.0);
    assert_close(token.rect.x, 8.0 + 200.0);
    assert_close(token.rect.y, label + 8.0);
    assert_close(token.rect.width, 84.0);
    assert_eq!(token.clip, None);
    assert_eq!(token.color, Color::BLACK);
}

#[test]
fn lane_token_winding_up_extends_past_track_start() {
    let root: Node = Column(vec![AnimatedLane("Keyframes", Dp(-20.0), Color::BLACK).into()])
        .padding(EdgeInsets::uniform(16.0))
        .into();

    let scene = render(&root, &context(480.0, 600.0, 1.0));

    let track = &scene.shapes[0];
    let token = &scene.shapes[1];
    assert_close(track.rect.x, 16.0);
    assert_close(token.rect.x, 0.0);
    assert!(token.rect.x < track.rect.x);
    assert_eq!(token.clip, None);
}

#[test]
fn content_frames_draw_offset_and_faded() {
    let style = TextStyle::new(20.0);
    let frames = vec![
        ContentFrame {
            key: 0,
            value: String::from("1"),
            role: ContentRole::Outgoing,
            offset_y: -10.0,
            alpha: 0.5,
        },
        ContentFrame {
            key: 1,
            value: String::from("2"),
            role: ContentRole::Incoming,
            offset_y: 5.0,
            alpha: 0.0,
        },
    ];
    let root: Node = Column(vec![AnimatedContentText(frames, style).into()]).into();

    let scene = render(&root, &context(100.0, 100.0, 1.0));

    assert_eq!(scene.texts.len(), 1, "fully transparent frames are skipped");
    let text = &scene.texts[0];
    assert_eq!(text.text, "1");
    assert_close(text.rect.y, -10.0);
    assert_close(text.color.a(), 0.5);
    assert!(text.clip.is_some());
}
