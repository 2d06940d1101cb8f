use super::*;

use cadence_ui_graphics::RoundedCornerShape;

const RED: Color = Color::from_argb(0xFFFF0000);

fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let idx = ((y * width + x) * 4) as usize;
    [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
}

fn blank(width: u32, height: u32) -> Vec<u8> {
    vec![0; (width * height * 4) as usize]
}

#[test]
fn clears_to_scene_background() {
    let mut scene = Scene::new();
    scene.background = Color::from_argb(0xFF102030);
    let mut frame = blank(4, 4);
    draw_scene(&mut frame, 4, 4, &scene, None);
    assert_eq!(pixel(&frame, 4, 3, 3), [0x10, 0x20, 0x30, 0xFF]);
}

#[test]
fn circle_fills_center_but_not_corners() {
    let mut scene = Scene::new();
    scene.push_shape(
        Rect::new(10.0, 10.0, 20.0, 20.0),
        RED,
        Some(RoundedCornerShape::circle()),
        None,
    );
    let mut frame = blank(40, 40);
    draw_scene(&mut frame, 40, 40, &scene, None);

    assert_eq!(pixel(&frame, 40, 20, 20), [255, 0, 0, 255]);
    assert_eq!(pixel(&frame, 40, 10, 10), [255, 255, 255, 255]);
    assert_eq!(pixel(&frame, 40, 5, 20), [255, 255, 255, 255]);
}

#[test]
fn clip_cuts_shape_outside_clip_rect() {
    let mut scene = Scene::new();
    scene.push_shape(
        Rect::new(0.0, 0.0, 20.0, 10.0),
        RED,
        None,
        Some(Rect::new(0.0, 0.0, 10.0, 10.0)),
    );
    let mut frame = blank(20, 10);
    draw_scene(&mut frame, 20, 10, &scene, None);

    assert_eq!(pixel(&frame, 20, 9, 5), [255, 0, 0, 255]);
    assert_eq!(pixel(&frame, 20, 10, 5), [255, 255, 255, 255]);
}

#[test]
fn translucent_shape_blends_with_background() {
    let mut scene = Scene::new();
    scene.push_shape(
        Rect::new(0.0, 0.0, 2.0, 2.0),
        Color::BLACK.with_alpha(0.5),
        None,
        None,
    );
    let mut frame = blank(2, 2);
    draw_scene(&mut frame, 2, 2, &scene, None);
    let [r, g, b, a] = pixel(&frame, 2, 1, 1);
    assert!((127..=128).contains(&r), "r = {r}");
    assert_eq!(r, g);
    assert_eq!(g, b);
    assert_eq!(a, 255);
}

#[test]
fn shapes_outside_the_frame_are_ignored() {
    let mut scene = Scene::new();
    scene.push_shape(Rect::new(-50.0, -50.0, 20.0, 20.0), RED, None, None);
    scene.push_shape(Rect::new(100.0, 100.0, 20.0, 20.0), RED, None, None);
    let mut frame = blank(8, 8);
    draw_scene(&mut frame, 8, 8, &scene, None);
    assert!(frame.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn later_shapes_paint_over_earlier_ones() {
    let mut scene = Scene::new();
    scene.push_shape(Rect::new(0.0, 0.0, 4.0, 4.0), RED, None, None);
    scene.push_shape(Rect::new(0.0, 0.0, 2.0, 4.0), Color::BLACK, None, None);
    let mut frame = blank(4, 4);
    draw_scene(&mut frame, 4, 4, &scene, None);
    assert_eq!(pixel(&frame, 4, 1, 1), [0, 0, 0, 255]);
    assert_eq!(pixel(&frame, 4, 3, 1), [255, 0, 0, 255]);
}

#[test]
fn texts_and_shapes_share_one_z_order() {
    let mut scene = Scene::new();
    scene.push_shape(Rect::new(0.0, 0.0, 40.0, 40.0), Color::WHITE, None, None);
    scene.push_text(TextDraw {
        rect: Rect::new(0.0, 0.0, 40.0, 20.0),
        text: "0".to_string(),
        color: Color::BLACK,
        font_size: 20.0,
        bold: false,
        z_index: 0,
        clip: None,
    });
    scene.push_shape(Rect::new(0.0, 0.0, 40.0, 40.0), RED, None, None);

    let order: Vec<&str> = draw_order(&scene)
        .into_iter()
        .map(|command| match command {
            DrawCommand::Shape(shape) if shape.color == RED => "cover",
            DrawCommand::Shape(_) => "backdrop",
            DrawCommand::Text(_) => "text",
        })
        .collect();
    assert_eq!(order, ["backdrop", "text", "cover"]);
}

#[test]
fn clip_bounds_are_clamped_to_frame() {
    let bounds = clip_rect_to_bounds(Rect::new(-5.0, 2.5, 100.0, 3.0), None, 10, 10);
    assert_eq!(
        bounds,
        Some(ClipBounds {
            min_x: 0,
            min_y: 2,
            max_x: 10,
            max_y: 6,
        })
    );
    assert_eq!(
        clip_rect_to_bounds(
            Rect::new(0.0, 0.0, 5.0, 5.0),
            Some(Rect::new(6.0, 6.0, 2.0, 2.0)),
            10,
            10
        ),
        None
    );
}
