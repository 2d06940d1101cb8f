use super::*;

use std::path::Path;

#[test]
fn missing_font_file_reports_io_error() {
    let path = Path::new("/definitely/not/here/font.ttf");
    let err = match PixelsRenderer::with_font_file(path) {
        Ok(_) => panic!("loading a missing font must fail"),
        Err(err) => err,
    };
    assert!(matches!(err, RenderError::FontIo { .. }));
    assert!(err.to_string().contains("font.ttf"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn non_font_bytes_are_rejected() {
    let path = std::env::temp_dir().join(format!("cadence-not-a-font-{}.ttf", std::process::id()));
    std::fs::write(&path, b"plain text, not a font").expect("write temp file");
    let result = load_font_file(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(RenderError::InvalidFont { .. })));
}

#[test]
fn draw_paints_the_rebuilt_scene() {
    use cadence_ui::{Column, Spacer};
    use cadence_ui_graphics::{Color, Dp, Size};

    let mut renderer = PixelsRenderer::with_font(None);
    let context = RenderContext::new(Size::new(16.0, 16.0), 1.0)
        .with_background(Color::from_argb(0xFF000000));
    let root: Node = Column(vec![Spacer(Dp(4.0))]).into();
    renderer.rebuild_scene(&root, &context);
    assert!(renderer.scene().texts.is_empty());

    let mut frame = vec![255; 16 * 16 * 4];
    renderer.draw(&mut frame, 16, 16);
    assert!(frame.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}
