use super::*;

#[test]
fn argb_matches_byte_constructor() {
    let color = Color::from_argb(0xFFEF5350);
    assert_eq!(color, Color::from_rgba_u8(0xEF, 0x53, 0x50, 0xFF));
    assert_eq!(color.to_rgba_u8(), [0xEF, 0x53, 0x50, 0xFF]);
}

#[test]
fn circle_shape_resolves_to_half_side() {
    let radii = RoundedCornerShape::circle().resolve(42.0, 42.0);
    assert_eq!(radii, CornerRadii::uniform(21.0));
}

#[test]
fn rounded_rect_excludes_corner_points() {
    let rect = Rect::new(0.0, 0.0, 40.0, 40.0);
    let radii = CornerRadii::uniform(20.0);
    assert!(point_in_rounded_rect(20.0, 20.0, rect, &radii));
    assert!(point_in_rounded_rect(20.0, 1.0, rect, &radii));
    assert!(!point_in_rounded_rect(1.0, 1.0, rect, &radii));
    assert!(!point_in_rounded_rect(39.0, 39.0, rect, &radii));
}

#[test]
fn inset_shrinks_rect() {
    let rect = Rect::new(10.0, 10.0, 100.0, 50.0).inset(EdgeInsets::uniform(4.0));
    assert_eq!(rect, Rect::new(14.0, 14.0, 92.0, 42.0));
}

#[test]
fn dp_arithmetic() {
    assert_eq!(Dp(280.0) * 0.5, Dp(140.0));
    assert_eq!(-Dp(20.0), Dp(-20.0));
    assert_eq!(Dp(2.0).to_px(2.0), 4.0);
}
