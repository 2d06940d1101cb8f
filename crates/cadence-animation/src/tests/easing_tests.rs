use super::*;

const ALL: [Easing; 8] = [
    Easing::LinearEasing,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
    Easing::FastOutSlowInEasing,
    Easing::LinearOutSlowInEasing,
    Easing::FastOutLinearInEasing,
    Easing::CubicBezier(0.3, 0.0, 0.7, 1.0),
];

#[test]
fn every_easing_pins_endpoints() {
    for easing in ALL {
        assert_eq!(easing.transform(0.0), 0.0, "{easing:?}");
        assert_eq!(easing.transform(1.0), 1.0, "{easing:?}");
    }
}

#[test]
fn linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.3), 0.3);
}

#[test]
fn accelerating_and_decelerating_curves_sit_on_opposite_sides() {
    assert!(Easing::FastOutLinearInEasing.transform(0.5) < 0.5);
    assert!(Easing::EaseIn.transform(0.5) < 0.5);
    assert!(Easing::LinearOutSlowInEasing.transform(0.5) > 0.5);
    assert!(Easing::EaseOut.transform(0.5) > 0.5);
}

#[test]
fn curves_are_monotonic() {
    for easing in ALL {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = easing.transform(step as f32 / 100.0);
            assert!(value + 1e-3 >= previous, "{easing:?} dipped at {step}");
            previous = value;
        }
    }
}

#[test]
fn cubic_bezier_matches_named_curve() {
    let custom = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
    let named = Easing::FastOutSlowInEasing;
    assert_eq!(custom.transform(0.37), named.transform(0.37));
}

#[test]
fn default_is_fast_out_slow_in() {
    assert_eq!(Easing::default(), Easing::FastOutSlowInEasing);
}
