use super::{Arrangement, HorizontalAlignment, LinearArrangement};

#[test]
fn spaced_by_uses_fixed_spacing() {
    let arrangement = LinearArrangement::spaced_by(24.0);
    let sizes = vec![10.0, 20.0, 5.0];
    let mut positions = vec![0.0; sizes.len()];
    arrangement.arrange(400.0, &sizes, &mut positions);
    assert_eq!(positions, vec![0.0, 34.0, 78.0]);
    assert_eq!(arrangement.gaps(sizes.len()), 48.0);
}

#[test]
fn start_packs_children_from_the_top() {
    let sizes = vec![10.0, 10.0];
    let mut positions = vec![0.0; sizes.len()];
    LinearArrangement::Start.arrange(100.0, &sizes, &mut positions);
    assert_eq!(positions, vec![0.0, 10.0]);
}

#[test]
fn single_child_has_no_gap() {
    assert_eq!(LinearArrangement::spaced_by(8.0).gaps(1), 0.0);
    assert_eq!(LinearArrangement::Start.gaps(4), 0.0);
}

#[test]
fn horizontal_alignment_offsets() {
    assert_eq!(HorizontalAlignment::Start.align(100.0, 40.0), 0.0);
    assert_eq!(HorizontalAlignment::CenterHorizontally.align(100.0, 40.0), 30.0);
    assert_eq!(HorizontalAlignment::CenterHorizontally.align(30.0, 40.0), 0.0);
}
