use super::*;
use kurbo::Shape;

#[test]
fn path_length_rounds_up() {
    assert_eq!(path_length("M0 0 L10 0").unwrap(), 10.0);
    assert_eq!(path_length("M0 0 L3 4 L3.5 4").unwrap(), 6.0);
}

#[test]
fn invalid_path_is_a_geometry_error() {
    let err = parse_path("M 0 0 X 12").unwrap_err();
    assert!(err.to_string().contains("geometry error"));
}

#[test]
fn leading_half_of_a_polyline() {
    let path = parse_path("M0 0 L10 0 L10 10").unwrap();
    let measured = ArcLengthPath::new(&path);
    assert!((measured.total() - 20.0).abs() < 1e-9);

    let half = measured.leading(0.5);
    let bbox = half.bounding_box();
    assert!((bbox.x1 - 10.0).abs() < 1e-6);
    assert!(bbox.y1.abs() < 1e-6);

    let three_quarters = measured.leading(0.75);
    let bbox = three_quarters.bounding_box();
    assert!((bbox.y1 - 5.0).abs() < 1e-3);
}

#[test]
fn leading_extremes() {
    let path = parse_path("M0 0 C 10 0 10 10 20 10").unwrap();
    let measured = ArcLengthPath::new(&path);
    assert!(measured.leading(0.0).elements().is_empty());
    assert!(measured.leading(-1.0).elements().is_empty());
    assert_eq!(measured.leading(1.0), path);
    assert_eq!(measured.leading(2.0), path);
}

#[test]
fn leading_curve_length_matches_fraction() {
    let path = parse_path("M0 0 C 10 0 10 10 20 10").unwrap();
    let measured = ArcLengthPath::new(&path);
    let part = ArcLengthPath::new(&measured.leading(0.3));
    assert!((part.total() - measured.total() * 0.3).abs() < 1e-2);
}

#[test]
fn leading_keeps_separate_subpaths() {
    let path = parse_path("M0 0 L10 0 M0 5 L10 5").unwrap();
    let measured = ArcLengthPath::new(&path);
    let part = measured.leading(0.75);
    let moves = part
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
}
