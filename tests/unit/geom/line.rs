use super::*;

#[test]
fn zero_length_line_is_rejected_with_index() {
    let err = LineSegment::from_coords(1.0, 1.0, 1.0, 1.0, 4).unwrap_err();
    assert!(matches!(err, MorphError::DegenerateLine { index: 4 }));
}

#[test]
fn non_finite_endpoint_is_rejected() {
    assert!(LineSegment::from_coords(f64::NAN, 0.0, 1.0, 1.0, 0).is_err());
    assert!(LineSegment::from_coords(0.0, 0.0, f64::INFINITY, 1.0, 0).is_err());
}

#[test]
fn length_and_vector() {
    let l = LineSegment::from_coords(1.0, 1.0, 4.0, 5.0, 0).unwrap();
    assert_eq!(l.vector(), Vec2::new(3.0, 4.0));
    assert_eq!(l.length(), 5.0);
}

#[test]
fn blend_weights_self_by_w() {
    let a = LineSegment::from_coords(0.0, 0.0, 10.0, 0.0, 0).unwrap();
    let b = LineSegment::from_coords(0.0, 10.0, 10.0, 10.0, 0).unwrap();
    assert_eq!(a.blend(&b, 1.0, 0).unwrap(), a);
    assert_eq!(a.blend(&b, 0.0, 0).unwrap(), b);
    let mid = a.blend(&b, 0.5, 0).unwrap();
    assert_eq!(mid.p(), Point::new(0.0, 5.0));
    assert_eq!(mid.q(), Point::new(10.0, 5.0));
}

#[test]
fn blend_that_collapses_is_reported() {
    let a = LineSegment::from_coords(0.0, 0.0, 10.0, 0.0, 0).unwrap();
    let b = LineSegment::from_coords(10.0, 0.0, 0.0, 0.0, 0).unwrap();
    assert!(matches!(
        a.blend(&b, 0.5, 2),
        Err(MorphError::DegenerateLine { index: 2 })
    ));
}

#[test]
fn deserialize_validates() {
    let ok: LineSegment =
        serde_json::from_str(r#"{"p":{"x":0.0,"y":0.0},"q":{"x":1.0,"y":2.0}}"#).unwrap();
    assert_eq!(ok.q(), Point::new(1.0, 2.0));
    let bad = serde_json::from_str::<LineSegment>(r#"{"p":{"x":1.0,"y":1.0},"q":{"x":1.0,"y":1.0}}"#);
    let msg = bad.unwrap_err().to_string();
    assert!(msg.contains("degenerate line"));
    assert!(!msg.contains("index"));
}
