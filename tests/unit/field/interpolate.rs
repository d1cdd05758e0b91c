use super::*;
use crate::foundation::core::Point;
use crate::foundation::error::MorphError;

fn line(px: f64, py: f64, qx: f64, qy: f64) -> LineSegment {
    LineSegment::from_coords(px, py, qx, qy, 0).unwrap()
}

fn sets() -> (Vec<LineSegment>, Vec<LineSegment>) {
    (
        vec![line(0.0, 0.0, 10.0, 0.0), line(2.0, 2.0, 2.0, 8.0)],
        vec![line(4.0, 4.0, 14.0, 6.0), line(6.0, 1.0, 9.0, 9.0)],
    )
}

#[test]
fn t_one_is_source_and_t_zero_is_destination() {
    let (s, d) = sets();
    assert_eq!(interpolate_lines(&s, &d, 1.0).unwrap(), s);
    assert_eq!(interpolate_lines(&s, &d, 0.0).unwrap(), d);
}

#[test]
fn midpoint_blends_each_endpoint() {
    let (s, d) = sets();
    let mid = interpolate_lines(&s, &d, 0.5).unwrap();
    assert_eq!(mid.len(), 2);
    assert_eq!(mid[0].p(), Point::new(2.0, 2.0));
    assert_eq!(mid[0].q(), Point::new(12.0, 3.0));
    assert_eq!(mid[1].p(), Point::new(4.0, 1.5));
    assert_eq!(mid[1].q(), Point::new(5.5, 8.5));
}

#[test]
fn length_mismatch_is_reported() {
    let (s, d) = sets();
    let err = interpolate_lines(&s, &d[..1], 0.5).unwrap_err();
    assert!(matches!(
        err,
        MorphError::LineCountMismatch {
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn empty_sets_are_reported() {
    assert!(matches!(
        interpolate_lines(&[], &[], 0.5),
        Err(MorphError::EmptyLineSet)
    ));
}
