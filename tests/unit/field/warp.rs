use super::*;

fn line(px: f64, py: f64, qx: f64, qy: f64) -> LineSegment {
    LineSegment::from_coords(px, py, qx, qy, 0).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn endpoints_have_u_zero_and_one() {
    let l = line(2.0, 3.0, 8.0, 11.0);
    assert!(close(calc_u(l.p(), &l), 0.0));
    assert!(close(calc_u(l.q(), &l), 1.0));
    assert!(close(calc_v(l.p(), &l), 0.0));
    assert!(close(calc_v(l.q(), &l), 0.0));
}

#[test]
fn interior_points_lie_in_open_unit_interval() {
    let l = line(2.0, 3.0, 8.0, 11.0);
    for s in [0.1, 0.25, 0.5, 0.9] {
        let x = Point::new(2.0 + 6.0 * s, 3.0 + 8.0 * s);
        let u = calc_u(x, &l);
        assert!(u > 0.0 && u < 1.0);
        assert!(close(u, s));
        assert!(close(calc_v(x, &l), 0.0));
    }
}

#[test]
fn v_is_signed_pixel_distance() {
    // Horizontal line pointing +x: perpendicular is +y.
    let l = line(0.0, 0.0, 4.0, 0.0);
    assert!(close(calc_v(Point::new(2.0, 3.0), &l), 3.0));
    assert!(close(calc_v(Point::new(2.0, -1.5), &l), -1.5));
    // Reversing the line flips the side.
    let r = line(4.0, 0.0, 0.0, 0.0);
    assert!(close(calc_v(Point::new(2.0, 3.0), &r), -3.0));
}

#[test]
fn u_extends_beyond_segment() {
    let l = line(0.0, 0.0, 4.0, 0.0);
    assert!(close(calc_u(Point::new(-2.0, 1.0), &l), -0.5));
    assert!(close(calc_u(Point::new(8.0, 7.0), &l), 2.0));
}

#[test]
fn reconstruction_on_same_line_is_identity() {
    let lines = [line(2.0, 3.0, 8.0, 11.0), line(-5.0, 4.0, -5.5, -9.0)];
    let points = [
        Point::new(0.0, 0.0),
        Point::new(100.0, -40.0),
        Point::new(5.0, 7.0),
        Point::new(-30.0, 12.5),
    ];
    for l in &lines {
        for &x in &points {
            let back = calc_x_prime(l, line_coords(x, l));
            assert!(close(back.x, x.x) && close(back.y, x.y), "{x:?} -> {back:?}");
        }
    }
}

#[test]
fn reconstruction_follows_a_translated_line() {
    let a = line(0.0, 0.0, 10.0, 0.0);
    let b = line(5.0, 2.0, 15.0, 2.0);
    let x = Point::new(3.0, 4.0);
    let moved = calc_x_prime(&b, line_coords(x, &a));
    assert!(close(moved.x, 8.0) && close(moved.y, 6.0));
}

#[test]
fn reconstruction_scales_u_but_not_v() {
    let a = line(0.0, 0.0, 10.0, 0.0);
    let b = line(0.0, 0.0, 20.0, 0.0);
    let moved = calc_x_prime(&b, line_coords(Point::new(5.0, 3.0), &a));
    assert!(close(moved.x, 10.0));
    assert!(close(moved.y, 3.0));
}

#[test]
fn distance_policy_uses_nearest_feature() {
    let l = line(0.0, 0.0, 4.0, 0.0);
    let before = Point::new(-3.0, 4.0);
    assert!(close(distance_to_segment(before, &l, line_coords(before, &l)), 5.0));
    let after = Point::new(7.0, -4.0);
    assert!(close(distance_to_segment(after, &l, line_coords(after, &l)), 5.0));
    let beside = Point::new(2.0, -2.5);
    assert!(close(distance_to_segment(beside, &l, line_coords(beside, &l)), 2.5));
}
