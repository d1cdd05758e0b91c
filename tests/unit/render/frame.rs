use super::*;

fn gradient_2x2() -> FrameRGB {
    FrameRGB::new(
        2,
        2,
        vec![
            0, 0, 0, //
            100, 0, 0, //
            0, 100, 0, //
            100, 100, 200,
        ],
    )
    .unwrap()
}

#[test]
fn new_checks_buffer_size() {
    assert!(FrameRGB::new(2, 2, vec![0; 11]).is_err());
    assert!(FrameRGB::new(0, 2, vec![]).is_err());
    assert!(FrameRGB::new(2, 2, vec![0; 12]).is_ok());
}

#[test]
fn filled_repeats_color() {
    let f = FrameRGB::filled(3, 2, [1, 2, 3]).unwrap();
    assert_eq!(f.data.len(), 18);
    assert_eq!(f.pixel(2, 1), [1, 2, 3]);
}

#[test]
fn put_and_get_pixel() {
    let mut f = FrameRGB::filled(3, 3, [0, 0, 0]).unwrap();
    f.put_pixel(1, 2, [9, 8, 7]);
    assert_eq!(f.pixel(1, 2), [9, 8, 7]);
    assert_eq!(f.pixel(2, 1), [0, 0, 0]);
}

#[test]
fn nearest_rounds_and_rejects_outside() {
    let f = gradient_2x2();
    assert_eq!(f.sample_nearest(Point::new(0.6, 0.2)), Some([100.0, 0.0, 0.0]));
    assert_eq!(f.sample_nearest(Point::new(1.4, 1.49)), Some([100.0, 100.0, 200.0]));
    assert_eq!(f.sample_nearest(Point::new(-0.4, 0.0)), Some([0.0, 0.0, 0.0]));
    assert_eq!(f.sample_nearest(Point::new(-0.6, 0.0)), None);
    assert_eq!(f.sample_nearest(Point::new(1.5, 0.0)), None);
    assert_eq!(f.sample_nearest(Point::new(f64::NAN, 0.0)), None);
}

#[test]
fn bilinear_interpolates_inside_and_rejects_outside() {
    let f = gradient_2x2();
    assert_eq!(f.sample_bilinear(Point::new(0.0, 0.0)), Some([0.0, 0.0, 0.0]));
    assert_eq!(f.sample_bilinear(Point::new(1.0, 1.0)), Some([100.0, 100.0, 200.0]));
    assert_eq!(f.sample_bilinear(Point::new(0.5, 0.5)), Some([50.0, 50.0, 50.0]));
    assert_eq!(f.sample_bilinear(Point::new(1.01, 0.0)), None);
}
