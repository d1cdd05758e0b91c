use super::*;
use crate::foundation::core::Fps;

fn out_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("unit-png-seq")
        .join(name)
}

fn cfg(frame_count: u64) -> SinkConfig {
    cfg_from(0, frame_count)
}

fn cfg_from(start: u64, frame_count: u64) -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
        start: FrameIndex(start),
        frame_count,
    }
}

#[test]
fn frame_paths_are_zero_padded() {
    let sink = PngSequenceSink::new("out");
    assert_eq!(
        sink.frame_path(FrameIndex(7)),
        PathBuf::from("out").join("frame_00007.png")
    );
    let sink = sink.with_prefix("m");
    assert_eq!(
        sink.frame_path(FrameIndex(12)),
        PathBuf::from("out").join("m00012.png")
    );
}

#[test]
fn writes_one_png_per_frame() {
    let dir = out_dir("basic");
    let _ = std::fs::remove_dir_all(&dir);
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg(2)).unwrap();
    let a = FrameRGB::filled(2, 2, [255, 0, 0]).unwrap();
    let b = FrameRGB::filled(2, 2, [0, 0, 255]).unwrap();
    sink.push_frame(FrameIndex(0), &a).unwrap();
    sink.push_frame(FrameIndex(1), &b).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    let back = crate::assets::decode::load_image(&dir.join("frame_00001.png")).unwrap();
    assert_eq!(back, b);
}

#[test]
fn long_sequences_widen_the_counter() {
    let dir = out_dir("wide");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg(1_000_000)).unwrap();
    assert_eq!(
        sink.frame_path(FrameIndex(3)),
        dir.join("frame_000003.png")
    );
}

#[test]
fn counter_width_follows_absolute_indices() {
    let dir = out_dir("offset");
    let mut sink = PngSequenceSink::new(&dir);
    // Two frames, but the last one is index 100_000.
    sink.begin(cfg_from(99_999, 2)).unwrap();
    assert_eq!(
        sink.frame_path(FrameIndex(99_999)),
        dir.join("frame_099999.png")
    );
    assert_eq!(
        sink.frame_path(FrameIndex(100_000)),
        dir.join("frame_100000.png")
    );
}

#[test]
fn wrong_frame_size_is_rejected() {
    let mut sink = PngSequenceSink::new(out_dir("size"));
    sink.begin(cfg(1)).unwrap();
    let f = FrameRGB::filled(3, 2, [0, 0, 0]).unwrap();
    assert!(matches!(
        sink.push_frame(FrameIndex(0), &f),
        Err(MorphError::Validation(_))
    ));
}

#[test]
fn end_without_begin_fails() {
    let mut sink = PngSequenceSink::new(out_dir("unstarted"));
    assert!(sink.end().is_err());
}
