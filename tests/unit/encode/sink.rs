use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
        start: FrameIndex(0),
        frame_count: 2,
    }
}

#[test]
fn in_memory_sink_captures_config_and_frames() {
    let mut sink = InMemorySink::new();
    assert!(sink.config().is_none());

    sink.begin(cfg()).unwrap();
    let a = FrameRGB::filled(2, 2, [1, 2, 3]).unwrap();
    let b = FrameRGB::filled(2, 2, [4, 5, 6]).unwrap();
    sink.push_frame(FrameIndex(0), &a).unwrap();
    sink.push_frame(FrameIndex(1), &b).unwrap();
    assert!(!sink.is_finished());
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(&cfg()));
    let frames = sink.into_frames();
    assert_eq!(frames, vec![(FrameIndex(0), a), (FrameIndex(1), b)]);
}

#[test]
fn last_index_is_absolute() {
    let mut c = cfg();
    c.start = FrameIndex(10);
    c.frame_count = 3;
    assert_eq!(c.last_index(), Some(FrameIndex(12)));
    c.frame_count = 0;
    assert_eq!(c.last_index(), None);
}

#[test]
fn begin_resets_previous_run() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &FrameRGB::filled(2, 2, [0, 0, 0]).unwrap())
        .unwrap();
    sink.end().unwrap();

    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_finished());
}
