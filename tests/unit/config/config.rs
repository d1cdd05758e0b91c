use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = MorphConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, MorphConfig::default());
    assert_eq!(cfg.warp.smoothness, 0.5);
    assert_eq!(cfg.warp.line_strength, 1.25);
    assert_eq!(cfg.warp.size_strength, 0.25);
    assert_eq!(cfg.resolved_frame_count(), 48);
    cfg.validate().unwrap();
}

#[test]
fn fields_parse_in_snake_case() {
    let json = r#"{
        "warp": { "smoothness": 1.0 },
        "fps": { "num": 30, "den": 1 },
        "duration_secs": 0.5,
        "blend": "source_only",
        "sampling": "bilinear",
        "overlay_lines": true
    }"#;
    let cfg = MorphConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.warp.smoothness, 1.0);
    assert_eq!(cfg.warp.line_strength, 1.25);
    assert_eq!(cfg.blend, BlendMode::SourceOnly);
    assert_eq!(cfg.sampling, Sampling::Bilinear);
    assert!(cfg.overlay_lines);
    assert_eq!(cfg.resolved_frame_count(), 15);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = MorphConfig::from_reader(r#"{ "framerate": 24 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, MorphError::Validation(_)));
    assert!(MorphConfig::from_reader(r#"{ "warp": { "a": 1 } }"#.as_bytes()).is_err());
}

#[test]
fn explicit_frame_count_wins() {
    let cfg = MorphConfig {
        frame_count: Some(5),
        duration_secs: 0.0,
        ..MorphConfig::default()
    };
    assert_eq!(cfg.resolved_frame_count(), 5);
    cfg.validate().unwrap();
}

#[test]
fn frame_count_floors_fractional_frames() {
    let cfg = MorphConfig {
        fps: Fps { num: 10, den: 1 },
        duration_secs: 0.39,
        ..MorphConfig::default()
    };
    assert_eq!(cfg.resolved_frame_count(), 3);
}

#[test]
fn validate_rejects_bad_values() {
    let zero_smooth = MorphConfig {
        warp: WarpParams {
            smoothness: 0.0,
            ..WarpParams::default()
        },
        ..MorphConfig::default()
    };
    assert!(zero_smooth.validate().is_err());

    let zero_fps = MorphConfig {
        fps: Fps { num: 0, den: 1 },
        ..MorphConfig::default()
    };
    assert!(zero_fps.validate().is_err());

    let negative_duration = MorphConfig {
        duration_secs: -1.0,
        ..MorphConfig::default()
    };
    assert!(negative_duration.validate().is_err());

    let too_short = MorphConfig {
        duration_secs: 0.01,
        ..MorphConfig::default()
    };
    assert!(too_short.validate().is_err());

    let zero_frames = MorphConfig {
        frame_count: Some(0),
        ..MorphConfig::default()
    };
    assert!(zero_frames.validate().is_err());
}

#[test]
fn oversized_frame_counts_are_rejected() {
    let at_cap = MorphConfig {
        frame_count: Some(MAX_FRAME_COUNT),
        ..MorphConfig::default()
    };
    at_cap.validate().unwrap();

    let explicit = MorphConfig {
        frame_count: Some(u64::MAX),
        ..MorphConfig::default()
    };
    assert!(matches!(explicit.validate(), Err(MorphError::Validation(_))));

    // Saturates the float-to-int conversion.
    let long = MorphConfig {
        duration_secs: 1e30,
        ..MorphConfig::default()
    };
    assert_eq!(long.resolved_frame_count(), u64::MAX);
    assert!(long.validate().is_err());
}

#[test]
fn compose_opts_carry_config_values() {
    let cfg = MorphConfig {
        blend: BlendMode::DestinationOnly,
        sampling: Sampling::Bilinear,
        ..MorphConfig::default()
    };
    let opts = cfg.compose_opts(true);
    assert_eq!(opts.blend, BlendMode::DestinationOnly);
    assert_eq!(opts.sampling, Sampling::Bilinear);
    assert_eq!(opts.warp, cfg.warp);
    assert!(opts.parallel_rows);
}

#[test]
fn missing_file_is_a_validation_error() {
    assert!(matches!(
        MorphConfig::from_path("no/such/config.json"),
        Err(MorphError::Validation(_))
    ));
}
