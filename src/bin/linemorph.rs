use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use linemorph::{
    BlendMode, FfmpegSink, FfmpegSinkOpts, Fps, FrameIndex, FrameRange, FrameSink,
    LineCorrespondence, MorphConfig, MorphSession, MorphSessionOpts, PngSequenceSink, Sampling,
};

#[derive(Parser, Debug)]
#[command(name = "linemorph", version, about = "Feature-line image morphing")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the morph as an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Render the morph as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Validate inputs and print a summary without rendering.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// First image (frame 0).
    #[arg(long)]
    source: PathBuf,
    /// Second image (last frame).
    #[arg(long)]
    destination: PathBuf,
    /// Feature lines drawn on the first image (`.mld`).
    #[arg(long)]
    source_lines: PathBuf,
    /// Feature lines drawn on the second image (`.mld`), index-aligned with `--source-lines`.
    #[arg(long)]
    destination_lines: PathBuf,
    /// Optional JSON morph config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct MorphArgs {
    /// Frames per second.
    #[arg(long)]
    fps: Option<u32>,
    /// Morph duration in seconds.
    #[arg(long)]
    duration: Option<f64>,
    /// Number of frame steps (overrides fps * duration); `frames + 1` images are produced.
    #[arg(long)]
    frames: Option<u64>,
    /// Distance smoothing constant `a`.
    #[arg(long)]
    smoothness: Option<f64>,
    /// Distance falloff exponent `b`.
    #[arg(long)]
    line_strength: Option<f64>,
    /// Line length exponent `p`.
    #[arg(long)]
    size_strength: Option<f64>,
    /// Output blend.
    #[arg(long, value_enum)]
    blend: Option<BlendArg>,
    /// Image sampling filter.
    #[arg(long, value_enum)]
    sampling: Option<SamplingArg>,
    /// Draw the intermediate feature lines onto each frame.
    #[arg(long, default_value_t = false)]
    overlay_lines: bool,
}

#[derive(Args, Debug)]
struct ParallelArgs {
    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,
    /// Override worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
    /// Frames per parallel batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
    /// Split each frame's rows across threads.
    #[arg(long, default_value_t = false)]
    parallel_rows: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,
    #[command(flatten)]
    morph: MorphArgs,
    #[command(flatten)]
    parallel: ParallelArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
    /// Fail if the output already exists.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
    /// x264 quality (0-51, lower is better).
    #[arg(long, default_value_t = 18)]
    crf: u8,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    input: InputArgs,
    #[command(flatten)]
    morph: MorphArgs,
    #[command(flatten)]
    parallel: ParallelArgs,

    /// Output directory for the PNG files.
    #[arg(long)]
    out_dir: PathBuf,
    /// File name prefix.
    #[arg(long, default_value = "frame_")]
    prefix: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,
    #[command(flatten)]
    morph: MorphArgs,

    /// Frame index (0-based, up to the frame count inclusive).
    #[arg(long, conflicts_with = "t")]
    frame: Option<u64>,
    /// Morph progress in [0, 1] instead of a frame index.
    #[arg(long)]
    t: Option<f64>,
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    #[command(flatten)]
    input: InputArgs,
    #[command(flatten)]
    morph: MorphArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BlendArg {
    CrossDissolve,
    SourceOnly,
    DestinationOnly,
}

impl From<BlendArg> for BlendMode {
    fn from(v: BlendArg) -> Self {
        match v {
            BlendArg::CrossDissolve => Self::CrossDissolve,
            BlendArg::SourceOnly => Self::SourceOnly,
            BlendArg::DestinationOnly => Self::DestinationOnly,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SamplingArg {
    Nearest,
    Bilinear,
}

impl From<SamplingArg> for Sampling {
    fn from(v: SamplingArg) -> Self {
        match v {
            SamplingArg::Nearest => Self::Nearest,
            SamplingArg::Bilinear => Self::Bilinear,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let sess = build_session(&args.input, &args.morph, session_opts(&args.parallel))?;
    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: args.out.clone(),
        overwrite: !args.no_overwrite,
        crf: args.crf,
    });
    render_all(&sess, &mut sink)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let sess = build_session(&args.input, &args.morph, session_opts(&args.parallel))?;
    let mut sink = PngSequenceSink::new(&args.out_dir).with_prefix(args.prefix);
    render_all(&sess, &mut sink)?;
    eprintln!(
        "wrote {} frames to {}",
        sink.written().len(),
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let sess = build_session(&args.input, &args.morph, MorphSessionOpts::default())?;
    let frame = match (args.frame, args.t) {
        (_, Some(t)) => sess.render_at(t)?,
        (frame, None) => sess.render_frame(FrameIndex(frame.unwrap_or(0)))?,
    };
    linemorph::save_png(&frame, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let sess = build_session(&args.input, &args.morph, MorphSessionOpts::default())?;
    let (w, h) = sess.dimensions();
    let cfg = sess.config();
    println!("images: {w}x{h}");
    println!("lines: {}", sess.lines().len());
    println!(
        "frames: {} ({} steps at {}/{} fps)",
        sess.total_frames(),
        sess.frame_count(),
        cfg.fps.num,
        cfg.fps.den
    );
    println!(
        "warp: a={} b={} p={}",
        cfg.warp.smoothness, cfg.warp.line_strength, cfg.warp.size_strength
    );
    Ok(())
}

fn render_all(sess: &MorphSession, sink: &mut dyn FrameSink) -> anyhow::Result<()> {
    let range: FrameRange = sess.full_range();
    let stats = sess.render_range(range, sink)?;
    tracing::info!(frames = stats.frames_rendered, "morph complete");
    Ok(())
}

fn session_opts(args: &ParallelArgs) -> MorphSessionOpts {
    MorphSessionOpts {
        parallel: args.parallel,
        threads: args.threads,
        chunk_size: args.chunk_size,
        parallel_rows: args.parallel_rows,
        ..MorphSessionOpts::default()
    }
}

fn build_session(
    input: &InputArgs,
    morph: &MorphArgs,
    opts: MorphSessionOpts,
) -> anyhow::Result<MorphSession> {
    let config = load_config(input, morph)?;
    let source = linemorph::load_image(&input.source)?;
    let destination = linemorph::load_image(&input.destination)?;
    let source_lines = linemorph::read_mld(&input.source_lines)
        .with_context(|| format!("read source lines '{}'", input.source_lines.display()))?;
    let destination_lines = linemorph::read_mld(&input.destination_lines).with_context(|| {
        format!(
            "read destination lines '{}'",
            input.destination_lines.display()
        )
    })?;
    let lines = LineCorrespondence::new(source_lines, destination_lines)
        .context("pair source and destination lines")?;
    let sess = MorphSession::new(source, destination, lines, config, opts)?;
    Ok(sess)
}

fn load_config(input: &InputArgs, morph: &MorphArgs) -> anyhow::Result<MorphConfig> {
    let mut config = match &input.config {
        Some(path) => MorphConfig::from_path(path)?,
        None => MorphConfig::default(),
    };
    if let Some(fps) = morph.fps {
        config.fps = Fps::new(fps, 1)?;
    }
    if let Some(duration) = morph.duration {
        config.duration_secs = duration;
    }
    if morph.frames.is_some() {
        config.frame_count = morph.frames;
    }
    if let Some(a) = morph.smoothness {
        config.warp.smoothness = a;
    }
    if let Some(b) = morph.line_strength {
        config.warp.line_strength = b;
    }
    if let Some(p) = morph.size_strength {
        config.warp.size_strength = p;
    }
    if let Some(blend) = morph.blend {
        config.blend = blend.into();
    }
    if let Some(sampling) = morph.sampling {
        config.sampling = sampling.into();
    }
    if morph.overlay_lines {
        config.overlay_lines = true;
    }
    config.validate()?;
    Ok(config)
}
