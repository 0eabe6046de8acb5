use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use strokeorder::{
    AnimationHandle, AnimationOptions, Format, Fps, PngSequenceSink, Registry, RenderSession,
    SourcesConfig, StaticSource,
};

#[derive(Parser, Debug)]
#[command(name = "strokeorder", version, about = "Animated stroke-order diagrams")]
struct Cli {
    /// CDN base URL for the HTTP sources (overrides STROKEORDER_CDN_BASE_URL).
    #[arg(long, global = true)]
    cdn_base_url: Option<String>,

    /// HTTP timeout in seconds (overrides STROKEORDER_HTTP_TIMEOUT_SECS).
    #[arg(long, global = true)]
    http_timeout_secs: Option<String>,

    /// JSON array of characters, served as the `local` source.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported formats.
    Formats,
    /// List registered sources.
    Sources,
    /// Render every character of TEXT from every source.
    Render(RenderArgs),
    /// Render one raster frame at an elapsed time as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Characters to render.
    text: String,

    /// Source ids (repeatable).
    #[arg(long = "source", required = true)]
    sources: Vec<String>,

    /// Output format.
    #[arg(long, default_value = "svg-css")]
    format: String,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Animation options as JSON (unset fields keep their defaults).
    #[arg(long)]
    options: Option<String>,

    /// Frames to write for `canvas-2d` (defaults to one loop).
    #[arg(long)]
    frames: Option<u64>,

    /// Frame rate for `canvas-2d`.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Character to render.
    text: String,

    /// Source id.
    #[arg(long)]
    source: String,

    /// Elapsed seconds into the animation.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Animation options as JSON.
    #[arg(long)]
    options: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = RenderSession::new(Arc::new(registry(&cli)?));
    match cli.cmd {
        Command::Formats => {
            for f in session.registry().formats() {
                println!("{f}");
            }
            Ok(())
        }
        Command::Sources => {
            for s in session.registry().sources() {
                println!("{s}");
            }
            Ok(())
        }
        Command::Render(args) => cmd_render(&session, args).await,
        Command::Frame(args) => cmd_frame(&session, args).await,
    }
}

fn registry(cli: &Cli) -> anyhow::Result<Registry> {
    let config = SourcesConfig::from_env()
        .with_overrides(cli.cdn_base_url.as_deref(), cli.http_timeout_secs.as_deref());
    let mut registry = Registry::with_default_sources(&config)?;
    if let Some(path) = &cli.data {
        let local = StaticSource::from_json_file("local", path)?;
        registry = registry.with_source(Arc::new(local));
    }
    Ok(registry)
}

fn parse_options(json: Option<&str>) -> anyhow::Result<AnimationOptions> {
    match json {
        None => Ok(AnimationOptions::default()),
        Some(text) => serde_json::from_str(text).context("invalid --options"),
    }
}

async fn cmd_render(session: &RenderSession, args: RenderArgs) -> anyhow::Result<()> {
    let options = parse_options(args.options.as_deref())?;
    let fps = Fps::new(args.fps, 1)?;
    let sources: Vec<&str> = args.sources.iter().map(String::as_str).collect();
    let outcomes =
        strokeorder::render_all(session, &args.text, &sources, &args.format, &options).await?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let total = outcomes.len();
    let mut failed = 0;
    for outcome in outcomes {
        let written = outcome
            .result
            .map_err(anyhow::Error::from)
            .and_then(|mut handle| write_outcome(&mut handle, &args.out_dir, fps, args.frames));
        match written {
            Ok(path) => eprintln!("wrote {}", path.display()),
            Err(e) => {
                failed += 1;
                eprintln!("{} [{}]: {e:#}", outcome.text, outcome.source);
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {total} renders failed");
    }
    Ok(())
}

fn write_outcome(
    handle: &mut AnimationHandle,
    out_dir: &Path,
    fps: Fps,
    frames: Option<u64>,
) -> anyhow::Result<PathBuf> {
    let stem = format!("{}-{}", handle.code_point(), handle.source());
    if handle.format() == Format::Canvas2d {
        let dir = out_dir.join(stem);
        let frames =
            frames.unwrap_or_else(|| fps.secs_to_frames_ceil(handle.timing().total_duration()));
        let mut sink = PngSequenceSink::new(&dir);
        strokeorder::render_frames(handle, fps, frames, &mut sink)?;
        return Ok(dir);
    }
    let path = out_dir.join(format!("{stem}.svg"));
    let svg = handle
        .to_svg_string()
        .context("animation has no svg document")?;
    std::fs::write(&path, svg).with_context(|| format!("write svg '{}'", path.display()))?;
    Ok(path)
}

async fn cmd_frame(session: &RenderSession, args: FrameArgs) -> anyhow::Result<()> {
    let options = parse_options(args.options.as_deref())?;
    let renderer = session.renderer(&args.source, Format::Canvas2d.id(), options)?;
    let mut handle = renderer.render(&args.text).await?;

    handle.on_frame(0.0);
    handle.on_frame(handle.timing().wrap(args.at));
    let frame = handle.current_frame()?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    strokeorder::encode::png::write_png(&args.out, &frame, &mut Vec::new())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
