use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a scene file.
    Validate(ValidateArgs),
    /// Sweep a scroll range through a scene and print the resulting transforms.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First scroll offset, in px.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last scroll offset, in px. Defaults to the bottom of the container.
    #[arg(long)]
    to: Option<f64>,

    /// Distance between sampled offsets, in px.
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Override the scene's viewport, as `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_viewport)]
    viewport: Option<scrollfx::Viewport>,

    /// Render with reduced motion.
    #[arg(long)]
    reduced_motion: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Css,
}

#[derive(serde::Serialize)]
struct SimulatedFrame {
    scroll_y: f64,
    progress: f64,
    recomputed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    beam: Option<scrollfx::BeamState>,
    elements: Vec<SimulatedElement>,
}

#[derive(serde::Serialize)]
struct SimulatedElement {
    id: String,
    #[serde(flatten)]
    snapshot: scrollfx::ElementSnapshot,
    css: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn parse_viewport(s: &str) -> Result<scrollfx::Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    scrollfx::Viewport::new(w, h).map_err(|e| e.to_string())
}

fn read_scene_json(path: &Path) -> anyhow::Result<scrollfx::SceneConfig> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg: scrollfx::SceneConfig =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(cfg)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let cfg = read_scene_json(&args.in_path)?;
    cfg.validate()
        .with_context(|| format!("validate scene '{}'", args.in_path.display()))?;
    println!(
        "{}: ok ({} items, max scroll {}px)",
        args.in_path.display(),
        cfg.items.len(),
        cfg.max_scroll()
    );
    Ok(())
}

const MAX_FRAMES: usize = 100_000;

fn sweep(from: f64, to: f64, step: f64) -> anyhow::Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        anyhow::bail!("--step must be a positive number, got {step}");
    }
    if !(from.is_finite() && to.is_finite()) {
        anyhow::bail!("--from and --to must be finite");
    }
    let dir = if to >= from { 1.0 } else { -1.0 };
    let steps = ((to - from).abs() / step).floor();
    if steps >= MAX_FRAMES as f64 {
        anyhow::bail!(
            "sweep from {from} to {to} by {step} needs more than {MAX_FRAMES} frames; raise --step"
        );
    }
    let n = steps as usize;
    let mut out: Vec<f64> = (0..=n).map(|k| from + dir * k as f64 * step).collect();
    if out.last().is_some_and(|&y| y != to) {
        out.push(to);
    }
    Ok(out)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut cfg = read_scene_json(&args.in_path)?;
    if let Some(vp) = args.viewport {
        cfg.layout.viewport = vp;
    }
    if args.reduced_motion {
        cfg.motion = scrollfx::MotionPreference::Reduced;
    }
    cfg.validate()
        .with_context(|| format!("validate scene '{}'", args.in_path.display()))?;

    let offsets = sweep(args.from, args.to.unwrap_or_else(|| cfg.max_scroll()), args.step)?;

    let sensor = cfg.simulated_viewport();
    let mut scene = cfg.build_scene().with_context(|| "build scene")?;
    let mut styles = scrollfx::StyleTable::new();
    scene.mount(sensor.clone());

    let mut frames = Vec::with_capacity(offsets.len());
    for y in offsets {
        sensor.scroll_to(y);
        let report = scene.frame(&mut styles);
        let elements = scene
            .snapshot()
            .into_iter()
            .zip(scene.elements())
            .map(|(snapshot, el)| SimulatedElement {
                id: el.content().id.clone(),
                css: scrollfx::StyleDecl::from(&snapshot.transform).css_text(),
                snapshot,
            })
            .collect();
        frames.push(SimulatedFrame {
            scroll_y: y,
            progress: report.progress,
            recomputed: report.recomputed,
            beam: cfg
                .timeline()
                .map(|t| t.beam_state(report.progress, scene.layout().snapshot())),
            elements,
        });
    }
    scene.unmount(&mut styles);

    match args.format {
        OutputFormat::Json => {
            let out = serde_json::to_string_pretty(&frames).with_context(|| "encode frames")?;
            println!("{out}");
        }
        OutputFormat::Css => {
            for frame in &frames {
                println!("/* scroll_y: {} progress: {} */", frame.scroll_y, frame.progress);
                for el in &frame.elements {
                    println!("#{} {{ {} }}", el.id, el.css);
                }
                if let Some(beam) = frame.beam {
                    println!(
                        ".beam {{ height: {}px; opacity: {}; }}",
                        beam.height, beam.opacity
                    );
                }
            }
        }
    }
    Ok(())
}
