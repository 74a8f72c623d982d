use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "oledcast", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode an rgb24 video and synthesize its screen circuit into a bundle.
    Build(BuildArgs),
    /// Synthesize the screen circuit only.
    Circuit(CircuitArgs),
    /// Print the color one cell extracts at one frame.
    Probe(ProbeArgs),
}

#[derive(Args, Debug)]
struct ScreenArgs {
    /// Config JSON (missing fields take their defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override screen width in cells.
    #[arg(long)]
    width: Option<u32>,

    /// Override screen height in cells.
    #[arg(long)]
    height: Option<u32>,

    /// Override the sampling frame rate (whole frames per second).
    #[arg(long)]
    fps: Option<u32>,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Raw rgb24 frames (`ffmpeg -f rawvideo -pix_fmt rgb24`).
    #[arg(long)]
    raw: PathBuf,

    /// Output bundle JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Caption events JSON (`[{"start_secs": 0.0, "text": "..."}]`).
    #[arg(long)]
    captions: Option<PathBuf>,

    /// Source video name used for the bundle filename; defaults to the raw file name.
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    screen: ScreenArgs,
}

#[derive(Parser, Debug)]
struct CircuitArgs {
    /// Output circuit JSON path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    screen: ScreenArgs,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Raw rgb24 frames.
    #[arg(long)]
    raw: PathBuf,

    /// Cell column (0 = left).
    #[arg(long)]
    x: u32,

    /// Cell row (0 = top).
    #[arg(long)]
    y: u32,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    #[command(flatten)]
    screen: ScreenArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Circuit(args) => cmd_circuit(args),
        Command::Probe(args) => cmd_probe(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(screen: &ScreenArgs) -> anyhow::Result<oledcast::OledConfig> {
    let mut config = match &screen.config {
        Some(path) => oledcast::OledConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => oledcast::OledConfig::default(),
    };
    if let Some(w) = screen.width {
        config.width = w;
    }
    if let Some(h) = screen.height {
        config.height = h;
    }
    if let Some(fps) = screen.fps {
        config.fps = oledcast::Fps::new(fps, 1)?;
    }
    config.validate()?;
    Ok(config)
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let config = load_config(&args.screen)?;
    let samples = oledcast::read_rgb24_file(&args.raw)?;
    let captions = args
        .captions
        .as_deref()
        .map(oledcast::read_captions_file)
        .transpose()
        .with_context(|| "read captions")?;

    let name = match &args.name {
        Some(n) => n.clone(),
        None => args
            .raw
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .with_context(|| format!("raw path '{}' has no file name", args.raw.display()))?,
    };

    let bundle = oledcast::build_bundle(&config, &name, &samples, captions.as_deref())?;
    let json = bundle.to_json_pretty()?;
    write_output(&args.out, &json)?;

    eprintln!(
        "wrote {} ({} frames, {} colors, {} wires)",
        args.out.display(),
        bundle.video_data_length / bundle.geometry.frame_length,
        bundle.dictionary_length / oledcast::ENTRY_LEN,
        bundle.circuit.wires.len()
    );
    println!("sha256: {}", sha256_hex(json.as_bytes()));
    Ok(())
}

fn cmd_circuit(args: CircuitArgs) -> anyhow::Result<()> {
    let config = load_config(&args.screen)?;
    let circuit = oledcast::synthesize(&config)?;
    let record = oledcast::CircuitRecord::from_circuit(&circuit)?;
    let json = serde_json::to_string_pretty(&record).with_context(|| "serialize circuit")?;
    write_output(&args.out, &json)?;

    eprintln!(
        "wrote {} ({} splitters, {} extractors, {} wires)",
        args.out.display(),
        record.splitters.len(),
        record.extractors.len(),
        record.wires.len()
    );
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let config = load_config(&args.screen)?;
    let geom = config.geometry();
    let samples = oledcast::read_rgb24_file(&args.raw)?;

    let palette = oledcast::Palette::by_frequency(&samples)?;
    let stream = oledcast::encode_stream(&samples, &palette, geom, config.max_frames)?;
    let frame = stream.frame(geom, args.frame).with_context(|| {
        format!(
            "frame {} is past the end ({} frames)",
            args.frame, stream.frames
        )
    })?;

    let rule = oledcast::ExtractionPattern::for_cell(geom, args.x, args.y)?;
    let buffer = format!("{frame}{}", palette.dictionary());
    match rule.extract(&buffer) {
        Some(color) => println!("{color}"),
        None => anyhow::bail!("cell ({}, {}) matched nothing", args.x, args.y),
    }
    Ok(())
}

fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
