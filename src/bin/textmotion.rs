use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "textmotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize all frames and the transition graph, and emit a JSON manifest.
    Synth(SynthArgs),
    /// Print a single frame descriptor as JSON.
    Frame(FrameArgs),
    /// Print what plays at a point in time as JSON.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct SynthArgs {
    /// Input animation config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write the manifest here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input animation config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    index: usize,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input animation config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Time in milliseconds from the start of playback.
    #[arg(long)]
    at_ms: f64,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    status: textmotion::SynthesisStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    topology: Option<textmotion::Topology>,
    #[serde(skip_serializing_if = "Option::is_none")]
    realized_duration_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<&'a textmotion::InMemoryRealizer>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Synth(args) => cmd_synth(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_raw_config(path: &Path) -> anyhow::Result<textmotion::RawConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let raw: textmotion::RawConfig =
        serde_json::from_reader(r).with_context(|| "parse config JSON")?;
    Ok(raw)
}

fn read_config(path: &Path) -> anyhow::Result<textmotion::AnimationConfig> {
    let raw = read_raw_config(path)?;
    Ok(textmotion::AnimationConfig::from_raw(&raw)?)
}

fn cmd_synth(args: SynthArgs) -> anyhow::Result<()> {
    let raw = read_raw_config(&args.in_path)?;

    let mut host = textmotion::InMemoryRealizer::new();
    let result = textmotion::AnimationConfig::from_raw(&raw)
        .and_then(|cfg| textmotion::synthesize(&cfg))
        .and_then(|s| textmotion::realize(&s, &mut host).map(|_| s));

    let manifest = Manifest {
        status: textmotion::SynthesisStatus::from_result(&result),
        topology: result.as_ref().ok().map(|s| s.graph.topology()),
        realized_duration_ms: result.as_ref().ok().map(|s| s.realized_duration_ms()),
        host: result.is_ok().then_some(&host),
    };
    let json = serde_json::to_string_pretty(&manifest).context("serialize manifest")?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json + "\n")
                .with_context(|| format!("write manifest '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }

    result.map(|_| ()).map_err(anyhow::Error::from)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.in_path)?;
    let synthesis = textmotion::synthesize(&cfg)?;
    let Some(frame) = synthesis.frame(textmotion::FrameIndex(args.index)) else {
        anyhow::bail!(
            "frame {} is out of range (animation has {} frames)",
            args.index,
            synthesis.frame_count()
        );
    };
    println!("{}", serde_json::to_string_pretty(frame)?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.in_path)?;
    let synthesis = textmotion::synthesize(&cfg)?;
    let sample = textmotion::Playback::new(&synthesis.graph).sample(args.at_ms);
    println!("{}", serde_json::to_string_pretty(&sample)?);
    Ok(())
}
