use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use stackviz::{Fps, RecordingRenderer, RunSummary, Script, Timeline};

#[derive(Parser, Debug)]
#[command(name = "stackviz", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an operation script and write the recorded timeline as JSON.
    Run(RunArgs),
    /// Play the built-in demo sequence and write the recorded timeline as JSON.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Output timeline JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Frames per second used to quantize step durations.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output timeline JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Number of stack slots.
    #[arg(long, default_value_t = 6)]
    capacity: usize,

    /// Frames per second used to quantize step durations.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => {
            let script = Script::from_path(&args.script)
                .with_context(|| format!("load script '{}'", args.script.display()))?;
            play(&script, args.fps, &args.out)
        }
        Command::Demo(args) => play(&Script::demo(args.capacity), args.fps, &args.out),
    }
}

fn play(script: &Script, fps: u32, out: &Path) -> anyhow::Result<()> {
    let fps = Fps::new(fps, 1).context("invalid --fps")?;
    let (summary, recorder) = script
        .run(RecordingRenderer::new(fps))
        .context("play script")?;
    report(&summary);
    write_timeline(&recorder.timeline(), out)
}

fn report(summary: &RunSummary<i64>) {
    for line in &summary.log {
        eprintln!("{line}");
    }
    eprintln!(
        "{} operations, {} overflow(s), {} underflow(s), final stack {:?}, {:.2}s",
        summary.operations,
        summary.overflows,
        summary.underflows,
        summary.elements,
        summary.duration_secs
    );
}

fn write_timeline(timeline: &Timeline, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = std::fs::File::create(out)
        .with_context(|| format!("create timeline '{}'", out.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(f), timeline)
        .with_context(|| format!("write timeline '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
