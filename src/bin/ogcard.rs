use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ogcard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a project snapshot to a PNG preview card.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input project snapshot JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print per-face metrics diagnostics (ascent/descent and one glyph
    /// cell advance).
    #[arg(long)]
    dump_metrics: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.in_path)
        .with_context(|| format!("open snapshot '{}'", args.in_path.display()))?;
    let snapshot: ogcard::ProjectSnapshot =
        serde_json::from_str(&raw).with_context(|| "parse snapshot JSON")?;

    if args.dump_metrics {
        dump_metrics()?;
    }

    let response = ogcard::render_snapshot(&snapshot)?;

    if let Some(parent) = args.out.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    fs::write(&args.out, &response.bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn dump_metrics() -> anyhow::Result<()> {
    let faces = ogcard::faces()?;
    eprintln!("face metrics (pixels at the 2x working scale):");
    for (name, face) in [
        ("logo", &faces.logo),
        ("title", &faces.title),
        ("body", &faces.body),
        ("badge", &faces.badge),
        ("small", &faces.small),
    ] {
        eprintln!(
            "  {name}: ascent {} descent {} cell {}",
            face.ascent(),
            face.descent(),
            ogcard::measure_width(face, "M"),
        );
    }
    Ok(())
}
