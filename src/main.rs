use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;

use keep2bear::convert_note;
use keep2bear::keep::KeepNote;

#[derive(Parser)]
#[command(name = "keep2bear", about = "Convert exported Google Keep notes to Bear", version)]
struct Cli {
    /// Google Takeout directory
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    out: PathBuf,

    /// Do not convert Google Keep colors to Bear tags
    #[arg(long)]
    ignorecolors: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Timestamped directory for this conversion run
    let run_ts = Local::now().format("%Y%m%d_%H%M%S");
    let outdir = cli.out.join(format!("keep2bear_{}", run_ts));
    fs::create_dir(&outdir)
        .with_context(|| format!("Failed to create output directory '{}'", outdir.display()))?;
    println!("Saving output to {}", outdir.display());

    let srcpath = cli.input.join("Keep");
    ensure!(
        srcpath.is_dir(),
        "Could not find 'Keep' directory in '{}'",
        cli.input.display()
    );

    println!("Finding Google Keep files...");
    let pattern = srcpath.join("*.json");
    let keepnotes: Vec<PathBuf> = glob::glob(pattern.to_str().context("Non-UTF-8 input path")?)
        .context("Invalid glob pattern")?
        .collect::<std::result::Result<_, _>>()
        .context("Failed to list note files")?;
    println!("Found {} Google Keep notes.", keepnotes.len());

    for (idx, keepnote) in keepnotes.iter().enumerate() {
        println!("Processing {} / {}...", idx + 1, keepnotes.len());

        // Keep exports carry no creation time; the note file's mtime is
        // the closest available stand-in.
        let mtime = fs::metadata(keepnote)
            .and_then(|m| m.modified())
            .with_context(|| format!("Failed to stat '{}'", keepnote.display()))?;
        let created_ts = DateTime::<Local>::from(mtime);

        let file = File::open(keepnote)
            .with_context(|| format!("Failed to open '{}'", keepnote.display()))?;
        let note: KeepNote = serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse '{}'", keepnote.display()))?;

        convert_note(&note, created_ts, &srcpath, &outdir, cli.ignorecolors)
            .with_context(|| format!("Failed to convert '{}'", keepnote.display()))?;
    }

    println!("\n\nConversion complete.\n");
    Ok(())
}
