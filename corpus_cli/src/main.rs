use std::path::PathBuf;

use clap::Parser;
use log::debug;

use corpus_core::audio::SymphoniaDurations;
use corpus_core::chart::DurationChart;
use corpus_core::{Error, Result, pipeline};

/// Measure the audio clips listed in an annotation CSV and write a
/// duration-sorted manifest.
#[derive(Parser, Debug)]
#[command(name = "corpus", version)]
#[command(about = "Annotate a dataset manifest with per-clip audio durations")]
struct Args {
    /// Path to the annotation CSV
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the duration-annotated manifest CSV
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let input = args
        .input
        .ok_or_else(|| Error::InvalidInput("no annotation file given, pass --input".to_string()))?;
    let output = args
        .output
        .ok_or_else(|| Error::InvalidInput("no output path given, pass --output".to_string()))?;

    pipeline::run(&input, &output, &SymphoniaDurations, &DurationChart::default())?;
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    debug!("args: {args:?}");

    // One printed line per failure; the process still exits 0.
    if let Err(err) = run(args) {
        println!("Error: {err}");
    }
}
