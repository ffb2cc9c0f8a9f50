use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gigapan_core::consts::DEFAULT_OUTPUT_FILE;
use gigapan_core::scan::shot_count;
use gigapan_core::sink::{run_scan_reported, CoordinateWriter};
use indicatif::{ProgressBar, ProgressStyle};

use super::input::SpecArgs;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Output coordinate file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let spec = args.spec.resolve()?;
    // A dry run sizes the progress bar; the scan is cheap next to the I/O.
    let total = shot_count(&spec)?;

    let mut writer = CoordinateWriter::create(&args.output)
        .with_context(|| format!("Failed to open {} for output", args.output.display()))?;

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Writing coordinates");

    let report = run_scan_reported(&spec, &mut writer, |shots| pb.set_position(shots as u64))
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    writer
        .finalize()
        .with_context(|| format!("Failed to close {}", args.output.display()))?;

    pb.finish_with_message("Done");
    println!(
        "\n{} coordinates written to {}",
        report.shots,
        args.output.display()
    );

    Ok(())
}
