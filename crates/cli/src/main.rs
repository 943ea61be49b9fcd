//! Command-line entry point that unzips the synthetic dataset.
//!
//! Reads `data/synthetic_1k.zip` from the repository root and leaves its CSV
//! files directly under `data/raw/`.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use unpacker::{unpack, Progress, UnpackError, UnpackOptions};

#[derive(Parser)]
#[command(name = "unzip-data")]
#[command(version, about = "Unzip the synthetic 1K patient dataset into data/raw/", long_about = None)]
struct Cli {}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    if let Err(e) = run(&repo_root()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Workspace root, two levels above this crate's manifest.
///
/// The path is fixed at build time, so the binary must be run from the source
/// checkout it was built in.
fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run(root: &Path) -> Result<(), UnpackError> {
    let options = UnpackOptions::for_repo_root(root);

    let report = unpack(&options, &|progress: &Progress<'_>| {
        if let Progress::Extracting {
            archive,
            output_dir,
        } = progress
        {
            println!("Extracting {} → {}/", archive.display(), output_dir.display());
        }
    })?;

    print!(
        "{}",
        unpacker::report::render_summary(&options.report_label(), &report.outputs)
    );
    Ok(())
}
