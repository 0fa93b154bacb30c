use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use cleanup_report::collect::gather;
use cleanup_report::report::reconcile;

/// Command-line options for the `cleanup-report` tool
#[derive(Parser)]
#[command(
    name = "cleanup-report",
    about = "Reads cleanup metadata and writes a report of files cleaned up \
             vs. files still needing cleanup",
    version
)]
struct Cli {
    /// The folder to start the search for metadata files
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// The file path to write the report
    #[arg(long, default_value = "report.csv")]
    report: PathBuf,
}

/// Scan the tree, reconcile metadata against it, and write the report
fn run(root: &Path, report: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let survey = gather(root)?;
    let outcome = reconcile(&survey.examples, &survey.files);
    for line in outcome.diagnostics() {
        eprintln!("{line}");
    }
    outcome.write(Some(report))?;
    Ok(())
}

/// Entry point: parse CLI arguments and run the report
fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli.root, &cli.report) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
