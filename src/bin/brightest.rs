//! Brightest-stars CLI: reads `hygdata_v40.csv` from the working directory
//! and writes the N brightest stars as an indented JSON report.

use anyhow::Context;
use clap::Parser;
use hyg_brightest::{catalog, report, select};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "brightest")]
#[command(about = "Generate a JSON file of the brightest N stars")]
#[command(version)]
struct Cli {
    /// Number of brightest stars to include
    #[arg(short = 'n', default_value = "10")]
    count: i64,

    /// Output JSON file name
    #[arg(short, long, default_value = "brightest_stars.json")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let catalog_path = Path::new(catalog::CATALOG_FILENAME);
    let stars = catalog::load_catalog(catalog_path)
        .with_context(|| format!("Failed to load {}", catalog::CATALOG_FILENAME))?;
    if cli.verbose {
        eprintln!("Loaded {} catalog rows", stars.len());
    }

    // A non-positive -n yields an empty report rather than an error.
    let n = usize::try_from(cli.count).unwrap_or(0);
    let selected = select::select_brightest(stars, n);
    if cli.verbose {
        eprintln!("Selected {} stars", selected.len());
    }

    let reports: Vec<_> = selected.iter().map(report::assemble).collect();
    report::write_report(&cli.output, &reports)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("Written {} stars to {:?}", reports.len(), cli.output);
    Ok(())
}
