use std::path::PathBuf;

use anyhow::Result;
use bib_screen::filter::keywords::screen;
use bib_screen::{report, Settings};
use clap::Parser;
use tracing::info;

/// Keep entries mentioning at least one IaC term and one quality term.
#[derive(Parser)]
#[command(name = "keyword_screen", about = "Screen a bibliography for IaC and quality keywords")]
struct Cli {
    /// Bibliography to screen
    input: PathBuf,
    /// Where the included entries are written
    output: PathBuf,
    /// CSV of included entries with matched terms
    included_csv: PathBuf,
    /// CSV of excluded entries with reasons
    excluded_csv: PathBuf,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::from_env();
    info!(?settings, input = ?cli.input, "starting keyword screening");

    let text = report::read_bib(&cli.input)?;
    let outcome = screen(&text, settings.title_chars);

    report::write_bib(&cli.output, &outcome.kept)?;
    report::write_included_csv(&cli.included_csv, &outcome.included)?;
    report::write_excluded_csv(&cli.excluded_csv, &outcome.excluded)?;
    info!(
        included = outcome.included.len(),
        excluded = outcome.excluded.len(),
        "keyword screening finished"
    );

    println!(
        "Screening complete. {} entries INCLUDED, {} entries EXCLUDED.",
        outcome.included.len(),
        outcome.excluded.len()
    );
    println!("Included bib written to: {}", cli.output.display());
    println!("Included CSV: {}", cli.included_csv.display());
    println!("Excluded CSV: {}", cli.excluded_csv.display());
    Ok(())
}
