use std::path::PathBuf;

use anyhow::Result;
use bib_screen::filter::types::{filter_types, EXCLUDED_TYPES};
use bib_screen::report;
use clap::Parser;
use itertools::Itertools;
use tracing::info;

/// Remove entries of excluded types and entries without a title.
#[derive(Parser)]
#[command(name = "remove_types", about = "Drop @book/@proceedings entries and entries without a title")]
struct Cli {
    /// Bibliography to filter
    input: PathBuf,
    /// Where the kept entries are written
    output: PathBuf,
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
    info!(input = ?cli.input, "starting type/title filter");

    let text = report::read_bib(&cli.input)?;
    let outcome = filter_types(&text);
    report::write_bib(&cli.output, &outcome.kept)?;
    info!(
        processed = outcome.processed,
        kept = outcome.kept_count(),
        "type/title filter finished"
    );

    println!("Processed {} entries.", outcome.processed);
    println!(
        "Removed {} entries of excluded types: {}",
        outcome.removed_type,
        EXCLUDED_TYPES.iter().sorted().join(", ")
    );
    println!("Removed {} entries without a title field.", outcome.removed_notitle);
    println!(
        "Kept {} entries. Written to {}.",
        outcome.kept_count(),
        cli.output.display()
    );
    Ok(())
}
