//! Report Dump
//!
//! Parses a turn report and prints the pre-walk artefacts as JSON. Useful
//! for checking what the grammar recognised before blaming the walker.

use std::path::PathBuf;

use clap::Parser;

use tribemap::core::config::MapConfig;
use tribemap::core::error::Result;
use tribemap::report::parse::parse_report;
use tribemap::tiles::Note;

/// Dump a parsed turn report as JSON
#[derive(Parser, Debug)]
#[command(name = "report_dump")]
#[command(about = "Parse a turn report and dump the recognised artefacts")]
struct Args {
    /// The report file to parse
    report: PathBuf,

    /// Optional TOML configuration with policy switches
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also stamp derived step locations before dumping
    #[arg(long)]
    derive: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tribemap=info".into()),
        )
        .init();

    if let Err(error) = run(Args::parse()) {
        tracing::error!("{error}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => MapConfig::load(path)?,
        None => MapConfig::default(),
    };

    let text = std::fs::read_to_string(&args.report)?;
    let mut turn = parse_report(&text, &config)?;

    if args.derive {
        let mut notes: Vec<Note> = Vec::new();
        tribemap::walker::stamp_turn(&mut turn, &mut notes)?;
        for note in notes {
            tracing::warn!("{}", note.message);
        }
    }

    println!("{}", serde_json::to_string_pretty(&turn)?);
    Ok(())
}
