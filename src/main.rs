//! Tribemap - Entry Point
//!
//! Reads one or more turn reports, replays every unit's movements into a
//! consolidated tile map, and writes the neutral schema document as JSON.
//! Reports may be given in any order; they are processed ascending by
//! turn id.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use tribemap::core::config::MapConfig;
use tribemap::core::error::Result;
use tribemap::core::unit::UnitId;
use tribemap::report::parse::parse_report;
use tribemap::report::ParsedTurn;
use tribemap::schema::{emit_document, EmitInfo};
use tribemap::tiles::Note;
use tribemap::walker::{stamp_turns, walk_turns};

/// Consolidate TribeNet turn reports into a world map
#[derive(Parser, Debug)]
#[command(name = "tribemap")]
#[command(about = "Parse turn reports, walk unit movements, emit the map schema")]
struct Args {
    /// Turn report files, any order
    #[arg(required = true)]
    reports: Vec<PathBuf>,

    /// Clan whose perspective the map takes (e.g. 0987)
    #[arg(long)]
    clan: String,

    /// Game identifier stamped into the document header
    #[arg(long, default_value = "TN1")]
    game: String,

    /// Where to write the schema document
    #[arg(long, default_value = "map.json")]
    output: PathBuf,

    /// Where to write the consolidated tile list, if anywhere
    #[arg(long)]
    tiles: Option<PathBuf>,

    /// Optional TOML configuration with policy switches
    #[arg(long)]
    config: Option<PathBuf>,
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
    let clan = UnitId::parse(&args.clan)?;

    let mut turns: Vec<ParsedTurn> = Vec::with_capacity(args.reports.len());
    for path in &args.reports {
        tracing::info!("parsing {}", path.display());
        let text = std::fs::read_to_string(path)?;
        turns.push(parse_report(&text, &config)?);
    }
    turns.sort_by_key(|t| t.id);

    let mut notes: Vec<Note> = Vec::new();
    stamp_turns(&mut turns, &mut notes)?;

    let map = walk_turns(&mut turns, &clan, &config)?;
    notes.extend(map.notes.iter().cloned());

    for note in &notes {
        tracing::debug!("note: {}", note.message);
    }
    tracing::info!(
        "walked {} turn(s) into {} tile(s), {} note(s)",
        turns.len(),
        map.len(),
        notes.len(),
    );

    let source = args
        .reports
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let created = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_default();

    let document = emit_document(&turns, &notes, &EmitInfo {
        game: args.game.clone(),
        clan,
        source,
        created,
    });

    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(&args.output, json)?;
    tracing::info!("wrote {}", args.output.display());

    if let Some(path) = &args.tiles {
        let tiles = serde_json::to_string_pretty(&map.sorted_tiles())?;
        std::fs::write(path, tiles)?;
        tracing::info!("wrote {}", path.display());
    }

    Ok(())
}
