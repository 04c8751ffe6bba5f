use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use mahjong_standings::export::{self, ExportFormat};
use mahjong_standings::fetch::{self, SheetClient, SheetSource, DEFAULT_BASE_URL};
use mahjong_standings::format::{number, pad_name, signed_score};
use mahjong_standings::grid;
use mahjong_standings::ranking::{self, RankingContext, Standings};
use mahjong_standings::render::{self, LoadState};
use mahjong_standings::sheet::{self, SheetLayout};
use mahjong_standings::xlsx;
use mahjong_standings::DerivedDataset;

const DEFAULT_SHEET_ID: &str = "1-aLG1gcyNOYVY-vBKaO1QdBae3RA43ltCnyOKLWcc2o";
const DEFAULT_GID: &str = "825955046"; // 2026 tab

#[derive(Parser)]
#[command(name = "mahjong-standings")]
#[command(about = "Leaderboards for the mahjong tournament score sheet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Read a local CSV export instead of fetching the sheet
    #[arg(long)]
    input: Option<PathBuf>,

    /// Spreadsheet id
    #[arg(long, env = "STANDINGS_SHEET_ID", default_value = DEFAULT_SHEET_ID)]
    sheet_id: String,

    /// Tab (gid) to export
    #[arg(long, env = "STANDINGS_GID", default_value = DEFAULT_GID)]
    gid: String,

    /// Base URL of the spreadsheet export service
    #[arg(long, env = "STANDINGS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

impl SourceArgs {
    fn sheet_source(&self) -> SheetSource {
        SheetSource::new(&self.sheet_id, &self.gid).with_base_url(&self.base_url)
    }

    fn load_text(&self) -> mahjong_standings::Result<String> {
        match &self.input {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => SheetClient::new()?.fetch_text(&self.sheet_source()),
        }
    }

    fn load(&self) -> mahjong_standings::Result<DerivedDataset> {
        match &self.input {
            Some(path) => sheet::read_dataset_file(path),
            None => fetch::fetch_dataset(&self.sheet_source()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the leaderboards
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Month (1-12) for the hot-streak board; defaults to the current month
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// List every player record and the sessions seen
    Players {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write players and leaderboards to a CSV, JSON or Excel file
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (.csv, .json or .xlsx)
        #[arg(short, long)]
        output: PathBuf,

        /// Month (1-12) for the hot-streak board; defaults to the current month
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Check that the sheet matches the expected layout
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { source, month } => {
            show(&source, month)?;
        }
        Commands::Players { source } => {
            players(&source)?;
        }
        Commands::Export { source, output, month } => {
            export_file(&source, &output, month)?;
        }
        Commands::Validate { source } => {
            validate(&source)?;
        }
    }

    Ok(())
}

fn show(source: &SourceArgs, month: Option<u32>) -> Result<()> {
    let ctx = RankingContext::default();
    let month = month.unwrap_or_else(ranking::current_month);

    eprint!("{}", render::render_state(&LoadState::Loading, month, &ctx));
    let state = LoadState::from_result(source.load());
    print!("{}", render::render_state(&state, month, &ctx));

    if state == LoadState::Failed {
        std::process::exit(1);
    }
    Ok(())
}

fn players(source: &SourceArgs) -> Result<()> {
    let dataset = source.load().context("Failed to load player data")?;

    println!("Players: {}", dataset.players.len());
    for player in &dataset.players {
        println!(
            "  {} {:>4} games  {:>8}  {}W {}L  ({} sessions listed, {})",
            pad_name(&player.name, 20),
            number(player.games_count),
            signed_score(player.total_score),
            number(player.wins),
            number(player.losses),
            player.games.len(),
            signed_score(player.detail_score())
        );
    }
    println!();

    println!("Sessions: {}", dataset.dates.len());
    if !dataset.dates.is_empty() {
        println!("  {}", dataset.dates.join(", "));
    }

    Ok(())
}

fn export_file(source: &SourceArgs, output: &Path, month: Option<u32>) -> Result<()> {
    // Reject the output path before fetching anything
    let Some(format) = ExportFormat::from_path(output) else {
        anyhow::bail!("Unsupported output format: {}", output.display());
    };

    let dataset = source.load().context("Failed to load player data")?;
    let month = month.unwrap_or_else(ranking::current_month);
    let standings = Standings::compute(&dataset.players, month, &RankingContext::default());

    match format {
        ExportFormat::Csv => {
            println!("Writing CSV file: {}", output.display());
            export::write_players_csv(&dataset.players, output)
                .context("Failed to write CSV file")?;
        }
        ExportFormat::Json => {
            println!("Writing JSON file: {}", output.display());
            export::write_standings_json(&dataset, &standings, output)
                .context("Failed to write JSON file")?;
        }
        ExportFormat::Xlsx => {
            println!("Writing Excel file: {}", output.display());
            xlsx::write_standings_to_xlsx(&dataset, &standings, output)
                .context("Failed to write Excel file")?;
        }
    }

    println!("Done!");
    Ok(())
}

fn validate(source: &SourceArgs) -> Result<()> {
    let text = source.load_text().context("Failed to load sheet text")?;

    let mut issues = Vec::new();
    for line in grid::unbalanced_quote_lines(&text) {
        log::warn!("Line {} has an unterminated quote", line);
        issues.push(format!("Line {}: unterminated quote", line));
    }

    let parsed = grid::parse_grid(&text);
    let dataset = sheet::extract_strict(&parsed, &SheetLayout::default())
        .context("Sheet does not match the expected layout")?;

    println!("Sheet layout is valid");
    println!("  {} players", dataset.players.len());
    println!("  {} sessions", dataset.dates.len());

    if issues.is_empty() {
        println!("  No issues found");
    } else {
        println!("  Issues found:");
        for issue in issues {
            println!("    - {}", issue);
        }
    }

    Ok(())
}
