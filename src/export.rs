//! CSV and JSON output of players and standings

use crate::error::Result;
use crate::model::{DerivedDataset, PlayerRecord};
use crate::ranking::Standings;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output file kinds, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    /// Format for `path`'s extension (case-insensitive), `None` if unsupported
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}

/// One CSV row per player
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct PlayerSummaryRow<'a> {
    name: &'a str,
    games_count: f64,
    total_score: f64,
    wins: f64,
    losses: f64,
    win_rate: String,
    /// Non-zero sessions listed in the detail rows
    sessions_listed: usize,
    detail_score: f64,
}

impl<'a> From<&'a PlayerRecord> for PlayerSummaryRow<'a> {
    fn from(p: &'a PlayerRecord) -> Self {
        Self {
            name: &p.name,
            games_count: p.games_count,
            total_score: p.total_score,
            wins: p.wins,
            losses: p.losses,
            win_rate: format!("{:.1}", p.win_rate()),
            sessions_listed: p.games.len(),
            detail_score: p.detail_score(),
        }
    }
}

pub fn write_players_csv_to<W: Write>(players: &[PlayerRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for player in players {
        csv_writer.serialize(PlayerSummaryRow::from(player))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the player summary table to a CSV file
pub fn write_players_csv(players: &[PlayerRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_players_csv_to(players, file)
}

#[derive(Debug, Serialize)]
struct StandingsReport<'a> {
    dataset: &'a DerivedDataset,
    standings: &'a Standings,
}

/// Write the dataset and its standings as pretty-printed JSON
pub fn write_standings_json(
    dataset: &DerivedDataset,
    standings: &Standings,
    path: &Path,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &StandingsReport { dataset, standings })?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::RankingContext;

    fn players() -> Vec<PlayerRecord> {
        vec![
            PlayerRecord::new("Amy")
                .with_games_count(4.0)
                .with_total_score(12.5)
                .with_record(3.0, 1.0)
                .with_game("1/5", 10.0)
                .with_game("1/6", -2.0),
            PlayerRecord::new("Ben, Jr.").with_games_count(1.0),
        ]
    }

    #[test]
    fn test_export_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/standings.CSV")),
            Some(ExportFormat::Csv)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("standings.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("standings.xlsx")),
            Some(ExportFormat::Xlsx)
        );
        assert_eq!(ExportFormat::from_path(Path::new("standings.pdf")), None);
        assert_eq!(ExportFormat::from_path(Path::new("standings")), None);
    }

    #[test]
    fn test_players_csv() {
        let mut buf = Vec::new();
        write_players_csv_to(&players(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Name,GamesCount,TotalScore,Wins,Losses,WinRate,SessionsListed,DetailScore"
        );
        assert_eq!(lines[1], "Amy,4.0,12.5,3.0,1.0,75.0,2,8.0");
        assert_eq!(lines[2], "\"Ben, Jr.\",1.0,0.0,0.0,0.0,0.0,0,0.0");
    }

    #[test]
    fn test_standings_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("standings.json");
        let dataset = DerivedDataset {
            players: players(),
            dates: vec!["1/5".to_string(), "1/6".to_string()],
        };
        let standings = Standings::compute(&dataset.players, 1, &RankingContext::default());

        write_standings_json(&dataset, &standings, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["dataset"]["dates"][1], "1/6");
        assert_eq!(value["standings"]["month"], 1);
        assert_eq!(value["standings"]["by_score"][0]["name"], "Amy");
        assert_eq!(value["standings"]["hot_streak"][0]["month_score"], 8.0);
    }
}
