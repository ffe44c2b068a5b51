//! Match data loading.
//!
//! Reads the league's CSV export into [`Match`] records:
//! - Header names are resolved through an explicit column table
//! - Missing required headers fail the whole load
//! - Only headers are trimmed; cell values pass through untouched

mod columns;

pub use columns::{Column, ColumnMap};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::models::{Match, MatchResult, Race};

/// Errors raised while loading match data.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read match data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Parse matches from any CSV source.
pub fn parse_matches<R: Read>(source: R) -> Result<Vec<Match>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(source);

    let columns = ColumnMap::from_headers(reader.headers()?)?;
    if !columns.has(Column::Date) {
        debug!("No {} column, match dates left unset", Column::Date.header());
    }

    let mut matches = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1
        matches.push(parse_record(&columns, &record, i + 2));
    }

    Ok(matches)
}

/// Parse matches from CSV text.
pub fn parse_str(text: &str) -> Result<Vec<Match>, ParseError> {
    parse_matches(text.as_bytes())
}

/// Load matches from a CSV file on disk.
pub fn load_matches(path: &Path) -> Result<Vec<Match>, ParseError> {
    let file = File::open(path)?;
    let matches = parse_matches(file)?;
    info!("Loaded {} matches from {:?}", matches.len(), path);
    Ok(matches)
}

/// Load matches, degrading to an empty dataset if the file cannot be read.
pub fn load_or_empty(path: &Path) -> Vec<Match> {
    match load_matches(path) {
        Ok(matches) => matches,
        Err(e) => {
            error!("Error loading match data from {:?}: {}", path, e);
            Vec::new()
        }
    }
}

fn parse_record(columns: &ColumnMap, record: &StringRecord, line: usize) -> Match {
    let cell = |column: Column| columns.get(record, column);

    let race = parse_race(cell(Column::Player1Faction), line);
    let opponent_race = parse_race(cell(Column::Player2Faction), line);

    Match {
        tournament: cell(Column::Tournament).to_string(),
        player: cell(Column::Player1Name).to_string(),
        race,
        opponent: cell(Column::Player2Name).to_string(),
        opponent_race,
        result: MatchResult::from_winner_flag(cell(Column::Winner)),
        group: cell(Column::Group).to_string(),
        group_stage: cell(Column::GroupStage).to_string(),
        match_number: cell(Column::MatchNumber).to_string(),
        player1_score: parse_score(cell(Column::Player1Score), Column::Player1Score, line),
        player2_score: parse_score(cell(Column::Player2Score), Column::Player2Score, line),
        date: parse_date(cell(Column::Date), line),
    }
}

fn parse_race(code: &str, line: usize) -> Race {
    let race = Race::parse(code);
    if !race.is_recognized() && !code.is_empty() {
        warn!("Line {}: unrecognized race code {:?}", line, code);
    }
    race
}

fn parse_score(value: &str, column: Column, line: usize) -> Option<u32> {
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(score) => Some(score),
        Err(_) => {
            warn!("Line {}: ignoring non-numeric {} {:?}", line, column.header(), value);
            None
        }
    }
}

fn parse_date(value: &str, line: usize) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("Line {}: ignoring unparseable date {:?}", line, value);
            None
        }
    }
}
