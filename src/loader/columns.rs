//! CSV header to `Match` field mapping.

use csv::StringRecord;
use tracing::debug;

use super::ParseError;

const COLUMN_COUNT: usize = 12;

/// A source column the loader knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Tournament,
    Player1Name,
    Player1Faction,
    Player2Name,
    Player2Faction,
    Winner,
    Group,
    GroupStage,
    MatchNumber,
    Player1Score,
    Player2Score,
    Date,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Tournament,
        Column::Player1Name,
        Column::Player1Faction,
        Column::Player2Name,
        Column::Player2Faction,
        Column::Winner,
        Column::Group,
        Column::GroupStage,
        Column::MatchNumber,
        Column::Player1Score,
        Column::Player2Score,
        Column::Date,
    ];

    /// Header text as it appears in the league export.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Tournament => "LMSL",
            Column::Player1Name => "Player 1 Name",
            Column::Player1Faction => "Player 1 Faction",
            Column::Player2Name => "Player 2 Name",
            Column::Player2Faction => "Player 2 Faction",
            Column::Winner => "Winner",
            Column::Group => "Group",
            Column::GroupStage => "Group Stage",
            Column::MatchNumber => "Match Number",
            Column::Player1Score => "Player 1 Score",
            Column::Player2Score => "Player 2 Score",
            Column::Date => "Date",
        }
    }

    /// Whether the export must carry this column.
    pub fn is_required(&self) -> bool {
        !matches!(self, Column::Date)
    }

    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Column::ALL.into_iter().find(|c| c.header() == header)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Resolved positions of every known column in one file.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    positions: [Option<usize>; COLUMN_COUNT],
}

impl ColumnMap {
    /// Build the map from a header row, failing if any required column is absent.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, ParseError> {
        let mut positions = [None; COLUMN_COUNT];

        for (pos, header) in headers.iter().enumerate() {
            match Column::from_header(header) {
                Some(column) => {
                    // First occurrence wins for duplicated headers
                    if positions[column.index()].is_none() {
                        positions[column.index()] = Some(pos);
                    }
                }
                None => debug!("Ignoring unmapped column {:?}", header),
            }
        }

        let missing: Vec<String> = Column::ALL
            .iter()
            .filter(|c| c.is_required() && positions[c.index()].is_none())
            .map(|c| c.header().to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ParseError::MissingColumns(missing));
        }

        Ok(Self { positions })
    }

    pub fn has(&self, column: Column) -> bool {
        self.positions[column.index()].is_some()
    }

    /// Cell for `column` in `record`, or `""` when the row is short or the
    /// column is absent.
    pub fn get<'r>(&self, record: &'r StringRecord, column: Column) -> &'r str {
        self.positions[column.index()]
            .and_then(|pos| record.get(pos))
            .unwrap_or("")
    }
}
