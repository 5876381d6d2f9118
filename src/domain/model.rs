use crate::utils::error::{Result, ScoresError};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Upstream marker for "no score yet".
pub const SCORE_SENTINEL: i64 = -1;

/// What an unset score looks like in text reports.
pub const UNSET_SCORE_DISPLAY: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Goals(u32),
    Unset,
}

impl Score {
    /// Maps a raw upstream goal count. `-1` becomes `Unset`; any other
    /// negative count is rejected.
    pub fn from_raw(raw: i64) -> Option<Self> {
        if raw == SCORE_SENTINEL {
            Some(Self::Unset)
        } else {
            u32::try_from(raw).ok().map(Self::Goals)
        }
    }

    pub fn goals(&self) -> Option<u32> {
        match self {
            Self::Goals(n) => Some(*n),
            Self::Unset => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so callers can use width/alignment specifiers
        match self {
            Self::Goals(n) => f.pad(&n.to_string()),
            Self::Unset => f.pad(UNSET_SCORE_DISPLAY),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Goals(n) => serializer.serialize_u32(*n),
            Self::Unset => serializer.serialize_none(),
        }
    }
}

/// A normalized match result. Team names are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    home_team: String,
    home_score: Score,
    away_team: String,
    away_score: Score,
}

impl MatchResult {
    pub fn new(
        home_team: impl Into<String>,
        home_score: Score,
        away_team: impl Into<String>,
        away_score: Score,
    ) -> Result<Self> {
        let home_team = home_team.into();
        let away_team = away_team.into();
        if home_team.trim().is_empty() || away_team.trim().is_empty() {
            return Err(ScoresError::malformed("team name is empty"));
        }

        Ok(Self {
            home_team,
            home_score,
            away_team,
            away_score,
        })
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn home_score(&self) -> Score {
        self.home_score
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn away_score(&self) -> Score {
        self.away_score
    }
}

/// One fixture from the fixtures feed, already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Season id taken from the fixture's competition link, if it had one.
    pub league_id: Option<u32>,
    pub result: MatchResult,
}

/// One game from the live feed. `league` is the feed's own label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveGame {
    pub league: String,
    #[serde(flatten)]
    pub result: MatchResult,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub position: u32,
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "playedGames")]
    pub played: u32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
    pub points: u32,
}

/// Rows in ranking order. The order is authoritative and never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueTable {
    pub league_code: String,
    pub rows: Vec<StandingRow>,
}

impl LeagueTable {
    pub fn new(league_code: impl Into<String>, rows: Vec<StandingRow>) -> Self {
        Self {
            league_code: league_code.into(),
            rows,
        }
    }

    /// True when the positions are exactly 1..=n in some order.
    pub fn has_contiguous_positions(&self) -> bool {
        let mut positions: Vec<u32> = self.rows.iter().map(|row| row.position).collect();
        positions.sort_unstable();
        positions
            .iter()
            .enumerate()
            .all(|(i, &position)| position as usize == i + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Status and JSON body of one upstream call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: serde_json::Value) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Stdout,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ScoresError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ScoresError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: stdout, csv, json".to_string(),
            }),
        }
    }
}
