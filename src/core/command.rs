use crate::core::dispatcher::{invalid_argument_message, ReportKind, ReportParams};
use crate::utils::error::{Result, ScoresError};
use crate::utils::validation::validate_range;
use std::fmt;
use std::str::FromStr;

pub const INVALID_SPORT_MESSAGE: &str =
    "Invalid sport. Please try `/scores football` or `/scores cricket`";

/// Longest lookback the fixtures endpoint accepts.
pub const MAX_WINDOW_DAYS: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sport {
    Football,
    Cricket,
    Tennis,
}

impl Sport {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Football)
    }

    pub fn not_supported_message(&self) -> String {
        let name = match self {
            Self::Football => "Football",
            Self::Cricket => "Cricket",
            Self::Tennis => "Tennis",
        };
        format!("{} scores are not supported yet.", name)
    }
}

impl FromStr for Sport {
    type Err = ScoresError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "football" | "soccer" => Ok(Self::Football),
            "cricket" => Ok(Self::Cricket),
            "tennis" => Ok(Self::Tennis),
            _ => Err(ScoresError::InvalidCommand {
                message: INVALID_SPORT_MESSAGE.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Football => "football",
            Self::Cricket => "cricket",
            Self::Tennis => "tennis",
        };
        f.write_str(name)
    }
}

/// One request for a report, from the CLI flags or a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRequest {
    pub sport: Sport,
    pub kind: ReportKind,
    pub params: ReportParams,
}

impl ScoreRequest {
    pub fn football(kind: ReportKind, params: ReportParams) -> Self {
        Self {
            sport: Sport::Football,
            kind,
            params,
        }
    }
}

/// Parses slash-command text such as `football league EPL 3`.
///
/// The sport may be left out (`league EPL`), the kind defaults to `live`.
/// A number anywhere after the kind is the lookback window in days; the
/// word `players` asks for a team's squad instead of its fixtures.
pub fn parse_command(text: &str) -> Result<ScoreRequest> {
    let mut words = text.split_whitespace().peekable();

    let Some(first) = words.peek().copied() else {
        return Err(ScoresError::InvalidCommand {
            message: INVALID_SPORT_MESSAGE.to_string(),
        });
    };

    let sport = match first.parse::<Sport>() {
        Ok(sport) => {
            words.next();
            sport
        }
        // `/scores live` means football
        Err(_) if first.parse::<ReportKind>().is_ok() => Sport::Football,
        Err(e) => return Err(e),
    };

    let kind = match words.next() {
        Some(word) => word.parse::<ReportKind>()?,
        None => ReportKind::Live,
    };

    let mut params = ReportParams::default();
    for word in words {
        if let Ok(days) = word.parse::<u32>() {
            validate_range("time", days, 1, MAX_WINDOW_DAYS).map_err(|_| {
                ScoresError::InvalidCommand {
                    message: format!(
                        "The time window must be between 1 and {} days.",
                        MAX_WINDOW_DAYS
                    ),
                }
            })?;
            params.window_days = days;
            continue;
        }

        match kind {
            ReportKind::Team if word.eq_ignore_ascii_case("players") => params.players = true,
            ReportKind::Team if params.team.is_none() => params.team = Some(word.to_uppercase()),
            ReportKind::League | ReportKind::Standings if params.league.is_none() => {
                params.league = Some(word.to_uppercase())
            }
            _ => {
                return Err(ScoresError::InvalidCommand {
                    message: invalid_argument_message(),
                })
            }
        }
    }

    Ok(ScoreRequest {
        sport,
        kind,
        params,
    })
}
