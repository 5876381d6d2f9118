use crate::app::writers::get_writer;
use crate::app::writers::stdout::NO_LIVE_ACTION;
use crate::core::grouping::supported_leagues;
use crate::core::normalizer::{normalize_batch, parse_fixture, parse_live_game, parse_standing};
use crate::domain::leagues::{LeagueEntry, LeagueRegistry};
use crate::domain::model::{ApiResponse, LeagueTable, OutputFormat};
use crate::domain::ports::Renderer;
use crate::utils::error::{Result, ScoresError};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_WINDOW_DAYS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Live,
    League,
    Team,
    Standings,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Live,
        ReportKind::League,
        ReportKind::Team,
        ReportKind::Standings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::League => "league",
            Self::Team => "team",
            Self::Standings => "standings",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = ScoresError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScoresError::InvalidCommand {
                message: invalid_argument_message(),
            })
    }
}

pub fn invalid_argument_message() -> String {
    let kinds: Vec<String> = ReportKind::ALL
        .iter()
        .map(|kind| format!("`{}`", kind))
        .collect();
    format!("Invalid argument. Please choose from {}.", kinds.join(", "))
}

/// Parameters a report may need besides its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportParams {
    pub league: Option<String>,
    pub window_days: u32,
    pub team: Option<String>,
    pub players: bool,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            league: None,
            window_days: DEFAULT_WINDOW_DAYS,
            team: None,
            players: false,
        }
    }
}

/// Looks a league code up, or builds the reply listing the codes we know.
pub fn resolve_league<'r>(
    registry: &'r LeagueRegistry,
    code: &str,
) -> std::result::Result<&'r LeagueEntry, String> {
    registry.entry(code).map_err(|_| {
        let codes: Vec<&str> = registry.codes().collect();
        format!("Unknown league `{}`. Choose from: {}", code, codes.join(", "))
    })
}

/// Picks the renderer for a report kind and turns an upstream payload into
/// the reply text. Every failure comes back as a message.
pub struct Dispatcher {
    registry: LeagueRegistry,
    writer: Box<dyn Renderer>,
}

impl Dispatcher {
    pub fn new(registry: LeagueRegistry, format: OutputFormat) -> Self {
        Self::with_writer(registry, get_writer(format))
    }

    pub fn with_writer(registry: LeagueRegistry, writer: Box<dyn Renderer>) -> Self {
        Self { registry, writer }
    }

    pub fn registry(&self) -> &LeagueRegistry {
        &self.registry
    }

    /// Same as [`Dispatcher::render`] for a kind given as free text.
    pub fn render_named(&self, kind: &str, payload: &ApiResponse, params: &ReportParams) -> String {
        match kind.parse::<ReportKind>() {
            Ok(kind) => self.render(kind, payload, params),
            Err(e) => e.user_friendly_message(),
        }
    }

    pub fn render(&self, kind: ReportKind, payload: &ApiResponse, params: &ReportParams) -> String {
        let outcome = match kind {
            ReportKind::Live => self.render_live(payload),
            ReportKind::League => self.render_league(payload, params),
            ReportKind::Standings => self.render_standings(payload, params),
            ReportKind::Team => self.render_team(params),
        };

        outcome.unwrap_or_else(|e| {
            tracing::warn!("Rendering {} report failed: {}", kind, e);
            e.user_friendly_message()
        })
    }

    fn render_live(&self, payload: &ApiResponse) -> Result<String> {
        if !payload.is_success() {
            tracing::warn!("Live feed returned status {}", payload.status);
            return Ok(":disappointed: There was problem getting live scores".to_string());
        }

        let games = normalize_batch(records(&payload.body, "games"), parse_live_game);
        if games.is_empty() {
            return Ok(NO_LIVE_ACTION.to_string());
        }

        self.writer.live_scores(&games)
    }

    fn render_league(&self, payload: &ApiResponse, params: &ReportParams) -> Result<String> {
        let days = params.window_days;
        let league = match params.league.as_deref() {
            Some(code) => match resolve_league(&self.registry, code) {
                Ok(entry) => Some(entry),
                Err(message) => return Ok(message),
            },
            None => None,
        };

        if !payload.is_success() {
            tracing::warn!("Fixtures feed returned status {}", payload.status);
            return Ok(match league {
                Some(_) => ":disappointed: No data for the given league".to_string(),
                None => ":disappointed: There was problem getting league scores".to_string(),
            });
        }

        let raw = records(&payload.body, "fixtures");
        let no_matches = || match league {
            Some(entry) => format!("No `{}` matches in the past {} days.", entry.code, days),
            None => format!("No matches in the past {} days.", days),
        };
        if raw.is_empty() {
            return Ok(no_matches());
        }

        let fixtures = normalize_batch(raw, parse_fixture);
        let competition = league.map(|entry| entry.external_id);
        let mut grouped = supported_leagues(fixtures, competition, &self.registry).peekable();
        if grouped.peek().is_none() {
            return Ok(no_matches());
        }

        self.writer.league_scores(&mut grouped, days)
    }

    fn render_standings(&self, payload: &ApiResponse, params: &ReportParams) -> Result<String> {
        let Some(code) = params.league.as_deref() else {
            return Err(ScoresError::InvalidCommand {
                message: "Please choose a league for the standings, e.g. `standings EPL`."
                    .to_string(),
            });
        };
        let entry = match resolve_league(&self.registry, code) {
            Ok(entry) => entry,
            Err(message) => return Ok(message),
        };
        let unavailable = format!("No standings available for `{}`.", entry.code);

        if !payload.is_success() {
            tracing::warn!("League table returned status {}", payload.status);
            return Ok(unavailable);
        }

        let rows = normalize_batch(records(&payload.body, "standing"), parse_standing);
        let table = LeagueTable::new(entry.code.clone(), rows);
        if table.is_empty() {
            return Ok(unavailable);
        }
        if !table.has_contiguous_positions() {
            tracing::warn!("League table for {} has gaps in its positions", entry.code);
        }

        self.writer.standings(&table, &self.registry)
    }

    fn render_team(&self, params: &ReportParams) -> Result<String> {
        let team = params.team.as_deref().unwrap_or_default();
        if params.players {
            self.writer.team_players(team)
        } else {
            self.writer.team_scores(team, params.window_days)
        }
    }
}

fn records<'a>(body: &'a Value, key: &str) -> &'a [Value] {
    body.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
