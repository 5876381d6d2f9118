use crate::domain::model::{Fixture, LiveGame, MatchResult, Score, StandingRow};
use crate::utils::error::{Result, ScoresError};
use serde_json::{Map, Value};
use url::Url;

/// Normalizes a fixture or live-game record into a `MatchResult`.
///
/// Accepts both upstream shapes: scores nested under `result`, or flat
/// `goalsHomeTeam` / `goalsAwayTeam` fields on the record itself. The `-1`
/// sentinel (and `null`) become `Score::Unset`.
pub fn parse_result(record: &Value) -> Result<MatchResult> {
    let scores = score_fields(record)?;

    MatchResult::new(
        team_name(record, "homeTeamName")?,
        parse_score(scores, "goalsHomeTeam")?,
        team_name(record, "awayTeamName")?,
        parse_score(scores, "goalsAwayTeam")?,
    )
}

pub fn parse_fixture(record: &Value) -> Result<Fixture> {
    let league_id = record
        .pointer("/_links/soccerseason/href")
        .and_then(Value::as_str)
        .and_then(league_id_from_link);

    Ok(Fixture {
        league_id,
        result: parse_result(record)?,
    })
}

pub fn parse_live_game(record: &Value) -> Result<LiveGame> {
    let league = record
        .get("league")
        .and_then(Value::as_str)
        .filter(|league| !league.trim().is_empty())
        .ok_or_else(|| ScoresError::malformed("live game has no league"))?;

    let time = match record.get("time") {
        Some(Value::String(time)) => time.clone(),
        Some(Value::Number(minute)) => minute.to_string(),
        _ => String::new(),
    };

    Ok(LiveGame {
        league: league.to_string(),
        result: parse_result(record)?,
        time,
    })
}

pub fn parse_standing(record: &Value) -> Result<StandingRow> {
    let row: StandingRow = serde_json::from_value(record.clone())
        .map_err(|e| ScoresError::malformed(format!("standing row: {}", e)))?;

    if row.position == 0 || row.team_name.trim().is_empty() {
        return Err(ScoresError::malformed(format!(
            "standing row for `{}` at position {}",
            row.team_name, row.position
        )));
    }

    Ok(row)
}

/// Takes the season id off the end of a competition link such as
/// `http://api.football-data.org/alpha/soccerseasons/398`.
pub fn league_id_from_link(href: &str) -> Option<u32> {
    let url = Url::parse(href).ok()?;
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()?
        .parse()
        .ok()
}

/// Parses every record in `records`, skipping the ones that fail.
pub fn normalize_batch<T>(records: &[Value], parse: impl Fn(&Value) -> Result<T>) -> Vec<T> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match parse(record) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!("Skipping record #{}: {}", index, e);
                None
            }
        })
        .collect()
}

fn score_fields(record: &Value) -> Result<&Map<String, Value>> {
    let object = record
        .as_object()
        .ok_or_else(|| ScoresError::malformed("record is not an object"))?;

    match object.get("result") {
        Some(Value::Object(nested)) => Ok(nested),
        Some(other) => Err(ScoresError::malformed(format!(
            "`result` is not an object: {}",
            other
        ))),
        None if object.contains_key("goalsHomeTeam") || object.contains_key("goalsAwayTeam") => {
            Ok(object)
        }
        None => Err(ScoresError::malformed("record has no score fields")),
    }
}

fn parse_score(fields: &Map<String, Value>, key: &str) -> Result<Score> {
    let raw = match fields.get(key) {
        None | Some(Value::Null) => return Ok(Score::Unset),
        Some(value) => value,
    };

    // the live feed sometimes sends goals as strings
    let goals = raw
        .as_i64()
        .or_else(|| raw.as_str().and_then(|s| s.trim().parse().ok()));

    goals
        .and_then(Score::from_raw)
        .ok_or_else(|| ScoresError::malformed(format!("invalid {}: {}", key, raw)))
}

fn team_name<'a>(record: &'a Value, key: &str) -> Result<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ScoresError::malformed(format!("missing {}", key)))
}
