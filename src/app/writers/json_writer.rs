use crate::core::grouping::group_live_games;
use crate::domain::leagues::LeagueRegistry;
use crate::domain::model::{Fixture, LeagueTable, LiveGame};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Json {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for Json {
    fn live_scores(&self, games: &[LiveGame]) -> Result<String> {
        let games: Vec<&LiveGame> = group_live_games(games)
            .into_iter()
            .flat_map(|(_, members)| members)
            .collect();

        Ok(serde_json::to_string_pretty(&json!({ "games": games }))?)
    }

    fn league_scores<'a>(
        &self,
        fixtures: &mut dyn Iterator<Item = (&'a str, Fixture)>,
        window_days: u32,
    ) -> Result<String> {
        // fixtures arrive grouped, so a league only ever extends the last entry
        let mut leagues: Vec<(&str, Vec<Value>)> = Vec::new();
        for (league, fixture) in fixtures {
            let result = serde_json::to_value(&fixture.result)?;
            match leagues.last_mut() {
                Some((code, results)) if *code == league => results.push(result),
                _ => leagues.push((league, vec![result])),
            }
        }

        let leagues: Vec<Value> = leagues
            .into_iter()
            .map(|(league, fixtures)| json!({ "league": league, "fixtures": fixtures }))
            .collect();

        Ok(serde_json::to_string_pretty(&json!({
            "windowDays": window_days,
            "leagues": leagues,
        }))?)
    }

    fn standings(&self, table: &LeagueTable, registry: &LeagueRegistry) -> Result<String> {
        let standing: Vec<Value> = table
            .rows
            .iter()
            .map(|row| {
                json!({
                    "position": row.position,
                    "teamName": row.team_name,
                    "playedGames": row.played,
                    "goalDifference": row.goal_difference,
                    "points": row.points,
                    "zone": registry.zone_for(&table.league_code, row.position),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json!({
            "league": table.league_code,
            "standing": standing,
        }))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grouping::supported_leagues;
    use crate::domain::model::{MatchResult, Score, StandingRow};

    #[test]
    fn test_league_scores_json_groups_by_league() {
        let registry = LeagueRegistry::builtin();
        let fixture = |league_id, home: &str| Fixture {
            league_id: Some(league_id),
            result: MatchResult::new(home, Score::Goals(1), "Away", Score::Unset).unwrap(),
        };
        let fixtures = vec![fixture(401, "Napoli"), fixture(398, "Arsenal"), fixture(401, "Roma")];

        let output = Json
            .league_scores(&mut supported_leagues(fixtures, None, &registry), 3)
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["windowDays"], 3);
        assert_eq!(value["leagues"][0]["league"], "EPL");
        assert_eq!(value["leagues"][1]["league"], "SA");
        assert_eq!(value["leagues"][1]["fixtures"][1]["homeTeam"], "Roma");
        assert_eq!(value["leagues"][1]["fixtures"][1]["awayScore"], Value::Null);
    }

    #[test]
    fn test_standings_json_carries_zone() {
        let row = |position, team: &str| StandingRow {
            position,
            team_name: team.to_string(),
            played: 38,
            goal_difference: 0,
            points: 50,
        };
        let table = LeagueTable::new("EPL", vec![row(1, "Leicester City"), row(10, "Everton")]);

        let output = Json.standings(&table, &LeagueRegistry::builtin()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["standing"][0]["zone"], "champions_league");
        assert_eq!(value["standing"][1]["zone"], Value::Null);
    }

    #[test]
    fn test_live_scores_json() {
        let games = vec![LiveGame {
            league: "EPL".to_string(),
            result: MatchResult::new("Everton", Score::Goals(1), "Stoke City", Score::Goals(0))
                .unwrap(),
            time: "HT".to_string(),
        }];

        let value: Value = serde_json::from_str(&Json.live_scores(&games).unwrap()).unwrap();

        assert_eq!(value["games"][0]["league"], "EPL");
        assert_eq!(value["games"][0]["homeTeam"], "Everton");
        assert_eq!(value["games"][0]["time"], "HT");
    }
}
