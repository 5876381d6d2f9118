use crate::core::grouping::group_live_games;
use crate::domain::leagues::LeagueRegistry;
use crate::domain::model::{Fixture, LeagueTable, LiveGame, MatchResult};
use crate::domain::ports::Renderer;
use crate::utils::error::{Result, ScoresError};

const FIXTURE_HEADERS: [&str; 5] = [
    "League",
    "Home Team Name",
    "Home Team Goals",
    "Away Team Goals",
    "Away Team Name",
];

const STANDING_HEADERS: [&str; 5] = [
    "Position",
    "Team Name",
    "Games Played",
    "Goal Difference",
    "Points",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Csv;

impl Csv {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for Csv {
    fn live_scores(&self, games: &[LiveGame]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut headers = FIXTURE_HEADERS.to_vec();
        headers.push("Time");
        writer.write_record(&headers)?;

        for (league, members) in group_live_games(games) {
            for game in members {
                let mut record = result_record(league, &game.result);
                record.push(game.time.clone());
                writer.write_record(&record)?;
            }
        }

        finish(writer)
    }

    fn league_scores<'a>(
        &self,
        fixtures: &mut dyn Iterator<Item = (&'a str, Fixture)>,
        _window_days: u32,
    ) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(FIXTURE_HEADERS)?;

        for (league, fixture) in fixtures {
            writer.write_record(result_record(league, &fixture.result))?;
        }

        finish(writer)
    }

    fn standings(&self, table: &LeagueTable, _registry: &LeagueRegistry) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(STANDING_HEADERS)?;

        for row in &table.rows {
            writer.write_record([
                row.position.to_string(),
                row.team_name.clone(),
                row.played.to_string(),
                row.goal_difference.to_string(),
                row.points.to_string(),
            ])?;
        }

        finish(writer)
    }
}

fn result_record(league: &str, result: &MatchResult) -> Vec<String> {
    vec![
        league.to_string(),
        result.home_team().to_string(),
        result.home_score().to_string(),
        result.away_score().to_string(),
        result.away_team().to_string(),
    ]
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let data = writer
        .into_inner()
        .map_err(|e| ScoresError::IoError(e.into_error()))?;

    String::from_utf8(data)
        .map_err(|e| ScoresError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grouping::supported_leagues;
    use crate::domain::model::{Score, StandingRow};

    #[test]
    fn test_league_scores_csv() {
        let registry = LeagueRegistry::builtin();
        let fixtures = vec![Fixture {
            league_id: Some(398),
            result: MatchResult::new("Arsenal FC", Score::Goals(2), "Chelsea FC", Score::Unset)
                .unwrap(),
        }];

        let output = Csv
            .league_scores(&mut supported_leagues(fixtures, None, &registry), 6)
            .unwrap();

        assert_eq!(
            output,
            "League,Home Team Name,Home Team Goals,Away Team Goals,Away Team Name\n\
             EPL,Arsenal FC,2,-,Chelsea FC\n"
        );
    }

    #[test]
    fn test_live_scores_csv_has_time_column() {
        let games = vec![LiveGame {
            league: "EPL".to_string(),
            result: MatchResult::new("Everton", Score::Goals(1), "Stoke City", Score::Goals(1))
                .unwrap(),
            time: "67'".to_string(),
        }];

        let output = Csv.live_scores(&games).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].ends_with(",Time"));
        assert_eq!(lines[1], "EPL,Everton,1,1,Stoke City,67'");
    }

    #[test]
    fn test_standings_csv_quotes_commas() {
        let table = LeagueTable::new(
            "EPL",
            vec![StandingRow {
                position: 1,
                team_name: "Brighton, Hove".to_string(),
                played: 3,
                goal_difference: -1,
                points: 4,
            }],
        );

        let output = Csv.standings(&table, &LeagueRegistry::builtin()).unwrap();
        assert!(output.contains("1,\"Brighton, Hove\",3,-1,4"));
    }
}
