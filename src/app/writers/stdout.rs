use crate::core::grouping::group_live_games;
use crate::domain::leagues::LeagueRegistry;
use crate::domain::model::{Fixture, LeagueTable, LiveGame, MatchResult};
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use std::collections::HashSet;

pub const NO_LIVE_ACTION: &str = "No live action currently.";

/// Total width of a `==== LEAGUE ====` header line.
pub const HEADER_WIDTH: usize = 62;

/// Fixed-width text, the format the chat and terminal replies use.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Stdout {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for Stdout {
    fn live_scores(&self, games: &[LiveGame]) -> Result<String> {
        if games.is_empty() {
            return Ok(NO_LIVE_ACTION.to_string());
        }

        let mut lines = Vec::new();
        for (league, members) in group_live_games(games) {
            lines.push(league_header(league));
            for game in members {
                lines.push(format!("{}   {}", score_line(&game.result), game.time));
            }
        }
        Ok(lines.join("\n"))
    }

    fn league_scores<'a>(
        &self,
        fixtures: &mut dyn Iterator<Item = (&'a str, Fixture)>,
        _window_days: u32,
    ) -> Result<String> {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();

        for (league, fixture) in fixtures {
            if seen.insert(league) {
                lines.push(league_header(league));
            }
            lines.push(score_line(&fixture.result));
        }
        Ok(lines.join("\n"))
    }

    fn standings(&self, table: &LeagueTable, _registry: &LeagueRegistry) -> Result<String> {
        let mut lines = vec![format!(
            "{:<6}  {:<30}    {:<10}    {:<10}    {}",
            "POS", "CLUB", "PLAYED", "GOAL DIFF", "POINTS"
        )];

        // rows stay in feed order
        for row in &table.rows {
            lines.push(format!(
                "{:<6}  {:<30}    {:<9}    {:<11}    {}",
                row.position,
                row.team_name,
                row.played,
                format_goal_difference(row.goal_difference),
                row.points
            ));
        }
        Ok(lines.join("\n"))
    }
}

pub fn league_header(league: &str) -> String {
    format!("{:=^width$}", format!(" {} ", league), width = HEADER_WIDTH)
}

/// `Home                       1  vs  0                      Away`
pub fn score_line(result: &MatchResult) -> String {
    format!(
        "{:<25} {:>2}  vs {:>2} {:>25}",
        result.home_team(),
        result.home_score(),
        result.away_score(),
        result.away_team()
    )
}

/// Non-negative values get a leading space so they line up with negatives.
pub fn format_goal_difference(goal_difference: i32) -> String {
    if goal_difference >= 0 {
        format!(" {}", goal_difference)
    } else {
        goal_difference.to_string()
    }
}
