use crate::domain::leagues::LeagueRegistry;
use crate::domain::model::{ApiResponse, Fixture, LeagueTable, LiveGame};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const TEAM_REPORTS_NOT_SUPPORTED: &str = "Team reports are not supported yet.";

/// Upstream resources the scores client knows how to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Live,
    Standings { league_id: u32 },
    LeagueFixtures { league_id: u32, days: u32 },
    AllFixtures { days: u32 },
}

#[async_trait]
pub trait ScoresApi: Send + Sync {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<ApiResponse>;
}

/// Turns normalized score data into one output format.
pub trait Renderer: Send + Sync {
    fn live_scores(&self, games: &[LiveGame]) -> Result<String>;

    /// `fixtures` yields `(league code, fixture)` pairs grouped by league.
    fn league_scores<'a>(
        &self,
        fixtures: &mut dyn Iterator<Item = (&'a str, Fixture)>,
        window_days: u32,
    ) -> Result<String>;

    fn standings(&self, table: &LeagueTable, registry: &LeagueRegistry) -> Result<String>;

    fn team_scores(&self, _team: &str, _window_days: u32) -> Result<String> {
        Ok(TEAM_REPORTS_NOT_SUPPORTED.to_string())
    }

    fn team_players(&self, _team: &str) -> Result<String> {
        Ok(TEAM_REPORTS_NOT_SUPPORTED.to_string())
    }
}
