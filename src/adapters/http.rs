use crate::config::ApiSettings;
use crate::domain::model::ApiResponse;
use crate::domain::ports::{Endpoint, ScoresApi};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const AUTH_HEADER: &str = "X-Auth-Token";

/// football-data.org client for fixtures and tables, plus the live feed.
pub struct FootballDataClient {
    client: Client,
    settings: ApiSettings,
}

impl FootballDataClient {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        let base = &self.settings.base_url;
        match endpoint {
            Endpoint::Live => self.settings.live_url.clone(),
            Endpoint::Standings { league_id } => {
                format!("{}soccerseasons/{}/leagueTable", base, league_id)
            }
            Endpoint::LeagueFixtures { league_id, days } => format!(
                "{}soccerseasons/{}/fixtures?timeFrame=p{}",
                base, league_id, days
            ),
            Endpoint::AllFixtures { days } => format!("{}fixtures?timeFrame=p{}", base, days),
        }
    }
}

#[async_trait]
impl ScoresApi for FootballDataClient {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<ApiResponse> {
        let url = self.url_for(endpoint);
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(&url);
        // the live feed is a separate service and takes no token
        if *endpoint != Endpoint::Live {
            request = request.header(AUTH_HEADER, &self.settings.api_token);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = if status.is_success() {
            response.json().await?
        } else {
            // error pages are often not JSON
            response.json().await.unwrap_or(serde_json::Value::Null)
        };

        Ok(ApiResponse::new(status.as_u16(), body))
    }
}
