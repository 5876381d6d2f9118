use crate::core::command::ScoreRequest;
use crate::core::dispatcher::{resolve_league, Dispatcher, ReportKind};
use crate::domain::model::ApiResponse;
use crate::domain::ports::{Endpoint, ScoresApi};

/// Fetches what a request needs and hands it to the dispatcher.
pub struct ScoresService<A: ScoresApi> {
    api: A,
    dispatcher: Dispatcher,
}

impl<A: ScoresApi> ScoresService<A> {
    pub fn new(api: A, dispatcher: Dispatcher) -> Self {
        Self { api, dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Always produces a reply; failures become user-facing messages.
    pub async fn run(&self, request: &ScoreRequest) -> String {
        if !request.sport.is_supported() {
            return request.sport.not_supported_message();
        }

        let endpoint = match self.endpoint_for(request) {
            Ok(Some(endpoint)) => endpoint,
            // nothing to fetch, the renderer answers on its own
            Ok(None) => {
                return self.dispatcher.render(
                    request.kind,
                    &ApiResponse::ok(serde_json::Value::Null),
                    &request.params,
                )
            }
            Err(message) => return message,
        };

        tracing::debug!("Fetching {:?} for {} report", endpoint, request.kind);
        let payload = match self.api.fetch(&endpoint).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Request for {:?} failed: {}", endpoint, e);
                return e.user_friendly_message();
            }
        };
        tracing::debug!("Upstream answered with status {}", payload.status);

        self.dispatcher
            .render(request.kind, &payload, &request.params)
    }

    fn endpoint_for(&self, request: &ScoreRequest) -> Result<Option<Endpoint>, String> {
        let registry = self.dispatcher.registry();
        let days = request.params.window_days;
        let league_id = match request.params.league.as_deref() {
            Some(code) => Some(resolve_league(registry, code)?.external_id),
            None => None,
        };

        let endpoint = match (request.kind, league_id) {
            (ReportKind::Live, _) => Some(Endpoint::Live),
            (ReportKind::League, Some(league_id)) => {
                Some(Endpoint::LeagueFixtures { league_id, days })
            }
            (ReportKind::League, None) => Some(Endpoint::AllFixtures { days }),
            (ReportKind::Standings, Some(league_id)) => Some(Endpoint::Standings { league_id }),
            // the dispatcher explains what is missing
            (ReportKind::Standings, None) | (ReportKind::Team, _) => None,
        };
        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::{parse_command, Sport};
    use crate::core::dispatcher::ReportParams;
    use crate::domain::leagues::LeagueRegistry;
    use crate::domain::model::OutputFormat;
    use crate::utils::error::{Result, ScoresError};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockApi {
        calls: Arc<Mutex<Vec<Endpoint>>>,
        response: Option<serde_json::Value>,
    }

    #[async_trait]
    impl ScoresApi for MockApi {
        async fn fetch(&self, endpoint: &Endpoint) -> Result<ApiResponse> {
            self.calls.lock().unwrap().push(endpoint.clone());
            match &self.response {
                Some(body) => Ok(ApiResponse::ok(body.clone())),
                None => Err(ScoresError::UpstreamUnavailable { status: 502 }),
            }
        }
    }

    fn service(api: MockApi) -> ScoresService<MockApi> {
        ScoresService::new(
            api,
            Dispatcher::new(LeagueRegistry::builtin(), OutputFormat::Stdout),
        )
    }

    #[tokio::test]
    async fn test_endpoint_selection() {
        let api = MockApi {
            response: Some(serde_json::json!({})),
            ..MockApi::default()
        };
        let service = service(api.clone());

        for text in ["live", "league", "league EPL 3", "standings SA"] {
            service.run(&parse_command(text).unwrap()).await;
        }

        assert_eq!(
            *api.calls.lock().unwrap(),
            vec![
                Endpoint::Live,
                Endpoint::AllFixtures { days: 6 },
                Endpoint::LeagueFixtures {
                    league_id: 398,
                    days: 3
                },
                Endpoint::Standings { league_id: 401 },
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_league_skips_fetch() {
        let api = MockApi::default();
        let service = service(api.clone());

        let reply = service.run(&parse_command("standings XYZ").unwrap()).await;

        assert!(reply.starts_with("Unknown league `XYZ`"));
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_degrades_to_message() {
        let service = service(MockApi::default());

        let reply = service.run(&parse_command("live").unwrap()).await;

        assert!(reply.starts_with(":disappointed:"));
    }

    #[tokio::test]
    async fn test_unsupported_sport() {
        let service = service(MockApi::default());
        let request = ScoreRequest {
            sport: Sport::Tennis,
            kind: ReportKind::Live,
            params: ReportParams::default(),
        };

        assert_eq!(
            service.run(&request).await,
            "Tennis scores are not supported yet."
        );
    }
}
