use crate::domain::leagues::LeagueRegistry;
use crate::domain::model::{Fixture, LiveGame};

/// `(league code, fixture)` pairs in league order, feed order within a
/// league. Consumed once.
pub struct GroupedFixtures<'r> {
    inner: std::vec::IntoIter<(u32, Fixture)>,
    registry: &'r LeagueRegistry,
}

impl<'r> Iterator for GroupedFixtures<'r> {
    type Item = (&'r str, Fixture);

    fn next(&mut self) -> Option<Self::Item> {
        let registry = self.registry;
        self.inner
            .by_ref()
            .find_map(move |(league_id, fixture)| {
                registry.resolve(league_id).ok().map(|code| (code, fixture))
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

/// Drops fixtures from leagues the registry doesn't know and orders the rest
/// by season id.
///
/// A fixture without its own competition link falls back to `competition`,
/// the season the whole batch was fetched for (if any).
pub fn supported_leagues(
    fixtures: Vec<Fixture>,
    competition: Option<u32>,
    registry: &LeagueRegistry,
) -> GroupedFixtures<'_> {
    let mut keyed: Vec<(u32, Fixture)> = fixtures
        .into_iter()
        .filter_map(|fixture| {
            let Some(league_id) = fixture.league_id.or(competition) else {
                tracing::debug!(
                    "Dropping {} vs {}: no competition link",
                    fixture.result.home_team(),
                    fixture.result.away_team()
                );
                return None;
            };

            if registry.is_supported(league_id) {
                Some((league_id, fixture))
            } else {
                tracing::debug!("Dropping fixture from unsupported league {}", league_id);
                None
            }
        })
        .collect();

    // sort_by_key is stable: ties keep feed order
    keyed.sort_by_key(|(league_id, _)| *league_id);

    GroupedFixtures {
        inner: keyed.into_iter(),
        registry,
    }
}

/// Groups live games by the feed's league label, labels in ascending order.
pub fn group_live_games(games: &[LiveGame]) -> Vec<(&str, Vec<&LiveGame>)> {
    let mut sorted: Vec<&LiveGame> = games.iter().collect();
    sorted.sort_by(|a, b| a.league.cmp(&b.league));

    let mut groups: Vec<(&str, Vec<&LiveGame>)> = Vec::new();
    for game in sorted {
        match groups.last_mut() {
            Some((league, members)) if *league == game.league => members.push(game),
            _ => groups.push((game.league.as_str(), vec![game])),
        }
    }
    groups
}
