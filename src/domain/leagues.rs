use crate::utils::error::{Result, ScoresError};
use serde::Serialize;
use std::collections::HashMap;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationZone {
    ChampionsLeague,
    EuropaLeague,
    Relegation,
}

#[derive(Debug, Clone)]
pub struct LeagueEntry {
    pub external_id: u32,
    pub code: String,
    pub name: String,
    pub zones: Vec<(QualificationZone, RangeInclusive<u32>)>,
}

impl LeagueEntry {
    pub fn new(external_id: u32, code: &str, name: &str) -> Self {
        Self {
            external_id,
            code: code.to_string(),
            name: name.to_string(),
            zones: Vec::new(),
        }
    }

    pub fn with_zone(mut self, zone: QualificationZone, positions: RangeInclusive<u32>) -> Self {
        self.zones.push((zone, positions));
        self
    }

    pub fn zone_for(&self, position: u32) -> Option<QualificationZone> {
        self.zones
            .iter()
            .find(|(_, positions)| positions.contains(&position))
            .map(|(zone, _)| *zone)
    }
}

/// Read-only lookup between upstream season ids and league codes.
#[derive(Debug, Clone)]
pub struct LeagueRegistry {
    entries: Vec<LeagueEntry>,
    by_id: HashMap<u32, usize>,
    by_code: HashMap<String, usize>,
}

impl LeagueRegistry {
    /// Builds the registry, rejecting duplicate ids or codes.
    pub fn new(entries: Vec<LeagueEntry>) -> Result<Self> {
        let registry = Self::index(entries);

        if registry.by_id.len() != registry.entries.len() {
            return Err(ScoresError::ConfigError {
                message: "duplicate league id in league table".to_string(),
            });
        }
        if registry.by_code.len() != registry.entries.len() {
            return Err(ScoresError::ConfigError {
                message: "duplicate league code in league table".to_string(),
            });
        }

        Ok(registry)
    }

    /// The football-data.org season table.
    pub fn builtin() -> Self {
        Self::index(builtin_entries())
    }

    fn index(entries: Vec<LeagueEntry>) -> Self {
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.external_id, index))
            .collect();
        let by_code = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.code.to_ascii_uppercase(), index))
            .collect();

        Self {
            entries,
            by_id,
            by_code,
        }
    }

    /// Season id -> league code.
    pub fn resolve(&self, external_id: u32) -> Result<&str> {
        self.by_id
            .get(&external_id)
            .map(|&index| self.entries[index].code.as_str())
            .ok_or_else(|| ScoresError::UnknownLeague {
                code: external_id.to_string(),
            })
    }

    /// League code -> season id. Codes are matched case-insensitively.
    pub fn external_id_of(&self, code: &str) -> Result<u32> {
        self.entry(code).map(|entry| entry.external_id)
    }

    pub fn entry(&self, code: &str) -> Result<&LeagueEntry> {
        self.by_code
            .get(&code.to_ascii_uppercase())
            .map(|&index| &self.entries[index])
            .ok_or_else(|| ScoresError::UnknownLeague {
                code: code.to_string(),
            })
    }

    pub fn is_supported(&self, external_id: u32) -> bool {
        self.by_id.contains_key(&external_id)
    }

    pub fn zone_for(&self, code: &str, position: u32) -> Option<QualificationZone> {
        self.entry(code).ok()?.zone_for(position)
    }

    /// League codes in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }
}

fn builtin_entries() -> Vec<LeagueEntry> {
    use QualificationZone::*;

    vec![
        LeagueEntry::new(394, "BL", "Bundesliga")
            .with_zone(ChampionsLeague, 1..=4)
            .with_zone(EuropaLeague, 5..=6)
            .with_zone(Relegation, 16..=18),
        LeagueEntry::new(395, "BL2", "2. Bundesliga")
            .with_zone(ChampionsLeague, 1..=2)
            .with_zone(EuropaLeague, 3..=3)
            .with_zone(Relegation, 16..=18),
        LeagueEntry::new(396, "FL", "Ligue 1")
            .with_zone(ChampionsLeague, 1..=3)
            .with_zone(EuropaLeague, 4..=4)
            .with_zone(Relegation, 18..=20),
        LeagueEntry::new(397, "FL2", "Ligue 2")
            .with_zone(ChampionsLeague, 1..=3)
            .with_zone(EuropaLeague, 4..=4)
            .with_zone(Relegation, 18..=20),
        LeagueEntry::new(398, "EPL", "Premier League")
            .with_zone(ChampionsLeague, 1..=4)
            .with_zone(EuropaLeague, 5..=5)
            .with_zone(Relegation, 18..=20),
        LeagueEntry::new(399, "LLIGA", "Primera Division")
            .with_zone(ChampionsLeague, 1..=4)
            .with_zone(EuropaLeague, 5..=6)
            .with_zone(Relegation, 18..=20),
        LeagueEntry::new(400, "SD", "Segunda Division")
            .with_zone(ChampionsLeague, 1..=2)
            .with_zone(EuropaLeague, 3..=6)
            .with_zone(Relegation, 19..=22),
        LeagueEntry::new(401, "SA", "Serie A")
            .with_zone(ChampionsLeague, 1..=3)
            .with_zone(EuropaLeague, 4..=5)
            .with_zone(Relegation, 18..=20),
        LeagueEntry::new(402, "PPL", "Primeira Liga")
            .with_zone(ChampionsLeague, 1..=3)
            .with_zone(EuropaLeague, 4..=5)
            .with_zone(Relegation, 17..=18),
        LeagueEntry::new(403, "BL3", "3. Liga")
            .with_zone(ChampionsLeague, 1..=2)
            .with_zone(EuropaLeague, 3..=3)
            .with_zone(Relegation, 18..=20),
        LeagueEntry::new(404, "DED", "Eredivisie")
            .with_zone(ChampionsLeague, 1..=3)
            .with_zone(EuropaLeague, 4..=5)
            .with_zone(Relegation, 17..=18),
        LeagueEntry::new(405, "CL", "Champions League")
            .with_zone(ChampionsLeague, 1..=16)
            .with_zone(EuropaLeague, 17..=24),
        LeagueEntry::new(425, "EL1", "League One")
            .with_zone(ChampionsLeague, 1..=2)
            .with_zone(EuropaLeague, 3..=6)
            .with_zone(Relegation, 21..=24),
    ]
}

impl Default for LeagueRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bidirectional_lookup() {
        let registry = LeagueRegistry::builtin();
        assert_eq!(registry.resolve(398).unwrap(), "EPL");
        assert_eq!(registry.external_id_of("EPL").unwrap(), 398);
        assert_eq!(registry.external_id_of("epl").unwrap(), 398);
    }

    #[test]
    fn test_unknown_lookups_are_not_found() {
        let registry = LeagueRegistry::builtin();
        assert!(matches!(
            registry.resolve(1),
            Err(ScoresError::UnknownLeague { .. })
        ));
        assert!(matches!(
            registry.external_id_of("XYZ"),
            Err(ScoresError::UnknownLeague { .. })
        ));
        assert!(!registry.is_supported(1));
    }

    #[test]
    fn test_duplicate_entries_rejected() {
        let entries = vec![
            LeagueEntry::new(1, "AAA", "A"),
            LeagueEntry::new(1, "BBB", "B"),
        ];
        assert!(LeagueRegistry::new(entries).is_err());

        let entries = vec![
            LeagueEntry::new(1, "AAA", "A"),
            LeagueEntry::new(2, "AAA", "B"),
        ];
        assert!(LeagueRegistry::new(entries).is_err());
    }

    #[test]
    fn test_builtin_table_is_consistent() {
        assert!(LeagueRegistry::new(builtin_entries()).is_ok());
    }

    #[test]
    fn test_zone_for_position() {
        let registry = LeagueRegistry::builtin();
        assert_eq!(
            registry.zone_for("EPL", 1),
            Some(QualificationZone::ChampionsLeague)
        );
        assert_eq!(
            registry.zone_for("EPL", 5),
            Some(QualificationZone::EuropaLeague)
        );
        assert_eq!(registry.zone_for("EPL", 10), None);
        assert_eq!(registry.zone_for("EPL", 20), Some(QualificationZone::Relegation));
        assert_eq!(registry.zone_for("XYZ", 1), None);
    }
}
