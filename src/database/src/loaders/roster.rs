use crate::error::{DatabaseError, DatabaseResult};
use log::debug;
use pelada_core::Player;
use std::fs;
use std::path::Path;

const STATIC_DEMO_ROSTER_JSON: &str = include_str!("../data/demo_roster.json");

pub struct DemoRosterLoader;

impl DemoRosterLoader {
    pub fn load() -> DatabaseResult<Vec<Player>> {
        RosterLoader::parse(STATIC_DEMO_ROSTER_JSON)
    }
}

pub struct RosterLoader;

impl RosterLoader {
    pub fn from_file(path: &Path) -> DatabaseResult<Vec<Player>> {
        if !path.exists() {
            return Err(DatabaseError::NotFound(format!("roster file {}", path.display())));
        }

        let content = fs::read_to_string(path)?;
        let players = Self::parse(&content)?;

        debug!("loaded {} players from {}", players.len(), path.display());

        Ok(players)
    }

    pub fn parse(json: &str) -> DatabaseResult<Vec<Player>> {
        let players: Vec<Player> = serde_json::from_str(json)?;
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelada_core::PlayerPositionType;

    #[test]
    fn test_demo_roster_loads() {
        let players = DemoRosterLoader::load().unwrap();

        assert_eq!(players.len(), 12);
        assert_eq!(players.iter().filter(|p| p.is_goalkeeper()).count(), 2);
        assert!(players.iter().all(|p| p.overall() <= 99));
    }

    #[test]
    fn test_parse_recomputes_overall() {
        let json = r#"[{"id": "x", "displayName": "X", "nick": "X", "primaryPosition": "ATA",
            "attributes": {"pace": 70, "shooting": 70, "passing": 70, "dribbling": 70, "defending": 70, "physical": 70},
            "overall": 1}]"#;

        let players = RosterLoader::parse(json).unwrap();

        assert_eq!(players[0].overall(), 70);
        assert_eq!(players[0].primary_position(), PlayerPositionType::Striker);
    }

    #[test]
    fn test_missing_file() {
        let result = RosterLoader::from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(DatabaseError::NotFound(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(RosterLoader::parse("{"), Err(DatabaseError::Json(_))));
    }
}
