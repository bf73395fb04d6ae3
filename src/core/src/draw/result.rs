use crate::Team;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const BALANCE_SCORE_MAX: u8 = 100;

/// Balance points lost per point of total-overall gap between heaviest and lightest team
pub const BALANCE_PENALTY_PER_POINT: u32 = 2;

/// Outcome of one draw. Never mutated after it is produced; a redraw replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDraw {
    pub id: String,
    pub event_id: String,
    pub teams: Vec<Team>,
    pub diff: u32,
    pub balance_score: u8,
    pub gk_coverage: bool,
    pub created_at: DateTime<Utc>,
}

impl TeamDraw {
    pub fn balance_score_for(diff: u32) -> u8 {
        (BALANCE_SCORE_MAX as u32).saturating_sub(diff.saturating_mul(BALANCE_PENALTY_PER_POINT)) as u8
    }

    pub fn team_of(&self, player_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.contains(player_id))
    }

    pub fn contains_player(&self, player_id: &str) -> bool {
        self.team_of(player_id).is_some()
    }

    pub fn players_count(&self) -> usize {
        self.teams.iter().map(|t| t.len()).sum()
    }

    pub fn total_overall(&self) -> u32 {
        self.teams.iter().map(|t| t.total_overall).sum()
    }

    pub fn is_perfectly_balanced(&self) -> bool {
        self.diff == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_score_is_linear_then_floored() {
        assert_eq!(TeamDraw::balance_score_for(0), 100);
        assert_eq!(TeamDraw::balance_score_for(1), 98);
        assert_eq!(TeamDraw::balance_score_for(25), 50);
        assert_eq!(TeamDraw::balance_score_for(49), 2);
        assert_eq!(TeamDraw::balance_score_for(50), 0);
        assert_eq!(TeamDraw::balance_score_for(5000), 0);
        assert_eq!(TeamDraw::balance_score_for(u32::MAX), 0);
    }

    #[test]
    fn test_perfectly_balanced_only_without_gap() {
        let mut draw = TeamDraw {
            id: "d1".to_string(),
            event_id: "e1".to_string(),
            teams: Vec::new(),
            diff: 0,
            balance_score: TeamDraw::balance_score_for(0),
            gk_coverage: false,
            created_at: Utc::now(),
        };

        assert!(draw.is_perfectly_balanced());

        draw.diff = 1;
        assert!(!draw.is_perfectly_balanced());
    }
}
