use crate::Player;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// One side of a draw. Holds copies of the drawn players so later roster
/// edits never leak into a draw that was already produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub color_hex: String,
    pub players: Vec<Player>,
    pub total_overall: u32,
    pub avg_overall: u8,
}

impl Team {
    pub fn new(id: String, name: String, color_hex: String) -> Self {
        Team {
            id,
            name,
            color_hex,
            players: Vec::new(),
            total_overall: 0,
            avg_overall: 0,
        }
    }

    pub fn add_player(&mut self, player: Player) {
        self.total_overall += player.overall() as u32;
        self.players.push(player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn goalkeepers_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_goalkeeper()).count()
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// Rounded mean overall, half rounds up; 0 for an empty team
    pub fn refresh_average(&mut self) {
        let count = self.players.len() as u32;

        self.avg_overall = if count == 0 {
            0
        } else {
            ((self.total_overall * 2 + count) / (count * 2)) as u8
        };
    }
}

//DISPLAY
impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} [{} players, total {}, avg {}]",
            self.name,
            self.players.len(),
            self.total_overall,
            self.avg_overall
        )
    }
}
