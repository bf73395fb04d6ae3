use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerPositionType {
    #[serde(rename = "GOL")]
    Goalkeeper,
    #[serde(rename = "LE")]
    DefenderLeft,
    #[serde(rename = "LD")]
    DefenderRight,
    #[serde(rename = "ZAG")]
    DefenderCenter,
    #[serde(rename = "VOL")]
    DefensiveMidfielder,
    #[default]
    #[serde(rename = "MEI")]
    AttackingMidfielder,
    #[serde(rename = "ATA")]
    Striker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 7] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::DefenderCenter,
        PlayerPositionType::DefenderLeft,
        PlayerPositionType::DefenderRight,
        PlayerPositionType::DefensiveMidfielder,
        PlayerPositionType::AttackingMidfielder,
        PlayerPositionType::Striker,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GOL",
            PlayerPositionType::DefenderLeft => "LE",
            PlayerPositionType::DefenderRight => "LD",
            PlayerPositionType::DefenderCenter => "ZAG",
            PlayerPositionType::DefensiveMidfielder => "VOL",
            PlayerPositionType::AttackingMidfielder => "MEI",
            PlayerPositionType::Striker => "ATA",
        }
    }

    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match self {
            PlayerPositionType::Goalkeeper => PlayerFieldPositionGroup::Goalkeeper,
            PlayerPositionType::DefenderLeft
            | PlayerPositionType::DefenderRight
            | PlayerPositionType::DefenderCenter => PlayerFieldPositionGroup::Defender,
            PlayerPositionType::DefensiveMidfielder
            | PlayerPositionType::AttackingMidfielder => PlayerFieldPositionGroup::Midfielder,
            PlayerPositionType::Striker => PlayerFieldPositionGroup::Forward,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        *self == PlayerPositionType::Goalkeeper
    }

    /// Card accent color for the position line
    pub fn color_hex(&self) -> &'static str {
        match self.position_group() {
            PlayerFieldPositionGroup::Goalkeeper => "#ffab00",
            PlayerFieldPositionGroup::Defender => "#2979ff",
            PlayerFieldPositionGroup::Midfielder => "#00e676",
            PlayerFieldPositionGroup::Forward => "#ff1744",
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}

impl FromStr for PlayerPositionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();

        PlayerPositionType::ALL
            .iter()
            .find(|p| p.get_short_name() == code)
            .copied()
            .ok_or_else(|| format!("unknown position code: {}", s))
    }
}
