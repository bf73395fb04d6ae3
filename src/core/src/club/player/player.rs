use crate::club::player::builder::PlayerBuilder;
use crate::club::player::card::PlayerCardTier;
use crate::{AttributeKind, OverallCalculator, PlayerAttributes, PlayerPositionType};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// A roster member. `overall` is derived from `attributes` and `primary_position`
/// and only changes through the setters below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PlayerData")]
pub struct Player {
    pub id: String,
    pub user_id: Option<String>,
    pub display_name: String,
    pub nick: String,
    pub photo_url: Option<String>,

    primary_position: PlayerPositionType,
    pub secondary_position: Option<PlayerPositionType>,
    #[serde(rename = "dominantFoot")]
    pub preferred_foot: PlayerPreferredFoot,
    pub presence_count: u32,

    attributes: PlayerAttributes,
    overall: u8,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn new(id: String, display_name: String, nick: String) -> Self {
        Player::with_profile(
            id,
            display_name,
            nick,
            PlayerPositionType::default(),
            PlayerAttributes::default(),
        )
    }

    pub fn with_profile(
        id: String,
        display_name: String,
        nick: String,
        primary_position: PlayerPositionType,
        attributes: PlayerAttributes,
    ) -> Self {
        Player {
            id,
            user_id: None,
            display_name,
            nick,
            photo_url: None,
            primary_position,
            secondary_position: None,
            preferred_foot: PlayerPreferredFoot::default(),
            presence_count: 0,
            attributes,
            overall: OverallCalculator::calculate(&attributes, primary_position),
        }
    }

    pub fn overall(&self) -> u8 {
        self.overall
    }

    pub fn attributes(&self) -> &PlayerAttributes {
        &self.attributes
    }

    pub fn primary_position(&self) -> PlayerPositionType {
        self.primary_position
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.primary_position.is_goalkeeper()
    }

    pub fn card_tier(&self) -> PlayerCardTier {
        PlayerCardTier::from_overall(self.overall)
    }

    pub fn set_attribute(&mut self, kind: AttributeKind, value: u8) {
        self.attributes.set(kind, value);
        self.recalculate_overall();
    }

    pub fn set_attributes(&mut self, attributes: PlayerAttributes) {
        self.attributes = attributes;
        self.recalculate_overall();
    }

    pub fn set_primary_position(&mut self, position: PlayerPositionType) {
        self.primary_position = position;
        self.recalculate_overall();
    }

    fn recalculate_overall(&mut self) {
        self.overall = OverallCalculator::calculate(&self.attributes, self.primary_position);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerPreferredFoot {
    #[serde(rename = "ESQUERDO")]
    Left,
    #[default]
    #[serde(rename = "DIREITO")]
    Right,
    #[serde(rename = "AMBOS")]
    Both,
}

/// Wire shape of a player. A stored `overall` is ignored and recomputed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerData {
    id: String,
    #[serde(default)]
    user_id: Option<String>,
    display_name: String,
    nick: String,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    primary_position: PlayerPositionType,
    #[serde(default)]
    secondary_position: Option<PlayerPositionType>,
    #[serde(default)]
    dominant_foot: PlayerPreferredFoot,
    #[serde(default)]
    presence_count: u32,
    #[serde(default)]
    attributes: PlayerAttributes,
}

impl From<PlayerData> for Player {
    fn from(data: PlayerData) -> Self {
        let mut player = Player::with_profile(
            data.id,
            data.display_name,
            data.nick,
            data.primary_position,
            data.attributes,
        );

        player.user_id = data.user_id;
        player.photo_url = data.photo_url;
        player.secondary_position = data.secondary_position;
        player.preferred_foot = data.dominant_foot;
        player.presence_count = data.presence_count;

        player
    }
}

//DISPLAY
impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({} {})", self.nick, self.primary_position, self.overall)
    }
}
