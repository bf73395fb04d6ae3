use crate::{Player, PlayerAttributes, PlayerPositionType, PlayerPreferredFoot};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<String>,
    user_id: Option<String>,
    display_name: Option<String>,
    nick: Option<String>,
    photo_url: Option<String>,
    primary_position: Option<PlayerPositionType>,
    secondary_position: Option<PlayerPositionType>,
    preferred_foot: Option<PlayerPreferredFoot>,
    presence_count: Option<u32>,
    attributes: Option<PlayerAttributes>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    pub fn photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    pub fn primary_position(mut self, position: PlayerPositionType) -> Self {
        self.primary_position = Some(position);
        self
    }

    pub fn secondary_position(mut self, position: PlayerPositionType) -> Self {
        self.secondary_position = Some(position);
        self
    }

    pub fn preferred_foot(mut self, preferred_foot: PlayerPreferredFoot) -> Self {
        self.preferred_foot = Some(preferred_foot);
        self
    }

    pub fn presence_count(mut self, presence_count: u32) -> Self {
        self.presence_count = Some(presence_count);
        self
    }

    pub fn attributes(mut self, attributes: PlayerAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let id = self.id.ok_or("id is required")?;
        let nick = self.nick.ok_or("nick is required")?;
        let display_name = self.display_name.unwrap_or_else(|| nick.clone());

        let attributes = self.attributes.unwrap_or_default();
        if !attributes.is_valid() {
            return Err(format!("attributes of {} must be within 0-99", nick));
        }

        let mut player = Player::with_profile(
            id,
            display_name,
            nick,
            self.primary_position.unwrap_or_default(),
            attributes,
        );

        player.user_id = self.user_id;
        player.photo_url = self.photo_url;
        player.secondary_position = self.secondary_position;
        player.preferred_foot = self.preferred_foot.unwrap_or_default();
        player.presence_count = self.presence_count.unwrap_or(0);

        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_id_and_nick() {
        assert_eq!(PlayerBuilder::new().nick("X").build().unwrap_err(), "id is required");
        assert_eq!(PlayerBuilder::new().id("1").build().unwrap_err(), "nick is required");
    }

    #[test]
    fn test_build_computes_overall() {
        let player = Player::builder()
            .id("1")
            .nick("PAREDAO")
            .primary_position(PlayerPositionType::Goalkeeper)
            .attributes(PlayerAttributes::new(50, 40, 60, 50, 90, 70))
            .build()
            .unwrap();

        // 5 + 2 + 9 + 5 + 45 + 7 = 73
        assert_eq!(player.overall(), 73);
        assert_eq!(player.display_name, "PAREDAO");
    }

    #[test]
    fn test_build_rejects_out_of_range_attributes() {
        let result = Player::builder()
            .id("1")
            .nick("X")
            .attributes(PlayerAttributes::uniform(120))
            .build();

        assert!(result.is_err());
    }
}
