use crate::pelada::error::{PeladaError, PeladaResult};
use crate::utils::{IdUtils, StringUtils};
use crate::{
    ATTRIBUTE_MAX_VALUE, AttributeKind, DrawEngine, Player, PlayerAttributes, PlayerPositionType,
    TeamDraw,
};
use itertools::Itertools;
use log::{debug, info};
use std::cmp::Reverse;
use std::num::NonZeroUsize;

pub const MIN_PLAYERS_FOR_DRAW: usize = 2;

const NEW_PLAYER_DISPLAY_NAME: &str = "Novo Jogador";
const NEW_PLAYER_NICK_PREFIX: &str = "CRAQUE";

/// Players of one pelada plus the draw currently shown for them.
/// Every player mutation goes through here so overall stays in sync.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub pelada_id: String,
    players: Vec<Player>,
    current_draw: Option<TeamDraw>,
}

impl Roster {
    pub fn new(pelada_id: String) -> Self {
        Roster::from_players(pelada_id, Vec::new())
    }

    pub fn from_players(pelada_id: String, players: Vec<Player>) -> Self {
        Roster {
            pelada_id,
            players,
            current_draw: None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn current_draw(&self) -> Option<&TeamDraw> {
        self.current_draw.as_ref()
    }

    pub fn clear_draw(&mut self) {
        self.current_draw = None;
    }

    /// Adds a player with default attributes and returns it
    pub fn add_player(&mut self) -> &Player {
        let nick = format!("{} {}", NEW_PLAYER_NICK_PREFIX, self.players.len() + 1);
        let player = Player::new(IdUtils::generate(), NEW_PLAYER_DISPLAY_NAME.to_string(), nick);

        self.insert_player(player)
    }

    pub fn insert_player(&mut self, player: Player) -> &Player {
        info!("roster {}: added {}", self.pelada_id, player);

        self.current_draw = None;
        self.players.push(player);

        &self.players[self.players.len() - 1]
    }

    /// Removes the player and drops the current draw
    pub fn remove_player(&mut self, id: &str) -> PeladaResult<Player> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PeladaError::PlayerNotFound(id.to_string()))?;

        let removed = self.players.remove(idx);
        self.current_draw = None;

        info!("roster {}: removed {}", self.pelada_id, removed);

        Ok(removed)
    }

    /// Returns the recomputed overall
    pub fn update_attribute(&mut self, id: &str, kind: AttributeKind, value: u8) -> PeladaResult<u8> {
        if value > ATTRIBUTE_MAX_VALUE {
            return Err(PeladaError::AttributeOutOfRange { kind, value });
        }

        let player = self.player_mut(id)?;
        player.set_attribute(kind, value);

        debug!("{}: {} set to {}, overall {}", player.nick, kind, value, player.overall());

        Ok(player.overall())
    }

    pub fn set_attributes(&mut self, id: &str, attributes: PlayerAttributes) -> PeladaResult<u8> {
        if let Some(kind) = AttributeKind::ALL
            .iter()
            .find(|k| attributes.get(**k) > ATTRIBUTE_MAX_VALUE)
        {
            return Err(PeladaError::AttributeOutOfRange {
                kind: *kind,
                value: attributes.get(*kind),
            });
        }

        let player = self.player_mut(id)?;
        player.set_attributes(attributes);

        Ok(player.overall())
    }

    pub fn set_primary_position(&mut self, id: &str, position: PlayerPositionType) -> PeladaResult<u8> {
        let player = self.player_mut(id)?;
        player.set_primary_position(position);

        debug!("{}: moved to {}, overall {}", player.nick, position, player.overall());

        Ok(player.overall())
    }

    pub fn set_secondary_position(&mut self, id: &str, position: Option<PlayerPositionType>) -> PeladaResult<()> {
        self.player_mut(id)?.secondary_position = position;
        Ok(())
    }

    pub fn set_photo(&mut self, id: &str, photo_url: Option<String>) -> PeladaResult<()> {
        self.player_mut(id)?.photo_url = photo_url.filter(|url| !url.trim().is_empty());
        Ok(())
    }

    pub fn rename(&mut self, id: &str, display_name: String, nick: String) -> PeladaResult<()> {
        let player = self.player_mut(id)?;
        player.display_name = display_name;
        player.nick = nick;
        Ok(())
    }

    /// Bumps the presence counter of every listed player still on the roster
    pub fn record_presence(&mut self, ids: &[String]) {
        for player in self.players.iter_mut().filter(|p| ids.contains(&p.id)) {
            player.presence_count += 1;
        }
    }

    /// Best `count` players, overall descending, roster order on ties
    pub fn top_players(&self, count: usize) -> Vec<&Player> {
        self.players
            .iter()
            .sorted_by_key(|p| Reverse(p.overall()))
            .take(count)
            .collect()
    }

    /// Rounded mean overall, 0 for an empty roster
    pub fn average_overall(&self) -> u8 {
        let count = self.players.len() as u32;
        if count == 0 {
            return 0;
        }

        let total: u32 = self.players.iter().map(|p| p.overall() as u32).sum();

        ((total * 2 + count) / (count * 2)) as u8
    }

    /// Case-insensitive match on nick or position code, best players first
    pub fn search(&self, query: &str) -> Vec<&Player> {
        let query = query.trim();

        self.players
            .iter()
            .filter(|p| {
                StringUtils::contains_ignore_case(&p.nick, query)
                    || StringUtils::contains_ignore_case(p.primary_position().get_short_name(), query)
            })
            .sorted_by_key(|p| Reverse(p.overall()))
            .collect()
    }

    /// Draws the whole roster and keeps the result as the current draw
    pub fn draw(&mut self, team_count: usize, event_id: &str) -> PeladaResult<&TeamDraw> {
        let team_count = Self::validate_draw(team_count, self.players.len())?;

        let draw = DrawEngine::draw(&self.players, team_count, event_id);

        info!(
            "roster {}: drew {} teams, balance {}%",
            self.pelada_id,
            draw.teams.len(),
            draw.balance_score
        );

        Ok(self.current_draw.insert(draw))
    }

    /// Shows a draw produced elsewhere (an event, a share link) for this roster
    pub fn set_current_draw(&mut self, draw: TeamDraw) -> &TeamDraw {
        self.current_draw.insert(draw)
    }

    pub(crate) fn validate_draw(team_count: usize, players_count: usize) -> PeladaResult<NonZeroUsize> {
        let team_count = NonZeroUsize::new(team_count).ok_or(PeladaError::InvalidTeamCount(team_count))?;

        if players_count < MIN_PLAYERS_FOR_DRAW {
            return Err(PeladaError::NotEnoughPlayers {
                required: MIN_PLAYERS_FOR_DRAW,
                actual: players_count,
            });
        }

        Ok(team_count)
    }

    fn player_mut(&mut self, id: &str) -> PeladaResult<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PeladaError::PlayerNotFound(id.to_string()))
    }
}
