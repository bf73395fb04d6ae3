use crate::pelada::error::{PeladaError, PeladaResult};
use crate::pelada::roster::Roster;
use crate::utils::IdUtils;
use crate::{DrawEngine, Player, TeamDraw};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    #[serde(rename = "ABERTO")]
    Open,
    #[serde(rename = "SORTEADO")]
    Drawn,
    #[serde(rename = "FINALIZADO")]
    Finished,
}

/// A scheduled match day. Players sign up, confirm, get drawn into teams,
/// and are credited with a presence once the event is finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub location: String,
    pub format: String,
    pub teams_count: usize,
    pub status: EventStatus,
    pub attendees: Vec<String>,
    pub confirmed_attendees: Vec<String>,
    pub team_draw_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn new(
        title: String,
        starts_at: DateTime<Utc>,
        location: String,
        format: String,
        teams_count: usize,
    ) -> Self {
        Event {
            id: IdUtils::generate(),
            title,
            starts_at,
            location,
            format,
            teams_count,
            status: EventStatus::Open,
            attendees: Vec::new(),
            confirmed_attendees: Vec::new(),
            team_draw_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn add_attendee(&mut self, player_id: &str) -> PeladaResult<()> {
        self.ensure_not_finished("add attendee to")?;

        if !self.attendees.iter().any(|id| id == player_id) {
            self.attendees.push(player_id.to_string());
        }

        Ok(())
    }

    pub fn confirm(&mut self, player_id: &str) -> PeladaResult<()> {
        self.add_attendee(player_id)?;

        if !self.confirmed_attendees.iter().any(|id| id == player_id) {
            self.confirmed_attendees.push(player_id.to_string());
        }

        Ok(())
    }

    pub fn is_confirmed(&self, player_id: &str) -> bool {
        self.confirmed_attendees.iter().any(|id| id == player_id)
    }

    /// Draws the confirmed attendees still on the roster, in roster order.
    /// An already drawn event may be drawn again; the new draw replaces the old one.
    pub fn draw(&mut self, roster: &Roster) -> PeladaResult<TeamDraw> {
        self.ensure_not_finished("draw")?;

        let players: Vec<Player> = roster
            .players()
            .iter()
            .filter(|p| self.is_confirmed(&p.id))
            .cloned()
            .collect();

        if players.len() < self.confirmed_attendees.len() {
            warn!(
                "event {}: {} confirmed players are no longer on the roster",
                self.id,
                self.confirmed_attendees.len() - players.len()
            );
        }

        let team_count = Roster::validate_draw(self.teams_count, players.len())?;

        let draw = DrawEngine::draw(&players, team_count, &self.id);

        self.status = EventStatus::Drawn;
        self.team_draw_id = Some(draw.id.clone());

        info!("event {}: drawn as {}", self.id, draw.id);

        Ok(draw)
    }

    /// Closes a drawn event and credits presence to confirmed attendees
    pub fn finish(&mut self, roster: &mut Roster) -> PeladaResult<()> {
        if self.status != EventStatus::Drawn {
            return Err(self.invalid_status("finish"));
        }

        roster.record_presence(&self.confirmed_attendees);
        self.status = EventStatus::Finished;

        info!("event {}: finished with {} players", self.id, self.confirmed_attendees.len());

        Ok(())
    }

    fn ensure_not_finished(&self, action: &'static str) -> PeladaResult<()> {
        if self.status == EventStatus::Finished {
            return Err(self.invalid_status(action));
        }

        Ok(())
    }

    fn invalid_status(&self, action: &'static str) -> PeladaError {
        PeladaError::InvalidEventStatus {
            event_id: self.id.clone(),
            status: self.status,
            action,
        }
    }
}

/// Events of one pelada, most recent first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSchedule {
    events: Vec<Event>,
}

impl EventSchedule {
    pub fn new(events: Vec<Event>) -> Self {
        let mut schedule = EventSchedule { events };
        schedule.events.sort_by(|a, b| b.starts_at.cmp(&a.starts_at));
        schedule
    }

    pub fn add(&mut self, event: Event) {
        let idx = self
            .events
            .iter()
            .position(|e| e.starts_at < event.starts_at)
            .unwrap_or(self.events.len());

        self.events.insert(idx, event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> PeladaResult<&Event> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| PeladaError::EventNotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> PeladaResult<&mut Event> {
        self.events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| PeladaError::EventNotFound(id.to_string()))
    }
}
