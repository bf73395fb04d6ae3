use crate::pelada::event::EventStatus;
use crate::AttributeKind;
use std::fmt::{Display, Formatter, Result};

/// Precondition failures reported by the roster and event layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeladaError {
    InvalidTeamCount(usize),
    NotEnoughPlayers { required: usize, actual: usize },
    PlayerNotFound(String),
    AttributeOutOfRange { kind: AttributeKind, value: u8 },
    EventNotFound(String),
    InvalidEventStatus { event_id: String, status: EventStatus, action: &'static str },
}

impl Display for PeladaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PeladaError::InvalidTeamCount(count) => {
                write!(f, "team count must be at least 1, got {}", count)
            }
            PeladaError::NotEnoughPlayers { required, actual } => {
                write!(f, "at least {} players are needed, got {}", required, actual)
            }
            PeladaError::PlayerNotFound(id) => write!(f, "player {} not found", id),
            PeladaError::AttributeOutOfRange { kind, value } => {
                write!(f, "{} must be within 0-99, got {}", kind, value)
            }
            PeladaError::EventNotFound(id) => write!(f, "event {} not found", id),
            PeladaError::InvalidEventStatus { event_id, status, action } => {
                write!(f, "cannot {} event {} while it is {:?}", action, event_id, status)
            }
        }
    }
}

impl std::error::Error for PeladaError {}

pub type PeladaResult<T> = std::result::Result<T, PeladaError>;
