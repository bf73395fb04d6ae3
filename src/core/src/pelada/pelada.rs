use crate::utils::{IdUtils, StringUtils};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// A recurring group of players owned by one organizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pelada {
    pub id: String,
    pub name: String,
    #[serde(rename = "userId")]
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

impl Pelada {
    pub fn new(name: String, owner_id: String) -> Self {
        Pelada {
            id: IdUtils::generate(),
            name: name.trim().to_string(),
            owner_id,
            created_at: Utc::now(),
        }
    }

    pub fn slug(&self) -> String {
        StringUtils::slug(&self.name)
    }
}

//DISPLAY
impl Display for Pelada {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
