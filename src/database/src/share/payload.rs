use chrono::Utc;
use pelada_core::{Player, TeamDraw};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Everything a share link carries: pelada name, roster, last draw and when it was shared.
/// Keys are single letters to keep links short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePayload {
    pub n: String,
    pub p: Vec<Player>,
    #[serde(default)]
    pub d: Option<TeamDraw>,
    #[serde(default = "now_millis", deserialize_with = "lenient_millis")]
    pub t: i64,
}

impl SharePayload {
    pub fn new(name: String, players: Vec<Player>, draw: Option<TeamDraw>) -> Self {
        SharePayload {
            n: name,
            p: players,
            d: draw,
            t: now_millis(),
        }
    }

    pub fn name(&self) -> &str {
        &self.n
    }

    pub fn players(&self) -> &[Player] {
        &self.p
    }

    pub fn draw(&self) -> Option<&TeamDraw> {
        self.d.as_ref()
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Anything that is not a number (a string, null) means "shared just now"
fn lenient_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;

    Ok(value
        .as_i64()
        .or_else(|| value.as_f64().map(|millis| millis as i64))
        .unwrap_or_else(now_millis))
}
