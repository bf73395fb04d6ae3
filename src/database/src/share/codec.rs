use crate::error::{DatabaseError, DatabaseResult};
use crate::share::SharePayload;
use base64::{Engine as _, engine::general_purpose};
use log::debug;
use serde_json::Value;

pub struct ShareCodec;

impl ShareCodec {
    pub fn encode(payload: &SharePayload) -> DatabaseResult<String> {
        let json = serde_json::to_string(payload)?;
        Ok(general_purpose::STANDARD.encode(json))
    }

    /// Accepts the bare code or a url fragment (`#...`)
    pub fn decode(code: &str) -> DatabaseResult<SharePayload> {
        let code = code.trim();
        let code = code.strip_prefix('#').unwrap_or(code).trim();

        if code.is_empty() {
            return Err(DatabaseError::InvalidPayload("empty share code".to_string()));
        }

        let bytes = general_purpose::STANDARD.decode(code)?;
        let json = String::from_utf8(bytes)?;

        let value: Value = serde_json::from_str(&json)?;

        if !value.get("n").is_some_and(Value::is_string) {
            return Err(DatabaseError::InvalidPayload("name is missing".to_string()));
        }

        if !value.get("p").is_some_and(Value::is_array) {
            return Err(DatabaseError::InvalidPayload("players are missing".to_string()));
        }

        let payload: SharePayload = serde_json::from_value(value)?;

        debug!("decoded share payload '{}' with {} players", payload.n, payload.p.len());

        Ok(payload)
    }
}
