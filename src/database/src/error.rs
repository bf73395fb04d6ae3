use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum DatabaseError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Encoding(String),
    InvalidPayload(String),
    NotFound(String),
}

impl Display for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DatabaseError::Io(err) => write!(f, "IO error: {}", err),
            DatabaseError::Json(err) => write!(f, "JSON error: {}", err),
            DatabaseError::Encoding(msg) => write!(f, "encoding error: {}", msg),
            DatabaseError::InvalidPayload(msg) => write!(f, "invalid payload: {}", msg),
            DatabaseError::NotFound(what) => write!(f, "{} not found", what),
        }
    }
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatabaseError::Io(err) => Some(err),
            DatabaseError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(err: std::io::Error) -> Self {
        DatabaseError::Io(err)
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        DatabaseError::Json(err)
    }
}

impl From<base64::DecodeError> for DatabaseError {
    fn from(err: base64::DecodeError) -> Self {
        DatabaseError::Encoding(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for DatabaseError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        DatabaseError::Encoding(err.to_string())
    }
}

/// Helper type for storage results
pub type DatabaseResult<T> = std::result::Result<T, DatabaseError>;
