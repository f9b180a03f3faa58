use std::fmt::{Display, Formatter};

use lmdb::Error as LmdbError;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

/// Result envelope shared by the Rust API and the FFI surface.
///
/// Every fallible store operation returns `Result<T, AppResponse>`; the FFI
/// layer serializes the same enum, so hosts receive `{"Ok": "..."}` on success
/// and `{"<Kind>": "<message>"}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppResponse {
    DatabaseError(String),
    QuotaExceeded(String),
    SerializationError(String),
    NotFound(String),
    NotReady(String),
    ValidationError(String),
    TrackingError(String),
    Unauthorized(String),
    BadRequest(String),
    Ok(String),
}

impl Display for AppResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AppResponse::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppResponse::QuotaExceeded(msg) => write!(f, "Storage quota exceeded: {}", msg),
            AppResponse::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppResponse::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppResponse::NotReady(msg) => write!(f, "Store not ready: {}", msg),
            AppResponse::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppResponse::TrackingError(msg) => write!(f, "Tracking error: {}", msg),
            AppResponse::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppResponse::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppResponse::Ok(msg) => write!(f, "Ok: {}", msg),
        }
    }
}

impl std::error::Error for AppResponse {}

impl From<LmdbError> for AppResponse {
    fn from(err: LmdbError) -> Self {
        match err {
            LmdbError::NotFound => AppResponse::NotFound("Key not found".to_string()),
            LmdbError::MapFull => {
                AppResponse::QuotaExceeded("LMDB map is full; raise mapSize".to_string())
            }
            LmdbError::Corrupted => {
                AppResponse::DatabaseError("Database is corrupted".to_string())
            }
            LmdbError::Other(code) => AppResponse::DatabaseError(format!("IO error (code {code})")),
            _ => AppResponse::DatabaseError(format!("Database error: {:?}", err)),
        }
    }
}

impl From<SerdeError> for AppResponse {
    fn from(err: SerdeError) -> Self {
        AppResponse::SerializationError(format!("JSON serialization error: {}", err))
    }
}

impl From<reqwest::Error> for AppResponse {
    fn from(err: reqwest::Error) -> Self {
        AppResponse::TrackingError(format!("IP lookup failed: {}", err))
    }
}

impl From<url::ParseError> for AppResponse {
    fn from(err: url::ParseError) -> Self {
        AppResponse::BadRequest(format!("Malformed URL: {}", err))
    }
}

impl From<std::io::Error> for AppResponse {
    fn from(err: std::io::Error) -> Self {
        AppResponse::DatabaseError(format!("IO error: {}", err))
    }
}

impl AppResponse {
    pub fn success(msg: impl Into<String>) -> Self {
        AppResponse::Ok(msg.into())
    }

    /// `true` for every variant except [`AppResponse::Ok`].
    pub fn is_error(&self) -> bool {
        !matches!(self, AppResponse::Ok(_))
    }
}
