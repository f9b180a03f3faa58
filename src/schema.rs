//! Versioned on-disk form of the content document.
//!
//! Content is written as `{"schemaVersion": N, "content": {...}}`. Documents
//! without the envelope are the bare legacy format and count as version 0.
//! On read, [`MIGRATIONS`] upgrades a document one version at a time until it
//! reaches [`CURRENT_SCHEMA_VERSION`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::app_response::AppResponse;
use crate::local_db_model::{json_kind, SiteContent, VisitorLog};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

type Migration = fn(JsonValue) -> Result<JsonValue, AppResponse>;

/// `(from_version, migration)`; each step must produce a higher version.
const MIGRATIONS: &[(u32, Migration)] = &[(0, wrap_bare_document)];

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedContent {
    schema_version: u32,
    content: SiteContent,
}

pub fn encode_content(content: &SiteContent) -> Result<String, AppResponse> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Envelope<'a> {
        schema_version: u32,
        content: &'a SiteContent,
    }

    Ok(serde_json::to_string(&Envelope {
        schema_version: CURRENT_SCHEMA_VERSION,
        content,
    })?)
}

pub fn decode_content(raw: &str) -> Result<SiteContent, AppResponse> {
    let value: JsonValue = serde_json::from_str(raw)?;
    migrate(value)
}

/// Brings any supported document up to the current version and unwraps it.
pub fn migrate(mut value: JsonValue) -> Result<SiteContent, AppResponse> {
    let mut version = schema_version(&value)?;

    while version < CURRENT_SCHEMA_VERSION {
        let step = MIGRATIONS
            .iter()
            .find(|(from, _)| *from == version)
            .map(|(_, step)| *step)
            .ok_or_else(|| {
                AppResponse::SerializationError(format!("No migration from schema version {version}"))
            })?;

        value = step(value)?;
        let next = schema_version(&value)?;
        if next <= version {
            return Err(AppResponse::SerializationError(format!(
                "Migration from schema version {version} did not advance"
            )));
        }
        version = next;
    }

    if version > CURRENT_SCHEMA_VERSION {
        return Err(AppResponse::SerializationError(format!(
            "Schema version {version} is newer than supported version {CURRENT_SCHEMA_VERSION}"
        )));
    }

    let envelope: PersistedContent = serde_json::from_value(value)?;
    Ok(envelope.content)
}

fn schema_version(value: &JsonValue) -> Result<u32, AppResponse> {
    let object = value.as_object().ok_or_else(|| {
        AppResponse::SerializationError(format!(
            "Persisted content must be an object, got {}",
            json_kind(value)
        ))
    })?;

    match object.get("schemaVersion") {
        None => Ok(0),
        Some(raw) => raw
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                AppResponse::SerializationError(format!("Invalid schemaVersion: {raw}"))
            }),
    }
}

fn wrap_bare_document(value: JsonValue) -> Result<JsonValue, AppResponse> {
    Ok(json!({ "schemaVersion": 1, "content": value }))
}

pub fn encode_logs(logs: &[VisitorLog]) -> Result<String, AppResponse> {
    Ok(serde_json::to_string(logs)?)
}

pub fn decode_logs(raw: &str) -> Result<Vec<VisitorLog>, AppResponse> {
    Ok(serde_json::from_str(raw)?)
}
