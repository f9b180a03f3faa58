//! Data model for the site content document and visitor logs.
//!
//! [`SiteContent`] is deliberately schemaless: the store only ever replaces it
//! as a whole, and the page sections are interpreted by whoever renders them.
//! Typed views such as [`Hero`] are offered for consumers that want them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::app_response::AppResponse;

/// Top-level section keys of the default document, in page order.
pub const SECTION_KEYS: [&str; 7] = [
    "hero",
    "intro",
    "vision",
    "courses",
    "examSchedule",
    "strategy",
    "employment",
];

/// The editable copy of the whole site as one JSON object.
///
/// Serializes transparently as the object itself, so the persisted form is
/// exactly what the admin dashboard submitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteContent {
    sections: Map<String, JsonValue>,
}

impl SiteContent {
    pub fn from_map(sections: Map<String, JsonValue>) -> Self {
        Self { sections }
    }

    /// Accepts only a JSON object; any other value is a bad request.
    pub fn from_value(value: JsonValue) -> Result<Self, AppResponse> {
        match value {
            JsonValue::Object(sections) => Ok(Self { sections }),
            other => Err(AppResponse::BadRequest(format!(
                "Site content must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn section(&self, key: &str) -> Option<&JsonValue> {
        self.sections.get(key)
    }

    pub fn sections(&self) -> &Map<String, JsonValue> {
        &self.sections
    }

    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.sections)
    }

    /// Shallow default overlay: every top-level key in `saved` replaces the
    /// default wholesale, keys absent from `saved` keep the default value.
    /// Nested objects are never merged.
    pub fn overlay(mut self, saved: SiteContent) -> Self {
        for (key, value) in saved.sections {
            self.sections.insert(key, value);
        }
        self
    }

    pub fn hero(&self) -> Result<Hero, AppResponse> {
        let value = self
            .section("hero")
            .ok_or_else(|| AppResponse::NotFound("Section 'hero' is missing".to_string()))?;
        Ok(Hero::deserialize(value)?)
    }
}

/// Read view of the `hero` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub title: String,
    pub highlight: String,
    pub description: String,
    #[serde(default)]
    pub stats: Vec<StatItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

/// A recorded visit, newest-first in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorLog {
    pub id: String,
    pub ip: String,
    pub referrer: String,
    pub timestamp: String,
    pub user_agent: String,
    pub keyword: String,
}

/// Visitor log fields as supplied by the tracker; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVisitorLog {
    pub ip: String,
    pub referrer: String,
    pub timestamp: String,
    pub user_agent: String,
    pub keyword: String,
}

impl NewVisitorLog {
    pub fn with_id(self, id: String) -> VisitorLog {
        VisitorLog {
            id,
            ip: self.ip,
            referrer: self.referrer,
            timestamp: self.timestamp,
            user_agent: self.user_agent,
            keyword: self.keyword,
        }
    }
}

pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
