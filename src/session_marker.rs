//! Per-session flags. Nothing here is persisted: a new `SessionMarker` is a
//! new browser session.

use std::collections::HashMap;

use chrono::NaiveDate;

pub const TRACKED_KEY_PREFIX: &str = "visitor_tracked_v2_";
pub const ADMIN_AUTH_KEY: &str = "admin_auth";

#[derive(Debug, Default, Clone)]
pub struct SessionMarker {
    flags: HashMap<String, String>,
}

impl SessionMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `visitor_tracked_v2_YYYY-MM-DD`
    pub fn tracked_key(date: NaiveDate) -> String {
        format!("{TRACKED_KEY_PREFIX}{}", date.format("%Y-%m-%d"))
    }

    pub fn is_tracked_on(&self, date: NaiveDate) -> bool {
        self.flags.contains_key(&Self::tracked_key(date))
    }

    pub fn mark_tracked_on(&mut self, date: NaiveDate) {
        self.flags.insert(Self::tracked_key(date), "true".to_string());
    }

    pub fn is_admin_authenticated(&self) -> bool {
        self.flags.get(ADMIN_AUTH_KEY).map(String::as_str) == Some("true")
    }

    pub fn set_admin_authenticated(&mut self) {
        self.flags.insert(ADMIN_AUTH_KEY.to_string(), "true".to_string());
    }

    pub fn clear_admin_authenticated(&mut self) {
        self.flags.remove(ADMIN_AUTH_KEY);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.flags.get(key).map(String::as_str)
    }
}
