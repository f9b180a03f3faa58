use serde::{Deserialize, Serialize};

use crate::app_response::AppResponse;
use crate::local_db_state::DEFAULT_MAP_SIZE;

pub const DEFAULT_LOG_CAP: usize = 500;
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";
pub const DEFAULT_ADMIN_FRAGMENT: &str = "#0107761";

/// Store configuration, read from camelCase JSON. Every field has a default,
/// so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    pub db_name: String,
    pub map_size: usize,
    pub content_key: String,
    pub log_key: String,
    /// Imported once when nothing is stored under `content_key`; never written
    /// or deleted.
    pub legacy_content_key: Option<String>,
    pub legacy_log_key: Option<String>,
    pub log_cap: usize,
    pub ip_lookup_url: String,
    pub admin_fragment: String,
    pub admin_passcode: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_name: "academy_content".to_string(),
            map_size: DEFAULT_MAP_SIZE,
            content_key: "site_content".to_string(),
            log_key: "visitor_logs".to_string(),
            legacy_content_key: Some("site_content_v7".to_string()),
            legacy_log_key: Some("visitor_logs_v7".to_string()),
            log_cap: DEFAULT_LOG_CAP,
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
            admin_fragment: DEFAULT_ADMIN_FRAGMENT.to_string(),
            admin_passcode: String::new(),
        }
    }
}

impl StoreConfig {
    pub fn from_json(json: &str) -> Result<Self, AppResponse> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppResponse> {
        if self.content_key.is_empty() || self.log_key.is_empty() {
            return Err(AppResponse::ValidationError(
                "contentKey and logKey must not be empty".to_string(),
            ));
        }
        if self.content_key == self.log_key {
            return Err(AppResponse::ValidationError(
                "contentKey and logKey must differ".to_string(),
            ));
        }
        if self.log_cap == 0 {
            return Err(AppResponse::ValidationError("logCap must be at least 1".to_string()));
        }
        Ok(())
    }
}
