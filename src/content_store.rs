//! The content store: site copy and visitor logs, hydrated from a
//! [`DurableBacking`] and written back on every mutation.
//!
//! Reads are lenient: anything unparseable found during hydration is logged
//! and replaced by defaults. Writes are strict: a failed write is returned to
//! the caller as an [`AppResponse`] error.

use std::collections::HashSet;

use log::{debug, info, warn};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::app_response::AppResponse;
use crate::backing::DurableBacking;
use crate::config::StoreConfig;
use crate::default_content::default_content;
use crate::local_db_model::{NewVisitorLog, SiteContent, VisitorLog};
use crate::schema::{decode_content, decode_logs, encode_content, encode_logs};

pub const RESET_PROMPT: &str = "모든 변경사항을 초기화하시겠습니까?";

const LOG_ID_LEN: usize = 9;
const LEGACY_IMPORTED_SUFFIX: &str = "__legacy_imported";

/// Blocking yes/no prompt used before destructive actions.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub struct ContentStore<B: DurableBacking> {
    backing: B,
    config: StoreConfig,
    defaults: SiteContent,
    content: SiteContent,
    visitor_logs: Vec<VisitorLog>,
    ready: bool,
}

impl<B: DurableBacking> ContentStore<B> {
    /// Creates an unhydrated store. Reads fail with [`AppResponse::NotReady`]
    /// until [`hydrate`](Self::hydrate) has run.
    pub fn new(backing: B, config: StoreConfig) -> Self {
        let defaults = default_content();
        Self {
            backing,
            config,
            content: defaults.clone(),
            defaults,
            visitor_logs: Vec::new(),
            ready: false,
        }
    }

    pub fn open(backing: B, config: StoreConfig) -> Self {
        let mut store = Self::new(backing, config);
        store.hydrate();
        store
    }

    pub fn hydrate(&mut self) {
        let content_key = self.config.content_key.clone();
        let legacy_content_key = match self.config.legacy_content_key.clone() {
            Some(_) if self.legacy_content_imported() => None,
            legacy => legacy,
        };
        self.content = match self.read_saved(&content_key, legacy_content_key.as_deref()) {
            Some((key, raw)) => match decode_content(&raw) {
                Ok(saved) => {
                    if key != content_key {
                        self.import_legacy_content(&key, &saved);
                    }
                    self.defaults.clone().overlay(saved)
                }
                Err(e) => {
                    warn!("Failed to load content from '{key}', using defaults: {e}");
                    self.defaults.clone()
                }
            },
            None => self.defaults.clone(),
        };

        let log_key = self.config.log_key.clone();
        let legacy_log_key = self.config.legacy_log_key.clone();
        self.visitor_logs = match self.read_saved(&log_key, legacy_log_key.as_deref()) {
            Some((key, raw)) => match decode_logs(&raw) {
                Ok(mut logs) => {
                    logs.truncate(self.config.log_cap);
                    logs
                }
                Err(e) => {
                    warn!("Failed to load visitor logs from '{key}': {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        self.ready = true;
        info!(
            "Content store hydrated: {} sections, {} visitor logs",
            self.content.sections().len(),
            self.visitor_logs.len()
        );
    }

    /// Current value under `key`, or under `legacy` when `key` holds nothing.
    /// Backend read failures count as "nothing stored".
    fn read_saved(&self, key: &str, legacy: Option<&str>) -> Option<(String, String)> {
        let candidates = std::iter::once(key).chain(legacy);
        for candidate in candidates {
            match self.backing.get(candidate) {
                Ok(Some(raw)) => return Some((candidate.to_string(), raw)),
                Ok(None) => {}
                Err(e) => warn!("Failed to read '{candidate}' from backing: {e}"),
            }
        }
        None
    }

    /// Key recording that the legacy document was taken over (or reset away)
    /// and must not be read again.
    fn legacy_marker_key(&self) -> String {
        format!("{}{LEGACY_IMPORTED_SUFFIX}", self.config.content_key)
    }

    fn legacy_content_imported(&self) -> bool {
        match self.backing.get(&self.legacy_marker_key()) {
            Ok(marker) => marker.is_some(),
            Err(e) => {
                warn!("Failed to read legacy import marker: {e}");
                false
            }
        }
    }

    /// Copies a migrated legacy document under the current key. Failures are
    /// logged only; the legacy key is read again on the next hydration.
    fn import_legacy_content(&self, legacy_key: &str, saved: &SiteContent) {
        let imported = encode_content(saved).and_then(|raw| {
            self.backing.set(&self.config.content_key, &raw)?;
            self.backing.set(&self.legacy_marker_key(), "true")
        });
        match imported {
            Ok(()) => info!("Imported legacy content from '{legacy_key}'"),
            Err(e) => warn!("Failed to import legacy content from '{legacy_key}': {e}"),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    fn ensure_ready(&self) -> Result<(), AppResponse> {
        if self.ready {
            Ok(())
        } else {
            Err(AppResponse::NotReady("hydrate() has not completed".to_string()))
        }
    }

    pub fn content(&self) -> Result<&SiteContent, AppResponse> {
        self.ensure_ready()?;
        Ok(&self.content)
    }

    /// Newest first.
    pub fn visitor_logs(&self) -> Result<&[VisitorLog], AppResponse> {
        self.ensure_ready()?;
        Ok(&self.visitor_logs)
    }

    pub fn default_content(&self) -> &SiteContent {
        &self.defaults
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn backing(&self) -> &B {
        &self.backing
    }

    pub fn into_backing(self) -> B {
        self.backing
    }

    /// Replaces the whole document and persists it. The in-memory value is
    /// replaced before the write, so a failed write leaves memory ahead of
    /// the backing until the next successful write.
    pub fn update_content(&mut self, new_content: SiteContent) -> Result<(), AppResponse> {
        self.ensure_ready()?;
        self.content = new_content;
        let raw = encode_content(&self.content)?;
        self.backing.set(&self.config.content_key, &raw)?;
        debug!("Content replaced ({} sections)", self.content.sections().len());
        Ok(())
    }

    pub fn add_visitor_log(&mut self, entry: NewVisitorLog) -> Result<VisitorLog, AppResponse> {
        self.ensure_ready()?;
        let log = entry.with_id(self.fresh_log_id());

        self.visitor_logs.insert(0, log.clone());
        self.visitor_logs.truncate(self.config.log_cap);

        let raw = encode_logs(&self.visitor_logs)?;
        self.backing.set(&self.config.log_key, &raw)?;
        Ok(log)
    }

    fn fresh_log_id(&self) -> String {
        let taken: HashSet<&str> = self.visitor_logs.iter().map(|l| l.id.as_str()).collect();
        let mut rng = rand::thread_rng();
        loop {
            let id: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(LOG_ID_LEN)
                .map(|b| char::from(b).to_ascii_lowercase())
                .collect();
            if !taken.contains(id.as_str()) {
                return id;
            }
        }
    }

    /// Restores the default document after confirmation. Returns `Ok(false)`
    /// when the prompt is declined. Visitor logs are never touched, and the
    /// legacy document is marked as consumed so it cannot come back.
    pub fn reset_content(&mut self, confirmation: &dyn Confirmation) -> Result<bool, AppResponse> {
        self.ensure_ready()?;
        if !confirmation.confirm(RESET_PROMPT) {
            info!("Content reset declined");
            return Ok(false);
        }

        self.content = self.defaults.clone();
        self.backing.remove(&self.config.content_key)?;
        if self.config.legacy_content_key.is_some() {
            self.backing.set(&self.legacy_marker_key(), "true")?;
        }
        info!("Content reset to defaults");
        Ok(true)
    }
}
