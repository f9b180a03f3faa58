//! Best-effort visitor tracking.
//!
//! Once per session and UTC calendar day, the tracker resolves the visitor's
//! public IP, classifies the referrer and appends a [`VisitorLog`]. Failures
//! are logged and swallowed; tracking never reports an error to its caller.

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, error, info};
use serde::Deserialize;
use url::Url;

use crate::app_response::AppResponse;
use crate::backing::DurableBacking;
use crate::config::DEFAULT_IP_LOOKUP_URL;
use crate::content_store::ContentStore;
use crate::local_db_model::{NewVisitorLog, VisitorLog};
use crate::session_marker::SessionMarker;

pub const DIRECT_REFERRER: &str = "직접 접속";
pub const NO_KEYWORD: &str = "없음";

pub trait IpLookup {
    fn lookup_ip(&self) -> Result<String, AppResponse>;
}

impl<L: IpLookup + ?Sized> IpLookup for Box<L> {
    fn lookup_ip(&self) -> Result<String, AppResponse> {
        (**self).lookup_ip()
    }
}

/// `GET <url>` returning `{"ip": "..."}`, e.g. api.ipify.org.
pub struct HttpIpLookup {
    client: reqwest::blocking::Client,
    url: String,
}

#[derive(Deserialize)]
struct IpResponse {
    ip: String,
}

impl HttpIpLookup {
    pub fn new(url: impl Into<String>) -> Result<Self, AppResponse> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn ipify() -> Result<Self, AppResponse> {
        Self::new(DEFAULT_IP_LOOKUP_URL)
    }
}

impl IpLookup for HttpIpLookup {
    fn lookup_ip(&self) -> Result<String, AppResponse> {
        let body: IpResponse = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(body.ip)
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEngine {
    Naver,
    Google,
    Daum,
}

impl SearchEngine {
    /// Label recorded when the engine forwarded no search term.
    pub fn fallback_keyword(self) -> &'static str {
        match self {
            SearchEngine::Naver => "네이버 유입",
            SearchEngine::Google => "구글 유입",
            SearchEngine::Daum => "다음 유입",
        }
    }

    /// Query-string parameter carrying the search term, if the engine sends one.
    pub fn query_param(self) -> Option<&'static str> {
        match self {
            SearchEngine::Naver => Some("query"),
            SearchEngine::Google => None,
            SearchEngine::Daum => Some("q"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrafficSource {
    Direct,
    Search {
        engine: SearchEngine,
        keyword: Option<String>,
    },
    Other,
}

impl TrafficSource {
    pub fn keyword(&self) -> String {
        match self {
            TrafficSource::Direct | TrafficSource::Other => NO_KEYWORD.to_string(),
            TrafficSource::Search {
                keyword: Some(keyword),
                ..
            } => keyword.clone(),
            TrafficSource::Search {
                engine,
                keyword: None,
            } => engine.fallback_keyword().to_string(),
        }
    }
}

/// Classifies by hostname substring, in the order Naver, Google, Daum.
/// A referrer that matches an engine but does not parse as a URL is `Other`.
pub fn classify_referrer(referrer: Option<&str>) -> TrafficSource {
    let referrer = match referrer.map(str::trim) {
        Some(r) if !r.is_empty() => r,
        _ => return TrafficSource::Direct,
    };

    let engine = if referrer.contains("naver.com") {
        SearchEngine::Naver
    } else if referrer.contains("google") {
        SearchEngine::Google
    } else if referrer.contains("daum.net") {
        SearchEngine::Daum
    } else {
        return TrafficSource::Other;
    };

    let Some(param) = engine.query_param() else {
        return TrafficSource::Search {
            engine,
            keyword: None,
        };
    };

    match Url::parse(referrer) {
        Ok(url) => {
            let keyword = url
                .query_pairs()
                .find(|(name, _)| name == param)
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty());
            TrafficSource::Search { engine, keyword }
        }
        Err(e) => {
            debug!("Unparseable referrer '{referrer}': {e}");
            TrafficSource::Other
        }
    }
}

pub struct VisitorTracker<L: IpLookup, C: Clock> {
    lookup: L,
    clock: C,
}

impl<L: IpLookup, C: Clock> VisitorTracker<L, C> {
    pub fn new(lookup: L, clock: C) -> Self {
        Self { lookup, clock }
    }

    /// Records at most one visit per session and UTC day. The session flag is
    /// only set after the log was stored, so a failed attempt may be retried.
    pub fn track<B: DurableBacking>(
        &self,
        store: &mut ContentStore<B>,
        session: &mut SessionMarker,
        referrer: Option<&str>,
        user_agent: &str,
    ) -> Option<VisitorLog> {
        let today = self.clock.now().date_naive();
        if session.is_tracked_on(today) {
            debug!("Visitor already tracked on {today}");
            return None;
        }

        match self.record(store, referrer, user_agent) {
            Ok(log) => {
                session.mark_tracked_on(today);
                info!("Tracked visit from {} ({})", log.ip, log.keyword);
                Some(log)
            }
            Err(e) => {
                error!("Visitor tracking failed: {e}");
                None
            }
        }
    }

    fn record<B: DurableBacking>(
        &self,
        store: &mut ContentStore<B>,
        referrer: Option<&str>,
        user_agent: &str,
    ) -> Result<VisitorLog, AppResponse> {
        let ip = self.lookup.lookup_ip()?;

        let keyword = classify_referrer(referrer).keyword();
        let referrer = match referrer {
            Some(r) if !r.trim().is_empty() => r.to_string(),
            _ => DIRECT_REFERRER.to_string(),
        };

        store.add_visitor_log(NewVisitorLog {
            ip,
            referrer,
            timestamp: self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: user_agent.to_string(),
            keyword,
        })
    }
}
