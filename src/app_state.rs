use log::info;

use crate::admin::AdminGate;
use crate::app_response::AppResponse;
use crate::config::StoreConfig;
use crate::content_store::ContentStore;
use crate::local_db_state::LocalDbState;
use crate::session_marker::SessionMarker;
use crate::tracker::{Clock, HttpIpLookup, IpLookup, SystemClock, VisitorTracker};

pub type BoxedTracker = VisitorTracker<Box<dyn IpLookup>, Box<dyn Clock>>;

/// Everything one host session needs, handed across FFI as a single pointer.
pub struct AppContentState {
    pub store: ContentStore<LocalDbState>,
    pub session: SessionMarker,
    pub gate: AdminGate,
    pub tracker: BoxedTracker,
}

impl AppContentState {
    /// Opens the LMDB backing and hydrates the store before returning.
    /// Visits are tracked through `ipLookupUrl` and the system clock.
    pub fn init(config: StoreConfig) -> Result<Self, AppResponse> {
        let lookup = HttpIpLookup::new(config.ip_lookup_url.clone())?;
        Self::with_tracker(config, Box::new(lookup), Box::new(SystemClock))
    }

    pub fn with_tracker(
        config: StoreConfig,
        lookup: Box<dyn IpLookup>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, AppResponse> {
        config.validate()?;
        let backing = LocalDbState::init_with_map_size(&config.db_name, config.map_size)?;
        let gate = AdminGate::from_config(&config);
        let store = ContentStore::open(backing, config);

        info!("Content state ready at {}", store.backing().path().display());
        Ok(Self {
            store,
            session: SessionMarker::new(),
            gate,
            tracker: VisitorTracker::new(lookup, clock),
        })
    }

    pub fn close(&self) -> Result<(), AppResponse> {
        self.store.backing().close_database()
    }
}
