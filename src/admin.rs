//! Soft gate in front of the admin dashboard. A fixed URL fragment selects the
//! admin route; the session flag decides between login form and dashboard.
//! None of this is a security boundary.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::app_response::AppResponse;
use crate::config::StoreConfig;
use crate::session_marker::SessionMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminView {
    Public,
    Login,
    Dashboard,
}

#[derive(Debug, Clone)]
pub struct AdminGate {
    fragment: String,
    passcode: String,
}

impl AdminGate {
    pub fn new(fragment: impl Into<String>, passcode: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            passcode: passcode.into(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.admin_fragment.clone(), config.admin_passcode.clone())
    }

    pub fn is_admin_route(&self, fragment: &str) -> bool {
        fragment == self.fragment
    }

    pub fn view(&self, fragment: &str, session: &SessionMarker) -> AdminView {
        if !self.is_admin_route(fragment) {
            AdminView::Public
        } else if session.is_admin_authenticated() {
            AdminView::Dashboard
        } else {
            AdminView::Login
        }
    }

    pub fn login(&self, session: &mut SessionMarker, passcode: &str) -> Result<(), AppResponse> {
        if self.passcode.is_empty() {
            return Err(AppResponse::Unauthorized("Admin passcode is not configured".to_string()));
        }
        if passcode != self.passcode {
            warn!("Admin login rejected");
            return Err(AppResponse::Unauthorized("Incorrect passcode".to_string()));
        }
        session.set_admin_authenticated();
        info!("Admin logged in");
        Ok(())
    }

    pub fn logout(&self, session: &mut SessionMarker) {
        session.clear_admin_authenticated();
        info!("Admin logged out");
    }
}
