//! # Academy Content Core
//!
//! Local content store for the academy marketing site. It holds the editable
//! page copy and the visitor log, persists both to LMDB on every change, and
//! exposes a C-compatible surface so a webview or Flutter host can drive it.
//!
//! ## Features
//!
//! - **Whole-document content**: the admin dashboard replaces the document as a
//!   whole; saved data is overlaid on a built-in default per top-level section
//! - **Versioned persistence**: documents carry a `schemaVersion`, older ones
//!   are migrated on load
//! - **Capped visitor log**: newest first, at most 500 entries
//! - **Session gating**: one tracked visit per session and day, plus a soft
//!   admin flag
//!
//! ## Quick Start
//!
//! ```no_run
//! use academy_content_core::backing::MemoryBacking;
//! use academy_content_core::config::StoreConfig;
//! use academy_content_core::content_store::ContentStore;
//!
//! let mut store = ContentStore::open(MemoryBacking::new(), StoreConfig::default());
//! let hero = store.content()?.hero()?;
//! assert_eq!(hero.stats.len(), 6);
//!
//! store.reset_content(&|_prompt: &str| true)?;
//! # Ok::<(), academy_content_core::app_response::AppResponse>(())
//! ```
//!
//! ## FFI Functions
//!
//! Every function returning `*const c_char` returns a JSON-encoded
//! [`AppResponse`]; release it with [`free_response`].
//!
//! - [`create_content_store`] / [`create_content_store_with_config`]
//! - [`get_content`], [`update_content`], [`reset_content`]
//! - [`get_visitor_logs`], [`add_visitor_log`], [`track_visit`]
//! - [`admin_view`], [`admin_login`], [`admin_logout`]
//! - [`close_content_store`]

pub mod admin;
pub mod app_response;
pub mod app_state;
pub mod backing;
pub mod config;
pub mod content_store;
pub mod default_content;
pub mod local_db_model;
pub mod local_db_state;
pub mod schema;
pub mod session_marker;
pub mod tracker;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use log::{info, warn};
use serde::Serialize;

use crate::app_response::AppResponse;
use crate::app_state::AppContentState;
use crate::config::StoreConfig;
use crate::local_db_model::{NewVisitorLog, SiteContent};

/// Host-provided blocking yes/no prompt. Receives a NUL-terminated UTF-8
/// prompt and returns `true` to proceed.
pub type ConfirmCallback = extern "C" fn(prompt: *const c_char) -> bool;

/// Opens (or creates) `<name>.lmdb` with default settings and hydrates it.
///
/// Returns null if `name` is null, not UTF-8, or the database cannot be
/// opened. The pointer must be released with [`close_content_store`].
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_content_store(name: *const c_char) -> *mut AppContentState {
    if name.is_null() {
        warn!("Null name pointer passed to create_content_store");
        return std::ptr::null_mut();
    }

    let name_str = match unsafe { CStr::from_ptr(name).to_str() } {
        Ok(s) => s,
        Err(e) => {
            warn!("Invalid UTF-8 in name parameter: {e}");
            return std::ptr::null_mut();
        }
    };

    let config = StoreConfig {
        db_name: name_str.to_string(),
        ..StoreConfig::default()
    };
    init_state(config)
}

/// Like [`create_content_store`], configured from a camelCase JSON
/// [`StoreConfig`]. Missing fields take their defaults.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_content_store_with_config(config_json: *const c_char) -> *mut AppContentState {
    if config_json.is_null() {
        warn!("Null config pointer passed to create_content_store_with_config");
        return std::ptr::null_mut();
    }

    let json = match unsafe { CStr::from_ptr(config_json).to_str() } {
        Ok(s) => s,
        Err(e) => {
            warn!("Invalid UTF-8 in config parameter: {e}");
            return std::ptr::null_mut();
        }
    };

    match StoreConfig::from_json(json) {
        Ok(config) => init_state(config),
        Err(e) => {
            warn!("Rejected store configuration: {e}");
            std::ptr::null_mut()
        }
    }
}

fn init_state(config: StoreConfig) -> *mut AppContentState {
    let db_name = config.db_name.clone();
    match AppContentState::init(config) {
        Ok(state) => {
            info!("✅ Content store '{db_name}' initialized");
            Box::into_raw(Box::new(state))
        }
        Err(e) => {
            warn!("❌ Failed to initialize content store '{db_name}': {e}");
            std::ptr::null_mut()
        }
    }
}

/// Returns the current site content document.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_content(state: *mut AppContentState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to get_content"),
    };

    match state.store.content() {
        Ok(content) => ok_json(content),
        Err(e) => response_to_c_string(&e),
    }
}

/// Replaces the whole site content with the JSON object in `json_ptr`.
///
/// A write failure (e.g. a full LMDB map) is reported; the in-memory document
/// has already been replaced at that point.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn update_content(state: *mut AppContentState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to update_content"),
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(err) => return err,
    };

    let content = match serde_json::from_str(&json_str)
        .map_err(AppResponse::from)
        .and_then(SiteContent::from_value)
    {
        Ok(content) => content,
        Err(e) => return response_to_c_string(&e),
    };

    match state.store.update_content(content) {
        Ok(()) => response_to_c_string(&AppResponse::success("Content updated")),
        Err(e) => response_to_c_string(&e),
    }
}

/// Restores the default document after the host's confirmation callback
/// agrees. Declining is not an error; the response then reads `"false"`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn reset_content(state: *mut AppContentState, confirm: Option<ConfirmCallback>) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to reset_content"),
    };

    let confirm = match confirm {
        Some(cb) => cb,
        None => return bad_request("Null confirmation callback passed to reset_content"),
    };

    let confirmation = move |prompt: &str| match CString::new(prompt) {
        Ok(c_prompt) => confirm(c_prompt.as_ptr()),
        Err(_) => false,
    };

    match state.store.reset_content(&confirmation) {
        Ok(reset) => ok_json(&reset),
        Err(e) => response_to_c_string(&e),
    }
}

/// Returns the visitor log, newest first.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_visitor_logs(state: *mut AppContentState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to get_visitor_logs"),
    };

    match state.store.visitor_logs() {
        Ok(logs) => ok_json(&logs),
        Err(e) => response_to_c_string(&e),
    }
}

/// Appends a visitor log supplied by the host. Expected JSON:
///
/// ```json
/// {"ip": "...", "referrer": "...", "timestamp": "...", "userAgent": "...", "keyword": "..."}
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn add_visitor_log(state: *mut AppContentState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to add_visitor_log"),
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(err) => return err,
    };

    let entry: NewVisitorLog = match serde_json::from_str(&json_str) {
        Ok(entry) => entry,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid visitor log: {e}"));
            return response_to_c_string(&error);
        }
    };

    match state.store.add_visitor_log(entry) {
        Ok(log) => ok_json(&log),
        Err(e) => response_to_c_string(&e),
    }
}

/// Runs the visitor tracker for this session. `referrer` may be null for a
/// direct visit. Always answers `Ok`: the recorded log, or `null` when the
/// visit was already tracked today or tracking failed.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn track_visit(
    state: *mut AppContentState,
    referrer: *const c_char,
    user_agent: *const c_char,
) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to track_visit"),
    };

    let referrer = if referrer.is_null() {
        None
    } else {
        match c_ptr_to_string(referrer, "referrer") {
            Ok(r) => Some(r),
            Err(err) => return err,
        }
    };

    let user_agent = match c_ptr_to_string(user_agent, "user agent") {
        Ok(ua) => ua,
        Err(err) => return err,
    };

    let AppContentState {
        store,
        session,
        tracker,
        ..
    } = state;
    let log = tracker.track(store, session, referrer.as_deref(), &user_agent);
    ok_json(&log)
}

/// Resolves which admin screen a URL fragment leads to:
/// `"Public"`, `"Login"` or `"Dashboard"`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn admin_view(state: *mut AppContentState, fragment: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to admin_view"),
    };

    let fragment = match c_ptr_to_string(fragment, "fragment") {
        Ok(f) => f,
        Err(err) => return err,
    };

    ok_json(&state.gate.view(&fragment, &state.session))
}

#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn admin_login(state: *mut AppContentState, passcode: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to admin_login"),
    };

    let passcode = match c_ptr_to_string(passcode, "passcode") {
        Ok(p) => p,
        Err(err) => return err,
    };

    match state.gate.login(&mut state.session, &passcode) {
        Ok(()) => response_to_c_string(&AppResponse::success("Logged in")),
        Err(e) => response_to_c_string(&e),
    }
}

#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn admin_logout(state: *mut AppContentState) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to admin_logout"),
    };

    state.gate.logout(&mut state.session);
    response_to_c_string(&AppResponse::success("Logged out"))
}

/// Syncs the database and frees the state. The pointer must not be used
/// afterwards; the session flags are gone with it.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_content_store(state: *mut AppContentState) -> *const c_char {
    if state.is_null() {
        return bad_request("Null state pointer passed to close_content_store");
    }

    let state = unsafe { Box::from_raw(state) };
    let response = match state.close() {
        Ok(()) => AppResponse::success("Content store closed"),
        Err(e) => e,
    };
    drop(state);
    response_to_c_string(&response)
}

/// Releases a string returned by any function in this library.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        drop(CString::from_raw(ptr as *mut c_char));
    }
}

fn ok_json<T: Serialize + ?Sized>(value: &T) -> *const c_char {
    match serde_json::to_string(value) {
        Ok(json) => response_to_c_string(&AppResponse::Ok(json)),
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Failed to serialize result: {e}"));
            response_to_c_string(&error)
        }
    }
}

fn bad_request(msg: &str) -> *const c_char {
    response_to_c_string(&AppResponse::BadRequest(msg.to_string()))
}

/// Serializes `response` to a heap C string, or null if that fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Copies a C string into a `String`; on failure returns a ready-made
/// `BadRequest` response pointer naming `field_name`.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
