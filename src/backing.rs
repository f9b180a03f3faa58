//! Durable key-value backing used by the content store.
//!
//! The store only needs three synchronous string operations, so any origin
//! scoped persistent map can sit behind [`DurableBacking`]. The production
//! backend is [`LocalDbState`](crate::local_db_state::LocalDbState) (LMDB);
//! [`MemoryBacking`] is the in-process variant used by tests and by hosts that
//! do not want anything on disk.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::app_response::AppResponse;

/// Synchronous, string-keyed persistent store.
///
/// Writes are committed before returning. Implementations propagate every
/// backend failure; the content store decides which failures it tolerates.
pub trait DurableBacking {
    /// Returns `Ok(None)` when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, AppResponse>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppResponse>;

    /// Returns `true` if a value existed under `key`.
    fn remove(&self, key: &str) -> Result<bool, AppResponse>;
}

impl<B: DurableBacking + ?Sized> DurableBacking for &B {
    fn get(&self, key: &str) -> Result<Option<String>, AppResponse> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppResponse> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, AppResponse> {
        (**self).remove(key)
    }
}

/// `HashMap`-based backing that lives as long as the value does.
///
/// `fail_writes` flips the backing into a mode where every `set` reports a
/// full quota, which is how a disabled or exhausted browser store behaves.
#[derive(Debug, Default)]
pub struct MemoryBacking {
    entries: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryBacking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing any failure mode.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl DurableBacking for MemoryBacking {
    fn get(&self, key: &str) -> Result<Option<String>, AppResponse> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppResponse> {
        if self.fail_writes.get() {
            return Err(AppResponse::QuotaExceeded(format!(
                "Refusing to write {} bytes under '{key}'",
                value.len()
            )));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, AppResponse> {
        Ok(self.entries.borrow_mut().remove(key).is_some())
    }
}
