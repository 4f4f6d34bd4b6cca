// crates/parksense-core/src/runtime/store.rs
// ============================================================================
// Module: ParkSense In-Memory Session Store
// Description: Simple in-memory session store for tests and embedding hosts.
// Purpose: Provide a deterministic session adapter without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! This module provides an in-memory implementation of [`SessionStore`].
//! Clones share the same facts, so a host (or a test) can keep a handle and
//! observe the removal of the assigned slot after a release.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::SessionKey;
use crate::interfaces::SessionError;
use crate::interfaces::SessionStore;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory session store.
#[derive(Debug, Default, Clone)]
pub struct InMemorySessionStore {
    /// Session facts protected by a mutex.
    facts: Arc<Mutex<BTreeMap<SessionKey, String>>>,
}

impl InMemorySessionStore {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            facts: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    /// Returns the store with `key` set to `value`.
    #[must_use]
    pub fn with_fact(self, key: SessionKey, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.facts.lock() {
            guard.insert(key, value.into());
        }
        self
    }

    /// Writes a session fact, as the sign-in and booking flows do.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the store mutex is poisoned.
    pub fn insert(&self, key: SessionKey, value: impl Into<String>) -> Result<(), SessionError> {
        self.facts
            .lock()
            .map_err(|_| SessionError::Store("session store mutex poisoned".to_string()))?
            .insert(key, value.into());
        Ok(())
    }

    /// Returns true when `key` holds a value.
    #[must_use]
    pub fn contains(&self, key: SessionKey) -> bool {
        self.facts.lock().is_ok_and(|guard| guard.contains_key(&key))
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        let guard = self
            .facts
            .lock()
            .map_err(|_| SessionError::Store("session store mutex poisoned".to_string()))?;
        Ok(guard.get(&key).cloned())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        self.facts
            .lock()
            .map_err(|_| SessionError::Store("session store mutex poisoned".to_string()))?
            .remove(&key);
        Ok(())
    }
}
