// crates/parksense-core/src/interfaces/mod.rs
// ============================================================================
// Module: ParkSense Interfaces
// Description: Backend-agnostic seams for session storage, release, and navigation.
// Purpose: Define the contract surfaces used by the ParkSense runtime.
// Dependencies: crate::core, serde, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the dashboard integrates with its host without
//! embedding browser or network details. The runtime receives every
//! collaborator explicitly, so tests supply fakes instead of touching ambient
//! global state.
//!
//! Implementations must fail closed: a missing or unreadable session fact is
//! treated as absent, and anything other than an explicit success from the
//! remote authority is a failed release.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::SessionKey;
use crate::core::SlotId;

// ============================================================================
// SECTION: Session Store
// ============================================================================

/// Session store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Session store reported an error.
    #[error("session store error: {0}")]
    Store(String),
}

/// Tab-scoped key-value store holding identity and allocation facts.
///
/// The core only reads facts and removes [`SessionKey::AssignedSlot`]; it never
/// writes the token, phone, or car entries.
pub trait SessionStore {
    /// Reads a session fact.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the store cannot be read.
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError>;

    /// Removes a session fact. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the store cannot be written.
    fn remove(&self, key: SessionKey) -> Result<(), SessionError>;
}

// ============================================================================
// SECTION: Release Authority
// ============================================================================

/// Response of the remote authority to a release request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAck {
    /// True when the authority released the slot.
    pub success: bool,
}

/// Release authority errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Every variant means the release did not happen as far as the caller knows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorityError {
    /// The request could not be delivered or the response was not 2xx.
    #[error("release transport error: {0}")]
    Transport(String),
    /// The request did not complete within the configured timeout.
    #[error("release request timed out after {timeout_ms} ms")]
    TimedOut {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },
    /// The response body could not be parsed.
    #[error("malformed release response: {0}")]
    Malformed(String),
}

/// Remote service that is the source of truth for slot releases.
pub trait ReleaseAuthority {
    /// Asks the authority to release `slot_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityError`] when the call fails or the reply is unusable.
    fn release_slot(&self, slot_id: &SlotId) -> Result<ReleaseAck, AuthorityError>;
}

// ============================================================================
// SECTION: Navigator
// ============================================================================

/// Navigation capability provided by the host.
pub trait Navigator {
    /// Sends the user to the sign-in page.
    fn redirect_to_login(&self);
}
