// crates/parksense-core/src/runtime/hydrate.rs
// ============================================================================
// Module: ParkSense Hydration
// Description: One-time projection of session facts into allocation state.
// Purpose: Decide between sign-in redirect and a ready allocation.
// Dependencies: crate::{core, interfaces}, tracing
// ============================================================================

//! ## Overview
//! Hydration runs once per dashboard load. It reads session facts and either
//! signals that authentication is required or produces the user's
//! [`Allocation`]. Missing optional facts are never an error.
//! Invariants:
//! - A missing or empty token or phone number yields [`Hydration::RequiresAuth`].
//! - Unreadable facts are treated as absent, so read failures fail closed.
//! - Hydration only reads; it never writes or removes session facts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;
use tracing::warn;

use crate::core::Allocation;
use crate::core::SessionKey;
use crate::core::SlotId;
use crate::interfaces::SessionStore;

// ============================================================================
// SECTION: Hydration Result
// ============================================================================

/// Result of hydrating session facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// Identity is missing; the host must redirect to sign-in.
    RequiresAuth,
    /// Identity is present.
    Ready(Allocation),
}

impl Hydration {
    /// Returns true when the host must redirect to sign-in.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        matches!(self, Self::RequiresAuth)
    }

    /// Returns the hydrated allocation, if any.
    #[must_use]
    pub const fn allocation(&self) -> Option<&Allocation> {
        match self {
            Self::RequiresAuth => None,
            Self::Ready(allocation) => Some(allocation),
        }
    }

    /// Consumes the hydration and returns the allocation, if any.
    #[must_use]
    pub fn into_allocation(self) -> Option<Allocation> {
        match self {
            Self::RequiresAuth => None,
            Self::Ready(allocation) => Some(allocation),
        }
    }
}

// ============================================================================
// SECTION: Hydration
// ============================================================================

/// Projects session facts into the dashboard's allocation state.
pub fn hydrate<S>(store: &S) -> Hydration
where
    S: SessionStore + ?Sized,
{
    let token = read_fact(store, SessionKey::Token);
    let phone_number = read_fact(store, SessionKey::PhoneNumber);
    let (Some(_), Some(phone_number)) = (token, phone_number) else {
        debug!("session identity missing; sign-in required");
        return Hydration::RequiresAuth;
    };

    let car_number = read_fact(store, SessionKey::CarNumber).unwrap_or_default();
    let slot_id = read_fact(store, SessionKey::AssignedSlot).and_then(|value| {
        SlotId::parse(&value)
            .map_err(|err| warn!(error = %err, "ignoring assigned slot outside the lot layout"))
            .ok()
    });
    debug!(
        slot = slot_id.as_ref().map_or("none", SlotId::as_str),
        "session hydrated"
    );
    Hydration::Ready(Allocation::new(slot_id, car_number, phone_number))
}

/// Reads a non-empty session fact, treating read failures as absence.
fn read_fact<S>(store: &S, key: SessionKey) -> Option<String>
where
    S: SessionStore + ?Sized,
{
    match store.get(key) {
        Ok(value) => value.filter(|value| !value.is_empty()),
        Err(err) => {
            warn!(key = %key, error = %err, "session fact unreadable; treating as absent");
            None
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
