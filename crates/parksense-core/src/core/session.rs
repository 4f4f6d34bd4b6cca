// crates/parksense-core/src/core/session.rs
// ============================================================================
// Module: ParkSense Session Keys
// Description: Names of the session facts read by the dashboard.
// Purpose: Keep the storage key names in one place.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Session facts are written by the sign-in and booking flows, which are not
//! part of this crate. The storage names below are the ones those flows use.

use std::fmt;

use serde::Serialize;

/// Session fact read or removed by the core.
///
/// # Invariants
/// - [`SessionKey::as_str`] values are stable storage names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKey {
    /// Identity token issued at sign-in.
    Token,
    /// Phone number of the signed-in user.
    PhoneNumber,
    /// Car registration of the signed-in user.
    CarNumber,
    /// Slot assigned by the booking flow.
    AssignedSlot,
}

impl SessionKey {
    /// Returns the storage name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::PhoneNumber => "userPhoneNumber",
            Self::CarNumber => "carNumber",
            Self::AssignedSlot => "assignedSlot",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
