// crates/parksense-core/src/core/allocation.rs
// ============================================================================
// Module: ParkSense Allocation State
// Description: The signed-in user's current slot booking and display facts.
// Purpose: Hold the projection of session facts taken at hydration time.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! An [`Allocation`] is built once per load from session facts. The core never
//! creates a booking; the only mutation is clearing the slot after the remote
//! authority confirms a release.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::identifiers::SlotId;

// ============================================================================
// SECTION: Allocation
// ============================================================================

/// Current booking of the signed-in user.
///
/// # Invariants
/// - `slot_id`, when present, names a slot of the lot layout.
/// - `car_number` and `phone_number` are display strings and are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation {
    /// Allocated slot, if any.
    slot_id: Option<SlotId>,
    /// Car registration shown next to the allocated slot.
    car_number: String,
    /// Phone number of the signed-in user.
    phone_number: String,
}

impl Allocation {
    /// Creates an allocation from hydrated session facts.
    #[must_use]
    pub fn new(
        slot_id: Option<SlotId>,
        car_number: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            slot_id,
            car_number: car_number.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Returns the allocated slot, if any.
    #[must_use]
    pub const fn slot_id(&self) -> Option<&SlotId> {
        self.slot_id.as_ref()
    }

    /// Returns true when a slot is allocated.
    #[must_use]
    pub const fn has_slot(&self) -> bool {
        self.slot_id.is_some()
    }

    /// Returns the car number.
    #[must_use]
    pub fn car_number(&self) -> &str {
        &self.car_number
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Drops the slot after a confirmed release.
    pub(crate) const fn clear_slot(&mut self) -> Option<SlotId> {
        self.slot_id.take()
    }
}
