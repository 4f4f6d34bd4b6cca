// crates/parksense-core/src/runtime/view.rs
// ============================================================================
// Module: ParkSense Dashboard View
// Description: Serializable projection of dashboard state for presenters.
// Purpose: Keep presentation decisions out of host UI code.
// Dependencies: crate::{core, runtime::release}, serde
// ============================================================================

//! ## Overview
//! A [`DashboardView`] is a snapshot. Presenters render it and send user
//! actions back to [`crate::runtime::Dashboard`]; they never mutate state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::Allocation;
use crate::core::SlotGrid;
use crate::core::SlotId;
use crate::core::SlotStatus;
use crate::runtime::release::ReleaseError;
use crate::runtime::release::ReleaseState;

// ============================================================================
// SECTION: Release Feedback
// ============================================================================

/// User-facing notice for the last failed release.
///
/// # Invariants
/// - The notice refers to a slot that is still allocated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseNotice {
    /// Slot whose release failed.
    pub slot: SlotId,
    /// Failure cause.
    pub error: ReleaseError,
    /// Message suitable for display.
    pub message: String,
}

impl ReleaseNotice {
    /// Builds the notice for a failed release of `slot`.
    #[must_use]
    pub fn new(slot: SlotId, error: ReleaseError) -> Self {
        let message = match &error {
            ReleaseError::Rejected => {
                format!("Slot {slot} could not be released. Please try again.")
            }
            ReleaseError::TimedOut {
                ..
            } => format!("Releasing slot {slot} took too long. Please try again."),
            ReleaseError::Transport(_) | ReleaseError::Malformed(_) => {
                format!("Could not reach the parking service to release slot {slot}.")
            }
        };
        Self {
            slot,
            error,
            message,
        }
    }
}

// ============================================================================
// SECTION: View Types
// ============================================================================

/// Signed-in user's details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    /// Car registration.
    pub car_number: String,
    /// Phone number.
    pub phone_number: String,
    /// Allocated slot, if any.
    pub allocated_slot: Option<SlotId>,
}

/// One slot on the lot map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// Slot identifier.
    pub id: SlotId,
    /// Slot status.
    pub status: SlotStatus,
    /// True for the signed-in user's slot.
    pub is_user_slot: bool,
    /// Car registration, shown on the user's slot only.
    pub car_number: Option<String>,
}

/// Contents of the open confirmation gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmPrompt {
    /// Slot being released.
    pub slot: SlotId,
    /// Car registration.
    pub car_number: String,
    /// Phone number.
    pub phone_number: String,
    /// True while the release request is outstanding.
    pub in_flight: bool,
}

/// Snapshot of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// User details.
    pub user: UserInfo,
    /// Lot map in display order.
    pub slots: Vec<SlotView>,
    /// Release workflow state.
    pub release: ReleaseState,
    /// Confirmation gate contents while it is open.
    pub prompt: Option<ConfirmPrompt>,
    /// Last release failure, until the next attempt.
    pub notice: Option<ReleaseNotice>,
}

impl DashboardView {
    /// Projects dashboard state into a view.
    #[must_use]
    pub fn project(
        grid: &SlotGrid,
        allocation: &Allocation,
        release: &ReleaseState,
        notice: Option<&ReleaseNotice>,
    ) -> Self {
        let user_slot = allocation.slot_id();
        let slots = grid
            .slots()
            .iter()
            .map(|slot| {
                let is_user_slot = user_slot == Some(&slot.id);
                let car_number = (is_user_slot && !allocation.car_number().is_empty())
                    .then(|| allocation.car_number().to_string());
                SlotView {
                    id: slot.id.clone(),
                    status: slot.status,
                    is_user_slot,
                    car_number,
                }
            })
            .collect();
        let prompt = release.pending_slot().map(|slot| ConfirmPrompt {
            slot: slot.clone(),
            car_number: allocation.car_number().to_string(),
            phone_number: allocation.phone_number().to_string(),
            in_flight: matches!(release, ReleaseState::InFlight { .. }),
        });
        Self {
            user: UserInfo {
                car_number: allocation.car_number().to_string(),
                phone_number: allocation.phone_number().to_string(),
                allocated_slot: user_slot.cloned(),
            },
            slots,
            release: release.clone(),
            prompt,
            notice: notice.cloned(),
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
