// crates/parksense-core/src/runtime/release.rs
// ============================================================================
// Module: ParkSense Release Coordinator
// Description: Finite-state machine for the confirmed slot release.
// Purpose: Guarantee at most one outstanding release request per allocation.
// Dependencies: crate::{core, interfaces}, serde, thiserror, tracing
// ============================================================================

//! ## Overview
//! Releasing a slot goes through a confirmation gate before the remote
//! authority is called:
//!
//! ```text
//! Idle --request_release--> ConfirmPending --begin_confirm--> InFlight
//!  ^                              |                              |
//!  +------------cancel------------+                              |
//!  +-----------------------------finish--------------------------+
//! ```
//!
//! The coordinator performs no I/O. Callers move it to `InFlight`, issue the
//! single authority call, apply the effects of the outcome, and only then
//! close the gate with [`ReleaseCoordinator::finish`]. Illegal calls return a
//! [`TransitionError`] and leave the state unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::Allocation;
use crate::core::SlotId;
use crate::interfaces::AuthorityError;
use crate::interfaces::ReleaseAck;

// ============================================================================
// SECTION: State
// ============================================================================

/// State of the release workflow.
///
/// # Invariants
/// - A pending slot exists exactly in `ConfirmPending` and `InFlight`.
/// - At most one authority call is outstanding, and only in `InFlight`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReleaseState {
    /// No pending slot and no request in flight.
    #[default]
    Idle,
    /// Confirmation gate is open for `slot`.
    ConfirmPending {
        /// Slot targeted for release.
        slot: SlotId,
    },
    /// Release request for `slot` is outstanding.
    InFlight {
        /// Slot being released.
        slot: SlotId,
    },
}

impl ReleaseState {
    /// Returns the slot behind the confirmation gate, if it is open.
    #[must_use]
    pub const fn pending_slot(&self) -> Option<&SlotId> {
        match self {
            Self::Idle => None,
            Self::ConfirmPending {
                slot,
            }
            | Self::InFlight {
                slot,
            } => Some(slot),
        }
    }

    /// Returns the stable name of the state.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ConfirmPending {
                ..
            } => "confirm_pending",
            Self::InFlight {
                ..
            } => "in_flight",
        }
    }
}

/// Transition requested of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseAction {
    /// Open the confirmation gate.
    RequestRelease,
    /// Close the gate without calling the authority.
    Cancel,
    /// Start the authority call.
    Confirm,
    /// Close the gate after the authority call resolved.
    Finish,
}

impl ReleaseAction {
    /// Returns the stable name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequestRelease => "request_release",
            Self::Cancel => "cancel",
            Self::Confirm => "confirm",
            Self::Finish => "finish",
        }
    }
}

impl fmt::Display for ReleaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Rejected state-machine calls.
///
/// # Invariants
/// - A rejected call never changes the coordinator state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Release was requested without an allocated slot.
    #[error("no active allocation to release")]
    NoActiveAllocation,
    /// Action is not valid in the current state.
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        /// State name at the time of the call.
        from: &'static str,
        /// Rejected action.
        action: ReleaseAction,
    },
}

/// Why a confirmed release did not happen.
///
/// # Invariants
/// - Every variant leaves the allocation active, so the user may request the
///   release again.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ReleaseError {
    /// The authority answered `success: false`.
    #[error("release rejected by the parking service")]
    Rejected,
    /// The request failed in transit or returned a non-2xx status.
    #[error("release request failed: {0}")]
    Transport(String),
    /// The request did not complete in time.
    #[error("release request timed out after {timeout_ms} ms")]
    TimedOut {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },
    /// The authority's reply could not be understood.
    #[error("release response was malformed: {0}")]
    Malformed(String),
}

impl From<AuthorityError> for ReleaseError {
    fn from(err: AuthorityError) -> Self {
        match err {
            AuthorityError::Transport(reason) => Self::Transport(reason),
            AuthorityError::TimedOut {
                timeout_ms,
            } => Self::TimedOut {
                timeout_ms,
            },
            AuthorityError::Malformed(reason) => Self::Malformed(reason),
        }
    }
}

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Result of a confirmed release attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReleaseOutcome {
    /// The authority released the slot.
    Released {
        /// Released slot.
        slot: SlotId,
    },
    /// The release did not happen; the allocation is still active.
    Failed {
        /// Slot that remains allocated.
        slot: SlotId,
        /// Failure cause.
        error: ReleaseError,
    },
}

impl ReleaseOutcome {
    /// Classifies the authority's answer for `slot`.
    #[must_use]
    pub fn from_response(slot: SlotId, response: Result<ReleaseAck, AuthorityError>) -> Self {
        match response {
            Ok(ReleaseAck {
                success: true,
            }) => Self::Released {
                slot,
            },
            Ok(ReleaseAck {
                success: false,
            }) => Self::Failed {
                slot,
                error: ReleaseError::Rejected,
            },
            Err(err) => Self::Failed {
                slot,
                error: err.into(),
            },
        }
    }

    /// Returns the slot the outcome refers to.
    #[must_use]
    pub const fn slot(&self) -> &SlotId {
        match self {
            Self::Released {
                slot,
            }
            | Self::Failed {
                slot,
                ..
            } => slot,
        }
    }

    /// Returns true when the slot was released.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        matches!(self, Self::Released { .. })
    }
}

// ============================================================================
// SECTION: Coordinator
// ============================================================================

/// Release workflow state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseCoordinator {
    /// Current workflow state.
    state: ReleaseState,
}

impl ReleaseCoordinator {
    /// Creates an idle coordinator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ReleaseState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &ReleaseState {
        &self.state
    }

    /// Returns the slot behind the confirmation gate, if it is open.
    #[must_use]
    pub const fn pending_slot(&self) -> Option<&SlotId> {
        self.state.pending_slot()
    }

    /// Opens the confirmation gate for the allocated slot.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NoActiveAllocation`] when no slot is
    /// allocated, or [`TransitionError::InvalidTransition`] when not idle.
    pub fn request_release(&mut self, allocation: &Allocation) -> Result<SlotId, TransitionError> {
        self.expect_idle(ReleaseAction::RequestRelease)?;
        let slot = allocation.slot_id().cloned().ok_or(TransitionError::NoActiveAllocation)?;
        debug!(slot = %slot, "release confirmation requested");
        self.state = ReleaseState::ConfirmPending {
            slot: slot.clone(),
        };
        Ok(slot)
    }

    /// Closes the confirmation gate without contacting the authority.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidTransition`] unless confirmation is pending.
    pub fn cancel(&mut self) -> Result<SlotId, TransitionError> {
        match std::mem::take(&mut self.state) {
            ReleaseState::ConfirmPending {
                slot,
            } => {
                debug!(slot = %slot, "release cancelled");
                Ok(slot)
            }
            other => Err(self.reject(other, ReleaseAction::Cancel)),
        }
    }

    /// Moves to `InFlight` and returns the slot the caller must release.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidTransition`] unless confirmation is
    /// pending; in particular a second confirm while in flight is rejected.
    pub fn begin_confirm(&mut self) -> Result<SlotId, TransitionError> {
        match std::mem::take(&mut self.state) {
            ReleaseState::ConfirmPending {
                slot,
            } => {
                self.state = ReleaseState::InFlight {
                    slot: slot.clone(),
                };
                Ok(slot)
            }
            other => Err(self.reject(other, ReleaseAction::Confirm)),
        }
    }

    /// Closes the gate after the authority call resolved, whatever its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidTransition`] unless a request is in flight.
    pub fn finish(&mut self) -> Result<SlotId, TransitionError> {
        match std::mem::take(&mut self.state) {
            ReleaseState::InFlight {
                slot,
            } => Ok(slot),
            other => Err(self.reject(other, ReleaseAction::Finish)),
        }
    }

    /// Returns the in-flight slot, or rejects `action` when none is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidTransition`] unless a request is in flight.
    pub fn in_flight_slot(&self, action: ReleaseAction) -> Result<&SlotId, TransitionError> {
        match &self.state {
            ReleaseState::InFlight {
                slot,
            } => Ok(slot),
            other => Err(TransitionError::InvalidTransition {
                from: other.name(),
                action,
            }),
        }
    }

    /// Rejects `action` unless the coordinator is idle.
    fn expect_idle(&self, action: ReleaseAction) -> Result<(), TransitionError> {
        if self.state == ReleaseState::Idle {
            return Ok(());
        }
        Err(TransitionError::InvalidTransition {
            from: self.state.name(),
            action,
        })
    }

    /// Restores `previous` and builds the rejection for `action`.
    fn reject(&mut self, previous: ReleaseState, action: ReleaseAction) -> TransitionError {
        let from = previous.name();
        self.state = previous;
        debug!(from, action = %action, "release transition rejected");
        TransitionError::InvalidTransition {
            from,
            action,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
