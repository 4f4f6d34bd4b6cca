// crates/parksense-core/src/lib.rs
// ============================================================================
// Module: ParkSense Core Library
// Description: Public API surface for the ParkSense customer dashboard.
// Purpose: Expose the slot model, interface seams, and release workflow.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! ParkSense core models a 24-slot parking lot and the customer dashboard that
//! shows it. It hydrates the signed-in user's allocation from session facts,
//! renders the lot, and releases the allocated slot through a confirmation
//! gate and a single call to the remote slot authority. All I/O goes through
//! the traits in [`interfaces`].
//! Invariants:
//! - At most one slot in the grid is booked, and it is the user's slot.
//! - Local state changes only after the authority confirms a release.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::AuthorityError;
pub use interfaces::Navigator;
pub use interfaces::ReleaseAck;
pub use interfaces::ReleaseAuthority;
pub use interfaces::SessionError;
pub use interfaces::SessionStore;
pub use runtime::ConfirmPrompt;
pub use runtime::Dashboard;
pub use runtime::DashboardLoad;
pub use runtime::DashboardView;
pub use runtime::Hydration;
pub use runtime::InMemorySessionStore;
pub use runtime::ReleaseAction;
pub use runtime::ReleaseCoordinator;
pub use runtime::ReleaseError;
pub use runtime::ReleaseNotice;
pub use runtime::ReleaseOutcome;
pub use runtime::ReleaseState;
pub use runtime::SlotView;
pub use runtime::TransitionError;
pub use runtime::UserInfo;
pub use runtime::hydrate;
