// crates/parksense-core/src/runtime/mod.rs
// ============================================================================
// Module: ParkSense Runtime
// Description: Hydration, release workflow, dashboard, and view projection.
// Purpose: Execute the dashboard's lifecycle over the interface seams.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime hydrates session facts, drives the release state machine, and
//! keeps the slot grid consistent with the remote authority's answers.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod dashboard;
pub mod hydrate;
pub mod release;
pub mod store;
pub mod view;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use dashboard::Dashboard;
pub use dashboard::DashboardLoad;
pub use hydrate::Hydration;
pub use hydrate::hydrate;
pub use release::ReleaseAction;
pub use release::ReleaseCoordinator;
pub use release::ReleaseError;
pub use release::ReleaseOutcome;
pub use release::ReleaseState;
pub use release::TransitionError;
pub use store::InMemorySessionStore;
pub use view::ConfirmPrompt;
pub use view::DashboardView;
pub use view::ReleaseNotice;
pub use view::SlotView;
pub use view::UserInfo;
