// crates/parksense-core/src/core/mod.rs
// ============================================================================
// Module: ParkSense Core Types
// Description: Slot identifiers, grid model, allocation, and session keys.
// Purpose: Provide stable, serializable types for the dashboard workflow.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types are pure data plus pure updates. Anything that talks to the
//! session store or the remote authority lives in [`crate::runtime`].

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod allocation;
pub mod grid;
pub mod identifiers;
pub mod session;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use allocation::Allocation;
pub use grid::Slot;
pub use grid::SlotGrid;
pub use grid::SlotStatus;
pub use identifiers::SLOT_COUNT;
pub use identifiers::SLOT_ROWS;
pub use identifiers::SLOTS_PER_ROW;
pub use identifiers::SlotId;
pub use identifiers::SlotIdError;
pub use session::SessionKey;
