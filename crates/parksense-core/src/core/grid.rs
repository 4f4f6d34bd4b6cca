// crates/parksense-core/src/core/grid.rs
// ============================================================================
// Module: ParkSense Slot Grid
// Description: Fixed parking slot universe and pure status updates.
// Purpose: Rebuild the lot deterministically and patch it from allocations.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! The slot grid is never persisted. Every load regenerates the same 24 slots
//! in row-major order and then patches the user's allocation onto them.
//! Updates return a new grid and leave the receiver untouched.
//! Invariants:
//! - [`SlotGrid::generate`] yields `A1..A6, B1..B6, C1..C6, D1..D6`, all available.
//! - Applying or releasing an id that is not in the grid returns an equal grid.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::SLOT_COUNT;
use crate::core::identifiers::SLOT_ROWS;
use crate::core::identifiers::SLOTS_PER_ROW;
use crate::core::identifiers::SlotId;

// ============================================================================
// SECTION: Slot Types
// ============================================================================

/// Occupancy status of a slot.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// Slot is free.
    Available,
    /// Slot is held by an allocation.
    Booked,
}

/// One parking slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot identifier.
    pub id: SlotId,
    /// Current status.
    pub status: SlotStatus,
}

impl Slot {
    /// Creates an available slot.
    #[must_use]
    pub const fn available(id: SlotId) -> Self {
        Self {
            id,
            status: SlotStatus::Available,
        }
    }

    /// Returns true when the slot is booked.
    #[must_use]
    pub fn is_booked(&self) -> bool {
        self.status == SlotStatus::Booked
    }
}

// ============================================================================
// SECTION: Slot Grid
// ============================================================================

/// Ordered sequence of parking slots.
///
/// # Invariants
/// - Slot ids are unique and kept in layout order (`A1` before `A2` before `B1`).
/// - Constructors yield all-available grids; only allocation updates book slots.
/// - Order is preserved by every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SlotGrid {
    /// Slots in display order.
    slots: Vec<Slot>,
}

impl SlotGrid {
    /// Generates the full lot with every slot available.
    #[must_use]
    pub fn generate() -> Self {
        let mut slots = Vec::with_capacity(SLOT_COUNT);
        for row in SLOT_ROWS {
            for number in 1 ..= SLOTS_PER_ROW {
                if let Ok(id) = SlotId::from_parts(row, number) {
                    slots.push(Slot::available(id));
                }
            }
        }
        Self {
            slots,
        }
    }

    /// Builds an all-available grid from an explicit slot list.
    ///
    /// Slots are put in layout order, duplicate ids keep their first
    /// occurrence, and every status is reset to available so allocations are
    /// only ever applied through [`SlotGrid::apply_allocation`].
    #[must_use]
    pub fn from_slots(slots: impl IntoIterator<Item = Slot>) -> Self {
        let mut slots: Vec<Slot> =
            slots.into_iter().map(|slot| Slot::available(slot.id)).collect();
        slots.sort_by(|left, right| left.id.cmp(&right.id));
        slots.dedup_by(|next, kept| next.id == kept.id);
        Self {
            slots,
        }
    }

    /// Returns a grid with the allocated slot marked booked.
    ///
    /// `None` and ids missing from the grid leave it unchanged.
    #[must_use]
    pub fn apply_allocation(&self, slot_id: Option<&SlotId>) -> Self {
        match slot_id {
            Some(slot_id) => self.with_status(slot_id, SlotStatus::Booked),
            None => self.clone(),
        }
    }

    /// Returns a grid with the slot marked available again.
    #[must_use]
    pub fn release(&self, slot_id: &SlotId) -> Self {
        self.with_status(slot_id, SlotStatus::Available)
    }

    /// Returns the slots in display order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the slots grouped by row letter, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &[Slot]> {
        self.slots.chunk_by(|left, right| left.id.row() == right.id.row())
    }

    /// Looks up a slot by id.
    #[must_use]
    pub fn get(&self, slot_id: &SlotId) -> Option<&Slot> {
        self.slots.iter().find(|slot| &slot.id == slot_id)
    }

    /// Returns the first booked slot, if any.
    #[must_use]
    pub fn booked(&self) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.is_booked())
    }

    /// Returns the number of available slots.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_booked()).count()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true when the grid has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Copies the grid with one slot set to `status`.
    fn with_status(&self, slot_id: &SlotId, status: SlotStatus) -> Self {
        let slots = self
            .slots
            .iter()
            .map(|slot| {
                if &slot.id == slot_id {
                    Slot {
                        id: slot.id.clone(),
                        status,
                    }
                } else {
                    slot.clone()
                }
            })
            .collect();
        Self {
            slots,
        }
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::generate()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
