// crates/parksense-core/tests/proptest_grid.rs
// ============================================================================
// Module: Slot Grid Property-Based Tests
// Description: Property tests for allocation and release on the slot grid.
// Purpose: Check the round-trip and identity laws over every grid and slot.
// ============================================================================

//! Property-based tests for slot grid invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use parksense_core::SLOT_ROWS;
use parksense_core::SLOTS_PER_ROW;
use parksense_core::Slot;
use parksense_core::SlotGrid;
use parksense_core::SlotId;
use parksense_core::SlotStatus;
use proptest::prelude::*;

fn slot_id_strategy() -> impl Strategy<Value = SlotId> {
    (0 .. SLOT_ROWS.len(), 1 ..= SLOTS_PER_ROW)
        .prop_map(|(row, number)| SlotId::from_parts(SLOT_ROWS[row], number).unwrap())
}

/// Grids drawn as arbitrary subsets of the lot, all available.
fn grid_strategy() -> impl Strategy<Value = SlotGrid> {
    prop::collection::vec(slot_id_strategy(), 0 .. 24)
        .prop_map(|ids| SlotGrid::from_slots(ids.into_iter().map(Slot::available)))
}

proptest! {
    #[test]
    fn apply_then_release_restores_grid(grid in grid_strategy(), id in slot_id_strategy()) {
        let round_trip = grid.apply_allocation(Some(&id)).release(&id);
        prop_assert_eq!(round_trip, grid);
    }

    #[test]
    fn unmatched_id_is_identity(grid in grid_strategy(), id in slot_id_strategy()) {
        prop_assume!(grid.get(&id).is_none());
        prop_assert_eq!(&grid.apply_allocation(Some(&id)), &grid);
        prop_assert_eq!(&grid.release(&id), &grid);
    }

    #[test]
    fn allocation_books_at_most_one_slot(id in slot_id_strategy()) {
        let grid = SlotGrid::generate().apply_allocation(Some(&id));
        let booked: Vec<&Slot> = grid.slots().iter().filter(|slot| slot.is_booked()).collect();
        prop_assert_eq!(booked.len(), 1);
        prop_assert_eq!(&booked[0].id, &id);
    }

    #[test]
    fn rows_hold_one_letter_each(grid in grid_strategy()) {
        let mut seen = Vec::new();
        for row in grid.rows() {
            let letter = row[0].id.row();
            prop_assert!(row.iter().all(|slot| slot.id.row() == letter));
            prop_assert!(!seen.contains(&letter));
            seen.push(letter);
        }
        prop_assert_eq!(grid.rows().map(<[Slot]>::len).sum::<usize>(), grid.len());
    }

    #[test]
    fn subset_grids_have_no_booked_slot(ids in prop::collection::vec(slot_id_strategy(), 0 .. 24)) {
        let grid = SlotGrid::from_slots(ids.into_iter().map(|id| Slot {
            id,
            status: SlotStatus::Booked,
        }));
        prop_assert!(grid.booked().is_none());
    }

    #[test]
    fn slot_id_text_round_trips(id in slot_id_strategy()) {
        let parsed = SlotId::parse(id.as_str()).unwrap();
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn parse_never_panics(input in ".{0,6}") {
        let _ = SlotId::parse(&input);
    }
}
