// crates/parksense-core/src/core/identifiers.rs
// ============================================================================
// Module: ParkSense Identifiers
// Description: Validated slot identifiers for the fixed parking lot layout.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Slot identifiers are the row letter followed by the slot number, for
//! example `B3`. Unlike free-form session strings, a [`SlotId`] can only be
//! constructed for a slot that exists in the lot layout, so every id that
//! reaches the grid or the release workflow is known to be valid.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Layout Constants
// ============================================================================

/// Row letters of the parking lot, in display order.
pub const SLOT_ROWS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Number of slots in every row, numbered from 1.
pub const SLOTS_PER_ROW: u8 = 6;

/// Total number of slots in the lot.
pub const SLOT_COUNT: usize = SLOT_ROWS.len() * SLOTS_PER_ROW as usize;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when a string is not a slot of the lot layout.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotIdError {
    /// Identifier is not a row letter followed by a single digit.
    #[error("slot id must be a row letter followed by a slot number: '{0}'")]
    Malformed(String),
    /// Row letter is not part of the layout.
    #[error("unknown slot row: {0}")]
    UnknownRow(char),
    /// Slot number is outside the row.
    #[error("slot number out of range: {0}")]
    NumberOutOfRange(u8),
}

// ============================================================================
// SECTION: Slot Identifier
// ============================================================================

/// Identifier of one parking slot (`A1` through `D6`).
///
/// # Invariants
/// - The row is one of [`SLOT_ROWS`] and the number is in `1..=SLOTS_PER_ROW`.
/// - The string form is exactly two characters, e.g. `C4`.
/// - Ordering is row-major layout order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotId(String);

impl SlotId {
    /// Parses a slot identifier, rejecting anything outside the lot layout.
    ///
    /// # Errors
    ///
    /// Returns [`SlotIdError`] when the value is not a known slot.
    pub fn parse(value: &str) -> Result<Self, SlotIdError> {
        let mut chars = value.chars();
        let (Some(row), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SlotIdError::Malformed(value.to_string()));
        };
        let number = digit
            .to_digit(10)
            .and_then(|number| u8::try_from(number).ok())
            .ok_or_else(|| SlotIdError::Malformed(value.to_string()))?;
        Self::from_parts(row, number)
    }

    /// Builds the identifier for a row letter and slot number.
    ///
    /// # Errors
    ///
    /// Returns [`SlotIdError`] when the row or number is outside the layout.
    pub fn from_parts(row: char, number: u8) -> Result<Self, SlotIdError> {
        if !SLOT_ROWS.contains(&row) {
            return Err(SlotIdError::UnknownRow(row));
        }
        if !(1 ..= SLOTS_PER_ROW).contains(&number) {
            return Err(SlotIdError::NumberOutOfRange(number));
        }
        Ok(Self(format!("{row}{number}")))
    }

    /// Returns the row letter.
    #[must_use]
    pub fn row(&self) -> char {
        self.0.chars().next().unwrap_or_default()
    }

    /// Returns the slot number within the row.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.0.as_bytes().get(1).map_or(0, |digit| digit.saturating_sub(b'0'))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SlotId {
    type Err = SlotIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for SlotId {
    type Error = SlotIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for SlotId {
    type Error = SlotIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SlotId> for String {
    fn from(value: SlotId) -> Self {
        value.0
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
