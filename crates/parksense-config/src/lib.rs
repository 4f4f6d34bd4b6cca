// crates/parksense-config/src/lib.rs
// ============================================================================
// Module: ParkSense Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for parksense.toml semantics.
// Dependencies: parksense-authority, serde, toml
// ============================================================================

//! ## Overview
//! `parksense-config` defines the configuration model for ParkSense hosts. It
//! loads `parksense.toml` with strict, fail-closed validation and builds the
//! HTTP release authority from it.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
