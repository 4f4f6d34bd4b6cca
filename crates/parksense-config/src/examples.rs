// crates/parksense-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for ParkSense configuration. The values match the
//! built-in defaults.

/// Returns a canonical example `parksense.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[authority]
base_url = "https://parksense-backend-production-cc04.up.railway.app"
release_path = "/api/release-slot"
timeout_ms = 10000
max_response_bytes = 65536
allow_http = false
user_agent = "parksense/0.1"
"#,
    )
}
