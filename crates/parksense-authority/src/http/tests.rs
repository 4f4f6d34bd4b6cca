// crates/parksense-authority/src/http/tests.rs
// ============================================================================
// Module: HTTP Authority Config Tests
// Description: Unit tests for authority configuration validation.
// Purpose: Ensure limits and URL policy fail closed.
// Dependencies: parksense-authority
// ============================================================================

//! ## Overview
//! Validates endpoint resolution and the bounds enforced on timeouts, response
//! size, and base URLs.

// ============================================================================
// SECTION: Lint Configuration
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use super::AuthorityBuildError;
use super::HttpAuthorityConfig;
use super::MAX_RESPONSE_BYTES_LIMIT;
use super::MAX_TIMEOUT_MS;
use super::MIN_TIMEOUT_MS;
use super::ReleaseRequest;

/// Asserts that `config` fails validation.
fn assert_invalid(config: &HttpAuthorityConfig) {
    assert!(matches!(config.validate(), Err(AuthorityBuildError::InvalidConfig(_))));
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn default_config_targets_production_endpoint() {
    let endpoint = HttpAuthorityConfig::default().endpoint().unwrap();
    assert_eq!(
        endpoint.as_str(),
        "https://parksense-backend-production-cc04.up.railway.app/api/release-slot"
    );
}

#[test]
fn release_path_replaces_base_path() {
    let config = HttpAuthorityConfig {
        base_url: "https://parking.example/v2/".to_string(),
        ..HttpAuthorityConfig::default()
    };
    assert_eq!(config.endpoint().unwrap().as_str(), "https://parking.example/api/release-slot");
}

#[test]
fn timeout_bounds_are_inclusive() {
    for timeout_ms in [MIN_TIMEOUT_MS, MAX_TIMEOUT_MS] {
        let config = HttpAuthorityConfig {
            timeout_ms,
            ..HttpAuthorityConfig::default()
        };
        assert!(config.validate().is_ok(), "timeout {timeout_ms}");
    }
    for timeout_ms in [0, MIN_TIMEOUT_MS - 1, MAX_TIMEOUT_MS + 1] {
        assert_invalid(&HttpAuthorityConfig {
            timeout_ms,
            ..HttpAuthorityConfig::default()
        });
    }
}

#[test]
fn response_size_bounds() {
    assert_invalid(&HttpAuthorityConfig {
        max_response_bytes: 0,
        ..HttpAuthorityConfig::default()
    });
    assert_invalid(&HttpAuthorityConfig {
        max_response_bytes: MAX_RESPONSE_BYTES_LIMIT + 1,
        ..HttpAuthorityConfig::default()
    });
    let config = HttpAuthorityConfig {
        max_response_bytes: MAX_RESPONSE_BYTES_LIMIT,
        ..HttpAuthorityConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn cleartext_requires_opt_in() {
    let mut config = HttpAuthorityConfig {
        base_url: "http://127.0.0.1:8080".to_string(),
        ..HttpAuthorityConfig::default()
    };
    assert_invalid(&config);
    config.allow_http = true;
    assert!(config.validate().is_ok());
}

#[test]
fn rejects_unusable_base_urls() {
    for base_url in ["", "not a url", "ftp://parking.example", "https://user:pw@parking.example"] {
        assert_invalid(&HttpAuthorityConfig {
            base_url: base_url.to_string(),
            ..HttpAuthorityConfig::default()
        });
    }
}

#[test]
fn rejects_relative_release_path_and_blank_agent() {
    assert_invalid(&HttpAuthorityConfig {
        release_path: "api/release-slot".to_string(),
        ..HttpAuthorityConfig::default()
    });
    assert_invalid(&HttpAuthorityConfig {
        user_agent: "  ".to_string(),
        ..HttpAuthorityConfig::default()
    });
}

#[test]
fn request_body_uses_slot_number_field() {
    let body = serde_json::to_string(&ReleaseRequest {
        slot_number: "B3",
    })
    .unwrap();
    assert_eq!(body, r#"{"slotNumber":"B3"}"#);
}
