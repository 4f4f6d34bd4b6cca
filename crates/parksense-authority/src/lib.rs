// crates/parksense-authority/src/lib.rs
// ============================================================================
// Module: ParkSense Authority
// Description: HTTP implementation of the remote slot authority.
// Purpose: Release slots against the ParkSense backend with strict limits.
// Dependencies: parksense-core, reqwest, serde
// ============================================================================

//! ## Overview
//! This crate ships [`HttpReleaseAuthority`], the blocking HTTP client behind
//! [`parksense_core::ReleaseAuthority`]. It issues one bounded POST per release
//! and never retries.
//! Invariants:
//! - Redirects are not followed.
//! - Responses exceeding the configured size limit fail closed.
//! - Cleartext `http://` endpoints require an explicit opt-in.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod http;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use http::AuthorityBuildError;
pub use http::DEFAULT_BASE_URL;
pub use http::DEFAULT_MAX_RESPONSE_BYTES;
pub use http::DEFAULT_RELEASE_PATH;
pub use http::DEFAULT_TIMEOUT_MS;
pub use http::DEFAULT_USER_AGENT;
pub use http::HttpAuthorityConfig;
pub use http::HttpReleaseAuthority;
pub use http::MAX_RESPONSE_BYTES_LIMIT;
pub use http::MAX_TIMEOUT_MS;
pub use http::MIN_TIMEOUT_MS;
