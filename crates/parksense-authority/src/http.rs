// crates/parksense-authority/src/http.rs
// ============================================================================
// Module: HTTP Release Authority
// Description: Blocking HTTP client for the slot release endpoint.
// Purpose: Send one bounded release request and classify the answer.
// Dependencies: parksense-core, reqwest, serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! [`HttpReleaseAuthority`] POSTs `{"slotNumber": "<id>"}` to the configured
//! release endpoint and parses `{"success": <bool>}` from the reply. Non-2xx
//! statuses, oversized or unparsable bodies, and timeouts are reported as
//! [`AuthorityError`] values; the dashboard turns them into failed releases.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::ErrorKind;
use std::io::Read;
use std::time::Duration;

use parksense_core::AuthorityError;
use parksense_core::ReleaseAck;
use parksense_core::ReleaseAuthority;
use parksense_core::SlotId;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Production backend base URL.
pub const DEFAULT_BASE_URL: &str = "https://parksense-backend-production-cc04.up.railway.app";
/// Path of the release endpoint.
pub const DEFAULT_RELEASE_PATH: &str = "/api/release-slot";
/// Default whole-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Smallest accepted request timeout in milliseconds.
pub const MIN_TIMEOUT_MS: u64 = 100;
/// Largest accepted request timeout in milliseconds.
pub const MAX_TIMEOUT_MS: u64 = 60_000;
/// Default response size cap in bytes.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 64 * 1024;
/// Largest accepted response size cap in bytes.
pub const MAX_RESPONSE_BYTES_LIMIT: usize = 1024 * 1024;
/// Default user agent for outbound requests.
pub const DEFAULT_USER_AGENT: &str = "parksense/0.1";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the HTTP release authority.
///
/// # Invariants
/// - `allow_http = false` blocks cleartext `http://` base URLs.
/// - `max_response_bytes` is a hard upper bound on response bodies.
/// - `timeout_ms` applies to the full request lifecycle.
/// - Base URLs with embedded credentials are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpAuthorityConfig {
    /// Scheme and host of the backend.
    pub base_url: String,
    /// Absolute path of the release endpoint.
    pub release_path: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
    /// Allow cleartext HTTP (disabled by default).
    pub allow_http: bool,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for HttpAuthorityConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            release_path: DEFAULT_RELEASE_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            allow_http: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpAuthorityConfig {
    /// Validates limits and URL policy.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityBuildError::InvalidConfig`] when a field is out of bounds.
    pub fn validate(&self) -> Result<(), AuthorityBuildError> {
        self.endpoint().map(|_| ())
    }

    /// Resolves the release endpoint after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityBuildError::InvalidConfig`] when a field is out of bounds.
    pub fn endpoint(&self) -> Result<Url, AuthorityBuildError> {
        if !(MIN_TIMEOUT_MS ..= MAX_TIMEOUT_MS).contains(&self.timeout_ms) {
            return Err(invalid(format!(
                "timeout_ms must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS}"
            )));
        }
        if !(1 ..= MAX_RESPONSE_BYTES_LIMIT).contains(&self.max_response_bytes) {
            return Err(invalid(format!(
                "max_response_bytes must be between 1 and {MAX_RESPONSE_BYTES_LIMIT}"
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(invalid("user_agent must be non-empty"));
        }
        if !self.release_path.starts_with('/') {
            return Err(invalid("release_path must start with '/'"));
        }
        let base = Url::parse(self.base_url.trim()).map_err(|_| invalid("base_url is invalid"))?;
        match base.scheme() {
            "https" => {}
            "http" if self.allow_http => {}
            "http" => return Err(invalid("base_url must use https unless allow_http is set")),
            _ => return Err(invalid("base_url scheme must be http or https")),
        }
        if base.host_str().is_none_or(str::is_empty) {
            return Err(invalid("base_url host required"));
        }
        if !base.username().is_empty() || base.password().is_some() {
            return Err(invalid("base_url credentials are not allowed"));
        }
        base.join(&self.release_path).map_err(|_| invalid("release_path is invalid"))
    }
}

/// Errors raised while building the HTTP authority.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorityBuildError {
    /// Configuration failed validation.
    #[error("invalid authority config: {0}")]
    InvalidConfig(String),
    /// The HTTP client could not be created.
    #[error("http client build failed: {0}")]
    Client(String),
}

/// Builds an [`AuthorityBuildError::InvalidConfig`].
fn invalid(reason: impl Into<String>) -> AuthorityBuildError {
    AuthorityBuildError::InvalidConfig(reason.into())
}

// ============================================================================
// SECTION: Authority Implementation
// ============================================================================

/// Release request body.
#[derive(Debug, Serialize)]
struct ReleaseRequest<'a> {
    /// Slot identifier to release.
    #[serde(rename = "slotNumber")]
    slot_number: &'a str,
}

/// Remote slot authority reached over HTTP.
///
/// # Invariants
/// - Each call sends exactly one request; there are no retries.
/// - Redirects are not followed.
#[derive(Debug, Clone)]
pub struct HttpReleaseAuthority {
    /// Validated configuration.
    config: HttpAuthorityConfig,
    /// Resolved release endpoint.
    endpoint: Url,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl HttpReleaseAuthority {
    /// Creates an authority from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorityBuildError`] when the configuration is invalid or
    /// the HTTP client cannot be created.
    pub fn new(config: HttpAuthorityConfig) -> Result<Self, AuthorityBuildError> {
        let endpoint = config.endpoint()?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(|err| AuthorityBuildError::Client(err.to_string()))?;
        Ok(Self {
            config,
            endpoint,
            client,
        })
    }

    /// Returns the release endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &HttpAuthorityConfig {
        &self.config
    }

    /// Maps a request failure onto the authority error taxonomy.
    fn classify(&self, err: &reqwest::Error) -> AuthorityError {
        if err.is_timeout() {
            return AuthorityError::TimedOut {
                timeout_ms: self.config.timeout_ms,
            };
        }
        AuthorityError::Transport(err.to_string())
    }

    /// Reads at most `max_response_bytes` of body, failing closed on overflow
    /// and on bodies shorter than their declared length.
    fn read_body(&self, response: Response) -> Result<Vec<u8>, AuthorityError> {
        let cap = self.config.max_response_bytes;
        let oversized = || AuthorityError::Malformed("response exceeds size limit".to_string());
        let declared =
            response.content_length().map(|len| usize::try_from(len).unwrap_or(usize::MAX));
        if declared.is_some_and(|len| len > cap) {
            return Err(oversized());
        }

        let limit = u64::try_from(cap).unwrap_or(u64::MAX).saturating_add(1);
        let mut body = Vec::with_capacity(declared.unwrap_or(0));
        response.take(limit).read_to_end(&mut body).map_err(|err| match err.kind() {
            ErrorKind::TimedOut => AuthorityError::TimedOut {
                timeout_ms: self.config.timeout_ms,
            },
            _ => AuthorityError::Transport("failed to read response".to_string()),
        })?;

        if body.len() > cap {
            return Err(oversized());
        }
        if declared.is_some_and(|len| body.len() < len) {
            return Err(AuthorityError::Transport("response truncated".to_string()));
        }
        Ok(body)
    }
}

impl ReleaseAuthority for HttpReleaseAuthority {
    fn release_slot(&self, slot_id: &SlotId) -> Result<ReleaseAck, AuthorityError> {
        let body = serde_json::to_vec(&ReleaseRequest {
            slot_number: slot_id.as_str(),
        })
        .map_err(|err| AuthorityError::Transport(format!("request encoding failed: {err}")))?;
        debug!(slot = %slot_id, endpoint = %self.endpoint, "sending release request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|err| self.classify(&err))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuthorityError::Transport(format!(
                "release endpoint returned status {}",
                status.as_u16()
            )));
        }
        let bytes = self.read_body(response)?;
        serde_json::from_slice::<ReleaseAck>(&bytes)
            .map_err(|err| AuthorityError::Malformed(err.to_string()))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
