// crates/parksense-authority/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared helpers for parksense-authority tests.
// Purpose: Provide local release endpoints and authority builders.
// Dependencies: parksense-authority, tiny_http, tracing-subscriber
// ============================================================================

//! ## Overview
//! Provides one-shot local HTTP servers that record the release request they
//! receive, plus builders for authorities pointed at them.

#![allow(
    dead_code,
    reason = "Each integration test binary uses a different subset of helpers."
)]
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
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::io::Read;
use std::io::Write;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use parksense_authority::HttpAuthorityConfig;
use parksense_authority::HttpReleaseAuthority;
use tiny_http::Header;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Captured Requests
// ============================================================================

/// Release request as seen by the local server.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// HTTP method.
    pub method: String,
    /// Request path.
    pub path: String,
    /// `Content-Type` header value, if any.
    pub content_type: Option<String>,
    /// Raw request body.
    pub body: String,
}

// ============================================================================
// SECTION: Servers
// ============================================================================

/// Starts a server that answers one request with `status` and `body`.
pub fn spawn_server(
    status: u16,
    body: impl Into<String>,
) -> (String, thread::JoinHandle<Option<CapturedRequest>>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let body = body.into();
    let handle = thread::spawn(move || {
        let mut request = server.recv().ok()?;
        let mut received = String::new();
        let _ = request.as_reader().read_to_string(&mut received);
        let content_type = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("Content-Type"))
            .map(|header| header.value.as_str().to_string());
        let captured = CapturedRequest {
            method: request.method().as_str().to_string(),
            path: request.url().to_string(),
            content_type,
            body: received,
        };
        let json = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
        let response = Response::from_string(body).with_status_code(status).with_header(json);
        let _ = request.respond(response);
        Some(captured)
    });
    (format!("http://{addr}"), handle)
}

/// Starts a server that accepts one connection and never answers in time.
pub fn spawn_silent_server(hold: Duration) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            thread::sleep(hold);
        }
    });
    (format!("http://{addr}"), handle)
}

/// Starts a server that writes `reply` verbatim to one connection and closes it.
pub fn spawn_raw_server(reply: &'static str) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(reply.as_bytes());
        }
    });
    (format!("http://{addr}"), handle)
}

// ============================================================================
// SECTION: Authority Builders
// ============================================================================

/// Returns a config pointed at a local cleartext server.
pub fn local_config(base_url: &str) -> HttpAuthorityConfig {
    HttpAuthorityConfig {
        base_url: base_url.to_string(),
        allow_http: true,
        timeout_ms: 5_000,
        ..HttpAuthorityConfig::default()
    }
}

/// Builds an authority pointed at a local cleartext server.
pub fn local_authority(base_url: &str) -> HttpReleaseAuthority {
    HttpReleaseAuthority::new(local_config(base_url)).unwrap()
}

/// Installs a test log subscriber once per binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
