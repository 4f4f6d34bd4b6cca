// crates/parksense-authority/tests/dashboard_flow.rs
// ============================================================================
// Module: Dashboard Release Flow Tests
// Description: Dashboard release driven through the HTTP authority.
// ============================================================================
//! ## Overview
//! Runs the full load, request, and confirm flow against a local release
//! endpoint and checks that local state follows the endpoint's answer.

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

mod common;

use parksense_core::Dashboard;
use parksense_core::InMemorySessionStore;
use parksense_core::Navigator;
use parksense_core::ReleaseError;
use parksense_core::ReleaseOutcome;
use parksense_core::ReleaseState;
use parksense_core::SessionKey;
use parksense_core::SlotId;
use parksense_core::SlotStatus;

use crate::common::init_tracing;
use crate::common::local_authority;
use crate::common::spawn_server;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Navigator for sessions that are always signed in.
struct NoRedirect;

impl Navigator for NoRedirect {
    fn redirect_to_login(&self) {
        panic!("signed-in session must not redirect");
    }
}

fn signed_in_with_d6() -> InMemorySessionStore {
    InMemorySessionStore::new()
        .with_fact(SessionKey::Token, "tok-9")
        .with_fact(SessionKey::PhoneNumber, "5550199")
        .with_fact(SessionKey::CarNumber, "MH12XY0001")
        .with_fact(SessionKey::AssignedSlot, "D6")
}

fn d6() -> SlotId {
    SlotId::parse("D6").unwrap()
}

// ============================================================================
// SECTION: Scenarios
// ============================================================================

#[test]
fn released_over_http_clears_local_state() {
    init_tracing();
    let session = signed_in_with_d6();
    let mut dashboard = Dashboard::load(session.clone(), &NoRedirect).ready().unwrap();
    let (url, handle) = spawn_server(200, r#"{"success":true}"#);
    let authority = local_authority(&url);

    dashboard.request_release().unwrap();
    let outcome = dashboard.confirm(&authority).unwrap();
    let captured = handle.join().unwrap().unwrap();

    assert_eq!(
        outcome,
        ReleaseOutcome::Released {
            slot: d6(),
        }
    );
    assert!(captured.body.contains("\"D6\""));
    assert_eq!(dashboard.grid().get(&d6()).unwrap().status, SlotStatus::Available);
    assert!(dashboard.allocation().slot_id().is_none());
    assert!(!session.contains(SessionKey::AssignedSlot));
    assert_eq!(dashboard.release_state(), &ReleaseState::Idle);
}

#[test]
fn http_failure_keeps_allocation_and_reports_notice() {
    init_tracing();
    let session = signed_in_with_d6();
    let mut dashboard = Dashboard::load(session.clone(), &NoRedirect).ready().unwrap();
    let (url, handle) = spawn_server(503, "unavailable");
    let authority = local_authority(&url);

    dashboard.request_release().unwrap();
    let outcome = dashboard.confirm(&authority).unwrap();
    handle.join().unwrap();

    assert!(matches!(
        outcome,
        ReleaseOutcome::Failed {
            error: ReleaseError::Transport(_),
            ..
        }
    ));
    assert_eq!(dashboard.grid().get(&d6()).unwrap().status, SlotStatus::Booked);
    assert_eq!(dashboard.allocation().slot_id(), Some(&d6()));
    assert!(session.contains(SessionKey::AssignedSlot));

    let view = dashboard.view();
    let notice = view.notice.expect("failure notice");
    assert_eq!(notice.slot, d6());
    assert!(view.prompt.is_none());
}
