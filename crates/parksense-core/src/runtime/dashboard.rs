// crates/parksense-core/src/runtime/dashboard.rs
// ============================================================================
// Module: ParkSense Dashboard
// Description: Load, view, and release lifecycle of one dashboard mount.
// Purpose: Keep session facts, the slot grid, and the remote authority consistent.
// Dependencies: crate::{core, interfaces, runtime}, tracing
// ============================================================================

//! ## Overview
//! The dashboard is the single execution path for the release workflow. It
//! hydrates once on load, owns the slot grid and allocation, and routes every
//! user action through the [`ReleaseCoordinator`].
//! Invariants:
//! - At most one slot is booked, and it is the allocation's slot.
//! - Grid, allocation, and session change only after the authority reports success.
//! - The confirmation gate closes after the outcome has been applied.
//! - Release failures are returned as values and kept as a [`ReleaseNotice`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::info;
use tracing::warn;

use crate::core::Allocation;
use crate::core::SessionKey;
use crate::core::SlotGrid;
use crate::core::SlotId;
use crate::interfaces::AuthorityError;
use crate::interfaces::Navigator;
use crate::interfaces::ReleaseAck;
use crate::interfaces::ReleaseAuthority;
use crate::interfaces::SessionStore;
use crate::runtime::hydrate::Hydration;
use crate::runtime::hydrate::hydrate;
use crate::runtime::release::ReleaseAction;
use crate::runtime::release::ReleaseCoordinator;
use crate::runtime::release::ReleaseOutcome;
use crate::runtime::release::ReleaseState;
use crate::runtime::release::TransitionError;
use crate::runtime::view::DashboardView;
use crate::runtime::view::ReleaseNotice;

// ============================================================================
// SECTION: Load Result
// ============================================================================

/// Result of mounting the dashboard.
#[derive(Debug)]
pub enum DashboardLoad<S> {
    /// Identity was missing; the navigator was asked to show sign-in.
    RedirectedToLogin,
    /// Dashboard is ready to render.
    Ready(Dashboard<S>),
}

impl<S> DashboardLoad<S> {
    /// Returns the dashboard when it is ready.
    #[must_use]
    pub fn ready(self) -> Option<Dashboard<S>> {
        match self {
            Self::RedirectedToLogin => None,
            Self::Ready(dashboard) => Some(dashboard),
        }
    }
}

// ============================================================================
// SECTION: Dashboard
// ============================================================================

/// Dashboard state for one signed-in user.
#[derive(Debug)]
pub struct Dashboard<S> {
    /// Session adapter used for cleanup after a release.
    session: S,
    /// Lot map.
    grid: SlotGrid,
    /// User's allocation.
    allocation: Allocation,
    /// Release workflow.
    coordinator: ReleaseCoordinator,
    /// Last release failure, cleared by the next attempt.
    notice: Option<ReleaseNotice>,
}

impl<S> Dashboard<S>
where
    S: SessionStore,
{
    /// Hydrates session facts and builds the dashboard.
    ///
    /// Redirects through `navigator` and returns
    /// [`DashboardLoad::RedirectedToLogin`] when identity is missing.
    pub fn load<N>(session: S, navigator: &N) -> DashboardLoad<S>
    where
        N: Navigator + ?Sized,
    {
        match hydrate(&session) {
            Hydration::RequiresAuth => {
                info!("redirecting to sign-in");
                navigator.redirect_to_login();
                DashboardLoad::RedirectedToLogin
            }
            Hydration::Ready(allocation) => {
                DashboardLoad::Ready(Self::from_allocation(session, allocation))
            }
        }
    }

    /// Builds the dashboard from an already hydrated allocation.
    #[must_use]
    pub fn from_allocation(session: S, allocation: Allocation) -> Self {
        let grid = SlotGrid::generate().apply_allocation(allocation.slot_id());
        Self {
            session,
            grid,
            allocation,
            coordinator: ReleaseCoordinator::new(),
            notice: None,
        }
    }

    /// Returns the lot map.
    #[must_use]
    pub const fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Returns the user's allocation.
    #[must_use]
    pub const fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// Returns the release workflow state.
    #[must_use]
    pub const fn release_state(&self) -> &ReleaseState {
        self.coordinator.state()
    }

    /// Returns the last release failure, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&ReleaseNotice> {
        self.notice.as_ref()
    }

    /// Projects the dashboard for rendering.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView::project(
            &self.grid,
            &self.allocation,
            self.coordinator.state(),
            self.notice.as_ref(),
        )
    }

    /// Opens the confirmation gate for the allocated slot.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] when nothing is allocated or the gate is
    /// already open.
    pub fn request_release(&mut self) -> Result<SlotId, TransitionError> {
        let slot = self.coordinator.request_release(&self.allocation)?;
        self.notice = None;
        Ok(slot)
    }

    /// Closes the confirmation gate without releasing.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless confirmation is pending.
    pub fn cancel_release(&mut self) -> Result<SlotId, TransitionError> {
        self.coordinator.cancel()
    }

    /// Confirms the release and calls `authority` exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless confirmation is pending. Release
    /// failures are reported as [`ReleaseOutcome::Failed`], not as errors.
    pub fn confirm<A>(&mut self, authority: &A) -> Result<ReleaseOutcome, TransitionError>
    where
        A: ReleaseAuthority + ?Sized,
    {
        let slot = self.begin_confirm()?;
        let response = authority.release_slot(&slot);
        self.complete_release(response)
    }

    /// Moves the release to `InFlight` for hosts that call the authority themselves.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless confirmation is pending.
    pub fn begin_confirm(&mut self) -> Result<SlotId, TransitionError> {
        let slot = self.coordinator.begin_confirm()?;
        info!(slot = %slot, "releasing slot");
        Ok(slot)
    }

    /// Applies the authority's answer to the in-flight release and closes the gate.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] unless a release is in flight.
    pub fn complete_release(
        &mut self,
        response: Result<ReleaseAck, AuthorityError>,
    ) -> Result<ReleaseOutcome, TransitionError> {
        let slot = self.coordinator.in_flight_slot(ReleaseAction::Finish)?.clone();
        let outcome = ReleaseOutcome::from_response(slot, response);
        match &outcome {
            ReleaseOutcome::Released {
                slot,
            } => self.apply_release(slot),
            ReleaseOutcome::Failed {
                slot,
                error,
            } => {
                warn!(slot = %slot, error = %error, "slot release failed");
                self.notice = Some(ReleaseNotice::new(slot.clone(), error.clone()));
            }
        }
        self.coordinator.finish()?;
        Ok(outcome)
    }

    /// Reconciles grid, allocation, and session after a confirmed release.
    fn apply_release(&mut self, slot: &SlotId) {
        self.grid = self.grid.release(slot);
        self.allocation.clear_slot();
        self.notice = None;
        if let Err(err) = self.session.remove(SessionKey::AssignedSlot) {
            warn!(slot = %slot, error = %err, "released slot but session cleanup failed");
        }
        info!(slot = %slot, "slot released");
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
