//! Entitlement gate: the single chokepoint for quota-limited actions.
//!
//! Every entry point that contacts a paid-tier-limited resource calls
//! [`EntitlementGate::authorize`] (or [`require`](EntitlementGate::require))
//! before proceeding and [`record_usage`](EntitlementGate::record_usage)
//! after success. No service bypasses it.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    application::{error::ApplicationError, ports::EntitlementStore},
    domain::PlanAction,
    error::SitesmithResult,
};

/// Checks plan limits and records usage against the rolling window.
#[derive(Clone)]
pub struct EntitlementGate {
    store: Arc<dyn EntitlementStore>,
}

impl EntitlementGate {
    pub fn new(store: Arc<dyn EntitlementStore>) -> Self {
        Self { store }
    }

    /// Whether the user's plan currently allows `action`.
    ///
    /// A user without a subscription record is denied. A lapsed usage
    /// window counts as empty; the store resets it on the next
    /// `record_usage`.
    pub fn authorize(&self, user_id: &str, action: PlanAction) -> SitesmithResult<bool> {
        let Some(mut state) = self.store.state(user_id)? else {
            warn!(user_id, %action, "no entitlement record, denying");
            return Ok(false);
        };

        let now = Utc::now();
        if state.period_expired(now) {
            state.reset_period(now);
        }

        let allowed = state.allows(action);
        debug!(
            user_id,
            %action,
            allowed,
            plan = %state.plan_id,
            used = state.counter(action),
            "entitlement check"
        );
        Ok(allowed)
    }

    /// Like [`authorize`](Self::authorize), but a denial is a typed
    /// [`ApplicationError::EntitlementDenied`] rather than `false`.
    pub fn require(&self, user_id: &str, action: PlanAction) -> SitesmithResult<()> {
        if self.authorize(user_id, action)? {
            return Ok(());
        }

        let (plan, reason) = match self.store.state(user_id)? {
            Some(state) => (state.plan_id.clone(), state.denial_reason(action)),
            None => ("none".into(), "no subscription record for user".into()),
        };
        Err(ApplicationError::EntitlementDenied {
            action: action.to_string(),
            plan,
            reason,
        }
        .into())
    }

    /// Record one successful use of `action`. Increments are atomic at
    /// the store: N concurrent calls net exactly N.
    pub fn record_usage(&self, user_id: &str, action: PlanAction) -> SitesmithResult<()> {
        self.store.increment(user_id, action, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockEntitlementStore;
    use crate::domain::{EntitlementState, PlanLimits};

    fn gate_with_state(state: Option<EntitlementState>) -> EntitlementGate {
        let mut store = MockEntitlementStore::new();
        store.expect_state().returning(move |_| Ok(state.clone()));
        EntitlementGate::new(Arc::new(store))
    }

    #[test]
    fn unknown_user_is_denied() {
        let gate = gate_with_state(None);
        assert!(!gate.authorize("ghost", PlanAction::Deploy).unwrap());
        assert!(gate.require("ghost", PlanAction::Deploy).is_err());
    }

    #[test]
    fn finite_limit_denies_at_boundary() {
        let mut state = EntitlementState::new("u1", "free", PlanLimits::free());
        for _ in 0..5 {
            state.bump(PlanAction::Deploy);
        }
        let gate = gate_with_state(Some(state));
        assert!(!gate.authorize("u1", PlanAction::Deploy).unwrap());
    }

    #[test]
    fn unlimited_plan_always_passes() {
        let state = EntitlementState::new("u1", "enterprise", PlanLimits::unlimited());
        let gate = gate_with_state(Some(state));
        assert!(gate.authorize("u1", PlanAction::CreateProject).unwrap());
        assert!(gate.require("u1", PlanAction::CreateProject).is_ok());
    }

    #[test]
    fn lapsed_window_counts_as_empty() {
        let mut state = EntitlementState::new("u1", "free", PlanLimits::free());
        for _ in 0..5 {
            state.bump(PlanAction::Deploy);
        }
        state.usage.period_started_at = Utc::now() - chrono::Duration::days(40);
        let gate = gate_with_state(Some(state));
        assert!(gate.authorize("u1", PlanAction::Deploy).unwrap());
    }

    #[test]
    fn denial_is_a_typed_error() {
        let state = EntitlementState::new("u1", "free", PlanLimits::free());
        let gate = gate_with_state(Some(state));
        let err = gate.require("u1", PlanAction::AiRequest).unwrap_err();
        assert!(err.to_string().contains("denied"));
    }
}
