//! In-memory entitlement store.
//!
//! The `Mutex` is what makes `increment` atomic: a concurrent
//! read-bump-write for the same user serialises on the lock, so no bump
//! is lost.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use sitesmith_core::{
    application::{ports::EntitlementStore, ApplicationError},
    domain::{EntitlementState, PlanAction},
    error::{SitesmithError, SitesmithResult},
};

fn poisoned() -> ApplicationError {
    ApplicationError::StoreError {
        reason: "entitlement store lock poisoned".into(),
    }
}

#[derive(Default)]
pub struct InMemoryEntitlementStore {
    states: Mutex<HashMap<String, EntitlementState>>,
}

impl InMemoryEntitlementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with initial states, for the CLI and tests.
    pub fn with_states(states: impl IntoIterator<Item = EntitlementState>) -> Self {
        let store = Self::new();
        {
            let mut map = store.states.lock().expect("fresh lock cannot be poisoned");
            for state in states {
                map.insert(state.user_id.clone(), state);
            }
        }
        store
    }
}

impl EntitlementStore for InMemoryEntitlementStore {
    fn state(&self, user_id: &str) -> SitesmithResult<Option<EntitlementState>> {
        let states = self.states.lock().map_err(|_| poisoned())?;
        Ok(states.get(user_id).cloned())
    }

    fn put(&self, state: EntitlementState) -> SitesmithResult<()> {
        let mut states = self.states.lock().map_err(|_| poisoned())?;
        states.insert(state.user_id.clone(), state);
        Ok(())
    }

    fn increment(
        &self,
        user_id: &str,
        action: PlanAction,
        now: DateTime<Utc>,
    ) -> SitesmithResult<()> {
        let mut states = self.states.lock().map_err(|_| poisoned())?;
        let state = states.get_mut(user_id).ok_or_else(|| {
            SitesmithError::from(ApplicationError::RecordNotFound {
                id: user_id.to_string(),
            })
        })?;
        if state.period_expired(now) {
            state.reset_period(now);
        }
        state.bump(action);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesmith_core::domain::PlanLimits;
    use std::sync::Arc;

    #[test]
    fn increment_bumps_the_right_counter() {
        let store = InMemoryEntitlementStore::with_states([EntitlementState::new(
            "u1",
            "pro",
            PlanLimits::pro(),
        )]);
        store.increment("u1", PlanAction::Deploy, Utc::now()).unwrap();
        store.increment("u1", PlanAction::AiRequest, Utc::now()).unwrap();
        let state = store.state("u1").unwrap().unwrap();
        assert_eq!(state.usage.deployments_this_period, 1);
        assert_eq!(state.usage.ai_requests_this_period, 1);
        assert_eq!(state.usage.projects_created, 0);
    }

    #[test]
    fn increment_rolls_the_window_first() {
        let mut state = EntitlementState::new("u1", "free", PlanLimits::free());
        state.usage.period_started_at = Utc::now() - chrono::Duration::days(45);
        state.usage.deployments_this_period = 5;
        let store = InMemoryEntitlementStore::with_states([state]);

        store.increment("u1", PlanAction::Deploy, Utc::now()).unwrap();
        let state = store.state("u1").unwrap().unwrap();
        assert_eq!(state.usage.deployments_this_period, 1);
    }

    #[test]
    fn unknown_user_cannot_be_incremented() {
        let store = InMemoryEntitlementStore::new();
        assert!(store.increment("ghost", PlanAction::Deploy, Utc::now()).is_err());
    }

    #[test]
    fn concurrent_increments_all_land() {
        let store = Arc::new(InMemoryEntitlementStore::with_states([
            EntitlementState::new("u1", "enterprise", PlanLimits::unlimited()),
        ]));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.increment("u1", PlanAction::AiRequest, Utc::now()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let state = store.state("u1").unwrap().unwrap();
        assert_eq!(state.usage.ai_requests_this_period, 400);
    }
}
