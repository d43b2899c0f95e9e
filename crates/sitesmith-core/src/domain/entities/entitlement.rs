//! Entitlement state: plan limits and rolling usage counters.
//!
//! Pure data plus the comparison logic. Atomicity of counter updates is
//! the store's job (see `application::ports::EntitlementStore`); this
//! module never does read-modify-write across a boundary.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PlanAction;

/// Sentinel meaning "no limit" for a quota field.
pub const UNLIMITED: i64 = -1;

/// Usage window length. Counters reset when the period start is older
/// than this.
pub const USAGE_PERIOD_DAYS: i64 = 30;

/// Per-plan quota limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    pub max_projects: i64,
    pub max_deployments: i64,
    pub ai_features_enabled: bool,
}

impl PlanLimits {
    pub const fn free() -> Self {
        Self {
            max_projects: 3,
            max_deployments: 5,
            ai_features_enabled: false,
        }
    }

    pub const fn pro() -> Self {
        Self {
            max_projects: 25,
            max_deployments: 100,
            ai_features_enabled: true,
        }
    }

    pub const fn unlimited() -> Self {
        Self {
            max_projects: UNLIMITED,
            max_deployments: UNLIMITED,
            ai_features_enabled: true,
        }
    }
}

/// Rolling 30-day usage counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounters {
    pub projects_created: u64,
    pub deployments_this_period: u64,
    pub ai_requests_this_period: u64,
    pub period_started_at: DateTime<Utc>,
}

impl UsageCounters {
    pub fn starting_at(period_started_at: DateTime<Utc>) -> Self {
        Self {
            projects_created: 0,
            deployments_this_period: 0,
            ai_requests_this_period: 0,
            period_started_at,
        }
    }
}

/// One user's subscription-derived permission and quota state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementState {
    pub user_id: String,
    pub plan_id: String,
    pub limits: PlanLimits,
    pub usage: UsageCounters,
}

impl EntitlementState {
    pub fn new(user_id: impl Into<String>, plan_id: impl Into<String>, limits: PlanLimits) -> Self {
        Self {
            user_id: user_id.into(),
            plan_id: plan_id.into(),
            limits,
            usage: UsageCounters::starting_at(Utc::now()),
        }
    }

    /// Whether the usage window has lapsed as of `now`.
    pub fn period_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.usage.period_started_at > Duration::days(USAGE_PERIOD_DAYS)
    }

    /// Reset counters for a fresh window starting at `now`.
    pub fn reset_period(&mut self, now: DateTime<Utc>) {
        self.usage = UsageCounters::starting_at(now);
    }

    /// The counter relevant to an action.
    pub fn counter(&self, action: PlanAction) -> u64 {
        match action {
            PlanAction::CreateProject => self.usage.projects_created,
            PlanAction::Deploy => self.usage.deployments_this_period,
            PlanAction::AiRequest => self.usage.ai_requests_this_period,
        }
    }

    /// Bump the counter for an action.
    pub fn bump(&mut self, action: PlanAction) {
        match action {
            PlanAction::CreateProject => self.usage.projects_created += 1,
            PlanAction::Deploy => self.usage.deployments_this_period += 1,
            PlanAction::AiRequest => self.usage.ai_requests_this_period += 1,
        }
    }

    /// Whether the plan currently allows an action.
    ///
    /// A limit of [`UNLIMITED`] always passes. `AiRequest` additionally
    /// requires the plan's ai flag.
    pub fn allows(&self, action: PlanAction) -> bool {
        match action {
            PlanAction::CreateProject => within(self.usage.projects_created, self.limits.max_projects),
            PlanAction::Deploy => {
                within(self.usage.deployments_this_period, self.limits.max_deployments)
            }
            PlanAction::AiRequest => self.limits.ai_features_enabled,
        }
    }

    /// Human-readable reason for a denial, for error messages.
    pub fn denial_reason(&self, action: PlanAction) -> String {
        match action {
            PlanAction::AiRequest => "plan does not include AI features".into(),
            _ => format!(
                "{} usage ({}) has reached the plan limit",
                action,
                self.counter(action)
            ),
        }
    }
}

fn within(used: u64, limit: i64) -> bool {
    limit == UNLIMITED || (used as i64) < limit
}
