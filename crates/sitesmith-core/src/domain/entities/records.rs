//! Deployment and publication records.
//!
//! One record per attempt, append-only per artifact: a redeploy or a
//! resubmission creates a new record, it never rewrites a prior one. The
//! only field that moves after creation is the state (plus the outputs
//! captured on the transition that set it). Transitions are enforced
//! here; orchestrators cannot put a record into an unreachable state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    value_objects::{DeployState, Marketplace, Provider, PublishState},
};

// ── Deployment ────────────────────────────────────────────────────────────────

/// Caller-supplied deployment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployConfig {
    pub project_name: String,
    pub domain: Option<String>,
    pub environment: String,
}

impl DeployConfig {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            domain: None,
            environment: "production".into(),
        }
    }
}

/// One deployment attempt of one artifact to one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub id: String,
    pub artifact_id: String,
    pub provider: Provider,
    state: DeployState,
    pub public_url: Option<String>,
    pub provider_deployment_id: Option<String>,
    pub config: DeployConfig,
    pub created_at: DateTime<Utc>,
    pub last_error: Option<String>,
}

impl DeploymentRecord {
    pub fn new(artifact_id: impl Into<String>, provider: Provider, config: DeployConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            artifact_id: artifact_id.into(),
            provider,
            state: DeployState::Idle,
            public_url: None,
            provider_deployment_id: None,
            config,
            created_at: Utc::now(),
            last_error: None,
        }
    }

    pub fn state(&self) -> DeployState {
        self.state
    }

    /// `idle → building`: the request has been accepted and packaging
    /// begins.
    pub fn start_build(&mut self) -> Result<(), DomainError> {
        self.step(DeployState::Idle, DeployState::Building)
    }

    /// `building → deploying`: the artifact is packaged for the provider.
    pub fn start_deploy(&mut self) -> Result<(), DomainError> {
        self.step(DeployState::Building, DeployState::Deploying)
    }

    /// `deploying → deployed`: provider acknowledged with a public URL.
    pub fn complete(
        &mut self,
        public_url: impl Into<String>,
        provider_deployment_id: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.step(DeployState::Deploying, DeployState::Deployed)?;
        self.public_url = Some(public_url.into());
        self.provider_deployment_id = Some(provider_deployment_id.into());
        Ok(())
    }

    /// Short-circuit to `failed` from any non-terminal state.
    ///
    /// Failures are terminal; retrying means issuing a new request, which
    /// creates a new record.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), DomainError> {
        if self.state.is_terminal() {
            return Err(self.illegal(DeployState::Failed));
        }
        self.state = DeployState::Failed;
        self.last_error = Some(reason.into());
        Ok(())
    }

    fn step(&mut self, expected: DeployState, next: DeployState) -> Result<(), DomainError> {
        if self.state != expected {
            return Err(self.illegal(next));
        }
        self.state = next;
        Ok(())
    }

    fn illegal(&self, to: DeployState) -> DomainError {
        DomainError::IllegalTransition {
            record: "deployment",
            from: self.state.to_string(),
            to: to.to_string(),
        }
    }
}

// ── Publication ───────────────────────────────────────────────────────────────

/// Caller-supplied marketplace submission settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishConfig {
    pub app_name: String,
    pub category: Option<String>,
}

impl PublishConfig {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            category: None,
        }
    }
}

/// One submission attempt of one mobile artifact to one marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub id: String,
    pub artifact_id: String,
    pub store: Marketplace,
    state: PublishState,
    pub store_app_id: Option<String>,
    pub store_url: Option<String>,
    pub config: PublishConfig,
    pub created_at: DateTime<Utc>,
    pub rejection_reason: Option<String>,
}

impl PublicationRecord {
    pub fn new(artifact_id: impl Into<String>, store: Marketplace, config: PublishConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            artifact_id: artifact_id.into(),
            store,
            state: PublishState::Idle,
            store_app_id: None,
            store_url: None,
            config,
            created_at: Utc::now(),
            rejection_reason: None,
        }
    }

    pub fn state(&self) -> PublishState {
        self.state
    }

    /// `idle → submitting`.
    pub fn begin_submission(&mut self) -> Result<(), DomainError> {
        if self.state != PublishState::Idle {
            return Err(self.illegal(PublishState::Submitting));
        }
        self.state = PublishState::Submitting;
        Ok(())
    }

    /// `submitting → submitted` with the store-assigned identifiers.
    pub fn accept(
        &mut self,
        store_app_id: impl Into<String>,
        store_url: impl Into<String>,
    ) -> Result<(), DomainError> {
        if self.state != PublishState::Submitting {
            return Err(self.illegal(PublishState::Submitted));
        }
        self.state = PublishState::Submitted;
        self.store_app_id = Some(store_app_id.into());
        self.store_url = Some(store_url.into());
        Ok(())
    }

    /// Terminal rejection with the provider-supplied reason. No automatic
    /// resubmission; the caller issues a new record after addressing it.
    pub fn reject(&mut self, reason: impl Into<String>) -> Result<(), DomainError> {
        if self.state.is_terminal() {
            return Err(self.illegal(PublishState::Rejected));
        }
        self.state = PublishState::Rejected;
        self.rejection_reason = Some(reason.into());
        Ok(())
    }

    fn illegal(&self, to: PublishState) -> DomainError {
        DomainError::IllegalTransition {
            record: "publication",
            from: self.state.to_string(),
            to: to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DeploymentRecord {
        DeploymentRecord::new("artifact-1", Provider::Netlify, DeployConfig::new("shop"))
    }

    #[test]
    fn happy_path_walks_all_states() {
        let mut r = record();
        assert_eq!(r.state(), DeployState::Idle);
        r.start_build().unwrap();
        r.start_deploy().unwrap();
        r.complete("https://shop.netlify.app", "dep-1").unwrap();
        assert_eq!(r.state(), DeployState::Deployed);
        assert_eq!(r.public_url.as_deref(), Some("https://shop.netlify.app"));
    }

    #[test]
    fn cannot_skip_building() {
        let mut r = record();
        assert!(r.start_deploy().is_err());
    }

    #[test]
    fn fail_is_allowed_from_any_nonterminal_state() {
        let mut r = record();
        r.fail("credentials missing").unwrap();
        assert_eq!(r.state(), DeployState::Failed);
        assert!(r.last_error.is_some());

        let mut r = record();
        r.start_build().unwrap();
        r.start_deploy().unwrap();
        r.fail("upload refused").unwrap();
        assert_eq!(r.state(), DeployState::Failed);
    }

    #[test]
    fn terminal_states_are_frozen() {
        let mut r = record();
        r.fail("boom").unwrap();
        assert!(r.fail("again").is_err());
        assert!(r.start_build().is_err());
    }

    #[test]
    fn publication_rejection_carries_reason() {
        let mut p = PublicationRecord::new(
            "artifact-1",
            Marketplace::PlayStore,
            PublishConfig::new("Shop"),
        );
        p.begin_submission().unwrap();
        p.reject("missing privacy policy").unwrap();
        assert_eq!(p.state(), PublishState::Rejected);
        assert_eq!(p.rejection_reason.as_deref(), Some("missing privacy policy"));
        assert!(p.accept("app-1", "url").is_err());
    }
}
