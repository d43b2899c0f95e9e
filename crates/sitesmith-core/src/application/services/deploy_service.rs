//! Deployment orchestrator.
//!
//! Drives the per-request state machine
//! `idle → building → deploying → deployed | failed` and persists every
//! transition, so a caller polling the store always sees the current
//! step. Accepted requests always come back as a record — provider
//! failures land in the record's `last_error` and terminal `failed`
//! state rather than escaping the orchestrator. Only an entitlement
//! denial (checked before the record exists) surfaces as a typed error.
//!
//! Provider adapters are injected at construction from explicit
//! credentials; nothing in here reads ambient configuration mid-flow.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        error::ApplicationError,
        ports::{DeployProvider, DeploymentStore},
        services::entitlement_gate::EntitlementGate,
    },
    domain::{BuildArtifact, DeployConfig, DeploymentRecord, PlanAction, Provider},
    error::{SitesmithError, SitesmithResult},
};

/// Default bound on each provider network call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Orchestrates artifact deployments across providers.
pub struct DeployService {
    providers: HashMap<Provider, Box<dyn DeployProvider>>,
    records: Arc<dyn DeploymentStore>,
    gate: EntitlementGate,
    call_timeout: Duration,
}

impl DeployService {
    /// Build the service from a provider registry.
    ///
    /// A provider missing from the registry (no credentials configured)
    /// fails requests with `ProviderNotConfigured`; it is never probed.
    pub fn new(
        providers: Vec<Box<dyn DeployProvider>>,
        records: Arc<dyn DeploymentStore>,
        gate: EntitlementGate,
    ) -> Self {
        let providers = providers
            .into_iter()
            .map(|p| (p.provider(), p))
            .collect();
        Self {
            providers,
            records,
            gate,
            call_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Deploy one artifact to one provider.
    ///
    /// Returns the attempt's record in a terminal state. The record is
    /// persisted at every transition; concurrent attempts for the same
    /// artifact each get their own record and never share one.
    #[instrument(skip_all, fields(artifact_id = %artifact.id(), %provider))]
    pub async fn deploy(
        &self,
        user_id: &str,
        artifact: &BuildArtifact,
        provider: Provider,
        config: DeployConfig,
    ) -> SitesmithResult<DeploymentRecord> {
        self.gate.require(user_id, PlanAction::Deploy)?;

        let mut record = DeploymentRecord::new(artifact.id(), provider, config);
        self.records.upsert(&record)?;
        info!(record_id = %record.id, "deployment accepted");

        let Some(adapter) = self.providers.get(&provider) else {
            let err = ApplicationError::ProviderNotConfigured {
                provider: provider.to_string(),
            };
            warn!(record_id = %record.id, "{err}");
            return self.finish_failed(record, &err.to_string());
        };

        record.start_build()?;
        self.records.upsert(&record)?;

        // Provision the remote project/site (idempotent on the provider
        // side), then hand over the packaged tree.
        let site = match self
            .bounded(provider, adapter.provision(&record.config.project_name))
            .await
        {
            Ok(site) => site,
            Err(e) => return self.finish_failed(record, &e.to_string()),
        };

        record.start_deploy()?;
        self.records.upsert(&record)?;

        match self.bounded(provider, adapter.upload(&site.id, artifact.files())).await {
            Ok(deployment) => {
                record.complete(deployment.url, deployment.id)?;
                self.records.upsert(&record)?;
                self.gate.record_usage(user_id, PlanAction::Deploy)?;
                info!(
                    record_id = %record.id,
                    url = record.public_url.as_deref().unwrap_or_default(),
                    "deployment completed"
                );
                Ok(record)
            }
            Err(e) => self.finish_failed(record, &e.to_string()),
        }
    }

    /// Append-only deployment history for an artifact.
    pub fn history(&self, artifact_id: &str) -> SitesmithResult<Vec<DeploymentRecord>> {
        self.records.for_artifact(artifact_id)
    }

    pub fn record(&self, id: &str) -> SitesmithResult<DeploymentRecord> {
        self.records.get(id)
    }

    /// Run a provider call under the configured timeout, mapping a
    /// timeout to a retryable `ProviderRequestFailed`.
    async fn bounded<T>(
        &self,
        provider: Provider,
        call: impl Future<Output = SitesmithResult<T>>,
    ) -> SitesmithResult<T> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ApplicationError::ProviderRequestFailed {
                provider: provider.to_string(),
                reason: format!("timed out after {:?}", self.call_timeout),
            }
            .into()),
        }
    }

    /// Move a record to terminal `failed`, persist it, and hand it back.
    fn finish_failed(
        &self,
        mut record: DeploymentRecord,
        reason: &str,
    ) -> SitesmithResult<DeploymentRecord> {
        record.fail(reason).map_err(SitesmithError::from)?;
        self.records.upsert(&record)?;
        warn!(record_id = %record.id, reason, "deployment failed");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockDeployProvider, MockDeploymentStore, MockEntitlementStore, RemoteDeployment,
        RemoteSite,
    };
    use crate::domain::{
        emitter, Archetype, DeployState, EntitlementState, PlanLimits, SiteModel,
    };
    use std::collections::BTreeSet;

    fn artifact() -> BuildArtifact {
        let mut m = SiteModel::new(
            Archetype::Commerce,
            "a store",
            vec!["home".into()],
            BTreeSet::new(),
        );
        m.seo.title = "Store".into();
        emitter::emit(&m, crate::domain::TargetKind::Web).unwrap()
    }

    fn gate() -> EntitlementGate {
        let mut store = MockEntitlementStore::new();
        store
            .expect_state()
            .returning(|_| Ok(Some(EntitlementState::new("u1", "pro", PlanLimits::pro()))));
        store.expect_increment().returning(|_, _, _| Ok(()));
        EntitlementGate::new(Arc::new(store))
    }

    fn record_store() -> Arc<MockDeploymentStore> {
        let mut records = MockDeploymentStore::new();
        records.expect_upsert().returning(|_| Ok(()));
        Arc::new(records)
    }

    fn happy_provider() -> Box<dyn DeployProvider> {
        let mut provider = MockDeployProvider::new();
        provider.expect_provider().return_const(Provider::Netlify);
        provider.expect_provision().returning(|name| {
            Ok(RemoteSite {
                id: format!("site-{name}"),
                url: format!("https://{name}.netlify.app"),
            })
        });
        provider.expect_upload().returning(|site_id, _| {
            Ok(RemoteDeployment {
                id: format!("dep-{site_id}"),
                url: "https://shop.netlify.app".into(),
            })
        });
        Box::new(provider)
    }

    #[tokio::test]
    async fn successful_deploy_ends_deployed_with_url() {
        let service = DeployService::new(vec![happy_provider()], record_store(), gate());
        let record = service
            .deploy("u1", &artifact(), Provider::Netlify, DeployConfig::new("shop"))
            .await
            .unwrap();

        assert_eq!(record.state(), DeployState::Deployed);
        assert_eq!(record.public_url.as_deref(), Some("https://shop.netlify.app"));
        assert!(record.provider_deployment_id.is_some());
    }

    #[tokio::test]
    async fn unconfigured_provider_fails_without_deploying() {
        let service = DeployService::new(vec![], record_store(), gate());
        let record = service
            .deploy("u1", &artifact(), Provider::Github, DeployConfig::new("shop"))
            .await
            .unwrap();

        assert_eq!(record.state(), DeployState::Failed);
        assert!(record.last_error.as_deref().unwrap().contains("not configured"));
        assert!(record.public_url.is_none());
    }

    #[tokio::test]
    async fn upload_failure_is_captured_in_the_record() {
        let mut provider = MockDeployProvider::new();
        provider.expect_provider().return_const(Provider::Vercel);
        provider.expect_provision().returning(|_| {
            Ok(RemoteSite {
                id: "site-1".into(),
                url: "https://x.vercel.app".into(),
            })
        });
        provider.expect_upload().returning(|_, _| {
            Err(ApplicationError::ProviderRequestFailed {
                provider: "vercel".into(),
                reason: "503".into(),
            }
            .into())
        });

        let service = DeployService::new(vec![Box::new(provider)], record_store(), gate());
        let record = service
            .deploy("u1", &artifact(), Provider::Vercel, DeployConfig::new("shop"))
            .await
            .unwrap();

        assert_eq!(record.state(), DeployState::Failed);
        assert!(record.last_error.as_deref().unwrap().contains("503"));
    }

    /// Provider whose calls never return; exercises the timeout path.
    struct StalledProvider;

    #[async_trait::async_trait]
    impl DeployProvider for StalledProvider {
        fn provider(&self) -> Provider {
            Provider::Github
        }

        async fn provision(&self, _name: &str) -> SitesmithResult<RemoteSite> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!("the orchestrator must time out first")
        }

        async fn upload(
            &self,
            _site_id: &str,
            _files: &crate::domain::FileTree,
        ) -> SitesmithResult<RemoteDeployment> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!("the orchestrator must time out first")
        }
    }

    #[tokio::test]
    async fn slow_provider_times_out_to_failed() {
        let service = DeployService::new(vec![Box::new(StalledProvider)], record_store(), gate())
            .with_call_timeout(Duration::from_millis(20));
        let record = service
            .deploy("u1", &artifact(), Provider::Github, DeployConfig::new("shop"))
            .await
            .unwrap();

        assert_eq!(record.state(), DeployState::Failed);
        assert!(record.last_error.as_deref().unwrap().contains("timed out"));
    }

    #[tokio::test]
    async fn entitlement_denial_creates_no_record() {
        let mut entitlements = MockEntitlementStore::new();
        entitlements.expect_state().returning(|_| Ok(None));
        let gate = EntitlementGate::new(Arc::new(entitlements));

        // The record store has no expectations; an upsert would panic.
        let records = Arc::new(MockDeploymentStore::new());
        let service = DeployService::new(vec![happy_provider()], records, gate);

        let result = service
            .deploy("ghost", &artifact(), Provider::Netlify, DeployConfig::new("shop"))
            .await;
        assert!(result.is_err());
    }
}
