//! Publishing pipeline: mobile artifacts → distribution marketplaces.
//!
//! Same orchestration shape as the deployment service, scoped to the
//! `idle → submitting → submitted | rejected` machine. A rejection is
//! terminal and carries the store-supplied reason; there is no automatic
//! resubmission.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        error::ApplicationError,
        ports::{MarketplaceClient, PublicationStore, SubmissionStatus},
        services::entitlement_gate::EntitlementGate,
    },
    domain::{BuildArtifact, DomainError, Marketplace, PlanAction, PublicationRecord, PublishConfig},
    error::{SitesmithError, SitesmithResult},
};

/// Default bound on each marketplace network call.
pub const DEFAULT_MARKETPLACE_TIMEOUT: Duration = Duration::from_secs(30);

/// Orchestrates marketplace submissions for mobile artifacts.
pub struct PublishService {
    stores: HashMap<Marketplace, Box<dyn MarketplaceClient>>,
    records: Arc<dyn PublicationStore>,
    gate: EntitlementGate,
    call_timeout: Duration,
}

impl PublishService {
    pub fn new(
        clients: Vec<Box<dyn MarketplaceClient>>,
        records: Arc<dyn PublicationStore>,
        gate: EntitlementGate,
    ) -> Self {
        let stores = clients.into_iter().map(|c| (c.store(), c)).collect();
        Self {
            stores,
            records,
            gate,
            call_timeout: DEFAULT_MARKETPLACE_TIMEOUT,
        }
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Submit one mobile artifact to one marketplace.
    ///
    /// Non-mobile artifacts are rejected up front with
    /// `UnsupportedTarget` — no record is created for them.
    #[instrument(skip_all, fields(artifact_id = %artifact.id(), %store))]
    pub async fn publish(
        &self,
        user_id: &str,
        artifact: &BuildArtifact,
        store: Marketplace,
        config: PublishConfig,
    ) -> SitesmithResult<PublicationRecord> {
        if !artifact.target().is_mobile() {
            return Err(DomainError::UnsupportedTarget {
                target: artifact.target().to_string(),
                reason: format!("only mobile artifacts can be published to {store}"),
            }
            .into());
        }

        self.gate.require(user_id, PlanAction::Deploy)?;

        let mut record = PublicationRecord::new(artifact.id(), store, config);
        self.records.upsert(&record)?;
        info!(record_id = %record.id, "publication accepted");

        let Some(client) = self.stores.get(&store) else {
            let err = ApplicationError::ProviderNotConfigured {
                provider: store.to_string(),
            };
            warn!(record_id = %record.id, "{err}");
            return self.finish_rejected(record, &err.to_string());
        };

        record.begin_submission()?;
        self.records.upsert(&record)?;

        let call = client.submit(&record.config, artifact.files());
        let outcome = match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ApplicationError::ProviderRequestFailed {
                provider: store.to_string(),
                reason: format!("timed out after {:?}", self.call_timeout),
            }
            .into()),
        };

        match outcome {
            Ok(SubmissionStatus::Accepted { app_id, listing_url }) => {
                record.accept(app_id, listing_url)?;
                self.records.upsert(&record)?;
                self.gate.record_usage(user_id, PlanAction::Deploy)?;
                info!(record_id = %record.id, "submission accepted");
                Ok(record)
            }
            Ok(SubmissionStatus::Rejected { reason }) => self.finish_rejected(record, &reason),
            Err(e) => self.finish_rejected(record, &e.to_string()),
        }
    }

    /// Append-only publication history for an artifact.
    pub fn history(&self, artifact_id: &str) -> SitesmithResult<Vec<PublicationRecord>> {
        self.records.for_artifact(artifact_id)
    }

    fn finish_rejected(
        &self,
        mut record: PublicationRecord,
        reason: &str,
    ) -> SitesmithResult<PublicationRecord> {
        record.reject(reason).map_err(SitesmithError::from)?;
        self.records.upsert(&record)?;
        warn!(record_id = %record.id, reason, "publication rejected");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockEntitlementStore, MockMarketplaceClient, MockPublicationStore,
    };
    use crate::domain::{
        emitter, Archetype, EntitlementState, PlanLimits, PublishState, SiteModel, TargetKind,
    };
    use std::collections::BTreeSet;

    fn mobile_artifact() -> BuildArtifact {
        let mut m = SiteModel::new(
            Archetype::Dining,
            "a restaurant app",
            vec!["home".into()],
            BTreeSet::new(),
        );
        m.seo.title = "Trattoria".into();
        emitter::emit(&m, TargetKind::Flutter).unwrap()
    }

    fn gate() -> EntitlementGate {
        let mut store = MockEntitlementStore::new();
        store
            .expect_state()
            .returning(|_| Ok(Some(EntitlementState::new("u1", "pro", PlanLimits::pro()))));
        store.expect_increment().returning(|_, _, _| Ok(()));
        EntitlementGate::new(Arc::new(store))
    }

    fn record_store() -> Arc<MockPublicationStore> {
        let mut records = MockPublicationStore::new();
        records.expect_upsert().returning(|_| Ok(()));
        Arc::new(records)
    }

    #[tokio::test]
    async fn accepted_submission_ends_submitted() {
        let mut client = MockMarketplaceClient::new();
        client.expect_store().return_const(Marketplace::PlayStore);
        client.expect_submit().returning(|config, _| {
            Ok(SubmissionStatus::Accepted {
                app_id: format!("app-{}", config.app_name),
                listing_url: "https://play.example/app".into(),
            })
        });

        let service = PublishService::new(vec![Box::new(client)], record_store(), gate());
        let record = service
            .publish(
                "u1",
                &mobile_artifact(),
                Marketplace::PlayStore,
                PublishConfig::new("trattoria"),
            )
            .await
            .unwrap();

        assert_eq!(record.state(), PublishState::Submitted);
        assert_eq!(record.store_app_id.as_deref(), Some("app-trattoria"));
        assert!(record.store_url.is_some());
    }

    #[tokio::test]
    async fn rejection_is_terminal_with_reason() {
        let mut client = MockMarketplaceClient::new();
        client.expect_store().return_const(Marketplace::AppStore);
        client.expect_submit().returning(|_, _| {
            Ok(SubmissionStatus::Rejected {
                reason: "metadata incomplete".into(),
            })
        });

        let service = PublishService::new(vec![Box::new(client)], record_store(), gate());
        let record = service
            .publish(
                "u1",
                &mobile_artifact(),
                Marketplace::AppStore,
                PublishConfig::new("trattoria"),
            )
            .await
            .unwrap();

        assert_eq!(record.state(), PublishState::Rejected);
        assert_eq!(record.rejection_reason.as_deref(), Some("metadata incomplete"));
    }

    #[tokio::test]
    async fn web_artifacts_cannot_be_published() {
        let mut m = SiteModel::new(
            Archetype::Landing,
            "landing",
            vec!["home".into()],
            BTreeSet::new(),
        );
        m.seo.title = "Landing".into();
        let web = emitter::emit(&m, TargetKind::Web).unwrap();

        // No record store expectations: nothing may be persisted.
        let service = PublishService::new(
            vec![],
            Arc::new(MockPublicationStore::new()),
            gate(),
        );
        let err = service
            .publish("u1", &web, Marketplace::AppStore, PublishConfig::new("x"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unsupported target"));
    }

    #[tokio::test]
    async fn unconfigured_store_rejects_without_submitting() {
        let service = PublishService::new(vec![], record_store(), gate());
        let record = service
            .publish(
                "u1",
                &mobile_artifact(),
                Marketplace::AppStore,
                PublishConfig::new("trattoria"),
            )
            .await
            .unwrap();

        assert_eq!(record.state(), PublishState::Rejected);
        assert!(record.rejection_reason.as_deref().unwrap().contains("not configured"));
    }
}
