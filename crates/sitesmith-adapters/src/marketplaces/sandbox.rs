//! Deterministic marketplace client for dry runs and tests.

use async_trait::async_trait;
use tracing::instrument;

use sitesmith_core::{
    application::ports::{MarketplaceClient, SubmissionStatus},
    domain::{FileTree, Marketplace, PublishConfig},
    error::SitesmithResult,
};

/// Accepts every submission with a predictable id, or rejects every one
/// with a fixed reason when built via [`SandboxMarketplaceClient::rejecting`].
pub struct SandboxMarketplaceClient {
    store: Marketplace,
    rejection: Option<String>,
}

impl SandboxMarketplaceClient {
    pub fn new(store: Marketplace) -> Self {
        Self {
            store,
            rejection: None,
        }
    }

    pub fn rejecting(store: Marketplace, reason: impl Into<String>) -> Self {
        Self {
            store,
            rejection: Some(reason.into()),
        }
    }
}

#[async_trait]
impl MarketplaceClient for SandboxMarketplaceClient {
    fn store(&self) -> Marketplace {
        self.store
    }

    #[instrument(skip(self, _files), fields(app_name = %config.app_name))]
    async fn submit(
        &self,
        config: &PublishConfig,
        _files: &FileTree,
    ) -> SitesmithResult<SubmissionStatus> {
        if let Some(reason) = &self.rejection {
            return Ok(SubmissionStatus::Rejected {
                reason: reason.clone(),
            });
        }
        let slug: String = config
            .app_name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        Ok(SubmissionStatus::Accepted {
            app_id: format!("sandbox.{slug}"),
            listing_url: format!("https://{}.sandbox.invalid/{slug}", self.store),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PublishConfig {
        PublishConfig::new("Acme Store")
    }

    #[tokio::test]
    async fn accepts_by_default() {
        let client = SandboxMarketplaceClient::new(Marketplace::AppStore);
        let status = client.submit(&config(), &FileTree::new()).await.unwrap();
        assert!(matches!(
            status,
            SubmissionStatus::Accepted { app_id, .. } if app_id == "sandbox.acme-store"
        ));
    }

    #[tokio::test]
    async fn rejecting_variant_rejects() {
        let client = SandboxMarketplaceClient::rejecting(Marketplace::PlayStore, "missing icon");
        let status = client.submit(&config(), &FileTree::new()).await.unwrap();
        assert_eq!(
            status,
            SubmissionStatus::Rejected {
                reason: "missing icon".into()
            }
        );
    }
}
