//! App Store submission adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use sitesmith_core::{
    application::ports::{MarketplaceClient, SubmissionStatus},
    domain::{FileTree, Marketplace, PublishConfig},
    error::SitesmithResult,
};

use super::submission_failed;
use crate::providers::http_client;

const DEFAULT_API_BASE: &str = "https://api.appstoreconnect.invalid/v1";

pub struct AppStoreClient {
    key: String,
    client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct SubmissionRequest<'a> {
    app_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    bundle: Vec<BundleFile<'a>>,
}

#[derive(Debug, Serialize)]
struct BundleFile<'a> {
    path: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum SubmissionResponse {
    Accepted { app_id: String, listing_url: String },
    Rejected { reason: String },
}

impl AppStoreClient {
    pub fn new(key: String) -> Self {
        Self {
            key,
            client: http_client(),
            api_base: DEFAULT_API_BASE.into(),
        }
    }

    /// Point the adapter at a different API root (test servers).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

#[async_trait]
impl MarketplaceClient for AppStoreClient {
    fn store(&self) -> Marketplace {
        Marketplace::AppStore
    }

    #[instrument(skip(self, files), fields(app_name = %config.app_name))]
    async fn submit(
        &self,
        config: &PublishConfig,
        files: &FileTree,
    ) -> SitesmithResult<SubmissionStatus> {
        let body = SubmissionRequest {
            app_name: &config.app_name,
            category: config.category.as_deref(),
            bundle: files
                .iter()
                .map(|(path, content)| BundleFile { path, content })
                .collect(),
        };

        let response: SubmissionResponse = self
            .client
            .post(format!("{}/submissions", self.api_base))
            .bearer_auth(&self.key)
            .json(&body)
            .send()
            .await
            .map_err(|e| submission_failed(Marketplace::AppStore, e))?
            .error_for_status()
            .map_err(|e| submission_failed(Marketplace::AppStore, e))?
            .json()
            .await
            .map_err(|e| submission_failed(Marketplace::AppStore, e))?;

        Ok(match response {
            SubmissionResponse::Accepted {
                app_id,
                listing_url,
            } => SubmissionStatus::Accepted {
                app_id,
                listing_url,
            },
            SubmissionResponse::Rejected { reason } => SubmissionStatus::Rejected { reason },
        })
    }
}
