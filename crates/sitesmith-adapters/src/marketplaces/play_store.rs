//! Play Store submission adapter.

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

const DEFAULT_API_BASE: &str = "https://api.playpublisher.invalid/v3";

pub struct PlayStoreClient {
    key: String,
    client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct EditRequest<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    files: Vec<EditFile<'a>>,
}

#[derive(Debug, Serialize)]
struct EditFile<'a> {
    path: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct EditResponse {
    #[serde(rename = "packageName")]
    package_name: String,
    #[serde(rename = "listingUrl")]
    listing_url: Option<String>,
    #[serde(rename = "reviewNotes")]
    review_notes: Option<String>,
    state: String,
}

impl PlayStoreClient {
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
impl MarketplaceClient for PlayStoreClient {
    fn store(&self) -> Marketplace {
        Marketplace::PlayStore
    }

    #[instrument(skip(self, files), fields(app_name = %config.app_name))]
    async fn submit(
        &self,
        config: &PublishConfig,
        files: &FileTree,
    ) -> SitesmithResult<SubmissionStatus> {
        let body = EditRequest {
            title: &config.app_name,
            category: config.category.as_deref(),
            files: files
                .iter()
                .map(|(path, content)| EditFile { path, content })
                .collect(),
        };

        let edit: EditResponse = self
            .client
            .post(format!("{}/edits", self.api_base))
            .bearer_auth(&self.key)
            .json(&body)
            .send()
            .await
            .map_err(|e| submission_failed(Marketplace::PlayStore, e))?
            .error_for_status()
            .map_err(|e| submission_failed(Marketplace::PlayStore, e))?
            .json()
            .await
            .map_err(|e| submission_failed(Marketplace::PlayStore, e))?;

        if edit.state == "rejected" {
            let reason = edit
                .review_notes
                .unwrap_or_else(|| "rejected without review notes".to_string());
            return Ok(SubmissionStatus::Rejected { reason });
        }

        Ok(SubmissionStatus::Accepted {
            listing_url: edit.listing_url.unwrap_or_else(|| {
                format!("https://play.google.com/store/apps/details?id={}", edit.package_name)
            }),
            app_id: edit.package_name,
        })
    }
}
