//! Netlify adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

use sitesmith_core::{
    application::ports::{DeployProvider, RemoteDeployment, RemoteSite},
    domain::{FileTree, Provider},
    error::SitesmithResult,
};

use super::{http_client, request_failed};

const DEFAULT_API_BASE: &str = "https://api.netlify.com/api/v1";

pub struct NetlifyProvider {
    token: String,
    client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct CreateSiteRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct SiteResponse {
    id: String,
    ssl_url: String,
}

/// Netlify accepts an inline `files` map of path to content for small
/// deploys; the packaged sites here are always small.
#[derive(Debug, Serialize)]
struct CreateDeployRequest<'a> {
    files: BTreeMap<&'a str, &'a str>,
}

#[derive(Debug, Deserialize)]
struct DeployResponse {
    id: String,
    #[serde(default)]
    ssl_url: Option<String>,
    url: String,
}

impl NetlifyProvider {
    pub fn new(token: String) -> Self {
        Self {
            token,
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
impl DeployProvider for NetlifyProvider {
    fn provider(&self) -> Provider {
        Provider::Netlify
    }

    #[instrument(skip(self))]
    async fn provision(&self, project_name: &str) -> SitesmithResult<RemoteSite> {
        let site: SiteResponse = self
            .client
            .post(format!("{}/sites", self.api_base))
            .bearer_auth(&self.token)
            .json(&CreateSiteRequest { name: project_name })
            .send()
            .await
            .map_err(|e| request_failed(Provider::Netlify, e))?
            .error_for_status()
            .map_err(|e| request_failed(Provider::Netlify, e))?
            .json()
            .await
            .map_err(|e| request_failed(Provider::Netlify, e))?;

        Ok(RemoteSite {
            id: site.id,
            url: site.ssl_url,
        })
    }

    #[instrument(skip(self, files), fields(file_count = files.len()))]
    async fn upload(&self, site_id: &str, files: &FileTree) -> SitesmithResult<RemoteDeployment> {
        let body = CreateDeployRequest {
            files: files.iter().collect(),
        };

        let deploy: DeployResponse = self
            .client
            .post(format!("{}/sites/{site_id}/deploys", self.api_base))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| request_failed(Provider::Netlify, e))?
            .error_for_status()
            .map_err(|e| request_failed(Provider::Netlify, e))?
            .json()
            .await
            .map_err(|e| request_failed(Provider::Netlify, e))?;

        let url = deploy.ssl_url.unwrap_or(deploy.url);
        Ok(RemoteDeployment { id: deploy.id, url })
    }
}
