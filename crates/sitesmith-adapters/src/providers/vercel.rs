//! Vercel adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use sitesmith_core::{
    application::ports::{DeployProvider, RemoteDeployment, RemoteSite},
    domain::{FileTree, Provider},
    error::SitesmithResult,
};

use super::{http_client, request_failed};

const DEFAULT_API_BASE: &str = "https://api.vercel.com";

pub struct VercelProvider {
    token: String,
    client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct CreateProjectRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct DeploymentFile<'a> {
    file: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateDeploymentRequest<'a> {
    name: &'a str,
    files: Vec<DeploymentFile<'a>>,
    target: &'a str,
}

#[derive(Debug, Deserialize)]
struct DeploymentResponse {
    id: String,
    url: String,
}

impl VercelProvider {
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
impl DeployProvider for VercelProvider {
    fn provider(&self) -> Provider {
        Provider::Vercel
    }

    #[instrument(skip(self))]
    async fn provision(&self, project_name: &str) -> SitesmithResult<RemoteSite> {
        let project: ProjectResponse = self
            .client
            .post(format!("{}/v10/projects", self.api_base))
            .bearer_auth(&self.token)
            .json(&CreateProjectRequest { name: project_name })
            .send()
            .await
            .map_err(|e| request_failed(Provider::Vercel, e))?
            .error_for_status()
            .map_err(|e| request_failed(Provider::Vercel, e))?
            .json()
            .await
            .map_err(|e| request_failed(Provider::Vercel, e))?;

        Ok(RemoteSite {
            url: format!("https://{}.vercel.app", project.name),
            id: project.id,
        })
    }

    #[instrument(skip(self, files), fields(file_count = files.len()))]
    async fn upload(&self, site_id: &str, files: &FileTree) -> SitesmithResult<RemoteDeployment> {
        let body = CreateDeploymentRequest {
            name: site_id,
            files: files
                .iter()
                .map(|(file, data)| DeploymentFile { file, data })
                .collect(),
            target: "production",
        };

        let deployment: DeploymentResponse = self
            .client
            .post(format!("{}/v13/deployments", self.api_base))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| request_failed(Provider::Vercel, e))?
            .error_for_status()
            .map_err(|e| request_failed(Provider::Vercel, e))?
            .json()
            .await
            .map_err(|e| request_failed(Provider::Vercel, e))?;

        Ok(RemoteDeployment {
            id: deployment.id,
            url: format!("https://{}", deployment.url),
        })
    }
}
