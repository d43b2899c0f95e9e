//! GitHub adapter: repository per project, one commit per file upload.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use sitesmith_core::{
    application::ports::{DeployProvider, RemoteDeployment, RemoteSite},
    domain::{FileTree, Provider},
    error::SitesmithResult,
};

use super::{http_client, request_failed};

const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Deploys by pushing the artifact's files into a repository via the
/// contents API.
pub struct GithubProvider {
    token: String,
    client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
    description: &'a str,
    auto_init: bool,
}

#[derive(Debug, Deserialize)]
struct RepoResponse {
    full_name: String,
    html_url: String,
}

#[derive(Debug, Serialize)]
struct PutContentsRequest {
    message: String,
    // The contents API only accepts Base64-encoded file bodies.
    content: String,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    login: String,
}

fn contents_request(path: &str, content: &str) -> PutContentsRequest {
    PutContentsRequest {
        message: format!("sitesmith: update {path}"),
        content: BASE64.encode(content),
    }
}

/// Site handle for a repository that already exists. The contents API is
/// addressed by `owner/name`, so the id must carry both segments.
fn existing_site(login: &str, project_name: &str) -> RemoteSite {
    RemoteSite {
        id: format!("{login}/{project_name}"),
        url: format!("https://github.com/{login}/{project_name}"),
    }
}

#[derive(Debug, Deserialize)]
struct PutContentsResponse {
    commit: CommitRef,
}

#[derive(Debug, Deserialize)]
struct CommitRef {
    sha: String,
}

impl GithubProvider {
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

    /// Login of the account the token belongs to.
    async fn authenticated_login(&self) -> SitesmithResult<String> {
        let user: UserResponse = self
            .client
            .get(format!("{}/user", self.api_base))
            .bearer_auth(&self.token)
            .header("User-Agent", "sitesmith")
            .send()
            .await
            .map_err(|e| request_failed(Provider::Github, e))?
            .error_for_status()
            .map_err(|e| request_failed(Provider::Github, e))?
            .json()
            .await
            .map_err(|e| request_failed(Provider::Github, e))?;
        Ok(user.login)
    }
}

#[async_trait]
impl DeployProvider for GithubProvider {
    fn provider(&self) -> Provider {
        Provider::Github
    }

    #[instrument(skip(self))]
    async fn provision(&self, project_name: &str) -> SitesmithResult<RemoteSite> {
        let response = self
            .client
            .post(format!("{}/user/repos", self.api_base))
            .bearer_auth(&self.token)
            .header("User-Agent", "sitesmith")
            .json(&CreateRepoRequest {
                name: project_name,
                description: "Generated by sitesmith",
                auto_init: false,
            })
            .send()
            .await
            .map_err(|e| request_failed(Provider::Github, e))?;

        // 422 means the repository already exists for this account;
        // reuse it rather than failing the whole deployment. The create
        // response would have carried `full_name`, so resolve the owner
        // from the token instead.
        if response.status() == StatusCode::UNPROCESSABLE_ENTITY {
            debug!(project_name, "repository already exists, reusing");
            let login = self.authenticated_login().await?;
            return Ok(existing_site(&login, project_name));
        }

        let repo: RepoResponse = response
            .error_for_status()
            .map_err(|e| request_failed(Provider::Github, e))?
            .json()
            .await
            .map_err(|e| request_failed(Provider::Github, e))?;

        Ok(RemoteSite {
            id: repo.full_name,
            url: repo.html_url,
        })
    }

    #[instrument(skip(self, files), fields(file_count = files.len()))]
    async fn upload(&self, site_id: &str, files: &FileTree) -> SitesmithResult<RemoteDeployment> {
        let mut last_commit = String::new();

        for (path, content) in files.iter() {
            let response: PutContentsResponse = self
                .client
                .put(format!("{}/repos/{site_id}/contents/{path}", self.api_base))
                .bearer_auth(&self.token)
                .header("User-Agent", "sitesmith")
                .json(&contents_request(path, content))
                .send()
                .await
                .map_err(|e| request_failed(Provider::Github, e))?
                .error_for_status()
                .map_err(|e| request_failed(Provider::Github, e))?
                .json()
                .await
                .map_err(|e| request_failed(Provider::Github, e))?;

            last_commit = response.commit.sha;
        }

        Ok(RemoteDeployment {
            id: last_commit,
            url: format!("https://github.com/{site_id}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_are_base64_encoded_for_the_api() {
        let req = contents_request("index.html", "<h1>hi</h1>");
        assert_eq!(req.content, "PGgxPmhpPC9oMT4=");
        assert_eq!(req.message, "sitesmith: update index.html");
    }

    #[test]
    fn reused_repository_id_carries_the_owner() {
        let site = existing_site("octocat", "plant-shop");
        assert_eq!(site.id, "octocat/plant-shop");
        assert_eq!(site.url, "https://github.com/octocat/plant-shop");
    }
}
