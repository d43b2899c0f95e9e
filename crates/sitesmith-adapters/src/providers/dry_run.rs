//! Deterministic provider that never touches the network.
//!
//! Used by the CLI's `--dry-run` flag and the end-to-end tests. It
//! exercises the full orchestration state machine with predictable ids
//! and URLs.

use async_trait::async_trait;
use tracing::instrument;

use sitesmith_core::{
    application::ports::{DeployProvider, RemoteDeployment, RemoteSite},
    domain::{FileTree, Provider},
    error::SitesmithResult,
};

pub struct DryRunProvider {
    provider: Provider,
}

impl DryRunProvider {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl DeployProvider for DryRunProvider {
    fn provider(&self) -> Provider {
        self.provider
    }

    #[instrument(skip(self))]
    async fn provision(&self, project_name: &str) -> SitesmithResult<RemoteSite> {
        Ok(RemoteSite {
            id: format!("dry-run-{project_name}"),
            url: format!("https://{project_name}.{}.invalid", self.provider),
        })
    }

    #[instrument(skip(self, files), fields(file_count = files.len()))]
    async fn upload(&self, site_id: &str, files: &FileTree) -> SitesmithResult<RemoteDeployment> {
        Ok(RemoteDeployment {
            id: format!("{site_id}-deploy-{}", files.len()),
            url: format!("https://{site_id}.{}.invalid", self.provider),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dry_run_is_deterministic() {
        let provider = DryRunProvider::new(Provider::Netlify);
        let site = provider.provision("acme").await.unwrap();
        assert_eq!(site.id, "dry-run-acme");

        let files = FileTree::new().with_file("index.html", "<html></html>");
        let a = provider.upload(&site.id, &files).await.unwrap();
        let b = provider.upload(&site.id, &files).await.unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.url, "https://dry-run-acme.netlify.invalid");
    }
}
