//! Explicit provider credentials.
//!
//! Credentials are loaded once by the CLI's config layer and injected
//! here to build the provider/marketplace registries. Orchestration code
//! never reads the environment mid-flow: a provider without a token is
//! simply absent from the registry, and requests to it fail with
//! `ProviderNotConfigured`.

use sitesmith_core::prelude::{DeployProvider, MarketplaceClient};

use crate::marketplaces::{AppStoreClient, PlayStoreClient};
use crate::providers::{GithubProvider, NetlifyProvider, VercelProvider};

/// Tokens for every external service the pipeline can talk to.
///
/// Every field is optional; `None` means "not configured".
#[derive(Debug, Clone, Default)]
pub struct ProviderCredentials {
    pub github_token: Option<String>,
    pub netlify_token: Option<String>,
    pub vercel_token: Option<String>,
    pub app_store_key: Option<String>,
    pub play_store_key: Option<String>,
}

impl ProviderCredentials {
    /// Build deploy provider adapters for every configured token.
    pub fn deploy_providers(&self) -> Vec<Box<dyn DeployProvider>> {
        let mut providers: Vec<Box<dyn DeployProvider>> = Vec::new();
        if let Some(token) = &self.github_token {
            providers.push(Box::new(GithubProvider::new(token.clone())));
        }
        if let Some(token) = &self.netlify_token {
            providers.push(Box::new(NetlifyProvider::new(token.clone())));
        }
        if let Some(token) = &self.vercel_token {
            providers.push(Box::new(VercelProvider::new(token.clone())));
        }
        providers
    }

    /// Build marketplace adapters for every configured key.
    pub fn marketplace_clients(&self) -> Vec<Box<dyn MarketplaceClient>> {
        let mut clients: Vec<Box<dyn MarketplaceClient>> = Vec::new();
        if let Some(key) = &self.app_store_key {
            clients.push(Box::new(AppStoreClient::new(key.clone())));
        }
        if let Some(key) = &self.play_store_key {
            clients.push(Box::new(PlayStoreClient::new(key.clone())));
        }
        clients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tokens_mean_missing_adapters() {
        let creds = ProviderCredentials {
            netlify_token: Some("tok".into()),
            ..Default::default()
        };
        assert_eq!(creds.deploy_providers().len(), 1);
        assert!(creds.marketplace_clients().is_empty());
    }
}
