//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.  Credentials are
//! resolved here, bundled into a [`ProviderCredentials`] value, and
//! injected into the services at construction time — nothing reads the
//! environment mid-flow.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`SITESMITH_*`, loaded after `.env`)
//! 3. Built-in defaults (always present)

use serde::{Deserialize, Serialize};

use sitesmith_adapters::ProviderCredentials;
use sitesmith_core::domain::PlanLimits;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The acting user and their plan.
    pub user: UserConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Credentials for providers, marketplaces and the suggestion service.
    #[serde(skip)]
    pub credentials: CredentialConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// User id the entitlement gate sees. Single-user binary, so this is
    /// a stable local identifier rather than an account lookup.
    pub id: String,
    /// Plan name: `free`, `pro`, or `unlimited`.
    pub plan: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

/// Raw secrets from the environment. Never serialized, never logged.
#[derive(Debug, Clone, Default)]
pub struct CredentialConfig {
    pub provider: ProviderCredentials,
    pub suggestion_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user: UserConfig {
                id: "local".into(),
                plan: "pro".into(),
            },
            output: OutputConfig { no_color: false },
            credentials: CredentialConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults overlaid with `SITESMITH_*`
    /// environment variables (`.env` has already been applied by `main`).
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(id) = std::env::var("SITESMITH_USER") {
            config.user.id = id;
        }
        if let Ok(plan) = std::env::var("SITESMITH_PLAN") {
            config.user.plan = plan;
        }

        config.credentials = CredentialConfig {
            provider: ProviderCredentials {
                github_token: env_opt("SITESMITH_GITHUB_TOKEN"),
                netlify_token: env_opt("SITESMITH_NETLIFY_TOKEN"),
                vercel_token: env_opt("SITESMITH_VERCEL_TOKEN"),
                app_store_key: env_opt("SITESMITH_APP_STORE_KEY"),
                play_store_key: env_opt("SITESMITH_PLAY_STORE_KEY"),
            },
            suggestion_api_key: env_opt("SITESMITH_SUGGESTION_API_KEY"),
        };

        config.plan_limits()?; // reject unknown plan names at startup
        Ok(config)
    }

    /// Quota limits for the configured plan name.
    pub fn plan_limits(&self) -> anyhow::Result<PlanLimits> {
        match self.user.plan.as_str() {
            "free" => Ok(PlanLimits::free()),
            "pro" => Ok(PlanLimits::pro()),
            "unlimited" => Ok(PlanLimits::unlimited()),
            other => anyhow::bail!(
                "unknown plan '{other}': expected 'free', 'pro', or 'unlimited'"
            ),
        }
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_is_pro() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.user.plan, "pro");
        assert!(cfg.plan_limits().is_ok());
    }

    #[test]
    fn unknown_plan_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.user.plan = "platinum".into();
        assert!(cfg.plan_limits().is_err());
    }

    #[test]
    fn default_credentials_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.credentials.provider.deploy_providers().is_empty());
        assert!(cfg.credentials.suggestion_api_key.is_none());
    }
}
