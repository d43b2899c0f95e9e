//! Content suggestion clients.
//!
//! `HttpSuggestionClient` talks to the remote suggestion service;
//! `CannedSuggestionClient` answers deterministically without I/O. Both
//! are best-effort by contract: callers keep their own fallback copy and
//! treat any error here as "use the fallback".

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use sitesmith_core::{
    application::{ports::SuggestionClient, ApplicationError},
    domain::{Archetype, ContentSlot},
    error::SitesmithResult,
};

use crate::providers::http_client;

const DEFAULT_API_BASE: &str = "https://suggest.sitesmith.invalid/v1";

pub struct HttpSuggestionClient {
    api_key: String,
    client: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct SuggestRequest<'a> {
    description: &'a str,
    archetype: &'a str,
    slot: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    text: String,
}

impl HttpSuggestionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: http_client(),
            api_base: DEFAULT_API_BASE.into(),
        }
    }

    /// Point the client at a different API root (test servers).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn unavailable(error: impl std::fmt::Display) -> ApplicationError {
        ApplicationError::SuggestionUnavailable {
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl SuggestionClient for HttpSuggestionClient {
    #[instrument(skip(self, description), fields(%archetype, %slot))]
    async fn suggest(
        &self,
        description: &str,
        archetype: Archetype,
        slot: ContentSlot,
    ) -> SitesmithResult<String> {
        let response: SuggestResponse = self
            .client
            .post(format!("{}/suggest", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&SuggestRequest {
                description,
                archetype: archetype.as_str(),
                slot: slot.as_str(),
            })
            .send()
            .await
            .map_err(Self::unavailable)?
            .error_for_status()
            .map_err(Self::unavailable)?
            .json()
            .await
            .map_err(Self::unavailable)?;

        Ok(response.text)
    }
}

/// Answers every request with a short deterministic phrase derived from
/// the inputs. Used offline and in tests.
#[derive(Debug, Clone, Default)]
pub struct CannedSuggestionClient;

impl CannedSuggestionClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SuggestionClient for CannedSuggestionClient {
    async fn suggest(
        &self,
        description: &str,
        archetype: Archetype,
        slot: ContentSlot,
    ) -> SitesmithResult<String> {
        let topic = description.split_whitespace().take(4).collect::<Vec<_>>().join(" ");
        Ok(format!("[{archetype}/{slot}] {topic}"))
    }
}
