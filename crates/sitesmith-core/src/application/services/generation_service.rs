//! Generation service: description → classified, content-filled SiteModel.
//!
//! Orchestrates the classifier, the blueprint defaults, and the remote
//! suggestion port. The remote call is strictly best-effort: every
//! failure mode (error, timeout, missing entitlement) falls back to the
//! deterministic per-archetype copy, so the pipeline cannot stall on a
//! remote outage.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ports::SuggestionClient, services::entitlement_gate::EntitlementGate},
    domain::{
        blueprints::{self, blueprint},
        classifier,
        entities::site_model::Element,
        ContentSlot, ElementType, PlanAction, SiteModel,
    },
    error::SitesmithResult,
};

/// Default bound on each remote suggestion call.
pub const DEFAULT_SUGGESTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Orchestrates classification and content/design generation.
pub struct GenerationService {
    suggestions: Arc<dyn SuggestionClient>,
    gate: EntitlementGate,
    suggestion_timeout: Duration,
}

impl GenerationService {
    pub fn new(suggestions: Arc<dyn SuggestionClient>, gate: EntitlementGate) -> Self {
        Self {
            suggestions,
            gate,
            suggestion_timeout: DEFAULT_SUGGESTION_TIMEOUT,
        }
    }

    pub fn with_suggestion_timeout(mut self, timeout: Duration) -> Self {
        self.suggestion_timeout = timeout;
        self
    }

    /// Classify a description without creating anything.
    pub fn classify(&self, description: &str) -> SitesmithResult<classifier::Classification> {
        Ok(classifier::classify(description)?)
    }

    /// Create a new, fully-filled site model from a description.
    ///
    /// Entitlement-gated on `create-project`; classification failures
    /// reject the request before any model exists.
    #[instrument(skip_all, fields(user_id))]
    pub async fn generate(&self, user_id: &str, description: &str) -> SitesmithResult<SiteModel> {
        self.gate.require(user_id, PlanAction::CreateProject)?;

        let classification = classifier::classify(description)?;
        info!(archetype = %classification.archetype, "description classified");

        let mut model = SiteModel::new(
            classification.archetype,
            description,
            classification.pages,
            classification.features,
        );

        self.fill_content(user_id, &mut model).await;
        self.gate.record_usage(user_id, PlanAction::CreateProject)?;

        info!(model_id = %model.id, "site model generated");
        Ok(model)
    }

    /// Re-fill content, design tokens, seo and starter elements in place.
    ///
    /// Idempotent: regenerating overwrites blocks and elements, it never
    /// appends duplicates.
    #[instrument(skip_all, fields(model_id = %model.id))]
    pub async fn regenerate(&self, user_id: &str, model: &mut SiteModel) -> SitesmithResult<()> {
        self.fill_content(user_id, model).await;
        Ok(())
    }

    async fn fill_content(&self, user_id: &str, model: &mut SiteModel) {
        for slot in ContentSlot::ALL {
            let text = self.slot_text(user_id, model, slot).await;
            model.set_content(slot, text);
        }

        let palette = blueprint(model.archetype).palette;
        model.design_tokens.primary_color = palette.primary_color.into();
        model.design_tokens.secondary_color = palette.secondary_color.into();
        model.design_tokens.accent_color = palette.accent_color.into();
        model.design_tokens.heading_font = palette.heading_font.into();
        model.design_tokens.body_font = palette.body_font.into();
        model.design_tokens.spacing_scale = palette.spacing_scale;

        model.seo = seo_for(model);
        model.elements = starter_elements(model);
    }

    /// Text for one slot: remote when entitled and reachable, otherwise
    /// the deterministic blueprint fallback. Never errors.
    async fn slot_text(&self, user_id: &str, model: &SiteModel, slot: ContentSlot) -> String {
        match self.gate.authorize(user_id, PlanAction::AiRequest) {
            Ok(true) => {}
            Ok(false) => {
                debug!(%slot, "ai not entitled, using fallback copy");
                return blueprints::fallback_text(model.archetype, slot);
            }
            Err(e) => {
                warn!(%slot, error = %e, "entitlement check failed, using fallback copy");
                return blueprints::fallback_text(model.archetype, slot);
            }
        }

        let call = self
            .suggestions
            .suggest(&model.description, model.archetype, slot);
        match tokio::time::timeout(self.suggestion_timeout, call).await {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                if let Err(e) = self.gate.record_usage(user_id, PlanAction::AiRequest) {
                    warn!(error = %e, "failed to record ai usage");
                }
                text.trim().to_string()
            }
            Ok(Ok(_)) => {
                debug!(%slot, "remote returned empty text, using fallback copy");
                blueprints::fallback_text(model.archetype, slot)
            }
            Ok(Err(e)) => {
                warn!(%slot, error = %e, "suggestion call failed, using fallback copy");
                blueprints::fallback_text(model.archetype, slot)
            }
            Err(_) => {
                warn!(%slot, timeout = ?self.suggestion_timeout, "suggestion call timed out");
                blueprints::fallback_text(model.archetype, slot)
            }
        }
    }
}

fn seo_for(model: &SiteModel) -> crate::domain::Seo {
    let headline = model
        .content(ContentSlot::Headline)
        .unwrap_or("A new website")
        .to_string();
    let description = model
        .content(ContentSlot::Description)
        .unwrap_or(&model.description)
        .to_string();

    let mut keywords: Vec<String> = vec![model.archetype.to_string()];
    keywords.extend(model.features.iter().cloned());

    crate::domain::Seo {
        title: headline,
        description,
        keywords,
    }
}

/// Starter elements: one heading, one paragraph, one call-to-action
/// button, stacked top to bottom. Replaces (not extends) any prior set.
fn starter_elements(model: &SiteModel) -> Vec<Element> {
    let headline = model
        .content(ContentSlot::Headline)
        .unwrap_or("Welcome")
        .to_string();
    let body = model
        .content(ContentSlot::Description)
        .unwrap_or("")
        .to_string();
    let cta = model
        .content(ContentSlot::CallToAction)
        .unwrap_or("Get started")
        .to_string();

    vec![
        Element::new(ElementType::Heading, headline, 0),
        Element::new(ElementType::Paragraph, body, 1),
        Element::new(ElementType::Button, cta, 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockEntitlementStore, MockSuggestionClient};
    use crate::domain::{EntitlementState, PlanLimits};

    fn gate(plan: PlanLimits) -> EntitlementGate {
        let mut store = MockEntitlementStore::new();
        store
            .expect_state()
            .returning(move |_| Ok(Some(EntitlementState::new("u1", "test", plan))));
        store.expect_increment().returning(|_, _, _| Ok(()));
        EntitlementGate::new(Arc::new(store))
    }

    fn denying_gate() -> EntitlementGate {
        let mut store = MockEntitlementStore::new();
        store.expect_state().returning(|_| Ok(None));
        EntitlementGate::new(Arc::new(store))
    }

    #[tokio::test]
    async fn generate_fills_every_slot() {
        let mut client = MockSuggestionClient::new();
        client
            .expect_suggest()
            .returning(|_, _, slot| Ok(format!("remote {slot}")));
        let service = GenerationService::new(Arc::new(client), gate(PlanLimits::pro()));

        let model = service.generate("u1", "a shop for plants").await.unwrap();
        assert_eq!(model.archetype, crate::domain::Archetype::Commerce);
        for slot in ContentSlot::ALL {
            assert_eq!(model.content(slot), Some(format!("remote {slot}").as_str()));
        }
        assert_eq!(model.elements.len(), 3);
        assert!(!model.seo.title.is_empty());
    }

    #[tokio::test]
    async fn remote_failure_falls_back_deterministically() {
        let mut client = MockSuggestionClient::new();
        client.expect_suggest().returning(|_, _, _| {
            Err(crate::application::error::ApplicationError::SuggestionUnavailable {
                reason: "offline".into(),
            }
            .into())
        });
        let service = GenerationService::new(Arc::new(client), gate(PlanLimits::pro()));

        let model = service.generate("u1", "a shop for plants").await.unwrap();
        let expected = blueprints::fallback_text(model.archetype, ContentSlot::Headline);
        assert_eq!(model.content(ContentSlot::Headline), Some(expected.as_str()));
    }

    #[tokio::test]
    async fn free_plan_skips_the_remote_call() {
        // The mock has no expectations; a remote call would panic.
        let client = MockSuggestionClient::new();
        let service = GenerationService::new(Arc::new(client), gate(PlanLimits::free()));

        let model = service.generate("u1", "portfolio for an artist").await.unwrap();
        assert!(model.content(ContentSlot::Headline).is_some());
    }

    #[tokio::test]
    async fn denied_user_gets_no_model() {
        let client = MockSuggestionClient::new();
        let service = GenerationService::new(Arc::new(client), denying_gate());
        assert!(service.generate("ghost", "a shop").await.is_err());
    }

    #[tokio::test]
    async fn empty_description_is_rejected_before_any_side_effect() {
        let client = MockSuggestionClient::new();
        let service = GenerationService::new(Arc::new(client), gate(PlanLimits::pro()));
        assert!(service.generate("u1", "   ").await.is_err());
    }

    #[tokio::test]
    async fn regenerate_overwrites_in_place() {
        let mut client = MockSuggestionClient::new();
        client
            .expect_suggest()
            .returning(|_, _, slot| Ok(format!("v2 {slot}")));
        let service = GenerationService::new(Arc::new(client), gate(PlanLimits::pro()));

        let mut model = service.generate("u1", "a shop for plants").await.unwrap();
        let blocks_before = model.content_blocks.len();
        service.regenerate("u1", &mut model).await.unwrap();
        assert_eq!(model.content_blocks.len(), blocks_before);
        assert_eq!(model.elements.len(), 3);
    }
}
