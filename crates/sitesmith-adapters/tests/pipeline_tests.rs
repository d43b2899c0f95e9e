//! End-to-end pipeline tests over the in-memory adapters.
//!
//! These wire the real services to the deterministic adapters (canned
//! suggestions, dry-run providers, sandbox marketplaces, in-memory
//! stores) and drive a request from description to deployed/published.

use std::sync::Arc;

use sitesmith_core::{
    application::{
        ports::EntitlementStore,
        services::{DeployService, EntitlementGate, GenerationService, PublishService},
    },
    domain::{
        emitter, Archetype, DeployConfig, DeployState, EntitlementState, Marketplace, PlanAction,
        PlanLimits, Provider, PublishConfig, PublishState, TargetKind,
    },
};

use sitesmith_adapters::{
    CannedSuggestionClient, DryRunProvider, InMemoryDeploymentStore, InMemoryEntitlementStore,
    InMemoryPublicationStore, SandboxMarketplaceClient,
};

fn seeded_entitlements(plan: PlanLimits) -> Arc<InMemoryEntitlementStore> {
    Arc::new(InMemoryEntitlementStore::with_states([
        EntitlementState::new("u1", "test-plan", plan),
    ]))
}

#[tokio::test]
async fn commerce_description_ends_deployed_with_url() {
    let entitlements = seeded_entitlements(PlanLimits::pro());
    let gate = EntitlementGate::new(entitlements.clone());

    let generation = GenerationService::new(Arc::new(CannedSuggestionClient::new()), gate.clone());
    let deploy = DeployService::new(
        vec![Box::new(DryRunProvider::new(Provider::Netlify))],
        Arc::new(InMemoryDeploymentStore::new()),
        gate,
    );

    let model = generation
        .generate("u1", "an online store selling ceramic mugs")
        .await
        .unwrap();
    assert_eq!(model.archetype, Archetype::Commerce);

    let artifact = emitter::emit(&model, TargetKind::Web).unwrap();
    assert!(artifact.files().contains("index.html"));

    let record = deploy
        .deploy("u1", &artifact, Provider::Netlify, DeployConfig::new("mug-shop"))
        .await
        .unwrap();

    assert_eq!(record.state(), DeployState::Deployed);
    assert!(record.public_url.as_deref().unwrap().starts_with("https://"));

    let history = deploy.history(artifact.id()).unwrap();
    assert_eq!(history.len(), 1);

    // Generation and deployment each consumed their quota.
    let state = entitlements.state("u1").unwrap().unwrap();
    assert_eq!(state.usage.projects_created, 1);
    assert_eq!(state.usage.deployments_this_period, 1);
}

#[tokio::test]
async fn empty_description_is_rejected() {
    let gate = EntitlementGate::new(seeded_entitlements(PlanLimits::pro()));
    let generation = GenerationService::new(Arc::new(CannedSuggestionClient::new()), gate);
    assert!(generation.generate("u1", "   ").await.is_err());
}

#[tokio::test]
async fn mobile_artifact_publishes_through_the_sandbox() {
    let gate = EntitlementGate::new(seeded_entitlements(PlanLimits::pro()));
    let generation = GenerationService::new(Arc::new(CannedSuggestionClient::new()), gate.clone());
    let publish = PublishService::new(
        vec![Box::new(SandboxMarketplaceClient::new(Marketplace::PlayStore))],
        Arc::new(InMemoryPublicationStore::new()),
        gate,
    );

    let model = generation
        .generate("u1", "a portfolio app for a photographer")
        .await
        .unwrap();
    let artifact = emitter::emit(&model, TargetKind::ReactNative).unwrap();

    let record = publish
        .publish("u1", &artifact, Marketplace::PlayStore, PublishConfig::new("Lens"))
        .await
        .unwrap();

    assert_eq!(record.state(), PublishState::Submitted);
    assert!(record.store_app_id.is_some());
    assert!(record.store_url.is_some());
}

#[tokio::test]
async fn web_artifact_cannot_be_published() {
    let gate = EntitlementGate::new(seeded_entitlements(PlanLimits::pro()));
    let generation = GenerationService::new(Arc::new(CannedSuggestionClient::new()), gate.clone());
    let publish = PublishService::new(
        vec![Box::new(SandboxMarketplaceClient::new(Marketplace::AppStore))],
        Arc::new(InMemoryPublicationStore::new()),
        gate,
    );

    let model = generation.generate("u1", "a landing page").await.unwrap();
    let artifact = emitter::emit(&model, TargetKind::Web).unwrap();

    let result = publish
        .publish("u1", &artifact, Marketplace::AppStore, PublishConfig::new("Web"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn marketplace_rejection_lands_in_the_record() {
    let gate = EntitlementGate::new(seeded_entitlements(PlanLimits::pro()));
    let generation = GenerationService::new(Arc::new(CannedSuggestionClient::new()), gate.clone());
    let publish = PublishService::new(
        vec![Box::new(SandboxMarketplaceClient::rejecting(
            Marketplace::AppStore,
            "missing privacy policy",
        ))],
        Arc::new(InMemoryPublicationStore::new()),
        gate,
    );

    let model = generation.generate("u1", "a recipe app").await.unwrap();
    let artifact = emitter::emit(&model, TargetKind::Flutter).unwrap();

    let record = publish
        .publish("u1", &artifact, Marketplace::AppStore, PublishConfig::new("Recipes"))
        .await
        .unwrap();

    assert_eq!(record.state(), PublishState::Rejected);
    assert_eq!(record.rejection_reason.as_deref(), Some("missing privacy policy"));
}

#[tokio::test]
async fn free_plan_exhausts_its_deployment_quota() {
    let entitlements = seeded_entitlements(PlanLimits::free());
    let gate = EntitlementGate::new(entitlements.clone());
    let generation = GenerationService::new(Arc::new(CannedSuggestionClient::new()), gate.clone());
    let deploy = DeployService::new(
        vec![Box::new(DryRunProvider::new(Provider::Github))],
        Arc::new(InMemoryDeploymentStore::new()),
        gate,
    );

    let model = generation.generate("u1", "a blog").await.unwrap();
    let artifact = emitter::emit(&model, TargetKind::Web).unwrap();

    for _ in 0..PlanLimits::free().max_deployments {
        let record = deploy
            .deploy("u1", &artifact, Provider::Github, DeployConfig::new("blog"))
            .await
            .unwrap();
        assert_eq!(record.state(), DeployState::Deployed);
    }

    let denied = deploy
        .deploy("u1", &artifact, Provider::Github, DeployConfig::new("blog"))
        .await;
    assert!(denied.is_err());

    let state = entitlements.state("u1").unwrap().unwrap();
    assert_eq!(state.usage.deployments_this_period as i64, PlanLimits::free().max_deployments);
}

#[tokio::test]
async fn concurrent_usage_recording_loses_nothing() {
    let entitlements = seeded_entitlements(PlanLimits::unlimited());
    let gate = EntitlementGate::new(entitlements.clone());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let gate = gate.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..25 {
                gate.record_usage("u1", PlanAction::AiRequest).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let state = entitlements.state("u1").unwrap().unwrap();
    assert_eq!(state.usage.ai_requests_this_period, 400);
}
