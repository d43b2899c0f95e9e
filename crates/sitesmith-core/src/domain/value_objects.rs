//! Domain value objects: archetypes, targets, providers, stores, states.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO pipeline logic. Default pages, features and palettes live
//! in `blueprints.rs`; keyword tables live in `classifier.rs`. This file's
//! only job is to define the types, their string representations, and
//! their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Archetype ─────────────────────────────────────────────────────────────────

/// A coarse category of website/app driving default pages, features and
/// design.
///
/// To add a new archetype: add a variant here, a keyword row in
/// `classifier.rs`, and a blueprint row in `blueprints.rs`. No other files
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Commerce,
    Portfolio,
    Dining,
    Editorial,
    Business,
    Landing,
    Custom,
}

impl Archetype {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Commerce => "commerce",
            Self::Portfolio => "portfolio",
            Self::Dining => "dining",
            Self::Editorial => "editorial",
            Self::Business => "business",
            Self::Landing => "landing",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "commerce" | "store" | "shop" => Ok(Self::Commerce),
            "portfolio" => Ok(Self::Portfolio),
            "dining" | "restaurant" => Ok(Self::Dining),
            "editorial" | "blog" => Ok(Self::Editorial),
            "business" => Ok(Self::Business),
            "landing" => Ok(Self::Landing),
            "custom" => Ok(Self::Custom),
            other => Err(DomainError::UnknownValue {
                field: "archetype",
                value: other.into(),
            }),
        }
    }
}

// ── TargetKind ────────────────────────────────────────────────────────────────

/// The platform an artifact is emitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// Static web bundle (markup, stylesheet, script, descriptor).
    Web,
    /// Cross-platform mobile project scaffold (JS entry point).
    ReactNative,
    /// Cross-platform mobile project scaffold (Dart entry point).
    Flutter,
    /// Installable web app (web bundle + manifest + offline worker).
    Pwa,
}

impl TargetKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::ReactNative => "react-native",
            Self::Flutter => "flutter",
            Self::Pwa => "pwa",
        }
    }

    /// Whether artifacts of this kind can be submitted to a marketplace.
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::ReactNative | Self::Flutter)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "web" | "static" => Ok(Self::Web),
            "react-native" | "reactnative" | "rn" => Ok(Self::ReactNative),
            "flutter" => Ok(Self::Flutter),
            "pwa" | "installable-web-app" => Ok(Self::Pwa),
            other => Err(DomainError::UnsupportedTarget {
                target: other.into(),
                reason: "not a known emitter target".into(),
            }),
        }
    }
}

// ── Provider ──────────────────────────────────────────────────────────────────

/// An external hosting or version-control service used for deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Github,
    Netlify,
    Vercel,
}

impl Provider {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Netlify => "netlify",
            Self::Vercel => "vercel",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github" | "gh" => Ok(Self::Github),
            "netlify" => Ok(Self::Netlify),
            "vercel" => Ok(Self::Vercel),
            other => Err(DomainError::UnknownValue {
                field: "provider",
                value: other.into(),
            }),
        }
    }
}

// ── Marketplace ───────────────────────────────────────────────────────────────

/// An external distribution channel for mobile artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marketplace {
    AppStore,
    PlayStore,
}

impl Marketplace {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AppStore => "app-store",
            Self::PlayStore => "play-store",
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Marketplace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "app-store" | "appstore" | "ios" => Ok(Self::AppStore),
            "play-store" | "playstore" | "android" => Ok(Self::PlayStore),
            other => Err(DomainError::UnknownValue {
                field: "marketplace",
                value: other.into(),
            }),
        }
    }
}

// ── Record states ─────────────────────────────────────────────────────────────

/// Deployment state machine:
/// `idle → building → deploying → deployed` or `→ failed` from any
/// non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployState {
    Idle,
    Building,
    Deploying,
    Deployed,
    Failed,
}

impl DeployState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Building => "building",
            Self::Deploying => "deploying",
            Self::Deployed => "deployed",
            Self::Failed => "failed",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Deployed | Self::Failed)
    }
}

impl fmt::Display for DeployState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication state machine: `idle → submitting → submitted` or
/// `→ rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishState {
    Idle,
    Submitting,
    Submitted,
    Rejected,
}

impl PublishState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Submitted => "submitted",
            Self::Rejected => "rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Submitted | Self::Rejected)
    }
}

impl fmt::Display for PublishState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PlanAction ────────────────────────────────────────────────────────────────

/// An entitlement-gated action. Every entry point that touches a
/// quota-limited resource authorizes one of these first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanAction {
    CreateProject,
    Deploy,
    AiRequest,
}

impl PlanAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateProject => "create-project",
            Self::Deploy => "deploy",
            Self::AiRequest => "ai-request",
        }
    }
}

impl fmt::Display for PlanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ContentSlot ───────────────────────────────────────────────────────────────

/// A content slot the generator fills, remotely or from the local
/// per-archetype fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentSlot {
    Headline,
    Description,
    Features,
    CallToAction,
    Testimonial,
}

impl ContentSlot {
    /// All slots, in fill order.
    pub const ALL: [Self; 5] = [
        Self::Headline,
        Self::Description,
        Self::Features,
        Self::CallToAction,
        Self::Testimonial,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Headline => "headline",
            Self::Description => "description",
            Self::Features => "features",
            Self::CallToAction => "call-to-action",
            Self::Testimonial => "testimonial",
        }
    }
}

impl fmt::Display for ContentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ElementType ───────────────────────────────────────────────────────────────

/// The type of a positioned page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Heading,
    Paragraph,
    Button,
    Image,
}

impl ElementType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Button => "button",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_kind_round_trips() {
        for kind in [
            TargetKind::Web,
            TargetKind::ReactNative,
            TargetKind::Flutter,
            TargetKind::Pwa,
        ] {
            assert_eq!(kind.as_str().parse::<TargetKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_target_is_unsupported() {
        let err = "win32".parse::<TargetKind>().unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedTarget { .. }));
    }

    #[test]
    fn only_mobile_kinds_publish() {
        assert!(TargetKind::ReactNative.is_mobile());
        assert!(TargetKind::Flutter.is_mobile());
        assert!(!TargetKind::Web.is_mobile());
        assert!(!TargetKind::Pwa.is_mobile());
    }

    #[test]
    fn terminal_states() {
        assert!(DeployState::Deployed.is_terminal());
        assert!(DeployState::Failed.is_terminal());
        assert!(!DeployState::Deploying.is_terminal());
        assert!(PublishState::Rejected.is_terminal());
        assert!(!PublishState::Submitting.is_terminal());
    }
}
