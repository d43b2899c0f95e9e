//! The `SiteModel` aggregate root.
//!
//! A `SiteModel` is the canonical structured representation of a generated
//! site/app. It is created by the classifier, filled in by the content
//! generator, and then treated as read-only input by every emitter.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the
//! responsibility of the application and CLI layers, not the domain.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    value_objects::{Archetype, ContentSlot, ElementType},
};

/// Design tokens consumed by the emitters' stylesheet/theme generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTokens {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub heading_font: String,
    pub body_font: String,
    pub spacing_scale: f32,
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            primary_color: "#1f2937".into(),
            secondary_color: "#f9fafb".into(),
            accent_color: "#3b82f6".into(),
            heading_font: "Inter".into(),
            body_font: "Inter".into(),
            spacing_scale: 1.0,
        }
    }
}

/// A generated piece of copy, keyed in `SiteModel::content_blocks` by its
/// slot name so regeneration overwrites rather than appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub kind: ContentSlot,
    pub text: String,
}

/// A positioned page element. `position` is a vertical slot index, not a
/// pixel offset; emitters turn it into layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub element_type: ElementType,
    pub content: String,
    pub position: u32,
}

impl Element {
    pub fn new(element_type: ElementType, content: impl Into<String>, position: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            element_type,
            content: content.into(),
            position,
        }
    }
}

/// Search metadata emitted into markup and descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// Canonical in-memory representation of a generated site/app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteModel {
    pub id: String,
    pub archetype: Archetype,
    /// The free-text description the model was classified from.
    pub description: String,
    pub pages: Vec<String>,
    pub features: BTreeSet<String>,
    pub design_tokens: DesignTokens,
    pub content_blocks: BTreeMap<String, ContentBlock>,
    pub elements: Vec<Element>,
    pub seo: Seo,
}

impl SiteModel {
    /// Create a model with an archetype and page list already resolved.
    ///
    /// Content blocks, design tokens, elements and seo start empty/default;
    /// the content generator fills them.
    pub fn new(
        archetype: Archetype,
        description: impl Into<String>,
        pages: Vec<String>,
        features: BTreeSet<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            archetype,
            description: description.into(),
            pages,
            features,
            design_tokens: DesignTokens::default(),
            content_blocks: BTreeMap::new(),
            elements: Vec::new(),
            seo: Seo::default(),
        }
    }

    /// Set or overwrite the content block for a slot.
    pub fn set_content(&mut self, slot: ContentSlot, text: impl Into<String>) {
        self.content_blocks.insert(
            slot.as_str().to_string(),
            ContentBlock {
                kind: slot,
                text: text.into(),
            },
        );
    }

    /// Text of a slot's content block, if filled.
    pub fn content(&self, slot: ContentSlot) -> Option<&str> {
        self.content_blocks
            .get(slot.as_str())
            .map(|b| b.text.as_str())
    }

    /// Elements sorted by position (stable for equal positions).
    pub fn elements_in_order(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.position);
        ordered
    }

    /// Validate structural invariants.
    ///
    /// Called by the emitters before producing an artifact. Element
    /// positions are non-negative by construction (`u32`).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.pages.is_empty() {
            return Err(DomainError::InvalidModel("page list is empty".into()));
        }

        let mut seen = BTreeSet::new();
        for element in &self.elements {
            if !seen.insert(element.id.as_str()) {
                return Err(DomainError::InvalidModel(format!(
                    "duplicate element id '{}'",
                    element.id
                )));
            }
        }

        Ok(())
    }
}
