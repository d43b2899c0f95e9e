//! Requirement classifier: free-text description → archetype + defaults.
//!
//! Pure and deterministic: lower-case the text, scan the ordered keyword
//! rows, first row with any hit wins. No keyword hit falls back to
//! `business` — deliberately not `custom`, preserving the established
//! product behaviour for unclassifiable descriptions.

use std::collections::BTreeSet;

use crate::domain::{
    blueprints::blueprint,
    error::DomainError,
    value_objects::Archetype,
};

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Ordered keyword rows. Evaluation order is significant: the first row
/// with any match wins, so earlier rows shadow later ones.
static KEYWORD_ROWS: &[(Archetype, &[&str])] = &[
    (
        Archetype::Commerce,
        &["store", "shop", "sell", "buy", "product", "cart"],
    ),
    (
        Archetype::Portfolio,
        &["portfolio", "showcase", "gallery", "artist"],
    ),
    (
        Archetype::Dining,
        &["restaurant", "food", "menu", "order", "dining"],
    ),
    (Archetype::Editorial, &["blog", "article", "news", "post"]),
    (
        Archetype::Business,
        &["company", "service", "professional", "corporate"],
    ),
    (
        Archetype::Landing,
        &["landing", "saas", "pricing", "signup"],
    ),
];

/// The classifier's output: an archetype plus the blueprint defaults the
/// site model starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub archetype: Archetype,
    pub pages: Vec<String>,
    pub features: BTreeSet<String>,
}

/// Classify a free-text description.
///
/// Rejects an empty (after trim) or over-long description with
/// [`DomainError::InvalidInput`] before any side effect. Never returns
/// `Custom`; unmatched text defaults to `Business`.
pub fn classify(description: &str) -> Result<Classification, DomainError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput("description is empty".into()));
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::InvalidInput(format!(
            "description exceeds {MAX_DESCRIPTION_LEN} characters"
        )));
    }

    let lowered = trimmed.to_lowercase();
    let archetype = KEYWORD_ROWS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(archetype, _)| *archetype)
        .unwrap_or(Archetype::Business);

    let def = blueprint(archetype);
    Ok(Classification {
        archetype,
        pages: def.pages.iter().map(|p| p.to_string()).collect(),
        features: def.features.iter().map(|f| f.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_keyword_maps_to_its_archetype() {
        for (archetype, keywords) in KEYWORD_ROWS {
            for kw in keywords.iter() {
                // Keywords shared across rows would be shadowed; assert the
                // row order resolves each one to its own archetype only when
                // it is the first match.
                let text = format!("please build something with a {kw}");
                let hit = classify(&text).unwrap().archetype;
                let first = KEYWORD_ROWS
                    .iter()
                    .find(|(_, kws)| kws.iter().any(|k| text.contains(k)))
                    .map(|(a, _)| *a)
                    .unwrap();
                assert_eq!(hit, first, "keyword '{kw}' for {archetype}");
            }
        }
    }

    #[test]
    fn commerce_description_classifies_as_commerce() {
        let c = classify("Create a modern e-commerce store for handmade jewelry").unwrap();
        assert_eq!(c.archetype, Archetype::Commerce);
        assert!(c.pages.contains(&"shop".to_string()));
    }

    #[test]
    fn unmatched_text_defaults_to_business() {
        let c = classify("something entirely unclassifiable").unwrap();
        assert_eq!(c.archetype, Archetype::Business);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = classify("MY RESTAURANT NEEDS A WEBSITE").unwrap();
        assert_eq!(c.archetype, Archetype::Dining);
    }

    #[test]
    fn earlier_rows_shadow_later_ones() {
        // "store" (commerce) appears before "blog" (editorial) in row order.
        let c = classify("a blog about my store").unwrap();
        assert_eq!(c.archetype, Archetype::Commerce);
    }

    #[test]
    fn empty_description_is_rejected() {
        assert!(matches!(
            classify("   "),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn overlong_description_is_rejected() {
        let text = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(classify(&text).is_err());
    }

    #[test]
    fn pages_are_never_empty() {
        let c = classify("whatever").unwrap();
        assert!(!c.pages.is_empty());
    }
}
