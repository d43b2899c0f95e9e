//! Archetype blueprint registry.
//!
//! Each archetype is described exactly once by its [`BlueprintDef`]:
//! default page list, default feature tags, the design palette, and the
//! deterministic fallback copy used when the remote suggestion call is
//! unavailable. All lookups are O(n) table scans over a static slice.
//!
//! # Adding a New Archetype
//!
//! 1. Add a variant to `Archetype` in `value_objects.rs`
//! 2. Add one [`BlueprintDef`] entry to [`BLUEPRINT_REGISTRY`]
//! 3. Add a keyword row in `classifier.rs` if it should be detectable
//! 4. That's it — no other files change

use crate::domain::value_objects::{Archetype, ContentSlot};

/// A design palette: the token values an archetype starts from.
#[derive(Debug, Clone, Copy)]
pub struct PaletteDef {
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
    pub spacing_scale: f32,
}

/// Single source of truth for one archetype's defaults.
#[derive(Debug, Clone, Copy)]
pub struct BlueprintDef {
    pub archetype: Archetype,
    /// Default page list; always non-empty (site model invariant).
    pub pages: &'static [&'static str],
    /// Default feature tags.
    pub features: &'static [&'static str],
    pub palette: PaletteDef,
    /// Noun phrase interpolated into fallback copy ("online store", ...).
    pub subject: &'static str,
}

/// Palette used when an archetype has no explicit registry row
/// (`Archetype::Custom`).
pub const DEFAULT_PALETTE: PaletteDef = PaletteDef {
    primary_color: "#1f2937",
    secondary_color: "#f9fafb",
    accent_color: "#3b82f6",
    heading_font: "Inter",
    body_font: "Inter",
    spacing_scale: 1.0,
};

pub static BLUEPRINT_REGISTRY: &[BlueprintDef] = &[
    BlueprintDef {
        archetype: Archetype::Commerce,
        pages: &["home", "shop", "product", "cart", "checkout", "contact"],
        features: &["product-catalog", "shopping-cart", "checkout", "search"],
        palette: PaletteDef {
            primary_color: "#0f172a",
            secondary_color: "#fef3c7",
            accent_color: "#f59e0b",
            heading_font: "Playfair Display",
            body_font: "Inter",
            spacing_scale: 1.0,
        },
        subject: "online store",
    },
    BlueprintDef {
        archetype: Archetype::Portfolio,
        pages: &["home", "work", "about", "contact"],
        features: &["gallery", "project-showcase", "contact-form"],
        palette: PaletteDef {
            primary_color: "#18181b",
            secondary_color: "#fafafa",
            accent_color: "#e11d48",
            heading_font: "Space Grotesk",
            body_font: "Inter",
            spacing_scale: 1.25,
        },
        subject: "portfolio",
    },
    BlueprintDef {
        archetype: Archetype::Dining,
        pages: &["home", "menu", "reservations", "about", "contact"],
        features: &["menu-display", "online-ordering", "reservations"],
        palette: PaletteDef {
            primary_color: "#431407",
            secondary_color: "#fff7ed",
            accent_color: "#ea580c",
            heading_font: "Cormorant Garamond",
            body_font: "Lato",
            spacing_scale: 1.0,
        },
        subject: "restaurant",
    },
    BlueprintDef {
        archetype: Archetype::Editorial,
        pages: &["home", "articles", "about", "archive"],
        features: &["article-feed", "categories", "newsletter-signup"],
        palette: PaletteDef {
            primary_color: "#111827",
            secondary_color: "#ffffff",
            accent_color: "#2563eb",
            heading_font: "Merriweather",
            body_font: "Source Serif Pro",
            spacing_scale: 1.1,
        },
        subject: "publication",
    },
    BlueprintDef {
        archetype: Archetype::Business,
        pages: &["home", "services", "about", "team", "contact"],
        features: &["service-overview", "team-profiles", "contact-form"],
        palette: PaletteDef {
            primary_color: "#1e3a5f",
            secondary_color: "#f8fafc",
            accent_color: "#0ea5e9",
            heading_font: "IBM Plex Sans",
            body_font: "IBM Plex Sans",
            spacing_scale: 1.0,
        },
        subject: "business",
    },
    BlueprintDef {
        archetype: Archetype::Landing,
        pages: &["home"],
        features: &["hero", "pricing-table", "signup-form"],
        palette: PaletteDef {
            primary_color: "#0c0a09",
            secondary_color: "#fafaf9",
            accent_color: "#8b5cf6",
            heading_font: "Sora",
            body_font: "Inter",
            spacing_scale: 1.5,
        },
        subject: "product",
    },
];

const FALLBACK_BLUEPRINT: BlueprintDef = BlueprintDef {
    archetype: Archetype::Custom,
    pages: &["home", "about", "contact"],
    features: &["contact-form"],
    palette: DEFAULT_PALETTE,
    subject: "website",
};

/// Look up the blueprint for an archetype.
///
/// Archetypes without an explicit row (currently only `Custom`) get a
/// generic default with the [`DEFAULT_PALETTE`].
pub fn blueprint(archetype: Archetype) -> &'static BlueprintDef {
    BLUEPRINT_REGISTRY
        .iter()
        .find(|def| def.archetype == archetype)
        .unwrap_or(&FALLBACK_BLUEPRINT)
}

/// Deterministic fallback copy for a content slot.
///
/// Interpolates the archetype's subject noun; same input, same output.
/// The generator uses this whenever the remote suggestion call fails,
/// times out, or is not entitled — the pipeline never stalls on it.
pub fn fallback_text(archetype: Archetype, slot: ContentSlot) -> String {
    let subject = blueprint(archetype).subject;
    match slot {
        ContentSlot::Headline => format!("Welcome to your new {subject}"),
        ContentSlot::Description => format!(
            "A modern {subject} built to grow with you. Clean design, fast \
             pages, and everything you need to get started today."
        ),
        ContentSlot::Features => format!(
            "Responsive layout\nFast page loads\nBuilt-in SEO\nEasy updates \
             for your {subject}"
        ),
        ContentSlot::CallToAction => "Get started".to_string(),
        ContentSlot::Testimonial => format!(
            "\"Exactly the {subject} we needed — live in days, not months.\""
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registry_row_has_pages() {
        for def in BLUEPRINT_REGISTRY {
            assert!(!def.pages.is_empty(), "{} has no pages", def.archetype);
        }
    }

    #[test]
    fn custom_archetype_uses_default_palette() {
        let def = blueprint(Archetype::Custom);
        assert_eq!(def.palette.primary_color, DEFAULT_PALETTE.primary_color);
        assert!(!def.pages.is_empty());
    }

    #[test]
    fn fallback_text_is_deterministic_and_nonempty() {
        for slot in ContentSlot::ALL {
            let a = fallback_text(Archetype::Dining, slot);
            let b = fallback_text(Archetype::Dining, slot);
            assert_eq!(a, b);
            assert!(!a.is_empty());
        }
    }

    #[test]
    fn fallback_text_mentions_the_subject() {
        let text = fallback_text(Archetype::Commerce, ContentSlot::Headline);
        assert!(text.contains("online store"));
    }
}
