//! Static web bundle emitter.
//!
//! Produces `index.html`, `styles.css`, `app.js` and a `site.json`
//! project descriptor. The stylesheet is computed from the model's design
//! tokens plus per-element-type rules; elements are laid out absolutely,
//! keyed by their `position` slot.

use std::fmt::Write as _;

use serde_json::json;

use crate::domain::{
    entities::{site_model::Element, FileTree, SiteModel},
    value_objects::ElementType,
};

use super::slug;

/// Vertical size of one position slot, in pixels.
const SLOT_HEIGHT_PX: u32 = 96;

pub(super) fn emit(model: &SiteModel) -> FileTree {
    FileTree::new()
        .with_file("index.html", markup(model, ""))
        .with_file("styles.css", stylesheet(model))
        .with_file("app.js", script(model))
        .with_file("site.json", descriptor(model))
}

/// Render the markup. `extra_head` lets the installable-web-app emitter
/// inject its manifest/worker tags without a second template.
pub(super) fn markup(model: &SiteModel, extra_head: &str) -> String {
    let title = escape(&model.seo.title);
    let description = escape(&model.seo.description);

    let mut nav = String::new();
    for page in &model.pages {
        let _ = write!(
            nav,
            "      <a href=\"#{slug}\">{label}</a>\n",
            slug = slug(page),
            label = escape(page)
        );
    }

    let mut body = String::new();
    for element in model.elements_in_order() {
        let _ = writeln!(body, "      {}", render_element(element));
    }

    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
           <title>{title}</title>\n\
           <meta name=\"description\" content=\"{description}\">\n\
           <link rel=\"stylesheet\" href=\"styles.css\">\n{extra_head}\
         </head>\n\
         <body>\n\
           <header>\n\
             <nav>\n{nav}    </nav>\n\
           </header>\n\
           <main class=\"canvas\">\n{body}  </main>\n\
           <script src=\"app.js\"></script>\n\
         </body>\n\
         </html>\n"
    )
}

fn render_element(element: &Element) -> String {
    let id = escape(&element.id);
    let content = escape(&element.content);
    match element.element_type {
        ElementType::Heading => format!("<h1 id=\"el-{id}\" class=\"el heading\">{content}</h1>"),
        ElementType::Paragraph => format!("<p id=\"el-{id}\" class=\"el paragraph\">{content}</p>"),
        ElementType::Button => {
            format!("<button id=\"el-{id}\" class=\"el button\" type=\"button\">{content}</button>")
        }
        ElementType::Image => format!(
            "<img id=\"el-{id}\" class=\"el image\" src=\"assets/{id}.png\" alt=\"{content}\">"
        ),
    }
}

pub(super) fn stylesheet(model: &SiteModel) -> String {
    let t = &model.design_tokens;
    let mut css = format!(
        ":root {{\n\
         \x20 --primary: {primary};\n\
         \x20 --secondary: {secondary};\n\
         \x20 --accent: {accent};\n\
         \x20 --heading-font: \"{heading}\", sans-serif;\n\
         \x20 --body-font: \"{body}\", sans-serif;\n\
         \x20 --spacing: {spacing}rem;\n\
         }}\n\n\
         body {{\n\
         \x20 margin: 0;\n\
         \x20 color: var(--primary);\n\
         \x20 background: var(--secondary);\n\
         \x20 font-family: var(--body-font);\n\
         }}\n\n\
         header nav {{\n\
         \x20 display: flex;\n\
         \x20 gap: var(--spacing);\n\
         \x20 padding: var(--spacing);\n\
         }}\n\n\
         .canvas {{\n\
         \x20 position: relative;\n\
         \x20 min-height: 100vh;\n\
         \x20 padding: var(--spacing);\n\
         }}\n\n\
         .el {{\n\
         \x20 position: absolute;\n\
         \x20 left: var(--spacing);\n\
         \x20 right: var(--spacing);\n\
         }}\n\n\
         .el.heading {{ font-family: var(--heading-font); font-size: 2.5rem; }}\n\
         .el.paragraph {{ line-height: 1.6; }}\n\
         .el.button {{\n\
         \x20 background: var(--accent);\n\
         \x20 color: var(--secondary);\n\
         \x20 border: none;\n\
         \x20 padding: 0.75rem 1.5rem;\n\
         \x20 border-radius: 0.375rem;\n\
         \x20 cursor: pointer;\n\
         \x20 width: max-content;\n\
         }}\n\
         .el.image {{ max-width: 100%; }}\n",
        primary = t.primary_color,
        secondary = t.secondary_color,
        accent = t.accent_color,
        heading = t.heading_font,
        body = t.body_font,
        spacing = t.spacing_scale,
    );

    // Absolute layout: one rule per element, keyed by its position slot.
    // Positions come from user-editable model files; saturate instead of
    // overflowing on absurd values.
    for element in model.elements_in_order() {
        let _ = write!(
            css,
            "\n#el-{id} {{ top: {top}px; }}\n",
            id = element.id,
            top = element.position.saturating_mul(SLOT_HEIGHT_PX)
        );
    }

    css
}

pub(super) fn script(model: &SiteModel) -> String {
    let mut handlers = String::new();
    for element in model.elements_in_order() {
        if element.element_type == ElementType::Button {
            let _ = write!(
                handlers,
                "  wire(\"el-{id}\", {label});\n",
                id = element.id,
                label = json!(element.content),
            );
        }
    }

    format!(
        "// Generated interaction wiring. One click handler per button.\n\
         function wire(id, label) {{\n\
         \x20 const el = document.getElementById(id);\n\
         \x20 if (!el) return;\n\
         \x20 el.addEventListener(\"click\", () => {{\n\
         \x20   console.log(\"clicked:\", label);\n\
         \x20 }});\n\
         }}\n\n\
         document.addEventListener(\"DOMContentLoaded\", () => {{\n{handlers}}});\n"
    )
}

fn descriptor(model: &SiteModel) -> String {
    let value = json!({
        "name": slug(&model.seo.title),
        "archetype": model.archetype,
        "target": "web",
        "pages": model.pages,
        "features": model.features,
        "seo": model.seo,
        "sourceModelId": model.id,
    });
    // json! output over ordered inputs is stable; pretty-print for humans.
    let mut out = serde_json::to_string_pretty(&value).expect("descriptor is valid json");
    out.push('\n');
    out
}

/// Minimal HTML escaping for generated text content and attributes.
pub(super) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
