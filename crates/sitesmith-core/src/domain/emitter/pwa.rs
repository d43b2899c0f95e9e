//! Installable web app emitter.
//!
//! The web bundle plus a manifest and an offline-cache service worker.
//! Markup, stylesheet and script generation are shared with the `web`
//! emitter; only the head tags, manifest and worker differ.

use serde_json::json;

use crate::domain::entities::{FileTree, SiteModel};

use super::{slug, web};

const EXTRA_HEAD: &str = "  <link rel=\"manifest\" href=\"manifest.json\">\n\
                          \x20 <script>\n\
                          \x20   if ('serviceWorker' in navigator) {\n\
                          \x20     navigator.serviceWorker.register('sw.js');\n\
                          \x20   }\n\
                          \x20 </script>\n";

pub(super) fn emit(model: &SiteModel) -> FileTree {
    FileTree::new()
        .with_file("index.html", web::markup(model, EXTRA_HEAD))
        .with_file("styles.css", web::stylesheet(model))
        .with_file("app.js", web::script(model))
        .with_file("manifest.json", manifest(model))
        .with_file("sw.js", service_worker(model))
}

fn manifest(model: &SiteModel) -> String {
    let t = &model.design_tokens;
    let value = json!({
        "name": model.seo.title,
        "short_name": slug(&model.seo.title),
        "description": model.seo.description,
        "start_url": "/",
        "display": "standalone",
        "background_color": t.secondary_color,
        "theme_color": t.primary_color,
        "icons": [
            { "src": "icons/icon-192.png", "sizes": "192x192", "type": "image/png" },
            { "src": "icons/icon-512.png", "sizes": "512x512", "type": "image/png" },
        ],
    });
    let mut out = serde_json::to_string_pretty(&value).expect("manifest is valid json");
    out.push('\n');
    out
}

fn service_worker(model: &SiteModel) -> String {
    let cache = format!("{}-v1", slug(&model.seo.title));
    format!(
        "const CACHE = {cache:?};\n\
         const ASSETS = [\"/\", \"index.html\", \"styles.css\", \"app.js\", \"manifest.json\"];\n\n\
         self.addEventListener(\"install\", (event) => {{\n\
         \x20 event.waitUntil(caches.open(CACHE).then((c) => c.addAll(ASSETS)));\n\
         }});\n\n\
         self.addEventListener(\"fetch\", (event) => {{\n\
         \x20 event.respondWith(\n\
         \x20   caches.match(event.request).then((hit) => hit || fetch(event.request))\n\
         \x20 );\n\
         }});\n"
    )
}
