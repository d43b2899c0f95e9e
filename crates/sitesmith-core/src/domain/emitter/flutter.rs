//! Flutter project scaffold emitter.
//!
//! Same shape as the React Native scaffold: descriptor, entry point with
//! a generated theme and single home screen, placeholder platform
//! subtrees.

use std::fmt::Write as _;

use crate::domain::{
    entities::{FileTree, SiteModel},
    value_objects::ElementType,
};

use super::slug;

pub(super) fn emit(model: &SiteModel) -> FileTree {
    let name = slug(&model.seo.title).replace('-', "_");
    FileTree::new()
        .with_file("pubspec.yaml", pubspec(model, &name))
        .with_file("lib/main.dart", main_dart(model))
        .with_file(
            "android/README.md",
            "Placeholder android project. Run `flutter create .` to generate it.\n",
        )
        .with_file(
            "ios/README.md",
            "Placeholder ios project. Run `flutter create .` to generate it.\n",
        )
}

fn pubspec(model: &SiteModel, name: &str) -> String {
    format!(
        "name: {name}\n\
         description: {description}\n\
         version: 1.0.0+1\n\
         publish_to: none\n\n\
         environment:\n\
         \x20 sdk: '>=3.0.0 <4.0.0'\n\n\
         dependencies:\n\
         \x20 flutter:\n\
         \x20   sdk: flutter\n\n\
         flutter:\n\
         \x20 uses-material-design: true\n",
        description = model.seo.description.replace('\n', " "),
    )
}

fn main_dart(model: &SiteModel) -> String {
    let t = &model.design_tokens;

    let mut children = String::new();
    for element in model.elements_in_order() {
        let content = dart_string(&element.content);
        let widget = match element.element_type {
            ElementType::Heading => {
                format!("Text({content}, style: Theme.of(context).textTheme.headlineLarge),")
            }
            ElementType::Paragraph => {
                format!("Text({content}, style: Theme.of(context).textTheme.bodyLarge),")
            }
            ElementType::Button => {
                format!("ElevatedButton(onPressed: () {{}}, child: Text({content})),")
            }
            ElementType::Image => format!(
                "Container(height: 180, color: primary.withOpacity(0.1), \
                 child: Center(child: Text({content}))),"
            ),
        };
        let _ = writeln!(children, "            {widget}");
    }

    format!(
        "import 'package:flutter/material.dart';\n\n\
         const primary = Color(0xFF{primary});\n\
         const secondary = Color(0xFF{secondary});\n\
         const accent = Color(0xFF{accent});\n\n\
         void main() => runApp(const GeneratedApp());\n\n\
         class GeneratedApp extends StatelessWidget {{\n\
         \x20 const GeneratedApp({{super.key}});\n\n\
         \x20 @override\n\
         \x20 Widget build(BuildContext context) {{\n\
         \x20   return MaterialApp(\n\
         \x20     title: {title},\n\
         \x20     theme: ThemeData(\n\
         \x20       colorScheme: ColorScheme.fromSeed(seedColor: accent),\n\
         \x20       scaffoldBackgroundColor: secondary,\n\
         \x20     ),\n\
         \x20     home: const HomeScreen(),\n\
         \x20   );\n\
         \x20 }}\n\
         }}\n\n\
         class HomeScreen extends StatelessWidget {{\n\
         \x20 const HomeScreen({{super.key}});\n\n\
         \x20 @override\n\
         \x20 Widget build(BuildContext context) {{\n\
         \x20   return Scaffold(\n\
         \x20     body: SafeArea(\n\
         \x20       child: ListView(\n\
         \x20         padding: const EdgeInsets.all(16),\n\
         \x20         children: [\n{children}\
         \x20         ],\n\
         \x20       ),\n\
         \x20     ),\n\
         \x20   );\n\
         \x20 }}\n\
         }}\n",
        primary = hex_argb(&t.primary_color),
        secondary = hex_argb(&t.secondary_color),
        accent = hex_argb(&t.accent_color),
        title = dart_string(&model.seo.title),
    )
}

/// Strip the leading `#` of a css hex colour for Dart's `0xFFRRGGBB`.
fn hex_argb(css_color: &str) -> String {
    css_color.trim_start_matches('#').to_uppercase()
}

fn dart_string(text: &str) -> String {
    format!(
        "'{}'",
        text.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "\\n")
    )
}
