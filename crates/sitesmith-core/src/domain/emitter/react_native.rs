//! React Native project scaffold emitter.
//!
//! Emits a project descriptor, an entry point referencing a generated
//! theme and a single home screen, and placeholder platform subtrees.
//! This is a scaffold, not a full build: the android/ios directories are
//! stubs for the native toolchains to fill in.

use std::fmt::Write as _;

use serde_json::json;

use crate::domain::{
    entities::{FileTree, SiteModel},
    value_objects::ElementType,
};

use super::slug;

pub(super) fn emit(model: &SiteModel) -> FileTree {
    let name = slug(&model.seo.title);
    FileTree::new()
        .with_file("package.json", package_json(model, &name))
        .with_file("index.js", index_js(&name))
        .with_file("App.js", app_js(model))
        .with_file(
            "android/README.md",
            "Placeholder android project. Run the platform toolchain to generate it.\n",
        )
        .with_file(
            "ios/README.md",
            "Placeholder ios project. Run the platform toolchain to generate it.\n",
        )
}

fn package_json(model: &SiteModel, name: &str) -> String {
    let value = json!({
        "name": name,
        "version": "1.0.0",
        "private": true,
        "description": model.seo.description,
        "main": "index.js",
        "scripts": {
            "android": "react-native run-android",
            "ios": "react-native run-ios",
            "start": "react-native start",
        },
        "dependencies": {
            "react": "18.2.0",
            "react-native": "0.74.0",
        },
        "sourceModelId": model.id,
    });
    let mut out = serde_json::to_string_pretty(&value).expect("descriptor is valid json");
    out.push('\n');
    out
}

fn index_js(name: &str) -> String {
    format!(
        "import {{ AppRegistry }} from 'react-native';\n\
         import App from './App';\n\n\
         AppRegistry.registerComponent('{name}', () => App);\n"
    )
}

fn app_js(model: &SiteModel) -> String {
    let t = &model.design_tokens;

    let mut children = String::new();
    for element in model.elements_in_order() {
        let content = json!(element.content);
        let line = match element.element_type {
            ElementType::Heading => format!("<Text style={{styles.heading}}>{{{content}}}</Text>"),
            ElementType::Paragraph => format!("<Text style={{styles.body}}>{{{content}}}</Text>"),
            ElementType::Button => format!(
                "<Pressable style={{styles.button}} onPress={{() => {{}}}}>\
                 <Text style={{styles.buttonLabel}}>{{{content}}}</Text></Pressable>"
            ),
            ElementType::Image => format!(
                "<View style={{styles.imagePlaceholder}} accessibilityLabel={{{content}}} />"
            ),
        };
        let _ = writeln!(children, "        {line}");
    }

    format!(
        "import React from 'react';\n\
         import {{ Pressable, SafeAreaView, ScrollView, StyleSheet, Text, View }} from 'react-native';\n\n\
         export const theme = {{\n\
         \x20 primary: '{primary}',\n\
         \x20 secondary: '{secondary}',\n\
         \x20 accent: '{accent}',\n\
         \x20 spacing: {spacing},\n\
         }};\n\n\
         export default function App() {{\n\
         \x20 return (\n\
         \x20   <SafeAreaView style={{styles.screen}}>\n\
         \x20     <ScrollView contentContainerStyle={{styles.home}}>\n{children}\
         \x20     </ScrollView>\n\
         \x20   </SafeAreaView>\n\
         \x20 );\n\
         }}\n\n\
         const styles = StyleSheet.create({{\n\
         \x20 screen: {{ flex: 1, backgroundColor: theme.secondary }},\n\
         \x20 home: {{ padding: 16 * theme.spacing }},\n\
         \x20 heading: {{ fontSize: 32, fontWeight: '700', color: theme.primary }},\n\
         \x20 body: {{ fontSize: 16, lineHeight: 24, color: theme.primary }},\n\
         \x20 button: {{\n\
         \x20   backgroundColor: theme.accent,\n\
         \x20   borderRadius: 6,\n\
         \x20   paddingVertical: 12,\n\
         \x20   paddingHorizontal: 24,\n\
         \x20   alignSelf: 'flex-start',\n\
         \x20 }},\n\
         \x20 buttonLabel: {{ color: theme.secondary, fontWeight: '600' }},\n\
         \x20 imagePlaceholder: {{ height: 180, backgroundColor: theme.primary, opacity: 0.1 }},\n\
         }});\n",
        primary = t.primary_color,
        secondary = t.secondary_color,
        accent = t.accent_color,
        spacing = t.spacing_scale,
    )
}
