//! Holder code generator
//!
//! Turns a [`Layout`] into the Java source of its holder class and decides
//! where that source lives. Everything here is pure: the same layout always
//! produces byte-identical text and the same path.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Layout, View};

/// Sub-package (below the base package) holding generated classes
pub const HOLDR_PACKAGE: &str = "holdr";
/// Suffix appended to every holder class name
pub const CLASS_SUFFIX: &str = "Holder";
/// Extension of generated source files
pub const SOURCE_EXTENSION: &str = "java";

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// Generates holder classes for one application package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderGenerator {
    /// Base package, owner of the `R` class (e.g. `com.example.app`)
    package: String,
}

impl HolderGenerator {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Package of the generated classes, e.g. `com.example.app.holdr`
    pub fn holder_package(&self) -> String {
        format!("{}.{}", self.package, HOLDR_PACKAGE)
    }

    /// Holder class name for a layout: `activity_main` -> `ActivityMainHolder`
    pub fn class_name_for(layout_name: &str) -> String {
        let mut name: String = split_words(layout_name).map(capitalize).collect();
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }
        name.push_str(CLASS_SUFFIX);
        name
    }

    /// Accessor name of a view: its override, else the camelCased id
    ///
    /// Either way the result is a valid Java identifier: other characters
    /// become `_`, a leading digit gets a `_` prefix and keywords a `_` suffix.
    pub fn field_name_for(view: &View) -> String {
        let name = match view.field_name() {
            Some(name) => name.to_string(),
            None => {
                let mut words = split_words(view.id());
                let mut name = words.next().unwrap_or_default().to_string();
                name.extend(words.map(capitalize));
                name
            }
        };
        java_identifier(&name)
    }

    /// Field names of `views`, in order, with collisions made unique
    ///
    /// The first view keeps its name; later ones get `2`, `3`, ... appended.
    pub fn field_names(views: &[View]) -> Vec<String> {
        let mut used = HashSet::new();
        views
            .iter()
            .map(|view| {
                let base = Self::field_name_for(view);
                let mut name = base.clone();
                let mut n = 2;
                while !used.insert(name.clone()) {
                    name = format!("{base}{n}");
                    n += 1;
                }
                name
            })
            .collect()
    }

    /// `<output_dir>/<package as dirs>/holdr/<ClassName>.java`
    pub fn output_path(&self, output_dir: &Path, layout_name: &str) -> PathBuf {
        let mut path = output_dir.to_path_buf();
        path.extend(self.holder_package().split('.').filter(|s| !s.is_empty()));
        path.push(format!(
            "{}.{}",
            Self::class_name_for(layout_name),
            SOURCE_EXTENSION
        ));
        path
    }

    /// Java source of the holder class for `layout`
    pub fn generate(&self, layout: &Layout) -> String {
        let class_name = Self::class_name_for(layout.name());
        let fields: Vec<(String, &View)> = Self::field_names(layout.views())
            .into_iter()
            .zip(layout.views())
            .collect();

        let mut out = String::new();
        out.push_str(&format!(
            "// Generated by holdr from layout \"{}\". Do not edit.\n\n",
            layout.name()
        ));
        out.push_str(&format!("package {};\n\n", self.holder_package()));
        out.push_str(&format!("public final class {} {{\n", class_name));
        out.push_str(&format!(
            "    public static final int LAYOUT = {}.R.layout.{};\n\n",
            self.package,
            layout.name()
        ));

        for (field, view) in &fields {
            out.push_str(&format!(
                "    public final {} {};\n",
                view.view_type(),
                field
            ));
        }
        if !fields.is_empty() {
            out.push('\n');
        }

        out.push_str(&format!(
            "    public {}(android.view.View view) {{\n",
            class_name
        ));
        for (field, view) in &fields {
            out.push_str(&format!(
                "        this.{} = ({}) view.findViewById({});\n",
                field,
                view.view_type(),
                self.id_reference(view)
            ));
        }
        out.push_str("    }\n}\n");
        out
    }

    fn id_reference(&self, view: &View) -> String {
        if view.is_android_id() {
            format!("android.R.id.{}", view.id())
        } else {
            format!("{}.R.id.{}", self.package, view.id())
        }
    }
}

fn split_words(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace())
        .filter(|w| !w.is_empty())
}

fn java_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if JAVA_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
