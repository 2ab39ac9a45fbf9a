//! Style declarations for rendered output formats.
//!
//! A [`StyleSet`] holds styling rules keyed by the output-format suffix they
//! apply to (`"html"`, `"fo"`, ...). A format contributes a default set, a
//! document tree may contribute more, and the two are merged additively
//! before rendering starts. How the declarations are ultimately interpreted
//! is up to the format's renderer; this crate only stores and merges them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single styling rule: a selector plus its property map.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleDeclaration {
    /// The selector this rule applies to (interpretation is format-specific).
    pub selector: String,
    /// Property name/value pairs.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl StyleDeclaration {
    pub fn new(selector: impl Into<String>) -> Self {
        Self { selector: selector.into(), properties: BTreeMap::new() }
    }

    /// Adds a property to this declaration, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

/// An ordered collection of style declarations, keyed by output-format suffix.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSet {
    #[serde(default)]
    formats: BTreeMap<String, Vec<StyleDeclaration>>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserializes a style set from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Appends a declaration for the given format suffix.
    pub fn add(&mut self, suffix: impl Into<String>, declaration: StyleDeclaration) {
        self.formats.entry(suffix.into()).or_default().push(declaration);
    }

    /// Builder-style variant of [`StyleSet::add`].
    pub fn with(mut self, suffix: impl Into<String>, declaration: StyleDeclaration) -> Self {
        self.add(suffix, declaration);
        self
    }

    /// The declarations registered for a format suffix, in registration order.
    pub fn declarations(&self, suffix: &str) -> &[StyleDeclaration] {
        self.formats.get(suffix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns a new set containing only the declarations for one suffix.
    pub fn for_format(&self, suffix: &str) -> StyleSet {
        let mut out = StyleSet::new();
        if let Some(declarations) = self.formats.get(suffix) {
            out.formats.insert(suffix.to_string(), declarations.clone());
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.formats.values().all(Vec::is_empty)
    }

    /// Merges `overlay` on top of this set.
    ///
    /// The merge is additive: declarations from `overlay` never remove
    /// anything from `self`. When both sets carry a declaration for the same
    /// suffix and the exact same selector, the overlay's properties win per
    /// property key; selectors unique to either side are kept as-is.
    pub fn merge(&self, overlay: &StyleSet) -> StyleSet {
        let mut merged = self.clone();
        for (suffix, declarations) in &overlay.formats {
            let base = merged.formats.entry(suffix.clone()).or_default();
            for declaration in declarations {
                match base.iter_mut().find(|d| d.selector == declaration.selector) {
                    Some(existing) => {
                        for (name, value) in &declaration.properties {
                            existing.properties.insert(name.clone(), value.clone());
                        }
                    }
                    None => base.push(declaration.clone()),
                }
            }
        }
        merged
    }
}
