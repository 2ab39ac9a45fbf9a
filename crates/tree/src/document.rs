//! Source units held by a document tree.

use crate::node::Node;
use crate::path::TreePath;
use std::sync::Arc;

/// A reference-counted container for shared, immutable binary data.
pub type SharedData = Arc<Vec<u8>>;

/// One source unit: a tree path plus its parsed root node.
///
/// Documents are produced by a markup parser and consumed read-only by
/// rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: TreePath,
    pub content: Node,
}

impl Document {
    pub fn new(path: TreePath, content: Node) -> Self {
        Self { path, content }
    }
}

/// A document whose content still contains unexpanded template placeholders.
///
/// Dynamic documents are resolved by the template engine before traversal
/// collects render operations; any that remain afterwards are rendered under
/// their own full name, independent of the target format's suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicDocument {
    /// The full output name, kept as-is (no suffix rewriting).
    pub name: String,
    pub content: Node,
}

impl DynamicDocument {
    pub fn new(name: impl Into<String>, content: Node) -> Self {
        Self { name: name.into(), content }
    }
}

/// Raw template text registered under a name such as `default.template.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDocument {
    pub body: String,
}

impl TemplateDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// An opaque pass-through asset, copied to the output byte-for-byte under
/// its original name.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticDocument {
    pub name: String,
    pub content: SharedData,
}

impl StaticDocument {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self { name: name.into(), content: Arc::new(content) }
    }
}
