//! The hierarchical document tree.

use crate::document::{Document, DynamicDocument, StaticDocument, TemplateDocument};
use crate::path::TreePath;
use folio_style::StyleSet;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use thiserror::Error;

/// Error type for document-tree invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("duplicate path in document tree: {0}")]
    DuplicatePath(String),

    #[error("subtree '{child}' is not a strict descendant of its parent '{parent}'")]
    MisplacedSubtree { parent: String, child: String },
}

/// A hierarchical grouping of documents, subtrees, templates, static assets
/// and styles.
///
/// Invariants, checked by [`DocumentTree::validate`]: paths are unique across
/// the whole tree, and every subtree's path is a strict descendant of its
/// parent's path. Acyclicity holds structurally since subtrees are owned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentTree {
    pub path: TreePath,
    pub documents: Vec<Document>,
    pub dynamic_documents: Vec<DynamicDocument>,
    pub static_documents: Vec<StaticDocument>,
    pub subtrees: Vec<DocumentTree>,
    pub templates: BTreeMap<String, TemplateDocument>,
    pub styles: StyleSet,
}

impl DocumentTree {
    pub fn new(path: TreePath) -> Self {
        Self { path, ..Self::default() }
    }

    /// The tree's own name: the last path segment, or `""` at the root.
    pub fn name(&self) -> &str {
        self.path.basename().unwrap_or("")
    }

    /// True when the tree holds no renderable or copyable content at all.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
            && self.dynamic_documents.is_empty()
            && self.static_documents.is_empty()
            && self.subtrees.iter().all(DocumentTree::is_empty)
    }

    /// Total number of documents, including those in subtrees.
    pub fn document_count(&self) -> usize {
        self.documents.len()
            + self.subtrees.iter().map(DocumentTree::document_count).sum::<usize>()
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    pub fn with_dynamic_document(mut self, document: DynamicDocument) -> Self {
        self.dynamic_documents.push(document);
        self
    }

    pub fn with_static_document(mut self, document: StaticDocument) -> Self {
        self.static_documents.push(document);
        self
    }

    pub fn with_subtree(mut self, subtree: DocumentTree) -> Self {
        self.subtrees.push(subtree);
        self
    }

    pub fn with_template(mut self, name: impl Into<String>, template: TemplateDocument) -> Self {
        self.templates.insert(name.into(), template);
        self
    }

    pub fn with_styles(mut self, styles: StyleSet) -> Self {
        self.styles = styles;
        self
    }

    /// Checks the tree invariants, returning the first violation found.
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen = BTreeSet::new();
        self.validate_into(&mut seen)
    }

    fn validate_into(&self, seen: &mut BTreeSet<String>) -> Result<(), TreeError> {
        if !seen.insert(self.path.to_string()) {
            return Err(TreeError::DuplicatePath(self.path.to_string()));
        }
        for document in &self.documents {
            if !seen.insert(document.path.to_string()) {
                return Err(TreeError::DuplicatePath(document.path.to_string()));
            }
        }
        for subtree in &self.subtrees {
            if !subtree.path.is_strict_descendant_of(&self.path) {
                return Err(TreeError::MisplacedSubtree {
                    parent: self.path.to_string(),
                    child: subtree.path.to_string(),
                });
            }
            subtree.validate_into(seen)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn doc(path: &str) -> Document {
        Document::new(TreePath::parse(path).unwrap(), Node::Root(vec![Node::paragraph("body")]))
    }

    fn tree(path: &str) -> DocumentTree {
        DocumentTree::new(TreePath::parse(path).unwrap())
    }

    #[test]
    fn test_validate_accepts_proper_tree() {
        let root = tree("/")
            .with_document(doc("/intro.md"))
            .with_subtree(tree("/guide").with_document(doc("/guide/setup.md")));
        assert_eq!(root.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicate_document_path() {
        let root = tree("/").with_document(doc("/intro.md")).with_document(doc("/intro.md"));
        assert_eq!(root.validate(), Err(TreeError::DuplicatePath("/intro.md".into())));
    }

    #[test]
    fn test_validate_rejects_misplaced_subtree() {
        let root = tree("/guide").with_subtree(tree("/other"));
        assert!(matches!(root.validate(), Err(TreeError::MisplacedSubtree { .. })));
    }

    #[test]
    fn test_empty_and_counts() {
        assert!(tree("/").is_empty());

        let root = tree("/")
            .with_document(doc("/a.md"))
            .with_subtree(tree("/sub").with_document(doc("/sub/b.md")));
        assert!(!root.is_empty());
        assert_eq!(root.document_count(), 2);
    }

    #[test]
    fn test_static_content_keeps_tree_non_empty() {
        let root = tree("/").with_static_document(StaticDocument::new("logo.png", vec![1, 2, 3]));
        assert!(!root.is_empty());
    }
}
