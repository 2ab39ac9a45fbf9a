//! Template engine contract.

use folio_tree::DocumentTree;
use thiserror::Error;

/// Error type for template resolution.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template '{name}' failed to expand: {message}")]
    ExpansionFailed { name: String, message: String },

    #[error("missing template '{0}'")]
    MissingTemplate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Expands the dynamic and template documents of a tree for one output
/// format.
///
/// `apply` runs to completion before any render operation is collected.
/// Expansion may introduce renderable content but must never remove it.
pub trait TemplateEngine: Send + Sync {
    fn apply(&self, tree: DocumentTree, suffix: &str) -> Result<DocumentTree, TemplateError>;
}

/// A template engine that performs no expansion.
///
/// Useful for formats whose documents are already fully resolved, and as the
/// default engine when none is configured: documents pass through untouched
/// and remaining dynamic documents render under their own names.
#[derive(Debug, Clone, Default)]
pub struct IdentityEngine;

impl IdentityEngine {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for IdentityEngine {
    fn apply(&self, tree: DocumentTree, _suffix: &str) -> Result<DocumentTree, TemplateError> {
        Ok(tree)
    }
}
