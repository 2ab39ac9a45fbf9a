//! Combining processor contract for gathered rendering.

use folio_tree::{Document, DocumentTree};
use std::io::Write;
use thiserror::Error;

/// Error type for single-artifact assembly.
#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("render callback failed: {0}")]
    Callback(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Renders one document to an in-memory buffer through the pipeline's
/// override-aware dispatch. Handed to a [`CombiningProcessor`] so it can
/// render whichever documents it needs, as often as it needs.
pub type RenderCallback<'a> = dyn Fn(&Document) -> Result<Vec<u8>, ProcessorError> + Sync + 'a;

/// Assembles one binary artifact from an entire document tree.
///
/// The processor alone decides how many render invocations to make through
/// the callback and how to combine them (pagination, tables of contents,
/// container packaging) before writing the final artifact to `out`.
pub trait CombiningProcessor: Send + Sync {
    fn process(
        &self,
        tree: &DocumentTree,
        render: &RenderCallback<'_>,
        out: &mut dyn Write,
    ) -> Result<(), ProcessorError>;
}
