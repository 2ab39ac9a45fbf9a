//! The gathered output strategy.
//!
//! Gathered rendering reduces an entire source (a bare node, a single
//! document or a full tree) to one binary artifact. The tree is prepared
//! exactly like the mapped strategy (template defaulting, expansion, style
//! merge), then handed to an external combining processor together with a
//! callback that renders any document to an in-memory buffer through the
//! override-aware dispatch. The processor alone decides how the final
//! artifact is assembled.

use crate::collect::prepare_tree;
use crate::error::PipelineError;
use folio_render_core::{RenderFn, RendererFactory, render_to_bytes};
use folio_traits::{CombiningProcessor, ProcessorError, TemplateEngine};
use folio_tree::{Document, DocumentTree, Node, TreePath};
use log::info;
use std::io::Write;
use std::sync::Arc;

/// File stem of the synthetic document a bare node is wrapped in.
pub const GATHERED_STEM: &str = "gathered";

/// Wraps a bare node in a one-document synthetic tree at the reserved path
/// `/gathered.<suffix>`.
pub fn synthetic_tree(node: Node, suffix: &str) -> DocumentTree {
    let path = TreePath::root()
        .join(format!("{}.{}", GATHERED_STEM, suffix))
        .expect("the gathered artifact name is a valid path segment");
    DocumentTree::new(TreePath::root()).with_document(Document::new(path, node))
}

/// Renders `tree` into one artifact written to `out` via `processor`.
pub fn gather_tree(
    tree: DocumentTree,
    factory: &Arc<dyn RendererFactory>,
    overrides: &[Arc<dyn RenderFn>],
    engine: &dyn TemplateEngine,
    processor: &dyn CombiningProcessor,
    out: &mut dyn Write,
) -> Result<(), PipelineError> {
    let (tree, styles) = prepare_tree(tree, factory.as_ref(), engine)?;

    info!("gathering {} document(s) into a single artifact", tree.document_count());

    let render = |document: &Document| -> Result<Vec<u8>, ProcessorError> {
        render_to_bytes(factory.as_ref(), overrides, &document.content, &styles)
            .map_err(|err| ProcessorError::Callback(err.to_string()))
    };
    processor.process(&tree, &render, out)?;
    Ok(())
}
