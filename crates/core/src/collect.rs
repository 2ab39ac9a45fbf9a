//! Tree traversal and operation collection.
//!
//! Walks a document tree and emits one deferred operation per renderable
//! unit, mirroring the tree shape onto output-provider scopes. Style
//! merging and template defaulting happen before traversal; template
//! expansion runs to completion before the first operation is emitted.

use crate::error::PipelineError;
use crate::operation::Operation;
use folio_render_core::{RenderError, RenderFn, RendererFactory, render_scoped};
use folio_style::StyleSet;
use folio_traits::{OutputProvider, OutputTarget, TemplateEngine};
use folio_tree::{DocumentTree, Node, SharedData, TemplateDocument};
use log::{debug, info};
use std::io::Write;
use std::sync::Arc;

/// The template name a format's default template is registered under.
pub fn default_template_name(suffix: &str) -> String {
    format!("default.template.{}", suffix)
}

/// Validates the tree, injects the format's default template if the root
/// defines none, applies the template engine, and merges the effective root
/// style set. Shared by the mapped and gathered strategies.
pub(crate) fn prepare_tree(
    mut tree: DocumentTree,
    factory: &dyn RendererFactory,
    engine: &dyn TemplateEngine,
) -> Result<(DocumentTree, StyleSet), PipelineError> {
    tree.validate()?;

    let suffix = factory.suffix();
    let template_name = default_template_name(suffix);
    if !tree.templates.contains_key(&template_name) {
        debug!("registering default template '{}'", template_name);
        tree.templates
            .insert(template_name, TemplateDocument::new(factory.default_template()));
    }

    // Expansion must fully complete before any operation is collected.
    let tree = engine.apply(tree, suffix)?;

    let styles = factory.default_styles().merge(&tree.styles.for_format(suffix));
    Ok((tree, styles))
}

/// Collects the deferred operations that render `tree` under `provider`.
///
/// The returned sequence is in insertion order (documents, then dynamic
/// documents, then static assets, then subtrees) but carries no
/// execution-order guarantee: every operation is independent. An empty tree
/// yields an empty sequence.
pub fn collect_operations(
    tree: DocumentTree,
    provider: &dyn OutputProvider,
    factory: &Arc<dyn RendererFactory>,
    overrides: &[Arc<dyn RenderFn>],
    engine: &dyn TemplateEngine,
) -> Result<Vec<Operation>, PipelineError> {
    let (tree, styles) = prepare_tree(tree, factory.as_ref(), engine)?;

    let setup = RenderSetup {
        factory: Arc::clone(factory),
        overrides: overrides.to_vec().into(),
    };
    let mut operations = Vec::new();
    collect_into(tree, provider, &setup, &styles, &mut operations)?;

    info!(
        "collected {} operation(s) for format '{}'",
        operations.len(),
        setup.factory.suffix()
    );
    Ok(operations)
}

/// Everything a render operation needs to capture besides its own document.
struct RenderSetup {
    factory: Arc<dyn RendererFactory>,
    overrides: Arc<[Arc<dyn RenderFn>]>,
}

fn collect_into(
    tree: DocumentTree,
    provider: &dyn OutputProvider,
    setup: &RenderSetup,
    styles: &StyleSet,
    operations: &mut Vec<Operation>,
) -> Result<(), PipelineError> {
    let suffix = setup.factory.suffix();
    let DocumentTree { documents, dynamic_documents, static_documents, subtrees, .. } = tree;

    for document in documents {
        let stem = document
            .path
            .stem()
            .ok_or_else(|| {
                PipelineError::Config(format!("document at '{}' has no file name", document.path))
            })?
            .to_string();
        let target = provider.new_output(&format!("{}.{}", stem, suffix))?;
        debug!("queueing render of '{}' -> '{}'", document.path, target.name());
        operations.push(render_operation(setup, styles, document.content, target));
    }

    // Dynamic documents that survived expansion render under their own full
    // name, independent of the format suffix.
    for dynamic in dynamic_documents {
        let target = provider.new_output(&dynamic.name)?;
        debug!("queueing render of dynamic '{}' -> '{}'", dynamic.name, target.name());
        operations.push(render_operation(setup, styles, dynamic.content, target));
    }

    for asset in static_documents {
        let target = provider.new_output(&asset.name)?;
        debug!("queueing copy of '{}' -> '{}'", asset.name, target.name());
        operations.push(copy_operation(asset.content, target));
    }

    for subtree in subtrees {
        let child = provider.new_child(subtree.name())?;
        let child_styles = styles.merge(&subtree.styles.for_format(suffix));
        collect_into(subtree, child.as_ref(), setup, &child_styles, operations)?;
    }

    Ok(())
}

fn render_operation(
    setup: &RenderSetup,
    styles: &StyleSet,
    node: Node,
    target: Box<dyn OutputTarget>,
) -> Operation {
    let factory = Arc::clone(&setup.factory);
    let overrides = Arc::clone(&setup.overrides);
    let styles = styles.clone();
    let name = target.name().to_string();
    Operation::render(name, move || {
        let mut target = target;
        render_scoped(factory.as_ref(), &overrides, &node, target.as_mut(), &styles)?;
        Ok(())
    })
}

fn copy_operation(content: SharedData, target: Box<dyn OutputTarget>) -> Operation {
    let name = target.name().to_string();
    Operation::copy(name.clone(), move || {
        let mut target = target;
        let mut writer = target
            .open()
            .map_err(|source| RenderError::Destination { name: name.clone(), source })?;
        let result = writer
            .write_all(&content)
            .and_then(|()| writer.flush())
            .map_err(|source| RenderError::Destination { name: name.clone(), source });
        drop(writer);
        result?;
        Ok(())
    })
}
