//! Scoped render execution.
//!
//! One render pass binds one node to one output destination: acquire the
//! writer, build the effective dispatch, render, flush, release. The writer
//! is released on every exit path; failures surface with the destination
//! identity attached.

use crate::chain::{RenderChain, RenderFn};
use crate::error::RenderError;
use crate::factory::RendererFactory;
use folio_style::StyleSet;
use folio_traits::OutputTarget;
use folio_tree::Node;
use log::{debug, trace};
use std::sync::Arc;

/// Renders `node` to `target` through the override-aware dispatch.
pub fn render_scoped(
    factory: &dyn RendererFactory,
    overrides: &[Arc<dyn RenderFn>],
    node: &Node,
    target: &mut dyn OutputTarget,
    styles: &StyleSet,
) -> Result<(), RenderError> {
    let name = target.name().to_string();
    debug!("rendering to '{}'", name);

    let mut writer = target
        .open()
        .map_err(|source| RenderError::Destination { name: name.clone(), source })?;

    let renderer = factory.new_renderer(node, styles);
    let chain = RenderChain::new(overrides, renderer.as_ref());

    let result = (|| -> Result<(), RenderError> {
        chain.render_node(writer.as_mut(), node)?;
        writer.flush()?;
        Ok(())
    })();

    // The writer is released before any error propagates.
    drop(writer);

    match result {
        Ok(()) => {
            trace!("finished '{}'", name);
            Ok(())
        }
        Err(err) => Err(err.for_target(&name)),
    }
}

/// Renders `node` into an in-memory buffer.
///
/// This is the render path the gathered strategy hands to a combining
/// processor, and the backing of the `to_string` terminal.
pub fn render_to_bytes(
    factory: &dyn RendererFactory,
    overrides: &[Arc<dyn RenderFn>],
    node: &Node,
    styles: &StyleSet,
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    let renderer = factory.new_renderer(node, styles);
    let chain = RenderChain::new(overrides, renderer.as_ref());
    chain.render_node(&mut buf, node)?;
    Ok(buf)
}

/// Renders `node` to a string, failing if the format emitted non-UTF-8
/// output.
pub fn render_to_string(
    factory: &dyn RendererFactory,
    overrides: &[Arc<dyn RenderFn>],
    node: &Node,
    styles: &StyleSet,
) -> Result<String, RenderError> {
    let bytes = render_to_bytes(factory, overrides, node, styles)?;
    String::from_utf8(bytes)
        .map_err(|err| RenderError::Other(format!("rendered output is not valid UTF-8: {}", err)))
}
