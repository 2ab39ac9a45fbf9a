//! The render function override chain.
//!
//! A render function is a mapping from node variants to writer side effects,
//! explicitly partial: it answers [`RenderOutcome::Unhandled`] for variants
//! it does not cover. The [`RenderChain`] composes user overrides with a
//! format's default render function into one effective dispatch: overrides
//! are consulted oldest-registration first, the default is the final
//! fallback, and a node nobody handles fails with
//! [`RenderError::UnsupportedNode`].

use crate::error::RenderError;
use folio_tree::Node;
use std::io::Write;
use std::sync::Arc;

/// Outcome of offering a node to one render function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The function rendered the node.
    Rendered,
    /// The function does not cover this node variant; dispatch falls
    /// through to the next function in the chain.
    Unhandled,
}

/// One render function: an override registered by the caller, or a format's
/// default renderer.
///
/// The `chain` argument is the effective dispatch for the current render
/// pass. Handlers recurse into child nodes through it, so a child always
/// sees the full override chain regardless of which function rendered its
/// parent.
pub trait RenderFn: Send + Sync {
    fn render(
        &self,
        out: &mut dyn Write,
        node: &Node,
        chain: &RenderChain<'_>,
    ) -> Result<RenderOutcome, RenderError>;
}

impl<F> RenderFn for F
where
    F: Fn(&mut dyn Write, &Node, &RenderChain<'_>) -> Result<RenderOutcome, RenderError>
        + Send
        + Sync,
{
    fn render(
        &self,
        out: &mut dyn Write,
        node: &Node,
        chain: &RenderChain<'_>,
    ) -> Result<RenderOutcome, RenderError> {
        self(out, node, chain)
    }
}

/// The effective render dispatch for one destination.
///
/// Built once per render pass from the registered overrides (oldest first)
/// and the format's default render function. The chain itself is what
/// handlers receive as their forward reference, so recursive rendering needs
/// no mutable dispatch cell.
pub struct RenderChain<'a> {
    overrides: &'a [Arc<dyn RenderFn>],
    fallback: &'a dyn RenderFn,
}

impl<'a> RenderChain<'a> {
    pub fn new(overrides: &'a [Arc<dyn RenderFn>], fallback: &'a dyn RenderFn) -> Self {
        Self { overrides, fallback }
    }

    /// Renders one node through the chain.
    ///
    /// The earliest-registered override that covers the variant wins; the
    /// format default is consulted last. An unhandled variant is an
    /// [`RenderError::UnsupportedNode`] error, never silently skipped.
    pub fn render_node(&self, out: &mut dyn Write, node: &Node) -> Result<(), RenderError> {
        for function in self.overrides {
            match function.render(out, node, self)? {
                RenderOutcome::Rendered => return Ok(()),
                RenderOutcome::Unhandled => {}
            }
        }
        match self.fallback.render(out, node, self)? {
            RenderOutcome::Rendered => Ok(()),
            RenderOutcome::Unhandled => Err(RenderError::UnsupportedNode(node.kind())),
        }
    }

    /// Renders a sequence of sibling nodes in order.
    pub fn render_children(&self, out: &mut dyn Write, nodes: &[Node]) -> Result<(), RenderError> {
        for node in nodes {
            self.render_node(out, node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_tree::NodeKind;

    /// A minimal default renderer: text and paragraphs only.
    struct TextOnly;

    impl RenderFn for TextOnly {
        fn render(
            &self,
            out: &mut dyn Write,
            node: &Node,
            chain: &RenderChain<'_>,
        ) -> Result<RenderOutcome, RenderError> {
            match node {
                Node::Text(text) => {
                    out.write_all(text.as_bytes())?;
                    Ok(RenderOutcome::Rendered)
                }
                Node::Paragraph(children) => {
                    chain.render_children(out, children)?;
                    out.write_all(b"\n")?;
                    Ok(RenderOutcome::Rendered)
                }
                _ => Ok(RenderOutcome::Unhandled),
            }
        }
    }

    /// An override that replaces every text node with a fixed marker.
    struct FixedText(&'static str);

    impl RenderFn for FixedText {
        fn render(
            &self,
            out: &mut dyn Write,
            node: &Node,
            _chain: &RenderChain<'_>,
        ) -> Result<RenderOutcome, RenderError> {
            match node {
                Node::Text(_) => {
                    out.write_all(self.0.as_bytes())?;
                    Ok(RenderOutcome::Rendered)
                }
                _ => Ok(RenderOutcome::Unhandled),
            }
        }
    }

    fn render(chain: &RenderChain<'_>, node: &Node) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        chain.render_node(&mut buf, node)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_empty_override_list_uses_default() {
        let fallback = TextOnly;
        let chain = RenderChain::new(&[], &fallback);
        assert_eq!(render(&chain, &Node::paragraph("hello")).unwrap(), "hello\n");
    }

    #[test]
    fn test_earliest_registered_override_wins() {
        let overrides: Vec<Arc<dyn RenderFn>> =
            vec![Arc::new(FixedText("first")), Arc::new(FixedText("second"))];
        let fallback = TextOnly;
        let chain = RenderChain::new(&overrides, &fallback);
        assert_eq!(render(&chain, &Node::text("x")).unwrap(), "first");
    }

    #[test]
    fn test_override_applies_through_recursion() {
        // The default renders the paragraph shell, but its children go back
        // through the chain and hit the override.
        let overrides: Vec<Arc<dyn RenderFn>> = vec![Arc::new(FixedText("*"))];
        let fallback = TextOnly;
        let chain = RenderChain::new(&overrides, &fallback);
        assert_eq!(render(&chain, &Node::paragraph("hello")).unwrap(), "*\n");
    }

    #[test]
    fn test_unhandled_everywhere_is_an_error() {
        let fallback = TextOnly;
        let chain = RenderChain::new(&[], &fallback);
        let err = render(&chain, &Node::Rule).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedNode(NodeKind::Rule)));
    }
}
