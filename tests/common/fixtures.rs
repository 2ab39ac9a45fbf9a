//! Shared fixtures for the integration tests: a plain-text output format,
//! reusable overrides, a concatenating processor and small tree builders.

// Each test binary compiles this module separately and uses a different
// subset of it.
#![allow(dead_code)]

use folio::{
    CombiningProcessor, Document, DocumentTree, Node, NodeKind, ProcessorError, RenderCallback,
    RenderChain, RenderError, RenderFn, RenderOutcome, RendererFactory, StaticDocument,
    StyleDeclaration, StyleSet, TemplateEngine, TemplateError, TreePath,
};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Template body PlainFactory registers when a tree brings none.
pub const DEFAULT_TEMPLATE: &str = "{{document.content}}\n";

/// A minimal plain-text format.
///
/// The default renderer covers every node variant except `Image`, which it
/// reports as unhandled; tests use that gap to exercise the
/// `UnsupportedNode` path.
pub struct PlainFactory;

impl RendererFactory for PlainFactory {
    fn suffix(&self) -> &'static str {
        "txt"
    }

    fn default_styles(&self) -> StyleSet {
        StyleSet::new().with("txt", StyleDeclaration::new("body").with("width", "80"))
    }

    fn default_template(&self) -> &str {
        DEFAULT_TEMPLATE
    }

    fn new_renderer(&self, _root: &Node, _styles: &StyleSet) -> Box<dyn RenderFn> {
        Box::new(PlainRenderer)
    }
}

pub struct PlainRenderer;

impl RenderFn for PlainRenderer {
    fn render(
        &self,
        out: &mut dyn Write,
        node: &Node,
        chain: &RenderChain<'_>,
    ) -> Result<RenderOutcome, RenderError> {
        match node {
            Node::Root(children) => chain.render_children(out, children)?,
            Node::Section { level, title, content } => {
                for _ in 0..*level {
                    out.write_all(b"#")?;
                }
                out.write_all(b" ")?;
                chain.render_children(out, title)?;
                out.write_all(b"\n\n")?;
                chain.render_children(out, content)?;
            }
            Node::Paragraph(children) => {
                chain.render_children(out, children)?;
                out.write_all(b"\n\n")?;
            }
            Node::Text(text) => out.write_all(text.as_bytes())?,
            Node::Emphasis(children) => {
                out.write_all(b"*")?;
                chain.render_children(out, children)?;
                out.write_all(b"*")?;
            }
            Node::Strong(children) => {
                out.write_all(b"**")?;
                chain.render_children(out, children)?;
                out.write_all(b"**")?;
            }
            Node::CodeBlock { language, code } => {
                out.write_all(b"```")?;
                if let Some(language) = language {
                    out.write_all(language.as_bytes())?;
                }
                out.write_all(b"\n")?;
                out.write_all(code.as_bytes())?;
                out.write_all(b"\n```\n\n")?;
            }
            Node::CodeSpan(code) => write!(out, "`{}`", code)?,
            Node::Link { target, children } => {
                out.write_all(b"[")?;
                chain.render_children(out, children)?;
                write!(out, "]({})", target)?;
            }
            Node::List { items, .. } => {
                chain.render_children(out, items)?;
                out.write_all(b"\n")?;
            }
            Node::ListItem(children) => {
                out.write_all(b"- ")?;
                chain.render_children(out, children)?;
                out.write_all(b"\n")?;
            }
            Node::BlockQuote(children) => {
                out.write_all(b"> ")?;
                chain.render_children(out, children)?;
            }
            Node::Rule => out.write_all(b"---\n\n")?,
            Node::Image { .. } => return Ok(RenderOutcome::Unhandled),
        }
        Ok(RenderOutcome::Rendered)
    }
}

/// An override that renders every node of one kind as a fixed marker.
pub struct MarkFor(pub NodeKind, pub &'static str);

impl RenderFn for MarkFor {
    fn render(
        &self,
        out: &mut dyn Write,
        node: &Node,
        _chain: &RenderChain<'_>,
    ) -> Result<RenderOutcome, RenderError> {
        if node.kind() == self.0 {
            out.write_all(self.1.as_bytes())?;
            Ok(RenderOutcome::Rendered)
        } else {
            Ok(RenderOutcome::Unhandled)
        }
    }
}

/// A combining processor that concatenates every document's rendered bytes
/// in tree order (documents before subtrees).
pub struct ConcatProcessor;

impl ConcatProcessor {
    fn walk(
        tree: &DocumentTree,
        render: &RenderCallback<'_>,
        out: &mut dyn Write,
    ) -> Result<(), ProcessorError> {
        for document in &tree.documents {
            let bytes = render(document)?;
            out.write_all(&bytes)?;
        }
        for subtree in &tree.subtrees {
            Self::walk(subtree, render, out)?;
        }
        Ok(())
    }
}

impl CombiningProcessor for ConcatProcessor {
    fn process(
        &self,
        tree: &DocumentTree,
        render: &RenderCallback<'_>,
        out: &mut dyn Write,
    ) -> Result<(), ProcessorError> {
        Self::walk(tree, render, out)
    }
}

/// A template engine that records the root templates it was handed and
/// passes the tree through unchanged.
#[derive(Clone, Default)]
pub struct RecordingEngine {
    pub seen: Arc<Mutex<BTreeMap<String, String>>>,
}

impl TemplateEngine for RecordingEngine {
    fn apply(&self, tree: DocumentTree, _suffix: &str) -> Result<DocumentTree, TemplateError> {
        let mut seen = self.seen.lock().expect("recording lock");
        for (name, template) in &tree.templates {
            seen.insert(name.clone(), template.body.clone());
        }
        Ok(tree)
    }
}

pub fn path(p: &str) -> TreePath {
    TreePath::parse(p).expect("fixture path")
}

/// A document whose content is a single paragraph of `text`.
pub fn doc(p: &str, text: &str) -> Document {
    Document::new(path(p), Node::Root(vec![Node::paragraph(text)]))
}

/// A document containing an image node, which PlainFactory cannot render.
pub fn broken_doc(p: &str) -> Document {
    Document::new(
        path(p),
        Node::Root(vec![Node::Image { source: "x.png".into(), alt: "x".into() }]),
    )
}

/// Two documents and a static asset at the root, plus a subtree with one
/// more document.
pub fn sample_tree() -> DocumentTree {
    DocumentTree::new(TreePath::root())
        .with_document(doc("/intro.md", "welcome"))
        .with_document(doc("/about.md", "about us"))
        .with_static_document(StaticDocument::new("logo.png", vec![0x89, 0x50, 0x4e, 0x47]))
        .with_subtree(
            DocumentTree::new(path("/guide")).with_document(doc("/guide/setup.md", "setup steps")),
        )
}
