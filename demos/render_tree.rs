//! Renders a small handbook tree twice: mapped into a directory and
//! gathered into one artifact.
//!
//! Run with: `cargo run --example render_tree`

use folio::{
    CombiningProcessor, Document, DocumentTree, Node, PipelineBuilder, PipelineError,
    ProcessorError, RenderCallback, RenderChain, RenderError, RenderFn, RenderOutcome,
    RendererFactory, StaticDocument, StyleDeclaration, StyleSet, TreePath,
};
use std::env;
use std::io::Write;

/// A small markdown-flavoured text format.
struct TextFactory;

impl RendererFactory for TextFactory {
    fn suffix(&self) -> &'static str {
        "txt"
    }

    fn default_styles(&self) -> StyleSet {
        StyleSet::new().with("txt", StyleDeclaration::new("body").with("width", "72"))
    }

    fn default_template(&self) -> &str {
        "{{document.content}}\n"
    }

    fn new_renderer(&self, _root: &Node, _styles: &StyleSet) -> Box<dyn RenderFn> {
        Box::new(TextRenderer)
    }
}

struct TextRenderer;

impl RenderFn for TextRenderer {
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
            _ => return Ok(RenderOutcome::Unhandled),
        }
        Ok(RenderOutcome::Rendered)
    }
}

/// Concatenates every document with a rule between them.
struct HandbookProcessor;

impl CombiningProcessor for HandbookProcessor {
    fn process(
        &self,
        tree: &DocumentTree,
        render: &RenderCallback<'_>,
        out: &mut dyn Write,
    ) -> Result<(), ProcessorError> {
        fn walk(
            tree: &DocumentTree,
            render: &RenderCallback<'_>,
            out: &mut dyn Write,
        ) -> Result<(), ProcessorError> {
            for document in &tree.documents {
                out.write_all(&render(document)?)?;
                out.write_all(b"---\n\n")?;
            }
            for subtree in &tree.subtrees {
                walk(subtree, render, out)?;
            }
            Ok(())
        }
        walk(tree, render, out)
    }
}

fn section(level: u8, title: &str, body: &str) -> Node {
    Node::Section {
        level,
        title: vec![Node::text(title)],
        content: vec![Node::paragraph(body)],
    }
}

fn handbook() -> Result<DocumentTree, PipelineError> {
    let root = TreePath::root();
    let guide = root.join("guide").map_err(|e| PipelineError::Config(e.to_string()))?;

    Ok(DocumentTree::new(root.clone())
        .with_document(Document::new(
            root.join("index.md").map_err(|e| PipelineError::Config(e.to_string()))?,
            Node::Root(vec![
                section(1, "Handbook", "Everything in one place."),
                Node::Paragraph(vec![
                    Node::text("Start with the "),
                    Node::Emphasis(vec![Node::text("guide")]),
                    Node::text("."),
                ]),
            ]),
        ))
        .with_static_document(StaticDocument::new("logo.svg", b"<svg/>".to_vec()))
        .with_subtree(DocumentTree::new(guide.clone()).with_document(Document::new(
            guide.join("setup.md").map_err(|e| PipelineError::Config(e.to_string()))?,
            Node::Root(vec![section(2, "Setup", "Install, configure, done.")]),
        ))))
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "folio=info,folio_core=info");
        }
    }
    env_logger::init();

    let tree = handbook()?;

    // Mapped: one artifact per document, mirrored onto a directory.
    let pipeline = PipelineBuilder::new(TextFactory).parallel(true).build();
    pipeline.render_tree(tree.clone()).to_directory("handbook_site")?;
    println!("✓ Rendered the handbook tree into handbook_site/");

    // Gathered: the whole tree as one artifact.
    let pipeline = PipelineBuilder::new(TextFactory).with_processor(HandbookProcessor).build();
    pipeline.gather_tree(tree).to_file("handbook.txt")?;
    println!("✓ Gathered the handbook into handbook.txt");

    Ok(())
}
