//! Override chain resolution: registration order, fallthrough to the
//! format default, and unsupported-node propagation.

mod common;

use common::fixtures::{MarkFor, PlainFactory};
use folio::{
    Node, NodeKind, PipelineBuilder, PipelineError, RenderError, RendererFactory,
    render_to_string,
};

#[test]
fn test_no_overrides_matches_default_render_function() {
    let node = Node::Root(vec![
        Node::paragraph("plain body"),
        Node::Paragraph(vec![Node::Emphasis(vec![Node::text("important")])]),
    ]);

    let through_pipeline =
        PipelineBuilder::new(PlainFactory).build().render_node(&node).to_string().unwrap();
    let through_default =
        render_to_string(&PlainFactory, &[], &node, &PlainFactory.default_styles()).unwrap();

    assert_eq!(through_pipeline, through_default);
    assert_eq!(through_pipeline, "plain body\n\n*important*\n\n");
}

#[test]
fn test_earliest_registered_override_wins() {
    let pipeline = PipelineBuilder::new(PlainFactory)
        .with_override(MarkFor(NodeKind::Text, "first"))
        .with_override(MarkFor(NodeKind::Text, "second"))
        .build();

    let rendered = pipeline.render_node(&Node::text("ignored")).to_string().unwrap();
    assert_eq!(rendered, "first");
}

#[test]
fn test_unhandled_override_falls_through_to_the_next() {
    // The first override only covers emphasis, so text reaches the second.
    let pipeline = PipelineBuilder::new(PlainFactory)
        .with_override(MarkFor(NodeKind::Emphasis, "<em>"))
        .with_override(MarkFor(NodeKind::Text, "<txt>"))
        .build();

    assert_eq!(pipeline.render_node(&Node::text("x")).to_string().unwrap(), "<txt>");
    assert_eq!(
        pipeline.render_node(&Node::Emphasis(vec![])).to_string().unwrap(),
        "<em>"
    );
}

#[test]
fn test_children_render_through_the_override_chain() {
    // The default renders the paragraph shell; its children go back through
    // the chain and hit the override.
    let pipeline = PipelineBuilder::new(PlainFactory)
        .with_override(MarkFor(NodeKind::Text, "@"))
        .build();

    let rendered = pipeline.render_node(&Node::paragraph("hello")).to_string().unwrap();
    assert_eq!(rendered, "@\n\n");
}

#[test]
fn test_unsupported_node_propagates() {
    let pipeline = PipelineBuilder::new(PlainFactory).build();
    let image = Node::Image { source: "x.png".into(), alt: "x".into() };

    let err = pipeline.render_node(&image).to_string().unwrap_err();
    match err {
        PipelineError::Render(RenderError::UnsupportedNode(kind)) => {
            assert_eq!(kind, NodeKind::Image)
        }
        other => panic!("expected an unsupported-node error, got: {}", other),
    }
}

#[test]
fn test_override_extends_the_supported_node_set() {
    // The format alone cannot render images; an override fills the gap.
    let pipeline = PipelineBuilder::new(PlainFactory)
        .with_override(MarkFor(NodeKind::Image, "[image]"))
        .build();

    let image = Node::Image { source: "x.png".into(), alt: "x".into() };
    assert_eq!(pipeline.render_node(&image).to_string().unwrap(), "[image]");
}
