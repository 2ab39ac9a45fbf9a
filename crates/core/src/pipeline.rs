//! The render pipeline and its builder.
//!
//! `PipelineBuilder` accumulates a format binding, render-function
//! overrides, the template engine, the combining processor and the
//! execution mode. The built `RenderPipeline` binds a source (node,
//! document or tree) to a target handle; nothing renders until one of the
//! handle's terminal methods runs.

use crate::collect::collect_operations;
use crate::error::PipelineError;
use crate::gather::{gather_tree, synthetic_tree};
use crate::schedule::{execute_operations, executor_for};
use folio_provider::{DirectoryOutputProvider, FileTarget, StdoutTarget, WriterTarget};
use folio_render_core::{RenderFn, RendererFactory, render_scoped, render_to_string};
use folio_traits::{
    CombiningProcessor, IdentityEngine, OutputProvider, OutputTarget, TemplateEngine,
};
use folio_tree::{Document, DocumentTree, Node};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Accumulates the configuration of a render session.
///
/// Configuring a builder has no side effects; rendering starts only when a
/// terminal method on one of the pipeline's target handles is invoked.
pub struct PipelineBuilder {
    factory: Arc<dyn RendererFactory>,
    overrides: Vec<Arc<dyn RenderFn>>,
    engine: Arc<dyn TemplateEngine>,
    processor: Option<Arc<dyn CombiningProcessor>>,
    parallel: bool,
}

impl PipelineBuilder {
    /// Starts a builder bound to one output format.
    pub fn new(factory: impl RendererFactory + 'static) -> Self {
        Self {
            factory: Arc::new(factory),
            overrides: Vec::new(),
            engine: Arc::new(IdentityEngine::new()),
            processor: None,
            parallel: false,
        }
    }

    /// Registers a render-function override.
    ///
    /// Overrides are consulted in registration order: the earliest-registered
    /// override that covers a node variant wins over later ones and over the
    /// format default.
    pub fn with_override(mut self, override_fn: impl RenderFn + 'static) -> Self {
        self.overrides.push(Arc::new(override_fn));
        self
    }

    /// Replaces the template engine (defaults to [`IdentityEngine`]).
    pub fn with_template_engine(mut self, engine: impl TemplateEngine + 'static) -> Self {
        self.engine = Arc::new(engine);
        self
    }

    /// Configures the combining processor gathered rendering hands the tree
    /// to. Required before any `gather_*` terminal runs.
    pub fn with_processor(mut self, processor: impl CombiningProcessor + 'static) -> Self {
        self.processor = Some(Arc::new(processor));
        self
    }

    /// Selects parallel execution of the collected operations for tree
    /// renders. Defaults to sequential.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn build(self) -> RenderPipeline {
        RenderPipeline {
            factory: self.factory,
            overrides: self.overrides,
            engine: self.engine,
            processor: self.processor,
            parallel: self.parallel,
        }
    }
}

/// A configured render session. Binds sources to target handles.
pub struct RenderPipeline {
    factory: Arc<dyn RendererFactory>,
    overrides: Vec<Arc<dyn RenderFn>>,
    engine: Arc<dyn TemplateEngine>,
    processor: Option<Arc<dyn CombiningProcessor>>,
    parallel: bool,
}

impl RenderPipeline {
    /// Binds a bare node for mapped single-destination rendering.
    pub fn render_node<'a>(&'a self, node: &'a Node) -> SingleRender<'a> {
        SingleRender { pipeline: self, node }
    }

    /// Binds one document for mapped single-destination rendering.
    pub fn render_document<'a>(&'a self, document: &'a Document) -> SingleRender<'a> {
        SingleRender { pipeline: self, node: &document.content }
    }

    /// Binds a document tree for mapped rendering: one artifact per
    /// document and asset, laid out under an output provider that mirrors
    /// the tree.
    pub fn render_tree(&self, tree: DocumentTree) -> TreeRender<'_> {
        TreeRender { pipeline: self, tree }
    }

    /// Binds a bare node for gathered rendering, wrapping it in a synthetic
    /// single-document tree at the reserved path.
    pub fn gather_node(&self, node: Node) -> GatherRender<'_> {
        let tree = synthetic_tree(node, self.factory.suffix());
        GatherRender { pipeline: self, tree }
    }

    /// Binds one document for gathered rendering.
    pub fn gather_document(&self, document: Document) -> GatherRender<'_> {
        let tree = DocumentTree::new(folio_tree::TreePath::root()).with_document(document);
        GatherRender { pipeline: self, tree }
    }

    /// Binds a full tree for gathered rendering into one artifact.
    pub fn gather_tree(&self, tree: DocumentTree) -> GatherRender<'_> {
        GatherRender { pipeline: self, tree }
    }

    fn processor(&self) -> Result<Arc<dyn CombiningProcessor>, PipelineError> {
        self.processor.clone().ok_or_else(|| {
            PipelineError::Config(
                "gathered rendering requires a combining processor; \
                 configure one with PipelineBuilder::with_processor"
                    .to_string(),
            )
        })
    }
}

/// Target handle for a single node or document. Every terminal renders the
/// bound source once, to one destination, using the format's default styles.
pub struct SingleRender<'a> {
    pipeline: &'a RenderPipeline,
    node: &'a Node,
}

impl SingleRender<'_> {
    /// Renders into any output target.
    pub fn to_target(&self, target: &mut dyn OutputTarget) -> Result<(), PipelineError> {
        let styles = self.pipeline.factory.default_styles();
        render_scoped(
            self.pipeline.factory.as_ref(),
            &self.pipeline.overrides,
            self.node,
            target,
            &styles,
        )?;
        Ok(())
    }

    /// Renders to a file path.
    pub fn to_file(&self, path: impl Into<PathBuf>) -> Result<(), PipelineError> {
        self.to_target(&mut FileTarget::new(path))
    }

    /// Renders to a caller-supplied writer.
    pub fn to_writer(&self, writer: Box<dyn Write + Send>) -> Result<(), PipelineError> {
        self.to_target(&mut WriterTarget::new("writer", writer))
    }

    /// Renders to an in-memory buffer returned as text.
    pub fn to_string(&self) -> Result<String, PipelineError> {
        let styles = self.pipeline.factory.default_styles();
        let rendered = render_to_string(
            self.pipeline.factory.as_ref(),
            &self.pipeline.overrides,
            self.node,
            &styles,
        )?;
        Ok(rendered)
    }

    /// Renders to the process's standard output.
    pub fn to_console(&self) -> Result<(), PipelineError> {
        self.to_target(&mut StdoutTarget::new())
    }
}

/// Target handle for a document tree rendered in mapped mode.
pub struct TreeRender<'a> {
    pipeline: &'a RenderPipeline,
    tree: DocumentTree,
}

impl TreeRender<'_> {
    /// Renders under a custom output provider.
    pub fn to_provider(self, provider: &dyn OutputProvider) -> Result<(), PipelineError> {
        let operations = collect_operations(
            self.tree,
            provider,
            &self.pipeline.factory,
            &self.pipeline.overrides,
            self.pipeline.engine.as_ref(),
        )?;
        execute_operations(&executor_for(self.pipeline.parallel), operations)
    }

    /// Renders into a directory, mirroring the tree as subdirectories.
    pub fn to_directory(self, path: impl Into<PathBuf>) -> Result<(), PipelineError> {
        let provider = DirectoryOutputProvider::new(path)?;
        self.to_provider(&provider)
    }

    /// Renders into a directory named after the tree (or `rendered` for an
    /// unnamed root tree), below the current working directory.
    pub fn to_default_directory(self) -> Result<(), PipelineError> {
        let name = match self.tree.name() {
            "" => "rendered".to_string(),
            name => name.to_string(),
        };
        self.to_directory(name)
    }
}

/// Target handle for gathered rendering into one binary artifact.
pub struct GatherRender<'a> {
    pipeline: &'a RenderPipeline,
    tree: DocumentTree,
}

impl GatherRender<'_> {
    /// Assembles the artifact into a caller-supplied writer.
    pub fn to_writer(self, out: &mut dyn Write) -> Result<(), PipelineError> {
        let processor = self.pipeline.processor()?;
        gather_tree(
            self.tree,
            &self.pipeline.factory,
            &self.pipeline.overrides,
            self.pipeline.engine.as_ref(),
            processor.as_ref(),
            out,
        )
    }

    /// Assembles the artifact in memory.
    pub fn to_bytes(self) -> Result<Vec<u8>, PipelineError> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Assembles the artifact into a file.
    pub fn to_file(self, path: impl Into<PathBuf>) -> Result<(), PipelineError> {
        let file = File::create(path.into())?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
