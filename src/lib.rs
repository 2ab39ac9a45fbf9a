//! # folio
//!
//! Rendering-orchestration core for document-transformation pipelines.
//!
//! Given an in-memory tree of parsed documents, folio produces output
//! artifacts (single files, streams, in-memory buffers, or a mirrored
//! directory tree) in a target format, optionally combining the entire
//! tree into one binary artifact.
//!
//! The library is organized as a workspace:
//! - **folio-tree**: the document model (paths, nodes, documents, trees)
//! - **folio-style**: style declarations and merge semantics
//! - **folio-traits**: the contracts collaborators plug in through
//! - **folio-render-core**: override chains and scoped render execution
//! - **folio-executor** / **folio-provider**: execution and output backends
//! - **folio-core**: traversal, scheduling and the render pipeline
//!
//! ## Usage
//!
//! ```ignore
//! use folio::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new(HtmlFactory::new())
//!     .with_override(CalloutBlocks)
//!     .parallel(true)
//!     .build();
//!
//! // Mapped: one artifact per document, mirrored onto a directory.
//! pipeline.render_tree(tree).to_directory("site")?;
//!
//! // Gathered: the whole tree as one artifact.
//! let pipeline = PipelineBuilder::new(HtmlFactory::new())
//!     .with_processor(EbookProcessor::new())
//!     .build();
//! pipeline.gather_tree(tree).to_file("book.epub")?;
//! ```

// Re-export the document model
pub use folio_tree::{
    Document, DocumentTree, DynamicDocument, Node, NodeKind, PathError, SharedData,
    StaticDocument, TemplateDocument, TreeError, TreePath,
};

// Re-export styling
pub use folio_style::{StyleDeclaration, StyleSet};

// Re-export platform abstraction traits
pub use folio_traits::{
    CombiningProcessor, Executor, ExecutorError, IdentityEngine, OutputProvider, OutputTarget,
    ProcessorError, ProviderError, RenderCallback, SyncExecutor, TemplateEngine, TemplateError,
};

// Re-export executors
pub use folio_executor::ExecutorImpl;
#[cfg(feature = "rayon-executor")]
pub use folio_executor::RayonExecutor;

// Re-export the render core
pub use folio_render_core::{
    RenderChain, RenderError, RenderFn, RenderOutcome, RendererFactory, render_scoped,
    render_to_bytes, render_to_string,
};

// Re-export output providers and targets
pub use folio_provider::{
    DirectoryOutputProvider, FileTarget, MemoryOutputProvider, StdoutTarget, WriterTarget,
};

// Re-export the pipeline
pub use folio_core::{
    GATHERED_STEM, GatherRender, Operation, OperationFailure, OperationFailures, OperationKind,
    PipelineBuilder, PipelineError, RenderPipeline, SingleRender, TreeRender, collect_operations,
    default_template_name, execute_operations, executor_for, gather_tree, synthetic_tree,
};
