// crates/core/src/error.rs
//! Defines the unified error types for all pipeline operations.

use folio_render_core::RenderError;
use folio_traits::{ProcessorError, ProviderError, TemplateError};
use folio_tree::TreeError;
use std::fmt;
use thiserror::Error;

/// One failed operation, recorded by target identity.
#[derive(Debug, Clone)]
pub struct OperationFailure {
    pub target: String,
    pub message: String,
}

/// The collected failures of one scheduler run.
///
/// The scheduler runs every operation even when some fail; this carries
/// everything that went wrong, by destination.
#[derive(Debug, Clone, Default)]
pub struct OperationFailures(pub Vec<OperationFailure>);

impl fmt::Display for OperationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} operation(s) failed", self.0.len())?;
        for failure in &self.0 {
            write!(f, "; '{}': {}", failure.target, failure.message)?;
        }
        Ok(())
    }
}

/// The main error enum for all high-level operations within the pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    #[error("output provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("combining processor error: {0}")]
    Processor(#[from] ProcessorError),

    #[error("document tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Operations(OperationFailures),
}
