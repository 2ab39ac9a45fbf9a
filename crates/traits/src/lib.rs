//! Platform abstraction traits for the folio rendering pipeline.
//!
//! The pipeline core consumes its collaborators through the narrow contracts
//! defined here:
//! - [`Executor`]: sequential or parallel execution of independent operations
//! - [`OutputProvider`] / [`OutputTarget`]: mapping tree paths onto writable
//!   destinations
//! - [`TemplateEngine`]: template expansion ahead of traversal
//! - [`CombiningProcessor`]: whole-tree assembly into one binary artifact

pub mod executor;
pub mod output;
pub mod processor;
pub mod template;

pub use executor::{Executor, ExecutorError, SyncExecutor};
pub use output::{OutputProvider, OutputTarget, ProviderError};
pub use processor::{CombiningProcessor, ProcessorError, RenderCallback};
pub use template::{IdentityEngine, TemplateEngine, TemplateError};
