//! Output sink abstractions.
//!
//! An [`OutputProvider`] mirrors the shape of a document tree onto physical
//! output locations: `new_output` yields a writable destination for one
//! artifact, `new_child` yields a provider scoped to a named subtree. Any
//! physical-location creation (directories, buffers) is the provider's
//! responsibility, including whatever internal locking it needs to survive
//! concurrent operations.

use std::io::{self, Write};
use thiserror::Error;

/// Error type for output-location creation.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("invalid output name '{0}'")]
    InvalidName(String),

    #[error("failed to create output location '{path}': {message}")]
    CreateFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<io::Error> for ProviderError {
    fn from(err: io::Error) -> Self {
        ProviderError::Io(err.to_string())
    }
}

/// A single named output destination.
///
/// The name is the identity attached to log lines and failure reports.
/// `open` acquires the destination's writer; the writer is released by
/// dropping it, on every exit path.
pub trait OutputTarget: Send {
    /// Identity used in logs and error reports.
    fn name(&self) -> &str;

    /// Acquires the writer bound to this destination.
    ///
    /// Opening an existing destination truncates it.
    fn open(&mut self) -> io::Result<Box<dyn Write + Send>>;
}

/// A sink abstraction that maps tree paths onto concrete output
/// destinations.
///
/// # Implementations
///
/// - `MemoryOutputProvider`: buffers in memory (folio-provider)
/// - `DirectoryOutputProvider`: mirrors the tree onto nested directories
///   (folio-provider)
pub trait OutputProvider: Send + Sync {
    /// Yields a destination for one artifact under this provider's scope.
    fn new_output(&self, name: &str) -> Result<Box<dyn OutputTarget>, ProviderError>;

    /// Yields a provider scoped to a named subtree, creating the physical
    /// location if necessary.
    fn new_child(&self, name: &str) -> Result<Box<dyn OutputProvider>, ProviderError>;

    /// A human-readable name for logging.
    fn name(&self) -> &'static str;
}
