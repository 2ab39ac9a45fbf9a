//! Executor trait for abstracting parallel execution.
//!
//! Render and copy operations collected from a document tree are independent
//! of each other, so the scheduler can hand them to any executor without an
//! ordering contract. This trait keeps the scheduler decoupled from the
//! concrete threading implementation.

use std::fmt::Debug;

/// Error type for executor operations.
#[derive(Debug, Clone)]
pub struct ExecutorError {
    pub message: String,
}

impl std::fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Executor error: {}", self.message)
    }
}

impl std::error::Error for ExecutorError {}

impl ExecutorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// A trait for executing batches of independent work items, potentially in
/// parallel.
///
/// Implementations must run every item exactly once. Result order matches
/// input order, but items must not rely on any execution order between them.
///
/// # Implementations
///
/// - `SyncExecutor`: sequential execution, no threading (always available)
/// - `RayonExecutor`: work-stealing thread pool (folio-executor, feature-gated)
pub trait Executor: Send + Sync + Debug {
    /// Executes a batch of work items, returning results in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Executes a batch of work items that may fail.
    ///
    /// A failing item never prevents the remaining items from running; each
    /// slot of the returned vector carries that item's own outcome.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// The level of parallelism this executor provides (1 for sequential).
    fn parallelism(&self) -> usize;

    /// A human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// A synchronous executor that processes items one at a time, in sequence
/// order. Always available, no threading overhead.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}
