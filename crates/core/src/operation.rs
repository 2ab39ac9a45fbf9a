//! Deferred render and copy operations.

use crate::error::PipelineError;
use std::fmt;

/// What an operation will do when it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Render a node tree to its destination.
    Render,
    /// Copy a static asset to its destination byte-for-byte.
    Copy,
}

/// One deferred, independent render-or-copy action.
///
/// An operation owns its destination and its slice of the (immutable)
/// expanded document tree, so operations share no mutable state and may run
/// in any order, sequentially or concurrently. Nothing happens until
/// [`Operation::run`] is called, exactly once.
pub struct Operation {
    kind: OperationKind,
    target: String,
    action: Box<dyn FnOnce() -> Result<(), PipelineError> + Send>,
}

impl Operation {
    /// A deferred render targeting the destination named `target`.
    pub fn render(
        target: impl Into<String>,
        action: impl FnOnce() -> Result<(), PipelineError> + Send + 'static,
    ) -> Self {
        Self { kind: OperationKind::Render, target: target.into(), action: Box::new(action) }
    }

    /// A deferred copy targeting the destination named `target`.
    pub fn copy(
        target: impl Into<String>,
        action: impl FnOnce() -> Result<(), PipelineError> + Send + 'static,
    ) -> Self {
        Self { kind: OperationKind::Copy, target: target.into(), action: Box::new(action) }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The identity of the destination this operation writes.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Executes the deferred action, consuming the operation.
    pub fn run(self) -> Result<(), PipelineError> {
        (self.action)()
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
