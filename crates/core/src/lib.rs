//! # folio-core
//!
//! Tree orchestration and render pipeline for folio (integration layer).
//!
//! This crate wires the platform abstractions together:
//! - **collect**: tree traversal producing deferred, independent operations
//! - **schedule**: sequential or parallel execution of an operation set
//! - **gather**: the whole-tree-into-one-artifact strategy
//! - **pipeline**: the caller-facing builder and target handles
//! - **error**: the aggregate [`PipelineError`]

mod collect;
mod error;
mod gather;
mod operation;
mod pipeline;
mod schedule;

pub use collect::{collect_operations, default_template_name};
pub use error::{OperationFailure, OperationFailures, PipelineError};
pub use gather::{GATHERED_STEM, gather_tree, synthetic_tree};
pub use operation::{Operation, OperationKind};
pub use pipeline::{GatherRender, PipelineBuilder, RenderPipeline, SingleRender, TreeRender};
pub use schedule::{execute_operations, executor_for};
