//! The execution scheduler.
//!
//! Runs a collected operation set through an executor, each operation
//! exactly once, with no ordering between them. The failure policy is
//! collect-all: a failing operation never prevents the remaining,
//! independent operations from running; everything that failed is reported
//! together at the end.

use crate::error::{OperationFailure, OperationFailures, PipelineError};
use crate::operation::Operation;
use folio_executor::{Executor, ExecutorImpl};
use log::{debug, info, warn};

/// Picks the executor for a render session: sequential by default, rayon's
/// worker pool when parallel execution was requested.
pub fn executor_for(parallel: bool) -> ExecutorImpl {
    if parallel {
        #[cfg(not(feature = "rayon"))]
        warn!("parallel rendering requested but the rayon feature is disabled; running sequentially");
        ExecutorImpl::parallel()
    } else {
        ExecutorImpl::sequential()
    }
}

/// Executes every operation, collecting failures instead of aborting on the
/// first one.
pub fn execute_operations(
    executor: &ExecutorImpl,
    operations: Vec<Operation>,
) -> Result<(), PipelineError> {
    if operations.is_empty() {
        debug!("no operations to execute");
        return Ok(());
    }

    info!("executing {} operation(s) on {}", operations.len(), executor.name());

    let results = executor.execute_all_fallible(operations, |operation| {
        let target = operation.target().to_string();
        operation
            .run()
            .map_err(|err| OperationFailure { target, message: err.to_string() })
    });

    let failures: Vec<OperationFailure> = results.into_iter().filter_map(Result::err).collect();
    if failures.is_empty() {
        return Ok(());
    }
    for failure in &failures {
        warn!("operation '{}' failed: {}", failure.target, failure.message);
    }
    Err(PipelineError::Operations(OperationFailures(failures)))
}
