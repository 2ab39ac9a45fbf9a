//! Rayon-based parallel executor.
//!
//! Uses rayon's global work-stealing thread pool. Render operations are
//! CPU-bound with short, independent I/O tails, which fits the work-stealing
//! model well.

use folio_traits::Executor;
use rayon::prelude::*;

/// A parallel executor backed by rayon's global thread pool.
///
/// The pool size is rayon's global configuration (CPU count by default); use
/// `rayon::ThreadPoolBuilder` before the first render to change it.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    /// Cached pool size, reported through `parallelism()`.
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self { num_threads: rayon::current_num_threads() }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
