//! Execution context for the radius propagation step.
//!
//! Rather than relying on an implicitly shared global worker pool, the
//! caller hands propagation an explicit [`ExecutionContext`]. A parallel
//! context owns a dedicated rayon pool; when no pool can be obtained the
//! context silently degrades to serial execution, which is required to
//! produce bit-identical output (the propagation reduction is
//! order-independent by construction).

use rayon::{ThreadPool, ThreadPoolBuilder};

/// Where propagation work runs.
pub enum ExecutionContext {
  /// Plain in-thread loop.
  Serial,
  /// Dedicated rayon thread pool.
  Parallel(ThreadPool),
}

impl ExecutionContext {
  /// Serial context; always available.
  pub fn serial() -> Self {
    ExecutionContext::Serial
  }

  /// Try to build a parallel context with rayon's default thread count.
  ///
  /// Pool construction failure (e.g. thread spawn refusal on a restricted
  /// platform) is not an error: it logs a warning and falls back to the
  /// serial context.
  pub fn parallel() -> Self {
    match ThreadPoolBuilder::new().build() {
      Ok(pool) => ExecutionContext::Parallel(pool),
      Err(err) => {
        tracing::warn!(error = %err, "no parallel execution resource, falling back to serial");
        ExecutionContext::Serial
      }
    }
  }

  /// Context from the caller-facing parallel toggle.
  pub fn from_flag(parallel: bool) -> Self {
    if parallel {
      Self::parallel()
    } else {
      Self::serial()
    }
  }

  /// Whether a pool was actually obtained.
  pub fn is_parallel(&self) -> bool {
    matches!(self, ExecutionContext::Parallel(_))
  }

  /// Worker count: 1 for serial, the pool size otherwise.
  pub fn num_threads(&self) -> usize {
    match self {
      ExecutionContext::Serial => 1,
      ExecutionContext::Parallel(pool) => pool.current_num_threads(),
    }
  }
}

impl Default for ExecutionContext {
  fn default() -> Self {
    Self::serial()
  }
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod executor_test;
