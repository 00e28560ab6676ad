//! Microlinq Parallel - bounded parallel for-each.
//!
//! Runs an action over every element of a materialized collection on a
//! dedicated `rayon` pool with a fixed number of workers. Callers can stop
//! the run early with a shared [`CancelToken`] or a timeout; elements that
//! had not started by then are skipped and counted in the returned
//! [`ForEachSummary`].
//!
//! Elements cross threads, so they must be `Send`. Sequences of
//! [`Value`](microlinq_core::Value)s hold `Rc`s and have to be mapped to
//! sendable data first.
//!
//! # Example
//!
//! ```
//! use microlinq_parallel::{for_each_bounded, ParallelOptions};
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! let total = AtomicU64::new(0);
//! let summary = for_each_bounded((1..=10u64).collect(), &ParallelOptions::new(2), |n| {
//!     total.fetch_add(n, Ordering::Relaxed);
//! })
//! .unwrap();
//!
//! assert_eq!(summary.completed, 10);
//! assert_eq!(total.load(Ordering::Relaxed), 55);
//! ```

use microlinq_core::{Error, Result};
use microlinq_query::order::materialize;
use microlinq_query::Sequence;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Shared flag for stopping a parallel run.
///
/// Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Elements that have not started are skipped.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns true once `cancel` has been called on any clone.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Options for [`for_each_bounded`].
#[derive(Clone, Debug)]
pub struct ParallelOptions {
    /// Number of worker threads. Must be at least 1.
    pub max_workers: usize,
    /// Checked before each element starts.
    pub cancel: Option<CancelToken>,
    /// Elements not started within this time after the run began are skipped.
    pub timeout: Option<Duration>,
}

impl Default for ParallelOptions {
    fn default() -> Self {
        let workers = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self::new(workers)
    }
}

impl ParallelOptions {
    /// Creates options with `max_workers` workers and no cancellation.
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers,
            cancel: None,
            timeout: None,
        }
    }

    /// Sets the cancellation token.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Sets the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn should_stop(&self, started: Instant) -> bool {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return true;
        }
        self.timeout.is_some_and(|limit| started.elapsed() >= limit)
    }
}

/// Outcome of a parallel run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForEachSummary {
    /// Elements the action ran on
    pub completed: usize,
    /// Elements skipped because of cancellation or timeout
    pub skipped: usize,
}

/// Runs `action` on every element of `items` using at most
/// `options.max_workers` threads, and waits for all of them.
///
/// Fails with `InvalidOperation` when `max_workers` is zero or the worker
/// pool cannot be started. A panic in `action` is propagated to the caller
/// once the pool has stopped.
pub fn for_each_bounded<T, F>(
    items: Vec<T>,
    options: &ParallelOptions,
    action: F,
) -> Result<ForEachSummary>
where
    T: Send,
    F: Fn(T) + Sync,
{
    if options.max_workers == 0 {
        return Err(Error::invalid_operation("max_workers must be at least 1"));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.max_workers)
        .thread_name(|i| format!("microlinq-worker-{i}"))
        .build()
        .map_err(|e| Error::invalid_operation(format!("failed to start worker pool: {e}")))?;

    tracing::debug!(
        workers = options.max_workers,
        items = items.len(),
        "starting parallel for-each"
    );

    let started = Instant::now();
    let completed = AtomicUsize::new(0);
    let skipped = AtomicUsize::new(0);

    pool.install(|| {
        items.into_par_iter().for_each(|item| {
            if options.should_stop(started) {
                skipped.fetch_add(1, Ordering::Relaxed);
                return;
            }
            action(item);
            completed.fetch_add(1, Ordering::Relaxed);
        });
    });

    let summary = ForEachSummary {
        completed: completed.into_inner(),
        skipped: skipped.into_inner(),
    };
    if summary.skipped > 0 {
        tracing::debug!(
            completed = summary.completed,
            skipped = summary.skipped,
            "parallel for-each stopped early"
        );
    }
    Ok(summary)
}

/// Materializes `source` and runs [`for_each_bounded`] over its elements.
pub fn for_each_sequence<S, F>(
    source: &S,
    options: &ParallelOptions,
    action: F,
) -> Result<ForEachSummary>
where
    S: Sequence + ?Sized,
    S::Item: Send,
    F: Fn(S::Item) + Sync,
{
    for_each_bounded(materialize(source), options, action)
}
