//! Worker pool for fanning out independent sub-products.
//!
//! `WorkerPool` wraps a fixed-size rayon pool behind a small
//! submit/join API. Tasks may submit further tasks: a `join` issued from a
//! pool worker keeps executing queued jobs until its own result arrives,
//! so deep recursive fan-out never parks every worker at once.
//!
//! `WorkerPool::sequential()` runs every task inline on the submitting
//! thread, which gives tests a deterministic single-threaded executor.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use rayon::{ThreadPool, ThreadPoolBuilder, Yield};

use crate::constants::DEFAULT_POOL_CAPACITY;
use crate::error::MatrixError;

/// How long a joining worker parks when it has nothing else to run.
const IDLE_WAIT: Duration = Duration::from_micros(50);

#[derive(Clone)]
enum Executor {
    Threads(Arc<ThreadPool>),
    Inline,
}

/// A fixed-capacity pool of reusable worker threads.
///
/// Cloning is cheap and shares the same threads.
#[derive(Clone)]
pub struct WorkerPool {
    executor: Executor,
    capacity: usize,
}

impl WorkerPool {
    /// Build a pool with `capacity` worker threads.
    pub fn new(capacity: usize) -> Result<Self, MatrixError> {
        if capacity == 0 {
            return Err(MatrixError::Config(
                "worker pool capacity must be positive".into(),
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(capacity)
            .thread_name(|i| format!("matcalc-worker-{i}"))
            .build()
            .map_err(|e| MatrixError::Pool(format!("failed to create thread pool: {e}")))?;

        tracing::debug!(capacity, "worker pool started");
        Ok(Self {
            executor: Executor::Threads(Arc::new(pool)),
            capacity,
        })
    }

    /// A pool that runs every task inline on the caller's thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            executor: Executor::Inline,
            capacity: 1,
        }
    }

    /// Number of worker threads.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether tasks run on dedicated threads.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        matches!(self.executor, Executor::Threads(_))
    }

    /// Queue `task` and return a handle to its result.
    pub fn submit<T, F>(&self, task: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        match &self.executor {
            Executor::Inline => TaskHandle {
                state: HandleState::Ready(task()),
            },
            Executor::Threads(pool) => {
                let (tx, rx) = crossbeam_channel::bounded(1);
                pool.spawn(move || {
                    let outcome = panic::catch_unwind(AssertUnwindSafe(task));
                    // Receiver gone means the handle was dropped; nothing to report.
                    let _ = tx.send(outcome);
                });
                TaskHandle {
                    state: HandleState::Pending(rx),
                }
            }
        }
    }
}

impl Default for WorkerPool {
    /// A pool with [`DEFAULT_POOL_CAPACITY`] threads, or the inline
    /// executor if the threads cannot be spawned.
    fn default() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to sequential worker pool");
            Self::sequential()
        })
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("capacity", &self.capacity)
            .field("parallel", &self.is_parallel())
            .finish()
    }
}

enum HandleState<T> {
    Ready(T),
    Pending(Receiver<thread::Result<T>>),
}

/// Handle to a submitted task.
pub struct TaskHandle<T> {
    state: HandleState<T>,
}

impl<T> TaskHandle<T> {
    /// Block until the task completes and return its result.
    ///
    /// On a rayon worker thread the wait is spent running other queued
    /// jobs. A panic inside the task is resumed on the joining thread.
    pub fn join(self) -> Result<T, MatrixError> {
        let rx = match self.state {
            HandleState::Ready(value) => return Ok(value),
            HandleState::Pending(rx) => rx,
        };

        loop {
            match rx.try_recv() {
                Ok(outcome) => return Ok(unwrap_outcome(outcome)),
                Err(TryRecvError::Disconnected) => return Err(task_lost()),
                Err(TryRecvError::Empty) => {}
            }

            match rayon::yield_now() {
                Some(Yield::Executed) => {}
                Some(Yield::Idle) => match rx.recv_timeout(IDLE_WAIT) {
                    Ok(outcome) => return Ok(unwrap_outcome(outcome)),
                    Err(RecvTimeoutError::Disconnected) => return Err(task_lost()),
                    Err(RecvTimeoutError::Timeout) => {}
                },
                // Not on a pool thread: nothing to help with, just wait.
                None => {
                    return rx
                        .recv()
                        .map(unwrap_outcome)
                        .map_err(|_| task_lost());
                }
            }
        }
    }
}

fn unwrap_outcome<T>(outcome: thread::Result<T>) -> T {
    match outcome {
        Ok(value) => value,
        Err(payload) => panic::resume_unwind(payload),
    }
}

fn task_lost() -> MatrixError {
    MatrixError::Pool("task was dropped before producing a result".into())
}
