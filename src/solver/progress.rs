//! Progress reporting and cooperative cancellation

use crate::error::SolverError;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag a caller flips to stop a running turn
///
/// Clones share the same flag. The engine checks it before every dictionary
/// query and returns [`SolverError::Cancelled`] once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once cancelled
    ///
    /// # Errors
    /// Returns [`SolverError::Cancelled`] if [`cancel`](Self::cancel) was called.
    pub fn check(&self) -> Result<(), SolverError> {
        if self.is_cancelled() {
            Err(SolverError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Counts finished candidates and forwards `done / total` to a callback
///
/// Ticks may come from any worker thread. The count is bumped and reported
/// under one lock, so the callback sees a non-decreasing sequence and is
/// never invoked concurrently.
pub struct ProgressCounter<'a> {
    total: usize,
    done: Mutex<usize>,
    callback: &'a (dyn Fn(f32) + Sync),
}

impl<'a> ProgressCounter<'a> {
    #[must_use]
    pub fn new(total: usize, callback: &'a (dyn Fn(f32) + Sync)) -> Self {
        Self {
            total,
            done: Mutex::new(0),
            callback,
        }
    }

    /// Record one finished candidate
    pub fn tick(&self) {
        // A poisoned lock only means another tick panicked; keep counting.
        let mut done = self
            .done
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *done += 1;
        if self.total > 0 {
            (self.callback)((*done).min(self.total) as f32 / self.total as f32);
        }
    }

    /// Candidates finished so far
    #[must_use]
    pub fn done(&self) -> usize {
        *self
            .done
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
