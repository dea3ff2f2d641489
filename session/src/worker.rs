//! Background solver with a polled one-shot handoff.
//!
//! The search runs to completion on its own thread. The interactive
//! thread polls [`SolveHandle::poll`] on its redraw interval (or blocks
//! with [`SolveHandle::wait`]) and observes the result exactly once.
//! Each spawn owns its own frontier and bookkeeping, so concurrent
//! solves are independent and need no coordination.

use std::fmt;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use taquin_board::board::Board;
use taquin_search::search::{solve, SolveOutcome};

/// Failure observing a worker's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerError {
    /// The worker terminated without delivering an outcome. The solver
    /// itself does not panic, so this indicates a defect, not a puzzle
    /// property.
    Disconnected,
}

impl fmt::Display for WorkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => {
                write!(f, "solver worker terminated without delivering an outcome")
            }
        }
    }
}

impl std::error::Error for WorkerError {}

/// Handle to a background solve.
///
/// Dropping the handle detaches the worker; it finishes its search and
/// the discarded send fails harmlessly.
#[derive(Debug)]
pub struct SolveHandle {
    rx: Receiver<SolveOutcome>,
    worker: Option<JoinHandle<()>>,
}

impl SolveHandle {
    /// Non-blocking check for the outcome.
    ///
    /// Returns `Ok(None)` while the worker is still searching. The
    /// outcome is delivered once; polling again after it has been
    /// observed reports [`WorkerError::Disconnected`].
    ///
    /// # Errors
    ///
    /// [`WorkerError::Disconnected`] if the worker died without
    /// reporting.
    pub fn poll(&mut self) -> Result<Option<SolveOutcome>, WorkerError> {
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.join_worker();
                Ok(Some(outcome))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    /// Block until the outcome arrives.
    ///
    /// # Errors
    ///
    /// [`WorkerError::Disconnected`] if the worker died without
    /// reporting.
    pub fn wait(mut self) -> Result<SolveOutcome, WorkerError> {
        let outcome = self.rx.recv().map_err(|_| WorkerError::Disconnected);
        self.join_worker();
        outcome
    }

    /// Reap the worker thread once its result is in (or it is dead).
    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Start a solve on a dedicated worker thread.
#[must_use]
pub fn spawn_solve(start: Board, goal: Board) -> SolveHandle {
    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || {
        // The handle may have been dropped by the time the search ends;
        // the failed send just discards the outcome.
        let _ = tx.send(solve(start, goal));
    });
    SolveHandle {
        rx,
        worker: Some(worker),
    }
}
