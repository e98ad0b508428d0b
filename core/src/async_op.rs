//! # Async Operation Tracker
//!
//! Screens that fire off a chain read or a transaction need to show a
//! spinner, then either the result or the error. [`AsyncOperation`] tracks
//! that lifecycle for one operation:
//!
//! ```text
//! Idle ──execute()──▶ Pending ──Ok──▶ Success(T)
//!                        │
//!                        └─────Err──▶ Error(E)
//! ```
//!
//! Calling `execute()` again from any state goes straight back to
//! `Pending` and clears the previous result or error.
//!
//! ## Stale completions
//!
//! Every `execute()` takes a ticket from a generation counter. When a run
//! finishes, its result is recorded only if no newer run has started
//! since; otherwise it is dropped and the run reports
//! [`Completion::Superseded`]. A slow first request can therefore never
//! overwrite the answer to a faster second one.
//!
//! Superseding a run does not stop it. Whatever side effects the
//! operation has will still happen if its future is polled to completion.
//! Dropping the [`Execution`] future is the only way to abandon a run, and
//! doing so leaves the state at `Pending` until the next `execute()`.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::debug;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Lifecycle phase without the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AsyncStatus {
    Idle,
    Pending,
    Success,
    Error,
}

impl fmt::Display for AsyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AsyncStatus::Idle => "idle",
            AsyncStatus::Pending => "pending",
            AsyncStatus::Success => "success",
            AsyncStatus::Error => "error",
        };
        f.write_str(label)
    }
}

/// Lifecycle phase with its payload. A result and an error can't both be
/// present: each lives in its own variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AsyncState<T, E> {
    Idle,
    Pending,
    Success(T),
    Error(E),
}

impl<T, E> AsyncState<T, E> {
    pub fn status(&self) -> AsyncStatus {
        match self {
            AsyncState::Idle => AsyncStatus::Idle,
            AsyncState::Pending => AsyncStatus::Pending,
            AsyncState::Success(_) => AsyncStatus::Success,
            AsyncState::Error(_) => AsyncStatus::Error,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            AsyncState::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            AsyncState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncState::Pending)
    }
}

/// How a single run ended, from the tracker's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The run's result or error is now the tracker's state.
    Recorded,
    /// A newer run started first; this run's outcome was discarded.
    Superseded,
}

/// Future returned by [`AsyncOperation::execute`]. Drive it to completion
/// to record the outcome.
pub type Execution = BoxFuture<'static, Completion>;

type Operation<T, E> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

struct Shared<T, E> {
    state: AsyncState<T, E>,
    generation: u64,
}

// ---------------------------------------------------------------------------
// AsyncOperation
// ---------------------------------------------------------------------------

/// Tracks the lifecycle of one repeatable async operation.
///
/// Cloning yields another handle to the same state, so a view can hand a
/// clone to whatever renders the spinner.
pub struct AsyncOperation<T, E> {
    operation: Operation<T, E>,
    shared: Arc<Mutex<Shared<T, E>>>,
}

impl<T, E> Clone for AsyncOperation<T, E> {
    fn clone(&self) -> Self {
        Self {
            operation: Arc::clone(&self.operation),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T, E> fmt::Debug for AsyncOperation<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.lock();
        f.debug_struct("AsyncOperation")
            .field("status", &shared.state.status())
            .field("generation", &shared.generation)
            .finish()
    }
}

impl<T, E> AsyncOperation<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates an idle tracker around `operation`.
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            operation: Arc::new(move || operation().boxed()),
            shared: Arc::new(Mutex::new(Shared {
                state: AsyncState::Idle,
                generation: 0,
            })),
        }
    }

    /// Creates a tracker that is already `Pending`, together with the
    /// first run. The caller drives (or spawns) the returned future.
    pub fn immediate<F, Fut>(operation: F) -> (Self, Execution)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let tracker = Self::new(operation);
        let first_run = tracker.execute();
        (tracker, first_run)
    }

    /// Starts a new run.
    ///
    /// The state becomes `Pending` before this returns, not when the
    /// returned future is first polled.
    pub fn execute(&self) -> Execution {
        let ticket = {
            let mut shared = self.shared.lock();
            shared.generation += 1;
            shared.state = AsyncState::Pending;
            shared.generation
        };
        debug!(generation = ticket, "async operation started");

        let run = (self.operation)();
        let shared = Arc::clone(&self.shared);
        async move {
            let result = run.await;
            let mut shared = shared.lock();
            if shared.generation != ticket {
                debug!(
                    generation = ticket,
                    current = shared.generation,
                    "discarding stale async completion"
                );
                return Completion::Superseded;
            }
            shared.state = match result {
                Ok(value) => AsyncState::Success(value),
                Err(error) => AsyncState::Error(error),
            };
            debug!(generation = ticket, status = %shared.state.status(), "async operation finished");
            Completion::Recorded
        }
        .boxed()
    }

    /// Back to `Idle`. Any run still in flight becomes stale.
    pub fn reset(&self) {
        let mut shared = self.shared.lock();
        shared.generation += 1;
        shared.state = AsyncState::Idle;
    }
}

impl<T, E> AsyncOperation<T, E> {
    pub fn status(&self) -> AsyncStatus {
        self.shared.lock().state.status()
    }

    /// Number of runs started (plus resets). Useful for keying renders.
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// Runs `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&AsyncState<T, E>) -> R) -> R {
        f(&self.shared.lock().state)
    }

    pub fn state(&self) -> AsyncState<T, E>
    where
        T: Clone,
        E: Clone,
    {
        self.shared.lock().state.clone()
    }

    pub fn value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.shared.lock().state.value().cloned()
    }

    pub fn error(&self) -> Option<E>
    where
        E: Clone,
    {
        self.shared.lock().state.error().cloned()
    }
}

// ---------------------------------------------------------------------------
// Polling helpers
// ---------------------------------------------------------------------------

pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Polls `condition` every `interval` until it returns `true` or `timeout`
/// elapses. Returns whether the condition was met.
///
/// Used for things like waiting for an injected wallet provider to appear.
pub async fn wait_for<F>(mut condition: F, timeout: Duration, interval: Duration) -> bool
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    while start.elapsed() < timeout {
        if condition() {
            return true;
        }
        tokio::time::sleep(interval).await;
    }
    false
}
