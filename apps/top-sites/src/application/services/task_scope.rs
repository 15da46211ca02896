//! Background Task Scope
//!
//! Fire-and-forget work submitted by the use cases runs here, off the
//! caller's context. The scope tracks every task it launches so test
//! harnesses can await or cancel them deterministically; callers of the
//! use cases never touch it.

use std::future::Future;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Tracked, cancellable set of background tasks.
#[derive(Debug, Default)]
pub struct TaskScope {
    handle: Option<Handle>,
    tracker: TaskTracker,
    cancel: CancellationToken,
}

impl TaskScope {
    /// Create a scope bound to the tokio runtime current at construction.
    ///
    /// Built outside any runtime, the scope falls back to whichever
    /// runtime is current at launch time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handle: Handle::try_current().ok(),
            ..Self::default()
        }
    }

    /// Create a scope bound to a specific runtime.
    #[must_use]
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
            ..Self::default()
        }
    }

    /// Launch a detached task.
    ///
    /// Returns `false` when the task was dropped because the scope is
    /// cancelled or no runtime is reachable.
    pub fn launch<F>(&self, name: &'static str, task: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.cancel.is_cancelled() {
            tracing::debug!(task = name, "Scope cancelled, dropping background task");
            return false;
        }

        let handle = match &self.handle {
            Some(handle) => handle.clone(),
            None => match Handle::try_current() {
                Ok(handle) => handle,
                Err(e) => {
                    tracing::debug!(task = name, error = %e, "No runtime, dropping background task");
                    return false;
                }
            },
        };

        let token = self.cancel.clone();
        self.tracker.spawn_on(
            async move {
                tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        tracing::debug!(task = name, "Background task cancelled");
                    }
                    () = task => {}
                }
            },
            &handle,
        );
        true
    }

    /// Number of launched tasks that have not finished yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Wait until every task launched so far has finished.
    pub async fn wait_idle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }

    /// Cancel outstanding tasks and refuse new ones.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
