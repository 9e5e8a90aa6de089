//! Background task scheduling with cancel-then-drain shutdown.
//!
//! Every task spawned here is registered on one [`TaskTracker`] and listens
//! on a child of one root [`CancellationToken`]. Cancellation is observed
//! only while a task is waiting (for its delay or its next tick); once a
//! task body has started it runs to completion, so shutdown never
//! interrupts a store or cache write halfway.
//!
//! # Lifecycle
//!
//! ```text
//! spawn_periodic / spawn_delayed ──> TaskTracker
//!                                        │
//! shutdown() ── cancel root token ──> waiting tasks exit
//!            ── close + wait ───────> in-flight bodies finish
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info};

/// Handle for cancelling one scheduled task.
///
/// Dropping the handle does not cancel the task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    name: &'static str,
    cancel: CancellationToken,
}

impl TaskHandle {
    /// Ask the task to stop at its next wait point.
    pub fn cancel(&self) {
        debug!(task = self.name, "Task cancellation requested");
        self.cancel.cancel();
    }

    /// Returns true once the task was cancelled directly or by shutdown.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

/// Runs recurring and one-shot delayed tasks on the tokio runtime.
///
/// Cheap to clone; clones share the same tracker and shutdown token.
#[derive(Debug, Clone, Default)]
pub struct TaskScheduler {
    tracker: TaskTracker,
    shutdown: CancellationToken,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` every `period` until cancelled.
    ///
    /// The first run happens one full period after spawning. Ticks missed
    /// while a run overran are skipped rather than replayed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_periodic<F, Fut>(&self, name: &'static str, period: Duration, mut task: F) -> TaskHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = self.handle(name);
        if handle.is_cancelled() {
            debug!(task = name, "Scheduler shut down, periodic task not started");
            return handle;
        }

        let token = handle.cancel.clone();
        self.tracker.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately.
            interval.tick().await;

            loop {
                tokio::select! {
                    biased;
                    () = token.cancelled() => {
                        debug!(task = name, "Periodic task stopping");
                        break;
                    }
                    _ = interval.tick() => {
                        task().await;
                    }
                }
            }
        });

        handle
    }

    /// Run `task` once after `delay`, unless cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_delayed<Fut>(&self, name: &'static str, delay: Duration, task: Fut) -> TaskHandle
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = self.handle(name);
        if handle.is_cancelled() {
            debug!(task = name, "Scheduler shut down, delayed task dropped");
            return handle;
        }

        let token = handle.cancel.clone();
        self.tracker.spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!(task = name, "Delayed task cancelled before it ran");
                }
                () = tokio::time::sleep(delay) => {
                    task.await;
                }
            }
        });

        handle
    }

    /// Cancel every waiting task, then wait for running ones to finish.
    ///
    /// Tasks scheduled after this call are dropped without running.
    pub async fn shutdown(&self) {
        info!(in_flight = self.tracker.len(), "Scheduler shutting down");
        self.shutdown.cancel();
        self.tracker.close();
        self.tracker.wait().await;
        info!("Scheduler drained");
    }

    /// Number of tasks that have not finished yet.
    #[must_use]
    pub fn active_tasks(&self) -> usize {
        self.tracker.len()
    }

    /// Returns true once [`TaskScheduler::shutdown`] has been called.
    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    fn handle(&self, name: &'static str) -> TaskHandle {
        TaskHandle {
            name,
            cancel: self.shutdown.child_token(),
        }
    }
}
