use std::future::Future;
use std::time::Duration;

use tokio_util::task::TaskTracker;
use tracing::{debug, warn, Instrument};

use crate::constants;

/// Owns the background halves of deferred interactions.
///
/// Spawned tasks run detached from the request that scheduled them. Each task is bounded by the
/// lifetime of an interaction token; a task still running after that could not deliver its
/// follow-up anyway and is dropped.
#[derive(Clone, Debug)]
pub struct TaskSupervisor {
    tracker: TaskTracker,
    timeout: Duration,
}

impl Default for TaskSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskSupervisor {
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(constants::INTERACTION_TOKEN_LIFETIME)
    }

    /// A supervisor whose tasks are abandoned after `timeout` instead of the token lifetime.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            tracker: TaskTracker::new(),
            timeout,
        }
    }

    /// Starts `task` in the background. The caller does not wait for it.
    pub fn spawn<F>(&self, name: &str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let timeout = self.timeout;
        let span = tracing::info_span!("deferred", command = %name);

        self.tracker.spawn(
            async move {
                match tokio::time::timeout(timeout, task).await {
                    Ok(()) => debug!("Deferred task finished"),
                    Err(_) => warn!("Deferred task abandoned after {:?}", timeout),
                }
            }
            .instrument(span),
        );
    }

    /// Number of tasks still running.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracker.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracker.is_empty()
    }

    /// Closes the tracker and waits up to `grace` for running tasks.
    ///
    /// Returns `true` if every task finished in time. Tasks still running afterwards keep running
    /// until the runtime shuts down.
    pub async fn shutdown(&self, grace: Duration) -> bool {
        self.tracker.close();

        if tokio::time::timeout(grace, self.tracker.wait()).await.is_ok() {
            true
        } else {
            warn!(pending = self.tracker.len(), "Deferred tasks still running after {:?}", grace);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn shutdown_waits_for_tasks() {
        let supervisor = TaskSupervisor::new();
        let done = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&done);
        supervisor.spawn("test", async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            flag.store(true, Ordering::SeqCst);
        });

        assert!(supervisor.shutdown(Duration::from_secs(5)).await);
        assert!(done.load(Ordering::SeqCst));
        assert!(supervisor.is_empty());
    }

    #[tokio::test]
    async fn shutdown_gives_up_after_grace() {
        let supervisor = TaskSupervisor::new();
        supervisor.spawn("slow", tokio::time::sleep(Duration::from_secs(60)));

        assert!(!supervisor.shutdown(Duration::from_millis(10)).await);
        assert_eq!(supervisor.len(), 1);
    }

    #[tokio::test]
    async fn tasks_are_bounded_by_timeout() {
        let supervisor = TaskSupervisor::with_timeout(Duration::from_millis(10));
        supervisor.spawn("stuck", std::future::pending());

        assert!(supervisor.shutdown(Duration::from_secs(5)).await);
    }
}
