//! Full-snapshot subscription handle

use std::future::Future;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Receiver side of a live query
///
/// Every value is a complete snapshot of the query result; consumers
/// replace their local copy instead of patching it. Dropping the handle
/// ends the subscription.
#[derive(Debug, Clone)]
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    pub fn new(rx: watch::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Current snapshot, marking it as seen
    pub fn latest(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }

    /// Wait for the next snapshot; `None` once the store side is gone
    pub async fn next(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

/// Background task feeding snapshots into local state
///
/// Aborted when dropped, so the subscription lives exactly as long as the
/// handle.
#[derive(Debug)]
pub struct SyncTask {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl SyncTask {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stop the task and wait for it to wind down
    pub async fn stop(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}

impl Drop for SyncTask {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

/// Apply the current snapshot, then every following one, until the
/// store side closes or the task is stopped
pub fn spawn_sync<T, F>(name: &'static str, mut subscription: Subscription<T>, apply: F) -> SyncTask
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) + Send + 'static,
{
    let handle = tokio::spawn(async move {
        apply(subscription.latest());
        while let Some(snapshot) = subscription.next().await {
            apply(snapshot);
        }
        tracing::debug!(task = name, "Snapshot stream closed");
    });
    SyncTask {
        name,
        handle: Some(handle),
    }
}

/// Like [`spawn_sync`] for async consumers; each snapshot is handled to
/// completion before the next one is read, so bursts collapse into the
/// latest value
pub fn spawn_follow<T, F, Fut>(
    name: &'static str,
    mut subscription: Subscription<T>,
    apply: F,
) -> SyncTask
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let handle = tokio::spawn(async move {
        apply(subscription.latest()).await;
        while let Some(snapshot) = subscription.next().await {
            apply(snapshot).await;
        }
        tracing::debug!(task = name, "Snapshot stream closed");
    });
    SyncTask {
        name,
        handle: Some(handle),
    }
}
