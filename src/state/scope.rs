//! Screen-lifetime task ownership.

use std::future::Future;

use tokio::task::JoinHandle;

/// Owns the background tasks spawned on behalf of one screen instance.
///
/// Every fetch, favorites forwarder and toggle mutation is tracked here;
/// tearing the screen down aborts them all, so no task can outlive the
/// screen and write into a disposed state cell.
#[derive(Debug, Default)]
pub struct TaskScope {
    handles: Vec<JoinHandle<()>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a task owned by this scope.
    pub fn spawn<F>(&mut self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Drop completed handles so long-lived screens don't accumulate them
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(tokio::spawn(fut));
    }

    /// Abort every outstanding task. Safe to call more than once.
    pub fn shutdown(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn shutdown_aborts_pending_tasks() {
        let ran = Arc::new(AtomicBool::new(false));
        let ran_clone = ran.clone();

        let mut scope = TaskScope::new();
        scope.spawn(async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            ran_clone.store(true, Ordering::SeqCst);
        });
        scope.shutdown();

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!ran.load(Ordering::SeqCst));
        assert_eq!(scope.len(), 0);
    }

    #[tokio::test]
    async fn finished_handles_are_pruned_on_spawn() {
        let mut scope = TaskScope::new();
        scope.spawn(async {});
        tokio::time::sleep(Duration::from_millis(20)).await;
        scope.spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        assert_eq!(scope.len(), 1);
    }
}
