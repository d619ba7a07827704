//! Keyed fetch driver for the article screen's state cell.
//!
//! `UiStateBinder` turns `PostRepository::get_post` into a live-updating
//! [`UiState`](super::UiState): rebinding to a new key aborts the old
//! fetch and bumps a generation counter, and every completion message is
//! tagged with the generation it belongs to. The screen applies a
//! completion only when its generation is still current, so a stale fetch
//! that raced past the abort can never overwrite a newer state.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::ScreenMessage;
use crate::models::PostId;
use crate::traits::PostRepository;

/// Drives the fetch for the currently bound post id.
///
/// Owned by one screen instance; dropping it (or calling
/// [`shutdown`](Self::shutdown)) aborts any in-flight fetch.
pub struct UiStateBinder {
    repo: Arc<dyn PostRepository>,
    tx: mpsc::UnboundedSender<ScreenMessage>,
    key: Option<PostId>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl UiStateBinder {
    pub fn new(repo: Arc<dyn PostRepository>, tx: mpsc::UnboundedSender<ScreenMessage>) -> Self {
        Self {
            repo,
            tx,
            key: None,
            generation: 0,
            in_flight: None,
        }
    }

    /// The currently bound key.
    pub fn key(&self) -> Option<&PostId> {
        self.key.as_ref()
    }

    /// Whether a completion tagged with `generation` is still current.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Bind to `key`, starting a fetch for it.
    ///
    /// Rebinding to an equal key is a no-op. A different key aborts the
    /// previous fetch and supersedes its generation; a `None` key stops
    /// fetching entirely and leaves the screen with nothing to render.
    ///
    /// Returns `true` when the key actually changed, so the caller knows
    /// to reset its state cell to `Loading`.
    pub fn bind(&mut self, key: Option<PostId>) -> bool {
        if self.key == key {
            return false;
        }

        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        self.key = key;

        let Some(id) = self.key.clone() else {
            return true;
        };

        tracing::debug!(post_id = %id, generation = self.generation, "starting post fetch");

        let repo = self.repo.clone();
        let tx = self.tx.clone();
        let generation = self.generation;
        self.in_flight = Some(tokio::spawn(async move {
            let message = match repo.get_post(&id).await {
                Ok(post) => ScreenMessage::PostLoaded { generation, post },
                Err(err) => ScreenMessage::PostLoadFailed {
                    generation,
                    reason: err.to_string(),
                },
            };
            // Receiver gone means the screen was torn down; nothing to do
            let _ = tx.send(message);
        }));

        true
    }

    /// Abort any in-flight fetch. Called at screen teardown.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for UiStateBinder {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockRepository;
    use crate::models::Post;
    use std::time::Duration;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: format!("title {id}"),
            url: format!("https://example.com/{id}"),
            publication: None,
            author: None,
            paragraphs: vec![],
        }
    }

    #[tokio::test]
    async fn rebinding_same_key_is_a_no_op() {
        let repo = Arc::new(MockRepository::new().with_post(post("p1")));
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut binder = UiStateBinder::new(repo, tx);

        assert!(binder.bind(Some("p1".to_string())));
        let generation = binder.generation;
        assert!(!binder.bind(Some("p1".to_string())));
        assert!(binder.is_current(generation));
    }

    #[tokio::test]
    async fn superseded_fetch_is_not_current() {
        let repo = Arc::new(
            MockRepository::new()
                .with_post(post("p1"))
                .with_post(post("p2"))
                .with_fetch_delay(Duration::from_millis(50)),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut binder = UiStateBinder::new(repo, tx);

        binder.bind(Some("p1".to_string()));
        binder.bind(Some("p2".to_string()));

        // Only the p2 fetch survives; its message must carry the current
        // generation while any stray p1 message would not.
        let msg = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .unwrap()
            .unwrap();
        match msg {
            ScreenMessage::PostLoaded { generation, post } => {
                assert!(binder.is_current(generation));
                assert_eq!(post.id, "p2");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn binding_none_stops_fetching() {
        let repo = Arc::new(MockRepository::new().with_post(post("p1")));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut binder = UiStateBinder::new(repo, tx);

        binder.bind(Some("p1".to_string()));
        binder.bind(None);
        assert_eq!(binder.key(), None);

        // Whatever arrives must be stale by generation.
        tokio::time::sleep(Duration::from_millis(20)).await;
        while let Ok(msg) = rx.try_recv() {
            match msg {
                ScreenMessage::PostLoaded { generation, .. }
                | ScreenMessage::PostLoadFailed { generation, .. } => {
                    assert!(!binder.is_current(generation));
                }
                _ => {}
            }
        }
    }
}
